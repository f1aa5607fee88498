//! Per-user favourite index with an asset reverse index.
//!
//! Favourites are keyed by user, then by favourite id, so per-user listing
//! and single lookups never touch other users. The reverse index maps each
//! asset to the `(user, favourite)` pairs pointing at it; it costs one set
//! entry per favourite and bounds cascading deletes by the asset's own
//! favouriters instead of the total favourite count.

use std::collections::{HashMap, HashSet};

use favourites_core::favourite::Favourite;
use favourites_core::types::{AssetId, FavouriteId, UserId};

#[derive(Debug, Default)]
pub(crate) struct FavouriteIndex {
    by_user: HashMap<UserId, HashMap<FavouriteId, Favourite>>,
    by_asset: HashMap<AssetId, HashSet<(UserId, FavouriteId)>>,
}

impl FavouriteIndex {
    /// Find the user's favourite for `asset_id`, scanning only that user.
    pub(crate) fn find_by_asset(&self, user_id: UserId, asset_id: AssetId) -> Option<&Favourite> {
        self.by_user
            .get(&user_id)?
            .values()
            .find(|fav| fav.asset_id == asset_id)
    }

    pub(crate) fn get(&self, user_id: UserId, favourite_id: FavouriteId) -> Option<&Favourite> {
        self.by_user.get(&user_id)?.get(&favourite_id)
    }

    pub(crate) fn user_favourites(&self, user_id: UserId) -> impl Iterator<Item = &Favourite> {
        self.by_user.get(&user_id).into_iter().flat_map(|m| m.values())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Favourite> {
        self.by_user.values().flat_map(|m| m.values())
    }

    pub(crate) fn len(&self) -> usize {
        self.by_user.values().map(HashMap::len).sum()
    }

    /// Insert without uniqueness checks; callers check first.
    pub(crate) fn insert(&mut self, mut favourite: Favourite) {
        favourite.asset = None;
        self.by_asset
            .entry(favourite.asset_id)
            .or_default()
            .insert((favourite.user_id, favourite.id));
        self.by_user
            .entry(favourite.user_id)
            .or_default()
            .insert(favourite.id, favourite);
    }

    pub(crate) fn remove(
        &mut self,
        user_id: UserId,
        favourite_id: FavouriteId,
    ) -> Option<Favourite> {
        let user_favs = self.by_user.get_mut(&user_id)?;
        let removed = user_favs.remove(&favourite_id)?;
        if user_favs.is_empty() {
            self.by_user.remove(&user_id);
        }

        if let Some(refs) = self.by_asset.get_mut(&removed.asset_id) {
            refs.remove(&(user_id, favourite_id));
            if refs.is_empty() {
                self.by_asset.remove(&removed.asset_id);
            }
        }

        Some(removed)
    }

    /// Drop every favourite that references `asset_id`. Returns how many.
    pub(crate) fn remove_all_for_asset(&mut self, asset_id: AssetId) -> usize {
        let Some(refs) = self.by_asset.remove(&asset_id) else {
            return 0;
        };

        let mut removed = 0;
        for (user_id, favourite_id) in refs {
            if let Some(user_favs) = self.by_user.get_mut(&user_id) {
                if user_favs.remove(&favourite_id).is_some() {
                    removed += 1;
                }
                if user_favs.is_empty() {
                    self.by_user.remove(&user_id);
                }
            }
        }
        removed
    }

    /// Reverse-index entries pointing at `asset_id`.
    #[cfg(test)]
    pub(crate) fn referencing(&self, asset_id: AssetId) -> usize {
        self.by_asset.get(&asset_id).map_or(0, HashSet::len)
    }
}
