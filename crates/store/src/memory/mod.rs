//! In-memory store behind a single readers-writer lock.
//!
//! Reads (`get_*`, `list_*`, `is_favourite`, `sanity`) share the lock;
//! every mutation holds it exclusively for the whole operation, cascade
//! included, so readers see either the state before a write or after it.
//!
//! Costs, with `M` the user's favourite count and `N` the listed item count:
//!
//! | Operation | Cost |
//! |---|---|
//! | asset get / create / update | O(1) |
//! | `add_favourite`, `is_favourite` | O(M) scan of the user's own favourites |
//! | `remove_favourite`, `get_favourite` | O(1) |
//! | `list_assets`, `list_favourites` | O(N log N) for the sort |
//! | `delete_asset` | O(F), F = favourites of that asset (reverse index) |
//!
//! The single lock serializes all writers regardless of user or asset.
//! Sharding would mean per-user locks for favourites and a separate one for
//! the catalog, with `delete_asset` taking both.

mod index;
mod integrity;

use std::collections::HashMap;

use parking_lot::RwLock;

use favourites_core::asset::Asset;
use favourites_core::error::CoreError;
use favourites_core::favourite::Favourite;
use favourites_core::pagination::{AssetSortKey, FavouriteSortKey, PageQuery};
use favourites_core::query::{paginate, Page};
use favourites_core::types::{AssetId, FavouriteId, Timestamp, UserId};

use crate::{FavouriteStore, OrphanPolicy};
use index::FavouriteIndex;

#[derive(Debug, Default)]
struct StoreState {
    assets: HashMap<AssetId, Asset>,
    favourites: FavouriteIndex,
}

/// Thread-safe in-memory [`FavouriteStore`].
///
/// Designed to be wrapped in `Arc` and shared across request handlers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
    orphan_policy: OrphanPolicy,
}

impl MemoryStore {
    /// Create an empty store using the default (`Fail`) orphan policy.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orphan_policy(orphan_policy: OrphanPolicy) -> Self {
        Self {
            state: RwLock::default(),
            orphan_policy,
        }
    }

    pub fn asset_count(&self) -> usize {
        self.state.read().assets.len()
    }

    pub fn favourite_count(&self) -> usize {
        self.state.read().favourites.len()
    }
}

impl FavouriteStore for MemoryStore {
    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    fn create_asset(&self, asset: Asset) -> Result<(), CoreError> {
        let mut state = self.state.write();

        if state.assets.contains_key(&asset.id) {
            return Err(CoreError::AlreadyExists(format!(
                "Asset with id {} already exists",
                asset.id
            )));
        }

        state.assets.insert(asset.id, asset);
        Ok(())
    }

    fn get_asset(&self, id: AssetId) -> Result<Asset, CoreError> {
        self.state
            .read()
            .assets
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "Asset", id })
    }

    fn update_asset_description(
        &self,
        id: AssetId,
        description: &str,
    ) -> Result<Timestamp, CoreError> {
        let mut state = self.state.write();
        let asset = state
            .assets
            .get_mut(&id)
            .ok_or(CoreError::NotFound { entity: "Asset", id })?;

        asset.description = description.to_string();
        asset.updated_at = next_update_time(asset.updated_at);
        Ok(asset.updated_at)
    }

    fn delete_asset(&self, id: AssetId) -> Result<(), CoreError> {
        let mut state = self.state.write();

        let removed = integrity::delete_asset_cascading(&mut state, id)
            .ok_or(CoreError::NotFound { entity: "Asset", id })?;

        tracing::debug!(asset_id = %id, favourites_removed = removed, "Asset deleted with cascade");
        Ok(())
    }

    fn list_assets(&self, query: &PageQuery<AssetSortKey>) -> Page<Asset> {
        let state = self.state.read();
        let assets: Vec<Asset> = state.assets.values().cloned().collect();
        paginate(assets, query)
    }

    // -----------------------------------------------------------------------
    // Favourites
    // -----------------------------------------------------------------------

    fn add_favourite(&self, favourite: Favourite) -> Result<(), CoreError> {
        let mut state = self.state.write();

        if !state.assets.contains_key(&favourite.asset_id) {
            return Err(CoreError::NotFound {
                entity: "Asset",
                id: favourite.asset_id,
            });
        }

        if state
            .favourites
            .find_by_asset(favourite.user_id, favourite.asset_id)
            .is_some()
        {
            return Err(CoreError::AlreadyExists(format!(
                "Asset {} is already a favourite of user {}",
                favourite.asset_id, favourite.user_id
            )));
        }

        state.favourites.insert(favourite);
        Ok(())
    }

    fn remove_favourite(
        &self,
        user_id: UserId,
        favourite_id: FavouriteId,
    ) -> Result<(), CoreError> {
        self.state
            .write()
            .favourites
            .remove(user_id, favourite_id)
            .map(|_| ())
            .ok_or(CoreError::NotFound {
                entity: "Favourite",
                id: favourite_id,
            })
    }

    fn is_favourite(&self, user_id: UserId, asset_id: AssetId) -> bool {
        self.state
            .read()
            .favourites
            .find_by_asset(user_id, asset_id)
            .is_some()
    }

    fn get_favourite(
        &self,
        user_id: UserId,
        favourite_id: FavouriteId,
    ) -> Result<Favourite, CoreError> {
        let state = self.state.read();
        let favourite = state
            .favourites
            .get(user_id, favourite_id)
            .ok_or(CoreError::NotFound {
                entity: "Favourite",
                id: favourite_id,
            })?;

        Ok(integrity::attach_asset_or_detach(&state, favourite))
    }

    fn list_favourites(
        &self,
        user_id: UserId,
        query: &PageQuery<FavouriteSortKey>,
    ) -> Result<Page<Favourite>, CoreError> {
        let state = self.state.read();

        let mut favourites = Vec::new();
        for favourite in state.favourites.user_favourites(user_id) {
            if let Some(attached) = integrity::attach_asset(&state, favourite, self.orphan_policy)? {
                favourites.push(attached);
            }
        }

        Ok(paginate(favourites, query))
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    fn sanity(&self) -> Result<(), CoreError> {
        let state = self.state.read();

        match integrity::find_orphan(&state) {
            Some(err) => Err(err),
            None => {
                tracing::debug!(
                    assets = state.assets.len(),
                    favourites = state.favourites.len(),
                    "Sanity scan found no orphan favourites",
                );
                Ok(())
            }
        }
    }

    fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

/// The current time, or one tick past `previous` if the clock has not moved.
fn next_update_time(previous: Timestamp) -> Timestamp {
    let now = chrono::Utc::now();
    if now > previous {
        now
    } else {
        previous + chrono::Duration::microseconds(1)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
