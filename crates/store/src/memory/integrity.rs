//! Referential integrity: cascading deletes, asset attachment, orphan scans.
//!
//! Every function here runs inside a critical section already held by the
//! caller, so a cascade and the delete that triggered it are one atomic step
//! to readers.

use favourites_core::error::CoreError;
use favourites_core::favourite::Favourite;
use favourites_core::types::AssetId;

use super::StoreState;
use crate::OrphanPolicy;

/// Remove the asset record and every favourite that references it.
///
/// Returns the number of favourites removed, or `None` if the asset did not exist.
pub(super) fn delete_asset_cascading(state: &mut StoreState, asset_id: AssetId) -> Option<usize> {
    state.assets.remove(&asset_id)?;
    Some(state.favourites.remove_all_for_asset(asset_id))
}

/// Attach the current asset to a stored favourite.
///
/// `Ok(None)` means the favourite is an orphan and the policy says skip it.
pub(super) fn attach_asset(
    state: &StoreState,
    favourite: &Favourite,
    policy: OrphanPolicy,
) -> Result<Option<Favourite>, CoreError> {
    if let Some(asset) = state.assets.get(&favourite.asset_id) {
        return Ok(Some(favourite.with_asset(asset.clone())));
    }

    match policy {
        OrphanPolicy::Fail => {
            tracing::error!(
                user_id = %favourite.user_id,
                favourite_id = %favourite.id,
                asset_id = %favourite.asset_id,
                "Favourite references a missing asset",
            );
            Err(orphan_error(favourite))
        }
        OrphanPolicy::Skip => {
            tracing::warn!(
                user_id = %favourite.user_id,
                favourite_id = %favourite.id,
                asset_id = %favourite.asset_id,
                "Skipping orphan favourite",
            );
            Ok(None)
        }
    }
}

/// Attach the current asset, or return the favourite bare if the asset is gone.
///
/// Single-favourite reads never fail on an orphan; the sanity scan and
/// listings are where orphans surface.
pub(super) fn attach_asset_or_detach(state: &StoreState, favourite: &Favourite) -> Favourite {
    match state.assets.get(&favourite.asset_id) {
        Some(asset) => favourite.with_asset(asset.clone()),
        None => {
            tracing::warn!(
                user_id = %favourite.user_id,
                favourite_id = %favourite.id,
                asset_id = %favourite.asset_id,
                "Favourite references a missing asset, returning it without one",
            );
            favourite.clone()
        }
    }
}

/// Walk all favourites and report the first whose asset is gone. Never mutates.
pub(super) fn find_orphan(state: &StoreState) -> Option<CoreError> {
    state
        .favourites
        .iter()
        .find(|fav| !state.assets.contains_key(&fav.asset_id))
        .map(orphan_error)
}

fn orphan_error(favourite: &Favourite) -> CoreError {
    CoreError::DataIntegrity {
        user_id: favourite.user_id,
        favourite_id: favourite.id,
        asset_id: favourite.asset_id,
    }
}
