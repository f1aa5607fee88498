//! A user's pin on one asset.

use std::cmp::Ordering;

use serde::Serialize;

use crate::asset::Asset;
use crate::pagination::FavouriteSortKey;
use crate::query::Sortable;
use crate::types::{AssetId, EntityId, FavouriteId, Timestamp, UserId};

/// A favourite, unique per `(user_id, asset_id)`.
///
/// `asset` is transient: read paths attach a fresh copy of the referenced
/// asset, but it is never part of the stored record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favourite {
    pub id: FavouriteId,
    pub user_id: UserId,
    pub asset_id: AssetId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
    pub created_at: Timestamp,
}

impl Favourite {
    pub fn new(user_id: UserId, asset_id: AssetId) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            asset_id,
            asset: None,
            created_at: chrono::Utc::now(),
        }
    }

    /// Return a copy carrying `asset`.
    pub fn with_asset(&self, asset: Asset) -> Self {
        Self {
            asset: Some(asset),
            ..self.clone()
        }
    }
}

impl Sortable<FavouriteSortKey> for Favourite {
    fn compare_by(&self, other: &Self, key: FavouriteSortKey) -> Ordering {
        match key {
            FavouriteSortKey::CreatedAt => self.created_at.cmp(&other.created_at),
            FavouriteSortKey::Type => {
                let lhs = self.asset.as_ref().map(|a| a.asset_type.as_str());
                let rhs = other.asset.as_ref().map(|a| a.asset_type.as_str());
                lhs.cmp(&rhs)
            }
            FavouriteSortKey::Description => {
                let lhs = self.asset.as_ref().map(|a| a.description.as_str());
                let rhs = other.asset.as_ref().map(|a| a.description.as_str());
                lhs.cmp(&rhs)
            }
        }
    }

    fn sort_id(&self) -> EntityId {
        self.id
    }
}
