//! Storage contract for assets and favourites, and its in-memory engine.
//!
//! The service layer depends only on [`FavouriteStore`]; [`MemoryStore`] is
//! the one implementation. Every operation is synchronous and completes in
//! a single critical section.

pub mod memory;

use favourites_core::asset::Asset;
use favourites_core::error::CoreError;
use favourites_core::favourite::Favourite;
use favourites_core::pagination::{AssetSortKey, FavouriteSortKey, PageQuery};
use favourites_core::query::Page;
use favourites_core::types::{AssetId, FavouriteId, Timestamp, UserId};

pub use memory::MemoryStore;

/// Storage operations consumed by the service layer.
pub trait FavouriteStore: Send + Sync {
    // --- Assets ---

    /// Store `asset` verbatim. Fails with `AlreadyExists` if the id is taken.
    fn create_asset(&self, asset: Asset) -> Result<(), CoreError>;

    fn get_asset(&self, id: AssetId) -> Result<Asset, CoreError>;

    /// Replace the description and bump `updated_at`, returning the new value.
    fn update_asset_description(
        &self,
        id: AssetId,
        description: &str,
    ) -> Result<Timestamp, CoreError>;

    /// Remove the asset together with every favourite that references it.
    fn delete_asset(&self, id: AssetId) -> Result<(), CoreError>;

    fn list_assets(&self, query: &PageQuery<AssetSortKey>) -> Page<Asset>;

    // --- Favourites (user-scoped) ---

    /// Fails with `NotFound` if the asset is missing and `AlreadyExists` if
    /// the user already favourited it.
    fn add_favourite(&self, favourite: Favourite) -> Result<(), CoreError>;

    fn remove_favourite(&self, user_id: UserId, favourite_id: FavouriteId)
        -> Result<(), CoreError>;

    fn is_favourite(&self, user_id: UserId, asset_id: AssetId) -> bool;

    /// Fetch one favourite with its current asset attached.
    ///
    /// A favourite whose asset is gone comes back without one.
    fn get_favourite(
        &self,
        user_id: UserId,
        favourite_id: FavouriteId,
    ) -> Result<Favourite, CoreError>;

    /// List a user's favourites with assets attached.
    fn list_favourites(
        &self,
        user_id: UserId,
        query: &PageQuery<FavouriteSortKey>,
    ) -> Result<Page<Favourite>, CoreError>;

    // --- Health ---

    /// Read-only scan for orphan favourites. Reports the first one found.
    fn sanity(&self) -> Result<(), CoreError>;

    fn ping(&self) -> Result<(), CoreError>;
}

/// How `list_favourites` treats a favourite whose asset is gone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Fail the whole call with `CoreError::DataIntegrity`.
    #[default]
    Fail,
    /// Leave the orphan out and log a warning.
    Skip,
}

impl OrphanPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Some(OrphanPolicy::Fail),
            "skip" => Some(OrphanPolicy::Skip),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrphanPolicy::Fail => "fail",
            OrphanPolicy::Skip => "skip",
        }
    }
}
