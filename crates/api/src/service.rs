//! Service layer between HTTP handlers and the store.
//!
//! Thin pass-through: it decodes and validates asset payloads, enforces the
//! page-size ceiling, and rejects empty descriptions. Everything else is
//! forwarded to the [`FavouriteStore`].

use std::sync::Arc;

use favourites_core::asset::{Asset, AssetData, AssetType};
use favourites_core::error::CoreError;
use favourites_core::favourite::Favourite;
use favourites_core::pagination::{AssetSortKey, FavouriteSortKey, PageQuery, SortKey};
use favourites_core::query::Page;
use favourites_core::types::{AssetId, FavouriteId, UserId};
use favourites_store::FavouriteStore;

use crate::query::ListParams;

pub struct FavouriteService {
    store: Arc<dyn FavouriteStore>,
    max_page_items: usize,
}

impl FavouriteService {
    pub fn new(store: Arc<dyn FavouriteStore>, max_page_items: usize) -> Self {
        Self {
            store,
            max_page_items: max_page_items.max(1),
        }
    }

    /// Normalize raw list parameters against the configured ceiling.
    pub fn page_query<K: SortKey>(&self, params: &ListParams) -> PageQuery<K> {
        PageQuery::new(
            params.limit,
            params.offset,
            params.sort_by.as_deref(),
            params.order.as_deref(),
            self.max_page_items,
        )
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    pub fn list_assets(&self, query: PageQuery<AssetSortKey>) -> Page<Asset> {
        self.store.list_assets(&query.capped(self.max_page_items))
    }

    /// Decode `data` according to `asset_type`, build the asset, and store it.
    pub fn create_asset(
        &self,
        asset_type: &str,
        description: &str,
        data: serde_json::Value,
    ) -> Result<Asset, CoreError> {
        let asset_type = AssetType::parse(asset_type)?;
        let data = AssetData::from_json(asset_type, data)?;
        let asset = Asset::new(description, data)?;

        self.store.create_asset(asset.clone())?;
        Ok(asset)
    }

    pub fn get_asset(&self, id: AssetId) -> Result<Asset, CoreError> {
        self.store.get_asset(id)
    }

    /// Replace an asset's description and return the updated asset.
    pub fn update_asset_description(
        &self,
        id: AssetId,
        description: &str,
    ) -> Result<Asset, CoreError> {
        if description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Description cannot be empty".to_string(),
            ));
        }

        let mut asset = self.store.get_asset(id)?;
        asset.updated_at = self.store.update_asset_description(id, description)?;
        asset.description = description.to_string();
        Ok(asset)
    }

    pub fn delete_asset(&self, id: AssetId) -> Result<(), CoreError> {
        self.store.delete_asset(id)
    }

    // -----------------------------------------------------------------------
    // Favourites
    // -----------------------------------------------------------------------

    pub fn list_favourites(
        &self,
        user_id: UserId,
        query: PageQuery<FavouriteSortKey>,
    ) -> Result<Page<Favourite>, CoreError> {
        self.store
            .list_favourites(user_id, &query.capped(self.max_page_items))
    }

    /// Favourite `asset_id` for `user_id`, returning the favourite with its asset.
    pub fn add_favourite(&self, user_id: UserId, asset_id: AssetId) -> Result<Favourite, CoreError> {
        let asset = self.store.get_asset(asset_id)?;

        if self.store.is_favourite(user_id, asset_id) {
            return Err(CoreError::AlreadyExists(format!(
                "Asset {asset_id} is already a favourite of user {user_id}"
            )));
        }

        let favourite = Favourite::new(user_id, asset_id);
        self.store.add_favourite(favourite.clone())?;
        Ok(favourite.with_asset(asset))
    }

    pub fn get_favourite(
        &self,
        user_id: UserId,
        favourite_id: FavouriteId,
    ) -> Result<Favourite, CoreError> {
        self.store.get_favourite(user_id, favourite_id)
    }

    pub fn remove_favourite(
        &self,
        user_id: UserId,
        favourite_id: FavouriteId,
    ) -> Result<(), CoreError> {
        self.store.remove_favourite(user_id, favourite_id)
    }

    pub fn is_favourite(&self, user_id: UserId, asset_id: AssetId) -> bool {
        self.store.is_favourite(user_id, asset_id)
    }

    // -----------------------------------------------------------------------
    // Health
    // -----------------------------------------------------------------------

    pub fn health_check(&self) -> Result<(), CoreError> {
        self.store.ping()
    }

    pub fn integrity_check(&self) -> Result<(), CoreError> {
        self.store.sanity()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
