use crate::types::{AssetId, EntityId, FavouriteId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// A favourite references an asset that no longer exists.
    #[error(
        "Data integrity violation: orphan favourite \
         (user_id: {user_id}, favourite_id: {favourite_id}, asset_id: {asset_id})"
    )]
    DataIntegrity {
        user_id: UserId,
        favourite_id: FavouriteId,
        asset_id: AssetId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}
