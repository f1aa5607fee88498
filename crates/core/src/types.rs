/// Every entity is keyed by a random (v4) UUID.
pub type EntityId = uuid::Uuid;

pub type AssetId = EntityId;
pub type FavouriteId = EntityId;

/// Users are opaque foreign keys; there is no user entity.
pub type UserId = EntityId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
