//! Favouritable assets and their type-specific payloads.
//!
//! An asset's payload is a closed tagged union over [`AssetType`]. Payloads
//! are decoded and validated here, before an asset ever reaches the store;
//! the store treats [`AssetData`] as opaque.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::pagination::AssetSortKey;
use crate::query::Sortable;
use crate::types::{AssetId, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Asset type
// ---------------------------------------------------------------------------

/// The closed set of favouritable asset kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Chart,
    Insight,
    Audience,
}

/// All valid asset type names, as accepted on the wire.
pub const VALID_ASSET_TYPES: &[&str] = &["chart", "insight", "audience"];

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Chart => "chart",
            AssetType::Insight => "insight",
            AssetType::Audience => "audience",
        }
    }

    /// Parse a wire name into an asset type.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "chart" => Ok(AssetType::Chart),
            "insight" => Ok(AssetType::Insight),
            "audience" => Ok(AssetType::Audience),
            other => Err(CoreError::Validation(format!(
                "Invalid asset type: '{other}'. Valid types: {}",
                VALID_ASSET_TYPES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Chart payload: a titled 2D series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub title: String,
    pub axis_x_title: String,
    pub axis_y_title: String,
    pub data: Vec<Vec<f64>>,
}

/// Insight payload: a short piece of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightData {
    pub text: String,
}

/// Audience payload: demographic characteristics of a segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudienceData {
    pub gender: String,
    pub birth_country: String,
    /// Age brackets such as `"18-24"`.
    pub age_groups: Vec<String>,
    pub hours_social_daily: f64,
    pub purchases_last_month: i64,
}

/// Type-specific asset payload.
///
/// Serialized untagged: the tag lives on [`Asset::asset_type`], so the wire
/// shape of an asset is `{ "type": ..., "data": { ... } }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AssetData {
    Chart(ChartData),
    Insight(InsightData),
    Audience(AudienceData),
}

impl AssetData {
    pub fn asset_type(&self) -> AssetType {
        match self {
            AssetData::Chart(_) => AssetType::Chart,
            AssetData::Insight(_) => AssetType::Insight,
            AssetData::Audience(_) => AssetType::Audience,
        }
    }

    /// Decode a raw JSON payload according to `asset_type`, then validate it.
    pub fn from_json(asset_type: AssetType, value: serde_json::Value) -> Result<Self, CoreError> {
        if value.is_null() {
            return Err(CoreError::Validation("Missing asset data".to_string()));
        }

        let data = match asset_type {
            AssetType::Chart => AssetData::Chart(decode(asset_type, value)?),
            AssetType::Insight => AssetData::Insight(decode(asset_type, value)?),
            AssetType::Audience => AssetData::Audience(decode(asset_type, value)?),
        };

        data.validate()?;
        Ok(data)
    }

    /// Check the required field of each payload kind.
    pub fn validate(&self) -> Result<(), CoreError> {
        let missing = match self {
            AssetData::Chart(chart) if chart.title.trim().is_empty() => Some("title"),
            AssetData::Insight(insight) if insight.text.trim().is_empty() => Some("text"),
            AssetData::Audience(audience) if audience.gender.trim().is_empty() => Some("gender"),
            _ => None,
        };

        match missing {
            Some(field) => Err(CoreError::Validation(format!(
                "Invalid {} data: '{field}' is required",
                self.asset_type()
            ))),
            None => Ok(()),
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    asset_type: AssetType,
    value: serde_json::Value,
) -> Result<T, CoreError> {
    serde_json::from_value(value)
        .map_err(|e| CoreError::Validation(format!("Invalid {asset_type} data: {e}")))
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// A catalog item that users can favourite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub id: AssetId,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub description: String,
    pub data: AssetData,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    /// Build a new asset with a fresh id and `created_at == updated_at`.
    ///
    /// The payload is validated first; an invalid payload never yields an asset.
    pub fn new(description: impl Into<String>, data: AssetData) -> Result<Self, CoreError> {
        data.validate()?;

        let now = chrono::Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4(),
            asset_type: data.asset_type(),
            description: description.into(),
            data,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Sortable<AssetSortKey> for Asset {
    fn compare_by(&self, other: &Self, key: AssetSortKey) -> Ordering {
        match key {
            AssetSortKey::CreatedAt => self.created_at.cmp(&other.created_at),
            AssetSortKey::UpdatedAt => self.updated_at.cmp(&other.updated_at),
            AssetSortKey::Type => self.asset_type.as_str().cmp(other.asset_type.as_str()),
            AssetSortKey::Description => self.description.cmp(&other.description),
        }
    }

    fn sort_id(&self) -> EntityId {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
