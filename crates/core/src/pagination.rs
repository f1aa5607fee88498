//! Page query normalization.
//!
//! A [`PageQuery`] is always well-formed once constructed: every raw input
//! is clamped or defaulted here, so the store never sees invalid values.

use std::fmt::Debug;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Page-size ceiling used when none is configured.
pub const DEFAULT_MAX_PAGE_ITEMS: usize = 100;

/// Default sort key name for every entity kind.
pub const DEFAULT_SORT_BY: &str = "created_at";

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` / `desc` falls back to `desc`.
    pub fn parse_or_default(s: Option<&str>) -> Self {
        match s {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// A whitelist of sortable fields for one entity kind.
pub trait SortKey: Copy + Default + Debug + PartialEq {
    fn parse(s: &str) -> Option<Self>;
    fn as_str(&self) -> &'static str;

    /// Unknown or missing keys fall back to the default (`created_at`).
    fn parse_or_default(s: Option<&str>) -> Self {
        s.and_then(Self::parse).unwrap_or_default()
    }
}

/// Sortable fields of the asset catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetSortKey {
    #[default]
    CreatedAt,
    UpdatedAt,
    Type,
    Description,
}

impl SortKey for AssetSortKey {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            "type" => Some(Self::Type),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::Type => "type",
            Self::Description => "description",
        }
    }
}

/// Sortable fields of a user's favourites.
///
/// `Type` and `Description` refer to the attached asset; `CreatedAt` is the
/// favourite's own timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavouriteSortKey {
    #[default]
    CreatedAt,
    Type,
    Description,
}

impl SortKey for FavouriteSortKey {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "created_at" => Some(Self::CreatedAt),
            "type" => Some(Self::Type),
            "description" => Some(Self::Description),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Type => "type",
            Self::Description => "description",
        }
    }
}

// ---------------------------------------------------------------------------
// Page query
// ---------------------------------------------------------------------------

/// Normalized pagination and sort specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageQuery<K: SortKey> {
    /// Always in `[1, max_items]`.
    pub limit: usize,
    pub offset: usize,
    pub sort_by: K,
    pub order: SortOrder,
}

impl<K: SortKey> PageQuery<K> {
    /// Normalize raw query inputs against the page-size ceiling `max_items`.
    pub fn new(
        limit: Option<i64>,
        offset: Option<i64>,
        sort_by: Option<&str>,
        order: Option<&str>,
        max_items: usize,
    ) -> Self {
        Self {
            limit: clamp_limit(limit, max_items),
            offset: clamp_offset(offset),
            sort_by: K::parse_or_default(sort_by),
            order: SortOrder::parse_or_default(order),
        }
    }

    /// Re-apply a (possibly lower) page-size ceiling.
    pub fn capped(mut self, max_items: usize) -> Self {
        self.limit = self.limit.min(max_items.max(1));
        self
    }
}

impl<K: SortKey> Default for PageQuery<K> {
    fn default() -> Self {
        Self::new(None, None, None, None, DEFAULT_MAX_PAGE_ITEMS)
    }
}

/// Clamp a user-provided limit into `[1, max]`.
///
/// Missing, zero, or negative limits mean "a full page" (`max`).
pub fn clamp_limit(limit: Option<i64>, max: usize) -> usize {
    let max = max.max(1);
    match limit {
        Some(l) if l > 0 => usize::try_from(l).map_or(max, |l| l.min(max)),
        _ => max,
    }
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> usize {
    offset
        .and_then(|o| usize::try_from(o).ok())
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 100;

    #[test]
    fn valid_query_is_kept() {
        let q = PageQuery::<AssetSortKey>::new(Some(50), Some(10), Some("type"), Some("asc"), MAX);
        assert_eq!(q.limit, 50);
        assert_eq!(q.offset, 10);
        assert_eq!(q.sort_by, AssetSortKey::Type);
        assert_eq!(q.order, SortOrder::Asc);
    }

    #[test]
    fn defaults_applied_for_missing_inputs() {
        let q = PageQuery::<AssetSortKey>::new(None, None, None, None, MAX);
        assert_eq!(q.limit, MAX);
        assert_eq!(q.offset, 0);
        assert_eq!(q.sort_by, AssetSortKey::CreatedAt);
        assert_eq!(q.order, SortOrder::Desc);
    }

    #[test]
    fn zero_limit_means_full_page() {
        let q = PageQuery::<AssetSortKey>::new(Some(0), None, None, None, MAX);
        assert_eq!(q.limit, MAX);
    }

    #[test]
    fn limit_exceeding_ceiling_is_clamped() {
        let q = PageQuery::<AssetSortKey>::new(Some(2 * MAX as i64), Some(5), None, None, MAX);
        assert_eq!(q.limit, MAX);
        assert_eq!(q.offset, 5);
    }

    #[test]
    fn negative_offset_is_corrected() {
        let q = PageQuery::<AssetSortKey>::new(Some(10), Some(-10), None, Some("asc"), MAX);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn invalid_order_defaults_to_desc() {
        let q = PageQuery::<AssetSortKey>::new(None, None, None, Some("sideways"), MAX);
        assert_eq!(q.order, SortOrder::Desc);
    }

    #[test]
    fn unknown_sort_key_defaults_to_created_at() {
        let q = PageQuery::<AssetSortKey>::new(None, None, Some("rating"), None, MAX);
        assert_eq!(q.sort_by, AssetSortKey::CreatedAt);
    }

    #[test]
    fn favourite_whitelist_excludes_updated_at() {
        assert_eq!(FavouriteSortKey::parse("updated_at"), None);
        assert_eq!(AssetSortKey::parse("updated_at"), Some(AssetSortKey::UpdatedAt));
    }

    #[test]
    fn sort_key_names_round_trip() {
        for key in [
            AssetSortKey::CreatedAt,
            AssetSortKey::UpdatedAt,
            AssetSortKey::Type,
            AssetSortKey::Description,
        ] {
            assert_eq!(AssetSortKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn capped_lowers_limit_but_never_below_one() {
        let q = PageQuery::<FavouriteSortKey>::new(Some(80), None, None, None, MAX);
        assert_eq!(q.capped(20).limit, 20);
        assert_eq!(q.capped(0).limit, 1);
        assert_eq!(q.capped(500).limit, 80);
    }

    #[test]
    fn clamp_limit_handles_degenerate_ceiling() {
        assert_eq!(clamp_limit(Some(10), 0), 1);
        assert_eq!(clamp_limit(None, 0), 1);
    }
}
