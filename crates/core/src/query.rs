//! Sort-and-paginate evaluator shared by every list operation.

use std::cmp::Ordering;

use serde::Serialize;

use crate::pagination::{PageQuery, SortKey, SortOrder};
use crate::types::EntityId;

/// An item that can be ordered by the sort keys of kind `K`.
pub trait Sortable<K: SortKey> {
    /// Compare on the primary key only.
    fn compare_by(&self, other: &Self, key: K) -> Ordering;

    /// Secondary key used to break ties on the primary key.
    fn sort_id(&self) -> EntityId;
}

/// One window of a sorted collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of matching items before pagination.
    pub total: usize,
}

#[cfg(test)]
impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

/// Sort `items` by the query's key and order, then cut the requested window.
///
/// Ties on the primary key are broken by id, and `desc` reverses the whole
/// comparison, so the `desc` sequence is exactly the reverse of `asc` and
/// repeated identical queries page consistently.
pub fn paginate<T, K>(mut items: Vec<T>, query: &PageQuery<K>) -> Page<T>
where
    T: Sortable<K>,
    K: SortKey,
{
    let total = items.len();

    items.sort_by(|a, b| {
        let ord = a
            .compare_by(b, query.sort_by)
            .then_with(|| a.sort_id().cmp(&b.sort_id()));
        match query.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    if query.offset >= total {
        return Page {
            items: Vec::new(),
            total,
        };
    }

    let items = items
        .into_iter()
        .skip(query.offset)
        .take(query.limit)
        .collect();

    Page { items, total }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
