//! Domain layer for the favourites backend.
//!
//! Holds the entity types, the error taxonomy shared by every crate, page
//! query normalization, and the sort-and-paginate evaluator. This crate has
//! no internal dependencies so the store, the API, and tests can all use it.

pub mod asset;
pub mod error;
pub mod favourite;
pub mod pagination;
pub mod query;
pub mod types;
