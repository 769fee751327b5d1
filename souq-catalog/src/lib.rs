//! Souq Catalog Engine
//!
//! Platform-agnostic catalog logic for the Souq storefront.
//! This crate provides the product model, JSON normalization, price parsing
//! and the filter/sort/search pipeline without UI or browser dependencies.

pub mod catalog;
pub mod price;
pub mod product;
pub mod query;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError};
pub use price::{PriceRange, currency_suffix, parse_amount, price_sort_key};
pub use product::{Product, ProductOption};
pub use query::{CatalogQuery, Language, SortMode, apply, apply_with_collation, categories};
