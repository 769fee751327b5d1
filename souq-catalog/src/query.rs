//! The filter/sort/search pipeline
//!
//! A deterministic pure transform from (products, query) to a derived list.
//! Sorting relies on the stable `slice::sort_by`; name ordering accepts a
//! pluggable collation so a browser front end can supply a locale-aware
//! comparator while this crate stays platform-agnostic.

use crate::price::price_sort_key;
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Display language for localized field selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    En,
    #[default]
    Ar,
}

impl Language {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a persisted language code; anything unrecognized falls back to
    /// the app default (Arabic).
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Self::En,
            _ => Self::Ar,
        }
    }
}

/// Catalog ordering selected in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortMode {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortMode {
    /// Stable code used for the `<select>` values and persistence.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "name-asc" => Self::NameAsc,
            _ => Self::Default,
        }
    }
}

/// The full state of the filter/sort/search controls
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogQuery {
    /// Selected localized category; `None` means "All"
    pub category: Option<String>,
    pub search: String,
    pub sort: SortMode,
    pub lang: Language,
}

/// Apply the query with code-point name ordering.
#[must_use]
pub fn apply(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    apply_with_collation(products, query, str::cmp)
}

/// Apply the query with a caller-supplied name collation.
#[must_use]
pub fn apply_with_collation(
    products: &[Product],
    query: &CatalogQuery,
    collate: impl Fn(&str, &str) -> Ordering,
) -> Vec<Product> {
    let lang = query.lang;
    let needle = query.search.trim().to_lowercase();

    let mut derived: Vec<Product> = products
        .iter()
        .filter(|p| {
            query
                .category
                .as_deref()
                .is_none_or(|cat| p.localized_category(lang) == cat)
        })
        .filter(|p| needle.is_empty() || matches_search(p, lang, &needle))
        .cloned()
        .collect();

    match query.sort {
        SortMode::Default => {}
        SortMode::PriceAsc => {
            derived.sort_by(|a, b| price_sort_key(a).total_cmp(&price_sort_key(b)));
        }
        SortMode::PriceDesc => {
            derived.sort_by(|a, b| price_sort_key(b).total_cmp(&price_sort_key(a)));
        }
        SortMode::NameAsc => {
            derived.sort_by(|a, b| collate(a.localized_name(lang), b.localized_name(lang)));
        }
    }

    derived
}

/// Case-insensitive substring match against the localized name, description,
/// and every option's localized name/info.
fn matches_search(product: &Product, lang: Language, needle: &str) -> bool {
    if product.localized_name(lang).to_lowercase().contains(needle)
        || product
            .localized_description(lang)
            .to_lowercase()
            .contains(needle)
    {
        return true;
    }
    product.options.iter().any(|opt| {
        opt.localized_name(lang).to_lowercase().contains(needle)
            || opt.localized_info(lang).to_lowercase().contains(needle)
    })
}

/// Unique localized categories in first-seen order; drives the filter bar.
#[must_use]
pub fn categories(products: &[Product], lang: Language) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        let cat = product.localized_category(lang);
        if !cat.is_empty() && !seen.iter().any(|s| s == cat) {
            seen.push(cat.to_string());
        }
    }
    seen
}
