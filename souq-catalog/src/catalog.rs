use crate::product::Product;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors produced while loading catalog data
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog payload is not a JSON array")]
    NotAnArray,
    #[error("catalog payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Container for the normalized product list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests and the degraded
    /// fetch-failure state)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Create a catalog from pre-parsed products, applying the same
    /// normalization rules as [`Catalog::from_json`].
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().filter(qualifies).collect(),
        }
    }

    /// Load and normalize catalog data from a JSON string.
    ///
    /// The payload must be a JSON array. Records that fail to deserialize,
    /// have an empty name, or carry no options are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid JSON or not an array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(entries) = value else {
            return Err(CatalogError::NotAnArray);
        };

        let total = entries.len();
        let products: Vec<Product> = entries
            .into_iter()
            .filter_map(|entry| serde_json::from_value::<Product>(entry).ok())
            .filter(|p| qualifies(p))
            .collect();
        if products.len() < total {
            log::warn!(
                "dropped {} malformed or incomplete product record(s)",
                total - products.len()
            );
        }

        Ok(Self { products })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

/// A product qualifies for the catalog only with a non-empty name and at
/// least one option.
fn qualifies(product: &Product) -> bool {
    !product.name.is_empty() && !product.options.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductOption;

    #[test]
    fn from_json_parses_well_formed_records() {
        let json = r#"[
            {
                "Name": "Stream Max",
                "Name_ar": "ستريم ماكس",
                "Category": "Streaming",
                "options": [
                    { "name": "Monthly", "name_ar": "شهري", "price": "15 $" }
                ]
            }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products[0].name, "Stream Max");
        assert_eq!(catalog.products[0].options[0].price, "15 $");
    }

    #[test]
    fn from_json_rejects_non_array_payloads() {
        assert!(matches!(
            Catalog::from_json(r#"{"Name": "Solo"}"#),
            Err(CatalogError::NotAnArray)
        ));
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn normalization_drops_incomplete_records() {
        let json = r#"[
            { "Name": "", "options": [{ "name": "x", "price": "1 $" }] },
            { "Name": "No Options", "options": [] },
            { "Name": "Missing Options" },
            { "options": "garbage" },
            { "Name": "Keeper", "options": [{ "name": "x", "price": "1 $" }] }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products[0].name, "Keeper");
    }

    #[test]
    fn from_products_applies_the_same_rules() {
        let keep = Product {
            name: "Keeper".to_string(),
            options: vec![ProductOption::default()],
            ..Product::default()
        };
        let nameless = Product {
            options: vec![ProductOption::default()],
            ..Product::default()
        };
        let catalog = Catalog::from_products(vec![keep, nameless]);
        assert_eq!(catalog.len(), 1);
    }
}
