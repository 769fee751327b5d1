use crate::query::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new("[^a-zA-Z0-9]+").expect("valid regex"));

/// A purchasable variant of a product (e.g. a subscription tier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProductOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub info_ar: String,
    /// Price string embedding a numeric amount and a currency suffix
    #[serde(default)]
    pub price: String,
}

impl ProductOption {
    /// Option name in the requested language. Option fields do not fall back
    /// to the other language.
    #[must_use]
    pub fn localized_name(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.name,
            Language::Ar => &self.name_ar,
        }
    }

    /// Option description in the requested language.
    #[must_use]
    pub fn localized_info(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.info,
            Language::Ar => &self.info_ar,
        }
    }
}

/// A product in the catalog
///
/// Field names mirror the upstream JSON feed. Localized variants are
/// optional; lookups fall back to the base field when a variant is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Product {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Name_en", default)]
    pub name_en: Option<String>,
    #[serde(rename = "Name_ar", default)]
    pub name_ar: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Description_en", default)]
    pub description_en: Option<String>,
    #[serde(rename = "Description_ar", default)]
    pub description_ar: Option<String>,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Category_en", default)]
    pub category_en: Option<String>,
    #[serde(rename = "Category_ar", default)]
    pub category_ar: Option<String>,
    /// Free-form availability marker; `"out of stock"` disables ordering
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "ImageURL", default)]
    pub image_url: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
}

impl Product {
    fn pick<'a>(variant: Option<&'a String>, base: &'a str) -> &'a str {
        variant.map_or(base, |v| v.as_str())
    }

    /// Product name in the requested language, falling back to the base name.
    #[must_use]
    pub fn localized_name(&self, lang: Language) -> &str {
        match lang {
            Language::En => Self::pick(self.name_en.as_ref(), &self.name),
            Language::Ar => Self::pick(self.name_ar.as_ref(), &self.name),
        }
    }

    /// Product description in the requested language.
    #[must_use]
    pub fn localized_description(&self, lang: Language) -> &str {
        match lang {
            Language::En => Self::pick(self.description_en.as_ref(), &self.description),
            Language::Ar => Self::pick(self.description_ar.as_ref(), &self.description),
        }
    }

    /// Category label in the requested language; drives the filter bar.
    #[must_use]
    pub fn localized_category(&self, lang: Language) -> &str {
        match lang {
            Language::En => Self::pick(self.category_en.as_ref(), &self.category),
            Language::Ar => Self::pick(self.category_ar.as_ref(), &self.category),
        }
    }

    /// Whether the product is marked out of stock (case-insensitive).
    #[must_use]
    pub fn is_out_of_stock(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("out of stock"))
    }

    /// URL-safe identifier derived from the base name, used for the external
    /// details link.
    #[must_use]
    pub fn slug(&self) -> String {
        SLUG_CHARS.replace_all(&self.name, "-").to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_names() -> Product {
        Product {
            name: "Music Plus".to_string(),
            name_ar: Some("ميوزك بلس".to_string()),
            description: "Streaming".to_string(),
            category: "Music".to_string(),
            category_ar: Some("موسيقى".to_string()),
            ..Product::default()
        }
    }

    #[test]
    fn localized_fields_fall_back_to_base() {
        let p = product_with_names();
        assert_eq!(p.localized_name(Language::En), "Music Plus");
        assert_eq!(p.localized_name(Language::Ar), "ميوزك بلس");
        assert_eq!(p.localized_description(Language::Ar), "Streaming");
        assert_eq!(p.localized_category(Language::Ar), "موسيقى");
    }

    #[test]
    fn out_of_stock_is_case_insensitive() {
        let mut p = product_with_names();
        assert!(!p.is_out_of_stock());
        p.status = Some("Out Of Stock".to_string());
        assert!(p.is_out_of_stock());
        p.status = Some("available".to_string());
        assert!(!p.is_out_of_stock());
    }

    #[test]
    fn slug_collapses_non_alphanumerics() {
        let mut p = product_with_names();
        p.name = "Music+ Plus (1 yr)".to_string();
        assert_eq!(p.slug(), "music-plus-1-yr-");
    }

    #[test]
    fn option_fields_do_not_fall_back() {
        let opt = ProductOption {
            name: "Monthly".to_string(),
            info: "One month".to_string(),
            price: "15 $".to_string(),
            ..ProductOption::default()
        };
        assert_eq!(opt.localized_name(Language::En), "Monthly");
        assert_eq!(opt.localized_name(Language::Ar), "");
    }
}
