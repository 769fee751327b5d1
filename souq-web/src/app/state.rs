use crate::theme::Theme;
use souq_catalog::{
    Catalog, CatalogQuery, Language, Product, SortMode, apply_with_collation, categories,
};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<Catalog>,
    pub loading: UseStateHandle<bool>,
    pub load_failed: UseStateHandle<bool>,
    pub category: UseStateHandle<Option<String>>,
    pub sort: UseStateHandle<SortMode>,
    pub search: UseStateHandle<String>,
    /// Pending external order link; `Some` means the confirm dialog is open
    pub order_link: UseStateHandle<Option<AttrValue>>,
    pub theme: UseStateHandle<Theme>,
    pub current_language: UseStateHandle<String>,
    pub condensed_header: UseStateHandle<bool>,
    pub show_back_to_top: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(Catalog::empty),
        loading: use_state(|| true),
        load_failed: use_state(|| false),
        category: use_state(crate::prefs::saved_category),
        sort: use_state(crate::prefs::saved_sort),
        search: use_state(String::new),
        order_link: use_state(|| None::<AttrValue>),
        theme: use_state(crate::theme::effective_theme),
        current_language: use_state(crate::i18n::current_lang),
        // scroll flags change often, so only re-render on actual transitions
        condensed_header: use_state_eq(|| false),
        show_back_to_top: use_state_eq(|| false),
    }
}

impl AppState {
    #[must_use]
    pub fn language(&self) -> Language {
        Language::from_code(&self.current_language)
    }

    #[must_use]
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            category: (*self.category).clone(),
            search: (*self.search).clone(),
            sort: *self.sort,
            lang: self.language(),
        }
    }

    /// The derived list fed to the grid, with locale-aware name collation.
    #[must_use]
    pub fn derived_products(&self) -> Vec<Product> {
        apply_with_collation(
            &self.catalog.products,
            &self.query(),
            crate::i18n::compare_localized,
        )
    }

    /// Localized category labels for the filter bar.
    #[must_use]
    pub fn category_labels(&self) -> Vec<String> {
        categories(&self.catalog.products, self.language())
    }

    /// Whether any filter or search narrows the catalog; distinguishes
    /// "loading" skeletons from a genuine "no results" state.
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        self.category.is_some() || !self.search.trim().is_empty()
    }
}
