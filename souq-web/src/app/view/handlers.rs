use crate::app::state::AppState;
use souq_catalog::SortMode;
use yew::prelude::*;

/// The products section element targeted by filter/sort scrolling.
const PRODUCTS_SECTION_ID: &str = "products";

pub struct AppHandlers {
    pub lang_change: Callback<String>,
    pub toggle_theme: Callback<()>,
    pub select_category: Callback<Option<String>>,
    pub sort_change: Callback<SortMode>,
    pub search_change: Callback<String>,
    pub clear_search: Callback<()>,
    pub open_order: Callback<AttrValue>,
    pub close_order: Callback<()>,
    pub back_to_top: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            lang_change: build_lang_change(state),
            toggle_theme: build_toggle_theme(state),
            select_category: build_select_category(state),
            sort_change: build_sort_change(state),
            search_change: build_search_change(state),
            clear_search: build_clear_search(state),
            open_order: build_open_order(state),
            close_order: build_close_order(state),
            back_to_top: Callback::from(|()| crate::dom::scroll_to_top()),
        }
    }
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(code);
    })
}

fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let theme = state.theme.clone();
    Callback::from(move |()| {
        let next = (*theme).toggled();
        // An explicit toggle persists and overrides the system preference
        crate::theme::set_theme(next);
        theme.set(next);
    })
}

fn build_select_category(state: &AppState) -> Callback<Option<String>> {
    let category = state.category.clone();
    Callback::from(move |next: Option<String>| {
        crate::prefs::save_category(next.as_deref());
        category.set(next);
        crate::dom::scroll_into_view(PRODUCTS_SECTION_ID);
    })
}

fn build_sort_change(state: &AppState) -> Callback<SortMode> {
    let sort = state.sort.clone();
    Callback::from(move |mode: SortMode| {
        crate::prefs::save_sort(mode);
        sort.set(mode);
        crate::dom::scroll_into_view(PRODUCTS_SECTION_ID);
    })
}

fn build_search_change(state: &AppState) -> Callback<String> {
    let search = state.search.clone();
    Callback::from(move |text: String| {
        search.set(text);
    })
}

fn build_clear_search(state: &AppState) -> Callback<()> {
    let search = state.search.clone();
    Callback::from(move |()| {
        search.set(String::new());
        crate::dom::scroll_into_view(PRODUCTS_SECTION_ID);
    })
}

fn build_open_order(state: &AppState) -> Callback<AttrValue> {
    let order_link = state.order_link.clone();
    Callback::from(move |link: AttrValue| {
        order_link.set(Some(link));
    })
}

fn build_close_order(state: &AppState) -> Callback<()> {
    let order_link = state.order_link.clone();
    Callback::from(move |()| {
        order_link.set(None);
    })
}
