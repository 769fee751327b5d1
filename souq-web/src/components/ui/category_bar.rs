use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Localized category labels in catalog order
    pub categories: Vec<String>,
    /// Selected category; `None` means "All"
    pub active: Option<String>,
    pub on_select: Callback<Option<String>>,
}

#[function_component(CategoryBar)]
pub fn category_bar(p: &Props) -> Html {
    let all_btn = {
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(None))
        };
        html! {
            <button
                class={classes!("filter-btn", p.active.is_none().then_some("active"))}
                {onclick}
            >
                { t("filters.all") }
            </button>
        }
    };

    let buttons = p.categories.iter().map(|category| {
        let active = p.active.as_deref() == Some(category.as_str());
        let onclick = {
            let cb = p.on_select.clone();
            let category = category.clone();
            Callback::from(move |_| cb.emit(Some(category.clone())))
        };
        html! {
            <button
                key={category.clone()}
                class={classes!("filter-btn", active.then_some("active"))}
                {onclick}
            >
                { category.clone() }
            </button>
        }
    });

    html! {
        <nav id="category-filters" class="category-filters" aria-label={t("filters.label")}>
            { all_btn }
            { for buttons }
        </nav>
    }
}
