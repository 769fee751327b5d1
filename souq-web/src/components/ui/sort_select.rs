use crate::i18n::t;
use souq_catalog::SortMode;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const MODES: [SortMode; 4] = [
    SortMode::Default,
    SortMode::PriceAsc,
    SortMode::PriceDesc,
    SortMode::NameAsc,
];

fn mode_label(mode: SortMode) -> String {
    match mode {
        SortMode::Default => t("sort.default"),
        SortMode::PriceAsc => t("sort.price_asc"),
        SortMode::PriceDesc => t("sort.price_desc"),
        SortMode::NameAsc => t("sort.name_asc"),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: SortMode,
    pub on_change: Callback<SortMode>,
}

#[function_component(SortSelect)]
pub fn sort_select(p: &Props) -> Html {
    let onchange = {
        let cb = p.on_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                cb.emit(SortMode::from_code(&sel.value()));
            }
        })
    };

    let options = MODES.into_iter().map(|mode| {
        html! {
            <option key={mode.code()} value={mode.code()} selected={mode == p.value}>
                { mode_label(mode) }
            </option>
        }
    });

    html! {
        <label class="sort-control">
            <span class="sr-only">{ t("sort.label") }</span>
            <select id="sort-options" {onchange}>
                { for options }
            </select>
        </label>
    }
}
