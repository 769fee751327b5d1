use crate::dom::Debouncer;
use crate::i18n::t;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const SEARCH_DEBOUNCE_MS: i32 = 300;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Committed search text (set after the debounce window)
    pub value: String,
    pub on_search: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(SearchBox)]
pub fn search_box(p: &Props) -> Html {
    let input_ref = use_node_ref();
    let debouncer = use_mut_ref(|| Debouncer::new(SEARCH_DEBOUNCE_MS));

    // The input stays uncontrolled so typing is never clobbered by unrelated
    // re-renders; clearing goes through the node ref.
    let oninput = {
        let cb = p.on_search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let text = input.value();
                let cb = cb.clone();
                debouncer.borrow().call(move || cb.emit(text));
            }
        })
    };

    let onclear = {
        let cb = p.on_clear.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            cb.emit(());
        })
    };

    html! {
        <div class="search-control">
            <input
                id="search-input"
                type="search"
                placeholder={t("products.search_placeholder")}
                aria-label={t("products.search_placeholder")}
                ref={input_ref}
                {oninput}
            />
            if !p.value.is_empty() {
                <button
                    id="clear-search-btn"
                    class="clear-search"
                    aria-label={t("products.clear_search")}
                    onclick={onclear}
                >
                    {"×"}
                </button>
            }
        </div>
    }
}
