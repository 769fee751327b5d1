use crate::app::state::AppState;
use yew::prelude::*;

/// Scroll offset past which the header condenses.
const CONDENSE_AT: f64 = 50.0;
/// Scroll offset past which the back-to-top button appears.
const BACK_TO_TOP_AT: f64 = 300.0;
const SCROLL_DEBOUNCE_MS: i32 = 15;

/// Attach a debounced window scroll listener that drives the condensed
/// header and back-to-top visibility flags.
#[hook]
pub fn use_scroll_state(app_state: &AppState) {
    let condensed = app_state.condensed_header.clone();
    let back_to_top = app_state.show_back_to_top.clone();

    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let debouncer = crate::dom::Debouncer::new(SCROLL_DEBOUNCE_MS);
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                let condensed = condensed.clone();
                let back_to_top = back_to_top.clone();
                debouncer.call(move || {
                    let y = crate::dom::scroll_y();
                    condensed.set(y > CONDENSE_AT);
                    back_to_top.set(y > BACK_TO_TOP_AT);
                });
            });
            let _ = crate::dom::window()
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            listener.forget();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (condensed, back_to_top);
        || {}
    });
}
