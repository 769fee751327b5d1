use yew::prelude::*;

pub mod bootstrap;
pub mod scroll;
pub mod state;
pub mod view;

/// External messaging link used to complete orders; opened only after the
/// user confirms in the order dialog.
pub const CONTACT_URL: &str = "https://t.me/souqstore";

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    scroll::use_scroll_state(&app_state);

    view::render_app(&app_state)
}
