use crate::i18n::t;
use yew::prelude::*;

/// Localized banner shown when the catalog fetch fails; the page keeps
/// working with an empty catalog.
#[function_component(ErrorBanner)]
pub fn error_banner() -> Html {
    html! {
        <div id="error-message" class="error-banner" role="alert">
            <strong>{ t("error.title") }</strong>
            <p>{ t("error.body") }</p>
        </div>
    }
}
