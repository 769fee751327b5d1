use crate::app::CONTACT_URL;
use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <p>{ t("footer.copyright") }</p>
            <p class="footer-links">
                <span>{ t("footer.follow_us") }</span>
                <a href={CONTACT_URL} target="_blank" rel="noopener noreferrer">{"Telegram"}</a>
            </p>
        </footer>
    }
}
