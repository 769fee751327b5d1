use crate::i18n::{locales, set_lang, t};
use crate::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub condensed: bool,
    pub current_lang: String,
    pub theme: Theme,
    pub on_lang_change: Callback<String>,
    pub on_toggle_theme: Callback<()>,
    pub on_contact: Callback<()>,
}

fn theme_icon(theme: Theme) -> Html {
    // a dark page shows the sun (switch to light), and vice versa
    match theme {
        Theme::Dark => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z" />
            </svg>
        },
        Theme::Light => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class="icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z" />
            </svg>
        },
    }
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let contact = {
        let cb = p.on_contact.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let lang_buttons = locales().iter().map(|meta| {
        let code = meta.code;
        let active = p.current_lang == code;
        let onclick = {
            let cb = p.on_lang_change.clone();
            Callback::from(move |_| {
                set_lang(code);
                cb.emit(code.to_string());
            })
        };
        html! {
            <button
                key={code}
                class={classes!("lang-btn", active.then_some("active"))}
                data-lang={code}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { meta.name }
            </button>
        }
    });

    html! {
        <header
            id="header-bar"
            class={classes!("site-header", p.condensed.then_some("condensed"))}
            role="banner"
        >
            <div class="header-content">
                <a class="brand" href="#main">{ t("app.name") }</a>
                <nav id="language-selector" class="lang-switch" aria-label={t("nav.language")}>
                    { for lang_buttons }
                </nav>
                <div class="header-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        aria-label={t("nav.theme_toggle")}
                        onclick={toggle_theme}
                    >
                        { theme_icon(p.theme) }
                    </button>
                    <button id="contact-btn" class="contact-btn" onclick={contact}>
                        { t("nav.contact") }
                    </button>
                </div>
            </div>
        </header>
    }
}
