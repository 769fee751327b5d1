// Light/dark theme management

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const STORAGE_KEY: &str = "souq.theme";

/// Visual theme of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Persisted string code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Apply a theme by toggling the `dark` class on the HTML element.
///
/// Does not persist anything; persistence only happens on an explicit user
/// toggle via [`set_theme`], so the system preference keeps applying until
/// the user decides.
pub fn apply_theme(theme: Theme) {
    let Some(win) = web_sys::window() else {
        return;
    };

    if let Some(html) = win.document().and_then(|doc| doc.document_element()) {
        let _ = match theme {
            Theme::Dark => html.class_list().add_1("dark"),
            Theme::Light => html.class_list().remove_1("dark"),
        };
    }
}

/// Apply a theme and persist it as the user's explicit choice.
pub fn set_theme(theme: Theme) {
    apply_theme(theme);

    if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.code());
    }
}

/// The explicitly saved theme choice, if the user ever toggled.
#[must_use]
pub fn saved_theme() -> Option<Theme> {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|code| Theme::from_code(&code))
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        None
    }
}

/// Whether the operating environment prefers a dark color scheme.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        web_sys::window()
            .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mql| mql.matches())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        false
    }
}

/// The theme to apply on load: the saved explicit choice wins over the
/// system preference.
#[must_use]
pub fn effective_theme() -> Theme {
    decide_theme(saved_theme(), system_prefers_dark())
}

fn decide_theme(saved: Option<Theme>, system_dark: bool) -> Theme {
    saved.unwrap_or(if system_dark { Theme::Dark } else { Theme::Light })
}

/// Follow system color-scheme changes while no explicit choice was saved.
pub fn watch_system_theme() {
    let Some(mql) = web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
    else {
        return;
    };

    let listener = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |event: web_sys::MediaQueryListEvent| {
            if saved_theme().is_none() {
                apply_theme(decide_theme(None, event.matches()));
            }
        },
    );
    let _ = mql.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    listener.forget();
}
