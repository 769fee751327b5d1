use crate::app::state::AppState;
use souq_catalog::Catalog;
use yew::prelude::*;

/// Catalog data file, resolved through `asset_path` at fetch time.
pub const DATA_PATH: &str = "static/data/products.json";

#[derive(Clone)]
struct BootstrapHandles {
    catalog: UseStateHandle<Catalog>,
    loading: UseStateHandle<bool>,
    load_failed: UseStateHandle<bool>,
}

fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        catalog: app_state.catalog.clone(),
        loading: app_state.loading.clone(),
        load_failed: app_state.load_failed.clone(),
    }
}

/// Commit a fetch outcome. A failure leaves the catalog empty and the app in
/// a degraded state until the page is reloaded; there is no retry.
#[cfg(any(target_arch = "wasm32", test))]
fn finish(handles: &BootstrapHandles, result: Result<Catalog, String>) {
    match result {
        Ok(catalog) => {
            if catalog.is_empty() {
                log::warn!("catalog file parsed but contained no usable products");
            }
            handles.catalog.set(catalog);
            handles.load_failed.set(false);
        }
        Err(message) => {
            #[cfg(target_arch = "wasm32")]
            crate::dom::console_error(&format!("could not load catalog: {message}"));
            #[cfg(not(target_arch = "wasm32"))]
            log::error!("could not load catalog: {message}");
            handles.catalog.set(Catalog::empty());
            handles.load_failed.set(true);
        }
    }
    handles.loading.set(false);
}

#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn load_catalog() -> Result<Catalog, String> {
    use crate::dom::js_error_message;
    use wasm_bindgen_futures::JsFuture;

    let url = crate::paths::asset_path(DATA_PATH);
    let resp = crate::dom::fetch_response(&url)
        .await
        .map_err(|err| js_error_message(&err))?;
    if !resp.ok() {
        return Err(format!("HTTP error! Status: {}", resp.status()));
    }
    let text_promise = resp.text().map_err(|err| js_error_message(&err))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| js_error_message(&err))?
        .as_string()
        .ok_or_else(|| "response body is not text".to_string())?;
    Catalog::from_json(&text).map_err(|err| err.to_string())
}

/// Kick off the one-shot catalog fetch on mount.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = load_catalog().await;
            finish(&handles, result);
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = handles;
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[function_component(BootstrapHarness)]
    fn bootstrap_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            let shipped = Catalog::from_json(include_str!("../../static/data/products.json"))
                .map_err(|err| err.to_string());
            finish(&handles, shipped);
        }
        Html::default()
    }

    #[function_component(FailureHarness)]
    fn failure_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let handles = handles_from_state(&app_state);
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            finish(&handles, Err("HTTP error! Status: 404".to_string()));
        }
        Html::default()
    }

    #[test]
    fn bootstrap_commits_the_shipped_catalog() {
        let _ = block_on(LocalServerRenderer::<BootstrapHarness>::new().render());
    }

    #[test]
    fn bootstrap_failure_degrades_without_panicking() {
        let _ = block_on(LocalServerRenderer::<FailureHarness>::new().render());
    }
}
