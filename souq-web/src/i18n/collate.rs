use std::cmp::Ordering;

#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Compare two strings using the current locale's collation rules.
///
/// Uses `Intl.Collator` in the browser; falls back to code-point order on
/// the host so the query pipeline stays deterministic in tests.
#[must_use]
pub fn compare_localized(a: &str, b: &str) -> Ordering {
    #[cfg(target_arch = "wasm32")]
    {
        with_bundle(|bundle| {
            let locales = {
                let arr = Array::new();
                arr.push(&JsValue::from_str(&bundle.lang));
                arr
            };
            let collator = Intl::Collator::new(&locales, &Object::new());
            let compare = collator.compare();
            compare
                .call2(&collator, &JsValue::from_str(a), &JsValue::from_str(b))
                .ok()
                .and_then(|v| v.as_f64())
                .map_or_else(|| a.cmp(b), |n| n.partial_cmp(&0.0).unwrap_or(Ordering::Equal))
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        a.cmp(b)
    }
}
