// Persisted catalog preferences: active category and sort mode.
// Language and theme persist in their own modules.

use crate::dom::local_storage;
use souq_catalog::SortMode;

const CATEGORY_KEY: &str = "souq.category";
const SORT_KEY: &str = "souq.sort";

fn get(key: &str) -> Option<String> {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        let _ = key;
        None
    }
}

fn set(key: &str, value: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// The saved category filter; `None` means "All".
#[must_use]
pub fn saved_category() -> Option<String> {
    get(CATEGORY_KEY).filter(|cat| !cat.is_empty())
}

pub fn save_category(category: Option<&str>) {
    set(CATEGORY_KEY, category.unwrap_or(""));
}

/// The saved sort mode, defaulting when missing or unrecognized.
#[must_use]
pub fn saved_sort() -> SortMode {
    get(SORT_KEY).map_or(SortMode::Default, |code| SortMode::from_code(&code))
}

pub fn save_sort(sort: SortMode) {
    set(SORT_KEY, sort.code());
}
