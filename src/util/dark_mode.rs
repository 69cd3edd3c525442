//! Dark mode persistence and document styling.
//!
//! Reads the user's preference from `localStorage` and applies the `dark`
//! class to the `<html>` element. The root component keeps the class and
//! the stored value in sync with the theme signal on every change.

use crate::state::theme;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "darkMode";

#[cfg(target_arch = "wasm32")]
const DARK_CLASS: &str = "dark";

/// Read the dark mode preference.
///
/// A persisted `"true"`/`"false"` wins; otherwise the system color-scheme
/// preference decides. Malformed stored values fall back to the system
/// preference rather than failing.
pub fn read_preference() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        theme::initial_theme(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        theme::initial_theme(None, false)
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1(DARK_CLASS);
                } else {
                    let _ = class_list.remove_1(DARK_CLASS);
                }
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Persist the preference to `localStorage` as `"true"` or `"false"`.
pub fn persist(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Apply the document class and persist the value in one step.
pub fn sync(enabled: bool) {
    apply(enabled);
    persist(enabled);
}
