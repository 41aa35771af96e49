//! Browser localStorage helpers.
//!
//! The session token, the cached user and the in-flight medical report id
//! are persisted here so a page reload restores the session and resumes the
//! report draft. All functions are no-ops outside the browser.

/// Session token key
pub const TOKEN_KEY: &str = "mcm_token";
/// Cached user JSON key
pub const USER_KEY: &str = "mcm_user";
/// In-flight medical report id key
pub const REPORT_DRAFT_KEY: &str = "mcm_report_draft";

#[cfg(target_arch = "wasm32")]
pub fn local_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
pub fn local_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn local_remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

// ============ SSR stubs ============

#[cfg(not(target_arch = "wasm32"))]
pub fn local_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_set(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_remove(_key: &str) {}
