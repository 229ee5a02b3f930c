//! UI preference persistence in localStorage.
//!
//! Best-effort only: every failure path (no window, storage disabled, bad
//! JSON) degrades to "no stored preference".

use serde::de::DeserializeOwned;
use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn save_pref<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(value) {
        let _ = storage.set_item(key, &json);
    }
}

pub fn load_pref<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}
