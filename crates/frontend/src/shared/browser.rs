//! Thin wrappers over browser globals

/// Native confirm dialog; answers `false` when the window is unavailable
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
