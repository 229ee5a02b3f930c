pub mod browser;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod modal_frame;
pub mod modal_stack;
pub mod number_format;
pub mod prefs;
