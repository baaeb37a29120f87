use log::Level;

/// Distance from the viewport top, in CSS pixels, of the line a section has
/// to cross to become the active one in the navigation.
pub const SECTION_OFFSET_PX: f64 = 100.0;

pub const BRAND_NAME: &str = "LearnHub";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// OAuth client id handed to Google Identity Services. Baked in at build
/// time, e.g. `GOOGLE_CLIENT_ID=... trunk build --release`.
pub fn google_client_id() -> &'static str {
    option_env!("GOOGLE_CLIENT_ID").unwrap_or("")
}
