//! Build-time configuration for the WASM bundle.
//!
//! Values are baked in by the build environment; there is no runtime
//! config fetch.

/// Base URL of the the-404 backend API. Falls back to the page origin
/// when the build did not set one.
pub fn api_base_url() -> String {
    match option_env!("THE404_API_BASE_URL") {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => crate::utils::origin(),
    }
}

/// Substitute fixed fixtures for every collection fetch.
pub fn mock_data_enabled() -> bool {
    matches!(option_env!("THE404_MOCK_DATA"), Some("1") | Some("true"))
}

/// Workstation builds prefill the login form with test credentials.
pub fn workstation_mode() -> bool {
    option_env!("THE404_MODE") == Some("workstation")
}
