/// Application-level constants
pub const APP_NAME: &str = "Amparo";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default scheduling API host (development backend).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Scheduling API base URL.
/// `AMPARO_API_URL` overrides the development default.
pub fn api_base_url() -> String {
    std::env::var("AMPARO_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "info,amparo=debug"
}
