//! Centralized constants for the default API root and UA.

/// Open Exchange Rates API root. Endpoint paths are appended after a `/`.
pub(crate) const DEFAULT_API_BASE: &str = "https://openexchangerates.org/api/";

/// User agent sent with every request unless overridden on the builder.
pub(crate) const USER_AGENT: &str = concat!("oxr-rs/", env!("CARGO_PKG_VERSION"));

/// Query parameter carrying the application credential.
pub(crate) const APP_ID_PARAM: &str = "app_id";
