//! oxr: blocking client for the Open Exchange Rates API.
//!
//! Five endpoints are covered: latest rates, historical rates, time series, the
//! currency list, and conversion. Responses come back as [`serde_json::Value`],
//! exactly as the API sent them. API error bodies are mapped to [`OxrError`] variants.
//!
//! Use an explicit [`OxrClient`], or install a process-wide default with [`init`]
//! and call the free functions with `None`.

pub mod core;
pub(crate) mod endpoints;
pub mod global;
pub mod rates;

pub use crate::core::{
    ApiExchange, OxrClient, OxrClientBuilder, OxrError, RequestInfo, ResponseInfo,
};
pub use global::{
    convert, default_client, get_currencies, get_historical, get_latest, get_time_series, init,
    reset, resolve, set_default,
};
pub use rates::{ApiDate, RatesQuery, Symbols};
