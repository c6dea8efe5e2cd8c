//! Exchange-rate operations and their query parameters.

mod api;
mod query;

pub use query::{ApiDate, RatesQuery, Symbols};
