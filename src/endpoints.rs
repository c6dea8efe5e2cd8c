//! Endpoint paths, relative to the API base.

use std::fmt::Display;

use crate::rates::ApiDate;

pub(crate) const CURRENCIES: &str = "currencies.json";
pub(crate) const LATEST: &str = "latest.json";
pub(crate) const TIME_SERIES: &str = "time-series.json";

pub(crate) fn historical(date: &ApiDate) -> String {
    format!("historical/{date}.json")
}

/// Segments are interpolated as given, without escaping.
pub(crate) fn convert(value: impl Display, from: &str, to: &str) -> String {
    format!("convert/{value}/{from}/{to}")
}
