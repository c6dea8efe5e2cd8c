use std::fmt::Display;

use serde_json::Value;

use super::{ApiDate, RatesQuery};
use crate::core::client::constants::APP_ID_PARAM;
use crate::core::{OxrClient, OxrError};
use crate::endpoints;

/* ---------------- Public API ---------------- */

impl OxrClient {
    /// Lists every currency code the API knows, mapped to its full name.
    ///
    /// # Errors
    ///
    /// Returns `OxrError` if the request fails, the body is not JSON, or the API reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn currencies(&self) -> Result<Value, OxrError> {
        self.request(endpoints::CURRENCIES, &[(APP_ID_PARAM, self.app_id().to_string())])
    }

    /// Fetches the most recent rates.
    ///
    /// # Errors
    ///
    /// Returns `OxrError` if the request fails, the body is not JSON, or the API reports an error
    /// (for example [`OxrError::InvalidBase`] for an unknown base currency).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub fn latest(&self, query: &RatesQuery) -> Result<Value, OxrError> {
        self.exchange_rates(endpoints::LATEST, query, Vec::new())
    }

    /// Fetches end-of-day rates for a single date (`YYYY-MM-DD`).
    ///
    /// String dates are sent verbatim; the API rejects malformed ones.
    ///
    /// # Errors
    ///
    /// Returns `OxrError` if the request fails, the body is not JSON, or the API reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn historical(
        &self,
        date: impl Into<ApiDate>,
        query: &RatesQuery,
    ) -> Result<Value, OxrError> {
        let endpoint = endpoints::historical(&date.into());
        self.exchange_rates(&endpoint, query, Vec::new())
    }

    /// Fetches daily rates for every date between `start` and `end`, inclusive.
    ///
    /// # Errors
    ///
    /// Returns `OxrError` if the request fails, the body is not JSON, or the API reports an error
    /// ([`OxrError::NotAllowed`] on plans without time-series access).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
    pub fn time_series(
        &self,
        start: impl Into<ApiDate>,
        end: impl Into<ApiDate>,
        query: &RatesQuery,
    ) -> Result<Value, OxrError> {
        let payload = vec![
            ("start", start.into().to_string()),
            ("end", end.into().to_string()),
        ];
        self.exchange_rates(endpoints::TIME_SERIES, query, payload)
    }

    /// Converts `value` from one currency to another at the latest rates.
    ///
    /// Only the credential is sent as a query parameter.
    ///
    /// # Errors
    ///
    /// Returns `OxrError` if the request fails, the body is not JSON, or the API reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(from = from, to = to), err))]
    pub fn convert(&self, value: impl Display, from: &str, to: &str) -> Result<Value, OxrError> {
        let endpoint = endpoints::convert(value, from, to);
        self.request(&endpoint, &[(APP_ID_PARAM, self.app_id().to_string())])
    }

    fn exchange_rates(
        &self,
        endpoint: &str,
        query: &RatesQuery,
        payload: Vec<(&'static str, String)>,
    ) -> Result<Value, OxrError> {
        let params = query.to_params(self.app_id(), payload);
        self.request(endpoint, &params)
    }
}
