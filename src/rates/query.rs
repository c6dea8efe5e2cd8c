use std::fmt;

use chrono::NaiveDate;

use crate::core::client::constants::APP_ID_PARAM;

/// Target currencies for a rates request.
///
/// A single string is sent as-is, so `"USD,GBP"` and `["USD", "GBP"]` produce the same
/// `symbols` parameter. A collection is joined with commas in the order given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbols {
    /// A pre-formatted value, passed through unchanged.
    One(String),
    /// An ordered list of currency codes.
    Many(Vec<String>),
}

impl Symbols {
    /// The value of the `symbols` query parameter, `None` when there is nothing to send.
    /// Empty codes in a collection are skipped.
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        let joined = match self {
            Self::One(s) => s.clone(),
            Self::Many(codes) => codes
                .iter()
                .filter(|c| !c.is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(","),
        };
        (!joined.is_empty()).then_some(joined)
    }
}

impl From<&str> for Symbols {
    fn from(s: &str) -> Self {
        Self::One(s.to_string())
    }
}

impl From<String> for Symbols {
    fn from(s: String) -> Self {
        Self::One(s)
    }
}

impl<S: Into<String>> From<Vec<S>> for Symbols {
    fn from(codes: Vec<S>) -> Self {
        Self::Many(codes.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Symbols {
    fn from(codes: &[S]) -> Self {
        Self::Many(codes.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Symbols {
    fn from(codes: [S; N]) -> Self {
        Self::Many(codes.into_iter().map(Into::into).collect())
    }
}

/// Optional filters shared by the latest, historical and time-series endpoints.
///
/// ```
/// use oxr::RatesQuery;
///
/// let q = RatesQuery::new().base("EUR").symbols(["USD", "GBP"]);
/// assert_eq!(q.symbols_param().as_deref(), Some("USD,GBP"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatesQuery {
    base: Option<String>,
    symbols: Option<Symbols>,
}

impl RatesQuery {
    /// A query with no base override and all currencies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Express rates against this currency instead of the account default (USD).
    #[must_use]
    pub fn base(mut self, code: impl Into<String>) -> Self {
        self.base = Some(code.into());
        self
    }

    /// Restrict the response to these currencies.
    #[must_use]
    pub fn symbols(mut self, symbols: impl Into<Symbols>) -> Self {
        self.symbols = Some(symbols.into());
        self
    }

    /// The `base` parameter as it will be sent, if any.
    #[must_use]
    pub fn base_param(&self) -> Option<&str> {
        self.base.as_deref().filter(|b| !b.is_empty())
    }

    /// The `symbols` parameter as it will be sent, if any.
    #[must_use]
    pub fn symbols_param(&self) -> Option<String> {
        self.symbols.as_ref().and_then(Symbols::to_param)
    }

    /// Builds the query parameters for a rates endpoint.
    ///
    /// `payload` holds endpoint-specific parameters (`start`/`end` for time series) and
    /// comes first. The credential is always added; `base` and `symbols` only when set.
    pub(crate) fn to_params(
        &self,
        app_id: &str,
        mut payload: Vec<(&'static str, String)>,
    ) -> Vec<(&'static str, String)> {
        payload.push((APP_ID_PARAM, app_id.to_string()));
        if let Some(base) = self.base_param() {
            payload.push(("base", base.to_string()));
        }
        if let Some(symbols) = self.symbols_param() {
            payload.push(("symbols", symbols));
        }
        payload
    }
}

/// A date path segment or query value.
///
/// Strings are passed through verbatim; the API validates them. A [`NaiveDate`] is
/// formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDate(String);

impl ApiDate {
    /// The date as it will appear on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApiDate {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ApiDate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<NaiveDate> for ApiDate {
    fn from(d: NaiveDate) -> Self {
        Self(d.format("%Y-%m-%d").to_string())
    }
}

impl From<&NaiveDate> for ApiDate {
    fn from(d: &NaiveDate) -> Self {
        Self::from(*d)
    }
}
