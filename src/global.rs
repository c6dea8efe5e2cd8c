//! The process-wide default client and the convenience calls that use it.
//!
//! Call [`init`] once at startup, then use the free functions with `None` as the
//! client. Passing `Some(&client)` bypasses the default and never touches it.
//!
//! ```no_run
//! # fn main() -> Result<(), oxr::OxrError> {
//! oxr::init("YOUR_APP_ID")?;
//! let latest = oxr::get_latest(&oxr::RatesQuery::new().base("EUR").symbols("USD"), None)?;
//! println!("{}", latest["rates"]["USD"]);
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::fmt::Display;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use crate::core::{OxrClient, OxrError};
use crate::rates::{ApiDate, RatesQuery};

static DEFAULT_CLIENT: RwLock<Option<OxrClient>> = RwLock::new(None);

/// Builds a client for the public API root and installs it as the default.
///
/// # Errors
///
/// Returns `OxrError` if the client cannot be built. The previous default is kept in that case.
pub fn init(app_id: impl Into<String>) -> Result<(), OxrError> {
    let client = OxrClient::new(app_id)?;
    set_default(client);
    Ok(())
}

/// Installs `client` as the default, returning the one it replaces.
pub fn set_default(client: OxrClient) -> Option<OxrClient> {
    DEFAULT_CLIENT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(client)
}

/// Removes the default client, returning it.
pub fn reset() -> Option<OxrClient> {
    DEFAULT_CLIENT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// A handle to the current default client, if one is installed.
pub fn default_client() -> Option<OxrClient> {
    DEFAULT_CLIENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Picks the explicit client when given, else the default.
///
/// # Errors
///
/// Returns `OxrError::NoClient` when neither is available.
pub fn resolve(explicit: Option<&OxrClient>) -> Result<Cow<'_, OxrClient>, OxrError> {
    match explicit {
        Some(client) => Ok(Cow::Borrowed(client)),
        None => default_client().map(Cow::Owned).ok_or(OxrError::NoClient),
    }
}

/// [`OxrClient::currencies`] on `client` or the default.
///
/// # Errors
///
/// `OxrError::NoClient` when no client resolves, otherwise as [`OxrClient::currencies`].
pub fn get_currencies(client: Option<&OxrClient>) -> Result<Value, OxrError> {
    resolve(client)?.currencies()
}

/// [`OxrClient::latest`] on `client` or the default.
///
/// # Errors
///
/// `OxrError::NoClient` when no client resolves, otherwise as [`OxrClient::latest`].
pub fn get_latest(query: &RatesQuery, client: Option<&OxrClient>) -> Result<Value, OxrError> {
    resolve(client)?.latest(query)
}

/// [`OxrClient::historical`] on `client` or the default.
///
/// # Errors
///
/// `OxrError::NoClient` when no client resolves, otherwise as [`OxrClient::historical`].
pub fn get_historical(
    date: impl Into<ApiDate>,
    query: &RatesQuery,
    client: Option<&OxrClient>,
) -> Result<Value, OxrError> {
    resolve(client)?.historical(date, query)
}

/// [`OxrClient::time_series`] on `client` or the default.
///
/// # Errors
///
/// `OxrError::NoClient` when no client resolves, otherwise as [`OxrClient::time_series`].
pub fn get_time_series(
    start: impl Into<ApiDate>,
    end: impl Into<ApiDate>,
    query: &RatesQuery,
    client: Option<&OxrClient>,
) -> Result<Value, OxrError> {
    resolve(client)?.time_series(start, end, query)
}

/// [`OxrClient::convert`] on `client` or the default.
///
/// # Errors
///
/// `OxrError::NoClient` when no client resolves, otherwise as [`OxrClient::convert`].
pub fn convert(
    value: impl Display,
    from: &str,
    to: &str,
    client: Option<&OxrClient>,
) -> Result<Value, OxrError> {
    resolve(client)?.convert(value, from, to)
}
