//! Public client surface + builder.
//! Defaults (API root, UA, parameter names) live in `constants`.

pub(crate) mod constants;

use crate::core::error::{ApiExchange, RequestInfo, ResponseInfo, classify};
use crate::core::{OxrError, net};
use constants::{DEFAULT_API_BASE, USER_AGENT};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use url::Url;

/// A blocking client for the Open Exchange Rates API.
///
/// Holds the credential, the API base, and a pooled HTTP session that is reused
/// across calls. Cloning is cheap and shares the session.
///
/// # Example
///
/// ```no_run
/// # use oxr::{OxrClient, RatesQuery};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = OxrClient::new("YOUR_APP_ID")?;
/// let latest = client.latest(&RatesQuery::new().base("EUR").symbols(["USD", "GBP"]))?;
/// println!("EUR/USD: {}", latest["rates"]["USD"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OxrClient {
    http: Client,
    api_base: String,
    app_id: String,
}

impl fmt::Debug for OxrClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OxrClient")
            .field("api_base", &self.api_base)
            .field("app_id", &"***")
            .finish_non_exhaustive()
    }
}

impl OxrClient {
    /// Creates a client for the public API root with default settings.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns `OxrError::Http` if the underlying HTTP session cannot be created.
    pub fn new(app_id: impl Into<String>) -> Result<Self, OxrError> {
        Self::builder().app_id(app_id).build()
    }

    /// Create a new builder.
    pub fn builder() -> OxrClientBuilder {
        OxrClientBuilder::default()
    }

    /// The API base, without a trailing slash.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// The application credential sent with every request.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Issues one GET to `{api_base}/{endpoint}` and classifies the outcome.
    ///
    /// The body must be JSON even on failure: a body that does not decode (or decodes to
    /// `null`) is an `OxrError::Decode` whatever the status. A non-200 status is then
    /// mapped from the body's `message` field; a 200 returns the body untouched.
    pub(crate) fn request(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<Value, OxrError> {
        let mut url = Url::parse(&format!("{}/{}", self.api_base, endpoint))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status();
        let body = net::get_text(resp, endpoint)?;

        let request = RequestInfo::get(url);
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %request.redacted_url(), status = status.as_u16(), "oxr response");

        let decoded = match serde_json::from_str::<Value>(&body) {
            Ok(Value::Null) => Err("response body is JSON null".to_string()),
            Ok(v) => Ok(v),
            Err(e) => Err(e.to_string()),
        };

        let exchange = ApiExchange {
            request,
            response: ResponseInfo {
                status: status.as_u16(),
                body,
            },
        };

        let json = match decoded {
            Ok(v) => v,
            Err(reason) => {
                return Err(OxrError::Decode {
                    exchange: Box::new(exchange),
                    reason,
                });
            }
        };

        if status != StatusCode::OK {
            return Err(classify(exchange, &json));
        }

        Ok(json)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct OxrClientBuilder {
    app_id: Option<String>,
    api_base: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl OxrClientBuilder {
    /// Set the application credential. Required.
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Override the API base (default `https://openexchangerates.org/api/`).
    /// Trailing slashes are stripped.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<OxrClient, OxrError> {
        let app_id = self
            .app_id
            .ok_or_else(|| OxrError::Config("app_id is required".into()))?;

        let api_base = self
            .api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();
        Url::parse(&api_base)?;

        let mut httpb = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout);

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(OxrClient {
            http,
            api_base,
            app_id,
        })
    }
}
