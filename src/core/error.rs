use std::fmt;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::core::client::constants::APP_ID_PARAM;

/// The request half of a failed API exchange.
#[derive(Clone)]
pub struct RequestInfo {
    /// HTTP method, always `GET` for this API.
    pub method: &'static str,
    /// The full URL as sent, including the `app_id` query parameter.
    pub url: Url,
}

impl RequestInfo {
    pub(crate) fn get(url: Url) -> Self {
        Self { method: "GET", url }
    }

    /// The request URL with the credential masked, suitable for logs and error messages.
    #[must_use]
    pub fn redacted_url(&self) -> String {
        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(k, v)| {
                if k == APP_ID_PARAM {
                    (k.into_owned(), "***".to_string())
                } else {
                    (k.into_owned(), v.into_owned())
                }
            })
            .collect();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        url.to_string()
    }
}

impl fmt::Debug for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestInfo")
            .field("method", &self.method)
            .field("url", &self.redacted_url())
            .finish()
    }
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.redacted_url())
    }
}

/// The response half of a failed API exchange.
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// The original request and response behind an API-level error.
#[derive(Debug, Clone)]
pub struct ApiExchange {
    /// What was sent.
    pub request: RequestInfo,
    /// What came back.
    pub response: ResponseInfo,
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum OxrError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured API base is not a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client builder was given an incomplete configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// No explicit client was passed and no default client has been initialized.
    #[error("no client: pass one explicitly or call oxr::init first")]
    NoClient,

    /// The response body is not valid JSON, or is JSON `null`. Checked before the status code.
    #[error("could not decode response from {} (status {}): {reason}", .exchange.request, .exchange.response.status)]
    Decode {
        /// The original request and response.
        exchange: Box<ApiExchange>,
        /// Why decoding failed.
        reason: String,
    },

    /// The API rejected the requested base currency (`invalid_base`).
    #[error("invalid base currency requested: {}", .0.request)]
    InvalidBase(Box<ApiExchange>),

    /// The API did not recognize the application credential (`invalid_app_id`).
    #[error("invalid app_id: {}", .0.request)]
    InvalidAppId(Box<ApiExchange>),

    /// The request carried no application credential (`missing_app_id`).
    #[error("missing app_id: {}", .0.request)]
    MissingAppId(Box<ApiExchange>),

    /// The credential's plan does not allow this request (`not_allowed`).
    #[error("request not allowed for this app_id: {}", .0.request)]
    NotAllowed(Box<ApiExchange>),

    /// Any other non-200 response.
    #[error(
        "unexpected response status {} from {}: {}",
        .exchange.response.status,
        .exchange.request,
        .message.as_deref().unwrap_or("<no message>")
    )]
    Status {
        /// The original request and response.
        exchange: Box<ApiExchange>,
        /// Machine-readable `message` field from the error body.
        message: Option<String>,
        /// Human-readable `description` field from the error body.
        description: Option<String>,
    },
}

impl OxrError {
    /// The request/response pair for API-level errors, `None` for transport and setup errors.
    #[must_use]
    pub fn exchange(&self) -> Option<&ApiExchange> {
        match self {
            Self::Decode { exchange, .. }
            | Self::Status { exchange, .. }
            | Self::InvalidBase(exchange)
            | Self::InvalidAppId(exchange)
            | Self::MissingAppId(exchange)
            | Self::NotAllowed(exchange) => Some(exchange.as_ref()),
            Self::Http(_) | Self::Url(_) | Self::Config(_) | Self::NoClient => None,
        }
    }

    /// HTTP status of the response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            other => other.exchange().map(|x| x.response.status),
        }
    }
}

/// Maps a decoded non-200 body to an error kind via its `message` field.
pub(crate) fn classify(exchange: ApiExchange, body: &Value) -> OxrError {
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
    let message = field("message");
    let description = field("description");

    let exchange = Box::new(exchange);
    match message.as_deref() {
        Some("invalid_base") => OxrError::InvalidBase(exchange),
        Some("invalid_app_id") => OxrError::InvalidAppId(exchange),
        Some("missing_app_id") => OxrError::MissingAppId(exchange),
        Some("not_allowed") => OxrError::NotAllowed(exchange),
        _ => OxrError::Status {
            exchange,
            message,
            description,
        },
    }
}
