//! Core components of the `oxr` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`OxrClient`] and its builder, including the request executor.
//! - The primary [`OxrError`] type and the API error classification.
//! - Internal networking helpers.

/// The main client (`OxrClient`), builder, and configuration.
pub mod client;
/// The primary error type (`OxrError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{OxrClient, OxrClientBuilder};
pub use error::{ApiExchange, OxrError, RequestInfo, ResponseInfo};
