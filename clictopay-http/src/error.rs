//! Error types for the gateway HTTP client.
//!
//! [`ConfigError`] covers construction-time problems; [`ClientError`]
//! covers everything a call can fail with: rejected input, URL
//! construction, transport, decoding and the gateway's own business
//! errors. `reqwest` sources are stored with their URL stripped, since the
//! query string carries the merchant credentials.

use clictopay::error::{ApiError, RequestError};
use http::StatusCode;

/// Errors raised while building a [`crate::client::GatewayClient`] from
/// its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A merchant credential is empty or whitespace-only.
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    /// The configured base URL cannot host the gateway paths.
    #[error("invalid base URL: {source}")]
    BaseUrl {
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// Building the transport client failed.
    #[error("failed to build HTTP client: {source}")]
    HttpClient {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
}

/// Errors raised by [`crate::client::GatewayClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A request field failed validation; nothing was sent.
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    /// Building the operation URL failed.
    #[error("URL construction error: {context}: {source}")]
    Url {
        /// The gateway operation being built.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// HTTP transport error.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// The gateway operation being called.
        context: &'static str,
        /// The underlying reqwest error, URL stripped.
        #[source]
        source: reqwest::Error,
    },

    /// The gateway answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// The gateway operation being called.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body text.
        body: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to decode response: {context}: {source}")]
    Decode {
        /// The gateway operation being called.
        context: &'static str,
        /// The underlying reqwest error, URL stripped.
        #[source]
        source: reqwest::Error,
    },

    /// Failed to read the body of a non-success response.
    #[error("failed to read response body: {context}: {source}")]
    BodyRead {
        /// The gateway operation being called.
        context: &'static str,
        /// The underlying reqwest error, URL stripped.
        #[source]
        source: reqwest::Error,
    },

    /// The gateway reported a business error through `errorCode`.
    #[error("{0}")]
    Api(#[from] ApiError),
}
