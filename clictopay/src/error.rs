//! Validation errors and gateway error-code classification.
//!
//! Failures split into two tiers here: [`RequestError`] covers caller
//! input rejected before anything leaves the process, and [`ApiError`]
//! covers business errors the gateway reports through a non-zero
//! `errorCode`. Transport failures belong to the HTTP crate.

use std::fmt;

/// Errors raised while validating a request before it is sent.
///
/// These are deterministic caller-input errors, raised before any network
/// traffic and recoverable by correcting the offending field. Variants
/// carry the wire name of the parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// A mandatory parameter is absent, empty or whitespace-only.
    #[error("required parameter '{0}' is missing or empty")]
    MissingField(&'static str),

    /// A numeric parameter that must be positive was zero or negative.
    #[error("parameter '{field}' must be positive, got {value}")]
    InvalidRange {
        /// Wire name of the offending parameter.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
}

/// Classification of a non-zero gateway error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// Code 1: an order with this order number was already processed.
    DuplicateOrder,
    /// Code 2: the order was declined over the payment credentials.
    PaymentCredentials,
    /// Code 3: the currency code is unknown to the gateway.
    UnknownCurrency,
    /// Codes 4 and 5: a request parameter is missing or carries a bad
    /// value.
    InvalidParameter,
    /// Codes 4 and 5 when the gateway reports denied merchant access.
    AccessDenied,
    /// Code 6: no order is registered under the given identifier.
    OrderNotFound,
    /// Code 7: the gateway failed internally.
    SystemError,
    /// Any code not documented above.
    Unknown,
}

impl ApiErrorKind {
    /// Maps a non-zero gateway error code and its message to a kind.
    ///
    /// Codes 4 and 5 share one branch: both report parameter problems, and
    /// the gateway signals denied merchant access through them with an
    /// "Accès refusé" message rather than a dedicated code. That substring
    /// match is gateway-wording-dependent and kept for compatibility.
    #[must_use]
    pub fn classify(code: i64, message: Option<&str>) -> Self {
        match code {
            1 => Self::DuplicateOrder,
            2 => Self::PaymentCredentials,
            3 => Self::UnknownCurrency,
            4 | 5 => {
                if message.is_some_and(|m| m.to_lowercase().contains("accès refusé")) {
                    Self::AccessDenied
                } else {
                    Self::InvalidParameter
                }
            }
            6 => Self::OrderNotFound,
            7 => Self::SystemError,
            _ => Self::Unknown,
        }
    }

    /// Returns the `snake_case` label for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DuplicateOrder => "duplicate_order",
            Self::PaymentCredentials => "payment_credentials",
            Self::UnknownCurrency => "unknown_currency",
            Self::InvalidParameter => "invalid_parameter",
            Self::AccessDenied => "access_denied",
            Self::OrderNotFound => "order_not_found",
            Self::SystemError => "system_error",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A business error reported by the gateway through a non-zero
/// `errorCode`.
///
/// The raw code and message are preserved verbatim, so codes the gateway
/// adds later stay diagnosable even though they classify as
/// [`ApiErrorKind::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    code: i64,
    message: Option<String>,
}

impl ApiError {
    /// Classifies a non-zero gateway error code into a typed failure.
    #[must_use]
    pub fn new(code: i64, message: Option<String>) -> Self {
        let kind = ApiErrorKind::classify(code, message.as_deref());
        Self {
            kind,
            code,
            message,
        }
    }

    /// Returns the classified failure kind.
    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// Returns the gateway's error code, verbatim.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Returns the gateway's human-readable error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gateway error {} ({})", self.code, self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
