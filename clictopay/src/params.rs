//! Ordered query-parameter building shared by every gateway operation.
//!
//! All seven operations follow the same outgoing contract: merchant
//! credentials first, then mandatory parameters, then optional parameters
//! that actually carry a value. [`QueryParams`] centralizes the validation
//! and omission rules so request records only declare their fields.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::RequestError;

/// An ordered set of wire parameters for one gateway call.
///
/// Insertion order is preserved in the encoded query string, which keeps
/// outgoing requests deterministic and easy to assert on.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates a parameter set seeded with the merchant credentials.
    ///
    /// The gateway expects `userName` and `password` ahead of every other
    /// parameter.
    #[must_use]
    pub fn with_credentials(username: &str, password: &str) -> Self {
        let mut params = Self::new();
        params.entries.push(("userName", username.to_owned()));
        params.entries.push(("password", password.to_owned()));
        params
    }

    /// Appends a mandatory string parameter.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingField`] when the value is empty or
    /// whitespace-only.
    pub fn required(&mut self, name: &'static str, value: &str) -> Result<(), RequestError> {
        if value.trim().is_empty() {
            return Err(RequestError::MissingField(name));
        }
        self.entries.push((name, value.to_owned()));
        Ok(())
    }

    /// Appends a mandatory numeric parameter that must be positive.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidRange`] when the value is zero or
    /// negative.
    pub fn required_positive(
        &mut self,
        name: &'static str,
        value: i64,
    ) -> Result<(), RequestError> {
        if value <= 0 {
            return Err(RequestError::InvalidRange { field: name, value });
        }
        self.entries.push((name, value.to_string()));
        Ok(())
    }

    /// Appends an optional string parameter, omitting unset, empty and
    /// whitespace-only values entirely.
    pub fn optional(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.entries.push((name, value.to_owned()));
        }
    }

    /// Appends an optional numeric parameter.
    ///
    /// An explicit value is always sent, including zero; only an unset
    /// option is omitted.
    pub fn optional_number<N: fmt::Display>(&mut self, name: &'static str, value: Option<N>) {
        if let Some(value) = value {
            self.entries.push((name, value.to_string()));
        }
    }

    /// Appends a string-keyed map as a single parameter holding compact
    /// JSON text. Empty maps are omitted.
    pub fn json_map(&mut self, name: &'static str, map: &BTreeMap<String, String>) {
        if map.is_empty() {
            return;
        }
        let json = serde_json::to_string(map).expect("a string map always serializes");
        self.entries.push((name, json));
    }

    /// Returns the parameters in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(&'static str, String)] {
        &self.entries
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded`
    /// query string.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.entries {
            query.append_pair(name, value);
        }
        query.finish()
    }
}
