//! Response envelope and per-operation payloads.
//!
//! Every gateway response is one JSON object: the shared `errorCode` /
//! `errorMessage` pair plus whatever fields the operation returns.
//! [`GatewayResponse`] models that as an envelope generic over the
//! payload, flattened into the same object on the wire.

use serde::{Deserialize, Serialize};

use crate::api::status::OrderStatus;
use crate::error::ApiError;

/// The envelope every gateway response shares.
///
/// `error_code` is authoritative: 0 means success, anything else is a
/// business failure. No other field participates in that decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse<T> {
    /// Raw gateway error code, preserved verbatim. 0 means success.
    #[serde(default)]
    pub error_code: i64,
    /// Human-readable error description, when the gateway provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Operation-specific payload fields.
    #[serde(flatten)]
    pub payload: T,
}

impl<T> GatewayResponse<T> {
    /// Returns true when the gateway reported success (`errorCode` 0).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Converts the envelope into a result, classifying non-zero codes.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] carrying the verbatim code and message when
    /// the gateway reported a non-zero `errorCode`.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::new(self.error_code, self.error_message))
        }
    }
}

/// Payload returned by the register operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    /// Gateway-assigned order identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Payment-page URL to redirect the cardholder to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_url: Option<String>,
}

/// Empty payload for operations that only acknowledge (`deposit`,
/// `reverse`, `refund`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ack {}

/// Stored-card binding identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindingInfo {
    /// Merchant-side customer identifier the binding belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Stored-card identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_id: Option<String>,
}

/// Payload returned by the order-status operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusPayload {
    /// Raw order state; see [`OrderStatus`] for the documented values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<i64>,
    /// Merchant-assigned order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Masked card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    /// Card expiration, `YYYYMM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    /// Cardholder name as printed on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    /// Amount in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Numeric ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<i32>,
    /// Issuer approval code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_code: Option<String>,
    /// Authorization code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    /// Cardholder IP address observed by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Stored-card binding details, when a binding was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_info: Option<BindingInfo>,
}

impl OrderStatusPayload {
    /// Maps the raw `orderStatus` to the documented vocabulary, if listed.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        self.order_status.and_then(OrderStatus::from_raw)
    }
}

/// 3-D Secure authentication details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureAuthInfo {
    /// Electronic commerce indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eci: Option<i32>,
    /// Cardholder authentication verification value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cavv: Option<String>,
    /// 3-D Secure transaction identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xid: Option<String>,
}

/// Card and authorization details on the extended status payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAuthInfo {
    /// Masked card number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masked_pan: Option<String>,
    /// Card expiration, `YYYYMM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    /// Cardholder name as printed on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    /// Issuer approval code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_code: Option<String>,
    /// 3-D Secure details, when the payment was authenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_auth_info: Option<SecureAuthInfo>,
}

/// Payload returned by the extended order-status operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusExtendedPayload {
    /// Merchant-assigned order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Raw order state; see [`OrderStatus`] for the documented values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<i64>,
    /// Processing action code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_code: Option<i32>,
    /// Human-readable description of the action code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_code_description: Option<String>,
    /// Amount in minor units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    /// Numeric ISO 4217 currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<i32>,
    /// Order registration date, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    /// Free-text order description supplied at registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    /// Cardholder IP address observed by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Card and authorization details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_auth_info: Option<CardAuthInfo>,
}

impl OrderStatusExtendedPayload {
    /// Maps the raw `orderStatus` to the documented vocabulary, if listed.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        self.order_status.and_then(OrderStatus::from_raw)
    }
}

/// Response to the register operations.
pub type RegisterResponse = GatewayResponse<RegisterPayload>;
/// Response to `deposit`, `reverse` and `refund`.
pub type AckResponse = GatewayResponse<Ack>;
/// Response to the order-status operation.
pub type OrderStatusResponse = GatewayResponse<OrderStatusPayload>;
/// Response to the extended order-status operation.
pub type OrderStatusExtendedResponse = GatewayResponse<OrderStatusExtendedPayload>;
