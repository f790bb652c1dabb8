//! Request records for the gateway operations.
//!
//! Records hold plain fields; validation happens when the record is
//! written through [`QueryParams`], in the same order the parameters go
//! out on the wire. Optional fields left unset are omitted from the
//! outgoing query entirely, never sent empty.

use std::collections::BTreeMap;
use std::fmt;

use crate::api::GatewayRequest;
use crate::api::responses::{
    Ack, OrderStatusExtendedPayload, OrderStatusPayload, RegisterPayload,
};
use crate::error::RequestError;
use crate::params::QueryParams;

/// Payment-page layout requested from the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageView {
    /// Full desktop payment page.
    #[default]
    Desktop,
    /// Mobile-optimized payment page.
    Mobile,
}

impl PageView {
    /// Returns the wire value for the `pageView` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "DESKTOP",
            Self::Mobile => "MOBILE",
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for registering a payment, one-phase or two-phase.
///
/// The same record serves `register` and `registerPreAuth`; the endpoint
/// is chosen by the client method.
#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    /// Merchant-assigned order number, unique per payment.
    pub order_number: String,
    /// Amount in the currency's minor unit. Must be positive.
    pub amount: i64,
    /// Numeric ISO 4217 currency code. Must be positive.
    pub currency: i32,
    /// URL the cardholder returns to after a successful payment.
    pub return_url: String,
    /// URL the cardholder is sent to when the payment fails.
    pub fail_url: Option<String>,
    /// Free-text order description.
    pub description: Option<String>,
    /// ISO 639-1 language for the payment page.
    pub language: Option<String>,
    /// Payment-page layout.
    pub page_view: Option<PageView>,
    /// Merchant-side customer identifier, required for bindings.
    pub client_id: Option<String>,
    /// Extra parameters forwarded to the gateway as embedded JSON text.
    pub json_params: BTreeMap<String, String>,
    /// Payment-session lifetime in seconds. An explicit 0 is sent as-is.
    pub session_timeout_secs: Option<u32>,
    /// Order expiration, `yyyy-MM-ddTHH:mm:ss`.
    pub expiration_date: Option<String>,
    /// Stored-card binding to charge for returning customers.
    pub binding_id: Option<String>,
}

impl GatewayRequest for RegisterRequest {
    type Payload = RegisterPayload;

    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError> {
        params.required("orderNumber", &self.order_number)?;
        params.required_positive("amount", self.amount)?;
        params.required_positive("currency", i64::from(self.currency))?;
        params.required("returnUrl", &self.return_url)?;
        params.optional("failUrl", self.fail_url.as_deref());
        params.optional("description", self.description.as_deref());
        params.optional("language", self.language.as_deref());
        params.optional("pageView", self.page_view.map(|v| v.as_str()));
        params.optional("clientId", self.client_id.as_deref());
        params.optional("expirationDate", self.expiration_date.as_deref());
        params.optional("bindingId", self.binding_id.as_deref());
        params.json_map("jsonParams", &self.json_params);
        params.optional_number("sessionTimeoutSecs", self.session_timeout_secs);
        Ok(())
    }
}

/// Parameters for capturing a pre-authorized amount (`deposit`).
#[derive(Debug, Clone, Default)]
pub struct ConfirmRequest {
    /// Gateway-assigned order identifier.
    pub order_id: String,
    /// Amount to capture in minor units. Unset, or an explicit 0, captures
    /// the full pre-authorized amount.
    pub amount: Option<i64>,
}

impl GatewayRequest for ConfirmRequest {
    type Payload = Ack;

    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError> {
        params.required("orderId", &self.order_id)?;
        params.optional_number("amount", self.amount);
        Ok(())
    }
}

/// Parameters for cancelling an authorization (`reverse`).
#[derive(Debug, Clone, Default)]
pub struct CancelRequest {
    /// Gateway-assigned order identifier.
    pub order_id: String,
    /// ISO 639-1 language for the gateway's messages.
    pub language: Option<String>,
}

impl GatewayRequest for CancelRequest {
    type Payload = Ack;

    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError> {
        params.required("orderId", &self.order_id)?;
        params.optional("language", self.language.as_deref());
        Ok(())
    }
}

/// Parameters for refunding a captured payment.
#[derive(Debug, Clone, Default)]
pub struct RefundRequest {
    /// Gateway-assigned order identifier.
    pub order_id: String,
    /// Amount to refund in minor units. Must be positive.
    pub amount: i64,
}

impl GatewayRequest for RefundRequest {
    type Payload = Ack;

    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError> {
        params.required("orderId", &self.order_id)?;
        params.required_positive("amount", self.amount)?;
        Ok(())
    }
}

/// Parameters for querying an order's state by gateway identifier.
#[derive(Debug, Clone, Default)]
pub struct OrderStatusRequest {
    /// Gateway-assigned order identifier.
    pub order_id: String,
    /// ISO 639-1 language for the gateway's messages.
    pub language: Option<String>,
}

impl GatewayRequest for OrderStatusRequest {
    type Payload = OrderStatusPayload;

    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError> {
        params.required("orderId", &self.order_id)?;
        params.optional("language", self.language.as_deref());
        Ok(())
    }
}

/// Parameters for querying an order's extended state by merchant number.
#[derive(Debug, Clone, Default)]
pub struct OrderStatusExtendedRequest {
    /// Merchant-assigned order number.
    pub order_number: String,
    /// ISO 639-1 language for the gateway's messages.
    pub language: Option<String>,
}

impl GatewayRequest for OrderStatusExtendedRequest {
    type Payload = OrderStatusExtendedPayload;

    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError> {
        params.required("orderNumber", &self.order_number)?;
        params.optional("language", self.language.as_deref());
        Ok(())
    }
}
