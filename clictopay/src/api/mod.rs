//! Gateway operations and their request/response wire types.
//!
//! The gateway exposes seven GET operations under `payment/rest/`. Each
//! request record in [`requests`] implements [`GatewayRequest`], which
//! declares the payload its response decodes to and pushes the record's
//! fields through the shared parameter builder. Response shapes live in
//! [`responses`], the order lifecycle vocabulary in [`status`].

pub mod requests;
pub mod responses;
pub mod status;

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::params::QueryParams;

/// The seven remote operations exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Registers a one-phase payment.
    Register,
    /// Registers a two-phase payment (authorization hold).
    RegisterPreAuth,
    /// Captures a pre-authorized amount.
    Deposit,
    /// Cancels an authorization.
    Reverse,
    /// Refunds a captured payment.
    Refund,
    /// Queries the state of an order by gateway identifier.
    GetOrderStatus,
    /// Queries the extended state of an order by merchant number.
    GetOrderStatusExtended,
}

impl Operation {
    /// Returns the operation name as it appears in the endpoint path.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::RegisterPreAuth => "registerPreAuth",
            Self::Deposit => "deposit",
            Self::Reverse => "reverse",
            Self::Refund => "refund",
            Self::GetOrderStatus => "getOrderStatus",
            Self::GetOrderStatusExtended => "getOrderStatusExtended",
        }
    }

    /// Returns the `.do` path segment for this operation, relative to the
    /// gateway's `payment/rest/` root.
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Register => "register.do",
            Self::RegisterPreAuth => "registerPreAuth.do",
            Self::Deposit => "deposit.do",
            Self::Reverse => "reverse.do",
            Self::Refund => "refund.do",
            Self::GetOrderStatus => "getOrderStatus.do",
            Self::GetOrderStatusExtended => "getOrderStatusExtended.do",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request record for one family of gateway operations.
///
/// Implementations declare the payload their response carries and append
/// their parameters in wire order through [`QueryParams`], which enforces
/// the shared validation and omission rules. The operation itself is
/// chosen by the caller, since the register and pre-authorization
/// endpoints share one record shape.
pub trait GatewayRequest {
    /// Payload carried by a successful response to this request.
    type Payload: DeserializeOwned;

    /// Validates the record and appends its parameters in wire order.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when a mandatory field is blank or a
    /// numeric field is out of range. Nothing is sent when this fails.
    fn write_params(&self, params: &mut QueryParams) -> Result<(), RequestError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_the_operation_name_with_do_suffix() {
        let operations = [
            Operation::Register,
            Operation::RegisterPreAuth,
            Operation::Deposit,
            Operation::Reverse,
            Operation::Refund,
            Operation::GetOrderStatus,
            Operation::GetOrderStatusExtended,
        ];
        for operation in operations {
            assert_eq!(operation.endpoint(), format!("{operation}.do"));
        }
    }
}
