#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the `ClicToPay` payment gateway API.
//!
//! `ClicToPay` is a bank-card payment gateway driven through a REST API of
//! seven GET operations: register a payment, register a pre-authorization,
//! deposit (capture), reverse, refund, and two order-status queries. This
//! crate carries the transport-free half of the SDK: request records and
//! their validation, the ordered query-parameter builder, the response
//! envelope with its per-operation payloads, and the classification of
//! gateway error codes into typed failures.
//!
//! The HTTP client lives in the companion `clictopay-http` crate; nothing
//! here opens a connection, so these types can back any transport.
//!
//! # Modules
//!
//! - [`api`] - Operations, request records and response payloads
//! - [`error`] - Validation errors and gateway error-code classification
//! - [`params`] - Ordered query-parameter building and encoding
//!
//! # Example
//!
//! ```
//! use clictopay::api::GatewayRequest;
//! use clictopay::api::requests::RegisterRequest;
//! use clictopay::params::QueryParams;
//!
//! let request = RegisterRequest {
//!     order_number: "ord-20260825-001".to_owned(),
//!     amount: 100_000,
//!     currency: 788,
//!     return_url: "https://shop.example/return".to_owned(),
//!     ..RegisterRequest::default()
//! };
//!
//! let mut params = QueryParams::with_credentials("merchant_api", "secret");
//! request.write_params(&mut params)?;
//! assert!(params.encode().starts_with("userName=merchant_api"));
//! # Ok::<(), clictopay::error::RequestError>(())
//! ```

pub mod api;
pub mod error;
pub mod params;
