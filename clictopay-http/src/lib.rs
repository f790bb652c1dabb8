//! HTTP client for the `ClicToPay` payment gateway REST API.
//!
//! Pairs the transport-free records and validation from the `clictopay`
//! crate with a reqwest-backed async client. Configure credentials and
//! an environment with [`config::GatewayConfig`], build a
//! [`client::GatewayClient`], then call the gateway operations on it.
//!
//! # Modules
//!
//! - [`client`] - the async [`client::GatewayClient`] and its operations
//! - [`config`] - credentials, environment selection and HTTP tuning
//! - [`constants`] - gateway hosts and the shared REST path
//! - [`error`] - configuration and per-request failure types
//!
//! # Feature Flags
//!
//! - `telemetry` - instruments every operation with `tracing` spans and
//!   records failures on them
//!
//! # Example
//!
//! ```no_run
//! use clictopay::api::requests::RegisterRequest;
//! use clictopay_http::client::GatewayClient;
//! use clictopay_http::config::GatewayConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::new("merchant_api", "secret");
//! let client = GatewayClient::new(config)?;
//!
//! let request = RegisterRequest {
//!     order_number: "ord-20260825-001".to_owned(),
//!     amount: 100_000,
//!     currency: 788,
//!     return_url: "https://shop.example/return".to_owned(),
//!     ..RegisterRequest::default()
//! };
//! let response = client.register_payment(&request).await?;
//! let _payment_page = response.payload.form_url;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
