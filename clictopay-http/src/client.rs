//! The async gateway client.
//!
//! [`GatewayClient`] drives the seven REST operations under
//! `{base}/payment/rest/`: register, registerPreAuth, deposit, reverse,
//! refund, getOrderStatus and getOrderStatusExtended. Every call follows
//! the same pipeline: validate and build the query parameters (merchant
//! credentials first), GET the operation endpoint, check the HTTP status,
//! decode the JSON envelope and classify the gateway's error code.
//!
//! ## Error Handling
//!
//! [`ClientError`] separates the failure tiers: rejected caller input,
//! URL construction, HTTP transport, unexpected status codes, response
//! decoding, and business errors the gateway reports through `errorCode`.
//! Retries and backoff are deliberately left to the caller.

use std::fmt;
use std::fmt::Display;

use clictopay::api::requests::{
    CancelRequest, ConfirmRequest, OrderStatusExtendedRequest, OrderStatusRequest, RefundRequest,
    RegisterRequest,
};
use clictopay::api::responses::{
    AckResponse, GatewayResponse, OrderStatusExtendedResponse, OrderStatusResponse,
    RegisterResponse,
};
use clictopay::api::{GatewayRequest, Operation};
use clictopay::params::QueryParams;
use reqwest::Client;
use url::Url;

use crate::config::GatewayConfig;
use crate::constants::REST_PATH;
use crate::error::{ClientError, ConfigError};

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

/// An asynchronous client for the gateway's REST API.
///
/// Built once from a [`GatewayConfig`]; cheap to clone, and clones share
/// the underlying connection pool. Calls hold no state between one
/// another, so one client can serve concurrent callers.
#[derive(Clone)]
pub struct GatewayClient {
    /// Merchant API username, sent as the `userName` parameter.
    username: String,
    /// Merchant API password, sent as the `password` parameter.
    password: String,
    /// Resolved `{base}/payment/rest/` root the endpoints join onto.
    rest_url: Url,
    /// Shared reqwest HTTP client.
    client: Client,
}

impl GatewayClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a credential is blank, the base URL
    /// cannot host the gateway paths, or the transport client cannot be
    /// built.
    pub fn new(config: GatewayConfig) -> Result<Self, ConfigError> {
        if config.username.trim().is_empty() {
            return Err(ConfigError::MissingCredential("username"));
        }
        if config.password.trim().is_empty() {
            return Err(ConfigError::MissingCredential("password"));
        }

        // Normalize: strip trailing slashes and add a single trailing
        // slash, so joining the rest path cannot swallow a base segment.
        let mut base = config.endpoint.base_url().trim_end_matches('/').to_owned();
        base.push('/');
        let rest_url = Url::parse(&base)
            .and_then(|url| url.join(REST_PATH))
            .map_err(|source| ConfigError::BaseUrl { source })?;

        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(|source| ConfigError::HttpClient { source })?,
        };

        Ok(Self {
            username: config.username,
            password: config.password,
            rest_url,
            client,
        })
    }

    /// Returns the resolved `payment/rest/` root this client calls.
    #[must_use]
    pub const fn rest_url(&self) -> &Url {
        &self.rest_url
    }

    /// Registers a one-phase payment (`register.do`).
    ///
    /// On success the payload carries the gateway order id and the
    /// payment-page URL to redirect the cardholder to.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.register",
            skip_all,
            fields(order_number = %request.order_number),
            err
        )
    )]
    pub async fn register_payment(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ClientError> {
        self.send(Operation::Register, request).await
    }

    /// Registers a two-phase payment (`registerPreAuth.do`).
    ///
    /// Takes the same record as [`Self::register_payment`]; the held
    /// amount is captured later with [`Self::confirm_pre_auth`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.register_pre_auth",
            skip_all,
            fields(order_number = %request.order_number),
            err
        )
    )]
    pub async fn register_pre_auth(
        &self,
        request: &RegisterRequest,
    ) -> Result<RegisterResponse, ClientError> {
        self.send(Operation::RegisterPreAuth, request).await
    }

    /// Captures a pre-authorized amount (`deposit.do`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.confirm_pre_auth",
            skip_all,
            fields(order_id = %request.order_id),
            err
        )
    )]
    pub async fn confirm_pre_auth(
        &self,
        request: &ConfirmRequest,
    ) -> Result<AckResponse, ClientError> {
        self.send(Operation::Deposit, request).await
    }

    /// Cancels an authorization (`reverse.do`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.cancel",
            skip_all,
            fields(order_id = %request.order_id),
            err
        )
    )]
    pub async fn cancel_payment(&self, request: &CancelRequest) -> Result<AckResponse, ClientError> {
        self.send(Operation::Reverse, request).await
    }

    /// Refunds a captured payment (`refund.do`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.refund",
            skip_all,
            fields(order_id = %request.order_id),
            err
        )
    )]
    pub async fn refund_payment(&self, request: &RefundRequest) -> Result<AckResponse, ClientError> {
        self.send(Operation::Refund, request).await
    }

    /// Queries an order's state by gateway identifier
    /// (`getOrderStatus.do`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.order_status",
            skip_all,
            fields(order_id = %request.order_id),
            err
        )
    )]
    pub async fn order_status(
        &self,
        request: &OrderStatusRequest,
    ) -> Result<OrderStatusResponse, ClientError> {
        self.send(Operation::GetOrderStatus, request).await
    }

    /// Queries an order's extended state by merchant number
    /// (`getOrderStatusExtended.do`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when validation, transport, decoding or
    /// the gateway itself fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "clictopay.client.order_status_extended",
            skip_all,
            fields(order_number = %request.order_number),
            err
        )
    )]
    pub async fn order_status_extended(
        &self,
        request: &OrderStatusExtendedRequest,
    ) -> Result<OrderStatusExtendedResponse, ClientError> {
        self.send(Operation::GetOrderStatusExtended, request).await
    }

    /// Shared pipeline for all operations: build the query (credentials
    /// first), GET the endpoint, check the status, decode the envelope
    /// and classify the gateway's error code.
    ///
    /// Validation failures return before anything is sent. A non-success
    /// HTTP status returns before the body is ever decoded, so transport
    /// problems never masquerade as business errors.
    async fn send<R>(
        &self,
        operation: Operation,
        request: &R,
    ) -> Result<GatewayResponse<R::Payload>, ClientError>
    where
        R: GatewayRequest,
    {
        let mut params = QueryParams::with_credentials(&self.username, &self.password);
        request.write_params(&mut params)?;

        let mut url = self
            .rest_url
            .join(operation.endpoint())
            .map_err(|source| ClientError::Url {
                context: operation.as_str(),
                source,
            })?;
        url.set_query(Some(&params.encode()));

        let http_response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                context: operation.as_str(),
                source: e.without_url(),
            })?;

        let status = http_response.status();
        let result = if status.is_success() {
            match http_response.json::<GatewayResponse<R::Payload>>().await {
                Ok(envelope) => envelope.into_result().map_err(ClientError::Api),
                Err(e) => Err(ClientError::Decode {
                    context: operation.as_str(),
                    source: e.without_url(),
                }),
            }
        } else {
            let body = http_response
                .text()
                .await
                .map_err(|e| ClientError::BodyRead {
                    context: operation.as_str(),
                    source: e.without_url(),
                })?;
            Err(ClientError::HttpStatus {
                context: operation.as_str(),
                status,
                body,
            })
        };

        record_result_on_span(&result);

        result
    }
}

impl fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayClient")
            .field("username", &self.username)
            .field("rest_url", &self.rest_url)
            .finish_non_exhaustive()
    }
}

/// Records the outcome of a request on the current tracing span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Gateway request failed");
        }
    }
}

/// Records the outcome of a request on the current tracing span.
/// Noop when the telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;
    use clictopay::api::status::OrderStatus;
    use clictopay::error::{ApiErrorKind, RequestError};
    use serde_json::json;
    use std::collections::BTreeMap;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GatewayClient {
        let url = server.uri().parse::<Url>().expect("mock server URL");
        let config =
            GatewayConfig::new("merchant", "secret").with_endpoint(Endpoint::Custom(url));
        GatewayClient::new(config).expect("valid config")
    }

    fn register_request() -> RegisterRequest {
        RegisterRequest {
            order_number: "ord".to_owned(),
            amount: 100,
            currency: 978,
            return_url: "https://shop.example/return".to_owned(),
            ..RegisterRequest::default()
        }
    }

    #[test]
    fn blank_credentials_fail_at_construction() {
        let err = GatewayClient::new(GatewayConfig::new("", "secret")).expect_err("blank username");
        assert!(matches!(err, ConfigError::MissingCredential("username")));

        let err =
            GatewayClient::new(GatewayConfig::new("merchant", "  ")).expect_err("blank password");
        assert!(matches!(err, ConfigError::MissingCredential("password")));
    }

    #[tokio::test]
    async fn validation_failures_skip_the_network() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let missing_order = RegisterRequest {
            order_number: String::new(),
            ..register_request()
        };
        let err = client
            .register_payment(&missing_order)
            .await
            .expect_err("missing order number");
        assert!(matches!(
            err,
            ClientError::Request(RequestError::MissingField("orderNumber"))
        ));

        let negative_refund = RefundRequest {
            order_id: "gw-1".to_owned(),
            amount: -5,
        };
        let err = client
            .refund_payment(&negative_refund)
            .await
            .expect_err("negative amount");
        assert!(matches!(
            err,
            ClientError::Request(RequestError::InvalidRange {
                field: "amount",
                value: -5
            })
        ));

        let received = server.received_requests().await.expect("recording enabled");
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn register_round_trip_decodes_the_payment_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/register.do"))
            .and(query_param("userName", "merchant"))
            .and(query_param("password", "secret"))
            .and(query_param("orderNumber", "ord"))
            .and(query_param("amount", "100"))
            .and(query_param("currency", "978"))
            .and(query_param("returnUrl", "https://shop.example/return"))
            .and(query_param("jsonParams", r#"{"a":"1"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": 0,
                "orderId": "123",
                "formUrl": "url"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut request = register_request();
        request
            .json_params
            .insert("a".to_owned(), "1".to_owned());

        let response = client
            .register_payment(&request)
            .await
            .expect("successful registration");
        assert!(response.is_success());
        assert_eq!(response.payload.order_id.as_deref(), Some("123"));
        assert_eq!(response.payload.form_url.as_deref(), Some("url"));
    }

    #[tokio::test]
    async fn register_pre_auth_targets_its_own_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/registerPreAuth.do"))
            .and(query_param("orderNumber", "ord"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": 0,
                "orderId": "456",
                "formUrl": "url"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client
            .register_pre_auth(&register_request())
            .await
            .expect("successful pre-authorization");
        assert_eq!(response.payload.order_id.as_deref(), Some("456"));
    }

    #[tokio::test]
    async fn gateway_error_codes_classify_into_kinds() {
        let cases = [
            (1, ApiErrorKind::DuplicateOrder),
            (2, ApiErrorKind::PaymentCredentials),
            (3, ApiErrorKind::UnknownCurrency),
            (4, ApiErrorKind::InvalidParameter),
            (5, ApiErrorKind::InvalidParameter),
            (6, ApiErrorKind::OrderNotFound),
            (7, ApiErrorKind::SystemError),
            (99, ApiErrorKind::Unknown),
        ];

        for (code, kind) in cases {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/payment/rest/deposit.do"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "errorCode": code,
                    "errorMessage": "réponse de la passerelle"
                })))
                .mount(&server)
                .await;

            let client = client_for(&server);
            let request = ConfirmRequest {
                order_id: "gw-1".to_owned(),
                amount: None,
            };
            let err = client
                .confirm_pre_auth(&request)
                .await
                .expect_err("business failure");
            match err {
                ClientError::Api(api) => {
                    assert_eq!(api.kind(), kind, "code {code}");
                    assert_eq!(api.code(), code);
                    assert_eq!(api.message(), Some("réponse de la passerelle"));
                }
                other => panic!("expected ApiError for code {code}, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn access_denied_is_detected_from_the_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/reverse.do"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": 5,
                "errorMessage": "ACCÈS REFUSÉ"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = CancelRequest {
            order_id: "gw-1".to_owned(),
            language: None,
        };
        let err = client
            .cancel_payment(&request)
            .await
            .expect_err("access denied");
        match err {
            ClientError::Api(api) => {
                assert_eq!(api.kind(), ApiErrorKind::AccessDenied);
                assert_eq!(api.code(), 5);
            }
            other => panic!("expected ApiError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_status_bypasses_classification() {
        let server = MockServer::start().await;
        // The body looks like a classifiable envelope; the status must win.
        Mock::given(method("GET"))
            .and(path("/payment/rest/refund.do"))
            .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"errorCode":6}"#))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = RefundRequest {
            order_id: "gw-1".to_owned(),
            amount: 100,
        };
        let err = client
            .refund_payment(&request)
            .await
            .expect_err("transport failure");
        match err {
            ClientError::HttpStatus { status, body, .. } => {
                assert_eq!(status, http::StatusCode::BAD_REQUEST);
                assert!(body.contains("errorCode"));
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/getOrderStatus.do"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = OrderStatusRequest {
            order_id: "gw-1".to_owned(),
            language: None,
        };
        let err = client
            .order_status(&request)
            .await
            .expect_err("undecodable body");
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn order_status_queries_send_their_identifier() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/getOrderStatus.do"))
            .and(query_param("orderId", "gw-1"))
            .and(query_param("language", "fr"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": 0,
                "orderStatus": 2,
                "orderNumber": "ord",
                "amount": 100,
                "currency": 978
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/getOrderStatusExtended.do"))
            .and(query_param("orderNumber", "ord"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": 0,
                "orderNumber": "ord",
                "orderStatus": 6,
                "actionCode": -2007
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);

        let status = client
            .order_status(&OrderStatusRequest {
                order_id: "gw-1".to_owned(),
                language: Some("fr".to_owned()),
            })
            .await
            .expect("status lookup");
        assert_eq!(status.payload.status(), Some(OrderStatus::Deposited));
        assert_eq!(status.payload.amount, Some(100));

        let extended = client
            .order_status_extended(&OrderStatusExtendedRequest {
                order_number: "ord".to_owned(),
                language: None,
            })
            .await
            .expect("extended lookup");
        assert_eq!(extended.payload.status(), Some(OrderStatus::Declined));
        assert_eq!(extended.payload.action_code, Some(-2007));
    }

    #[tokio::test]
    async fn optional_fields_left_unset_are_not_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payment/rest/register.do"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errorCode": 0,
                "orderId": "123",
                "formUrl": "url"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let mut request = register_request();
        request.fail_url = Some("   ".to_owned());
        request.json_params = BTreeMap::new();
        client
            .register_payment(&request)
            .await
            .expect("successful registration");

        let received = server.received_requests().await.expect("recording enabled");
        let query = received[0].url.query().unwrap_or_default().to_owned();
        assert!(!query.contains("failUrl"));
        assert!(!query.contains("jsonParams"));
        assert!(!query.contains("sessionTimeoutSecs"));
    }
}
