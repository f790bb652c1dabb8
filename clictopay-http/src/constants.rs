//! Gateway host constants.

/// Base URL of the sandbox (test) gateway environment.
pub const SANDBOX_URL: &str = "https://test.clictopay.com";

/// Base URL of the production gateway environment.
pub const PRODUCTION_URL: &str = "https://api.clictopay.com";

/// Path prefix every operation endpoint lives under, relative to the base
/// URL.
pub const REST_PATH: &str = "payment/rest/";
