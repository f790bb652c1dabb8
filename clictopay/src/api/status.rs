//! Order lifecycle vocabulary.

use std::fmt;

/// Documented states of an order, as reported in `orderStatus`.
///
/// The raw integer always travels alongside this vocabulary on the
/// payloads; values the gateway adds later simply have no case here and
/// map to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// 0: order registered but not paid.
    Registered,
    /// 1: pre-authorization hold placed on the amount.
    PreAuthorized,
    /// 2: amount captured.
    Deposited,
    /// 3: authorization reversed.
    Reversed,
    /// 4: transaction refunded.
    Refunded,
    /// 5: authorization through the issuer's ACS started.
    AcsAuthInitiated,
    /// 6: authorization declined.
    Declined,
}

impl OrderStatus {
    /// Maps a raw `orderStatus` value to the documented vocabulary.
    #[must_use]
    pub const fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Registered),
            1 => Some(Self::PreAuthorized),
            2 => Some(Self::Deposited),
            3 => Some(Self::Reversed),
            4 => Some(Self::Refunded),
            5 => Some(Self::AcsAuthInitiated),
            6 => Some(Self::Declined),
            _ => None,
        }
    }

    /// Returns the raw wire value for this state.
    #[must_use]
    pub const fn as_raw(&self) -> i64 {
        match self {
            Self::Registered => 0,
            Self::PreAuthorized => 1,
            Self::Deposited => 2,
            Self::Reversed => 3,
            Self::Refunded => 4,
            Self::AcsAuthInitiated => 5,
            Self::Declined => 6,
        }
    }

    /// Returns the `snake_case` label for this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::PreAuthorized => "pre_authorized",
            Self::Deposited => "deposited",
            Self::Reversed => "reversed",
            Self::Refunded => "refunded",
            Self::AcsAuthInitiated => "acs_auth_initiated",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
