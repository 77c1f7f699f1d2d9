//! Request and response types for all sig-daemon HTTP endpoints.
//!
//! No business logic lives here beyond decoding the webhook body.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sig_risk::{ExposureSnapshot, Signal, SignalError};

// ---------------------------------------------------------------------------
// POST /webhook
// ---------------------------------------------------------------------------

/// Raw webhook body. Every field is optional at this layer so that a
/// missing field and a wrong type both end up as "Bad payload".
///
/// Numbers must be JSON numbers; `"100"` is a decode error, not a coercion.
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub entry: Option<f64>,
    #[serde(default)]
    pub atr: Option<f64>,
}

/// Failure to turn a request body into a [`Signal`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("body is not a valid webhook object: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SignalError),
}

impl WebhookPayload {
    pub fn into_signal(self) -> Result<Signal, SignalError> {
        Signal::from_parts(self.symbol.as_deref(), self.entry, self.atr)
    }
}

/// Decode and validate a raw webhook body.
pub fn parse_signal(body: &[u8]) -> Result<Signal, PayloadError> {
    let payload: WebhookPayload = serde_json::from_slice(body)?;
    Ok(payload.into_signal()?)
}

/// Body for every `/webhook` outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookResponse {
    /// Alert delivered.
    pub fn sent() -> Self {
        Self {
            ok: true,
            skipped: None,
            error: None,
        }
    }

    /// Below the minimum order size; nothing recorded, nothing sent.
    pub fn skipped() -> Self {
        Self {
            ok: true,
            skipped: Some(true),
            error: None,
        }
    }

    pub fn bad_payload() -> Self {
        Self {
            ok: false,
            skipped: None,
            error: Some("Bad payload".to_string()),
        }
    }

    /// Generic failure. Detail stays in the server log.
    pub fn failed() -> Self {
        Self {
            ok: false,
            skipped: None,
            error: None,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /status
// ---------------------------------------------------------------------------

/// Read-only daemon view: build info, risk parameters and today's exposure.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub bankroll: Decimal,
    pub risk_pct: Decimal,
    pub max_coin_pct: Decimal,
    pub max_daily_pct: Decimal,
    pub min_order_amount: Decimal,
    pub exposure: ExposureSnapshot,
}
