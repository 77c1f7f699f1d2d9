//! Typed, validated trade signal.
//!
//! The HTTP layer decodes the raw webhook body into optional fields and hands
//! them to [`Signal::from_parts`]. Every check that decides "Bad payload"
//! lives here so the rule set is testable without a router.

use std::str::FromStr;

use rust_decimal::Decimal;

/// One inbound trade idea. Transient; never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signal {
    /// Ticker as sent by the alerting source (e.g. `"SOLUSDT"`).
    pub symbol: String,
    /// Approximate entry price, > 0.
    pub entry: Decimal,
    /// Average True Range at signal time, > 0.
    pub atr: Decimal,
}

/// Reasons a webhook payload cannot become a [`Signal`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SignalError {
    #[error("field '{0}' is missing")]
    Missing(&'static str),
    #[error("field 'symbol' is empty")]
    EmptySymbol,
    #[error("field '{field}' must be > 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("field '{field}' is not a representable price: {value}")]
    Unrepresentable { field: &'static str, value: f64 },
}

impl Signal {
    /// Validate already-decoded fields.
    ///
    /// Zero counts as absent for `entry` and `atr`: a zero ATR cannot bound
    /// risk and a zero entry cannot be bought.
    pub fn from_parts(
        symbol: Option<&str>,
        entry: Option<f64>,
        atr: Option<f64>,
    ) -> Result<Self, SignalError> {
        let symbol = symbol.ok_or(SignalError::Missing("symbol"))?.trim();
        if symbol.is_empty() {
            return Err(SignalError::EmptySymbol);
        }

        let entry = positive_decimal("entry", entry)?;
        let atr = positive_decimal("atr", atr)?;

        Ok(Self {
            symbol: symbol.to_string(),
            entry,
            atr,
        })
    }
}

fn positive_decimal(field: &'static str, value: Option<f64>) -> Result<Decimal, SignalError> {
    let value = value.ok_or(SignalError::Missing(field))?;
    if !value.is_finite() {
        return Err(SignalError::Unrepresentable { field, value });
    }
    if value <= 0.0 {
        return Err(SignalError::NotPositive { field, value });
    }

    // f64 Display is the shortest string that round-trips, so 0.1 stays 0.1
    // instead of picking up binary noise.
    let d = Decimal::from_str(&value.to_string())
        .map_err(|_| SignalError::Unrepresentable { field, value })?;
    if d <= Decimal::ZERO {
        return Err(SignalError::Unrepresentable { field, value });
    }
    Ok(d)
}
