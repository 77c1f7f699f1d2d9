use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::{floor_to_lot, RiskConfig, SizingError, STOP_ATR_MULTIPLE, UNITS_DP};

/// Every intermediate of one sizing pass, for debug logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SizingBreakdown {
    /// Currency lost if the stop is hit.
    pub risk_budget: Decimal,
    /// Stop distance per unit (`1.5 * atr`).
    pub per_unit_risk: Decimal,
    /// Units affordable within the risk budget, truncated to 6 dp.
    pub units: Decimal,
    /// `units * entry` before the per-coin cap; the cap itself if that overflows.
    pub raw_notional: Decimal,
    /// Per-coin ceiling.
    pub cap: Decimal,
    /// Final lot-rounded, non-negative amount.
    pub amount: Decimal,
}

/// Protective stop assumed by the sizer.
pub fn stop_price(entry: Decimal, atr: Decimal) -> Decimal {
    entry - STOP_ATR_MULTIPLE * atr
}

/// Bounded trade size in currency units.
///
/// Result is always a non-negative multiple of [`crate::LOT_SIZE`] and never
/// above [`RiskConfig::per_coin_cap`]. Zero ATR yields zero.
pub fn size_position(cfg: &RiskConfig, entry: Decimal, atr: Decimal) -> Result<Decimal, SizingError> {
    size_position_detailed(cfg, entry, atr).map(|b| b.amount)
}

/// [`size_position`] with all intermediates kept.
pub fn size_position_detailed(
    cfg: &RiskConfig,
    entry: Decimal,
    atr: Decimal,
) -> Result<SizingBreakdown, SizingError> {
    let risk_budget = cfg
        .bankroll
        .checked_mul(cfg.risk_pct)
        .ok_or(SizingError::Overflow { step: "risk_budget" })?
        / dec!(100);

    // Saturates: an ATR this large leaves zero affordable units.
    let per_unit_risk = atr
        .checked_mul(STOP_ATR_MULTIPLE)
        .unwrap_or(Decimal::MAX);

    let cap = cfg.per_coin_cap();

    // Overflow in either step means the notional is past the cap.
    let (units, raw_notional) = if per_unit_risk > Decimal::ZERO {
        match risk_budget.checked_div(per_unit_risk) {
            Some(q) => {
                let units = q
                    .round_dp_with_strategy(UNITS_DP, RoundingStrategy::ToNegativeInfinity)
                    .max(Decimal::ZERO);
                (units, units.checked_mul(entry).unwrap_or(cap))
            }
            None => (Decimal::MAX, cap),
        }
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    let amount = floor_to_lot(raw_notional.min(cap)).max(Decimal::ZERO);

    Ok(SizingBreakdown {
        risk_budget,
        per_unit_risk,
        units,
        raw_notional,
        cap,
        amount,
    })
}
