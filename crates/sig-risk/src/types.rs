use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Per-coin cap as a percentage of bankroll. Not externally configurable.
pub const MAX_COIN_PCT: Decimal = dec!(10);

/// Maximum new exposure added per UTC day, as a percentage of bankroll.
pub const MAX_DAILY_PCT: Decimal = dec!(15);

/// Approved amounts below this are dropped instead of notified.
pub const MIN_ORDER_AMOUNT: Decimal = dec!(20);

/// Broker lot size: every suggested amount is a multiple of this.
pub const LOT_SIZE: Decimal = dec!(5);

/// Assumed stop distance below entry, in ATRs.
pub const STOP_ATR_MULTIPLE: Decimal = dec!(1.5);

/// Decimal places kept on the unit count before it is multiplied out.
pub const UNITS_DP: u32 = 6;

/// Risk configuration (thresholds + bankroll).
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskConfig {
    /// Capital base all percentages are taken against.
    pub bankroll: Decimal,

    /// Percentage of bankroll lost if the stop is hit.
    pub risk_pct: Decimal,

    /// Hard ceiling per signal, percentage of bankroll.
    pub max_coin_pct: Decimal,

    /// Ceiling on new exposure per UTC day, percentage of bankroll.
    pub max_daily_pct: Decimal,
}

impl RiskConfig {
    /// Config with the fixed per-coin and daily caps.
    pub fn with_fixed_caps(bankroll: Decimal, risk_pct: Decimal) -> Self {
        Self {
            bankroll,
            risk_pct,
            max_coin_pct: MAX_COIN_PCT,
            max_daily_pct: MAX_DAILY_PCT,
        }
    }

    /// Bankroll 240, 0.75% risk per idea.
    pub fn sane_defaults() -> Self {
        Self::with_fixed_caps(dec!(240), dec!(0.75))
    }

    /// Largest notional a single signal may receive.
    pub fn per_coin_cap(&self) -> Decimal {
        pct_of(self.bankroll, self.max_coin_pct)
    }

    /// Largest cumulative new exposure per UTC day (before lot rounding).
    pub fn daily_budget(&self) -> Decimal {
        pct_of(self.bankroll, self.max_daily_pct)
    }
}

/// Errors raised by the sizing arithmetic.
///
/// These never come from well-formed signals; they indicate values large
/// enough to leave `Decimal` range and are surfaced as internal errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SizingError {
    #[error("sizing arithmetic overflow at step '{step}'")]
    Overflow { step: &'static str },
}

/// `amount * pct / 100`.
pub(crate) fn pct_of(amount: Decimal, pct: Decimal) -> Decimal {
    amount * pct / dec!(100)
}

/// Round down to the nearest multiple of [`LOT_SIZE`].
pub fn floor_to_lot(amount: Decimal) -> Decimal {
    (amount / LOT_SIZE).floor() * LOT_SIZE
}
