use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{floor_to_lot, RiskConfig, MIN_ORDER_AMOUNT};

/// Outcome of offering one sized candidate to the daily budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Exposure recorded; notify for `amount`.
    Approved { amount: Decimal },
    /// Clamped amount fell under [`MIN_ORDER_AMOUNT`]; nothing recorded.
    Skipped {
        candidate: Decimal,
        remaining: Decimal,
    },
}

impl Admission {
    pub fn is_approved(&self) -> bool {
        matches!(self, Admission::Approved { .. })
    }
}

/// Read-only view of the tracker, served by the status endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExposureSnapshot {
    pub date: Option<NaiveDate>,
    pub cumulative: Decimal,
    pub daily_budget: Decimal,
    pub remaining: Decimal,
}

/// New exposure committed within the current UTC day.
///
/// Starts with no day set, so the first [`ExposureTracker::roll_to`] always
/// opens a fresh day. Not thread-safe on its own; callers serialize access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExposureTracker {
    cfg: RiskConfig,
    date: Option<NaiveDate>,
    cumulative: Decimal,
}

impl ExposureTracker {
    pub fn new(cfg: RiskConfig) -> Self {
        Self {
            cfg,
            date: None,
            cumulative: Decimal::ZERO,
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.cfg
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn cumulative(&self) -> Decimal {
        self.cumulative
    }

    /// Day rollover: on a new date, store it and zero the running total.
    ///
    /// Returns `true` if a reset happened. Same-day calls are no-ops.
    pub fn roll_to(&mut self, today: NaiveDate) -> bool {
        if self.date == Some(today) {
            return false;
        }
        self.date = Some(today);
        self.cumulative = Decimal::ZERO;
        true
    }

    /// Lot-rounded budget left today, never negative.
    pub fn remaining(&self) -> Decimal {
        floor_to_lot(self.cfg.daily_budget() - self.cumulative).max(Decimal::ZERO)
    }

    /// Clamp `candidate` to what is left today and record it if it clears the
    /// minimum order size.
    pub fn admit(&mut self, candidate: Decimal) -> Admission {
        let remaining = self.remaining();
        let approved = candidate.min(remaining);

        if approved < MIN_ORDER_AMOUNT {
            return Admission::Skipped {
                candidate,
                remaining,
            };
        }

        self.cumulative += approved;
        Admission::Approved { amount: approved }
    }

    /// [`roll_to`](Self::roll_to) followed by [`admit`](Self::admit).
    pub fn admit_on(&mut self, today: NaiveDate, candidate: Decimal) -> Admission {
        self.roll_to(today);
        self.admit(candidate)
    }

    /// View as of `today` without mutating: a stale day reports a full budget.
    pub fn snapshot_at(&self, today: NaiveDate) -> ExposureSnapshot {
        let daily_budget = self.cfg.daily_budget();
        if self.date != Some(today) {
            return ExposureSnapshot {
                date: self.date,
                cumulative: self.cumulative,
                daily_budget,
                remaining: floor_to_lot(daily_budget).max(Decimal::ZERO),
            };
        }
        ExposureSnapshot {
            date: self.date,
            cumulative: self.cumulative,
            daily_budget,
            remaining: self.remaining(),
        }
    }
}
