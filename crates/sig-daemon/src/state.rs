//! Shared runtime state for sig-daemon.
//!
//! Handlers receive `State<Arc<AppState>>` from Axum. The only mutable piece
//! is the exposure tracker, and every webhook enters its mutex exactly once.

use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use sig_notify::Notifier;
use sig_risk::{ExposureTracker, RiskConfig};
use tokio::sync::Mutex;

// ---------------------------------------------------------------------------
// BuildInfo
// ---------------------------------------------------------------------------

/// Static build metadata included in status responses.
#[derive(Clone, Debug, Serialize)]
pub struct BuildInfo {
    pub service: &'static str,
    pub version: &'static str,
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of "today" for the daily exposure rollover.
pub trait Clock: Send + Sync {
    fn today_utc(&self) -> NaiveDate;
}

/// Wall clock, UTC calendar date.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_utc(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Manually advanced clock for scenario tests.
#[derive(Debug)]
pub struct FixedClock {
    today: RwLock<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: RwLock::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        let mut guard = self.today.write().unwrap_or_else(|p| p.into_inner());
        *guard = today;
    }
}

impl Clock for FixedClock {
    fn today_utc(&self) -> NaiveDate {
        *self.today.read().unwrap_or_else(|p| p.into_inner())
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Cloneable (Arc) handle shared across all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Static build metadata.
    pub build: BuildInfo,
    /// Immutable risk parameters, kept outside the lock for formatting/status.
    pub risk: RiskConfig,
    /// Daily exposure. Roll, size and admit happen under one guard.
    pub exposure: Arc<Mutex<ExposureTracker>>,
    /// Outbound alert sink.
    pub notifier: Arc<dyn Notifier>,
    /// UTC date source.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(risk: RiskConfig, notifier: Arc<dyn Notifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            build: BuildInfo {
                service: "sig-daemon",
                version: env!("CARGO_PKG_VERSION"),
            },
            exposure: Arc::new(Mutex::new(ExposureTracker::new(risk.clone()))),
            risk,
            notifier,
            clock,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Monotonically increasing uptime since first call (process lifetime).
pub fn uptime_secs() -> u64 {
    static START: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();
    START
        .get_or_init(std::time::Instant::now)
        .elapsed()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_on_set() {
        let d1 = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let d2 = d1.succ_opt().unwrap();
        let clock = FixedClock::new(d1);
        assert_eq!(clock.today_utc(), d1);
        clock.set(d2);
        assert_eq!(clock.today_utc(), d2);
    }
}
