//! sig-risk
//!
//! Position sizing and daily exposure capping for inbound trade signals.
//!
//! Goals:
//! - ATR-based position sizing bounded by a per-coin cap
//! - Lot-size rounding (multiples of 5 currency units)
//! - Daily new-exposure cap with UTC day rollover
//! - Minimum order threshold (skip tiny suggestions)
//!
//! Deterministic, pure logic. No IO, no clock, no locking. The caller supplies
//! "today" and owns whatever mutex guards the [`ExposureTracker`].

mod exposure;
mod signal;
mod sizer;
mod types;

pub use exposure::{Admission, ExposureSnapshot, ExposureTracker};
pub use signal::{Signal, SignalError};
pub use sizer::{size_position, size_position_detailed, stop_price, SizingBreakdown};
pub use types::*;
