//! Sizer output bounds across a grid of bankrolls, entries and ATRs.
//!
//! Every result must be a non-negative multiple of the lot size and must not
//! exceed the per-coin cap, whatever the inputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sig_risk::*;

const BANKROLLS: &[Decimal] = &[dec!(1), dec!(240), dec!(999.99), dec!(25000), dec!(1000000)];
const ENTRIES: &[Decimal] = &[
    dec!(0.00000123),
    dec!(0.5),
    dec!(1),
    dec!(100),
    dec!(64250.5),
];
const ATRS: &[Decimal] = &[
    dec!(0),
    dec!(0.0000001),
    dec!(0.01),
    dec!(3.3),
    dec!(10),
    dec!(100000),
];
const RISK_PCTS: &[Decimal] = &[dec!(0.1), dec!(0.75), dec!(2), dec!(100)];

#[test]
fn sizer_output_is_non_negative_lot_multiple_within_coin_cap() {
    for &bankroll in BANKROLLS {
        for &risk_pct in RISK_PCTS {
            let cfg = RiskConfig::with_fixed_caps(bankroll, risk_pct);
            for &entry in ENTRIES {
                for &atr in ATRS {
                    let amount = size_position(&cfg, entry, atr).unwrap();
                    assert!(amount >= Decimal::ZERO, "negative size {amount}");
                    assert_eq!(
                        amount % LOT_SIZE,
                        Decimal::ZERO,
                        "size {amount} not a lot multiple (bankroll={bankroll} entry={entry} atr={atr})"
                    );
                    assert!(
                        amount <= cfg.per_coin_cap(),
                        "size {amount} above cap {} (bankroll={bankroll} entry={entry} atr={atr})",
                        cfg.per_coin_cap()
                    );
                }
            }
        }
    }
}

#[test]
fn zero_atr_always_sizes_zero() {
    for &bankroll in BANKROLLS {
        let cfg = RiskConfig::with_fixed_caps(bankroll, dec!(0.75));
        for &entry in ENTRIES {
            assert_eq!(size_position(&cfg, entry, Decimal::ZERO).unwrap(), Decimal::ZERO);
        }
    }
}

#[test]
fn huge_atr_shrinks_to_zero() {
    let cfg = RiskConfig::sane_defaults();
    assert_eq!(
        size_position(&cfg, dec!(100), dec!(1000000)).unwrap(),
        Decimal::ZERO
    );
}

#[test]
fn reference_signal_sizes_to_ten() {
    let cfg = RiskConfig::sane_defaults();
    assert_eq!(size_position(&cfg, dec!(100), dec!(10)).unwrap(), dec!(10));
}

#[test]
fn notional_beyond_decimal_range_clamps_to_cap() {
    // 1.8 / 1.5e-8 = 1.2e8 units, times 1e25 does not fit in a Decimal.
    let cfg = RiskConfig::sane_defaults();
    assert_eq!(
        size_position(&cfg, dec!(10000000000000000000000000), dec!(0.00000001)).unwrap(),
        dec!(20)
    );
}

#[test]
fn units_beyond_decimal_range_clamp_to_cap() {
    // budget 1e12 over a 1.5e-28 stop distance overflows the division.
    let cfg = RiskConfig::with_fixed_caps(dec!(1000000000000), dec!(100));
    let b = size_position_detailed(&cfg, dec!(1), dec!(0.0000000000000000000000000001)).unwrap();
    assert_eq!(b.raw_notional, cfg.per_coin_cap());
    assert_eq!(b.amount, dec!(100000000000));
}

#[test]
fn atr_near_decimal_max_sizes_zero() {
    let cfg = RiskConfig::sane_defaults();
    assert_eq!(
        size_position(&cfg, dec!(100), dec!(70000000000000000000000000000)).unwrap(),
        Decimal::ZERO
    );
}
