//! Alert text. Pure formatting, no decisions.

use rust_decimal::{Decimal, RoundingStrategy};
use sig_risk::{stop_price, RiskConfig, Signal};

use crate::AlertMessage;

pub const ALERT_TITLE: &str = "YS Crypto Alert";

/// Render the push alert for an approved signal.
///
/// Prices and percentages print in shortest form (`100`, `0.75`); the stop
/// prints rounded half away from zero to exactly six decimals.
pub fn compose_alert(signal: &Signal, amount: Decimal, cfg: &RiskConfig) -> AlertMessage {
    // `{:.6}` alone truncates a Decimal.
    let stop = stop_price(signal.entry, signal.atr)
        .round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero);
    let body = format!(
        "📈 {symbol} momentum alert\n\
         Entry ~ {entry}\n\
         Stop ~ {stop:.6}\n\
         Suggested buy: A${amount}\n\
         Risk/idea: {risk}% | Caps: coin {coin}%, daily {daily}%\n\
         Place order in CoinSpot.",
        symbol = signal.symbol,
        entry = signal.entry.normalize(),
        stop = stop,
        amount = amount.normalize(),
        risk = cfg.risk_pct.normalize(),
        coin = cfg.max_coin_pct.normalize(),
        daily = cfg.max_daily_pct.normalize(),
    );

    AlertMessage {
        title: ALERT_TITLE.to_string(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn signal(symbol: &str, entry: Decimal, atr: Decimal) -> Signal {
        Signal {
            symbol: symbol.to_string(),
            entry,
            atr,
        }
    }

    #[test]
    fn reference_alert_text() {
        let msg = compose_alert(
            &signal("SOLUSDT", dec!(100), dec!(10)),
            dec!(10),
            &RiskConfig::sane_defaults(),
        );
        assert_eq!(msg.title, "YS Crypto Alert");
        assert_eq!(
            msg.body,
            "📈 SOLUSDT momentum alert\n\
             Entry ~ 100\n\
             Stop ~ 85.000000\n\
             Suggested buy: A$10\n\
             Risk/idea: 0.75% | Caps: coin 10%, daily 15%\n\
             Place order in CoinSpot."
        );
    }

    #[test]
    fn small_prices_keep_precision() {
        let msg = compose_alert(
            &signal("PEPEUSDT", dec!(0.0000125), dec!(0.0000002)),
            dec!(20),
            &RiskConfig::sane_defaults(),
        );
        assert!(msg.body.contains("Entry ~ 0.0000125\n"), "{}", msg.body);
        // 0.0000125 - 0.0000003 = 0.0000122 -> six places
        assert!(msg.body.contains("Stop ~ 0.000012\n"), "{}", msg.body);
        assert!(msg.body.contains("Suggested buy: A$20\n"), "{}", msg.body);
    }

    #[test]
    fn trailing_zeros_trimmed_from_amounts() {
        let msg = compose_alert(
            &signal("ETH", dec!(2500.50), dec!(40)),
            dec!(20.000),
            &RiskConfig::with_fixed_caps(dec!(240), dec!(1.250)),
        );
        assert!(msg.body.contains("Entry ~ 2500.5\n"), "{}", msg.body);
        assert!(msg.body.contains("A$20\n"), "{}", msg.body);
        assert!(msg.body.contains("Risk/idea: 1.25%"), "{}", msg.body);
    }

    #[test]
    fn stop_rounds_at_sixth_decimal() {
        // 1.0000009 - 0.0000003 = 1.0000006
        let msg = compose_alert(
            &signal("XRP", dec!(1.0000009), dec!(0.0000002)),
            dec!(20),
            &RiskConfig::sane_defaults(),
        );
        assert!(msg.body.contains("Stop ~ 1.000001\n"), "{}", msg.body);

        // 5.0000035 - 0.000003 = 5.0000005, an exact midpoint
        let msg = compose_alert(
            &signal("ADA", dec!(5.0000035), dec!(0.000002)),
            dec!(20),
            &RiskConfig::sane_defaults(),
        );
        assert!(msg.body.contains("Stop ~ 5.000001\n"), "{}", msg.body);
    }
}
