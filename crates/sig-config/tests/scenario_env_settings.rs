//! Settings resolution from an injected environment.
//!
//! No test mutates the process environment; each builds a map and hands
//! `Settings::from_lookup` a closure over it.

use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use rust_decimal_macros::dec;
use sig_config::secrets::DEFAULT_USER_KEY;
use sig_config::Settings;
use sig_risk::{MAX_COIN_PCT, MAX_DAILY_PCT};

fn load(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_lookup(|name| map.get(name).cloned())
}

#[test]
fn empty_environment_uses_documented_defaults() {
    let s = load(&[]).unwrap();
    assert_eq!(s.port, 8080);
    assert_eq!(s.bind_host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(s.bankroll, dec!(240));
    assert_eq!(s.risk_pct, dec!(0.75));
    assert_eq!(s.pushover.api_url, "https://api.pushover.net");
    assert_eq!(s.pushover.timeout, Duration::from_secs(10));
    assert!(s.pushover.secrets.token.is_none());
    assert_eq!(s.pushover.secrets.user, DEFAULT_USER_KEY);
}

#[test]
fn overrides_are_applied() {
    let s = load(&[
        ("PORT", "9000"),
        ("BIND_HOST", "127.0.0.1"),
        ("BANKROLL_AUD", "1000"),
        ("RISK_PCT", "1.5"),
        ("PUSHOVER_TOKEN", "app-token"),
        ("PUSHOVER_USER", "user-key"),
        ("PUSHOVER_API_URL", "http://localhost:1234"),
        ("PUSHOVER_TIMEOUT_SECS", "3"),
    ])
    .unwrap();

    assert_eq!(s.socket_addr().to_string(), "127.0.0.1:9000");
    assert_eq!(s.bankroll, dec!(1000));
    assert_eq!(s.risk_pct, dec!(1.5));
    assert_eq!(s.pushover.secrets.token.as_deref(), Some("app-token"));
    assert_eq!(s.pushover.secrets.user, "user-key");
    assert_eq!(s.pushover.api_url, "http://localhost:1234");
    assert_eq!(s.pushover.timeout, Duration::from_secs(3));
}

#[test]
fn risk_config_carries_fixed_caps() {
    let cfg = load(&[("BANKROLL_AUD", "500"), ("RISK_PCT", "2")])
        .unwrap()
        .risk_config();
    assert_eq!(cfg.bankroll, dec!(500));
    assert_eq!(cfg.risk_pct, dec!(2));
    assert_eq!(cfg.max_coin_pct, MAX_COIN_PCT);
    assert_eq!(cfg.max_daily_pct, MAX_DAILY_PCT);
}

#[test]
fn out_of_range_risk_pct_fails_startup() {
    for bad in ["0", "-1", "100.01"] {
        let err = load(&[("RISK_PCT", bad)]).unwrap_err().to_string();
        assert!(err.contains("CONFIG_INVALID"), "{err}");
        assert!(err.contains("RISK_PCT"), "{err}");
    }
    assert!(load(&[("RISK_PCT", "100")]).is_ok());
}

#[test]
fn non_positive_bankroll_fails_startup() {
    let err = load(&[("BANKROLL_AUD", "0")]).unwrap_err().to_string();
    assert!(err.contains("BANKROLL_AUD"), "{err}");
}

#[test]
fn unparseable_values_fail_startup() {
    for (var, raw) in [
        ("PORT", "http"),
        ("PORT", "70000"),
        ("BANKROLL_AUD", "lots"),
        ("BIND_HOST", "localhost:80"),
        ("PUSHOVER_TIMEOUT_SECS", "soon"),
    ] {
        let err = load(&[(var, raw)]).unwrap_err().to_string();
        assert!(err.contains(var), "expected {var} in: {err}");
    }
    assert!(load(&[("PUSHOVER_TIMEOUT_SECS", "0")]).is_err());
}

#[test]
fn debug_output_redacts_token() {
    let s = load(&[("PUSHOVER_TOKEN", "azGDORePK8gMaC0QOYAMyEEuzJnyUi")]).unwrap();
    let dbg = format!("{s:?}");
    assert!(!dbg.contains("azGDORePK8gMaC0QOYAMyEEuzJnyUi"), "{dbg}");
    assert!(!dbg.contains(DEFAULT_USER_KEY), "{dbg}");
}
