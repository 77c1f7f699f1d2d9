//! sig-config
//!
//! Process settings, read from the environment once at startup.
//!
//! Every value has a documented default except the Pushover app token, which
//! is optional here and enforced at send time. Invalid values fail startup
//! with a `CONFIG_INVALID` error naming the variable.
//!
//! | Variable                | Default                    |
//! |-------------------------|----------------------------|
//! | `PUSHOVER_TOKEN`        | none                       |
//! | `PUSHOVER_USER`         | built-in user key          |
//! | `PUSHOVER_API_URL`      | `https://api.pushover.net` |
//! | `PUSHOVER_TIMEOUT_SECS` | `10`                       |
//! | `RISK_PCT`              | `0.75`                     |
//! | `BANKROLL_AUD`          | `240`                      |
//! | `BIND_HOST`             | `0.0.0.0`                  |
//! | `PORT`                  | `8080`                     |

pub mod secrets;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sig_risk::RiskConfig;

use crate::secrets::{non_blank, resolve_pushover_secrets, PushoverSecrets};

pub const DEFAULT_RISK_PCT: Decimal = dec!(0.75);
pub const DEFAULT_BANKROLL: Decimal = dec!(240);
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PUSHOVER_API_URL: &str = "https://api.pushover.net";
pub const DEFAULT_PUSHOVER_TIMEOUT_SECS: u64 = 10;

/// Upper bound on the bankroll so percentage products stay well inside
/// `Decimal` range.
const MAX_BANKROLL: Decimal = dec!(1000000000000);

/// Pushover delivery settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushoverSettings {
    pub secrets: PushoverSecrets,
    /// Base URL; the messages path is appended by the client.
    pub api_url: String,
    pub timeout: Duration,
}

/// Everything the daemon reads from its environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub bind_host: IpAddr,
    pub port: u16,
    pub bankroll: Decimal,
    pub risk_pct: Decimal,
    pub pushover: PushoverSettings,
}

impl Settings {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load through an injected lookup. Tests use this instead of mutating
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let risk_pct = parse_or("RISK_PCT", &lookup, DEFAULT_RISK_PCT)?;
        if risk_pct <= Decimal::ZERO || risk_pct > dec!(100) {
            bail!("CONFIG_INVALID: env var 'RISK_PCT' must be in (0, 100], got {risk_pct}");
        }

        let bankroll = parse_or("BANKROLL_AUD", &lookup, DEFAULT_BANKROLL)?;
        if bankroll <= Decimal::ZERO || bankroll > MAX_BANKROLL {
            bail!(
                "CONFIG_INVALID: env var 'BANKROLL_AUD' must be in (0, {}], got {}",
                MAX_BANKROLL,
                bankroll,
            );
        }

        let port = parse_or("PORT", &lookup, DEFAULT_PORT)?;
        let bind_host = parse_or("BIND_HOST", &lookup, IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;

        let timeout_secs = parse_or(
            "PUSHOVER_TIMEOUT_SECS",
            &lookup,
            DEFAULT_PUSHOVER_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            bail!("CONFIG_INVALID: env var 'PUSHOVER_TIMEOUT_SECS' must be > 0");
        }

        let api_url = non_blank(lookup("PUSHOVER_API_URL"))
            .unwrap_or_else(|| DEFAULT_PUSHOVER_API_URL.to_string());

        Ok(Self {
            bind_host,
            port,
            bankroll,
            risk_pct,
            pushover: PushoverSettings {
                secrets: resolve_pushover_secrets(&lookup),
                api_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }

    /// Risk configuration with the fixed coin and daily caps.
    pub fn risk_config(&self) -> RiskConfig {
        RiskConfig::with_fixed_caps(self.bankroll, self.risk_pct)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

/// Parse `name` if set and non-blank, else return `default`.
fn parse_or<T, F>(name: &str, lookup: &F, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup(name)) {
        None => Ok(default),
        Some(raw) => match raw.parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => bail!("CONFIG_INVALID: env var '{name}' could not be parsed: '{raw}'"),
        },
    }
}
