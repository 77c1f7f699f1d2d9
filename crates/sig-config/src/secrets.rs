//! Pushover credentials resolved from the environment.
//!
//! # Contract
//! - Resolved **once** at startup and passed into the notifier constructor.
//! - `Debug` output **redacts** values.
//! - A missing app token is not a startup error: the daemon must still size
//!   and track exposure, and the failure surfaces when a send is attempted.

/// Env var carrying the Pushover application token.
pub const TOKEN_VAR: &str = "PUSHOVER_TOKEN";

/// Env var carrying the Pushover user (or group) key.
pub const USER_VAR: &str = "PUSHOVER_USER";

/// User key used when [`USER_VAR`] is unset.
pub const DEFAULT_USER_KEY: &str = "uisccvehv32qpkttfd5u6qs5kgh42q";

/// Pushover credentials. **Values are redacted in `Debug` output.**
#[derive(Clone, PartialEq, Eq)]
pub struct PushoverSecrets {
    /// Application token. `None` if the env var was absent or blank.
    pub token: Option<String>,
    /// Recipient user key.
    pub user: String,
}

impl std::fmt::Debug for PushoverSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverSecrets")
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .field("user", &"<REDACTED>")
            .finish()
    }
}

/// Resolve credentials through `lookup` (blank values count as unset).
pub fn resolve_pushover_secrets<F>(lookup: F) -> PushoverSecrets
where
    F: Fn(&str) -> Option<String>,
{
    let token = non_blank(lookup(TOKEN_VAR));
    let user = non_blank(lookup(USER_VAR)).unwrap_or_else(|| DEFAULT_USER_KEY.to_string());
    PushoverSecrets { token, user }
}

pub(crate) fn non_blank(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
