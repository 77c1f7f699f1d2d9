//! sig-notify
//!
//! Outbound alert delivery.
//!
//! This crate owns the alert text and the push-service boundary. It does
//! **not** size positions or touch exposure state; callers hand it a finished
//! [`AlertMessage`] after the exposure has been committed.

pub mod format;
pub mod pushover;

pub use format::{compose_alert, ALERT_TITLE};
pub use pushover::PushoverNotifier;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A rendered alert, ready to hand to any [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub title: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors a [`Notifier`] may return. None are retried.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The app token was not configured; detected at send time.
    #[error("missing PUSHOVER_TOKEN")]
    MissingToken,
    /// The HTTP client could not be constructed.
    #[error("http client setup failed: {0}")]
    Client(String),
    /// Network or transport failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The push service answered with a non-success status.
    #[error("push api error status={status}: {body}")]
    Api { status: u16, body: String },
}

// ---------------------------------------------------------------------------
// Notifier trait
// ---------------------------------------------------------------------------

/// Push-notification sink.
///
/// Object-safe so the daemon can hold an `Arc<dyn Notifier>` and tests can
/// swap in a recording fake.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Short name for logs (e.g. `"pushover"`).
    fn name(&self) -> &'static str;

    /// Deliver one alert. Failures propagate to the caller unchanged.
    async fn send(&self, msg: &AlertMessage) -> Result<(), NotifyError>;
}
