//! Axum router and all HTTP handlers for sig-daemon.
//!
//! `build_router` is the single entry point; `main.rs` calls it and attaches
//! middleware layers. Scenario tests in `tests/` drive the bare router.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sig_notify::{compose_alert, NotifyError};
use sig_risk::{size_position_detailed, Admission, SizingError, MIN_ORDER_AMOUNT};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    api_types::{parse_signal, StatusResponse, WebhookResponse},
    state::{uptime_secs, AppState},
};

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the complete application router wired to the given shared state.
///
/// Middleware layers (tracing, panic capture) are **not** applied here;
/// `main.rs` attaches them after this call so tests can use the bare router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/status", get(status_handler))
        .route("/webhook", post(webhook))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Every way `/webhook` can fail. Only `BadPayload` carries detail to the
/// caller; the rest collapse into a bare `{"ok":false}` 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad payload")]
    BadPayload,
    #[error(transparent)]
    Sizing(#[from] SizingError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadPayload => {
                (StatusCode::BAD_REQUEST, Json(WebhookResponse::bad_payload())).into_response()
            }
            ApiError::Sizing(_) | ApiError::Notify(_) => internal_error_response(),
        }
    }
}

/// Generic 500 body shared with the panic handler in `main.rs`.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(WebhookResponse::failed()),
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub(crate) async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ---------------------------------------------------------------------------
// GET /status
// ---------------------------------------------------------------------------

pub(crate) async fn status_handler(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    let today = st.clock.today_utc();
    let exposure = st.exposure.lock().await.snapshot_at(today);

    (
        StatusCode::OK,
        Json(StatusResponse {
            service: st.build.service,
            version: st.build.version,
            uptime_secs: uptime_secs(),
            bankroll: st.risk.bankroll,
            risk_pct: st.risk.risk_pct,
            max_coin_pct: st.risk.max_coin_pct,
            max_daily_pct: st.risk.max_daily_pct,
            min_order_amount: MIN_ORDER_AMOUNT,
            exposure,
        }),
    )
}

// ---------------------------------------------------------------------------
// POST /webhook
// ---------------------------------------------------------------------------

/// Size an inbound signal, clamp it to today's budget and push the alert.
///
/// Ordering: exposure is committed before the send is attempted. A failed
/// send therefore leaves the exposure recorded and returns 500.
pub(crate) async fn webhook(
    State(st): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let signal = parse_signal(&body).map_err(|err| {
        warn!(error = %err, "webhook rejected: bad payload");
        ApiError::BadPayload
    })?;

    let today = st.clock.today_utc();

    // Critical section: day rollover, sizing and admission under one guard.
    let (sizing, admission, cumulative) = {
        let mut tracker = st.exposure.lock().await;
        if tracker.roll_to(today) {
            info!(%today, "daily exposure reset");
        }
        let sizing = size_position_detailed(tracker.config(), signal.entry, signal.atr)
            .map_err(|err| {
                error!(symbol = %signal.symbol, error = %err, "sizing failed");
                err
            })?;
        let admission = tracker.admit(sizing.amount);
        (sizing, admission, tracker.cumulative())
    };

    debug!(
        symbol = %signal.symbol,
        risk_budget = %sizing.risk_budget,
        per_unit_risk = %sizing.per_unit_risk,
        units = %sizing.units,
        raw_notional = %sizing.raw_notional,
        cap = %sizing.cap,
        candidate = %sizing.amount,
        "sized signal"
    );

    let amount = match admission {
        Admission::Skipped {
            candidate,
            remaining,
        } => {
            info!(
                symbol = %signal.symbol,
                %candidate,
                %remaining,
                "signal skipped: below minimum order"
            );
            return Ok(Json(WebhookResponse::skipped()));
        }
        Admission::Approved { amount } => amount,
    };

    let alert_id = Uuid::new_v4();
    info!(
        %alert_id,
        symbol = %signal.symbol,
        %amount,
        %cumulative,
        "signal approved; exposure committed"
    );

    let msg = compose_alert(&signal, amount, &st.risk);
    st.notifier.send(&msg).await.map_err(|err| {
        error!(
            %alert_id,
            notifier = st.notifier.name(),
            error = %err,
            "alert delivery failed; exposure stays committed"
        );
        err
    })?;

    info!(%alert_id, notifier = st.notifier.name(), "alert sent");
    Ok(Json(WebhookResponse::sent()))
}
