//! sig-daemon entry point.
//!
//! This file is intentionally thin: it loads settings, sets up tracing,
//! builds the shared state, wires middleware, and starts the HTTP server.
//! All route handlers live in `routes.rs`; all shared state types live in
//! `state.rs`.

use std::{any::Any, sync::Arc};

use anyhow::Context;
use axum::response::Response;
use sig_config::Settings;
use sig_daemon::{routes, state};
use sig_notify::PushoverNotifier;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env.local if present (dev convenience).
    // Silent if the file does not exist; production injects env vars directly.
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let settings = Settings::from_env().context("loading settings from environment")?;
    info!(
        bankroll = %settings.bankroll,
        risk_pct = %settings.risk_pct,
        pushover_url = %settings.pushover.api_url,
        "settings loaded"
    );
    if settings.pushover.secrets.token.is_none() {
        warn!("PUSHOVER_TOKEN not set; approved alerts will fail at send time");
    }

    let notifier = PushoverNotifier::new(&settings.pushover).context("building pushover client")?;

    let shared = Arc::new(state::AppState::new(
        settings.risk_config(),
        Arc::new(notifier),
        Arc::new(state::SystemClock),
    ));

    let app = routes::build_router(shared)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    let addr = settings.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("sig-daemon listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    info!("sig-daemon stopped");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

/// Handler panics become the same opaque 500 as any other internal failure.
fn panic_response(_err: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    routes::internal_error_response()
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
