use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::context::AppState;

pub mod context;
mod explain;
mod health;
mod index;

/// Full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(explain::router())
        .with_state(state)
        .merge(index::router())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind `address` and serve until Ctrl-C
pub async fn serve(state: AppState, address: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("could not bind {address}"))?;

    tracing::info!(
        address = %listener.local_addr().context("listener has no local address")?,
        llm = state.explainer.has_llm(),
        "tafsir-explainer listening"
    );

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error starting service")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
