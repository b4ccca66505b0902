use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::api::context::AppState;
use crate::models::explanation::{ExplainRequest, ExplainResponse};
use crate::utils::error::{AppError, Result};

/// Explain a single verse.
///
/// The model check runs before the body is read so that a misconfigured deployment
/// reports itself even for bad requests.
#[tracing::instrument(skip_all)]
pub async fn explain_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<ExplainRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>> {
    state.explainer.ensure_llm()?;

    let Json(request) = body.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;
    let verse = request.verse()?;

    let explanation = state.explainer.explain(verse).await?;
    Ok(Json(ExplainResponse { explanation }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/explain", post(explain_handler))
}
