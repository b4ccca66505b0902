// Common error types for the explainer service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::explanation::ErrorResponse;
use crate::models::verse::VerseError;
use crate::services::llm_client::ProviderError;

/// Errors surfaced by the explain operation and the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body lacks a surah or ayah
    #[error("Missing Surah or Ayah number")]
    MissingVerse,

    /// Surah or ayah could not be read as an integer
    #[error("Surah and Ayah must be numbers")]
    NotANumber,

    /// Verse address outside the mushaf
    #[error("{0}")]
    InvalidVerse(#[from] VerseError),

    /// Body was not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No LLM API key was configured at start-up
    #[error("Groq client is not initialized. Check API key.")]
    LlmUnavailable,

    /// The LLM call itself failed
    #[error("Failed to get explanation from the language model: {0}")]
    Llm(#[from] ProviderError),
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingVerse | Self::NotANumber | Self::InvalidVerse(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::LlmUnavailable | Self::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "explain request failed");
        } else {
            tracing::debug!(error = %self, "rejected explain request");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
