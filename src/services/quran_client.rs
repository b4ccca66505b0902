use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::verse::VerseRef;

/// Returned when the API answered but carried no translation
pub const TRANSLATION_MISSING_MESSAGE: &str = "Could not retrieve the translation for this verse.";

/// Returned when the API could not be reached or answered with garbage
pub const TRANSLATION_NETWORK_MESSAGE: &str =
    "Could not retrieve the translation due to a network error.";

/// alquran.cloud client for verse translations
#[derive(Debug, Clone)]
pub struct QuranClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the ayah endpoint (configurable for testing)
    base_url: String,
    /// Translation edition identifier
    edition: String,
    /// User agent string for requests
    user_agent: String,
}

/// Envelope returned by the ayah endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AyahResponse {
    /// API status code (mirrors HTTP, 200 on success)
    #[serde(default)]
    pub code: Option<u16>,
    /// Status text
    #[serde(default)]
    pub status: Option<String>,
    /// Ayah payload; a string on errors, so kept loose
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Ayah payload on success
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AyahData {
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "numberInSurah")]
    pub number_in_surah: Option<u16>,
}

/// Translation fetch errors
#[derive(Debug, thiserror::Error)]
pub enum QuranError {
    /// Transport failure or non-success status
    #[error("Quran API request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse Quran API response: {0}")]
    ParseError(String),

    /// API answered without translation text
    #[error("No translation text for verse {0}")]
    TranslationMissing(VerseRef),
}

impl QuranClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://api.alquran.cloud/v1/ayah";
    pub const DEFAULT_EDITION: &'static str = "en.asad";
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client against the public API
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Self::DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self::with_client(client, base_url)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            edition: Self::DEFAULT_EDITION.to_string(),
            user_agent: format!("tafsir-explainer/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Use a different translation edition
    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    /// Fetch the translation text for a verse
    pub async fn fetch_translation(&self, verse: VerseRef) -> Result<String, QuranError> {
        let url = format!("{}/{}/{}", self.base_url, verse, self.edition);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body: AyahResponse = response
            .json()
            .await
            .map_err(|e| QuranError::ParseError(e.to_string()))?;

        if body.code != Some(200) {
            return Err(QuranError::TranslationMissing(verse));
        }

        let data: AyahData = serde_json::from_value(body.data)
            .map_err(|_| QuranError::TranslationMissing(verse))?;

        data.text
            .filter(|t| !t.trim().is_empty())
            .ok_or(QuranError::TranslationMissing(verse))
    }

    /// Translation text, or a reader-facing fallback message on any failure
    pub async fn get_ayah_text(&self, verse: VerseRef) -> String {
        match self.fetch_translation(verse).await {
            Ok(text) => text,
            Err(QuranError::TranslationMissing(_)) => {
                tracing::warn!(%verse, "translation missing from Quran API response");
                TRANSLATION_MISSING_MESSAGE.to_string()
            }
            Err(err) => {
                tracing::warn!(%verse, error = %err, "error fetching ayah text");
                TRANSLATION_NETWORK_MESSAGE.to_string()
            }
        }
    }
}

impl Default for QuranClient {
    fn default() -> Self {
        Self::new()
    }
}
