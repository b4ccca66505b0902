use futures_util::future::join_all;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::tafsir::{TafsirBundle, TafsirSource};
use crate::models::verse::VerseRef;

/// Client for the spa5k tafsir CDN
#[derive(Debug, Clone)]
pub struct TafsirClient {
    /// HTTP client for CDN requests
    client: Client,
    /// Base URL of the tafsir tree (configurable for testing)
    base_url: String,
    /// User agent string for requests
    user_agent: String,
}

/// One commentary file on the CDN
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TafsirEntry {
    #[serde(default)]
    pub surah: Option<u16>,
    #[serde(default)]
    pub ayah: Option<u16>,
    #[serde(default)]
    pub text: String,
}

/// Commentary fetch errors
#[derive(Debug, thiserror::Error)]
pub enum TafsirError {
    /// Transport failure or non-success status
    #[error("Tafsir request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to parse tafsir response: {0}")]
    ParseError(String),
}

impl TafsirClient {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://cdn.jsdelivr.net/gh/spa5k/tafsir_api@main/tafsir";
    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client against the public CDN
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
            user_agent: format!("tafsir-explainer/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Fetch one source's commentary for a verse, trimmed
    pub async fn fetch_commentary(
        &self,
        source: TafsirSource,
        verse: VerseRef,
    ) -> Result<String, TafsirError> {
        let url = format!(
            "{}/{}/{}/{}.json",
            self.base_url,
            source.slug(),
            verse.surah,
            verse.ayah
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let entry: TafsirEntry = response
            .json()
            .await
            .map_err(|e| TafsirError::ParseError(e.to_string()))?;

        Ok(entry.text.trim().to_string())
    }

    /// Commentary from every source. Sources are fetched concurrently and failures
    /// degrade to the unavailable placeholder.
    pub async fn get_tafsir_data(&self, verse: VerseRef) -> TafsirBundle {
        let results = join_all(
            TafsirSource::ALL
                .into_iter()
                .map(|source| async move { (source, self.fetch_commentary(source, verse).await) }),
        )
        .await;

        let mut bundle = TafsirBundle::new();
        for (source, result) in results {
            match result {
                Ok(text) => bundle.insert(source, text),
                Err(err) => {
                    tracing::warn!(%verse, source = source.slug(), error = %err, "error fetching tafsir");
                    bundle.mark_unavailable(source);
                }
            }
        }

        tracing::debug!(%verse, available = bundle.available_count(), "collected tafsir");
        bundle
    }
}

impl Default for TafsirClient {
    fn default() -> Self {
        Self::new()
    }
}
