use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::models::tafsir::TafsirBundle;
use crate::models::verse::VerseRef;
use crate::services::llm_client::{GroqClient, LlmProvider, LlmSettings};
use crate::services::prompt::build_explanation_prompt;
use crate::services::quran_client::QuranClient;
use crate::services::tafsir_client::TafsirClient;
use crate::utils::config::AppConfig;
use crate::utils::error::{AppError, Result};

/// Source data and the prompt assembled from it
#[derive(Debug, Clone, Serialize)]
pub struct PreparedPrompt {
    pub verse: VerseRef,
    pub ayah_text: String,
    pub tafsir: TafsirBundle,
    pub prompt: String,
}

/// Ties the verse, commentary and LLM clients together
#[derive(Clone)]
pub struct Explainer {
    quran: QuranClient,
    tafsir: TafsirClient,
    llm: Option<Arc<dyn LlmProvider>>,
}

impl Explainer {
    pub fn new(quran: QuranClient, tafsir: TafsirClient, llm: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { quran, tafsir, llm }
    }

    /// Build every client from configuration. The LLM is left out when no API key is set.
    pub fn from_config(config: &AppConfig) -> std::result::Result<Self, reqwest::Error> {
        let sources = &config.sources;
        let upstream = Client::builder()
            .timeout(Duration::from_secs(sources.request_timeout_secs))
            .build()?;

        let quran = QuranClient::with_client(upstream.clone(), sources.quran_base_url.clone())
            .with_edition(sources.quran_edition.clone());
        let tafsir = TafsirClient::with_client(upstream, sources.tafsir_base_url.clone());

        let llm = match &config.llm.api_key {
            Some(api_key) => {
                let client = Client::builder()
                    .timeout(Duration::from_secs(config.llm.timeout_secs))
                    .build()?;
                let groq = GroqClient::with_client(client, api_key.clone(), config.llm.base_url.clone())
                    .with_settings(LlmSettings {
                        model: config.llm.model.clone(),
                        temperature: config.llm.temperature,
                        max_tokens: config.llm.max_tokens,
                    });
                Some(Arc::new(groq) as Arc<dyn LlmProvider>)
            }
            None => {
                tracing::warn!("GROQ_API_KEY is not set; explanations will be unavailable");
                None
            }
        };

        Ok(Self::new(quran, tafsir, llm))
    }

    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// Fail fast when no model is configured
    pub fn ensure_llm(&self) -> Result<&Arc<dyn LlmProvider>> {
        self.llm.as_ref().ok_or(AppError::LlmUnavailable)
    }

    /// Fetch the translation and commentary, then assemble the prompt
    pub async fn prepare(&self, verse: VerseRef) -> PreparedPrompt {
        let (ayah_text, tafsir) = tokio::join!(
            self.quran.get_ayah_text(verse),
            self.tafsir.get_tafsir_data(verse)
        );
        let prompt = build_explanation_prompt(verse, &ayah_text, &tafsir);

        PreparedPrompt {
            verse,
            ayah_text,
            tafsir,
            prompt,
        }
    }

    /// Produce the model's explanation for a verse
    #[tracing::instrument(skip(self, verse), fields(verse = %verse))]
    pub async fn explain(&self, verse: VerseRef) -> Result<String> {
        let llm = self.ensure_llm()?;
        let prepared = self.prepare(verse).await;

        tracing::info!(model = llm.model_name(), "requesting explanation");
        let response = llm.complete(&prepared.prompt).await?;
        Ok(response.text)
    }
}
