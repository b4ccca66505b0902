// Services module for upstream clients and the explain pipeline
pub mod explainer;
pub mod llm_client;
pub mod prompt;
pub mod quran_client;
pub mod tafsir_client;
