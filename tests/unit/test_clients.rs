use mockito::{Matcher, Server};
use serde_json::json;

use tafsir::models::tafsir::{TafsirSource, DATA_UNAVAILABLE_MESSAGE};
use tafsir::models::verse::VerseRef;
use tafsir::services::llm_client::{GroqClient, LlmProvider, LlmSettings, ProviderError};
use tafsir::services::quran_client::{
    QuranClient, QuranError, TRANSLATION_MISSING_MESSAGE, TRANSLATION_NETWORK_MESSAGE,
};
use tafsir::services::tafsir_client::TafsirClient;

fn verse(surah: i64, ayah: i64) -> VerseRef {
    VerseRef::new(surah, ayah).unwrap()
}

/// Quran translation client against a mocked alquran.cloud
#[cfg(test)]
mod quran_client_tests {
    use super::*;

    /// Test translation text extraction
    #[tokio::test]
    async fn test_fetch_translation() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/2:255/en.asad")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "code": 200,
                    "status": "OK",
                    "data": {
                        "number": 262,
                        "text": "GOD - there is no deity save Him, the Ever-Living",
                        "numberInSurah": 255
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = QuranClient::with_base_url(server.url());
        let text = client.get_ayah_text(verse(2, 255)).await;

        mock.assert_async().await;
        assert_eq!(text, "GOD - there is no deity save Him, the Ever-Living");
    }

    /// Test alternative edition in the request path
    #[tokio::test]
    async fn test_custom_edition() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/1:1/en.sahih")
            .with_status(200)
            .with_body(json!({"code": 200, "data": {"text": "In the name of Allah"}}).to_string())
            .create_async()
            .await;

        let client = QuranClient::with_base_url(format!("{}/", server.url())).with_edition("en.sahih");
        assert_eq!(client.edition(), "en.sahih");
        let result = client.fetch_translation(verse(1, 1)).await;

        mock.assert_async().await;
        assert_eq!(result.unwrap(), "In the name of Allah");
    }

    /// Test missing text falls back to the missing-translation message
    #[tokio::test]
    async fn test_missing_translation_text() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/1:1/en.asad")
            .with_status(200)
            .with_body(json!({"code": 200, "data": {"text": ""}}).to_string())
            .create_async()
            .await;

        let client = QuranClient::with_base_url(server.url());

        assert!(matches!(
            client.fetch_translation(verse(1, 1)).await,
            Err(QuranError::TranslationMissing(_))
        ));
        assert_eq!(
            client.get_ayah_text(verse(1, 1)).await,
            TRANSLATION_MISSING_MESSAGE
        );
    }

    /// Test non-200 API code inside a 200 response
    #[tokio::test]
    async fn test_api_code_not_ok() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/1:1/en.asad")
            .with_status(200)
            .with_body(json!({"code": 404, "status": "NOT FOUND", "data": "Not found"}).to_string())
            .create_async()
            .await;

        let client = QuranClient::with_base_url(server.url());
        assert_eq!(
            client.get_ayah_text(verse(1, 1)).await,
            TRANSLATION_MISSING_MESSAGE
        );
    }

    /// Test an envelope without a status code
    #[tokio::test]
    async fn test_api_code_absent() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("GET", "/1:1/en.asad")
            .with_status(200)
            .with_body(json!({"data": {"text": "x"}}).to_string())
            .create_async()
            .await;

        let client = QuranClient::with_base_url(server.url());
        assert!(matches!(
            client.fetch_translation(verse(1, 1)).await,
            Err(QuranError::TranslationMissing(_))
        ));
        assert_eq!(
            client.get_ayah_text(verse(1, 1)).await,
            TRANSLATION_MISSING_MESSAGE
        );
    }

    /// Test HTTP failures and garbage bodies fall back to the network message
    #[tokio::test]
    async fn test_network_failures() {
        let mut server = Server::new_async().await;

        let _server_error = server
            .mock("GET", "/1:1/en.asad")
            .with_status(503)
            .create_async()
            .await;
        let _garbage = server
            .mock("GET", "/1:2/en.asad")
            .with_status(200)
            .with_body("<html>oops</html>")
            .create_async()
            .await;

        let client = QuranClient::with_base_url(server.url());

        assert!(matches!(
            client.fetch_translation(verse(1, 1)).await,
            Err(QuranError::RequestFailed(_))
        ));
        assert_eq!(
            client.get_ayah_text(verse(1, 1)).await,
            TRANSLATION_NETWORK_MESSAGE
        );
        assert_eq!(
            client.get_ayah_text(verse(1, 2)).await,
            TRANSLATION_NETWORK_MESSAGE
        );
    }
}

/// Tafsir CDN client against a mocked CDN
#[cfg(test)]
mod tafsir_client_tests {
    use super::*;

    /// Test every source is requested and trimmed
    #[tokio::test]
    async fn test_all_sources_fetched() {
        let mut server = Server::new_async().await;

        let mut mocks = Vec::new();
        for source in TafsirSource::ALL {
            let mock = server
                .mock("GET", format!("/{}/2/255.json", source.slug()).as_str())
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    json!({"surah": 2, "ayah": 255, "text": format!("  {} text \n", source.key())})
                        .to_string(),
                )
                .create_async()
                .await;
            mocks.push(mock);
        }

        let client = TafsirClient::with_base_url(server.url());
        let bundle = client.get_tafsir_data(verse(2, 255)).await;

        for mock in &mocks {
            mock.assert_async().await;
        }
        assert_eq!(bundle.get(TafsirSource::Context), "context text");
        assert_eq!(bundle.get(TafsirSource::Classical), "classical text");
        assert_eq!(bundle.get(TafsirSource::Modern), "modern text");
        assert_eq!(bundle.available_count(), 3);
    }

    /// Test failures and blank text degrade per source
    #[tokio::test]
    async fn test_partial_failures() {
        let mut server = Server::new_async().await;

        let _context = server
            .mock("GET", "/en-kashf-al-asrar-tafsir/1/1.json")
            .with_status(404)
            .create_async()
            .await;
        let _classical = server
            .mock("GET", "/en-tafisr-ibn-kathir/1/1.json")
            .with_status(200)
            .with_body(json!({"text": "Ibn Kathir on Al-Fatihah"}).to_string())
            .create_async()
            .await;
        let _modern = server
            .mock("GET", "/en-tafsir-maarif-ul-quran/1/1.json")
            .with_status(200)
            .with_body(json!({"surah": 1, "ayah": 1}).to_string())
            .create_async()
            .await;

        let client = TafsirClient::with_base_url(server.url());
        let bundle = client.get_tafsir_data(verse(1, 1)).await;

        assert_eq!(bundle.get(TafsirSource::Context), DATA_UNAVAILABLE_MESSAGE);
        assert_eq!(bundle.get(TafsirSource::Classical), "Ibn Kathir on Al-Fatihah");
        assert_eq!(bundle.get(TafsirSource::Modern), DATA_UNAVAILABLE_MESSAGE);
        assert_eq!(bundle.available_count(), 1);
    }
}

/// Chat-completion client against a mocked Groq endpoint
#[cfg(test)]
mod groq_client_tests {
    use super::*;

    /// Test request shape and response parsing
    #[tokio::test]
    async fn test_completion_request() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-key")
            .match_body(Matcher::PartialJson(json!({
                "model": "llama-3.3-70b-versatile",
                "max_tokens": 2048,
                "messages": [{"role": "user", "content": "explain 1:1"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "chatcmpl-1",
                    "choices": [{"index": 0, "message": {"role": "assistant", "content": "### The Verse (Surah 1: Ayah 1)"}}],
                    "usage": {"prompt_tokens": 12, "completion_tokens": 9}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GroqClient::with_base_url("test-key".to_string(), server.url());
        let response = client.complete("explain 1:1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.text, "### The Verse (Surah 1: Ayah 1)");
        assert_eq!(response.input_tokens, Some(12));
        assert_eq!(response.output_tokens, Some(9));
        assert_eq!(client.model_name(), "llama-3.3-70b-versatile");
    }

    /// Test custom settings reach the request
    #[tokio::test]
    async fn test_custom_settings() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::PartialJson(json!({"model": "llama-3.1-8b-instant", "max_tokens": 512})))
            .with_status(200)
            .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
            .create_async()
            .await;

        let client = GroqClient::with_base_url("k".to_string(), server.url()).with_settings(LlmSettings {
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.2,
            max_tokens: 512,
        });
        let response = client.complete("hi").await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.text, "ok");
        assert_eq!(client.model_name(), "llama-3.1-8b-instant");
        assert_eq!(client.settings().max_tokens, 512);
        assert!((client.settings().temperature - 0.2).abs() < f32::EPSILON);
    }

    /// Test API errors carry status and message
    #[tokio::test]
    async fn test_api_error() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(json!({"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}).to_string())
            .create_async()
            .await;

        let client = GroqClient::with_base_url("bad".to_string(), server.url());
        match client.complete("hi").await {
            Err(ProviderError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API Key");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    /// Test an error status without a JSON body
    #[tokio::test]
    async fn test_api_error_without_body() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(502)
            .create_async()
            .await;

        let client = GroqClient::with_base_url("k".to_string(), server.url());
        assert!(matches!(
            client.complete("hi").await,
            Err(ProviderError::Api { status: 502, .. })
        ));
    }
}
