use derive_more::{Display, From};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// A text-generation backend that takes a video URL plus instructions.
pub trait GenerativeClient {
    type Error: fmt::Display;

    fn model(&self) -> &str;

    fn generate_content(
        &self,
        video_url: &str,
        prompt: &str,
    ) -> impl Future<Output = Result<String, Self::Error>>;
}

#[derive(Debug, Display, From)]
pub enum GeminiError {
    #[from]
    #[display("HTTP error: {_0}")]
    Request(reqwest::Error),

    #[display("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[display("Response blocked: {_0}")]
    Blocked(String),

    #[display("Response contained no text")]
    EmptyResponse,
}

impl std::error::Error for GeminiError {}

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl GenerativeClient for GeminiClient {
    type Error = GeminiError;

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, video_url: &str, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::FileData {
                        file_data: FileData {
                            file_uri: video_url,
                        },
                    },
                    Part::Text { text: prompt },
                ],
            }],
        };

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::debug!(error = %e, "Failed to make http request"))?;

        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            tracing::debug!(status = status.as_u16(), %message, "Gemini API rejected request");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response = resp.json::<GenerateContentResponse>().await?;
        tracing::debug!(
            candidates = response.candidates.len(),
            "Received generateContent response"
        );

        response.into_text()
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    FileData {
        #[serde(rename = "fileData")]
        file_data: FileData<'a>,
    },
    Text {
        text: &'a str,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FileData<'a> {
    file_uri: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GeminiError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => GeminiError::Blocked(reason),
                None => GeminiError::EmptyResponse,
            });
        };

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeminiClient, GeminiError, GenerativeClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VIDEO: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    fn client_for(server: &MockServer) -> GeminiClient {
        GeminiClient::new("test-key").with_base_url(server.uri())
    }

    #[tokio::test]
    async fn sends_url_and_prompt_together() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "fileData": { "fileUri": VIDEO } },
                        { "text": "Summarize it" }
                    ]
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "role": "model", "parts": [{ "text": "A summary." }] }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .generate_content(VIDEO, "Summarize it")
            .await
            .expect("request succeeds");
        assert_eq!(text, "A summary.");
    }

    #[tokio::test]
    async fn uses_configured_model_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).with_model("gemini-2.5-pro");
        assert_eq!(client.model(), "gemini-2.5-pro");
        assert_eq!(client.generate_content(VIDEO, "p").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn joins_multiple_text_parts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": { "parts": [{ "text": "## Topic\n" }, { "text": "Details" }] }
                }]
            })))
            .mount(&server)
            .await;

        let text = client_for(&server).generate_content(VIDEO, "p").await.unwrap();
        assert_eq!(text, "## Topic\nDetails");
    }

    #[tokio::test]
    async fn surfaces_api_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_content(VIDEO, "p")
            .await
            .unwrap_err();
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn keeps_raw_body_when_error_is_not_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_content(VIDEO, "p")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "API error: 503 - upstream unavailable");
    }

    #[tokio::test]
    async fn reports_blocked_prompts() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_content(VIDEO, "p")
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::Blocked(ref reason) if reason == "SAFETY"));
    }

    #[tokio::test]
    async fn empty_candidate_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "finishReason": "MAX_TOKENS" }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate_content(VIDEO, "p")
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }
}
