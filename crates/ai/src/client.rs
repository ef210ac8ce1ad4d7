//! REST client for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

/// Model used for question generation and answer scoring.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default API base URL.
const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Sampling parameters sent with every request.
///
/// These are fixed for the whole application; the defaults match the
/// values the scoring and generation prompts were tuned against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_string(),
        }
    }
}

/// Errors from the generative-language API layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Generative API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API returned 2xx but no usable candidate text.
    #[error("Generative API returned no candidate text")]
    EmptyResponse,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// HTTP client for the generative-language service.
pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    config: GenerationConfig,
}

impl GeminiClient {
    /// Create a client with the default base URL, model, and sampling
    /// configuration.
    pub fn new(api_key: String) -> Self {
        Self::with_api_url(DEFAULT_API_URL.to_string(), api_key)
    }

    /// Create a client against a specific base URL (tests point this at a
    /// local address).
    pub fn with_api_url(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            config: GenerationConfig::default(),
        }
    }

    /// Model name requests are issued against.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one literal prompt and await the full text response.
    ///
    /// Concatenates the text parts of the first candidate. The API key is
    /// passed as a query parameter and never logged.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_url, self.model
        );

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": self.config,
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text: String = parsed
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        tracing::debug!(model = %self.model, chars = text.len(), "Received model response");
        Ok(text)
    }
}
