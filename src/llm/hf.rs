//! Hugging Face Inference API provider implementation

use super::types::{DecodingParams, GenerationRequest};
use super::{LlmError, LlmService};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const INFERENCE_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Hosted text-generation client for a single Hugging Face model.
///
/// The decoding configuration is fixed at construction; swapping models
/// means constructing a new client, not mutating this one.
pub struct HfService {
    client: Client,
    token: String,
    model_id: String,
    endpoint: String,
}

impl HfService {
    pub fn new(model_id: impl Into<String>, token: impl Into<String>) -> Self {
        let model_id = model_id.into();
        let endpoint = format!("{INFERENCE_BASE_URL}/{model_id}");
        Self {
            client: Client::new(),
            token: token.into(),
            model_id,
            endpoint,
        }
    }

    fn translate_request(request: &GenerationRequest) -> HfRequest {
        let DecodingParams {
            max_new_tokens,
            temperature,
            top_p,
            repetition_penalty,
            ref stop_sequences,
        } = request.params;

        HfRequest {
            inputs: request.prompt.clone(),
            parameters: HfParameters {
                max_new_tokens,
                temperature,
                top_p,
                repetition_penalty,
                stop_sequences: stop_sequences.clone(),
            },
            options: HfOptions {
                wait_for_model: false,
            },
        }
    }

    fn classify_error(status: reqwest::StatusCode, body: &str) -> LlmError {
        let parsed: Option<HfErrorBody> = serde_json::from_str(body).ok();
        let message = parsed
            .as_ref()
            .map_or_else(|| body.to_string(), |e| e.error.clone());

        match status.as_u16() {
            401 | 403 => LlmError::auth(format!("Authentication failed: {message}")),
            429 => LlmError::rate_limit(format!("Rate limited: {message}")),
            400 | 422 => LlmError::invalid_request(format!("Invalid request: {message}")),
            503 => {
                // A cold model answers 503 with a warm-up estimate. Distinct
                // from a real outage, but still a single failed call here.
                if let Some(eta) = parsed.and_then(|e| e.estimated_time) {
                    LlmError::model_loading(format!(
                        "Model is loading (estimated {eta:.0}s): {message}"
                    ))
                } else {
                    LlmError::server_error(format!("Service unavailable: {message}"))
                }
            }
            500..=599 => LlmError::server_error(format!("Server error: {message}")),
            _ => LlmError::unknown(format!("HTTP {status}: {message}")),
        }
    }

    fn parse_response(body: &str) -> Result<String, LlmError> {
        let outputs: Vec<HfGeneratedText> = serde_json::from_str(body).map_err(|e| {
            LlmError::unknown(format!("Failed to parse response: {e} - body: {body}"))
        })?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| LlmError::unknown("Inference API returned no generations"))
    }
}

#[async_trait]
impl LlmService for HfService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let hf_request = Self::translate_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&hf_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    LlmError::network(format!("Connection failed: {e}"))
                } else {
                    LlmError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            return Err(Self::classify_error(status, &body));
        }

        Self::parse_response(&body)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

// Inference API wire types

#[derive(Debug, Serialize)]
struct HfRequest {
    inputs: String,
    parameters: HfParameters,
    options: HfOptions,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_new_tokens: u32,
    temperature: f32,
    top_p: f32,
    repetition_penalty: f32,
    stop_sequences: Vec<String>,
}

#[derive(Debug, Serialize)]
struct HfOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct HfGeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct HfErrorBody {
    error: String,
    estimated_time: Option<f64>,
}
