//! Inference provider abstraction
//!
//! Provides a common interface for hosted text-generation backends.

mod error;
mod hf;
mod models;
mod registry;
mod types;

pub use error::{LlmError, LlmErrorKind};
pub use hf::HfService;
pub use models::{all_models, default_model, find_model, ModelDef, ModelFamily};
pub use registry::{BackendFactory, LlmConfig, ModelRegistry};
pub use types::*;

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for text-generation backends
#[async_trait]
pub trait LlmService: Send + Sync {
    /// Run one generation call and return the raw generated text.
    ///
    /// The raw text may still contain an echo of the prompt; stripping
    /// that is the caller's concern, not the provider's.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;

    /// Get the model id this client is bound to
    fn model_id(&self) -> &str;
}

impl std::fmt::Debug for dyn LlmService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmService")
            .field("model_id", &self.model_id())
            .finish()
    }
}

/// Logging wrapper for inference services
pub struct LoggingService {
    inner: Arc<dyn LlmService>,
    model_id: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn LlmService>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl LlmService for LoggingService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.generate(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(text) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    prompt_chars = request.prompt.chars().count(),
                    reply_chars = text.chars().count(),
                    "Generation completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    transient = e.kind.is_transient(),
                    "Generation failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
