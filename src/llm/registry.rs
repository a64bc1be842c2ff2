//! Model registry: resolves catalog ids to constructed inference clients

use super::{find_model, HfService, LlmError, LlmService, LoggingService};
use std::sync::Arc;

/// Configuration for the inference layer
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// Hugging Face bearer token
    pub hf_token: Option<String>,
    /// Default model id override
    pub default_model: Option<String>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            hf_token: std::env::var("HF_TOKEN").ok().filter(|t| !t.is_empty()),
            default_model: std::env::var("MAKTAB_DEFAULT_MODEL").ok(),
        }
    }
}

/// Constructs inference clients by model id.
///
/// The seam between the session and the registry; lets tests substitute
/// recording backends for the real HTTP clients.
pub trait BackendFactory: Send + Sync {
    fn create(&self, model_id: &str) -> Result<Arc<dyn LlmService>, LlmError>;
    fn default_model_id(&self) -> &str;
}

/// Registry of selectable models.
///
/// Holds no live clients: every `create` call constructs a fresh
/// service, so swapping models never mutates an existing one.
pub struct ModelRegistry {
    hf_token: Option<String>,
    default_model: String,
}

impl ModelRegistry {
    pub fn new(config: &LlmConfig) -> Self {
        let default_model = match &config.default_model {
            Some(id) if find_model(id).is_some() => id.clone(),
            Some(id) => {
                tracing::warn!(
                    model = %id,
                    "Configured default model is not in the catalog, using built-in default"
                );
                super::default_model().id.to_string()
            }
            None => super::default_model().id.to_string(),
        };

        Self {
            hf_token: config.hf_token.clone(),
            default_model,
        }
    }

    /// Get the default model id
    pub fn default_model_id(&self) -> &str {
        &self.default_model
    }

    /// List all selectable model ids
    pub fn available_models(&self) -> Vec<String> {
        super::all_models().iter().map(|m| m.id.to_string()).collect()
    }

    /// Whether a bearer token is configured. Construction succeeds
    /// without one; generation calls then fail with an auth error.
    pub fn has_credentials(&self) -> bool {
        self.hf_token.is_some()
    }
}

impl BackendFactory for ModelRegistry {
    /// Construct a fresh client for a catalog model.
    ///
    /// Fails without touching anything if the id is unknown, so callers
    /// can keep their previous client on error.
    fn create(&self, model_id: &str) -> Result<Arc<dyn LlmService>, LlmError> {
        let model_def = find_model(model_id).ok_or_else(|| {
            LlmError::unknown_model(format!("Model {model_id} is not in the catalog"))
        })?;

        let token = self.hf_token.clone().unwrap_or_default();
        let service = HfService::new(model_def.id, token);
        Ok(Arc::new(LoggingService::new(Arc::new(service))))
    }

    fn default_model_id(&self) -> &str {
        &self.default_model
    }
}

#[cfg(test)]
mod tests {
    use super::super::LlmErrorKind;
    use super::*;

    fn config_with_token() -> LlmConfig {
        LlmConfig {
            hf_token: Some("hf_test_token".to_string()),
            default_model: None,
        }
    }

    #[test]
    fn test_default_model_selection() {
        let registry = ModelRegistry::new(&config_with_token());
        assert_eq!(
            registry.default_model_id(),
            "meta-llama/Llama-3.2-3B-Instruct"
        );
    }

    #[test]
    fn test_custom_default_model() {
        let config = LlmConfig {
            default_model: Some("google/gemma-2b-it".to_string()),
            ..config_with_token()
        };
        let registry = ModelRegistry::new(&config);
        assert_eq!(registry.default_model_id(), "google/gemma-2b-it");
    }

    #[test]
    fn test_unknown_default_falls_back() {
        let config = LlmConfig {
            default_model: Some("acme/not-a-model".to_string()),
            ..config_with_token()
        };
        let registry = ModelRegistry::new(&config);
        assert_eq!(
            registry.default_model_id(),
            "meta-llama/Llama-3.2-3B-Instruct"
        );
    }

    #[test]
    fn test_create_unknown_model_fails() {
        let registry = ModelRegistry::new(&config_with_token());
        let err = registry.create("acme/not-a-model").unwrap_err();
        assert_eq!(err.kind, LlmErrorKind::UnknownModel);
    }

    #[test]
    fn test_create_without_token_still_constructs() {
        // Missing credential is a call-time auth failure, not a
        // construction failure, so the process can boot without one.
        let registry = ModelRegistry::new(&LlmConfig::default());
        assert!(!registry.has_credentials());
        let service = registry.create("meta-llama/Llama-3.2-3B-Instruct").unwrap();
        assert_eq!(service.model_id(), "meta-llama/Llama-3.2-3B-Instruct");
    }

    #[test]
    fn test_create_returns_requested_model() {
        let registry = ModelRegistry::new(&config_with_token());
        let service = registry.create("HuggingFaceH4/zephyr-7b-beta").unwrap();
        assert_eq!(service.model_id(), "HuggingFaceH4/zephyr-7b-beta");
    }

    #[test]
    fn test_catalog_listing() {
        let registry = ModelRegistry::new(&config_with_token());
        let models = registry.available_models();
        assert_eq!(models.len(), 5);
        assert!(models.contains(&"mistralai/Mixtral-8x7B-Instruct-v0.1".to_string()));
    }
}
