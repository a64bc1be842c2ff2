//! API request and response types

use crate::session::Turn;
use serde::{Deserialize, Serialize};

/// Request to ask the active tutor a question
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: String,
    /// Persona selector key; unknown or missing keys mean the general tutor
    #[serde(default)]
    pub persona: Option<String>,
}

/// Request to switch the active model
#[derive(Debug, Deserialize)]
pub struct SwitchModelRequest {
    pub model: String,
}

/// Response carrying the conversation history
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<Turn>,
    pub active_model: String,
}

/// Response for a model switch attempt. `status` is the user-facing
/// status line; `active_model` is whatever is active afterwards, which
/// on failure is the previous model.
#[derive(Debug, Serialize)]
pub struct ModelStatusResponse {
    pub status: String,
    pub active_model: String,
}

/// Model information with metadata
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: String,
    pub family: String,
    pub description: String,
}

/// Response for the model catalog
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
    pub default: String,
}

/// One selectable tutor persona
#[derive(Debug, Serialize)]
pub struct PersonaInfo {
    pub key: String,
    pub label: String,
}

/// Response for the persona selector
#[derive(Debug, Serialize)]
pub struct PersonasResponse {
    pub personas: Vec<PersonaInfo>,
}
