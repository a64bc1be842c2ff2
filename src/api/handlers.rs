//! HTTP request handlers

use super::types::{
    ChatRequest, HistoryResponse, ModelInfo, ModelStatusResponse, ModelsResponse, PersonaInfo,
    PersonasResponse, SwitchModelRequest,
};
use super::AppState;
use crate::llm::all_models;
use crate::persona::Persona;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Conversation
        .route("/api/chat", post(send_chat))
        .route("/api/history", get(get_history))
        .route("/api/clear", post(clear_conversation))
        // Model selection
        .route("/api/model", post(switch_model))
        .route("/api/models", get(list_models))
        // Persona selector metadata
        .route("/api/personas", get(list_personas))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Conversation
// ============================================================

async fn send_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Json<HistoryResponse> {
    let persona = Persona::from_key(req.persona.as_deref().unwrap_or("general"));

    let mut session = state.session.write().await;
    let history = session.ask(&req.text, persona).await.to_vec();

    Json(HistoryResponse {
        history,
        active_model: session.active_model_id().to_string(),
    })
}

async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let session = state.session.read().await;
    Json(HistoryResponse {
        history: session.history().to_vec(),
        active_model: session.active_model_id().to_string(),
    })
}

async fn clear_conversation(State(state): State<AppState>) -> Json<HistoryResponse> {
    let mut session = state.session.write().await;
    let history = session.clear().to_vec();
    Json(HistoryResponse {
        history,
        active_model: session.active_model_id().to_string(),
    })
}

// ============================================================
// Model Selection
// ============================================================

async fn switch_model(
    State(state): State<AppState>,
    Json(req): Json<SwitchModelRequest>,
) -> Json<ModelStatusResponse> {
    let mut session = state.session.write().await;

    // A failed switch is a status line, not an HTTP error: the previous
    // model stays active and the picker shows what went wrong.
    let status = match session.switch_model(&req.model) {
        Ok(model) => format!("✅ تم تغيير النموذج إلى: {model}"),
        Err(e) => {
            tracing::warn!(model = %req.model, error = %e, "Model switch failed");
            format!("❌ خطأ في تغيير النموذج: {e}")
        }
    };

    Json(ModelStatusResponse {
        status,
        active_model: session.active_model_id().to_string(),
    })
}

async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = all_models()
        .iter()
        .map(|m| ModelInfo {
            id: m.id.to_string(),
            family: m.family.display_name().to_string(),
            description: m.description.to_string(),
        })
        .collect();

    Json(ModelsResponse {
        models,
        default: state.registry.default_model_id().to_string(),
    })
}

// ============================================================
// Personas
// ============================================================

async fn list_personas() -> Json<PersonasResponse> {
    let personas = Persona::ALL
        .iter()
        .map(|p| PersonaInfo {
            key: p.key().to_string(),
            label: p.display_name().to_string(),
        })
        .collect();

    Json(PersonasResponse { personas })
}

// ============================================================
// Version
// ============================================================

async fn get_version() -> &'static str {
    concat!("maktab ", env!("CARGO_PKG_VERSION"))
}
