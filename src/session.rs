//! Conversation session management
//!
//! One session owns the ordered turn history, the active persona prompt
//! composition, and the active inference backend. The API layer wraps
//! the session in an async lock, so every mutation here runs serialized:
//! history order is exactly `ask` completion order, and a model switch
//! can never interleave with an in-flight question.

use crate::llm::{BackendFactory, GenerationRequest, LlmError, LlmService};
use crate::persona::{compose, Persona};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Fixed prefix of the reply synthesized when a backend call fails
pub const APOLOGY_PREFIX: &str = "عذراً، حدث خطأ في التواصل مع المعلم. يرجى المحاولة مرة أخرى.";

/// One completed question/answer exchange. Append-only: turns are never
/// edited or reordered after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Turn {
    pub user_message: String,
    pub assistant_reply: String,
    pub persona: Persona,
    pub created_at: DateTime<Utc>,
}

/// A single conversation with the tutors.
///
/// Constructed explicitly and passed to whoever needs it; there is no
/// process-wide instance. Replacing the model discards the previous
/// backend client and leaves history untouched.
pub struct Session {
    factory: Arc<dyn BackendFactory>,
    active_model_id: String,
    backend: Arc<dyn LlmService>,
    history: Vec<Turn>,
}

impl Session {
    /// Create a session bound to the factory's default model
    pub fn new(factory: Arc<dyn BackendFactory>) -> Result<Self, LlmError> {
        let active_model_id = factory.default_model_id().to_string();
        let backend = factory.create(&active_model_id)?;
        Ok(Self {
            factory,
            active_model_id,
            backend,
            history: Vec::new(),
        })
    }

    /// Ask the active tutor one question and append the exchange.
    ///
    /// A whitespace-only message is a no-op. Otherwise exactly one turn
    /// is appended: the generated reply on success, an apology carrying
    /// the error description on failure. Returns the updated history.
    pub async fn ask(&mut self, user_message: &str, persona: Persona) -> &[Turn] {
        if user_message.trim().is_empty() {
            return &self.history;
        }

        let prompt = compose(persona, user_message);
        let request = GenerationRequest::new(prompt.clone());

        let assistant_reply = match self.backend.generate(&request).await {
            Ok(raw) => strip_echo(&raw, &prompt).to_string(),
            Err(e) => apology(&e),
        };

        self.history.push(Turn {
            user_message: user_message.to_string(),
            assistant_reply,
            persona,
            created_at: Utc::now(),
        });

        &self.history
    }

    /// Replace the active backend with a freshly constructed client.
    ///
    /// On failure the previous backend and model id stay active. History
    /// is never touched by this operation.
    pub fn switch_model(&mut self, model_id: &str) -> Result<&str, LlmError> {
        let backend = self.factory.create(model_id)?;
        self.backend = backend;
        self.active_model_id = model_id.to_string();
        tracing::info!(model = %self.active_model_id, "Switched active model");
        Ok(&self.active_model_id)
    }

    /// Empty the history in place and return the (now empty) slice
    pub fn clear(&mut self) -> &[Turn] {
        self.history.clear();
        &self.history
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn active_model_id(&self) -> &str {
        &self.active_model_id
    }
}

/// Drop a verbatim echo of the prompt from the backend's raw output.
///
/// The comparison is an exact prefix match on the trimmed output; a
/// backend that re-emits the prompt with any formatting drift keeps its
/// echo.
pub(crate) fn strip_echo<'a>(raw: &'a str, prompt: &str) -> &'a str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix(prompt) {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

/// Synthesize the user-facing reply for a failed backend call
fn apology(error: &LlmError) -> String {
    format!("{APOLOGY_PREFIX}\nتفاصيل الخطأ: {error}")
}
