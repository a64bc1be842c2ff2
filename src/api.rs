//! HTTP API exposing the tutor session

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::llm::ModelRegistry;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state shared across handlers.
///
/// The session sits behind an async lock: asks, model switches, and
/// clears are serialized, so two user actions can never interleave
/// their session mutations.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(session: Session, registry: Arc<ModelRegistry>) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            registry,
        }
    }
}
