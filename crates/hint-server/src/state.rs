//! Application State

use std::sync::Arc;

use hint_core::{HintRegistry, SessionStore, ToolRegistry};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Immutable topic catalog
    pub registry: Arc<HintRegistry>,

    /// One disclosure session per learner
    pub sessions: Arc<dyn SessionStore>,

    /// Hint tools for agent front-ends
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<HintRegistry>, sessions: Arc<dyn SessionStore>) -> Self {
        let tools = Arc::new(hint_core::hint_tools(&registry));
        Self {
            registry,
            sessions,
            tools,
        }
    }
}
