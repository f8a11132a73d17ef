//! Error Types

use thiserror::Error;

/// Result type alias for hint operations
pub type Result<T> = std::result::Result<T, HintError>;

/// Hint registry error types
#[derive(Error, Debug)]
pub enum HintError {
    /// Topic is not in the registry
    #[error("No hints available for '{0}'")]
    NotFound(String),

    /// Requested level outside `1..=total`
    #[error("Invalid hint level {requested}. Available levels: 1-{total}")]
    InvalidLevel { requested: usize, total: usize },

    /// Session already revealed every hint
    #[error("No more hints for '{topic}': all {total} revealed")]
    Exhausted { topic: String, total: usize },

    /// Seed record breaks a registry invariant
    #[error("Invalid hint record: {0}")]
    InvalidRecord(String),

    /// Session id unknown to the store
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Tool not found in registry
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool validation failed
    #[error("Tool validation error: {0}")]
    ToolValidation(String),

    /// Session store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HintError {
    /// Check if error is retryable
    ///
    /// Lookups are pure reads, so repeating one with the same input never
    /// helps. Only store and filesystem failures can clear up on their own.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Io(_))
    }

    /// Stable code for wire responses
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "TOPIC_NOT_FOUND",
            Self::InvalidLevel { .. } => "INVALID_LEVEL",
            Self::Exhausted { .. } => "HINTS_EXHAUSTED",
            Self::InvalidRecord(_) => "INVALID_RECORD",
            Self::SessionNotFound(_) => "SESSION_NOT_FOUND",
            Self::ToolNotFound(_) => "TOOL_NOT_FOUND",
            Self::ToolValidation(_) => "TOOL_VALIDATION",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(topic) => {
                format!("No hints available for '{topic}'. Check the function name.")
            }
            Self::InvalidLevel { total, .. } => {
                format!("Invalid hint level. Available levels: 1-{total}")
            }
            Self::Exhausted { .. } => {
                "No more hints! Try the solution approach or reveal all hints.".into()
            }
            Self::SessionNotFound(_) => "That hint session has ended. Open a new one.".into(),
            Self::ToolNotFound(name) => format!("The tool '{name}' is not available."),
            Self::ToolValidation(msg) => format!("Invalid tool input: {msg}"),
            _ => "An unexpected error occurred.".into(),
        }
    }
}
