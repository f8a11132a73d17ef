//! # hint-core
//!
//! Progressive hint disclosure for the exercise series.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  HintRegistry (immutable, shared)                            │
//! │    topic_id ──▶ HintRecord { category, hints[], summary }   │
//! │        │                                                     │
//! │        ├── get_hint / reveal_all / get_summary   (stateless) │
//! │        └── open_session ──▶ DisclosureSession    (stateful)  │
//! │                               next / reset / reveal          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The registry is built once (from the built-in catalog or a JSON file) and
//! never mutated. Sessions are owned by the caller; hosts with many learners
//! keep them in a [`SessionStore`].
//!
//! ## Example
//!
//! ```rust
//! use hint_core::HintRegistry;
//!
//! let registry = HintRegistry::builtin()?;
//!
//! let first = registry.get_hint("initialize_model", None)?;
//! assert_eq!(first.level, 1);
//!
//! let mut session = registry.open_session("invoke_model")?;
//! let hint = session.next()?;
//! println!("{hint}");
//! # Ok::<(), hint_core::HintError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod loader;
pub mod model;
pub mod registry;
pub mod session;
pub mod svckit;
pub mod tool;

pub use error::{HintError, Result};
pub use model::{HintLevel, HintRecord, RevealedHints};
pub use registry::HintRegistry;
pub use session::{
    DisclosureSession, MemorySessionStore, SessionId, SessionProgress, SessionSnapshot,
    SessionStore,
};
pub use tool::{Tool, ToolCall, ToolRegistry, ToolResult, ToolSchema};

/// Re-export tools for easy registration
pub mod tools {
    pub use crate::svckit::{HintLookupTool, RevealHintsTool, TopicCatalogTool};
}

/// Registry with every hint tool registered
pub fn hint_tools(registry: &std::sync::Arc<HintRegistry>) -> ToolRegistry {
    let mut kit = ToolRegistry::new();
    kit.register(tools::HintLookupTool::new(registry.clone()));
    kit.register(tools::RevealHintsTool::new(registry.clone()));
    kit.register(tools::TopicCatalogTool::new(registry.clone()));
    kit
}
