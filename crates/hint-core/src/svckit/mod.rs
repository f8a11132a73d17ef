//! Service Kit - Agent Tools
//!
//! Hint registry operations exposed as [`Tool`](crate::tool::Tool)s.

mod hint_lookup;
mod reveal_hints;
mod topic_catalog;

pub use hint_lookup::HintLookupTool;
pub use reveal_hints::RevealHintsTool;
pub use topic_catalog::TopicCatalogTool;

use std::fmt::Write as _;

use crate::error::HintError;
use crate::registry::HintRegistry;
use crate::tool::ToolResult;

/// Turn a caller-input error into a failed tool result
fn failure(tool: &str, registry: &HintRegistry, err: &HintError) -> ToolResult {
    let mut message = err.user_message();
    let suggestion = match err {
        HintError::NotFound(topic) => registry.suggest(topic),
        _ => None,
    };
    if let Some(suggestion) = suggestion {
        let _ = write!(message, " Did you mean '{suggestion}'?");
    }
    ToolResult::failure(tool, message)
}
