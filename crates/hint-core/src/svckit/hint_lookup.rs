//! Hint Lookup Tool
//!
//! Returns a single hint level for a topic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::registry::HintRegistry;
use crate::tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema};

const NAME: &str = "get_hint";

/// Tool for fetching one hint at a time
pub struct HintLookupTool {
    registry: Arc<HintRegistry>,
}

impl HintLookupTool {
    pub const fn new(registry: Arc<HintRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for HintLookupTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Get one progressive hint for an exercise function. Level 1 is the most general; omit level to get level 1.".into(),
            parameters: vec![
                ParameterSchema::required("topic", "string", "Exercise function name (e.g., 'initialize_model')"),
                ParameterSchema::optional("level", "integer", "1-based hint level"),
            ],
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let topic = call.str_arg("topic").unwrap_or_default();

        // Negatives report as level 0; values past usize saturate
        let level = call.arguments.get("level").map(|v| {
            v.as_u64()
                .map_or(0, |l| usize::try_from(l).unwrap_or(usize::MAX))
        });

        match self.registry.get_hint(topic, level) {
            Ok(hint) => {
                let data = serde_json::to_value(&hint)?;
                Ok(ToolResult::success(NAME, hint.to_string()).with_data(data))
            }
            Err(e) => Ok(super::failure(NAME, &self.registry, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::sample_registry;
    use serde_json::json;

    fn tool() -> HintLookupTool {
        HintLookupTool::new(Arc::new(sample_registry()))
    }

    #[tokio::test]
    async fn test_default_level() {
        let call = ToolCall::new(NAME).arg("topic", json!("alpha"));
        let result = tool().execute(&call).await.unwrap();
        assert!(result.success);
        assert_eq!(result.output, "Hint 1/4: h1");
        assert_eq!(result.data, Some(json!({"text": "h1", "level": 1, "total": 4})));
    }

    #[tokio::test]
    async fn test_out_of_range_level() {
        for level in [json!(5), json!(-2)] {
            let call = ToolCall::new(NAME).arg("topic", json!("alpha")).arg("level", level);
            let result = tool().execute(&call).await.unwrap();
            assert!(!result.success);
            assert_eq!(result.output, "Invalid hint level. Available levels: 1-4");
        }
    }

    #[tokio::test]
    async fn test_level_beyond_i64_is_rejected() {
        let call = ToolCall::new(NAME)
            .arg("topic", json!("alpha"))
            .arg("level", json!(u64::MAX));
        let result = tool().execute(&call).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.output, "Invalid hint level. Available levels: 1-4");
    }

    #[tokio::test]
    async fn test_unknown_topic_suggests() {
        let call = ToolCall::new(NAME).arg("topic", json!("alph"));
        let result = tool().execute(&call).await.unwrap();
        assert!(!result.success);
        assert!(result.output.starts_with("No hints available for 'alph'."));
        assert!(result.output.ends_with("Did you mean 'alpha'?"));
    }
}
