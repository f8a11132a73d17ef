//! Reveal Hints Tool
//!
//! Full hint listing or just the solution approach.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::registry::HintRegistry;
use crate::tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema};

const NAME: &str = "reveal_hints";

/// Tool for revealing all hints at once (spoiler!)
pub struct RevealHintsTool {
    registry: Arc<HintRegistry>,
}

impl RevealHintsTool {
    pub const fn new(registry: Arc<HintRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for RevealHintsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "Reveal every hint for an exercise function plus the solution approach. Use only after single hints did not help.".into(),
            parameters: vec![
                ParameterSchema::required("topic", "string", "Exercise function name"),
                ParameterSchema::optional("summary_only", "boolean", "Return only the solution approach"),
            ],
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let topic = call.str_arg("topic").unwrap_or_default();
        let summary_only = call
            .arguments
            .get("summary_only")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false);

        if summary_only {
            return Ok(match self.registry.get_summary(topic) {
                Ok(summary) => ToolResult::success(NAME, format!("Solution approach: {summary}")),
                Err(e) => super::failure(NAME, &self.registry, &e),
            });
        }

        match self.registry.reveal_all(topic) {
            Ok(revealed) => {
                let data = serde_json::to_value(&revealed)?;
                Ok(ToolResult::success(NAME, revealed.to_string()).with_data(data))
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

    fn tool() -> RevealHintsTool {
        RevealHintsTool::new(Arc::new(sample_registry()))
    }

    #[tokio::test]
    async fn test_reveal_all() {
        let call = ToolCall::new(NAME).arg("topic", json!("alpha"));
        let result = tool().execute(&call).await.unwrap();
        assert!(result.success);
        assert!(result.output.contains("4. h4"));
        assert!(result.output.ends_with("Approach: alpha approach"));
    }

    #[tokio::test]
    async fn test_summary_only() {
        let call = ToolCall::new(NAME)
            .arg("topic", json!("beta"))
            .arg("summary_only", json!(true));
        let result = tool().execute(&call).await.unwrap();
        assert_eq!(result.output, "Solution approach: beta approach");
    }
}
