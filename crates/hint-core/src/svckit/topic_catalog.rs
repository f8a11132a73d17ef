//! Topic Catalog Tool
//!
//! Lists which functions have hints, optionally for one exercise.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::registry::HintRegistry;
use crate::tool::{ParameterSchema, Tool, ToolCall, ToolResult, ToolSchema};

const NAME: &str = "list_hint_topics";

pub struct TopicCatalogTool {
    registry: Arc<HintRegistry>,
}

impl TopicCatalogTool {
    pub const fn new(registry: Arc<HintRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for TopicCatalogTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: NAME.into(),
            description: "List exercise functions that have hints available.".into(),
            parameters: vec![ParameterSchema::optional(
                "category",
                "string",
                "Exercise identifier (e.g., '01_model_basics')",
            )],
        }
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult> {
        let topics: Vec<&str> = match call.str_arg("category") {
            Some(category) => self
                .registry
                .list_topics_by_category(category)
                .into_keys()
                .collect(),
            None => self.registry.list_topics(),
        };

        if topics.is_empty() {
            let categories = self.registry.categories().join(", ");
            return Ok(ToolResult::success(
                NAME,
                format!("No topics in that exercise. Known exercises: {categories}"),
            ));
        }

        let output = format!("Topics with hints:\n  {}", topics.join("\n  "));
        Ok(ToolResult::success(NAME, output).with_data(serde_json::json!(topics)))
    }
}
