//! Convergence guide tool definition.
//!
//! Builds the four convergence questions for a topic plus the constant
//! quick tips. The topic is accepted verbatim, empty strings included.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{envelope_result, log_preview};
use crate::domains::framework::{QUICK_TIPS, convergence_prompts};

/// Parameters for the convergence guide tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConvergenceGuideParams {
    /// The subject to apply convergence thinking to.
    pub topic: String,
}

/// Result envelope for the convergence guide tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ConvergenceGuideResult {
    pub success: bool,
    pub topic: String,
    pub convergence_prompts: Vec<String>,
    pub quick_tips: Vec<String>,
}

/// Convergence guide tool - quick synthesis guidance for a topic.
pub struct ConvergenceGuideTool;

impl ConvergenceGuideTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "convergence_guide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get quick guidance on applying Convergence (the synthesis dimension) to a topic.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &ConvergenceGuideParams) -> CallToolResult {
        info!("Convergence guide for: '{}'", log_preview(&params.topic));

        let envelope = ConvergenceGuideResult {
            success: true,
            topic: params.topic.clone(),
            convergence_prompts: convergence_prompts(&params.topic),
            quick_tips: QUICK_TIPS.iter().map(|tip| tip.to_string()).collect(),
        };

        envelope_result(&envelope)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        use crate::domains::tools::ToolError;

        let topic = arguments
            .get("topic")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_arguments("Missing or invalid 'topic' parameter"))?
            .to_string();

        let params = ConvergenceGuideParams { topic };
        let result = Self::execute(&params);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ConvergenceGuideParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: ConvergenceGuideParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
