//! List terms tool definition.
//!
//! Returns the constant term glossary. Takes no inputs and cannot fail.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::envelope_result;
use crate::domains::framework::{TERMS_USAGE, glossary};

/// Parameters for the list terms tool (none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListTermsParams {}

/// Result envelope for the list terms tool.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ListTermsResult {
    pub success: bool,
    pub terms: BTreeMap<String, String>,
    pub usage: String,
}

/// List terms tool - returns the abstract-quality glossary.
pub struct ListTermsTool;

impl ListTermsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_terms";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get the key abstract terms that bridge the Knowledge, Social, and Generative dimensions.";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        let envelope = ListTermsResult {
            success: true,
            terms: glossary(),
            usage: TERMS_USAGE.to_string(),
        };

        envelope_result(&envelope)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let result = Self::execute();

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
            input_schema: cached_schema_for_type::<ListTermsParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), |_ctx: ToolCallContext<'_, S>| {
            async move { Ok(Self::execute()) }.boxed()
        })
    }
}
