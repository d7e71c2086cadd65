//! Tool Registry - central registration and dispatch for all tools.
//!
//! The registry is the single source of truth for tool metadata and
//! handles HTTP dispatch when the `http` feature is enabled.

use rmcp::model::Tool;
#[cfg(feature = "http")]
use tracing::warn;

#[cfg(feature = "http")]
use super::error::ToolError;

use super::definitions::{AnalyzeTool, ConvergenceGuideTool, ListTermsTool};

/// Tool registry - manages the available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AnalyzeTool::NAME,
            ConvergenceGuideTool::NAME,
            ListTermsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AnalyzeTool::to_tool(),
            ConvergenceGuideTool::to_tool(),
            ListTermsTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            AnalyzeTool::NAME => AnalyzeTool::http_handler(arguments),
            ConvergenceGuideTool::NAME => ConvergenceGuideTool::http_handler(arguments),
            ListTermsTool::NAME => ListTermsTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&"analyze"));
        assert!(names.contains(&"convergence_guide"));
        assert!(names.contains(&"list_terms"));
    }

    #[test]
    fn test_get_all_tools_have_schemas() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), 3);
        for tool in &tools {
            assert!(tool.description.is_some(), "{} missing description", tool.name);
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_analyze() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("analyze", serde_json::json!({ "query": "anything" }));
        assert!(result.is_ok());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("unknown", serde_json::json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
