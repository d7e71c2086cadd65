//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! The router serves the STDIO/TCP transports. Each tool constructs its
//! own route, so adding a tool means adding one `with_route` line here.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{AnalyzeTool, ConvergenceGuideTool, ListTermsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AnalyzeTool::create_route())
        .with_route(ConvergenceGuideTool::create_route())
        .with_route(ListTermsTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"analyze"));
        assert!(names.contains(&"convergence_guide"));
        assert!(names.contains(&"list_terms"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tool set
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
