//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{ComputedResource, ResourceContent};

/// Server identification resource (computed on read).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "trinity://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Computed(ComputedResource::ServerInfo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "trinity://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
    }
}
