//! Resource service implementation.
//!
//! Maintains the registry of read-only resources and handles read
//! requests. Resources are defined in `definitions/` and collected by
//! `registry.rs`. Content is either static text or computed on read
//! from the constant framework tables.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::info;

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::domains::framework::{FRAMEWORK, TERMS_USAGE, glossary};

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registry of available resources, keyed by URI.
    resources: HashMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Content backing a resource.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Content computed on read from the constant tables.
    Computed(ComputedResource),
}

/// Kinds of computed resource content.
#[derive(Debug, Clone)]
pub enum ComputedResource {
    /// Server identification.
    ServerInfo,

    /// The dimension table as JSON.
    FrameworkTable,

    /// The term glossary as JSON.
    Glossary,
}

impl ResourceService {
    /// Create a new ResourceService with all registered resources.
    pub fn new() -> Self {
        info!("Initializing ResourceService");

        let resources = get_all_resources()
            .into_iter()
            .map(|entry| (entry.resource.raw.uri.to_string(), entry))
            .collect();

        Self { resources }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Computed(kind) => resolve_computed(uri, kind)?,
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}

impl Default for ResourceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve computed resource content from the constant tables.
fn resolve_computed(uri: &str, kind: &ComputedResource) -> Result<ResourceContents, ResourceError> {
    let value = match kind {
        ComputedResource::ServerInfo => serde_json::json!({
            "server": "trinity-lens-fast",
            "version": env!("CARGO_PKG_VERSION"),
            "mode": "fast",
        }),
        ComputedResource::FrameworkTable => serde_json::json!({
            "dimensions": FRAMEWORK,
        }),
        ComputedResource::Glossary => serde_json::json!({
            "terms": glossary(),
            "usage": TERMS_USAGE,
        }),
    };

    let text = serde_json::to_string_pretty(&value)
        .map_err(|e| ResourceError::internal(e.to_string()))?;

    Ok(ResourceContents::text(text, uri))
}
