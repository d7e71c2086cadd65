//! Framework table resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{ComputedResource, ResourceContent};

/// The four-dimension table as JSON (computed on read).
pub struct FrameworkTableResource;

impl ResourceDefinition for FrameworkTableResource {
    const URI: &'static str = "trinity://framework";
    const NAME: &'static str = "Framework Table";
    const DESCRIPTION: &'static str =
        "The four analytical dimensions with their questions and focus areas";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Computed(ComputedResource::FrameworkTable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framework_table_metadata() {
        assert_eq!(FrameworkTableResource::URI, "trinity://framework");
        assert_eq!(FrameworkTableResource::MIME_TYPE, "application/json");
    }
}
