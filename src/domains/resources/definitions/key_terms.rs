//! Key terms resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::{ComputedResource, ResourceContent};

/// The term glossary as JSON (computed on read).
pub struct KeyTermsResource;

impl ResourceDefinition for KeyTermsResource {
    const URI: &'static str = "trinity://terms";
    const NAME: &'static str = "Key Terms";
    const DESCRIPTION: &'static str = "Abstract qualities that bridge dimensions, with definitions";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Computed(ComputedResource::Glossary)
    }
}
