//! Resource Registry - central registration of all resources.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{
    FrameworkTableResource, KeyTermsResource, ResourceDefinition, ServerInfoResource,
    UsageGuideResource,
};
use super::service::ResourceEntry;

/// Build an annotated resource entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<FrameworkTableResource>(),
        build_resource::<KeyTermsResource>(),
        build_resource::<ServerInfoResource>(),
        build_resource::<UsageGuideResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        FrameworkTableResource::URI,
        KeyTermsResource::URI,
        ServerInfoResource::URI,
        UsageGuideResource::URI,
    ]
}
