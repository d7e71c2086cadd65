//! Resource definitions module.
//!
//! Each resource is defined in its own file with URI metadata and a
//! content provider.

mod framework_table;
mod key_terms;
mod server_info;
mod usage_guide;

pub use framework_table::FrameworkTableResource;
pub use key_terms::KeyTermsResource;
pub use server_info::ServerInfoResource;
pub use usage_guide::UsageGuideResource;

use super::service::ResourceContent;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
