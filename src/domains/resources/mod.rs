//! Resources domain module.
//!
//! Read-only resources exposing the framework table, the term glossary,
//! server info, and the usage guide.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Central resource registration
//! - `service.rs` - Resource service for listing and reading
//! - `error.rs` - Resource-specific error types

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{get_all_resources, resource_uris};
pub use service::{ComputedResource, ResourceContent, ResourceService};
