//! Tool definitions module.
//!
//! One file per tool. Each definition carries its parameter struct,
//! `execute()`, the HTTP handler, and its route constructor.

pub mod analyze;
pub mod common;
pub mod convergence_guide;
pub mod list_terms;

pub use analyze::{AnalyzeParams, AnalyzeResult, AnalyzeTool};
pub use convergence_guide::{ConvergenceGuideParams, ConvergenceGuideResult, ConvergenceGuideTool};
pub use list_terms::{ListTermsParams, ListTermsResult, ListTermsTool};
