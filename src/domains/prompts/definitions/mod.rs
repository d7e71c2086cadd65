//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with metadata and a template.

use rmcp::model::PromptArgument;

mod analysis;
mod convergence;

pub use analysis::AnalysisPrompt;
pub use convergence::ConvergenceFocusPrompt;

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The template string with `{{variable}}` placeholders.
    fn template() -> String;

    /// The arguments this prompt accepts.
    fn arguments() -> Vec<PromptArgument>;
}
