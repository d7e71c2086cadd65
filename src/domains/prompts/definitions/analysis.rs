//! Framework analysis prompt definition.
//!
//! The same template the analyze tool renders, exposed as an MCP prompt
//! for hosts that inject prompts instead of calling tools.

use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::framework::ANALYSIS_TEMPLATE;

/// Four-dimension analysis prompt.
pub struct AnalysisPrompt;

impl PromptDefinition for AnalysisPrompt {
    const NAME: &'static str = "trinity_analysis";
    const DESCRIPTION: &'static str =
        "Apply the four-dimension framework (Knowledge, Social, Generative, Convergence) to a query";

    fn template() -> String {
        format!(
            "{}{}",
            &*ANALYSIS_TEMPLATE,
            "{{#if focus}}\nEmphasize the {{focus}} dimension in your response.\n{{/if}}"
        )
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "query".to_string(),
                title: None,
                description: Some("The question or topic to analyze".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "focus".to_string(),
                title: None,
                description: Some(
                    "Optional dimension to emphasize: knowledge, social, or generative".to_string(),
                ),
                required: Some(false),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_metadata() {
        assert_eq!(AnalysisPrompt::NAME, "trinity_analysis");
        assert!(!AnalysisPrompt::DESCRIPTION.is_empty());

        let args = AnalysisPrompt::arguments();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].name, "query");
        assert_eq!(args[0].required, Some(true));
        assert_eq!(args[1].required, Some(false));
    }

    #[test]
    fn test_analysis_prompt_reuses_renderer_template() {
        let template = AnalysisPrompt::template();
        assert!(template.contains("QUERY: {{query}}"));
        assert!(template.contains("{{#if focus}}"));
    }
}
