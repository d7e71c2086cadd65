//! Convergence focus prompt definition.

use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::framework::renderer::CONVERGENCE_PROMPTS;
use crate::domains::framework::QUICK_TIPS;

/// Synthesis-only prompt for a single topic.
pub struct ConvergenceFocusPrompt;

impl PromptDefinition for ConvergenceFocusPrompt {
    const NAME: &'static str = "convergence_focus";
    const DESCRIPTION: &'static str =
        "Apply convergence thinking (the synthesis dimension) to a topic";

    fn template() -> String {
        let mut out = String::from("Apply convergence thinking to: {{topic}}\n\n");

        for question in CONVERGENCE_PROMPTS {
            out.push_str("- ");
            out.push_str(question);
            out.push('\n');
        }

        out.push('\n');
        for tip in QUICK_TIPS {
            out.push_str("Tip: ");
            out.push_str(tip);
            out.push('\n');
        }

        out
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "topic".to_string(),
            title: None,
            description: Some("The subject to apply convergence thinking to".to_string()),
            required: Some(true),
        }]
    }
}
