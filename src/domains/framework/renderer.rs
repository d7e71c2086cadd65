//! Pure rendering of the framework templates.
//!
//! Every function here is a deterministic mapping from its string input
//! plus the constant tables to text. No validation is performed on the
//! input: empty strings and strings containing the banner characters
//! render like any other query.

use once_cell::sync::Lazy;

use super::dimensions::FRAMEWORK;

/// Placeholder substituted with the caller's query.
pub const QUERY_SLOT: &str = "{{query}}";

/// Placeholder substituted with the caller's topic.
pub const TOPIC_SLOT: &str = "{{topic}}";

const BANNER: &str =
    "═══════════════════════════════════════════════════════════════════";
const RULE: &str =
    "─────────────────────────────────────────────────────────────────";

/// The enumerated response-structure section. Section names and symbols
/// stay out of this block so each appears exactly once per rendering.
const RESPONSE_STRUCTURE: &str = "\
**MANDATORY RESPONSE STRUCTURE:**

1. Facts and evidence
   [Concise: what data and research exist? Cite key sources when available.]

2. People and motivations
   [Concise: who cares and why? What human factors apply?]

3. Patterns and possibilities
   [Concise: what patterns from elsewhere? What innovations are possible?]

4. The synthesis
   [Brief: what new insight emerges only when all three combine? Note any
   dimension bridges, serendipitous connections, or synchronicities.]
";

/// The full analysis template, assembled once from the framework table.
/// `{{query}}` is the only slot.
pub static ANALYSIS_TEMPLATE: Lazy<String> = Lazy::new(build_analysis_template);

fn build_analysis_template() -> String {
    let mut out = String::new();

    out.push_str(BANNER);
    out.push_str("\nTRINITY LENS FAST — MANDATORY Framework Application\n");
    out.push_str(BANNER);
    out.push_str("\n\nQUERY: ");
    out.push_str(QUERY_SLOT);
    out.push_str("\n\n⚠️ ALL FOUR SECTIONS REQUIRED ⚠️\n\n");
    out.push_str(RULE);
    out.push('\n');

    for dim in &FRAMEWORK {
        out.push('\n');
        out.push_str(dim.symbol);
        out.push_str(" **");
        out.push_str(dim.name);
        out.push_str("** — ");
        out.push_str(dim.question);
        out.push('\n');
        out.push_str(dim.label_heading());
        out.push_str(": ");
        out.push_str(&dim.labels.join(", "));
        out.push('\n');
    }

    out.push('\n');
    out.push_str(RULE);
    out.push_str("\n\n");
    out.push_str(RESPONSE_STRUCTURE);
    out.push('\n');
    out.push_str(BANNER);
    out.push_str("\nANALYZE USING THIS FRAMEWORK (Keep responses concise)\n");
    out.push_str(BANNER);
    out.push('\n');

    out
}

/// Render the analysis block for a query.
///
/// Identical input always yields byte-identical output. The query is
/// inserted verbatim on the `QUERY:` line and nowhere else.
pub fn render_analysis(query: &str) -> String {
    ANALYSIS_TEMPLATE.replace(QUERY_SLOT, query)
}

/// Sentence templates for convergence guidance; `{{topic}}` is the slot.
pub const CONVERGENCE_PROMPTS: [&str; 4] = [
    "How does knowledge about {{topic}} shape social understanding, and vice versa?",
    "What generative patterns predict both facts and behaviors around {{topic}}?",
    "What unexpected connection emerges only from combining all three dimensions on {{topic}}?",
    "Where do different dimensions independently arrive at the same insight about {{topic}}?",
];

/// Constant follow-up tips returned with every convergence guide.
pub const QUICK_TIPS: [&str; 4] = [
    "Look for dimension bridges (K↔S↔G)",
    "Note serendipitous discoveries",
    "Identify synchronicities",
    "State the emergent insight clearly",
];

/// Build the four convergence questions for a topic.
pub fn convergence_prompts(topic: &str) -> Vec<String> {
    CONVERGENCE_PROMPTS
        .iter()
        .map(|template| template.replace(TOPIC_SLOT, topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_exactly_one_query_slot() {
        assert_eq!(ANALYSIS_TEMPLATE.matches(QUERY_SLOT).count(), 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render_analysis("What is trust?");
        let second = render_analysis("What is trust?");
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_appears_once_on_query_line() {
        let rendered = render_analysis("zebra migration");
        assert_eq!(rendered.matches("zebra migration").count(), 1);

        let query_line = rendered
            .lines()
            .find(|line| line.starts_with("QUERY:"))
            .expect("missing QUERY line");
        assert_eq!(query_line, "QUERY: zebra migration");
    }

    #[test]
    fn test_each_dimension_name_and_symbol_appears_once() {
        let rendered = render_analysis("zebra migration");
        for dim in &FRAMEWORK {
            assert_eq!(
                rendered.matches(dim.name).count(),
                1,
                "dimension name {} count",
                dim.name
            );
            assert_eq!(
                rendered.matches(dim.symbol).count(),
                1,
                "dimension symbol {} count",
                dim.symbol
            );
        }
    }

    #[test]
    fn test_empty_query_renders() {
        let rendered = render_analysis("");
        assert!(rendered.contains("QUERY: \n"));
        assert!(rendered.contains("MANDATORY RESPONSE STRUCTURE"));
    }

    #[test]
    fn test_query_containing_banner_characters_renders() {
        let tricky = format!("{}═══{}", "inject ", " done");
        let rendered = render_analysis(&tricky);
        assert_eq!(rendered.matches(&tricky).count(), 1);
        assert_eq!(render_analysis(&tricky), rendered);
    }

    #[test]
    fn test_section_order_is_fixed() {
        let rendered = render_analysis("anything");
        let header = rendered.find("TRINITY LENS FAST").unwrap();
        let query = rendered.find("QUERY:").unwrap();
        let knowledge = rendered.find("Knowledge").unwrap();
        let convergence = rendered.find("Convergence").unwrap();
        let structure = rendered.find("MANDATORY RESPONSE STRUCTURE").unwrap();
        let closing = rendered.find("ANALYZE USING THIS FRAMEWORK").unwrap();

        assert!(header < query);
        assert!(query < knowledge);
        assert!(knowledge < convergence);
        assert!(convergence < structure);
        assert!(structure < closing);
    }

    #[test]
    fn test_convergence_prompts_interpolate_topic() {
        let prompts = convergence_prompts("X");
        assert_eq!(prompts.len(), 4);
        for prompt in &prompts {
            assert!(prompt.contains('X'), "missing topic in: {}", prompt);
            assert!(!prompt.contains(TOPIC_SLOT));
        }
    }

    #[test]
    fn test_convergence_prompts_accept_empty_topic() {
        let prompts = convergence_prompts("");
        assert_eq!(prompts.len(), 4);
    }

    #[test]
    fn test_quick_tips_are_constant() {
        assert_eq!(QUICK_TIPS.len(), 4);
        assert_eq!(QUICK_TIPS[0], "Look for dimension bridges (K↔S↔G)");
    }
}
