//! Prompt template rendering.
//!
//! Templates use `{{variable}}` slots plus `{{#if variable}}...{{/if}}`
//! blocks that are kept only when the variable is set and non-empty.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

const IF_OPEN: &str = "{{#if ";
const IF_CLOSE: &str = "{{/if}}";

impl PromptTemplate {
    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = process_conditionals(&self.template, arguments)?;

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(clean_unmatched_placeholders(&result))
    }
}

/// Resolve `{{#if var}}...{{/if}}` blocks against the argument map.
fn process_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut result = template.to_string();

    while let Some(start) = result.find(IF_OPEN) {
        let var_end = result[start..]
            .find("}}")
            .map(|pos| start + pos)
            .ok_or_else(|| PromptError::template("unclosed {{#if}} tag"))?;
        let var_name = result[start + IF_OPEN.len()..var_end].trim().to_string();

        let end = result[var_end..]
            .find(IF_CLOSE)
            .map(|pos| var_end + pos)
            .ok_or_else(|| PromptError::template("missing {{/if}} tag"))?;

        let is_set = arguments
            .get(&var_name)
            .map(|value| !value.is_empty())
            .unwrap_or(false);

        let body = if is_set {
            result[var_end + 2..end].to_string()
        } else {
            String::new()
        };

        result = format!("{}{}{}", &result[..start], body, &result[end + IF_CLOSE.len()..]);
    }

    Ok(result)
}

/// Strip simple placeholders left over from optional arguments.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = template.to_string();
    let mut start = 0;

    while let Some(pos) = result[start..].find("{{") {
        let open = start + pos;
        let Some(close) = result[open..].find("}}") else {
            break;
        };
        let end = open + close + 2;
        let placeholder = &result[open..end];

        if placeholder.contains('#') || placeholder.contains('/') {
            start = open + 2;
            continue;
        }

        result = format!("{}{}", &result[..open], &result[end..]);
    }

    result
}
