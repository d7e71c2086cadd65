//! The four-dimension framework table.
//!
//! Static data, built once at process start and never mutated. The table
//! drives the renderer, the framework resource, and the tool schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier for one of the four analytical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionId {
    Knowledge,
    Social,
    Generative,
    Convergence,
}

/// One analytical dimension: display metadata plus its label list.
///
/// The three input dimensions carry focus-area labels; convergence
/// carries element labels instead.
#[derive(Debug, Clone, Serialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub name: &'static str,
    pub symbol: &'static str,
    pub question: &'static str,
    pub labels: &'static [&'static str],
}

impl Dimension {
    /// Heading word for the label list in rendered output.
    pub fn label_heading(&self) -> &'static str {
        match self.id {
            DimensionId::Convergence => "Elements",
            _ => "Focus on",
        }
    }
}

/// The framework table, in rendering order.
pub static FRAMEWORK: [Dimension; 4] = [
    Dimension {
        id: DimensionId::Knowledge,
        name: "Knowledge",
        symbol: "\u{1F4CA}",
        question: "What facts and data exist?",
        labels: &["Evidence", "Data", "Research", "Constraints"],
    },
    Dimension {
        id: DimensionId::Social,
        name: "Social",
        symbol: "\u{1F465}",
        question: "Who is affected and why?",
        labels: &["Stakeholders", "Motivations", "Relationships", "Psychology"],
    },
    Dimension {
        id: DimensionId::Generative,
        name: "Generative",
        symbol: "\u{1F4A1}",
        question: "What patterns and possibilities exist?",
        labels: &["Patterns", "Innovations", "Scenarios", "Cross-domain insights"],
    },
    Dimension {
        id: DimensionId::Convergence,
        name: "Convergence",
        symbol: "\u{1F52E}",
        question: "What emerges when K+S+G combine?",
        labels: &["Bridges", "Serendipity", "Synchronicity", "Emergent insight"],
    },
];

/// Look up a dimension by id. The table holds every id, in enum order.
pub fn dimension(id: DimensionId) -> &'static Dimension {
    &FRAMEWORK[id as usize]
}

/// Emphasis selector for the analyze operation.
///
/// Advisory metadata echoed back to the caller; rendering does not change
/// with it. Defaults to `Balanced` when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    Knowledge,
    Social,
    Generative,
    #[default]
    Balanced,
}

impl Focus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Knowledge => "knowledge",
            Self::Social => "social",
            Self::Generative => "generative",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single validation error across the tool surface: a `focus` value
/// outside the four allowed literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid focus value '{0}': expected knowledge, social, generative, or balanced")]
pub struct InvalidFocusValue(pub String);

impl FromStr for Focus {
    type Err = InvalidFocusValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "knowledge" => Ok(Self::Knowledge),
            "social" => Ok(Self::Social),
            "generative" => Ok(Self::Generative),
            "balanced" => Ok(Self::Balanced),
            other => Err(InvalidFocusValue(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_framework_has_four_distinct_dimensions() {
        assert_eq!(FRAMEWORK.len(), 4);

        let names: HashSet<_> = FRAMEWORK.iter().map(|d| d.name).collect();
        let symbols: HashSet<_> = FRAMEWORK.iter().map(|d| d.symbol).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(symbols.len(), 4);
    }

    #[test]
    fn test_dimension_lookup_matches_table_order() {
        assert_eq!(dimension(DimensionId::Knowledge).name, "Knowledge");
        assert_eq!(dimension(DimensionId::Convergence).name, "Convergence");
    }

    #[test]
    fn test_every_dimension_has_four_labels() {
        for dim in &FRAMEWORK {
            assert_eq!(dim.labels.len(), 4, "dimension {} label count", dim.name);
        }
    }

    #[test]
    fn test_convergence_lists_elements() {
        let convergence = dimension(DimensionId::Convergence);
        assert_eq!(convergence.label_heading(), "Elements");
        assert!(convergence.labels.contains(&"Bridges"));

        let knowledge = dimension(DimensionId::Knowledge);
        assert_eq!(knowledge.label_heading(), "Focus on");
    }

    #[test]
    fn test_focus_parses_allowed_values() {
        assert_eq!("knowledge".parse::<Focus>().unwrap(), Focus::Knowledge);
        assert_eq!("social".parse::<Focus>().unwrap(), Focus::Social);
        assert_eq!("generative".parse::<Focus>().unwrap(), Focus::Generative);
        assert_eq!("balanced".parse::<Focus>().unwrap(), Focus::Balanced);
    }

    #[test]
    fn test_focus_rejects_unknown_values() {
        let err = "invalid-value".parse::<Focus>().unwrap_err();
        assert_eq!(err, InvalidFocusValue("invalid-value".to_string()));
        assert!(err.to_string().contains("invalid-value"));

        // Case-sensitive by design: the wire format is lowercase.
        assert!("Knowledge".parse::<Focus>().is_err());
    }

    #[test]
    fn test_focus_default_is_balanced() {
        assert_eq!(Focus::default(), Focus::Balanced);
        assert_eq!(Focus::Balanced.to_string(), "balanced");
    }

    #[test]
    fn test_focus_serde_round_trip() {
        let json = serde_json::to_string(&Focus::Generative).unwrap();
        assert_eq!(json, "\"generative\"");

        let parsed: Focus = serde_json::from_str("\"social\"").unwrap();
        assert_eq!(parsed, Focus::Social);

        assert!(serde_json::from_str::<Focus>("\"everything\"").is_err());
    }
}
