//! The term glossary: abstract qualities that bridge dimensions.

use std::collections::BTreeMap;

/// The eight abstract "-ity" terms with one-line definitions.
pub static KEY_TERMS: [(&str, &str); 8] = [
    ("authenticity", "Genuine alignment"),
    ("complexity", "Interconnected parts"),
    ("community", "Shared belonging"),
    ("synchronicity", "Meaningful alignment"),
    ("serendipity", "Fortunate discovery"),
    ("vulnerability", "Openness to risk"),
    ("creativity", "Novel ideas"),
    ("propensity", "Natural tendency"),
];

/// Usage hint returned alongside the glossary.
pub const TERMS_USAGE: &str =
    "Use these abstract qualities to bridge dimensions in your analysis";

/// The glossary as an ordered term -> definition map.
pub fn glossary() -> BTreeMap<String, String> {
    KEY_TERMS
        .iter()
        .map(|(term, definition)| (term.to_string(), definition.to_string()))
        .collect()
}
