//! Usage guide resource definition.

use super::ResourceDefinition;
use crate::domains::framework::SERVER_INSTRUCTIONS;
use crate::domains::resources::service::ResourceContent;

/// The mandatory-usage policy as markdown (static).
pub struct UsageGuideResource;

impl ResourceDefinition for UsageGuideResource {
    const URI: &'static str = "trinity://docs/usage";
    const NAME: &'static str = "Usage Guide";
    const DESCRIPTION: &'static str = "How and when hosts should apply the framework";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(SERVER_INSTRUCTIONS.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_guide_metadata() {
        assert_eq!(UsageGuideResource::URI, "trinity://docs/usage");
        assert_eq!(UsageGuideResource::MIME_TYPE, "text/markdown");
    }

    #[test]
    fn test_usage_guide_content_is_the_instructions() {
        match UsageGuideResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.contains("MANDATORY USAGE RULE"));
            }
            _ => panic!("Expected static text content"),
        }
    }
}
