//! Registry configuration for HTML content.

use super::core::ElementRegistry;
use super::handlers::{AnchorHandler, HeadingHandler, ImageHandler, LayoutHandler, ParagraphHandler};
use crate::config::ConvertOptions;

/// Create a content registry with the stock HTML handlers.
///
/// Nothing is skipped: every tag without a handler is flattened into its
/// children by the engine.
#[must_use]
pub fn create_content_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Content handlers
    for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        registry.register(tag, HeadingHandler);
    }
    registry.register("p", ParagraphHandler);
    registry.register("img", ImageHandler);
    registry.register("a", AnchorHandler);

    // Layout handlers
    registry.register("section", LayoutHandler::with_peel_through());
    registry.register("div", LayoutHandler::new());

    registry
}

/// Create the content registry with the skip list from `options` applied.
#[must_use]
pub fn create_registry(options: &ConvertOptions) -> ElementRegistry {
    let mut registry = create_content_registry();
    registry.skip(options.skip_tags.iter().cloned());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_content_registry() {
        let registry = create_content_registry();

        // Content handlers
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6", "p", "img", "a"] {
            assert!(registry.has_handler(tag), "missing handler for {tag}");
        }

        // Layout handlers
        assert!(registry.has_handler("section"));
        assert!(registry.has_handler("div"));

        // Everything else flattens
        assert!(!registry.has_handler("span"));
        assert!(!registry.should_skip("script"));
        assert!(!registry.should_skip("style"));
    }

    #[test]
    fn test_create_registry_applies_skip_tags() {
        let options = ConvertOptions::new().with_skip_tags(["script", "Style"]);
        let registry = create_registry(&options);

        assert!(registry.should_skip("script"));
        assert!(registry.should_skip("style"));
        assert!(registry.has_handler("p"));
    }
}
