//! Types for the element registry system.

use std::fmt;

use crate::config::ConvertOptions;
use crate::ids::{IdGenerator, IdMode};

/// Classification of element handlers for logging and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Block-level elements normalized into containers (section, div).
    Layout,
    /// Elements that become a single leaf widget.
    Content,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => f.write_str("layout"),
            Self::Content => f.write_str("content"),
        }
    }
}

/// Counters describing what a conversion kept and lost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Widgets in the output tree.
    pub widgets: usize,
    /// Containers in the output tree.
    pub containers: usize,
    /// Unsupported elements without children, dropped silently.
    pub dropped_elements: usize,
    /// Elements ignored because their tag is on the skip list.
    pub skipped_elements: usize,
    /// Subtrees cut off at the maximum depth.
    pub truncated_subtrees: usize,
}

impl ConversionReport {
    /// Whether any source content was lost beyond the accepted empty-tag drops.
    #[must_use]
    pub fn is_lossy(&self) -> bool {
        self.truncated_subtrees > 0 || self.skipped_elements > 0
    }
}

/// Mutable state threaded through one conversion run.
pub struct ConvertContext {
    /// Id source for every emitted node.
    pub ids: IdGenerator,

    /// URL substituted for images without `src`.
    pub placeholder_image: String,

    /// Current element nesting depth.
    pub depth: usize,

    /// Deepest element nesting the classifier will enter.
    pub max_depth: usize,

    /// Counters filled in during the walk.
    pub report: ConversionReport,
}

impl ConvertContext {
    /// Create a context from conversion options.
    #[must_use]
    pub fn new(options: &ConvertOptions) -> Self {
        let mode = if options.stable_ids {
            IdMode::Sequential
        } else {
            IdMode::Random
        };
        Self {
            ids: IdGenerator::new(mode),
            placeholder_image: options.placeholder_image.clone(),
            depth: 0,
            max_depth: options.max_depth,
            report: ConversionReport::default(),
        }
    }

    /// Replace the id generator.
    #[must_use]
    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self::new(&ConvertOptions::default())
    }
}

impl fmt::Debug for ConvertContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertContext")
            .field("id_mode", &self.ids.mode())
            .field("ids_issued", &self.ids.count())
            .field("depth", &self.depth)
            .field("max_depth", &self.max_depth)
            .field("report", &self.report)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_options() {
        let options = ConvertOptions::new()
            .with_stable_ids(true)
            .with_max_depth(12)
            .with_placeholder_image("https://example.com/p.png");
        let ctx = ConvertContext::new(&options);

        assert_eq!(ctx.ids.mode(), IdMode::Sequential);
        assert_eq!(ctx.max_depth, 12);
        assert_eq!(ctx.depth, 0);
        assert_eq!(ctx.placeholder_image, "https://example.com/p.png");
        assert_eq!(ctx.report, ConversionReport::default());
    }

    #[test]
    fn test_context_default_uses_random_ids() {
        let ctx = ConvertContext::default();
        assert_eq!(ctx.ids.mode(), IdMode::Random);
    }

    #[test]
    fn test_report_is_lossy() {
        let mut report = ConversionReport::default();
        report.dropped_elements = 3;
        assert!(!report.is_lossy());

        report.truncated_subtrees = 1;
        assert!(report.is_lossy());
    }

    #[test]
    fn test_element_type_display() {
        assert_eq!(ElementType::Layout.to_string(), "layout");
        assert_eq!(ElementType::Content.to_string(), "content");
    }
}
