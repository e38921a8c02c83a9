//! Element registry for mapping tag names to handlers.

use std::collections::{HashMap, HashSet};

use super::handler::ElementHandler;
use super::types::ConvertContext;
use crate::dom::{tag_name, DomNode};

/// Registry mapping element names to handlers.
///
/// The registry allows registering handlers for specific tag names,
/// as well as marking tags to be skipped entirely.
pub struct ElementRegistry {
    handlers: HashMap<String, Box<dyn ElementHandler>>,
    skip_tags: HashSet<String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            skip_tags: HashSet::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.handlers
            .insert(tag_name.into().to_ascii_lowercase(), Box::new(handler));
    }

    /// Mark tags as skip (don't process, return empty).
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.skip_tags.insert(tag.into().to_ascii_lowercase());
        }
    }

    /// Get the appropriate handler for an element.
    ///
    /// Returns `None` if the element should be skipped or has no handler.
    pub fn get_handler(
        &self,
        node: DomNode<'_>,
        context: &ConvertContext,
    ) -> Option<&dyn ElementHandler> {
        let tag = tag_name(node)?;

        if self.skip_tags.contains(tag) {
            return None;
        }

        self.handlers
            .get(tag)
            .filter(|h| h.can_handle(node, context))
            .map(|h| h.as_ref())
    }

    /// Check if a tag should be skipped.
    #[must_use]
    pub fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
