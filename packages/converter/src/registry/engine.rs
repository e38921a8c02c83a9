//! Classification engine that walks the source tree using the registry.

use super::core::ElementRegistry;
use super::handler::classify_all;
use super::types::ConvertContext;
use crate::dom::{children, node_kind, tag_name, text_payload, DomNode, NodeKind};
use crate::types::Node;
use crate::widgets;

/// Engine that classifies source nodes using the registry.
///
/// Elements with a registered handler are dispatched to it. Elements
/// without one are flattened: their children are classified in place and
/// the element itself contributes no wrapper. Unknown elements with no
/// children are dropped. Classification never fails.
pub struct ConvertEngine {
    registry: ElementRegistry,
}

impl ConvertEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Classify one source node into zero or more output nodes.
    ///
    /// Text is trimmed and becomes a text widget unless blank. Element
    /// nesting beyond `context.max_depth` is cut off and counted in the report.
    pub fn classify(&self, node: DomNode<'_>, context: &mut ConvertContext) -> Vec<Node> {
        match node_kind(node) {
            NodeKind::Text => return self.classify_text(node, context),
            NodeKind::Other => return Vec::new(),
            NodeKind::Element => {}
        }

        let tag = tag_name(node).unwrap_or_default();

        if self.registry.should_skip(tag) {
            tracing::debug!(tag, "Skipping element");
            context.report.skipped_elements += 1;
            return Vec::new();
        }

        if context.depth >= context.max_depth {
            tracing::warn!(
                tag,
                max_depth = context.max_depth,
                "Maximum nesting depth reached, dropping subtree"
            );
            context.report.truncated_subtrees += 1;
            return Vec::new();
        }

        context.depth += 1;
        let recurse = |child: DomNode<'_>, ctx: &mut ConvertContext| self.classify(child, ctx);

        let nodes = if let Some(handler) = self.registry.get_handler(node, context) {
            tracing::trace!(tag, kind = %handler.element_type(), "Dispatching element");
            handler.handle(node, context, &recurse)
        } else if node.has_children() {
            tracing::trace!(tag, "Flattening unsupported element");
            classify_all(children(node), context, &recurse)
        } else {
            tracing::debug!(tag, "Dropping empty unsupported element");
            context.report.dropped_elements += 1;
            Vec::new()
        };

        context.depth -= 1;
        nodes
    }

    fn classify_text(&self, node: DomNode<'_>, context: &mut ConvertContext) -> Vec<Node> {
        let text = text_payload(node).unwrap_or_default().trim();
        if text.is_empty() {
            return Vec::new();
        }
        vec![widgets::text_editor(&mut context.ids, text)]
    }
}
