//! Layout handler for block-level elements.
//!
//! Every block element becomes exactly one node: a row of columns when its
//! block children are two or more divs, otherwise an outer container holding
//! a single inner container with the converted content.

use crate::dom::{block_children, has_tag, DomNode};
use crate::registry::handler::{classify_all, ElementHandler, RecurseFn};
use crate::registry::types::{ConvertContext, ElementType};
use crate::types::{ContainerSettings, Node};
use crate::widgets;

/// Handler for `<section>` and `<div>`.
///
/// With peel-through enabled, an element whose only block child is a div is
/// inspected through that div when looking for columns.
pub struct LayoutHandler {
    peel_through: bool,
}

impl LayoutHandler {
    /// Layout handler without peel-through, as used for `<div>`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            peel_through: false,
        }
    }

    /// Layout handler that looks through a single wrapping div, as used for `<section>`.
    #[must_use]
    pub fn with_peel_through() -> Self {
        Self { peel_through: true }
    }

    fn column_candidates<'a>(&self, own: &[DomNode<'a>]) -> Vec<DomNode<'a>> {
        match own {
            [only] if self.peel_through && has_tag(*only, "div") => block_children(*only),
            _ => own.to_vec(),
        }
    }
}

impl Default for LayoutHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementHandler for LayoutHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Layout
    }

    fn handle(
        &self,
        node: DomNode<'_>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'_>,
    ) -> Vec<Node> {
        let own = block_children(node);
        let candidates = self.column_candidates(&own);

        if is_columns(&candidates) {
            return vec![columns(&candidates, context, recurse)];
        }

        let content = classify_all(own, context, recurse);
        let inner = widgets::container(&mut context.ids, ContainerSettings::default(), content, true);
        vec![widgets::container(
            &mut context.ids,
            ContainerSettings::default(),
            vec![inner],
            false,
        )]
    }
}

fn is_columns(candidates: &[DomNode<'_>]) -> bool {
    candidates.len() >= 2 && candidates.iter().all(|c| has_tag(*c, "div"))
}

/// One row container holding a column container per div.
fn columns(
    divs: &[DomNode<'_>],
    context: &mut ConvertContext,
    recurse: &RecurseFn<'_>,
) -> Node {
    // Integer percent; the remainder of 100 is left unused.
    let width = u32::try_from(divs.len()).map_or(0, |n| 100 / n);
    tracing::trace!(columns = divs.len(), width, "Detected column layout");

    let mut cols = Vec::with_capacity(divs.len());
    for div in divs {
        let content = classify_all(block_children(*div), context, recurse);
        cols.push(widgets::container(
            &mut context.ids,
            ContainerSettings::column(width),
            content,
            true,
        ));
    }
    widgets::container(&mut context.ids, ContainerSettings::row(), cols, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{find_body, parse_document, visible_text};
    use crate::ids::IdGenerator;
    use crate::types::{Container, FlexDirection};
    use pretty_assertions::assert_eq;

    /// Stand-in classifier: text and every element become one text widget
    /// holding their visible text.
    fn text_recurse(child: DomNode<'_>, ctx: &mut ConvertContext) -> Vec<Node> {
        let text = visible_text(child);
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        vec![widgets::text_editor(&mut ctx.ids, text)]
    }

    fn layout(handler: &LayoutHandler, markup: &str) -> Container {
        let html = parse_document(markup);
        let node = find_body(&html).unwrap().first_child().unwrap();
        let mut context = ConvertContext::default().with_ids(IdGenerator::sequential());
        let mut nodes = handler.handle(node, &mut context, &text_recurse);
        assert_eq!(nodes.len(), 1);
        match nodes.remove(0) {
            Node::Container(container) => container,
            Node::Widget(_) => panic!("expected a container"),
        }
    }

    fn editors(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .map(|n| {
                let json = serde_json::to_value(n).unwrap();
                json["settings"]["editor"].as_str().unwrap().to_string()
            })
            .collect()
    }

    #[test]
    fn test_div_columns() {
        let row = layout(
            &LayoutHandler::new(),
            "<div><div>A</div><div>B</div><div>C</div></div>",
        );

        assert!(!row.is_inner);
        assert_eq!(row.settings.flex_direction, Some(FlexDirection::Row));
        assert_eq!(row.elements.len(), 3);

        let mut texts = Vec::new();
        for column in &row.elements {
            let column = column.as_container().unwrap();
            assert!(column.is_inner);
            assert_eq!(column.settings.width.as_deref(), Some("33%"));
            texts.extend(editors(&column.elements));
        }
        assert_eq!(texts, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_column_width_rounds_down() {
        for (n, width) in [(2, "50%"), (3, "33%"), (6, "16%"), (7, "14%")] {
            let markup = format!("<div>{}</div>", "<div>x</div>".repeat(n));
            let row = layout(&LayoutHandler::new(), &markup);
            assert_eq!(row.elements.len(), n);
            for column in &row.elements {
                let column = column.as_container().unwrap();
                assert_eq!(column.settings.width.as_deref(), Some(width));
            }
        }
    }

    #[test]
    fn test_columns_ignore_whitespace_between_divs() {
        let row = layout(
            &LayoutHandler::new(),
            "<div>\n  <div>A</div>\n  <div>B</div>\n</div>",
        );
        assert_eq!(row.settings.flex_direction, Some(FlexDirection::Row));
        assert_eq!(row.elements.len(), 2);
    }

    #[test]
    fn test_column_content_is_flattened_in_order() {
        let row = layout(
            &LayoutHandler::new(),
            "<div><div><p>one</p><p>two</p></div><div>three</div></div>",
        );
        let first = row.elements[0].as_container().unwrap();
        assert_eq!(editors(&first.elements), vec!["one", "two"]);
    }

    #[test]
    fn test_mixed_children_are_not_columns() {
        let outer = layout(
            &LayoutHandler::new(),
            "<div><div>A</div><p>B</p></div>",
        );

        assert!(!outer.is_inner);
        assert_eq!(outer.settings, ContainerSettings::default());
        assert_eq!(outer.elements.len(), 1);

        let inner = outer.elements[0].as_container().unwrap();
        assert!(inner.is_inner);
        assert_eq!(inner.settings, ContainerSettings::default());
        assert_eq!(editors(&inner.elements), vec!["A", "B"]);
    }

    #[test]
    fn test_single_child_still_gets_two_wrappers() {
        let outer = layout(&LayoutHandler::new(), "<div><p>only</p></div>");
        let inner = outer.elements[0].as_container().unwrap();
        assert_eq!(editors(&inner.elements), vec!["only"]);
    }

    #[test]
    fn test_empty_div_yields_empty_wrapper_pair() {
        let outer = layout(&LayoutHandler::new(), "<div>   </div>");
        let inner = outer.elements[0].as_container().unwrap();
        assert!(inner.elements.is_empty());
    }

    #[test]
    fn test_section_peels_through_wrapping_div() {
        let row = layout(
            &LayoutHandler::with_peel_through(),
            "<section><div><div>L</div><div>R</div></div></section>",
        );
        assert_eq!(row.settings.flex_direction, Some(FlexDirection::Row));
        assert_eq!(row.elements.len(), 2);
    }

    #[test]
    fn test_div_does_not_peel_through() {
        let outer = layout(
            &LayoutHandler::new(),
            "<div><div><div>L</div><div>R</div></div></div>",
        );
        assert_eq!(outer.settings.flex_direction, None);
        let inner = outer.elements[0].as_container().unwrap();
        assert!(inner.is_inner);
    }

    #[test]
    fn test_section_without_columns_uses_own_children() {
        let outer = layout(
            &LayoutHandler::with_peel_through(),
            "<section><div><p>solo</p></div></section>",
        );
        let inner = outer.elements[0].as_container().unwrap();
        // The wrapping div is handed to the classifier as a whole.
        assert_eq!(editors(&inner.elements), vec!["solo"]);
    }

    #[test]
    fn test_section_direct_columns() {
        let row = layout(
            &LayoutHandler::with_peel_through(),
            "<section><div>A</div><div>B</div></section>",
        );
        assert_eq!(row.elements.len(), 2);
    }

    #[test]
    fn test_ids_are_assigned_children_first() {
        let outer = layout(&LayoutHandler::new(), "<div><p>x</p></div>");
        let inner = outer.elements[0].as_container().unwrap();
        assert_eq!(inner.elements[0].id(), "widget_1");
        assert_eq!(inner.id, "container_2");
        assert_eq!(outer.id, "container_3");
    }
}
