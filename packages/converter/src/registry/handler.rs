//! Element handler trait definition.

use super::types::{ConvertContext, ElementType};
use crate::dom::DomNode;
use crate::types::Node;

/// Function type for recursive classification of child nodes.
pub type RecurseFn<'r> = dyn Fn(DomNode<'_>, &mut ConvertContext) -> Vec<Node> + 'r;

/// Trait for element handlers.
///
/// Handlers turn one source element into zero or more output nodes. They
/// receive a `recurse` function to classify child nodes through the engine.
pub trait ElementHandler: Send + Sync {
    /// Return the type classification of this element.
    fn element_type(&self) -> ElementType;

    /// Check if this handler can process the given element.
    ///
    /// Default implementation always returns true.
    fn can_handle(&self, _node: DomNode<'_>, _context: &ConvertContext) -> bool {
        true
    }

    /// Convert the element into output nodes.
    ///
    /// # Arguments
    /// * `node` - The source element to process
    /// * `context` - Current conversion context
    /// * `recurse` - Function to call for recursive child processing
    fn handle(
        &self,
        node: DomNode<'_>,
        context: &mut ConvertContext,
        recurse: &RecurseFn<'_>,
    ) -> Vec<Node>;
}

/// Classify a sequence of nodes and concatenate the results in order.
pub fn classify_all<'a>(
    nodes: impl IntoIterator<Item = DomNode<'a>>,
    context: &mut ConvertContext,
    recurse: &RecurseFn<'_>,
) -> Vec<Node> {
    let mut out = Vec::new();
    for node in nodes {
        out.extend(recurse(node, context));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{block_children, find_body, parse_document};
    use crate::widgets;

    struct TestHandler;

    impl ElementHandler for TestHandler {
        fn element_type(&self) -> ElementType {
            ElementType::Content
        }

        fn handle(
            &self,
            _node: DomNode<'_>,
            context: &mut ConvertContext,
            _recurse: &RecurseFn<'_>,
        ) -> Vec<Node> {
            vec![widgets::text_editor(&mut context.ids, "test")]
        }
    }

    #[test]
    fn test_handler_trait() {
        let handler = TestHandler;
        assert_eq!(handler.element_type(), ElementType::Content);

        let html = parse_document("<p>x</p>");
        let node = find_body(&html).unwrap().first_child().unwrap();
        let mut context = ConvertContext::default();
        assert!(handler.can_handle(node, &context));

        let recurse = |_: DomNode<'_>, _: &mut ConvertContext| -> Vec<Node> { Vec::new() };
        let result = handler.handle(node, &mut context, &recurse);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].as_widget().unwrap().widget_type(), "text-editor");
    }

    #[test]
    fn test_classify_all_concatenates_in_order() {
        let html = parse_document("<div><i>a</i><i>b</i><i>c</i></div>");
        let div = find_body(&html).unwrap().first_child().unwrap();
        let mut context = ConvertContext::default();

        let recurse = |child: DomNode<'_>, ctx: &mut ConvertContext| {
            let text = crate::dom::visible_text(child);
            vec![
                widgets::text_editor(&mut ctx.ids, text.clone()),
                widgets::text_editor(&mut ctx.ids, text),
            ]
        };
        let result = classify_all(block_children(div), &mut context, &recurse);

        let texts: Vec<String> = result
            .iter()
            .map(|n| {
                let json = serde_json::to_value(n).unwrap();
                json["settings"]["editor"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(texts, vec!["a", "a", "b", "b", "c", "c"]);
    }
}
