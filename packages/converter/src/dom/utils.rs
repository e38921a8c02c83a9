//! Utility functions for navigating and extracting data from parsed HTML.

use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

/// Handle to any node in a parsed document.
pub type DomNode<'a> = NodeRef<'a, Node>;

/// Coarse node classification used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// An element such as `<div>`.
    Element,
    /// A text node.
    Text,
    /// Comments, doctypes, processing instructions and document roots.
    Other,
}

/// Classify a node.
pub fn node_kind(node: DomNode<'_>) -> NodeKind {
    match node.value() {
        Node::Element(_) => NodeKind::Element,
        Node::Text(_) => NodeKind::Text,
        _ => NodeKind::Other,
    }
}

/// Get the tag name of an element.
///
/// Returns `None` for non-element nodes. Names are lowercase for HTML content.
///
/// # Examples
/// ```
/// use elementor_converter::dom::{find_body, parse_document, tag_name};
///
/// let html = parse_document("<section></section>");
/// let section = find_body(&html).unwrap().first_child().unwrap();
/// assert_eq!(tag_name(section), Some("section"));
/// ```
pub fn tag_name<'a>(node: DomNode<'a>) -> Option<&'a str> {
    node.value().as_element().map(|e| e.name())
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: DomNode<'_>, tag: &str) -> bool {
    tag_name(node).is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Get the raw payload of a text node.
pub fn text_payload<'a>(node: DomNode<'a>) -> Option<&'a str> {
    node.value().as_text().map(|text| &**text)
}

/// Check if a node is a text node containing only whitespace.
pub fn is_blank_text(node: DomNode<'_>) -> bool {
    text_payload(node).is_some_and(|text| text.trim().is_empty())
}

/// Get an attribute value from an element.
///
/// # Returns
/// Attribute value, or `None` if not found or the node is not an element
pub fn attribute<'a>(node: DomNode<'a>, name: &str) -> Option<&'a str> {
    node.value().as_element().and_then(|e| e.attr(name))
}

/// Get all child nodes in document order, including text and comments.
pub fn children<'a>(node: DomNode<'a>) -> impl Iterator<Item = DomNode<'a>> {
    node.children()
}

/// Get the block children of a node: elements and non-blank text, in document order.
///
/// # Examples
/// ```
/// use elementor_converter::dom::{block_children, find_body, parse_document};
///
/// let html = parse_document("<div>\n  <p>a</p>\n  tail <!-- note -->\n</div>");
/// let div = find_body(&html).unwrap().first_child().unwrap();
/// assert_eq!(block_children(div).len(), 2);
/// ```
pub fn block_children(node: DomNode<'_>) -> Vec<DomNode<'_>> {
    node.children()
        .filter(|child| match node_kind(*child) {
            NodeKind::Element => true,
            NodeKind::Text => !is_blank_text(*child),
            NodeKind::Other => false,
        })
        .collect()
}

/// Concatenate all descendant text of a node, untrimmed.
pub fn visible_text(node: DomNode<'_>) -> String {
    match ElementRef::wrap(node) {
        Some(element) => element.text().collect(),
        None => text_payload(node).unwrap_or_default().to_string(),
    }
}

/// Serialize the children of an element back to markup.
pub fn inner_markup(node: DomNode<'_>) -> String {
    ElementRef::wrap(node)
        .map(|element| element.inner_html())
        .unwrap_or_default()
}

/// Serialize an element, including its own tag, back to markup.
pub fn outer_markup(node: DomNode<'_>) -> String {
    ElementRef::wrap(node)
        .map(|element| element.html())
        .unwrap_or_default()
}

/// Find the `<body>` element of a parsed document.
///
/// # Returns
/// The body element, or `None` for documents without one (e.g. framesets)
pub fn find_body(html: &Html) -> Option<DomNode<'_>> {
    let root = html.root_element();
    root.children()
        .find(|child| has_tag(*child, "body"))
        .or_else(|| root.descendants().find(|node| has_tag(*node, "body")))
}
