//! DOM adapter over the `scraper` HTML5 parser.
//!
//! The classifier only talks to the parsed tree through the functions in
//! this module, so the parser can be swapped without touching the core.

mod utils;

pub use utils::{
    attribute, block_children, children, find_body, has_tag, inner_markup,
    is_blank_text, node_kind, outer_markup, tag_name, text_payload, visible_text, DomNode,
    NodeKind,
};

use scraper::Html;

/// Parse markup into a document tree.
///
/// The HTML5 algorithm recovers from every syntax error, so this never fails.
/// Recovered errors are logged at debug level.
pub fn parse_document(markup: &str) -> Html {
    let html = Html::parse_document(markup);
    for error in &html.errors {
        tracing::debug!(error = %error, "Recovered HTML parse error");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_document_tolerates_malformed_markup() {
        let html = parse_document("<div><p>unclosed <b>bold</div></span>");
        let body = find_body(&html).unwrap();
        assert_eq!(tag_name(body), Some("body"));
        assert!(visible_text(body).contains("unclosed bold"));
    }

    #[test]
    fn test_parse_document_wraps_fragments_in_body() {
        let html = parse_document("<p>Hello</p>");
        let body = find_body(&html).unwrap();
        let kids = block_children(body);
        assert_eq!(kids.len(), 1);
        assert!(has_tag(kids[0], "p"));
    }
}
