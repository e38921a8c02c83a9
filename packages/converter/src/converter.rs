//! Document assembly: ties parsing, classification and the page envelope together.

use crate::config::{ConvertOptions, DEFAULT_TITLE};
use crate::dom::{children, find_body, is_blank_text, parse_document, DomNode};
use crate::registry::{classify_all, create_registry, ConversionReport, ConvertContext, ConvertEngine};
use crate::types::{Document, Node};

/// A converted document together with its conversion report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub document: Document,
    pub report: ConversionReport,
}

/// Convert HTML into a page document with default options.
///
/// # Arguments
/// * `html` - Source markup; fragments and malformed markup are accepted
/// * `title` - Page title; an empty title becomes `"converted"`
///
/// # Example
///
/// ```
/// use elementor_converter::convert_html;
///
/// let document = convert_html("<p>Hello</p>", "home");
/// assert_eq!(document.title, "home");
/// assert_eq!(document.content.len(), 1);
/// ```
#[must_use]
pub fn convert_html(html: &str, title: &str) -> Document {
    convert_html_with(html, title, &ConvertOptions::default()).document
}

/// Convert HTML into a page document using `options`.
///
/// Never fails: unsupported markup is flattened or dropped and the losses
/// are counted in the returned report. Options are used as given; call
/// [`ConvertOptions::validate`] first when they come from user input.
pub fn convert_html_with(html: &str, title: &str, options: &ConvertOptions) -> Conversion {
    let parsed = parse_document(html);
    let engine = ConvertEngine::new(create_registry(options));
    let mut context = ConvertContext::new(options);

    let roots: Vec<DomNode<'_>> = match find_body(&parsed) {
        Some(body) => children(body).collect(),
        None => {
            tracing::debug!("No body element, converting root children");
            children(*parsed.root_element()).collect()
        }
    };

    let content = classify_all(
        roots.into_iter().filter(|n| !is_blank_text(*n)),
        &mut context,
        &|node: DomNode<'_>, ctx: &mut ConvertContext| engine.classify(node, ctx),
    );

    let mut report = context.report;
    for node in &content {
        node.walk(&mut |n| match n {
            Node::Container(_) => report.containers += 1,
            Node::Widget(_) => report.widgets += 1,
        });
    }

    let title = if title.is_empty() { DEFAULT_TITLE } else { title };

    tracing::info!(
        title,
        top_level = content.len(),
        widgets = report.widgets,
        containers = report.containers,
        dropped = report.dropped_elements,
        skipped = report.skipped_elements,
        truncated = report.truncated_subtrees,
        "Converted document"
    );

    Conversion {
        document: Document::new(title, content),
        report,
    }
}
