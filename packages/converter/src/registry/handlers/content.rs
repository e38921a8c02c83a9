//! Content element handlers.
//!
//! Each handler here turns one element into exactly one leaf widget,
//! applying attribute defaults before calling the widget builders.

use crate::config::{BUTTON_TEXT_LIMIT, DEFAULT_LINK_TARGET};
use crate::dom::{attribute, inner_markup, outer_markup, tag_name, visible_text, DomNode};
use crate::registry::handler::{ElementHandler, RecurseFn};
use crate::registry::types::{ConvertContext, ElementType};
use crate::types::{HeadingLevel, Node};
use crate::widgets;

/// Handler for `<h1>` through `<h6>`.
///
/// The title is the trimmed visible text. Tags that don't map to a level
/// fall back to h2.
pub struct HeadingHandler;

impl ElementHandler for HeadingHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Content
    }

    fn handle(
        &self,
        node: DomNode<'_>,
        context: &mut ConvertContext,
        _recurse: &RecurseFn<'_>,
    ) -> Vec<Node> {
        let level = tag_name(node)
            .and_then(HeadingLevel::from_tag)
            .unwrap_or(HeadingLevel::H2);
        let title = visible_text(node);
        vec![widgets::heading(&mut context.ids, title.trim(), level)]
    }
}

/// Handler for `<p>` elements.
///
/// Keeps the inner markup so inline formatting survives.
pub struct ParagraphHandler;

impl ElementHandler for ParagraphHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Content
    }

    fn handle(
        &self,
        node: DomNode<'_>,
        context: &mut ConvertContext,
        _recurse: &RecurseFn<'_>,
    ) -> Vec<Node> {
        vec![widgets::text_editor(&mut context.ids, inner_markup(node))]
    }
}

/// Handler for `<img>` elements.
pub struct ImageHandler;

impl ElementHandler for ImageHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Content
    }

    fn handle(
        &self,
        node: DomNode<'_>,
        context: &mut ConvertContext,
        _recurse: &RecurseFn<'_>,
    ) -> Vec<Node> {
        let url = attribute(node, "src")
            .filter(|src| !src.is_empty())
            .map_or_else(|| context.placeholder_image.clone(), str::to_string);
        let alt = attribute(node, "alt").unwrap_or_default();
        vec![widgets::image(&mut context.ids, url, alt)]
    }
}

/// Handler for `<a>` elements.
///
/// Short link text becomes a button. Longer anchors are kept verbatim as
/// markup inside a text widget.
pub struct AnchorHandler;

impl ElementHandler for AnchorHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Content
    }

    fn handle(
        &self,
        node: DomNode<'_>,
        context: &mut ConvertContext,
        _recurse: &RecurseFn<'_>,
    ) -> Vec<Node> {
        let text = visible_text(node);
        let text = text.trim();

        if text.chars().count() <= BUTTON_TEXT_LIMIT {
            let href = attribute(node, "href")
                .filter(|href| !href.is_empty())
                .unwrap_or(DEFAULT_LINK_TARGET);
            vec![widgets::button(&mut context.ids, text, href)]
        } else {
            vec![widgets::text_editor(&mut context.ids, outer_markup(node))]
        }
    }
}
