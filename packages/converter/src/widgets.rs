//! Constructors for leaf widgets and layout containers.
//!
//! Builders only assemble: every default (placeholder image, `#` link,
//! heading fallback) has already been applied by the caller.

use crate::ids::IdGenerator;
use crate::types::{
    ButtonSettings, Container, ContainerSettings, HeadingLevel, HeadingSettings, ImageSettings,
    Node, TextEditorSettings, Widget, WidgetKind,
};

/// Text widget holding markup or plain text.
pub fn text_editor(ids: &mut IdGenerator, content: impl Into<String>) -> Node {
    widget(ids, WidgetKind::TextEditor(TextEditorSettings::new(content)))
}

/// Heading widget sized for `level`.
pub fn heading(ids: &mut IdGenerator, title: impl Into<String>, level: HeadingLevel) -> Node {
    widget(ids, WidgetKind::Heading(HeadingSettings::new(title, level)))
}

/// Image widget.
pub fn image(ids: &mut IdGenerator, url: impl Into<String>, alt: impl Into<String>) -> Node {
    widget(ids, WidgetKind::Image(ImageSettings::new(url, alt)))
}

/// Button widget linking to `href`.
pub fn button(ids: &mut IdGenerator, text: impl Into<String>, href: impl Into<String>) -> Node {
    widget(ids, WidgetKind::Button(ButtonSettings::new(text, href)))
}

fn widget(ids: &mut IdGenerator, kind: WidgetKind) -> Node {
    Node::Widget(Widget::new(ids.widget_id(), kind))
}

/// Container with the given settings and children.
pub fn container(
    ids: &mut IdGenerator,
    settings: ContainerSettings,
    elements: Vec<Node>,
    is_inner: bool,
) -> Node {
    Node::Container(Container {
        id: ids.container_id(),
        settings,
        elements,
        is_inner,
    })
}
