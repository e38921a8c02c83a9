//! Output data model for page-builder templates.
//!
//! Every widget type has its own settings record with stock defaults. The
//! serde attributes keep the exact field names the page builder imports, so
//! nothing here may be renamed on the wire.

use serde::{Serialize, Serializer};

use crate::config::{DEFAULT_BUTTON_TEXT, DOCUMENT_TYPE, FONT_FAMILY, SCHEMA_VERSION};

/// Body text size for text and button widgets, in pixels.
const BODY_FONT_SIZE: u32 = 18;

/// A node of the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "elType", rename_all = "lowercase")]
pub enum Node {
    /// Layout grouping with ordered children.
    Container(Container),
    /// Leaf content element.
    Widget(Widget),
}

impl Node {
    /// The node's run-unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Container(c) => &c.id,
            Self::Widget(w) => &w.id,
        }
    }

    /// Child nodes; always empty for widgets.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container(c) => &c.elements,
            Self::Widget(_) => &[],
        }
    }

    /// Get the container, if this node is one.
    #[must_use]
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(c) => Some(c),
            Self::Widget(_) => None,
        }
    }

    /// Get the widget, if this node is one.
    #[must_use]
    pub fn as_widget(&self) -> Option<&Widget> {
        match self {
            Self::Widget(w) => Some(w),
            Self::Container(_) => None,
        }
    }

    /// Visit this node and all descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Layout container. Outer containers group or form rows; inner ones hold content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub id: String,
    pub settings: ContainerSettings,
    pub elements: Vec<Node>,
    #[serde(rename = "isInner")]
    pub is_inner: bool,
}

/// Container settings. Empty for plain grouping containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
}

impl ContainerSettings {
    /// Settings for a row of columns.
    #[must_use]
    pub fn row() -> Self {
        Self {
            flex_direction: Some(FlexDirection::Row),
            ..Self::default()
        }
    }

    /// Settings for a column taking `percent` of the row.
    #[must_use]
    pub fn column(percent: u32) -> Self {
        Self {
            width: Some(format!("{percent}%")),
            ..Self::default()
        }
    }
}

/// Container flex direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
}

/// Leaf content widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    pub id: String,
    #[serde(flatten)]
    pub kind: WidgetKind,
    pub elements: NoChildren,
}

impl Widget {
    /// Create a widget of the given kind.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: WidgetKind) -> Self {
        Self {
            id: id.into(),
            kind,
            elements: NoChildren,
        }
    }

    /// The `widgetType` tag written for this widget.
    #[must_use]
    pub fn widget_type(&self) -> &'static str {
        self.kind.widget_type()
    }
}

/// Always-empty child list of a widget; serializes as `[]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoChildren;

impl Serialize for NoChildren {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(std::iter::empty::<Node>())
    }
}

/// Widget type with its typed settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widgetType", content = "settings")]
pub enum WidgetKind {
    #[serde(rename = "text-editor")]
    TextEditor(TextEditorSettings),
    #[serde(rename = "heading")]
    Heading(HeadingSettings),
    #[serde(rename = "image")]
    Image(ImageSettings),
    #[serde(rename = "ucaddon_creative_buttons")]
    Button(ButtonSettings),
}

impl WidgetKind {
    /// The wire name of this widget type.
    #[must_use]
    pub fn widget_type(&self) -> &'static str {
        match self {
            Self::TextEditor(_) => "text-editor",
            Self::Heading(_) => "heading",
            Self::Image(_) => "image",
            Self::Button(_) => "ucaddon_creative_buttons",
        }
    }
}

/// Typography mode marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyMode {
    #[default]
    Custom,
}

/// Font size record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSize {
    pub unit: String,
    pub size: u32,
    pub sizes: Vec<u32>,
}

impl FontSize {
    /// A size in pixels.
    #[must_use]
    pub fn px(size: u32) -> Self {
        Self {
            unit: "px".to_string(),
            size,
            sizes: Vec::new(),
        }
    }
}

/// Settings of a `text-editor` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEditorSettings {
    /// Markup or plain text shown by the editor.
    pub editor: String,
    pub typography_typography: TypographyMode,
    pub typography_font_family: String,
    pub typography_font_size: FontSize,
    pub typography_font_weight: String,
}

impl TextEditorSettings {
    #[must_use]
    pub fn new(editor: impl Into<String>) -> Self {
        Self {
            editor: editor.into(),
            typography_typography: TypographyMode::Custom,
            typography_font_family: FONT_FAMILY.to_string(),
            typography_font_size: FontSize::px(BODY_FONT_SIZE),
            typography_font_weight: "400".to_string(),
        }
    }
}

/// Canonical heading sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Map a numeric level to a heading size.
    ///
    /// Levels outside 1..=6 fall back to `H2`.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        match level {
            1 => Self::H1,
            3 => Self::H3,
            4 => Self::H4,
            5 => Self::H5,
            6 => Self::H6,
            _ => Self::H2,
        }
    }

    /// Parse a heading tag name such as `h3`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let digits = tag.strip_prefix('h').or_else(|| tag.strip_prefix('H'))?;
        match digits {
            "1" => Some(Self::H1),
            "2" => Some(Self::H2),
            "3" => Some(Self::H3),
            "4" => Some(Self::H4),
            "5" => Some(Self::H5),
            "6" => Some(Self::H6),
            _ => None,
        }
    }

    /// The `header_size` value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Font-size tier in pixels.
    #[must_use]
    pub fn font_size(&self) -> u32 {
        match self {
            Self::H1 => 40,
            Self::H2 => 28,
            Self::H3 | Self::H4 | Self::H5 | Self::H6 => 20,
        }
    }
}

/// Settings of a `heading` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingSettings {
    pub title: String,
    pub header_size: HeadingLevel,
    pub typography_typography: TypographyMode,
    pub typography_font_family: String,
    pub typography_font_size: FontSize,
    pub typography_font_weight: String,
}

impl HeadingSettings {
    #[must_use]
    pub fn new(title: impl Into<String>, level: HeadingLevel) -> Self {
        Self {
            title: title.into(),
            header_size: level,
            typography_typography: TypographyMode::Custom,
            typography_font_family: FONT_FAMILY.to_string(),
            typography_font_size: FontSize::px(level.font_size()),
            typography_font_weight: "600".to_string(),
        }
    }
}

/// Media library reference of an image widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSource {
    pub url: String,
    pub id: String,
    pub size: String,
    pub alt: String,
    pub source: String,
}

/// Settings of an `image` widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageSettings {
    pub image: ImageSource,
    pub image_size: String,
    pub align: String,
}

impl ImageSettings {
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            image: ImageSource {
                url: url.into(),
                id: String::new(),
                size: String::new(),
                alt: alt.into(),
                source: "library".to_string(),
            },
            image_size: "full".to_string(),
            align: "left".to_string(),
        }
    }
}

/// Link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

/// Box padding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub unit: String,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
    #[serde(rename = "isLinked")]
    pub is_linked: bool,
}

/// Global style references; always empty in generated templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Globals {}

/// Settings of a creative-buttons widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonSettings {
    pub button_text: String,
    pub styles: String,
    pub link: Link,
    pub button_padding: Padding,
    pub button_typography_typography: TypographyMode,
    pub button_typography_font_family: String,
    pub button_typography_font_size: FontSize,
    #[serde(rename = "__globals__")]
    pub globals: Globals,
}

impl ButtonSettings {
    /// Empty `text` is replaced by a stock label.
    #[must_use]
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            button_text: if text.is_empty() {
                DEFAULT_BUTTON_TEXT.to_string()
            } else {
                text
            },
            styles: "uc_btn-5".to_string(),
            link: Link { url: href.into() },
            button_padding: Padding {
                unit: "px".to_string(),
                top: 20,
                right: 48,
                bottom: 20,
                left: 48,
                is_linked: false,
            },
            button_typography_typography: TypographyMode::Custom,
            button_typography_font_family: FONT_FAMILY.to_string(),
            button_typography_font_size: FontSize::px(BODY_FONT_SIZE),
            globals: Globals {},
        }
    }
}

/// Page-level settings; always empty in generated templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSettings {}

/// A complete importable template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub content: Vec<Node>,
    pub page_settings: PageSettings,
    pub version: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

impl Document {
    /// Wrap top-level nodes with the fixed template metadata.
    #[must_use]
    pub fn new(title: impl Into<String>, content: Vec<Node>) -> Self {
        Self {
            content,
            page_settings: PageSettings {},
            version: SCHEMA_VERSION.to_string(),
            title: title.into(),
            doc_type: DOCUMENT_TYPE.to_string(),
        }
    }
}
