//! Configuration constants, conversion options and their validation.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConverterError, Result};

/// Template schema version written to every document.
pub const SCHEMA_VERSION: &str = "0.4";

/// Template type marker written to every document.
pub const DOCUMENT_TYPE: &str = "page";

/// Title used when the caller supplies an empty one.
pub const DEFAULT_TITLE: &str = "converted";

/// Image URL substituted when an `<img>` has no usable `src`.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/600x400";

/// Link target used when an anchor has no `href`.
pub const DEFAULT_LINK_TARGET: &str = "#";

/// Label used for buttons whose anchor text is empty.
pub const DEFAULT_BUTTON_TEXT: &str = "Button";

/// Anchors with visible text up to this many characters become buttons.
pub const BUTTON_TEXT_LIMIT: usize = 30;

/// Font family applied to every widget's typography settings.
pub const FONT_FAMILY: &str = "Poppins";

/// Default bound on classifier recursion.
///
/// Deeper subtrees are dropped and reported instead of growing the stack.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest accepted `max_depth`.
///
/// The classifier recurses once per element level, so this keeps the walk
/// within an 8 MiB thread stack (the main thread's default).
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Absolute http(s) URL without whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static HTTP_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid regex"));

/// Validate a placeholder image URL.
///
/// # Examples
/// ```
/// use elementor_converter::config::validate_placeholder_url;
///
/// assert!(validate_placeholder_url("https://example.com/img.png").is_ok());
/// assert!(validate_placeholder_url("not a url").is_err());
/// ```
pub fn validate_placeholder_url(url: &str) -> Result<()> {
    if HTTP_URL_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(ConverterError::InvalidPlaceholderUrl(url.to_string()))
    }
}

/// Validate the maximum recursion depth.
///
/// # Examples
/// ```
/// use elementor_converter::config::validate_max_depth;
///
/// assert!(validate_max_depth(64).is_ok());
/// assert!(validate_max_depth(0).is_err());
/// assert!(validate_max_depth(1_000_000).is_err());
/// ```
pub fn validate_max_depth(max_depth: usize) -> Result<()> {
    if (1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
        Ok(())
    } else {
        Err(ConverterError::InvalidMaxDepth(max_depth))
    }
}

/// Options controlling a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// URL used for images without a `src`.
    pub placeholder_image: String,

    /// Use a per-run counter instead of random id suffixes.
    pub stable_ids: bool,

    /// Maximum classifier recursion depth.
    pub max_depth: usize,

    /// Tags whose whole subtree is ignored.
    pub skip_tags: BTreeSet<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE_URL.to_string(),
            stable_ids: false,
            max_depth: DEFAULT_MAX_DEPTH,
            skip_tags: BTreeSet::new(),
        }
    }
}

impl ConvertOptions {
    /// Create options with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder image URL.
    #[must_use]
    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    /// Enable or disable deterministic ids.
    #[must_use]
    pub fn with_stable_ids(mut self, stable: bool) -> Self {
        self.stable_ids = stable;
        self
    }

    /// Set the maximum recursion depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Add tags to skip. Names are lowercased to match parsed HTML.
    #[must_use]
    pub fn with_skip_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.skip_tags
            .extend(tags.into_iter().map(|t| t.into().to_ascii_lowercase()));
        self
    }

    /// Check that every option is usable.
    pub fn validate(&self) -> Result<()> {
        validate_placeholder_url(&self.placeholder_image)?;
        validate_max_depth(self.max_depth)
    }
}
