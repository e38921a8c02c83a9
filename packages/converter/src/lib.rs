//! Elementor Converter - Convert HTML pages into Elementor JSON templates.
//!
//! This crate parses arbitrary HTML, normalizes its block structure into
//! the container/widget tree the Elementor page builder imports, and
//! serializes the result as a JSON template.
//!
//! # Example
//!
//! ```
//! use elementor_converter::{convert_html_with, generate_json, ConvertOptions};
//!
//! let options = ConvertOptions::new().with_stable_ids(true);
//! let conversion = convert_html_with("<h1>Welcome</h1><p>Hi</p>", "home", &options);
//! assert_eq!(conversion.report.widgets, 2);
//!
//! let json = generate_json(&conversion.document, true).unwrap();
//! assert!(json.contains("\"widgetType\": \"heading\""));
//! ```
//!
//! # Architecture
//!
//! The converter is organized into several modules:
//!
//! - [`config`]: Constants, conversion options and validation
//! - [`types`]: Output data model (Node, Widget, Document, settings records)
//! - [`error`]: Error types and Result alias
//! - [`dom`]: HTML parsing and node access
//! - [`ids`]: Identifier generation
//! - [`widgets`]: Widget and container builders
//! - [`registry`]: Extensible element handler system and classification engine
//! - [`converter`]: Document assembly
//! - [`output`]: JSON output generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod dom;
pub mod error;
pub mod ids;
pub mod output;
pub mod registry;
pub mod types;
pub mod widgets;

// Re-export main functions
pub use converter::{convert_html, convert_html_with, Conversion};
pub use output::{generate_json, save_json};

// Re-export commonly used items
pub use config::ConvertOptions;
pub use error::{ConverterError, Result};
pub use registry::ConversionReport;
pub use types::{Document, Node, Widget, WidgetKind};
