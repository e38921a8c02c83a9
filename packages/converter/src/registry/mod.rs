//! Element registry system for extensible HTML classification.
//!
//! Handlers are registered per tag name. The engine dispatches every element
//! through the registry and flattens elements nobody claims, so new tags can
//! be supported without touching the walk itself.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

pub use config::{create_content_registry, create_registry};
pub use core::ElementRegistry;
pub use engine::ConvertEngine;
pub use handler::{classify_all, ElementHandler, RecurseFn};
pub use types::{ConversionReport, ConvertContext, ElementType};
