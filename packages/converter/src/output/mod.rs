//! JSON output generation for page templates.

mod writer;

pub use writer::{generate_json, save_json};
