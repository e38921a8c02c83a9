//! Element handlers for HTML content and layout.

mod content;
mod layout;

pub use content::*;
pub use layout::*;
