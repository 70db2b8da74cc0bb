//! HTML renderers. Each takes a prepared view and returns a complete document.

mod html;
pub mod landing;
pub mod listings;
pub mod sign_in;
pub mod team;

pub use html::{escape_html, render_document, PageHead, SITE_NAME};
