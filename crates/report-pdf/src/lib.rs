//! Deterministic PDF rendering for currency reports
//!
//! Turns an arbitrary block of generated text into a paginated A4 document:
//!
//! 1. The body is split on line breaks; long lines go through a greedy
//!    80-character word-wrap ([`layout`])
//! 2. Rows are laid onto pages with a fixed header and a `Page N` footer,
//!    breaking to a new page when the content area runs out ([`render`])
//! 3. The resulting bytes are parked in a uniquely named temporary file
//!    whose deletion is guaranteed on every exit path ([`artifact`])

pub mod artifact;
pub mod error;
pub mod layout;
pub mod render;

pub use artifact::{RenderedDocument, attachment_filename};
pub use error::{RenderError, Result};
pub use layout::{WRAP_WIDTH, layout_rows, wrap_line};
pub use render::{DocumentContent, render_report};
