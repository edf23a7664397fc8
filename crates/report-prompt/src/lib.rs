//! Prompt templates for currency analysis reports
//!
//! The exact structure of the prompt sent to the completion provider is a
//! first-class, testable artifact: the analyst persona, the fixed 7-section
//! outline, and the interpolation of currency and period into it all live
//! here, independent of the HTTP layer.

pub mod error;
pub mod report;
pub mod template;

pub use error::{PromptError, Result};
pub use report::{SECTION_HEADINGS, analyst_persona, build_report_prompt, report_outline};
pub use template::Template;
