//! Domain model and request validation for currency-report-rs
//!
//! This crate provides the types shared by every other crate in the
//! workspace:
//!
//! - The closed set of supported currency pairs
//! - Validation of raw, untrusted report requests
//! - The report result produced by a completion call
//! - The client-input error taxonomy

pub mod currency;
pub mod error;
pub mod request;
pub mod result;

// Re-export main types
pub use currency::Currency;
pub use error::{Result, ValidationError};
pub use request::{RawReportRequest, ReportRequest};
pub use result::ReportResult;
