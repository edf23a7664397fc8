//! Report request validation

use crate::{Currency, Result, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, untrusted form input for a report request.
///
/// Fields are optional so that absent and present-but-empty inputs can be
/// classified the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReportRequest {
    /// Raw `start_date` field
    pub start_date: Option<String>,
    /// Raw `end_date` field
    pub end_date: Option<String>,
    /// Raw `currency` field
    pub currency: Option<String>,
}

/// A validated report request.
///
/// Can only be constructed through [`ReportRequest::validate`], so holding
/// one guarantees the currency is supported and `start_date < end_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    /// Currency pair to analyze
    pub currency: Currency,
    /// First day of the analysis period
    pub start_date: NaiveDate,
    /// Last day of the analysis period
    pub end_date: NaiveDate,
}

impl ReportRequest {
    /// Validate raw form input into a `ReportRequest`.
    ///
    /// Checks run in a fixed order: field presence, currency membership,
    /// date format, date ordering. Pure function of its input.
    pub fn validate(raw: RawReportRequest) -> Result<Self> {
        let start = required(raw.start_date, "start_date")?;
        let end = required(raw.end_date, "end_date")?;
        let currency = required(raw.currency, "currency")?;

        let currency =
            Currency::from_code(&currency).ok_or(ValidationError::InvalidCurrency(currency))?;

        let start_date = parse_date(&start)?;
        let end_date = parse_date(&end)?;

        if start_date >= end_date {
            return Err(ValidationError::InvalidDateRange);
        }

        Ok(Self {
            currency,
            start_date,
            end_date,
        })
    }
}

fn required(field: Option<String>, name: &'static str) -> Result<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(name)),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat(value.to_string()))
}
