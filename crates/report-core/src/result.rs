//! Report result produced by a completion call

use crate::{Currency, ReportRequest};
use chrono::NaiveDate;
use serde::Serialize;

/// The analytical text generated for a validated request.
///
/// Lifetime is a single request: the result is either serialized into the
/// JSON response or handed to the PDF renderer, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    /// Currency pair the report covers
    pub currency: Currency,
    /// First day of the analysis period
    pub start_date: NaiveDate,
    /// Last day of the analysis period
    pub end_date: NaiveDate,
    /// Generated report text
    pub body: String,
}

impl ReportResult {
    /// Pair a validated request with the completion text it produced.
    pub fn new(request: &ReportRequest, body: String) -> Self {
        Self {
            currency: request.currency,
            start_date: request.start_date,
            end_date: request.end_date,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawReportRequest;

    #[test]
    fn test_result_carries_request_fields() {
        let request = ReportRequest::validate(RawReportRequest {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-02-01".to_string()),
            currency: Some("EURUSD".to_string()),
        })
        .unwrap();

        let result = ReportResult::new(&request, "analysis".to_string());
        assert_eq!(result.currency, Currency::EurUsd);
        assert_eq!(result.start_date, request.start_date);
        assert_eq!(result.end_date, request.end_date);
        assert_eq!(result.body, "analysis");
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let request = ReportRequest::validate(RawReportRequest {
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-02-01".to_string()),
            currency: Some("USDJPY".to_string()),
        })
        .unwrap();

        let json = serde_json::to_value(ReportResult::new(&request, String::new())).unwrap();
        assert_eq!(json["currency"], "USDJPY");
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(json["end_date"], "2024-02-01");
    }
}
