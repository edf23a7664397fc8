//! Currency report prompt definitions

use crate::{Result, Template};
use report_core::ReportRequest;
use serde_json::json;

/// Section headings of the report outline, in order.
///
/// Closed table: the prompt and the tests that assert on generated output
/// both read from here.
pub const SECTION_HEADINGS: [&str; 7] = [
    "EXECUTIVE SUMMARY",
    "MARKET ANALYSIS",
    "FUNDAMENTAL FACTORS",
    "TECHNICAL ANALYSIS",
    "MARKET SENTIMENT",
    "FUTURE OUTLOOK",
    "RISK FACTORS",
];

/// System-role persona sent with every completion request.
pub fn analyst_persona() -> &'static str {
    "You are a professional financial analyst specializing in currency markets."
}

/// The user-prompt template: a fixed 7-section outline with the currency
/// pair and analysis period interpolated verbatim.
pub fn report_outline() -> Template {
    Template::new(
        "currency.report_outline",
        r"You are a professional financial analyst. Generate a comprehensive currency analysis report for {{ currency }} covering the period from {{ start_date }} to {{ end_date }}.

Please include the following sections in your report:

1. EXECUTIVE SUMMARY
- Brief overview of the currency pair's performance during this period
- Key highlights and major trends

2. MARKET ANALYSIS
- Price movements and volatility analysis
- Major support and resistance levels
- Trading volume patterns (if applicable)

3. FUNDAMENTAL FACTORS
- Economic indicators that influenced the currency pair
- Central bank policies and interest rate changes
- Political and economic events that impacted the currencies

4. TECHNICAL ANALYSIS
- Trend analysis (bullish, bearish, or sideways)
- Key technical indicators and patterns
- Chart patterns observed during the period

5. MARKET SENTIMENT
- Overall market sentiment towards both currencies
- Risk appetite and safe-haven flows
- Institutional vs retail positioning

6. FUTURE OUTLOOK
- Short-term price projections
- Key levels to watch
- Potential catalysts for future movements

7. RISK FACTORS
- Potential risks and challenges
- Scenarios that could impact the currency pair

Please provide specific data points, percentages, and actionable insights where possible.
Make the report professional, informative, and suitable for both beginner and advanced traders.

Currency Pair: {{ currency }}
Analysis Period: {{ start_date }} to {{ end_date }}",
    )
}

/// Build the full user prompt for a validated request.
///
/// Deterministic and side-effect free: identical requests always produce
/// identical prompt strings.
pub fn build_report_prompt(request: &ReportRequest) -> Result<String> {
    report_outline().render(&json!({
        "currency": request.currency.code(),
        "start_date": request.start_date.format(report_core::request::DATE_FORMAT).to_string(),
        "end_date": request.end_date.format(report_core::request::DATE_FORMAT).to_string(),
    }))
}
