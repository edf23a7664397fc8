//! Supported currency pairs

use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency pair the service can report on.
///
/// The set is deliberately closed: the HTML form, the validator, the prompt
/// builder, and the PDF header all draw from the same eight codes, and
/// validation stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar / Indian rupee
    UsdInr,
    /// Euro / US dollar
    EurUsd,
    /// US dollar / Japanese yen
    UsdJpy,
    /// US dollar / Australian dollar
    UsdAud,
    /// US dollar / Philippine peso
    UsdPhp,
    /// US dollar / South African rand
    UsdZar,
    /// US dollar / Mexican peso
    UsdMxn,
    /// US dollar / Brazilian real
    UsdBrl,
}

impl Currency {
    /// All supported pairs, in form-display order.
    pub const ALL: [Currency; 8] = [
        Currency::UsdInr,
        Currency::EurUsd,
        Currency::UsdJpy,
        Currency::UsdAud,
        Currency::UsdPhp,
        Currency::UsdZar,
        Currency::UsdMxn,
        Currency::UsdBrl,
    ];

    /// The wire code for this pair (e.g. `USDINR`).
    pub fn code(self) -> &'static str {
        match self {
            Currency::UsdInr => "USDINR",
            Currency::EurUsd => "EURUSD",
            Currency::UsdJpy => "USDJPY",
            Currency::UsdAud => "USDAUD",
            Currency::UsdPhp => "USDPHP",
            Currency::UsdZar => "USDZAR",
            Currency::UsdMxn => "USDMXN",
            Currency::UsdBrl => "USDBRL",
        }
    }

    /// Parse a wire code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Currency::ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for currency in Currency::ALL {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Currency::from_code("USDINR"), Some(Currency::UsdInr));
        assert_eq!(Currency::from_code("usdinr"), None);
        assert_eq!(Currency::from_code("UsdInr"), None);
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Currency::from_code("GBPUSD"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_serialization_uses_wire_code() {
        let json = serde_json::to_string(&Currency::UsdJpy).unwrap();
        assert_eq!(json, "\"USDJPY\"");

        let parsed: Currency = serde_json::from_str("\"EURUSD\"").unwrap();
        assert_eq!(parsed, Currency::EurUsd);
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::UsdBrl.to_string(), "USDBRL");
    }
}
