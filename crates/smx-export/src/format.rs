use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Column schema of the exported CSV.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvFormat {
    /// `Layer, RewardAmount, Date`.
    #[default]
    Generic,
    /// The eleven-column TokenTax transaction import layout.
    TokenTax,
}

impl CsvFormat {
    pub const ALL: [CsvFormat; 2] = [CsvFormat::Generic, CsvFormat::TokenTax];

    /// Header row for this schema.
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Self::Generic => &["Layer", "RewardAmount", "Date"],
            Self::TokenTax => &[
                "Type",
                "BuyAmount",
                "BuyCurrency",
                "SellAmount",
                "SellCurrency",
                "FeeAmount",
                "FeeCurrency",
                "Exchange",
                "Group",
                "Comment",
                "Date",
            ],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::TokenTax => "tokentax",
        }
    }
}

impl fmt::Display for CsvFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CsvFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExportError::UnknownFormat(s.to_string()))
    }
}
