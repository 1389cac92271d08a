//! Reporting period for the grouped feed.

use serde::{Deserialize, Serialize};

/// The reporting window used to scope grouped-feed queries and aggregate
/// reports. Wire values are `"1d"`, `"7d"`, `"30d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[default]
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::OneDay, Period::SevenDays, Period::ThirtyDays];

    /// The wire/query-parameter form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
        }
    }

    /// Display label used by report headings.
    pub fn label(&self) -> &'static str {
        match self {
            Period::OneDay => "Daily",
            Period::SevenDays => "Weekly",
            Period::ThirtyDays => "Monthly",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = crate::error::ClearfeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Period::OneDay),
            "7d" => Ok(Period::SevenDays),
            "30d" => Ok(Period::ThirtyDays),
            other => Err(crate::error::ClearfeedError::config(format!(
                "unknown period '{other}'"
            ))),
        }
    }
}
