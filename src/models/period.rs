//! Period selection
//!
//! A calculation is scoped either to a single month or to a whole year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Whether a calculation covers one month or one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    #[default]
    Monthly,
    Yearly,
}

impl PeriodKind {
    /// Number of months covered by one period of this kind
    pub fn months(&self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Yearly => 12,
        }
    }
}

impl fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A concrete month or year to calculate for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    /// A single calendar month (e.g., "2025-01")
    Monthly { year: i32, month: u32 },

    /// A whole calendar year (e.g., "2025")
    Yearly { year: i32 },
}

impl Selection {
    /// Create a monthly selection, validating the month
    pub fn monthly(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month.to_string()));
        }
        validate_year(year)?;
        Ok(Self::Monthly { year, month })
    }

    /// Create a yearly selection
    pub fn yearly(year: i32) -> Result<Self, PeriodParseError> {
        validate_year(year)?;
        Ok(Self::Yearly { year })
    }

    /// Build a selection of the given kind from a year and optional month
    ///
    /// A monthly selection requires a month; a yearly selection ignores it.
    pub fn of_kind(kind: PeriodKind, year: i32, month: Option<u32>) -> Result<Self, PeriodParseError> {
        match kind {
            PeriodKind::Monthly => {
                let month = month.ok_or(PeriodParseError::MissingMonth)?;
                Self::monthly(year, month)
            }
            PeriodKind::Yearly => Self::yearly(year),
        }
    }

    pub fn kind(&self) -> PeriodKind {
        match self {
            Self::Monthly { .. } => PeriodKind::Monthly,
            Self::Yearly { .. } => PeriodKind::Yearly,
        }
    }

    pub fn year(&self) -> i32 {
        match self {
            Self::Monthly { year, .. } | Self::Yearly { year } => *year,
        }
    }

    /// The month, for monthly selections
    pub fn month(&self) -> Option<u32> {
        match self {
            Self::Monthly { month, .. } => Some(*month),
            Self::Yearly { .. } => None,
        }
    }

    /// First day covered by this selection
    pub fn start_date(&self) -> NaiveDate {
        let month = self.month().unwrap_or(1);
        NaiveDate::from_ymd_opt(self.year(), month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day covered by this selection (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_start = match self {
            Self::Monthly { year, month: 12 } => NaiveDate::from_ymd_opt(*year + 1, 1, 1),
            Self::Monthly { year, month } => NaiveDate::from_ymd_opt(*year, *month + 1, 1),
            Self::Yearly { year } => NaiveDate::from_ymd_opt(*year + 1, 1, 1),
        };
        next_start
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Human-friendly label ("March 2025", "Year 2025")
    pub fn friendly(&self) -> String {
        match self {
            Self::Monthly { year, month } => {
                let name = MONTH_NAMES
                    .get((*month as usize).wrapping_sub(1))
                    .copied()
                    .unwrap_or("Unknown");
                format!("{} {}", name, year)
            }
            Self::Yearly { year } => format!("Year {}", year),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Yearly { year } => write!(f, "{:04}", year),
        }
    }
}

/// Parse a month given as a number ("3", "03") or an English name ("March", "mar")
pub fn parse_month(s: &str) -> Result<u32, PeriodParseError> {
    let s = s.trim();

    if let Ok(n) = s.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(PeriodParseError::InvalidMonth(s.to_string()));
    }

    let lower = s.to_lowercase();
    if lower.len() >= 3 {
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            if name.to_lowercase().starts_with(&lower) {
                return Ok(i as u32 + 1);
            }
        }
    }

    Err(PeriodParseError::InvalidMonth(s.to_string()))
}

fn validate_year(year: i32) -> Result<(), PeriodParseError> {
    if (1..=9999).contains(&year) {
        Ok(())
    } else {
        Err(PeriodParseError::InvalidYear(year.to_string()))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidMonth(String),
    InvalidYear(String),
    MissingMonth,
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(s) => write!(f, "Invalid month: '{}'", s),
            Self::InvalidYear(s) => write!(f, "Invalid year: '{}'", s),
            Self::MissingMonth => write!(f, "A month is required for a monthly view"),
        }
    }
}

impl std::error::Error for PeriodParseError {}
