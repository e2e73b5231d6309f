//! Income profile model
//!
//! There is at most one income profile. It records how much the user earns
//! and whether that figure is per month or per year.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// How often the configured income amount is received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    #[default]
    Monthly,
    Yearly,
}

impl IncomeFrequency {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl fmt::Display for IncomeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncomeFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            other => Err(format!("Unknown income frequency: '{}'", other)),
        }
    }
}

/// Validation errors for income profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// The user's gross income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub amount: Money,
    pub frequency: IncomeFrequency,
    pub updated_at: DateTime<Utc>,
}

impl IncomeProfile {
    /// Create a new income profile
    pub fn new(amount: Money, frequency: IncomeFrequency) -> Self {
        Self {
            amount,
            frequency,
            updated_at: Utc::now(),
        }
    }

    /// Validate the income profile
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        Ok(())
    }

    /// Gross income per month; yearly figures are divided by twelve
    pub fn monthly_equivalent(&self) -> Money {
        match self.frequency {
            IncomeFrequency::Monthly => self.amount,
            IncomeFrequency::Yearly => Money::new(self.amount.amount() / Decimal::from(12)),
        }
    }
}
