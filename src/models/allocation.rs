//! Budget allocation results
//!
//! The outcome of splitting a period's after-tax income into living expenses
//! and savings buckets. Never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::period::PeriodKind;

/// Year-end verdict attached to yearly allocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceNote {
    Favorable,
    Unfavorable,
}

impl fmt::Display for PerformanceNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorable => write!(f, "Your financial performance this year is favorable."),
            Self::Unfavorable => write!(f, "Your financial performance this year is unfavorable."),
        }
    }
}

/// Result of the allocation waterfall for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub period_kind: PeriodKind,
    pub gross_income_monthly_equivalent: Money,
    /// Gross income scaled to the period (x12 for yearly)
    pub gross_income_for_period: Money,
    pub tax: Money,
    pub after_tax_income: Money,
    pub total_expenses: Money,
    pub living_expenses: Money,
    pub emergency_savings: Money,
    pub retirement_savings: Money,
    pub stock_investment: Money,
    /// What is left after every bucket; may be zero or negative
    pub net_savings: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_note: Option<PerformanceNote>,
}

impl AllocationResult {
    /// Sum of every bucket, equal to `after_tax_income`
    pub fn allocated_total(&self) -> Money {
        self.living_expenses
            + self.emergency_savings
            + self.retirement_savings
            + self.stock_investment
            + self.net_savings
    }
}

/// Warnings for the caller to display alongside an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AdvisoryFlags {
    /// Expenses are within $1000 of after-tax income
    pub near_budget_limit: bool,
    /// Nothing is left once every bucket is filled
    pub over_budget: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_note_display() {
        assert!(PerformanceNote::Favorable.to_string().contains("favorable"));
        assert!(PerformanceNote::Unfavorable.to_string().contains("unfavorable"));
    }
}
