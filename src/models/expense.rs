//! Expense records
//!
//! An expense is an amount spent in a category on a date. Ids are assigned
//! by storage when the record is inserted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Categories offered when adding an expense. `Other` takes a custom name.
pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Rent",
    "Utilities",
    "Groceries",
    "Transportation",
    "Insurance",
    "Healthcare",
    "Dining Out",
    "Entertainment",
    "Shopping",
    "Other",
];

/// Placeholder category that must be replaced by a custom name
pub const OTHER_CATEGORY: &str = "Other";

/// Storage-assigned expense identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    CategoryTooLong(usize),
    MissingOtherName,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::CategoryTooLong(max) => {
                write!(f, "Category cannot be longer than {} characters", max)
            }
            Self::MissingOtherName => {
                write!(f, "Category 'Other' needs a custom name (use --other)")
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Longest category name accepted
pub const MAX_CATEGORY_LEN: usize = 50;

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

/// An expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Create a new expense, trimming the category name
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into().trim().to_string(),
            date,
        }
    }

    /// Validate the expense before it is stored
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_category(&self.category)
    }

    /// Attach the id assigned by storage
    pub fn with_id(self, id: ExpenseId) -> ExpenseRecord {
        ExpenseRecord {
            id,
            amount: self.amount,
            category: self.category,
            date: self.date,
        }
    }
}

/// Pick the stored category name: `Other` is replaced by the custom name
pub fn resolve_category(category: &str, other: Option<&str>) -> Result<String, ExpenseValidationError> {
    let category = category.trim();
    let resolved = if category.eq_ignore_ascii_case(OTHER_CATEGORY) {
        other
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ExpenseValidationError::MissingOtherName)?
    } else {
        category
    };

    validate_category(resolved)?;
    Ok(resolved.to_string())
}

fn validate_category(category: &str) -> Result<(), ExpenseValidationError> {
    if category.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyCategory);
    }
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ExpenseValidationError::CategoryTooLong(MAX_CATEGORY_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_new_expense_trims_category() {
        let expense = NewExpense::new(Money::from_units(40), "  Groceries ", date());
        assert_eq!(expense.category, "Groceries");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_empty_category_rejected() {
        let expense = NewExpense::new(Money::from_units(40), "   ", date());
        assert_eq!(expense.validate(), Err(ExpenseValidationError::EmptyCategory));
    }

    #[test]
    fn test_long_category_rejected() {
        let name = "x".repeat(MAX_CATEGORY_LEN + 1);
        let expense = NewExpense::new(Money::from_units(40), name, date());
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::CategoryTooLong(_))
        ));
    }

    #[test]
    fn test_resolve_other_category() {
        assert_eq!(resolve_category("Rent", None).unwrap(), "Rent");
        assert_eq!(resolve_category("other", Some(" Pets ")).unwrap(), "Pets");
        assert_eq!(
            resolve_category("Other", None),
            Err(ExpenseValidationError::MissingOtherName)
        );
        assert_eq!(
            resolve_category("Other", Some("  ")),
            Err(ExpenseValidationError::MissingOtherName)
        );
    }

    #[test]
    fn test_with_id() {
        let record = NewExpense::new(Money::from_units(10), "Rent", date()).with_id(ExpenseId::new(7));
        assert_eq!(record.id.value(), 7);
        assert_eq!(record.category, "Rent");
    }
}
