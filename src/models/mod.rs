//! Core data models for fintrack
//!
//! Income, expenses, period selections and the allocation result, plus the
//! decimal money type they all share.

pub mod allocation;
pub mod expense;
pub mod income;
pub mod money;
pub mod period;

pub use allocation::{AdvisoryFlags, AllocationResult, PerformanceNote};
pub use expense::{
    resolve_category, ExpenseId, ExpenseRecord, ExpenseValidationError, NewExpense,
    DEFAULT_CATEGORIES, OTHER_CATEGORY,
};
pub use income::{IncomeFrequency, IncomeProfile, IncomeValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{parse_month, PeriodKind, PeriodParseError, Selection, MONTH_NAMES};
