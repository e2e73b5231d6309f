//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses, budget summaries and the
//! category chart for terminal display.

pub mod allocation;
pub mod chart;
pub mod expense;
pub mod report;

pub use allocation::{format_budget_summary, format_warnings};
pub use chart::format_category_chart;
pub use expense::{format_category_list, format_expense_details, format_expense_table};
