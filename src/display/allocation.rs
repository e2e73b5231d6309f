//! Budget summary formatting
//!
//! Renders an allocation result, its advisory warnings and the yearly
//! performance note.

use super::report::{double_separator, format_header, labeled_line, separator};
use crate::models::{AdvisoryFlags, Money, PeriodKind};
use crate::services::BudgetSummary;

const WIDTH: usize = 44;

pub const NEAR_LIMIT_WARNING: &str = "Warning: expenses are within $1,000 of after-tax income.";
pub const OVER_BUDGET_WARNING: &str = "Warning: no savings left for this period (over budget).";

/// Format the full budget summary for terminal display
pub fn format_budget_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let result = &summary.result;
    let money = |m: Money| m.format_with_symbol(symbol);

    let mut output = String::new();
    output.push_str(&format_header(
        &format!("Budget Summary: {}", summary.selection.friendly()),
        WIDTH,
    ));
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    let income_label = match result.period_kind {
        PeriodKind::Monthly => "Gross income",
        PeriodKind::Yearly => "Gross income (12 months)",
    };
    output.push_str(&labeled_line(
        income_label,
        &money(result.gross_income_for_period),
        WIDTH,
    ));
    output.push_str(&labeled_line("Estimated tax", &money(result.tax), WIDTH));
    output.push_str(&labeled_line(
        "After-tax income",
        &money(result.after_tax_income),
        WIDTH,
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    output.push_str(&labeled_line(
        "Living expenses",
        &money(result.living_expenses),
        WIDTH,
    ));
    output.push_str(&labeled_line(
        "Emergency fund",
        &money(result.emergency_savings),
        WIDTH,
    ));
    output.push_str(&labeled_line(
        "Retirement",
        &money(result.retirement_savings),
        WIDTH,
    ));
    output.push_str(&labeled_line(
        "Stock investment",
        &money(result.stock_investment),
        WIDTH,
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&labeled_line("Net savings", &money(result.net_savings), WIDTH));

    let warnings = format_warnings(&summary.flags);
    if !warnings.is_empty() {
        output.push('\n');
        output.push_str(&warnings);
    }

    if let Some(note) = result.performance_note {
        output.push('\n');
        output.push_str(&note.to_string());
        output.push('\n');
    }

    output
}

/// One line per raised advisory flag
pub fn format_warnings(flags: &AdvisoryFlags) -> String {
    let mut output = String::new();
    if flags.near_budget_limit {
        output.push_str(NEAR_LIMIT_WARNING);
        output.push('\n');
    }
    if flags.over_budget {
        output.push_str(OVER_BUDGET_WARNING);
        output.push('\n');
    }
    output
}
