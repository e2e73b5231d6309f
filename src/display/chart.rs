//! Text bar chart of expenses by category

use rust_decimal::prelude::ToPrimitive;

use super::report::{format_bar, separator, truncate};
use crate::models::PeriodKind;
use crate::reports::CategoryBreakdown;

const LABEL_WIDTH: usize = 18;
const BAR_WIDTH: usize = 30;

/// Chart title for the selection's period kind
pub fn chart_title(kind: PeriodKind) -> String {
    format!("{} Expenses by Category", kind)
}

/// Horizontal bar per category, each annotated with its total
pub fn format_category_chart(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{} ({})\n",
        chart_title(breakdown.selection.kind()),
        breakdown.selection.friendly()
    ));
    output.push_str(&separator(LABEL_WIDTH + BAR_WIDTH + 14));
    output.push('\n');

    if breakdown.is_empty() {
        output.push_str("No expenses recorded for this period.\n");
        return output;
    }

    let max = breakdown.max_total().amount().to_f64().unwrap_or(0.0);
    for row in &breakdown.rows {
        let value = row.total.amount().to_f64().unwrap_or(0.0);
        output.push_str(&format!(
            "{:<width$} {} {}\n",
            truncate(&row.category, LABEL_WIDTH),
            format_bar(value, max, BAR_WIDTH),
            row.total.format_with_symbol(symbol),
            width = LABEL_WIDTH
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseRecord, Money, Selection};
    use chrono::NaiveDate;

    fn expense(id: i64, cents: i64, category: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(chart_title(PeriodKind::Monthly), "Monthly Expenses by Category");
        assert_eq!(chart_title(PeriodKind::Yearly), "Yearly Expenses by Category");
    }

    #[test]
    fn test_bars_are_annotated() {
        let selection = Selection::monthly(2025, 7).unwrap();
        let breakdown = CategoryBreakdown::from_expenses(
            selection,
            &[expense(1, 120050, "Rent"), expense(2, 6025, "Groceries")],
        );
        let chart = format_category_chart(&breakdown, "$");

        assert!(chart.starts_with("Monthly Expenses by Category (July 2025)"));
        assert!(chart.contains("$1200.50"));
        assert!(chart.contains("$60.25"));

        let rent_line = chart.lines().find(|l| l.starts_with("Rent")).unwrap();
        assert_eq!(rent_line.chars().filter(|c| *c == '█').count(), BAR_WIDTH);
    }

    #[test]
    fn test_empty_chart() {
        let selection = Selection::yearly(2024).unwrap();
        let breakdown = CategoryBreakdown::from_expenses(selection, &[]);
        let chart = format_category_chart(&breakdown, "$");
        assert!(chart.starts_with("Yearly Expenses by Category"));
        assert!(chart.contains("No expenses recorded"));
    }
}
