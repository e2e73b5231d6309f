//! Spending Report
//!
//! Sums expenses per category for a month or a year. This is the data
//! behind the expenses-by-category chart.

use std::collections::BTreeMap;
use std::io::Write;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseRecord, Money, Selection};
use crate::storage::FinanceRepository;

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of total spending, 0-100
    pub percentage: f64,
}

/// Category -> total breakdown for a selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub selection: Selection,
    /// Largest total first; ties broken by category name
    pub rows: Vec<CategorySpending>,
    pub total: Money,
    pub expense_count: usize,
}

impl CategoryBreakdown {
    /// Load the selection's expenses from the repository and group them
    pub fn generate(repo: &dyn FinanceRepository, selection: Selection) -> FintrackResult<Self> {
        let expenses = repo.expenses_for(&selection)?;
        Ok(Self::from_expenses(selection, &expenses))
    }

    /// Group already-loaded expenses by category
    pub fn from_expenses(selection: Selection, expenses: &[ExpenseRecord]) -> Self {
        let mut by_category: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        for expense in expenses {
            let entry = by_category
                .entry(expense.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total: Money = expenses.iter().map(|e| e.amount).sum();

        let mut rows: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, (amount, count))| CategorySpending {
                category: category.to_string(),
                total: amount,
                count,
                percentage: percentage_of(amount, total),
            })
            .collect();

        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Self {
            selection,
            rows,
            total,
            expense_count: expenses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest category total, used to scale chart bars
    pub fn max_total(&self) -> Money {
        self.rows
            .iter()
            .map(|r| r.total)
            .max()
            .unwrap_or_default()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending by Category: {}\n", self.selection.friendly()));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>7} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<30} {:>12} {:>7} {:>6.1}%\n",
                row.category,
                row.total.to_string(),
                row.count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>7}\n",
            "TOTAL",
            self.total.to_string(),
            self.expense_count
        ));

        output
    }

    /// Export the breakdown as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> FintrackResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Period", "Category", "Amount", "Count", "Percentage"])
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        for row in &self.rows {
            csv_writer
                .write_record([
                    self.selection.to_string(),
                    row.category.clone(),
                    format!("{:.2}", row.total.round_cents().amount()),
                    row.count.to_string(),
                    format!("{:.2}", row.percentage),
                ])
                .map_err(|e| FintrackError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        Ok(())
    }
}

fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    part.amount()
        .checked_div(total.amount())
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.to_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn expense(id: i64, amount: i64, category: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            amount: Money::from_units(amount),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        }
    }

    fn march() -> Selection {
        Selection::monthly(2025, 3).unwrap()
    }

    #[test]
    fn test_groups_and_sums_by_category() {
        let expenses = vec![
            expense(1, 100, "Groceries"),
            expense(2, 1200, "Rent"),
            expense(3, 50, "Groceries"),
        ];
        let report = CategoryBreakdown::from_expenses(march(), &expenses);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, "Rent");
        assert_eq!(report.rows[1].category, "Groceries");
        assert_eq!(report.rows[1].total, Money::from_units(150));
        assert_eq!(report.rows[1].count, 2);
        assert_eq!(report.total, Money::from_units(1350));
        assert_eq!(report.max_total(), Money::from_units(1200));
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let expenses = vec![expense(1, 10, "Water"), expense(2, 10, "Gas")];
        let report = CategoryBreakdown::from_expenses(march(), &expenses);
        assert_eq!(report.rows[0].category, "Gas");
    }

    #[test]
    fn test_percentages() {
        let expenses = vec![expense(1, 75, "Rent"), expense(2, 25, "Food")];
        let report = CategoryBreakdown::from_expenses(march(), &expenses);
        assert!((report.rows[0].percentage - 75.0).abs() < 1e-9);
        assert!((report.rows[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_largest_amounts_and_offsetting_refunds() {
        let max = Money::parse("1000000000000000").unwrap();
        let refund = Money::parse("-999999999999999.99").unwrap();
        let expenses = vec![
            ExpenseRecord {
                amount: max,
                ..expense(1, 0, "Rent")
            },
            ExpenseRecord {
                amount: refund,
                ..expense(2, 0, "Refunds")
            },
        ];
        let report = CategoryBreakdown::from_expenses(march(), &expenses);

        assert_eq!(report.total, Money::from_cents(1));
        assert!(report.rows[0].percentage > 1e18);
    }

    #[test]
    fn test_empty() {
        let report = CategoryBreakdown::from_expenses(march(), &[]);
        assert!(report.is_empty());
        assert!(report.total.is_zero());
        assert!(report.max_total().is_zero());
        assert!(report.format_terminal().contains("TOTAL"));
    }

    #[test]
    fn test_export_csv() {
        let expenses = vec![expense(1, 40, "Dining, Out")];
        let report = CategoryBreakdown::from_expenses(march(), &expenses);

        let mut buffer = Vec::new();
        report.export_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("Period,Category,Amount,Count,Percentage"));
        assert!(text.contains("2025-03,\"Dining, Out\",40.00,1,100.00"));
    }
}
