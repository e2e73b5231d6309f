//! Expense display formatting
//!
//! Expense lists are rendered as tables with `tabled`.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, Money, DEFAULT_CATEGORIES};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of expenses as a table with a total line
pub fn format_expense_table(expenses: &[ExpenseRecord], symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            id: e.id.value(),
            date: e.date.format(date_format).to_string(),
            category: e.category.clone(),
            amount: e.amount.format_with_symbol(symbol),
        })
        .collect();

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total {}\n",
        expenses.len(),
        total.format_with_symbol(symbol)
    ));
    output
}

/// Format expense details for display
pub fn format_expense_details(expense: &ExpenseRecord, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:  #{}\n", expense.id));
    output.push_str(&format!("Date:     {}\n", expense.date.format(date_format)));
    output.push_str(&format!("Category: {}\n", expense.category));
    output.push_str(&format!("Amount:   {}\n", expense.amount.format_with_symbol(symbol)));
    output
}

/// The categories offered when adding an expense
pub fn format_category_list() -> String {
    let mut output = String::from("Categories:\n");
    for category in DEFAULT_CATEGORIES {
        if category == crate::models::OTHER_CATEGORY {
            output.push_str(&format!("  {} (use --other NAME)\n", category));
        } else {
            output.push_str(&format!("  {}\n", category));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::NaiveDate;

    fn expense(id: i64, cents: i64, category: &str, day: u32) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId::new(id),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        }
    }

    #[test]
    fn test_expense_table() {
        let expenses = vec![expense(1, 120000, "Rent", 1), expense(2, 4599, "Groceries", 9)];
        let table = format_expense_table(&expenses, "$", "%Y-%m-%d");

        assert!(table.contains("ID"));
        assert!(table.contains("Category"));
        assert!(table.contains("2025-03-09"));
        assert!(table.contains("$1200.00"));
        assert!(table.contains("$45.99"));
        assert!(table.contains("2 expense(s), total $1245.99"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$", "%Y-%m-%d"), "No expenses found.\n");
    }

    #[test]
    fn test_details() {
        let details = format_expense_details(&expense(7, 1250, "Dining Out", 14), "€", "%d/%m/%Y");
        assert!(details.contains("#7"));
        assert!(details.contains("€12.50"));
        assert!(details.contains("Date:     14/03/2025"));
    }

    #[test]
    fn test_category_list() {
        let list = format_category_list();
        assert!(list.contains("Rent"));
        assert!(list.contains("Other (use --other NAME)"));
    }
}
