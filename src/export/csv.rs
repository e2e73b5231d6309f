//! CSV Export functionality
//!
//! Exports expenses, and optionally the income profile, to CSV.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseRecord, Money};
use crate::storage::FinanceRepository;

fn export_err(e: csv::Error) -> FintrackError {
    FintrackError::Export(e.to_string())
}

fn amount_field(amount: Money) -> String {
    format!("{:.2}", amount.round_cents().amount())
}

fn write_expenses<W: Write>(
    writer: &mut csv::Writer<W>,
    expenses: &[ExpenseRecord],
) -> FintrackResult<()> {
    for expense in expenses {
        writer
            .write_record([
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                amount_field(expense.amount),
            ])
            .map_err(export_err)?;
    }
    Ok(())
}

/// Export all expenses to CSV
pub fn export_expenses_csv<W: Write>(
    repo: &dyn FinanceRepository,
    writer: &mut W,
) -> FintrackResult<()> {
    let expenses = repo.list_all_expenses()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["ID", "Date", "Category", "Amount"])
        .map_err(export_err)?;
    write_expenses(&mut csv_writer, &expenses)?;
    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}

/// Export the income profile followed by every expense
///
/// Rows are tagged in the first column (`income` or `expense`) so both
/// record kinds fit in one file.
pub fn export_full_csv<W: Write>(repo: &dyn FinanceRepository, writer: &mut W) -> FintrackResult<()> {
    let income = repo.income_profile()?;
    let expenses = repo.list_all_expenses()?;

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["Record", "ID", "Date", "Category", "Amount", "Frequency"])
        .map_err(export_err)?;

    if let Some(income) = income {
        csv_writer
            .write_record([
                "income".to_string(),
                String::new(),
                income.updated_at.format("%Y-%m-%d").to_string(),
                String::new(),
                amount_field(income.amount),
                income.frequency.to_string(),
            ])
            .map_err(export_err)?;
    }

    for expense in &expenses {
        csv_writer
            .write_record([
                "expense".to_string(),
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.category.clone(),
                amount_field(expense.amount),
                String::new(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
