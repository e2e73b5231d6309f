//! Expense CLI commands
//!
//! Implements CLI commands for recording and managing expenses.

use clap::Subcommand;

use super::{parse_amount, remember_selection, SelectionArgs};
use crate::config::settings::Settings;
use crate::display::{format_category_list, format_expense_details, format_expense_table};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{resolve_category, ExpenseId, NewExpense};
use crate::services::{ExpenseService, PeriodService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "42.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category (see 'fintrack expense categories'); "Other" needs --other
        category: String,

        /// Custom category name when the category is "Other"
        #[arg(long)]
        other: Option<String>,

        /// Expense date (YYYY-MM-DD)
        #[arg(short, long, conflicts_with_all = ["month", "year"])]
        date: Option<String>,

        /// Month as a number or name; the expense is dated the 1st
        #[arg(short, long)]
        month: Option<String>,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List expenses for a month or year
    List {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: i64,
    },

    /// Change the amount of an expense
    Edit {
        /// Expense ID
        id: i64,

        /// New amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: i64,
    },

    /// List the default categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: ExpenseCommands,
) -> FintrackResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.clone();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            other,
            date,
            month,
            year,
        } => {
            let amount = parse_amount(&amount)?;
            let category = resolve_category(&category, other.as_deref())
                .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;
            let date = PeriodService::new(settings).expense_date(
                date.as_deref(),
                year,
                month.as_deref(),
            )?;

            let record = service.add(NewExpense::new(amount, category, date))?;

            println!(
                "Added expense #{} of {} to category '{}' on {}",
                record.id,
                record.amount.format_with_symbol(&symbol),
                record.category,
                record.date.format(&settings.date_format)
            );
        }

        ExpenseCommands::List { selection } => {
            let selection = selection.resolve(settings)?;
            let expenses = service.list(&selection)?;

            println!("Expenses for {}", selection.friendly());
            print!(
                "{}",
                format_expense_table(&expenses, &symbol, &settings.date_format)
            );

            remember_selection(settings, &selection, storage)?;
        }

        ExpenseCommands::Show { id } => {
            let id = ExpenseId::new(id);
            let expense = service
                .get(id)?
                .ok_or_else(|| FintrackError::expense_not_found(id))?;
            print!(
                "{}",
                format_expense_details(&expense, &symbol, &settings.date_format)
            );
        }

        ExpenseCommands::Edit { id, amount } => {
            let id = ExpenseId::new(id);
            let amount = parse_amount(&amount)?;
            let (before, after) = service.update_amount(id, amount)?;

            println!(
                "Updated expense #{}: {} -> {}",
                after.id,
                before.amount.format_with_symbol(&symbol),
                after.amount.format_with_symbol(&symbol)
            );
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(ExpenseId::new(id))?;
            println!(
                "Deleted expense #{} ({} in {})",
                removed.id,
                removed.amount.format_with_symbol(&symbol),
                removed.category
            );
        }

        ExpenseCommands::Categories => {
            print!("{}", format_category_list());
        }
    }

    Ok(())
}
