//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod export;
pub mod income;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use income::{handle_income_command, IncomeCommands};

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, PeriodKind, Selection};
use crate::services::PeriodService;

/// View mode argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Monthly,
    Yearly,
}

impl From<ViewArg> for PeriodKind {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Monthly => PeriodKind::Monthly,
            ViewArg::Yearly => PeriodKind::Yearly,
        }
    }
}

/// Month/year selection shared by reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Monthly or yearly view (defaults to the last one used)
    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Year (defaults to the last one used, then the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Month as a number or name, e.g. "3" or "March"
    #[arg(short, long)]
    pub month: Option<String>,
}

impl SelectionArgs {
    /// Resolve against settings, falling back to today
    pub fn resolve(&self, settings: &Settings) -> FintrackResult<Selection> {
        PeriodService::new(settings).resolve(
            self.view.map(PeriodKind::from),
            self.year,
            self.month.as_deref(),
        )
    }
}

/// Parse a user-supplied amount
pub(crate) fn parse_amount(amount: &str) -> FintrackResult<Money> {
    Money::parse(amount).map_err(|e| FintrackError::InvalidInput(format!("Invalid amount: {}", e)))
}

/// Store the selection as the last one used
pub(crate) fn remember_selection(
    settings: &mut Settings,
    selection: &Selection,
    storage: &crate::storage::Storage,
) -> FintrackResult<()> {
    settings.remember(selection);
    settings.save(storage.paths())
}
