//! Budget CLI commands
//!
//! Implements the allocation summary and the expenses-by-category chart.

use std::fs::File;
use std::path::PathBuf;

use clap::Subcommand;

use super::{remember_selection, SelectionArgs};
use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_category_chart};
use crate::error::{FintrackError, FintrackResult};
use crate::reports::CategoryBreakdown;
use crate::services::AllocationService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show the tax estimate and savings allocation for a month or year
    Summary {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show a bar chart of expenses by category
    Chart {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show spending per category with counts and shares
    Breakdown {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Also write the breakdown to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    match cmd {
        BudgetCommands::Summary { selection } => {
            let selection = selection.resolve(settings)?;
            let summary = AllocationService::new(storage.repository()).calculate(selection)?;

            print!(
                "{}",
                format_budget_summary(&summary, &settings.currency_symbol)
            );

            remember_selection(settings, &selection, storage)?;
        }

        BudgetCommands::Chart { selection } => {
            let selection = selection.resolve(settings)?;
            let breakdown = CategoryBreakdown::generate(storage.repository(), selection)?;

            print!(
                "{}",
                format_category_chart(&breakdown, &settings.currency_symbol)
            );

            remember_selection(settings, &selection, storage)?;
        }

        BudgetCommands::Breakdown { selection, csv } => {
            let selection = selection.resolve(settings)?;
            let breakdown = CategoryBreakdown::generate(storage.repository(), selection)?;

            print!("{}", breakdown.format_terminal());

            if let Some(path) = csv {
                let file = File::create(&path).map_err(|e| {
                    FintrackError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                breakdown.export_csv(file)?;
                println!("Breakdown written to: {}", path.display());
            }

            remember_selection(settings, &selection, storage)?;
        }
    }

    Ok(())
}
