//! Income CLI commands
//!
//! Implements CLI commands for setting and showing the gross income.

use clap::Subcommand;

use super::parse_amount;
use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::IncomeFrequency;
use crate::services::IncomeService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the gross income
    Set {
        /// Gross income amount (e.g., "5000" or "5,000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// How often the amount is received: monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
    },

    /// Show the configured income
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FintrackResult<()> {
    let income_service = IncomeService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Set { amount, frequency } => {
            let amount = parse_amount(&amount)?;
            let frequency: IncomeFrequency =
                frequency.parse().map_err(FintrackError::InvalidInput)?;

            let profile = income_service.set(amount, frequency)?;

            println!(
                "Income set to {} ({})",
                profile.amount.format_with_symbol(symbol),
                profile.frequency
            );
            if profile.frequency == IncomeFrequency::Yearly {
                println!(
                    "Monthly equivalent: {}",
                    profile.monthly_equivalent().format_with_symbol(symbol)
                );
            }
        }

        IncomeCommands::Show => match income_service.get()? {
            Some(profile) => {
                println!("Income");
                println!("{}", "-".repeat(40));
                println!("Amount:             {}", profile.amount.format_with_symbol(symbol));
                println!("Frequency:          {}", profile.frequency);
                println!(
                    "Monthly equivalent: {}",
                    profile.monthly_equivalent().format_with_symbol(symbol)
                );
                println!(
                    "Updated:            {}",
                    profile.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
                );
            }
            None => {
                println!("No income configured.");
                println!("Use 'fintrack income set <amount>' to set it.");
            }
        },
    }

    Ok(())
}
