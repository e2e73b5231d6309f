use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use fintrack::cli::{
    handle_audit_command, handle_budget_command, handle_expense_command, handle_export_command,
    handle_income_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Expense tracker and budget allocator",
    long_about = "fintrack records your income and categorized expenses, estimates \
                  tax, and splits what is left into an emergency fund, retirement, \
                  stock investment and net savings for a month or a year."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income management commands
    #[command(subcommand)]
    Income(fintrack::cli::IncomeCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(fintrack::cli::ExpenseCommands),

    /// Budget allocation and charts
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Export data
    #[command(subcommand)]
    Export(fintrack::cli::ExportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and database
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    log::debug!("Using data directory {}", paths.base_dir().display());

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &mut settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Database: {}", paths.database_file().display());
            println!("Initialization complete!");
            println!();
            println!("Next, set your income with 'fintrack income set <amount>'.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  View mode:       {}", settings.view_mode);
            match settings.last_selection() {
                Some(selection) => println!("  Last selection:  {}", selection.friendly()),
                None => println!("  Last selection:  (none)"),
            }
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("fintrack - expense tracker and budget allocator");
            println!();
            println!("Run 'fintrack --help' for usage information.");
        }
    }

    Ok(())
}
