//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{FintrackError, FintrackResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (income row plus expenses)
    Csv,
    /// JSON format (full database)
    Json,
    /// YAML format (full database, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FintrackResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => handle_export_all(storage, &output, format, pretty),
        ExportCommands::Expenses { output } => handle_export_expenses(storage, &output),
    }
}

fn create_output(output: &Path) -> FintrackResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        FintrackError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> FintrackResult<()> {
    writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))
}

/// Handle full export
fn handle_export_all(
    storage: &Storage,
    output: &Path,
    format: ExportFormat,
    pretty: bool,
) -> FintrackResult<()> {
    let mut writer = create_output(output)?;
    let repo = storage.repository();

    match format {
        ExportFormat::Csv => csv::export_full_csv(repo, &mut writer)?,
        ExportFormat::Json => json::export_full_json(repo, &mut writer, pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(repo, &mut writer)?,
    }
    finish(writer)?;

    log::info!("Exported database as {:?} to {}", format, output.display());
    println!("Full database exported to: {}", output.display());

    Ok(())
}

/// Handle expenses export
fn handle_export_expenses(storage: &Storage, output: &Path) -> FintrackResult<()> {
    let mut writer = create_output(output)?;
    csv::export_expenses_csv(storage.repository(), &mut writer)?;
    finish(writer)?;

    let count = storage.repository().list_all_expenses()?.len();
    println!("Exported {} expenses to: {}", count, output.display());

    Ok(())
}
