//! JSON Export functionality
//!
//! Exports the complete database to JSON format with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseRecord, IncomeProfile, Money};
use crate::storage::FinanceRepository;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The income profile, if one is configured
    pub income: Option<IncomeProfile>,

    /// All expenses, oldest first
    pub expenses: Vec<ExpenseRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all expense amounts
    pub expense_total: Money,

    /// Date range of expenses (earliest)
    pub earliest_expense: Option<String>,

    /// Date range of expenses (latest)
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from a repository
    pub fn from_repository(repo: &dyn FinanceRepository) -> FintrackResult<Self> {
        let income = repo.income_profile()?;
        let expenses = repo.list_all_expenses()?;

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            expense_total: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: expenses.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: expenses.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            income,
            expenses,
            metadata,
        })
    }
}

/// Export the full database to JSON
pub fn export_full_json<W: Write>(
    repo: &dyn FinanceRepository,
    writer: &mut W,
    pretty: bool,
) -> FintrackResult<()> {
    let export = FullExport::from_repository(repo)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
