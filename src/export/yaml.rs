//! YAML Export functionality
//!
//! Exports the complete database to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::export::json::FullExport;
use crate::storage::FinanceRepository;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(
    repo: &dyn FinanceRepository,
    writer: &mut W,
) -> FintrackResult<()> {
    let export = FullExport::from_repository(repo)?;

    let header = format!(
        "# fintrack Full Database Export\n\
         # Generated: {}\n\
         # App Version: {}\n\
         #\n\
         # Income profile and every recorded expense.\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
