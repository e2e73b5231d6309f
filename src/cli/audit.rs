//! Audit CLI command
//!
//! Prints the most recent entries of the audit log.

use crate::error::FintrackResult;
use crate::storage::Storage;

/// Print the last `limit` audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> FintrackResult<()> {
    let entries = storage.audit().recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry);
    }

    Ok(())
}
