//! Schema migrations
//!
//! Migrations are applied in order and recorded in `schema_migrations`, so
//! opening an existing database only runs what it is missing.

use rusqlite::{params, Connection};

use crate::error::{FintrackError, FintrackResult};

struct Migration {
    version: &'static str,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: "001",
    name: "initial",
    sql: include_str!("migrations/001_initial.sql"),
}];

/// Bring the database schema up to date
pub fn run_migrations(conn: &Connection) -> FintrackResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )",
    )
    .map_err(|e| FintrackError::Storage(format!("Failed to create schema_migrations table: {}", e)))?;

    let applied = applied_migrations(conn)?;

    for migration in MIGRATIONS {
        if !applied.iter().any(|v| v == migration.version) {
            apply_migration(conn, migration)?;
        }
    }

    Ok(())
}

fn applied_migrations(conn: &Connection) -> FintrackResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations ORDER BY version")?;
    let versions = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>, _>>()?;
    Ok(versions)
}

/// Apply one migration and record it; both commit or neither does
fn apply_migration(conn: &Connection, migration: &Migration) -> FintrackResult<()> {
    log::debug!("Applying migration {}: {}", migration.version, migration.name);

    let failed = |e: rusqlite::Error| {
        FintrackError::Storage(format!(
            "Failed to apply migration {} ({}): {}",
            migration.version, migration.name, e
        ))
    };

    // rolled back on drop unless committed
    let tx = conn.unchecked_transaction().map_err(failed)?;
    tx.execute_batch(migration.sql).map_err(failed)?;
    tx.execute(
        "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
        params![migration.version, migration.name, chrono::Utc::now().to_rfc3339()],
    )
    .map_err(failed)?;
    tx.commit().map_err(failed)?;

    Ok(())
}
