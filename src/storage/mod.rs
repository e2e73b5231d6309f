//! Storage layer for fintrack
//!
//! `FinanceRepository` is the persistence seam: services and the allocator
//! only ever talk to this trait. `SqliteRepository` implements it on a local
//! SQLite file, and `Storage` ties the repository to the audit log.

pub mod schema;
pub mod sqlite;

pub use sqlite::SqliteRepository;

use crate::audit::{AuditEntry, AuditLog};
use crate::config::paths::FintrackPaths;
use crate::error::FintrackResult;
use crate::models::{
    ExpenseId, ExpenseRecord, IncomeFrequency, IncomeProfile, Money, NewExpense, Selection,
};

/// CRUD access to the income profile and expense records
///
/// Every operation reports persistence failures as `FintrackError::Storage`.
pub trait FinanceRepository {
    /// The configured income, if any
    fn income_profile(&self) -> FintrackResult<Option<IncomeProfile>>;

    /// Replace the income profile (amount and frequency together)
    fn set_income_profile(
        &self,
        amount: Money,
        frequency: IncomeFrequency,
    ) -> FintrackResult<IncomeProfile>;

    /// Store a new expense and return its assigned id
    fn add_expense(&self, expense: &NewExpense) -> FintrackResult<ExpenseId>;

    fn get_expense(&self, id: ExpenseId) -> FintrackResult<Option<ExpenseRecord>>;

    /// Expenses dated within `year` (and `month`, when given), oldest first
    fn list_expenses(&self, year: i32, month: Option<u32>) -> FintrackResult<Vec<ExpenseRecord>>;

    fn list_all_expenses(&self) -> FintrackResult<Vec<ExpenseRecord>>;

    /// Change the amount of an existing expense; `NotFound` if it doesn't exist
    fn update_expense_amount(&self, id: ExpenseId, amount: Money) -> FintrackResult<()>;

    /// Remove an expense; `NotFound` if it doesn't exist
    fn delete_expense(&self, id: ExpenseId) -> FintrackResult<()>;

    /// Expenses within a period selection
    fn expenses_for(&self, selection: &Selection) -> FintrackResult<Vec<ExpenseRecord>> {
        self.list_expenses(selection.year(), selection.month())
    }
}

/// Main storage coordinator: the repository plus the audit log
pub struct Storage {
    paths: FintrackPaths,
    repository: SqliteRepository,
    audit: AuditLog,
}

impl Storage {
    /// Open storage under the given paths, creating directories and the
    /// database schema as needed
    pub fn new(paths: FintrackPaths) -> FintrackResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            repository: SqliteRepository::open(paths.database_file())?,
            audit: AuditLog::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    pub fn repository(&self) -> &dyn FinanceRepository {
        &self.repository
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Append to the audit log
    ///
    /// The change is already committed when this runs; a failed write is
    /// only logged as a warning.
    pub fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.append(&entry) {
            log::warn!("Audit entry not written ({}): {}", entry, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.paths().database_file().exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_expenses_for_selection() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let repo = storage.repository();

        let date = chrono::NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        repo.add_expense(&NewExpense::new(Money::from_units(10), "Rent", date))
            .unwrap();

        let april = Selection::monthly(2025, 4).unwrap();
        let may = Selection::monthly(2025, 5).unwrap();
        assert_eq!(repo.expenses_for(&april).unwrap().len(), 1);
        assert!(repo.expenses_for(&may).unwrap().is_empty());
    }
}
