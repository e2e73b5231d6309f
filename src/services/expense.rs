//! Expense service
//!
//! Provides business logic for recording, editing, and removing expenses.
//! Every mutation is written to the audit log.

use crate::audit::AuditEntry;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{ExpenseId, ExpenseRecord, Money, NewExpense, Selection};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    pub fn add(&self, expense: NewExpense) -> FintrackResult<ExpenseRecord> {
        expense
            .validate()
            .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;

        let id = self.storage.repository().add_expense(&expense)?;
        let record = expense.with_id(id);

        self.storage.record(AuditEntry::expense_recorded(&record));

        log::info!(
            "Recorded expense #{} of {} in {}",
            record.id,
            record.amount,
            record.category
        );

        Ok(record)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> FintrackResult<Option<ExpenseRecord>> {
        self.storage.repository().get_expense(id)
    }

    /// Expenses within a month or year, oldest first
    pub fn list(&self, selection: &Selection) -> FintrackResult<Vec<ExpenseRecord>> {
        self.storage.repository().expenses_for(selection)
    }

    /// Change the amount of an existing expense
    ///
    /// Returns the record as it was and as it is now.
    pub fn update_amount(
        &self,
        id: ExpenseId,
        amount: Money,
    ) -> FintrackResult<(ExpenseRecord, ExpenseRecord)> {
        let before = self
            .get(id)?
            .ok_or_else(|| FintrackError::expense_not_found(id))?;

        self.storage.repository().update_expense_amount(id, amount)?;
        self.storage
            .record(AuditEntry::expense_amended(&before, amount));

        log::info!("Updated expense #{}: {} -> {}", id, before.amount, amount);

        let after = ExpenseRecord {
            amount,
            ..before.clone()
        };
        Ok((before, after))
    }

    /// Remove an expense
    pub fn delete(&self, id: ExpenseId) -> FintrackResult<ExpenseRecord> {
        let existing = self
            .get(id)?
            .ok_or_else(|| FintrackError::expense_not_found(id))?;

        self.storage.repository().delete_expense(id)?;
        self.storage.record(AuditEntry::expense_removed(&existing));

        log::info!("Deleted expense #{}", id);

        Ok(existing)
    }
}
