//! Income service
//!
//! Provides business logic for the gross income profile used by the
//! budget allocator.

use crate::audit::AuditEntry;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{IncomeFrequency, IncomeProfile, Money};
use crate::storage::Storage;

/// Service for income profile management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the gross income amount and how often it is received
    pub fn set(&self, amount: Money, frequency: IncomeFrequency) -> FintrackResult<IncomeProfile> {
        IncomeProfile::new(amount, frequency)
            .validate()
            .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;

        let repo = self.storage.repository();
        let previous = repo.income_profile()?;
        let profile = repo.set_income_profile(amount, frequency)?;

        self.storage
            .record(AuditEntry::income_set(previous.as_ref(), &profile));

        log::info!("Income set to {} ({})", profile.amount, profile.frequency);

        Ok(profile)
    }

    /// The configured income, if any
    pub fn get(&self) -> FintrackResult<Option<IncomeProfile>> {
        self.storage.repository().income_profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditSubject, Operation};
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_unset_income() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        assert!(service.get().unwrap().is_none());
    }

    #[test]
    fn test_set_and_replace() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        service
            .set(Money::from_units(5000), IncomeFrequency::Monthly)
            .unwrap();
        let profile = service
            .set(Money::from_units(72000), IncomeFrequency::Yearly)
            .unwrap();

        assert_eq!(profile.amount, Money::from_units(72000));
        assert_eq!(profile.frequency, IncomeFrequency::Yearly);

        let stored = service.get().unwrap().unwrap();
        assert_eq!(stored.amount, Money::from_units(72000));
        assert_eq!(stored.monthly_equivalent(), Money::from_units(6000));

        let entries = storage.audit().recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].amount_before, Some(Money::from_units(5000)));
        assert_eq!(
            entries[1].subject,
            AuditSubject::Income {
                frequency: IncomeFrequency::Yearly,
                previous_frequency: Some(IncomeFrequency::Monthly),
            }
        );
    }

    #[test]
    fn test_negative_income_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let err = service
            .set(Money::from_units(-1), IncomeFrequency::Monthly)
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(service.get().unwrap().is_none());
        assert!(storage.audit().recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_zero_income_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = IncomeService::new(&storage);

        let profile = service.set(Money::zero(), IncomeFrequency::Monthly).unwrap();
        assert!(profile.amount.is_zero());
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_the_change() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("audit.log")).unwrap();
        let service = IncomeService::new(&storage);

        service
            .set(Money::from_units(4000), IncomeFrequency::Monthly)
            .unwrap();
        assert_eq!(
            service.get().unwrap().unwrap().amount,
            Money::from_units(4000)
        );
    }
}
