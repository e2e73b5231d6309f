//! SQLite implementation of the finance repository
//!
//! Amounts are stored as decimal TEXT so values round-trip exactly; dates
//! are stored as ISO `YYYY-MM-DD` strings, which sort chronologically.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

use super::schema;
use super::FinanceRepository;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    ExpenseId, ExpenseRecord, IncomeFrequency, IncomeProfile, Money, NewExpense, Selection,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository backed by a single SQLite connection
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Open (or create) the database at `path` and apply migrations
    pub fn open(path: impl AsRef<Path>) -> FintrackResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|e| {
            FintrackError::Storage(format!("Failed to open database {}: {}", path.display(), e))
        })?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        log::debug!("Opened database at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open an in-memory database (used in tests)
    pub fn open_in_memory() -> FintrackResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> FintrackResult<Self> {
        schema::run_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl FinanceRepository for SqliteRepository {
    fn income_profile(&self) -> FintrackResult<Option<IncomeProfile>> {
        let profile = self
            .conn
            .query_row(
                "SELECT amount, frequency, updated_at FROM income_profile WHERE id = 1",
                [],
                |row| {
                    Ok(IncomeProfile {
                        amount: money_column(row, 0)?,
                        frequency: frequency_column(row, 1)?,
                        updated_at: timestamp_column(row, 2)?,
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    fn set_income_profile(
        &self,
        amount: Money,
        frequency: IncomeFrequency,
    ) -> FintrackResult<IncomeProfile> {
        let profile = IncomeProfile::new(amount, frequency);

        self.conn.execute(
            "INSERT INTO income_profile (id, amount, frequency, updated_at)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                amount = excluded.amount,
                frequency = excluded.frequency,
                updated_at = excluded.updated_at",
            params![
                profile.amount.amount().to_string(),
                profile.frequency.as_str(),
                profile.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(profile)
    }

    fn add_expense(&self, expense: &NewExpense) -> FintrackResult<ExpenseId> {
        self.conn.execute(
            "INSERT INTO expenses (amount, category, date) VALUES (?1, ?2, ?3)",
            params![
                expense.amount.amount().to_string(),
                expense.category,
                expense.date.format(DATE_FORMAT).to_string(),
            ],
        )?;
        Ok(ExpenseId::new(self.conn.last_insert_rowid()))
    }

    fn get_expense(&self, id: ExpenseId) -> FintrackResult<Option<ExpenseRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, amount, category, date FROM expenses WHERE id = ?1",
                params![id.value()],
                expense_from_row,
            )
            .optional()?;
        Ok(record)
    }

    fn list_expenses(&self, year: i32, month: Option<u32>) -> FintrackResult<Vec<ExpenseRecord>> {
        let selection = match month {
            Some(month) => Selection::monthly(year, month),
            None => Selection::yearly(year),
        }
        .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;

        let mut stmt = self.conn.prepare(
            "SELECT id, amount, category, date FROM expenses
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date ASC, id ASC",
        )?;
        let records = stmt
            .query_map(
                params![
                    selection.start_date().format(DATE_FORMAT).to_string(),
                    selection.end_date().format(DATE_FORMAT).to_string(),
                ],
                expense_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn list_all_expenses(&self) -> FintrackResult<Vec<ExpenseRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, amount, category, date FROM expenses ORDER BY date ASC, id ASC")?;
        let records = stmt
            .query_map([], expense_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn update_expense_amount(&self, id: ExpenseId, amount: Money) -> FintrackResult<()> {
        let changed = self.conn.execute(
            "UPDATE expenses SET amount = ?1 WHERE id = ?2",
            params![amount.amount().to_string(), id.value()],
        )?;
        if changed == 0 {
            return Err(FintrackError::expense_not_found(id));
        }
        Ok(())
    }

    fn delete_expense(&self, id: ExpenseId) -> FintrackResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id.value()])?;
        if changed == 0 {
            return Err(FintrackError::expense_not_found(id));
        }
        Ok(())
    }
}

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<ExpenseRecord> {
    Ok(ExpenseRecord {
        id: ExpenseId::new(row.get(0)?),
        amount: money_column(row, 1)?,
        category: row.get(2)?,
        date: date_column(row, 3)?,
    })
}

fn conversion_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

fn money_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Money> {
    let text: String = row.get(idx)?;
    Decimal::from_str(&text)
        .map(Money::new)
        .map_err(|e| conversion_error(idx, e))
}

fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<NaiveDate> {
    let text: String = row.get(idx)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| conversion_error(idx, e))
}

fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let text: String = row.get(idx)?;
    DateTime::parse_from_rfc3339(&text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn frequency_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<IncomeFrequency> {
    let text: String = row.get(idx)?;
    text.parse::<IncomeFrequency>().map_err(|e| {
        conversion_error(
            idx,
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn repo() -> SqliteRepository {
        SqliteRepository::open_in_memory().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add(repo: &SqliteRepository, amount: Decimal, category: &str, on: NaiveDate) -> ExpenseId {
        repo.add_expense(&NewExpense::new(Money::new(amount), category, on))
            .unwrap()
    }

    #[test]
    fn test_income_profile_absent_then_set() {
        let repo = repo();
        assert!(repo.income_profile().unwrap().is_none());

        repo.set_income_profile(Money::from_units(5000), IncomeFrequency::Monthly)
            .unwrap();
        let profile = repo.income_profile().unwrap().unwrap();
        assert_eq!(profile.amount, Money::from_units(5000));
        assert_eq!(profile.frequency, IncomeFrequency::Monthly);
    }

    #[test]
    fn test_income_profile_replaced_not_duplicated() {
        let repo = repo();
        repo.set_income_profile(Money::from_units(5000), IncomeFrequency::Monthly)
            .unwrap();
        repo.set_income_profile(Money::from_units(90000), IncomeFrequency::Yearly)
            .unwrap();

        let profile = repo.income_profile().unwrap().unwrap();
        assert_eq!(profile.amount, Money::from_units(90000));
        assert_eq!(profile.frequency, IncomeFrequency::Yearly);

        let rows: i64 = repo
            .conn
            .query_row("SELECT COUNT(*) FROM income_profile", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_add_and_get_expense_preserves_decimals() {
        let repo = repo();
        let id = add(&repo, dec!(12.345), "Groceries", date(2025, 3, 1));

        let record = repo.get_expense(id).unwrap().unwrap();
        assert_eq!(record.amount.amount(), dec!(12.345));
        assert_eq!(record.category, "Groceries");
        assert_eq!(record.date, date(2025, 3, 1));
    }

    #[test]
    fn test_ids_are_unique() {
        let repo = repo();
        let a = add(&repo, dec!(1), "Rent", date(2025, 1, 1));
        let b = add(&repo, dec!(1), "Rent", date(2025, 1, 1));
        assert_ne!(a, b);
    }

    #[test]
    fn test_list_by_month_and_year() {
        let repo = repo();
        add(&repo, dec!(100), "Rent", date(2025, 1, 1));
        add(&repo, dec!(50), "Groceries", date(2025, 1, 31));
        add(&repo, dec!(75), "Groceries", date(2025, 2, 1));
        add(&repo, dec!(20), "Dining Out", date(2024, 12, 31));

        let january = repo.list_expenses(2025, Some(1)).unwrap();
        assert_eq!(january.len(), 2);

        let year = repo.list_expenses(2025, None).unwrap();
        assert_eq!(year.len(), 3);
        assert!(year.windows(2).all(|w| w[0].date <= w[1].date));

        assert_eq!(repo.list_all_expenses().unwrap().len(), 4);
    }

    #[test]
    fn test_list_invalid_month_is_input_error() {
        let repo = repo();
        let err = repo.list_expenses(2025, Some(13)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_update_amount() {
        let repo = repo();
        let id = add(&repo, dec!(100), "Rent", date(2025, 1, 1));

        repo.update_expense_amount(id, Money::from_units(120)).unwrap();

        let record = repo.get_expense(id).unwrap().unwrap();
        assert_eq!(record.amount, Money::from_units(120));
        assert_eq!(record.category, "Rent");
    }

    #[test]
    fn test_update_and_delete_missing_are_not_found() {
        let repo = repo();
        let missing = ExpenseId::new(99);

        assert!(repo
            .update_expense_amount(missing, Money::from_units(1))
            .unwrap_err()
            .is_not_found());
        assert!(repo.delete_expense(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete() {
        let repo = repo();
        let id = add(&repo, dec!(100), "Rent", date(2025, 1, 1));

        repo.delete_expense(id).unwrap();
        assert!(repo.get_expense(id).unwrap().is_none());
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("finances.db");

        {
            let repo = SqliteRepository::open(&path).unwrap();
            add(&repo, dec!(42.10), "Utilities", date(2025, 5, 1));
            repo.set_income_profile(Money::from_units(3000), IncomeFrequency::Monthly)
                .unwrap();
        }

        let repo = SqliteRepository::open(&path).unwrap();
        assert_eq!(repo.list_all_expenses().unwrap().len(), 1);
        assert!(repo.income_profile().unwrap().is_some());
    }

    #[test]
    fn test_corrupt_amount_is_storage_error() {
        let repo = repo();
        repo.conn
            .execute(
                "INSERT INTO expenses (amount, category, date) VALUES ('lots', 'Rent', '2025-01-01')",
                [],
            )
            .unwrap();

        let err = repo.list_all_expenses().unwrap_err();
        assert!(matches!(err, FintrackError::Storage(_)));
    }
}
