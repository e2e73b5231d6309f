//! Period selection service
//!
//! Resolves the month or year a command works on. Anything the user leaves
//! out is filled from the last selection stored in settings, then from
//! today's date.

use chrono::{Datelike, Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{parse_month, PeriodKind, Selection};

/// Service for period selection
pub struct PeriodService<'a> {
    settings: &'a Settings,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Resolve a selection relative to the current date
    pub fn resolve(
        &self,
        view: Option<PeriodKind>,
        year: Option<i32>,
        month: Option<&str>,
    ) -> FintrackResult<Selection> {
        self.resolve_at(view, year, month, Local::now().date_naive())
    }

    /// Resolve a selection relative to `today`
    pub fn resolve_at(
        &self,
        view: Option<PeriodKind>,
        year: Option<i32>,
        month: Option<&str>,
        today: NaiveDate,
    ) -> FintrackResult<Selection> {
        let kind = view.unwrap_or(self.settings.view_mode);
        let year = year
            .or(self.settings.last_year)
            .unwrap_or_else(|| today.year());
        let month = match month {
            Some(m) => parse_month(m).map_err(|e| FintrackError::InvalidInput(e.to_string()))?,
            None => self.settings.last_month.unwrap_or_else(|| today.month()),
        };

        Selection::of_kind(kind, year, Some(month))
            .map_err(|e| FintrackError::InvalidInput(e.to_string()))
    }

    /// Date for a new expense
    ///
    /// An explicit `YYYY-MM-DD` date wins. Otherwise the expense lands on the
    /// first day of the given (or current) month and year.
    pub fn expense_date(
        &self,
        date: Option<&str>,
        year: Option<i32>,
        month: Option<&str>,
    ) -> FintrackResult<NaiveDate> {
        Self::expense_date_at(date, year, month, Local::now().date_naive())
    }

    pub fn expense_date_at(
        date: Option<&str>,
        year: Option<i32>,
        month: Option<&str>,
        today: NaiveDate,
    ) -> FintrackResult<NaiveDate> {
        if let Some(date) = date {
            return NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
                FintrackError::InvalidInput(format!(
                    "Invalid date: '{}' (expected YYYY-MM-DD)",
                    date
                ))
            });
        }

        let month = match month {
            Some(m) => parse_month(m).map_err(|e| FintrackError::InvalidInput(e.to_string()))?,
            None => today.month(),
        };
        let selection = Selection::monthly(year.unwrap_or_else(|| today.year()), month)
            .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;

        Ok(selection.start_date())
    }
}
