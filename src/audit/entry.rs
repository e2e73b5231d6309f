//! Audit log records
//!
//! A record names the expense or income profile that changed and the amounts
//! on either side of the change.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseId, ExpenseRecord, IncomeFrequency, IncomeProfile, Money};

/// Kind of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        })
    }
}

/// What a change applied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum AuditSubject {
    Expense {
        id: ExpenseId,
        category: String,
        date: NaiveDate,
    },
    Income {
        frequency: IncomeFrequency,
        /// Frequency before the change, when it changed
        #[serde(default, skip_serializing_if = "Option::is_none")]
        previous_frequency: Option<IncomeFrequency>,
    },
}

impl fmt::Display for AuditSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense { id, category, date } => {
                write!(f, "Expense #{} ({}, {})", id, category, date)
            }
            Self::Income {
                frequency,
                previous_frequency: Some(previous),
            } => write!(f, "Income ({} -> {})", previous, frequency),
            Self::Income { frequency, .. } => write!(f, "Income ({})", frequency),
        }
    }
}

/// One line of the audit log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub subject: AuditSubject,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_before: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_after: Option<Money>,
}

impl AuditEntry {
    fn stamped(
        operation: Operation,
        subject: AuditSubject,
        amount_before: Option<Money>,
        amount_after: Option<Money>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject,
            amount_before,
            amount_after,
        }
    }

    pub fn expense_recorded(expense: &ExpenseRecord) -> Self {
        Self::stamped(
            Operation::Create,
            expense_subject(expense),
            None,
            Some(expense.amount),
        )
    }

    pub fn expense_amended(before: &ExpenseRecord, amount: Money) -> Self {
        Self::stamped(
            Operation::Update,
            expense_subject(before),
            Some(before.amount),
            Some(amount),
        )
    }

    pub fn expense_removed(expense: &ExpenseRecord) -> Self {
        Self::stamped(
            Operation::Delete,
            expense_subject(expense),
            Some(expense.amount),
            None,
        )
    }

    /// The first `income set` is a create; later ones are updates
    pub fn income_set(previous: Option<&IncomeProfile>, profile: &IncomeProfile) -> Self {
        let operation = match previous {
            Some(_) => Operation::Update,
            None => Operation::Create,
        };
        let subject = AuditSubject::Income {
            frequency: profile.frequency,
            previous_frequency: previous
                .map(|p| p.frequency)
                .filter(|f| *f != profile.frequency),
        };

        Self::stamped(
            operation,
            subject,
            previous.map(|p| p.amount),
            Some(profile.amount),
        )
    }
}

fn expense_subject(expense: &ExpenseRecord) -> AuditSubject {
    AuditSubject::Expense {
        id: expense.id,
        category: expense.category.clone(),
        date: expense.date,
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.subject
        )?;

        match (self.amount_before, self.amount_after) {
            (Some(before), Some(after)) => write!(f, ": {} -> {}", before, after),
            (None, Some(after)) => write!(f, ": {}", after),
            (Some(before), None) => write!(f, ": was {}", before),
            (None, None) => Ok(()),
        }
    }
}
