//! Audit logging for fintrack
//!
//! Every create, update and delete of an expense, and every change to the
//! income profile, is appended to a JSONL file with the amounts before and
//! after. `fintrack audit` prints the tail of it.

mod entry;
mod logger;

pub use entry::{AuditEntry, AuditSubject, Operation};
pub use logger::AuditLog;
