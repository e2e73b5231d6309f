//! fintrack - personal expense tracker and budget allocator
//!
//! This library records a gross income and categorized expenses in a local
//! SQLite database, and splits a month's or a year's after-tax income into
//! living expenses, an emergency fund, retirement, stock investment and net
//! savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, income, expenses, allocation)
//! - `storage`: Repository trait and the SQLite implementation
//! - `services`: Business logic layer (tax, allocation, expenses, income)
//! - `reports`: Spending by category
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::FintrackPaths;
//! use fintrack::models::Selection;
//! use fintrack::services::AllocationService;
//! use fintrack::storage::Storage;
//!
//! let storage = Storage::new(FintrackPaths::new()?)?;
//! let summary = AllocationService::new(storage.repository())
//!     .calculate(Selection::monthly(2025, 3)?)?;
//! println!("Net savings: {}", summary.result.net_savings);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
