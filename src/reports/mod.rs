//! Reports module for fintrack
//!
//! Provides the spending-by-category breakdown used for charting.

pub mod spending;

pub use spending::{CategoryBreakdown, CategorySpending};
