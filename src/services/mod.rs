//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! validation and audit logging for mutations, plus the tax estimate and
//! the budget allocator.

pub mod allocation;
pub mod expense;
pub mod income;
pub mod period;
pub mod tax;

pub use allocation::{advisory_flags, allocate, waterfall, AllocationService, BudgetSummary};
pub use expense::ExpenseService;
pub use income::IncomeService;
pub use period::PeriodService;
pub use tax::compute_tax;
