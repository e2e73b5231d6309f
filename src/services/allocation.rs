//! Budget allocation
//!
//! Splits a period's after-tax income into an ordered waterfall of buckets:
//! living expenses first, then an emergency fund, retirement, and stock
//! investment, with whatever is left reported as net savings. Each bucket is
//! capped and never negative; net savings may be.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::tax::compute_tax;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    AdvisoryFlags, AllocationResult, IncomeProfile, Money, PerformanceNote, PeriodKind, Selection,
};
use crate::reports::CategoryBreakdown;
use crate::storage::FinanceRepository;

/// Emergency fund target as a fraction of the period's expenses (6/12)
pub const EMERGENCY_FUND_FACTOR: Decimal = dec!(0.5);

/// Yearly retirement contribution cap
pub const ANNUAL_RETIREMENT_CAP: Decimal = dec!(7500);

/// Share of what remains after retirement that goes to stocks
pub const STOCK_INVESTMENT_RATE: Decimal = dec!(0.10);

/// Expenses within this much of after-tax income trigger a warning
pub const NEAR_LIMIT_MARGIN: Decimal = dec!(1000);

/// Retirement cap for one period of the given kind
pub fn retirement_cap(kind: PeriodKind) -> Money {
    match kind {
        PeriodKind::Monthly => Money::new(ANNUAL_RETIREMENT_CAP / Decimal::from(12)),
        PeriodKind::Yearly => Money::new(ANNUAL_RETIREMENT_CAP),
    }
}

/// Run the waterfall for a monthly-equivalent gross income
///
/// `total_expenses` is the total for the period (a month or a whole year).
pub fn waterfall(
    gross_income_monthly: Money,
    kind: PeriodKind,
    total_expenses: Money,
) -> AllocationResult {
    let gross_income_for_period = gross_income_monthly * Decimal::from(kind.months());
    let tax = compute_tax(gross_income_for_period);
    let after_tax_income = gross_income_for_period - tax;

    let living_expenses = total_expenses;
    let mut remaining = after_tax_income - living_expenses;

    let emergency_target = total_expenses * EMERGENCY_FUND_FACTOR;
    let emergency_savings = remaining.min(emergency_target).non_negative();
    remaining -= emergency_savings;

    let retirement_savings = remaining.min(retirement_cap(kind)).non_negative();
    remaining -= retirement_savings;

    let stock_investment = remaining
        .min(remaining * STOCK_INVESTMENT_RATE)
        .non_negative();
    remaining -= stock_investment;

    let net_savings = remaining;

    let performance_note = match kind {
        PeriodKind::Yearly if net_savings.is_positive() => Some(PerformanceNote::Favorable),
        PeriodKind::Yearly => Some(PerformanceNote::Unfavorable),
        PeriodKind::Monthly => None,
    };

    AllocationResult {
        period_kind: kind,
        gross_income_monthly_equivalent: gross_income_monthly,
        gross_income_for_period,
        tax,
        after_tax_income,
        total_expenses,
        living_expenses,
        emergency_savings,
        retirement_savings,
        stock_investment,
        net_savings,
        performance_note,
    }
}

/// Allocate for the configured income; a missing profile is an error, not zero
pub fn allocate(
    income: Option<&IncomeProfile>,
    kind: PeriodKind,
    total_expenses: Money,
) -> FintrackResult<AllocationResult> {
    let income = income.ok_or(FintrackError::MissingIncome)?;
    Ok(waterfall(income.monthly_equivalent(), kind, total_expenses))
}

/// Warnings derived from an allocation
pub fn advisory_flags(result: &AllocationResult) -> AdvisoryFlags {
    AdvisoryFlags {
        near_budget_limit: result.total_expenses
            >= result.after_tax_income - Money::new(NEAR_LIMIT_MARGIN),
        over_budget: !result.net_savings.is_positive(),
    }
}

/// Everything the presentation layer shows for one selection
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    pub selection: Selection,
    pub result: AllocationResult,
    pub flags: AdvisoryFlags,
    pub breakdown: CategoryBreakdown,
}

/// Reads income and expenses from a repository and runs the allocation
pub struct AllocationService<'a> {
    repo: &'a dyn FinanceRepository,
}

impl<'a> AllocationService<'a> {
    pub fn new(repo: &'a dyn FinanceRepository) -> Self {
        Self { repo }
    }

    /// Calculate the budget summary for a month or a year
    pub fn calculate(&self, selection: Selection) -> FintrackResult<BudgetSummary> {
        let income = self.repo.income_profile()?;
        let breakdown = CategoryBreakdown::generate(self.repo, selection)?;

        let result = allocate(income.as_ref(), selection.kind(), breakdown.total)?;
        let flags = advisory_flags(&result);

        log::debug!(
            "Allocated {} for {}: net savings {}",
            result.after_tax_income,
            selection,
            result.net_savings
        );

        Ok(BudgetSummary {
            selection,
            result,
            flags,
            breakdown,
        })
    }
}
