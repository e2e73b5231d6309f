//! Tax estimate
//!
//! Federal tax is accrued by walking a fixed bracket table; flat state and
//! local rates are added on top of the full income.
//!
//! Each bracket ceiling is consumed as a whole amount: while the remaining
//! income exceeds a ceiling, `ceiling * rate` is added and the ceiling is
//! subtracted from what remains. Ceilings are not widths measured from the
//! previous threshold.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Money;

/// One row of the federal bracket table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBracket {
    /// `None` for the top, unbounded bracket
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
}

/// Federal brackets, ascending
pub const FEDERAL_BRACKETS: [TaxBracket; 7] = [
    TaxBracket { ceiling: Some(dec!(10275)), rate: dec!(0.10) },
    TaxBracket { ceiling: Some(dec!(41775)), rate: dec!(0.12) },
    TaxBracket { ceiling: Some(dec!(89075)), rate: dec!(0.22) },
    TaxBracket { ceiling: Some(dec!(170050)), rate: dec!(0.24) },
    TaxBracket { ceiling: Some(dec!(215950)), rate: dec!(0.32) },
    TaxBracket { ceiling: Some(dec!(539900)), rate: dec!(0.35) },
    TaxBracket { ceiling: None, rate: dec!(0.37) },
];

/// Flat state income tax rate
pub const STATE_RATE: Decimal = dec!(0.0307);

/// Flat local income tax rate
pub const LOCAL_RATE: Decimal = dec!(0.011);

/// Federal portion of the tax on `income`
pub fn federal_tax(income: Money) -> Money {
    let mut tax = Decimal::ZERO;
    let mut remaining = income.amount();

    for bracket in FEDERAL_BRACKETS.iter() {
        match bracket.ceiling {
            Some(ceiling) if remaining > ceiling => {
                tax += ceiling * bracket.rate;
                remaining -= ceiling;
            }
            _ => {
                tax += remaining * bracket.rate;
                break;
            }
        }
    }

    Money::new(tax)
}

/// Total tax on `income`: federal + state + local
pub fn compute_tax(income: Money) -> Money {
    federal_tax(income) + income * STATE_RATE + income * LOCAL_RATE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tax(income: Decimal) -> Decimal {
        compute_tax(Money::new(income)).amount()
    }

    #[test]
    fn test_first_bracket_is_flat() {
        for income in [dec!(0), dec!(1), dec!(5000), dec!(9999.99), dec!(10275)] {
            let expected = income * dec!(0.10) + income * dec!(0.0307) + income * dec!(0.011);
            assert_eq!(tax(income), expected, "income {}", income);
        }
    }

    #[test]
    fn test_monthly_scenario() {
        assert_eq!(tax(dec!(5000)), dec!(708.5));
    }

    #[test]
    fn test_second_bracket_uses_whole_ceiling() {
        // 10275 * 0.10 + 1725 * 0.12 for federal
        let income = dec!(12000);
        let expected = dec!(1027.5) + dec!(207) + income * dec!(0.0417);
        assert_eq!(tax(income), expected);
    }

    #[test]
    fn test_brackets_walk_literally() {
        // 120000 = 10275 + 41775 + 67950; third bracket not exhausted
        let federal = federal_tax(Money::new(dec!(120000))).amount();
        let expected = dec!(10275) * dec!(0.10) + dec!(41775) * dec!(0.12) + dec!(67950) * dec!(0.22);
        assert_eq!(federal, expected);
    }

    #[test]
    fn test_top_bracket_reached() {
        let ceilings: Decimal = FEDERAL_BRACKETS
            .iter()
            .filter_map(|b| b.ceiling)
            .sum();
        let income = ceilings + dec!(1000);
        let federal = federal_tax(Money::new(income)).amount();

        let below_top: Decimal = FEDERAL_BRACKETS
            .iter()
            .filter_map(|b| b.ceiling.map(|c| c * b.rate))
            .sum();
        assert_eq!(federal, below_top + dec!(370));
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut previous = tax(dec!(0));
        let mut income = dec!(0);
        while income <= dec!(1200000) {
            let current = tax(income);
            assert!(current >= previous, "tax decreased at {}", income);
            previous = current;
            income += dec!(997.37);
        }
    }

    #[test]
    fn test_continuous_at_ceilings() {
        for ceiling in FEDERAL_BRACKETS.iter().filter_map(|b| b.ceiling) {
            let at = tax(ceiling);
            let above = tax(ceiling + dec!(0.01));
            assert!(above >= at);
            assert!(above - at < dec!(0.01));
        }
    }
}
