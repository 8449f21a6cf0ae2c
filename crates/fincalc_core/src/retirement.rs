//! Retirement account accumulation

use crate::money::round_to_cents;

/// Project a 401(k) balance `years` years out.
///
/// Every year the employee contribution plus the employer match is deposited
/// first, then the whole balance earns that year's return. `employer_match_rate`
/// is a fraction of the contribution (`0.5` = 50% match); the return is in
/// percent units.
pub fn calculate_401k_balance(
    current_balance: f64,
    annual_contribution: f64,
    employer_match_rate: f64,
    annual_return_percent: f64,
    years: u32,
) -> f64 {
    let yearly_deposit = annual_contribution * (1.0 + employer_match_rate);
    let growth = 1.0 + annual_return_percent / 100.0;

    let balance = (0..years).fold(current_balance, |balance, _| {
        (balance + yearly_deposit) * growth
    });

    round_to_cents(balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contributions_with_match_no_growth() {
        assert_eq!(calculate_401k_balance(0.0, 10_000.0, 0.5, 0.0, 3), 45_000.0);
    }

    #[test]
    fn test_contribution_grows_in_year_deposited() {
        // (10000 + 7500) * 1.07 = 18725, (18725 + 7500) * 1.07 = 28060.75
        assert_eq!(calculate_401k_balance(10_000.0, 5_000.0, 0.5, 7.0, 2), 28_060.75);
    }

    #[test]
    fn test_zero_years_keeps_balance() {
        assert_eq!(calculate_401k_balance(12_345.67, 5_000.0, 1.0, 7.0, 0), 12_345.67);
    }

    #[test]
    fn test_no_match() {
        // (0 + 1000) * 1.1
        assert_eq!(calculate_401k_balance(0.0, 1_000.0, 0.0, 10.0, 1), 1_100.0);
    }

    #[test]
    fn test_nan_return_propagates() {
        assert!(calculate_401k_balance(0.0, 1_000.0, 0.5, f64::NAN, 5).is_nan());
        assert!(calculate_401k_balance(f64::NAN, 1_000.0, 0.5, 7.0, 5).is_nan());
    }
}
