//! Financial-freedom runway
//!
//! How many years a pot of savings covers a fixed monthly spend while the
//! remaining balance keeps growing.

use crate::error::{CalcError, Result};
use crate::money::months_to_years;

/// Growth assumed for the savings pot when the caller has none (a fraction, 4%).
pub const DEFAULT_FREEDOM_GROWTH_RATE: f64 = 0.04;

/// Simulation horizon: 50 years of monthly steps.
///
/// Savings that outgrow their withdrawals never deplete; they report the full
/// horizon instead.
pub const FREEDOM_HORIZON_MONTHS: u32 = 50 * 12;

/// Years until `initial_savings` is exhausted by `monthly_expenses`.
///
/// `annual_growth_rate` is a **fraction** (`0.04` = 4%), unlike the percent
/// rates the other calculators take. Each month the balance grows by
/// `annual_growth_rate / 12` and then pays the month's expenses.
///
/// Non-positive expenses are rejected. Non-positive savings are not an error
/// and last zero years. The result never exceeds 50.
pub fn calculate_financial_freedom_years(
    initial_savings: f64,
    monthly_expenses: f64,
    annual_growth_rate: f64,
) -> Result<f64> {
    if monthly_expenses <= 0.0 {
        return Err(CalcError::invalid(
            "monthly_expenses",
            monthly_expenses,
            "must be greater than zero",
        ));
    }

    if initial_savings <= 0.0 {
        return Ok(0.0);
    }

    let monthly_rate = annual_growth_rate / 12.0;
    let mut balance = initial_savings;
    let mut months = 0;

    while balance > 0.0 && months < FREEDOM_HORIZON_MONTHS {
        balance = balance * (1.0 + monthly_rate) - monthly_expenses;
        months += 1;
    }

    Ok(months_to_years(months))
}
