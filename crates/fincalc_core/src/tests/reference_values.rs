//! Literal scenarios with known answers
//!
//! Figures a household planner would check by hand or against a spreadsheet.

use crate::amortization::calculate_loan_payment;
use crate::goal_seek::{FREEDOM_HORIZON_MONTHS, calculate_financial_freedom_years};
use crate::growth::{calculate_compound_interest, calculate_inflation_adjusted_value};
use crate::transforms::{calculate_roi, convert_currency};

#[test]
fn test_roi_reference_values() {
    assert_eq!(calculate_roi(1_000.0, 1_200.0).unwrap(), 20.0);
    assert_eq!(calculate_roi(1_000.0, 500.0).unwrap(), -50.0);
    assert_eq!(calculate_roi(1_000.0, 0.0).unwrap(), -100.0);
}

#[test]
fn test_thirty_year_mortgage_payment() {
    assert_eq!(calculate_loan_payment(300_000.0, 4.5, 30.0), 1_520.06);
}

#[test]
fn test_ten_years_of_three_percent_inflation() {
    assert_eq!(calculate_inflation_adjusted_value(100.0, 3.0, 10.0), 134.39);
}

#[test]
fn test_five_years_monthly_compounding() {
    assert_eq!(calculate_compound_interest(10_000.0, 6.0, 5.0, 12), 13_488.5);
}

#[test]
fn test_currency_conversion() {
    assert_eq!(convert_currency(100.0, 0.85), 85.0);
}

#[test]
fn test_freedom_runway_is_bounded() {
    let years = calculate_financial_freedom_years(500_000.0, 4_000.0, 0.04).unwrap();
    assert!(years > 0.0);
    assert!(years <= f64::from(FREEDOM_HORIZON_MONTHS) / 12.0);
    assert_eq!(years, 13.5);
}

#[test]
fn test_error_guards() {
    assert!(calculate_financial_freedom_years(250_000.0, 0.0, 0.04).is_err());
    assert!(calculate_roi(0.0, 1_000.0).is_err());
}
