//! Growth and decay calculators
//!
//! Closed-form compounding plus sequential return application. Rates in this
//! module are in percent units (`6.0` = 6%); allocation weights are fractions.
//! None of these functions validate their inputs: negative rates model decay
//! and NaN/infinite inputs flow through to the result.

use crate::model::PortfolioAllocation;
use crate::money::round_to_cents;

/// Monthly compounding, used when the caller has no better frequency.
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 12;

/// Compound `principal` at `annual_rate_percent`, compounded
/// `compounds_per_year` times a year for `years` years.
pub fn calculate_compound_interest(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    compounds_per_year: u32,
) -> f64 {
    let n = f64::from(compounds_per_year);
    let periodic_rate = annual_rate_percent / 100.0 / n;
    round_to_cents(principal * (1.0 + periodic_rate).powf(n * years))
}

/// Grow `current_value` by annually compounded inflation.
///
/// Negative inflation (deflation) shrinks the value.
pub fn calculate_inflation_adjusted_value(
    current_value: f64,
    annual_inflation_percent: f64,
    years: f64,
) -> f64 {
    round_to_cents(current_value * (1.0 + annual_inflation_percent / 100.0).powf(years))
}

/// Replay a sequence of annual returns against an initial investment.
///
/// Returns are applied in slice order. An empty slice leaves the investment
/// unchanged.
pub fn calculate_portfolio_backtest(initial_investment: f64, annual_returns_percent: &[f64]) -> f64 {
    let balance = annual_returns_percent
        .iter()
        .fold(initial_investment, |balance, r| balance * (1.0 + r / 100.0));
    round_to_cents(balance)
}

/// Total growth (in percent) of a three-fund portfolio held for `years`.
///
/// The blended annual return is the allocation-weighted average of the three
/// fund returns; it is then compounded annually. The result is a growth
/// percentage, not a currency amount.
pub fn calculate_three_fund_portfolio_return(
    us_return: f64,
    intl_return: f64,
    bond_return: f64,
    years: f64,
    allocation: &PortfolioAllocation,
) -> f64 {
    let avg_return = allocation.blended_return(us_return, intl_return, bond_return);
    round_to_cents(((1.0 + avg_return / 100.0).powf(years) - 1.0) * 100.0)
}
