//! Deterministic personal-finance calculators
//!
//! This crate provides pure, stateless calculators for household planning:
//! - Growth and decay: compound interest, inflation, backtests, three-fund returns
//! - Amortization: loan payments, extra-payment payoff savings, schedules
//! - Goal seeking: financial-freedom runway, maximum affordable home price
//! - Retirement: 401(k) accumulation with employer match
//! - Transforms: ROI and currency conversion
//!
//! # Rate conventions
//!
//! Most rates are in percent units (`4.5` means 4.5%). A few inputs are
//! fractions instead, and their parameter names say so:
//! `annual_growth_rate` of the freedom runway, `employer_match_rate` of the
//! 401(k) projection, and [`PortfolioAllocation`] weights.
//!
//! Returned amounts are already rounded to cents; callers should not round
//! them again.
//!
//! ```ignore
//! use fincalc_core::{calculate_loan_payment, calculate_financial_freedom_years};
//!
//! let payment = calculate_loan_payment(300_000.0, 4.5, 30.0); // 1520.06
//! let runway = calculate_financial_freedom_years(500_000.0, 4_000.0 + payment, 0.04)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Calculator modules
// ============================================================================

pub mod amortization;
pub mod goal_seek;
pub mod growth;
pub mod retirement;
pub mod transforms;

// ============================================================================
// Supporting modules
// ============================================================================

pub mod calculation;
pub mod error;
pub mod model;
pub mod money;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use amortization::{
    amortization_schedule, calculate_loan_payment, calculate_mortgage_payoff_savings,
};
pub use calculation::{Calculation, CalculationOutput, OutputUnit, evaluate, evaluate_all};
pub use error::CalcError;
pub use goal_seek::{calculate_financial_freedom_years, calculate_maximum_home_price};
pub use growth::{
    calculate_compound_interest, calculate_inflation_adjusted_value, calculate_portfolio_backtest,
    calculate_three_fund_portfolio_return,
};
pub use model::{AmortizationRow, MortgagePayoffResult, PortfolioAllocation};
pub use retirement::calculate_401k_balance;
pub use transforms::{calculate_roi, convert_currency};
