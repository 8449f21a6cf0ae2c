//! Amortization outputs
//!
//! Records produced by the amortization engine. All amounts are rounded to
//! cents before they are handed back.

use serde::{Deserialize, Serialize};

/// Outcome of comparing a loan's scheduled payoff against an accelerated one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgagePayoffResult {
    /// Years to pay off on the regular schedule
    pub original_years: f64,
    /// Years to pay off with the extra monthly principal
    pub new_years: f64,
    /// Total interest avoided by paying extra
    pub interest_saved: f64,
}

impl MortgagePayoffResult {
    /// Years shaved off the loan by the extra payment
    pub fn years_saved(&self) -> f64 {
        crate::money::round_to_cents(self.original_years - self.new_years)
    }
}

/// One installment of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based installment number
    pub month: u32,
    /// Total paid this month (interest + principal)
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Remaining balance after this installment
    pub balance: f64,
}
