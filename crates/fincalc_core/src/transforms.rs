//! Simple one-step transforms

use crate::error::{CalcError, Result};
use crate::money::round_to_cents;

/// Return on investment, in percent.
///
/// Fails when `initial_investment` is zero.
pub fn calculate_roi(initial_investment: f64, current_value: f64) -> Result<f64> {
    if initial_investment == 0.0 {
        return Err(CalcError::invalid(
            "initial_investment",
            initial_investment,
            "cannot be zero",
        ));
    }

    Ok(round_to_cents(
        (current_value - initial_investment) / initial_investment * 100.0,
    ))
}

/// Convert `amount` at an exchange `rate`. The rate is not validated.
pub fn convert_currency(amount: f64, rate: f64) -> f64 {
    round_to_cents(amount * rate)
}
