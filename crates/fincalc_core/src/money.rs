//! Rounding helpers applied at calculator boundaries.
//!
//! Accumulation inside a calculator always runs on unrounded values; only the
//! value handed back to the caller is rounded.

/// Round a currency amount (or percentage) to 2 decimal places.
///
/// Non-finite values pass through unchanged.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to whole currency units.
#[inline]
pub fn round_to_whole(value: f64) -> f64 {
    value.round()
}

/// Convert a month count to years, rounded to 2 decimals.
#[inline]
pub fn months_to_years(months: u32) -> f64 {
    round_to_cents(f64::from(months) / 12.0)
}
