//! Maximum affordable home price
//!
//! Goal-seeks the highest price whose mortgage payment plus property tax fits
//! under the front-end housing ratio of gross monthly income.

use super::binary_search::bisect_max_feasible;
use crate::amortization::calculate_loan_payment;
use crate::money::round_to_whole;

/// Share of gross monthly income available for housing (28%).
pub const FRONT_END_RATIO: f64 = 0.28;

/// Lowest price considered by the search.
pub const HOME_PRICE_FLOOR: f64 = 50_000.0;

/// Highest price considered by the search.
pub const HOME_PRICE_CEILING: f64 = 2_000_000.0;

/// Bisection rounds; 2^30 halvings of the price range is well under a cent.
pub const HOME_PRICE_SEARCH_ITERATIONS: u32 = 30;

/// Annual property tax used when the caller has no local rate (percent units).
pub const DEFAULT_PROPERTY_TAX_RATE_PERCENT: f64 = 1.1;

/// Monthly cost of owning a home at `price`: loan payment plus property tax.
fn monthly_housing_cost(
    price: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    loan_term_years: f64,
    property_tax_rate_percent: f64,
) -> f64 {
    let loan_payment = calculate_loan_payment(price - down_payment, annual_rate_percent, loan_term_years);
    let property_tax = price * property_tax_rate_percent / 100.0 / 12.0;
    loan_payment + property_tax
}

/// Highest home price, in whole currency units, that keeps the monthly
/// housing cost within [`FRONT_END_RATIO`] of gross monthly income.
///
/// The answer is confined to `[HOME_PRICE_FLOOR, HOME_PRICE_CEILING)`: an
/// income that cannot afford the floor still reports the floor.
/// `monthly_debts` does not enter the front-end ratio; it is accepted so call
/// sites can pass a complete affordability profile.
pub fn calculate_maximum_home_price(
    annual_income: f64,
    _monthly_debts: f64,
    annual_rate_percent: f64,
    loan_term_years: f64,
    down_payment: f64,
    property_tax_rate_percent: f64,
) -> f64 {
    let max_housing_payment = annual_income / 12.0 * FRONT_END_RATIO;

    let price = bisect_max_feasible(
        HOME_PRICE_FLOOR,
        HOME_PRICE_CEILING,
        HOME_PRICE_SEARCH_ITERATIONS,
        |candidate| {
            monthly_housing_cost(
                candidate,
                down_payment,
                annual_rate_percent,
                loan_term_years,
                property_tax_rate_percent,
            ) <= max_housing_payment
        },
    );

    round_to_whole(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_household() {
        let price = calculate_maximum_home_price(
            100_000.0,
            500.0,
            6.5,
            30.0,
            50_000.0,
            DEFAULT_PROPERTY_TAX_RATE_PERCENT,
        );
        assert_eq!(price, 366_069.0);
    }

    #[test]
    fn test_payment_fits_front_end_ratio() {
        let price = calculate_maximum_home_price(120_000.0, 0.0, 7.0, 30.0, 40_000.0, 1.1);
        let cost = monthly_housing_cost(price, 40_000.0, 7.0, 30.0, 1.1);
        assert!(cost <= 120_000.0 / 12.0 * FRONT_END_RATIO + 0.05);
        let over = monthly_housing_cost(price + 10.0, 40_000.0, 7.0, 30.0, 1.1);
        assert!(over > 120_000.0 / 12.0 * FRONT_END_RATIO);
    }

    #[test]
    fn test_low_income_reports_floor() {
        let price = calculate_maximum_home_price(10_000.0, 0.0, 6.5, 30.0, 0.0, 1.1);
        assert_eq!(price, HOME_PRICE_FLOOR);
    }

    #[test]
    fn test_high_income_reaches_ceiling() {
        let price = calculate_maximum_home_price(10_000_000.0, 0.0, 6.5, 30.0, 0.0, 1.1);
        assert_eq!(price, HOME_PRICE_CEILING);
    }

    #[test]
    fn test_monthly_debts_do_not_change_result() {
        let without = calculate_maximum_home_price(90_000.0, 0.0, 6.0, 30.0, 20_000.0, 1.1);
        let with = calculate_maximum_home_price(90_000.0, 1_500.0, 6.0, 30.0, 20_000.0, 1.1);
        assert_eq!(without, with);
    }

    #[test]
    fn test_larger_down_payment_buys_more() {
        let small = calculate_maximum_home_price(100_000.0, 0.0, 6.5, 30.0, 20_000.0, 1.1);
        let large = calculate_maximum_home_price(100_000.0, 0.0, 6.5, 30.0, 100_000.0, 1.1);
        assert!(large > small);
    }
}
