//! Goal-seeking solvers
//!
//! Calculators that search for an input rather than evaluate a closed form:
//! how long savings last under steady withdrawals, and how expensive a home a
//! given income can carry. Both loops are bounded by named constants so every
//! call terminates.

mod binary_search;
mod freedom;
mod home_price;

pub use binary_search::bisect_max_feasible;
pub use freedom::{
    DEFAULT_FREEDOM_GROWTH_RATE, FREEDOM_HORIZON_MONTHS, calculate_financial_freedom_years,
};
pub use home_price::{
    DEFAULT_PROPERTY_TAX_RATE_PERCENT, FRONT_END_RATIO, HOME_PRICE_CEILING, HOME_PRICE_FLOOR,
    HOME_PRICE_SEARCH_ITERATIONS, calculate_maximum_home_price,
};
