mod allocation;
mod payoff;

pub use allocation::PortfolioAllocation;
pub use payoff::{AmortizationRow, MortgagePayoffResult};
