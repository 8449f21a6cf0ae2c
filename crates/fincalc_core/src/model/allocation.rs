use serde::{Deserialize, Serialize};

/// Fractional weights of a three-fund portfolio.
///
/// Weights are fractions (`0.4` = 40%), not percents. They are used as given;
/// nothing checks that they sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub us: f64,
    pub intl: f64,
    pub bonds: f64,
}

impl PortfolioAllocation {
    pub const fn new(us: f64, intl: f64, bonds: f64) -> Self {
        Self { us, intl, bonds }
    }

    /// Weighted average of per-fund annual returns (percent units in, percent out).
    pub fn blended_return(&self, us_return: f64, intl_return: f64, bond_return: f64) -> f64 {
        us_return * self.us + intl_return * self.intl + bond_return * self.bonds
    }
}

impl Default for PortfolioAllocation {
    /// 40% US stocks, 20% international stocks, 40% bonds
    fn default() -> Self {
        Self::new(0.4, 0.2, 0.4)
    }
}
