//! Fixed-round bisection for monotone feasibility problems
//!
//! The search assumes feasibility is monotone in the parameter: everything
//! below some threshold satisfies the constraint and everything above it
//! does not (e.g. a home price whose payment fits a budget).

/// Bisect `[low, high]` for `rounds` rounds and return the final lower bound.
///
/// Each round evaluates the midpoint: a feasible midpoint raises the lower
/// bound, an infeasible one lowers the upper bound. The lower bound is never
/// checked itself, so if nothing in the range is feasible the result is `low`.
pub fn bisect_max_feasible(
    low: f64,
    high: f64,
    rounds: u32,
    mut is_feasible: impl FnMut(f64) -> bool,
) -> f64 {
    let mut low = low;
    let mut high = high;

    for _ in 0..rounds {
        let mid = f64::midpoint(low, high);
        if is_feasible(mid) {
            low = mid;
        } else {
            high = mid;
        }
    }

    low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisect_converges_to_threshold() {
        let result = bisect_max_feasible(0.0, 100.0, 40, |x| x * x <= 2.0);
        assert!((result - 2f64.sqrt()).abs() < 1e-9);
        assert!(result * result <= 2.0);
    }

    #[test]
    fn test_bisect_all_feasible_approaches_high() {
        let result = bisect_max_feasible(0.0, 1.0, 30, |_| true);
        assert!(result < 1.0);
        assert!(1.0 - result < 1e-8);
    }

    #[test]
    fn test_bisect_nothing_feasible_returns_low() {
        assert_eq!(bisect_max_feasible(10.0, 20.0, 30, |_| false), 10.0);
    }

    #[test]
    fn test_bisect_zero_rounds() {
        assert_eq!(bisect_max_feasible(5.0, 50.0, 0, |_| true), 5.0);
    }

    #[test]
    fn test_bisect_evaluates_once_per_round() {
        let mut calls = 0;
        bisect_max_feasible(0.0, 1.0, 30, |_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 30);
    }
}
