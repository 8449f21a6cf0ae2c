use std::fmt;

/// Errors raised by calculators that guard their inputs.
///
/// Only the financial-freedom runway and ROI validate arguments. Every other
/// calculator lets non-finite values flow through to its result.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    InvalidArgument {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CalcError {
    pub(crate) fn invalid(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        CalcError::InvalidArgument {
            parameter,
            value,
            reason,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidArgument {
                parameter,
                value,
                reason,
            } => write!(f, "invalid {parameter} ({value}): {reason}"),
        }
    }
}

impl std::error::Error for CalcError {}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = CalcError::invalid("monthly_expenses", 0.0, "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid monthly_expenses (0): must be greater than zero"
        );
    }
}
