//! Tests for calculation requests and batch evaluation

use crate::calculation::{Calculation, CalculationOutput, OutputUnit, evaluate, evaluate_all};
use crate::error::CalcError;
use crate::model::PortfolioAllocation;

fn loan(principal: f64) -> Calculation {
    Calculation::LoanPayment {
        principal,
        annual_rate_percent: 4.5,
        years: 30.0,
    }
}

#[test]
fn test_evaluate_scalar_calculator() {
    let output = evaluate(&loan(300_000.0)).unwrap();
    assert_eq!(output, CalculationOutput::Amount(1_520.06));
}

#[test]
fn test_evaluate_payoff_returns_record() {
    let output = evaluate(&Calculation::MortgagePayoffSavings {
        principal: 300_000.0,
        annual_rate_percent: 4.5,
        years: 30.0,
        extra_monthly_payment: 0.0,
    })
    .unwrap();

    match output {
        CalculationOutput::MortgagePayoff(result) => {
            assert_eq!(result.original_years, 30.0);
            assert_eq!(result.new_years, 30.0);
            assert_eq!(result.interest_saved, 0.0);
        }
        other => panic!("expected payoff result, got {other:?}"),
    }
}

#[test]
fn test_evaluate_schedule_returns_rows() {
    let output = evaluate(&Calculation::AmortizationSchedule {
        principal: 12_000.0,
        annual_rate_percent: 0.0,
        years: 1.0,
        extra_monthly_payment: 0.0,
    })
    .unwrap();

    match output {
        CalculationOutput::Schedule(rows) => {
            assert_eq!(rows.len(), 12);
            assert!(rows.iter().all(|r| r.payment == 1_000.0));
        }
        other => panic!("expected schedule, got {other:?}"),
    }
}

#[test]
fn test_evaluate_propagates_guard_errors() {
    let err = evaluate(&Calculation::Roi {
        initial_investment: 0.0,
        current_value: 10.0,
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidArgument { .. }));

    let err = evaluate(&Calculation::FinancialFreedomYears {
        initial_savings: 1_000.0,
        monthly_expenses: 0.0,
        annual_growth_rate: 0.04,
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidArgument { .. }));
}

#[test]
fn test_evaluate_all_preserves_order_and_isolates_errors() {
    let batch = vec![
        loan(100_000.0),
        Calculation::Roi {
            initial_investment: 0.0,
            current_value: 5.0,
        },
        Calculation::CurrencyConversion {
            amount: 100.0,
            rate: 0.85,
        },
        loan(300_000.0),
    ];

    let results = evaluate_all(&batch);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0], Ok(CalculationOutput::Amount(506.69)));
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok(CalculationOutput::Amount(85.0)));
    assert_eq!(results[3], Ok(CalculationOutput::Amount(1_520.06)));
}

#[test]
fn test_evaluate_all_empty_batch() {
    assert!(evaluate_all(&[]).is_empty());
}

#[test]
fn test_evaluate_all_matches_sequential() {
    let batch: Vec<Calculation> = (1..=64)
        .map(|i| Calculation::CompoundInterest {
            principal: 1_000.0 * f64::from(i),
            annual_rate_percent: 5.0,
            years: 10.0,
            compounds_per_year: 12,
        })
        .collect();

    let sequential: Vec<_> = batch.iter().map(evaluate).collect();
    assert_eq!(evaluate_all(&batch), sequential);
}

#[test]
fn test_names_and_units() {
    assert_eq!(loan(1.0).name(), "loan_payment");
    assert_eq!(loan(1.0).unit(), OutputUnit::Currency);

    let three_fund = Calculation::ThreeFundPortfolioReturn {
        us_return: 10.0,
        intl_return: 8.0,
        bond_return: 4.0,
        years: 10.0,
        allocation: PortfolioAllocation::default(),
    };
    assert_eq!(three_fund.name(), "three_fund_portfolio_return");
    assert_eq!(three_fund.unit(), OutputUnit::Percent);

    let freedom = Calculation::FinancialFreedomYears {
        initial_savings: 1.0,
        monthly_expenses: 1.0,
        annual_growth_rate: 0.0,
    };
    assert_eq!(freedom.unit(), OutputUnit::Years);

    let k401 = Calculation::Retirement401kBalance {
        current_balance: 0.0,
        annual_contribution: 1.0,
        employer_match_rate: 0.0,
        annual_return_percent: 0.0,
        years: 1,
    };
    assert_eq!(k401.name(), "retirement_401k_balance");
}
