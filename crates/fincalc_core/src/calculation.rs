//! Calculation requests
//!
//! A serializable description of a single calculator call, so front ends can
//! store calculations in scenario files and evaluate them in batches. Field
//! names follow the calculator parameters, including their percent/fraction
//! suffixes. Optional fields fall back to the calculators' documented defaults.

use serde::{Deserialize, Serialize};

use crate::amortization::{
    amortization_schedule, calculate_loan_payment, calculate_mortgage_payoff_savings,
};
use crate::error::Result;
use crate::goal_seek::{
    DEFAULT_FREEDOM_GROWTH_RATE, DEFAULT_PROPERTY_TAX_RATE_PERCENT,
    calculate_financial_freedom_years, calculate_maximum_home_price,
};
use crate::growth::{
    DEFAULT_COMPOUNDS_PER_YEAR, calculate_compound_interest, calculate_inflation_adjusted_value,
    calculate_portfolio_backtest, calculate_three_fund_portfolio_return,
};
use crate::model::{AmortizationRow, MortgagePayoffResult, PortfolioAllocation};
use crate::retirement::calculate_401k_balance;
use crate::transforms::{calculate_roi, convert_currency};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn default_compounds_per_year() -> u32 {
    DEFAULT_COMPOUNDS_PER_YEAR
}

fn default_freedom_growth_rate() -> f64 {
    DEFAULT_FREEDOM_GROWTH_RATE
}

fn default_property_tax_rate_percent() -> f64 {
    DEFAULT_PROPERTY_TAX_RATE_PERCENT
}

/// One calculator invocation with its inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Calculation {
    CompoundInterest {
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
        #[serde(default = "default_compounds_per_year")]
        compounds_per_year: u32,
    },
    InflationAdjustedValue {
        current_value: f64,
        annual_inflation_percent: f64,
        years: f64,
    },
    PortfolioBacktest {
        initial_investment: f64,
        #[serde(default)]
        annual_returns_percent: Vec<f64>,
    },
    ThreeFundPortfolioReturn {
        us_return: f64,
        intl_return: f64,
        bond_return: f64,
        years: f64,
        #[serde(default)]
        allocation: PortfolioAllocation,
    },
    LoanPayment {
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
    },
    MortgagePayoffSavings {
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
        #[serde(default)]
        extra_monthly_payment: f64,
    },
    AmortizationSchedule {
        principal: f64,
        annual_rate_percent: f64,
        years: f64,
        #[serde(default)]
        extra_monthly_payment: f64,
    },
    FinancialFreedomYears {
        initial_savings: f64,
        monthly_expenses: f64,
        /// Fraction, not percent
        #[serde(default = "default_freedom_growth_rate")]
        annual_growth_rate: f64,
    },
    MaximumHomePrice {
        annual_income: f64,
        #[serde(default)]
        monthly_debts: f64,
        annual_rate_percent: f64,
        loan_term_years: f64,
        #[serde(default)]
        down_payment: f64,
        #[serde(default = "default_property_tax_rate_percent")]
        property_tax_rate_percent: f64,
    },
    #[serde(rename = "retirement_401k_balance")]
    Retirement401kBalance {
        #[serde(default)]
        current_balance: f64,
        annual_contribution: f64,
        /// Fraction of the contribution, not percent
        #[serde(default)]
        employer_match_rate: f64,
        annual_return_percent: f64,
        years: u32,
    },
    Roi {
        initial_investment: f64,
        current_value: f64,
    },
    CurrencyConversion {
        amount: f64,
        rate: f64,
    },
}

/// Value produced by evaluating a [`Calculation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationOutput {
    /// A currency amount, percentage, or duration depending on the calculator
    Amount(f64),
    MortgagePayoff(MortgagePayoffResult),
    Schedule(Vec<AmortizationRow>),
}

/// How a scalar [`CalculationOutput::Amount`] should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputUnit {
    Currency,
    Percent,
    Years,
}

impl Calculation {
    /// Stable short label for logs and display
    pub fn name(&self) -> &'static str {
        match self {
            Calculation::CompoundInterest { .. } => "compound_interest",
            Calculation::InflationAdjustedValue { .. } => "inflation_adjusted_value",
            Calculation::PortfolioBacktest { .. } => "portfolio_backtest",
            Calculation::ThreeFundPortfolioReturn { .. } => "three_fund_portfolio_return",
            Calculation::LoanPayment { .. } => "loan_payment",
            Calculation::MortgagePayoffSavings { .. } => "mortgage_payoff_savings",
            Calculation::AmortizationSchedule { .. } => "amortization_schedule",
            Calculation::FinancialFreedomYears { .. } => "financial_freedom_years",
            Calculation::MaximumHomePrice { .. } => "maximum_home_price",
            Calculation::Retirement401kBalance { .. } => "retirement_401k_balance",
            Calculation::Roi { .. } => "roi",
            Calculation::CurrencyConversion { .. } => "currency_conversion",
        }
    }

    /// Unit of the scalar result, for calculators that return one
    pub fn unit(&self) -> OutputUnit {
        match self {
            Calculation::ThreeFundPortfolioReturn { .. } | Calculation::Roi { .. } => {
                OutputUnit::Percent
            }
            Calculation::FinancialFreedomYears { .. } => OutputUnit::Years,
            _ => OutputUnit::Currency,
        }
    }
}

/// Run a single calculation
pub fn evaluate(calculation: &Calculation) -> Result<CalculationOutput> {
    let output = match calculation {
        Calculation::CompoundInterest {
            principal,
            annual_rate_percent,
            years,
            compounds_per_year,
        } => CalculationOutput::Amount(calculate_compound_interest(
            *principal,
            *annual_rate_percent,
            *years,
            *compounds_per_year,
        )),
        Calculation::InflationAdjustedValue {
            current_value,
            annual_inflation_percent,
            years,
        } => CalculationOutput::Amount(calculate_inflation_adjusted_value(
            *current_value,
            *annual_inflation_percent,
            *years,
        )),
        Calculation::PortfolioBacktest {
            initial_investment,
            annual_returns_percent,
        } => CalculationOutput::Amount(calculate_portfolio_backtest(
            *initial_investment,
            annual_returns_percent,
        )),
        Calculation::ThreeFundPortfolioReturn {
            us_return,
            intl_return,
            bond_return,
            years,
            allocation,
        } => CalculationOutput::Amount(calculate_three_fund_portfolio_return(
            *us_return,
            *intl_return,
            *bond_return,
            *years,
            allocation,
        )),
        Calculation::LoanPayment {
            principal,
            annual_rate_percent,
            years,
        } => CalculationOutput::Amount(calculate_loan_payment(
            *principal,
            *annual_rate_percent,
            *years,
        )),
        Calculation::MortgagePayoffSavings {
            principal,
            annual_rate_percent,
            years,
            extra_monthly_payment,
        } => CalculationOutput::MortgagePayoff(calculate_mortgage_payoff_savings(
            *principal,
            *annual_rate_percent,
            *years,
            *extra_monthly_payment,
        )),
        Calculation::AmortizationSchedule {
            principal,
            annual_rate_percent,
            years,
            extra_monthly_payment,
        } => CalculationOutput::Schedule(amortization_schedule(
            *principal,
            *annual_rate_percent,
            *years,
            *extra_monthly_payment,
        )),
        Calculation::FinancialFreedomYears {
            initial_savings,
            monthly_expenses,
            annual_growth_rate,
        } => CalculationOutput::Amount(calculate_financial_freedom_years(
            *initial_savings,
            *monthly_expenses,
            *annual_growth_rate,
        )?),
        Calculation::MaximumHomePrice {
            annual_income,
            monthly_debts,
            annual_rate_percent,
            loan_term_years,
            down_payment,
            property_tax_rate_percent,
        } => CalculationOutput::Amount(calculate_maximum_home_price(
            *annual_income,
            *monthly_debts,
            *annual_rate_percent,
            *loan_term_years,
            *down_payment,
            *property_tax_rate_percent,
        )),
        Calculation::Retirement401kBalance {
            current_balance,
            annual_contribution,
            employer_match_rate,
            annual_return_percent,
            years,
        } => CalculationOutput::Amount(calculate_401k_balance(
            *current_balance,
            *annual_contribution,
            *employer_match_rate,
            *annual_return_percent,
            *years,
        )),
        Calculation::Roi {
            initial_investment,
            current_value,
        } => CalculationOutput::Amount(calculate_roi(*initial_investment, *current_value)?),
        Calculation::CurrencyConversion { amount, rate } => {
            CalculationOutput::Amount(convert_currency(*amount, *rate))
        }
    };

    Ok(output)
}

/// Run a batch of calculations in parallel, returning results in request order.
///
/// A failing calculation does not affect the others.
#[cfg(feature = "parallel")]
pub fn evaluate_all(calculations: &[Calculation]) -> Vec<Result<CalculationOutput>> {
    calculations.par_iter().map(evaluate).collect()
}

/// Run a batch of calculations, returning results in request order.
///
/// A failing calculation does not affect the others.
#[cfg(not(feature = "parallel"))]
pub fn evaluate_all(calculations: &[Calculation]) -> Vec<Result<CalculationOutput>> {
    calculations.iter().map(evaluate).collect()
}
