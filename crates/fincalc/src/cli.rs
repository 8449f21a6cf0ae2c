//! Command-line interface
//!
//! Each calculator has a subcommand whose flags mirror its parameters; `run`
//! evaluates a whole scenario file.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fincalc_core::goal_seek::{DEFAULT_FREEDOM_GROWTH_RATE, DEFAULT_PROPERTY_TAX_RATE_PERCENT};
use fincalc_core::growth::DEFAULT_COMPOUNDS_PER_YEAR;
use fincalc_core::{Calculation, PortfolioAllocation, evaluate};

use crate::format::format_output;
use crate::scenario::Scenario;

#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(about = "Personal-finance calculators for household planning")]
pub struct Cli {
    /// Path to the data directory holding the log file (default: ~/.fincalc/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Grow a principal with compound interest
    Compound {
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        /// Annual rate in percent (6 = 6%)
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
        #[arg(long, default_value_t = DEFAULT_COMPOUNDS_PER_YEAR)]
        compounds_per_year: u32,
    },
    /// Project a value forward under annual inflation
    Inflation {
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// Annual inflation in percent; negative for deflation
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
    },
    /// Replay a sequence of annual returns
    Backtest {
        #[arg(long, allow_negative_numbers = true)]
        initial: f64,
        /// Comma-separated annual returns in percent, applied in order
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        returns: Vec<f64>,
    },
    /// Total growth of a US/international/bond portfolio
    ThreeFund {
        #[arg(long, allow_negative_numbers = true)]
        us_return: f64,
        #[arg(long, allow_negative_numbers = true)]
        intl_return: f64,
        #[arg(long, allow_negative_numbers = true)]
        bond_return: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
        /// US weight as a fraction
        #[arg(long, default_value_t = PortfolioAllocation::default().us, allow_negative_numbers = true)]
        us_weight: f64,
        /// International weight as a fraction
        #[arg(long, default_value_t = PortfolioAllocation::default().intl, allow_negative_numbers = true)]
        intl_weight: f64,
        /// Bond weight as a fraction
        #[arg(long, default_value_t = PortfolioAllocation::default().bonds, allow_negative_numbers = true)]
        bond_weight: f64,
    },
    /// Monthly payment on an amortizing loan
    Loan {
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
    },
    /// Time and interest saved by paying extra principal
    Payoff {
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        extra: f64,
    },
    /// Month-by-month amortization table
    Schedule {
        #[arg(long, allow_negative_numbers = true)]
        principal: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, allow_negative_numbers = true)]
        years: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        extra: f64,
    },
    /// Years until savings run out under steady expenses
    Freedom {
        #[arg(long, allow_negative_numbers = true)]
        savings: f64,
        #[arg(long, allow_negative_numbers = true)]
        monthly_expenses: f64,
        /// Annual growth as a fraction (0.04 = 4%)
        #[arg(long, default_value_t = DEFAULT_FREEDOM_GROWTH_RATE, allow_negative_numbers = true)]
        growth: f64,
    },
    /// Most expensive home an income can carry
    HomePrice {
        #[arg(long, allow_negative_numbers = true)]
        income: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        monthly_debts: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
        term: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        down_payment: f64,
        /// Annual property tax in percent of price
        #[arg(long, default_value_t = DEFAULT_PROPERTY_TAX_RATE_PERCENT, allow_negative_numbers = true)]
        property_tax: f64,
    },
    /// Project a 401(k) balance
    #[command(name = "401k")]
    Retirement401k {
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        balance: f64,
        #[arg(long, allow_negative_numbers = true)]
        contribution: f64,
        /// Employer match as a fraction of the contribution (0.5 = 50%)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        employer_match: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Return on investment in percent
    Roi {
        #[arg(long, allow_negative_numbers = true)]
        initial: f64,
        #[arg(long, allow_negative_numbers = true)]
        current: f64,
    },
    /// Convert an amount at an exchange rate
    Convert {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,
        #[arg(long, allow_negative_numbers = true)]
        rate: f64,
    },
    /// Evaluate every calculation in a YAML scenario file
    Run {
        scenario: PathBuf,
    },
}

impl Command {
    /// The calculator request for a single-calculation subcommand
    pub fn to_calculation(&self) -> Option<Calculation> {
        let calculation = match self.clone() {
            Command::Compound {
                principal,
                rate,
                years,
                compounds_per_year,
            } => Calculation::CompoundInterest {
                principal,
                annual_rate_percent: rate,
                years,
                compounds_per_year,
            },
            Command::Inflation { value, rate, years } => Calculation::InflationAdjustedValue {
                current_value: value,
                annual_inflation_percent: rate,
                years,
            },
            Command::Backtest { initial, returns } => Calculation::PortfolioBacktest {
                initial_investment: initial,
                annual_returns_percent: returns,
            },
            Command::ThreeFund {
                us_return,
                intl_return,
                bond_return,
                years,
                us_weight,
                intl_weight,
                bond_weight,
            } => Calculation::ThreeFundPortfolioReturn {
                us_return,
                intl_return,
                bond_return,
                years,
                allocation: PortfolioAllocation::new(us_weight, intl_weight, bond_weight),
            },
            Command::Loan {
                principal,
                rate,
                years,
            } => Calculation::LoanPayment {
                principal,
                annual_rate_percent: rate,
                years,
            },
            Command::Payoff {
                principal,
                rate,
                years,
                extra,
            } => Calculation::MortgagePayoffSavings {
                principal,
                annual_rate_percent: rate,
                years,
                extra_monthly_payment: extra,
            },
            Command::Schedule {
                principal,
                rate,
                years,
                extra,
            } => Calculation::AmortizationSchedule {
                principal,
                annual_rate_percent: rate,
                years,
                extra_monthly_payment: extra,
            },
            Command::Freedom {
                savings,
                monthly_expenses,
                growth,
            } => Calculation::FinancialFreedomYears {
                initial_savings: savings,
                monthly_expenses,
                annual_growth_rate: growth,
            },
            Command::HomePrice {
                income,
                monthly_debts,
                rate,
                term,
                down_payment,
                property_tax,
            } => Calculation::MaximumHomePrice {
                annual_income: income,
                monthly_debts,
                annual_rate_percent: rate,
                loan_term_years: term,
                down_payment,
                property_tax_rate_percent: property_tax,
            },
            Command::Retirement401k {
                balance,
                contribution,
                employer_match,
                rate,
                years,
            } => Calculation::Retirement401kBalance {
                current_balance: balance,
                annual_contribution: contribution,
                employer_match_rate: employer_match,
                annual_return_percent: rate,
                years,
            },
            Command::Roi { initial, current } => Calculation::Roi {
                initial_investment: initial,
                current_value: current,
            },
            Command::Convert { amount, rate } => Calculation::CurrencyConversion { amount, rate },
            Command::Run { .. } => return None,
        };

        Some(calculation)
    }
}

/// Evaluate one calculation and print its result
fn run_single(calculation: &Calculation, out: &mut impl Write) -> color_eyre::Result<()> {
    tracing::debug!(calculation = calculation.name(), "Evaluating calculation");

    let output = evaluate(calculation).inspect_err(|e| {
        tracing::warn!(calculation = calculation.name(), error = %e, "Calculation rejected");
    })?;

    writeln!(out, "{}", format_output(calculation, &output))?;
    Ok(())
}

/// Evaluate a scenario file, printing one line per entry.
///
/// Failing entries are reported inline; the rest of the batch still runs.
/// Returns the number of failed entries.
fn run_scenario(path: &std::path::Path, out: &mut impl Write) -> color_eyre::Result<usize> {
    let scenario = Scenario::load(path)?;
    tracing::info!(
        scenario = %scenario.name,
        calculations = scenario.calculations.len(),
        "Evaluating scenario"
    );

    writeln!(out, "{}", scenario.name)?;

    let mut failures = 0;
    for (entry, result) in scenario.calculations.iter().zip(scenario.evaluate()) {
        match result {
            Ok(output) => writeln!(
                out,
                "  {}: {}",
                entry.display_label(),
                format_output(&entry.calculation, &output)
            )?,
            Err(e) => {
                failures += 1;
                tracing::warn!(
                    scenario = %scenario.name,
                    label = entry.display_label(),
                    error = %e,
                    "Scenario calculation failed"
                );
                writeln!(out, "  {}: error: {}", entry.display_label(), e)?;
            }
        }
    }

    Ok(failures)
}

/// Execute a parsed command, writing results to `out`
pub fn execute(command: &Command, out: &mut impl Write) -> color_eyre::Result<()> {
    match command {
        Command::Run { scenario } => {
            let failures = run_scenario(scenario, out)?;
            if failures > 0 {
                tracing::info!(failures, "Scenario finished with failures");
            }
            Ok(())
        }
        other => match other.to_calculation() {
            Some(calculation) => run_single(&calculation, out),
            None => Ok(()),
        },
    }
}
