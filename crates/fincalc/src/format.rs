//! Text rendering of calculation results

use fincalc_core::{AmortizationRow, Calculation, CalculationOutput, MortgagePayoffResult, OutputUnit};

/// Group the digits of a whole number with commas
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a currency value with thousands separators, e.g. `$1,520.06`
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let total_cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };

    format!(
        "{sign}${}.{:02}",
        group_thousands(total_cents / 100),
        total_cents % 100
    )
}

/// Format a value already in percent units, e.g. `20.00%`
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Format a duration in years, e.g. `13.50 years`
pub fn format_years(value: f64) -> String {
    format!("{value:.2} years")
}

fn format_amount(value: f64, unit: OutputUnit) -> String {
    match unit {
        OutputUnit::Currency => format_currency(value),
        OutputUnit::Percent => format_percent(value),
        OutputUnit::Years => format_years(value),
    }
}

fn format_payoff(result: &MortgagePayoffResult) -> String {
    format!(
        "original payoff {}, new payoff {} ({} sooner), interest saved {}",
        format_years(result.original_years),
        format_years(result.new_years),
        format_years(result.years_saved()),
        format_currency(result.interest_saved)
    )
}

/// Render an amortization schedule as an aligned table
pub fn format_schedule(rows: &[AmortizationRow]) -> String {
    let mut table = format!(
        "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}\n",
        "Month", "Payment", "Interest", "Principal", "Balance"
    );
    for row in rows {
        table.push_str(&format!(
            "{:>5}  {:>14}  {:>14}  {:>14}  {:>16}\n",
            row.month,
            format_currency(row.payment),
            format_currency(row.interest),
            format_currency(row.principal),
            format_currency(row.balance)
        ));
    }
    table
}

/// Render the output of `calculation` for display
pub fn format_output(calculation: &Calculation, output: &CalculationOutput) -> String {
    match output {
        CalculationOutput::Amount(value) => format_amount(*value, calculation.unit()),
        CalculationOutput::MortgagePayoff(result) => format_payoff(result),
        CalculationOutput::Schedule(rows) => {
            let total_interest: f64 = rows.iter().map(|r| r.interest).sum();
            format!(
                "{} installments, total interest {}\n{}",
                rows.len(),
                format_currency(total_interest),
                format_schedule(rows).trim_end()
            )
        }
    }
}
