//! Amortization engine
//!
//! Level-payment loan math and month-by-month payoff simulation. Rates are
//! annual percent units (`4.5` = 4.5%).

use crate::model::{AmortizationRow, MortgagePayoffResult};
use crate::money::{months_to_years, round_to_cents};

/// Months allowed beyond the nominal term before a payoff simulation gives up.
///
/// The scheduled payment is rounded to cents, so a loan can need one extra
/// installment to clear the last fraction of a cent. Payments too small to
/// cover interest never converge and stop here as well.
pub const PAYOFF_SAFETY_MARGIN_MONTHS: f64 = 1.0;

#[inline]
fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// Monthly payment on a fully amortizing loan, rounded to cents.
///
/// A zero rate splits the principal evenly across the term.
pub fn calculate_loan_payment(principal: f64, annual_rate_percent: f64, years: f64) -> f64 {
    let rate = monthly_rate(annual_rate_percent);
    let n = years * 12.0;

    if rate == 0.0 {
        return round_to_cents(principal / n);
    }

    round_to_cents(principal * rate / (1.0 - (1.0 + rate).powf(-n)))
}

/// Iteration cap for a payoff simulation of a `years`-long loan.
fn payoff_month_cap(years: f64) -> u32 {
    // NaN and negative terms saturate to zero installments
    (years * 12.0 + PAYOFF_SAFETY_MARGIN_MONTHS).ceil() as u32
}

/// Totals accumulated by one payoff simulation
#[derive(Debug, Clone, Copy)]
struct PayoffRun {
    months: u32,
    total_interest: f64,
}

/// Pay `payment` every month until the balance clears or `max_months` elapse.
///
/// The final installment is capped at the outstanding balance. Each installment
/// is reported through `on_installment` with unrounded amounts.
fn run_payoff(
    principal: f64,
    annual_rate_percent: f64,
    payment: f64,
    max_months: u32,
    mut on_installment: impl FnMut(AmortizationRow),
) -> PayoffRun {
    let rate = monthly_rate(annual_rate_percent);
    let mut balance = principal;
    let mut run = PayoffRun {
        months: 0,
        total_interest: 0.0,
    };

    while balance > 0.0 && run.months < max_months {
        let interest = balance * rate;
        let principal_paid = (payment - interest).min(balance);

        balance -= principal_paid;
        run.total_interest += interest;
        run.months += 1;

        on_installment(AmortizationRow {
            month: run.months,
            payment: interest + principal_paid,
            interest,
            principal: principal_paid,
            balance,
        });
    }

    run
}

/// Compare the regular payoff of a loan with one that adds
/// `extra_monthly_payment` of principal every month.
///
/// With no extra payment both schedules are identical, so the years match and
/// no interest is saved.
pub fn calculate_mortgage_payoff_savings(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    extra_monthly_payment: f64,
) -> MortgagePayoffResult {
    let payment = calculate_loan_payment(principal, annual_rate_percent, years);
    let max_months = payoff_month_cap(years);

    let original = run_payoff(principal, annual_rate_percent, payment, max_months, |_| {});
    let accelerated = run_payoff(
        principal,
        annual_rate_percent,
        payment + extra_monthly_payment,
        max_months,
        |_| {},
    );

    MortgagePayoffResult {
        original_years: months_to_years(original.months),
        new_years: months_to_years(accelerated.months),
        interest_saved: round_to_cents(original.total_interest - accelerated.total_interest),
    }
}

/// Month-by-month schedule of a loan, optionally with extra principal.
///
/// Uses the same simulation as [`calculate_mortgage_payoff_savings`], so the
/// row count always matches the months it reports.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    years: f64,
    extra_monthly_payment: f64,
) -> Vec<AmortizationRow> {
    let payment = calculate_loan_payment(principal, annual_rate_percent, years);
    let max_months = payoff_month_cap(years);

    let mut rows = Vec::new();
    run_payoff(
        principal,
        annual_rate_percent,
        payment + extra_monthly_payment,
        max_months,
        |row| {
            rows.push(AmortizationRow {
                month: row.month,
                payment: round_to_cents(row.payment),
                interest: round_to_cents(row.interest),
                principal: round_to_cents(row.principal),
                balance: round_to_cents(row.balance),
            })
        },
    );
    rows
}
