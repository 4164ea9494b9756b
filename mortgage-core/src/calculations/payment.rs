//! Monthly mortgage payment calculation.
//!
//! Implements the standard amortization formula
//!
//! ```text
//! M = P * r * (1 + r)^n / ((1 + r)^n - 1)
//! ```
//!
//! where `r` is the monthly rate (`annual percent / 100 / 12`) and `n` is the
//! number of monthly payments (`term_years * 12`, truncated toward zero).
//! An interest-free loan (`r == 0`) is simply `P / n`.
//!
//! All arithmetic is checked. A configuration that cannot produce a finite
//! amount (no payments, overflow, a growth factor that collapses to one) is
//! reported as a [`PaymentError`] rather than a panic.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::calculations::{monthly_payment, common::round_half_up};
//!
//! let payment = monthly_payment(dec!(200000), dec!(6.0), dec!(30)).unwrap();
//!
//! assert_eq!(round_half_up(payment), dec!(1199.10));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use thiserror::Error;
use tracing::debug;

use crate::models::LoanParameters;

const MONTHS_PER_YEAR: u64 = 12;

/// Errors that mean the inputs do not yield a finite monthly payment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// The mortgage period truncates to zero monthly payments.
    #[error("a mortgage period of {0} years yields no monthly payments")]
    NoPayments(Decimal),

    /// The mortgage period cannot be expressed as a payment count.
    #[error("a mortgage period of {0} years is out of range")]
    TermOutOfRange(Decimal),

    /// An intermediate value exceeded the representable range.
    #[error("monthly payment overflowed")]
    Overflow,

    /// The rate is so small that `(1 + r)^n - 1` is zero.
    #[error("interest rate of {0}% is too small to amortize")]
    DegenerateRate(Decimal),
}

/// Number of monthly payments for a term in years.
///
/// Fractional months are truncated toward zero, so 1.99 years is 23
/// payments, not 24.
pub fn payment_count(term_years: Decimal) -> Result<u64, PaymentError> {
    term_years
        .checked_mul(Decimal::from(MONTHS_PER_YEAR))
        .map(|months| months.trunc())
        .and_then(|months| months.to_u64())
        .ok_or(PaymentError::TermOutOfRange(term_years))
}

/// Converts an annual percentage rate into a monthly decimal rate.
pub fn monthly_rate(annual_interest_rate_percent: Decimal) -> Decimal {
    annual_interest_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(MONTHS_PER_YEAR)
}

/// Calculates the monthly payment for the given loan.
///
/// Callers are expected to pass `principal >= 0`, `rate >= 0` and
/// `term_years > 0`; no range validation happens here.
///
/// # Errors
///
/// Returns [`PaymentError`] whenever the result would not be a finite amount.
pub fn monthly_payment(
    principal: Decimal,
    annual_interest_rate_percent: Decimal,
    term_years: Decimal,
) -> Result<Decimal, PaymentError> {
    let rate = monthly_rate(annual_interest_rate_percent);
    let count = payment_count(term_years)?;

    if count == 0 {
        return Err(PaymentError::NoPayments(term_years));
    }
    let n = Decimal::from(count);

    if rate.is_zero() {
        return principal.checked_div(n).ok_or(PaymentError::Overflow);
    }

    let growth = (Decimal::ONE + rate)
        .checked_powu(count)
        .ok_or(PaymentError::Overflow)?;

    let numerator = principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(growth))
        .ok_or(PaymentError::Overflow)?;

    let denominator = growth
        .checked_sub(Decimal::ONE)
        .ok_or(PaymentError::Overflow)?;

    if denominator.is_zero() {
        return Err(PaymentError::DegenerateRate(annual_interest_rate_percent));
    }

    let payment = numerator
        .checked_div(denominator)
        .ok_or(PaymentError::Overflow)?;

    debug!(%principal, %annual_interest_rate_percent, %term_years, count, %payment, "computed monthly payment");

    Ok(payment)
}

/// A way of turning loan inputs into a monthly payment.
pub trait PaymentFormula {
    fn monthly_payment(
        &self,
        principal: Decimal,
        annual_interest_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Result<Decimal, PaymentError>;
}

/// The standard fixed-rate amortization formula, see [`monthly_payment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amortization;

impl PaymentFormula for Amortization {
    fn monthly_payment(
        &self,
        principal: Decimal,
        annual_interest_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Result<Decimal, PaymentError> {
        monthly_payment(principal, annual_interest_rate_percent, term_years)
    }
}

/// Holds the parameters entered so far and computes the payment from them.
///
/// The stored values are convenience accessors so that a controller can
/// re-read what the user already entered; the calculation itself is pure.
#[derive(Debug, Clone, Default)]
pub struct MonthlyPaymentCalculator<F = Amortization> {
    params: LoanParameters,
    formula: F,
}

impl MonthlyPaymentCalculator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: PaymentFormula> MonthlyPaymentCalculator<F> {
    pub fn with_formula(formula: F) -> Self {
        Self {
            params: LoanParameters::default(),
            formula,
        }
    }

    pub fn formula(&self) -> &F {
        &self.formula
    }

    pub fn params(&self) -> &LoanParameters {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut LoanParameters {
        &mut self.params
    }

    pub fn principal(&self) -> Decimal {
        self.params.principal
    }

    pub fn set_principal(&mut self, principal: Decimal) {
        self.params.principal = principal;
    }

    pub fn interest_rate(&self) -> Decimal {
        self.params.annual_interest_rate_percent
    }

    pub fn set_interest_rate(&mut self, rate: Decimal) {
        self.params.annual_interest_rate_percent = rate;
    }

    pub fn mortgage_period(&self) -> Decimal {
        self.params.term_years
    }

    pub fn set_mortgage_period(&mut self, term_years: Decimal) {
        self.params.term_years = term_years;
    }

    /// Calculates the payment for explicit inputs, ignoring the stored ones.
    pub fn calculate_monthly_payment(
        &self,
        principal: Decimal,
        annual_interest_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Result<Decimal, PaymentError> {
        self.formula
            .monthly_payment(principal, annual_interest_rate_percent, term_years)
    }

    /// Calculates the payment for the stored inputs.
    pub fn calculate(&self) -> Result<Decimal, PaymentError> {
        self.calculate_monthly_payment(
            self.params.principal,
            self.params.annual_interest_rate_percent,
            self.params.term_years,
        )
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }
}
