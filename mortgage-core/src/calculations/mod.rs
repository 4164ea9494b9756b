//! Mortgage payment calculation modules.
//!
//! This module provides the amortization calculator and the rounding and
//! formatting helpers its results are presented with.

pub mod common;
pub mod payment;

pub use payment::{
    Amortization, MonthlyPaymentCalculator, PaymentError, PaymentFormula, monthly_payment,
    monthly_rate, payment_count,
};
