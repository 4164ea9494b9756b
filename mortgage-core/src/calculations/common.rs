//! Common utility functions for payment calculations.
//!
//! This module provides the rounding and formatting shared by the calculator
//! and the summary model.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1199.1010503)), dec!(1199.10));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly two decimal places and a `.` separator,
/// independent of any locale.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::format_two_decimals;
///
/// assert_eq!(format_two_decimals(dec!(100)), "100.00");
/// assert_eq!(format_two_decimals(dec!(1199.1010503)), "1199.10");
/// ```
pub fn format_two_decimals(value: Decimal) -> String {
    // `rescale` cannot add digits past 28 significant ones; precision padding can.
    format!("{:.2}", round_half_up(value))
}
