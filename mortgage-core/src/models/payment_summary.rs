use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LoanParameters;
use crate::calculations::common::format_two_decimals;

/// What the user sees once a calculation succeeds: the three inputs they
/// entered and the resulting monthly payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub principal: Decimal,
    pub annual_interest_rate_percent: Decimal,
    pub term_years: Decimal,

    /// Number of monthly payments the term was truncated to.
    pub payment_count: u64,

    /// Unrounded monthly payment.
    pub monthly_payment: Decimal,
}

impl PaymentSummary {
    pub fn new(
        params: &LoanParameters,
        payment_count: u64,
        monthly_payment: Decimal,
    ) -> Self {
        Self {
            principal: params.principal,
            annual_interest_rate_percent: params.annual_interest_rate_percent,
            term_years: params.term_years,
            payment_count,
            monthly_payment,
        }
    }

    /// Monthly payment with exactly two decimals and a `.` separator.
    pub fn formatted_monthly_payment(&self) -> String {
        format_two_decimals(self.monthly_payment)
    }
}
