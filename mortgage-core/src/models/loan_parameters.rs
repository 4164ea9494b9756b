use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The loan parameter a given input step writes to.
///
/// The position of each variant is the fixed cursor mapping used by the
/// session: index 0 is the principal, 1 the rate, 2 the mortgage period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanField {
    Principal,
    InterestRate,
    MortgagePeriod,
}

impl LoanField {
    pub const COUNT: usize = 3;

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Principal),
            1 => Some(Self::InterestRate),
            2 => Some(Self::MortgagePeriod),
            _ => None,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Principal => 0,
            Self::InterestRate => 1,
            Self::MortgagePeriod => 2,
        }
    }

    /// Whether this is the field whose submission triggers the calculation.
    pub fn is_last(&self) -> bool {
        self.index() == Self::COUNT - 1
    }
}

/// Inputs of a single mortgage calculation.
///
/// Starts zeroed and is filled one field at a time as the user works through
/// the prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Borrowed amount.
    pub principal: Decimal,

    /// Annual interest rate in percent; zero means an interest-free loan.
    pub annual_interest_rate_percent: Decimal,

    /// Loan duration in years.
    pub term_years: Decimal,
}

impl LoanParameters {
    pub fn new(
        principal: Decimal,
        annual_interest_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Self {
        Self {
            principal,
            annual_interest_rate_percent,
            term_years,
        }
    }

    pub fn set(&mut self, field: LoanField, value: Decimal) {
        match field {
            LoanField::Principal => self.principal = value,
            LoanField::InterestRate => self.annual_interest_rate_percent = value,
            LoanField::MortgagePeriod => self.term_years = value,
        }
    }

    /// Zero every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
