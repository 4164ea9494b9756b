use serde::{Deserialize, Serialize};

/// Every piece of user-visible text the session can ask a presenter to show.
///
/// The core never holds display strings itself; presenters resolve a key to
/// text, either through [`MessageKey::default_text`] or their own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    PromptPrincipal,
    PromptInterestRate,
    PromptMortgagePeriod,
    EmptyInputError,
    InvalidCalculationError,
    Next,
    Calculate,
    MortgageOverview,
    SummaryPrincipal,
    SummaryInterest,
    SummaryMortgage,
    SummaryResult,
    MonthlyPayment,
    Percent,
    Years,
    Recalculate,
    Quit,
}

impl MessageKey {
    pub const ALL: [MessageKey; 17] = [
        Self::PromptPrincipal,
        Self::PromptInterestRate,
        Self::PromptMortgagePeriod,
        Self::EmptyInputError,
        Self::InvalidCalculationError,
        Self::Next,
        Self::Calculate,
        Self::MortgageOverview,
        Self::SummaryPrincipal,
        Self::SummaryInterest,
        Self::SummaryMortgage,
        Self::SummaryResult,
        Self::MonthlyPayment,
        Self::Percent,
        Self::Years,
        Self::Recalculate,
        Self::Quit,
    ];

    /// Stable snake_case identifier, used as the key in string-table overrides.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PromptPrincipal => "prompt_principal",
            Self::PromptInterestRate => "prompt_interest_rate",
            Self::PromptMortgagePeriod => "prompt_mortgage_period",
            Self::EmptyInputError => "empty_input_error",
            Self::InvalidCalculationError => "invalid_calculation_error",
            Self::Next => "next",
            Self::Calculate => "calculate",
            Self::MortgageOverview => "mortgage_overview",
            Self::SummaryPrincipal => "summary_principal",
            Self::SummaryInterest => "summary_interest",
            Self::SummaryMortgage => "summary_mortgage",
            Self::SummaryResult => "summary_result",
            Self::MonthlyPayment => "monthly_payment",
            Self::Percent => "percent",
            Self::Years => "years",
            Self::Recalculate => "recalculate",
            Self::Quit => "quit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }

    /// Built-in English text for this key.
    pub fn default_text(&self) -> &'static str {
        match self {
            Self::PromptPrincipal => "Enter Principal Amount ($)",
            Self::PromptInterestRate => "Enter Interest Rate (%)",
            Self::PromptMortgagePeriod => "Enter Mortgage Period (Years)",
            Self::EmptyInputError => "Please enter a valid number",
            Self::InvalidCalculationError => "Invalid input, please recalculate",
            Self::Next => "Next",
            Self::Calculate => "Calculate My Mortgage",
            Self::MortgageOverview => "Mortgage Overview",
            Self::SummaryPrincipal => "Principal: $",
            Self::SummaryInterest => "Interest Rate:",
            Self::SummaryMortgage => "Mortgage Period:",
            Self::SummaryResult => "Monthly Payment: $",
            Self::MonthlyPayment => "Your monthly payment is $",
            Self::Percent => "%",
            Self::Years => "years",
            Self::Recalculate => "Recalculate",
            Self::Quit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parse_round_trips_every_key() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert_eq!(MessageKey::parse("prompt_down_payment"), None);
    }

    #[test]
    fn identifiers_are_unique() {
        let ids: HashSet<_> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();

        assert_eq!(ids.len(), MessageKey::ALL.len());
    }
}
