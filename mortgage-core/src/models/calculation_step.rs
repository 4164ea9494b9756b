use serde::{Deserialize, Serialize};

use super::{LoanField, MessageKey};

/// One input-collection stage: the prompt to show and the field it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    pub prompt: MessageKey,
    pub field: LoanField,
}

impl CalculationStep {
    pub const fn new(prompt: MessageKey, field: LoanField) -> Self {
        Self { prompt, field }
    }
}

/// The fixed, ordered prompts of every session.
pub const CALCULATION_STEPS: [CalculationStep; LoanField::COUNT] = [
    CalculationStep::new(MessageKey::PromptPrincipal, LoanField::Principal),
    CalculationStep::new(MessageKey::PromptInterestRate, LoanField::InterestRate),
    CalculationStep::new(MessageKey::PromptMortgagePeriod, LoanField::MortgagePeriod),
];
