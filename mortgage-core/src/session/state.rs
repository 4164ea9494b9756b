//! Session state for a single mortgage calculation.
//!
//! [`MortgageSession`] owns the loan parameters entered so far, the step
//! cursor and the phase of the session. It exposes typed operations
//! (`advance`, `submit`, `reset`) and a command handler that turns those
//! operations into [`Effect`]s for whatever presenter is attached.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::effect::{Command, Effect};
use super::input::{ParseInputError, parse_input};
use super::sequencer::{Advance, StepSequencer};
use crate::calculations::{
    Amortization, MonthlyPaymentCalculator, PaymentError, PaymentFormula, payment_count,
};
use crate::models::{CalculationStep, LoanParameters, MessageKey, PaymentSummary};

/// Recoverable, user-visible session failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The submitted text is empty, not a number, or negative.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ParseInputError),

    /// The collected parameters do not yield a finite payment.
    #[error("invalid calculation: {0}")]
    InvalidCalculation(#[from] PaymentError),

    /// Input was submitted while no prompt is active.
    #[error("no input is being collected")]
    NotCollecting,
}

impl SessionError {
    /// The message a presenter should show for this error.
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::InvalidInput(_) | Self::NotCollecting => MessageKey::EmptyInputError,
            Self::InvalidCalculation(_) => MessageKey::InvalidCalculationError,
        }
    }
}

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Prompts are being answered.
    Collecting,
    /// All inputs were given but no finite payment came out of them.
    /// Only [`MortgageSession::reset`] leaves this phase.
    CalculationFailed,
    /// A payment was computed. Only [`MortgageSession::reset`] leaves this phase.
    Review(PaymentSummary),
}

/// Result of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The value was stored and the sequencer moved on.
    Advanced(Advance),
    /// The last value was stored and the payment computed.
    Review(PaymentSummary),
}

/// One in-progress mortgage calculation.
#[derive(Debug, Clone)]
pub struct MortgageSession<F = Amortization> {
    calculator: MonthlyPaymentCalculator<F>,
    sequencer: StepSequencer,
    phase: SessionPhase,
}

impl Default for MortgageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MortgageSession {
    pub fn new() -> Self {
        Self::with_formula(Amortization)
    }
}

impl<F: PaymentFormula> MortgageSession<F> {
    pub fn with_formula(formula: F) -> Self {
        Self {
            calculator: MonthlyPaymentCalculator::with_formula(formula),
            sequencer: StepSequencer::new(),
            phase: SessionPhase::Collecting,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn cursor(&self) -> usize {
        self.sequencer.cursor()
    }

    pub fn params(&self) -> &LoanParameters {
        self.calculator.params()
    }

    pub fn calculator(&self) -> &MonthlyPaymentCalculator<F> {
        &self.calculator
    }

    /// The step whose prompt is currently shown.
    pub fn current_step(&self) -> Option<&CalculationStep> {
        match self.phase {
            SessionPhase::Collecting => self.sequencer.current_step(),
            _ => None,
        }
    }

    pub fn is_collecting(&self) -> bool {
        self.phase == SessionPhase::Collecting
    }

    /// Moves the cursor to the next prompt.
    pub fn advance(&mut self) -> Advance {
        self.sequencer.advance()
    }

    /// Accepts raw text for the prompt currently shown.
    ///
    /// Invalid text leaves the session untouched. After the last field the
    /// payment is calculated; a non-finite result moves the session to
    /// [`SessionPhase::CalculationFailed`] and is returned as
    /// [`SessionError::InvalidCalculation`].
    pub fn submit(
        &mut self,
        raw: &str,
    ) -> Result<SubmitOutcome, SessionError> {
        if !self.is_collecting() {
            return Err(SessionError::NotCollecting);
        }
        let field = self
            .sequencer
            .current_field()
            .ok_or(SessionError::NotCollecting)?;

        let value = parse_input(raw).inspect_err(|e| {
            warn!(field = ?field, error = %e, "rejected input");
        })?;

        self.calculator.params_mut().set(field, value);
        debug!(field = ?field, %value, cursor = self.cursor(), "stored input");

        if !field.is_last() {
            return Ok(SubmitOutcome::Advanced(self.sequencer.advance()));
        }

        let calculated = self.calculator.calculate().and_then(|payment| {
            let count = payment_count(self.calculator.params().term_years)?;
            Ok((count, payment))
        });

        match calculated {
            Ok((count, payment)) => {
                let params = self.calculator.params();
                let summary = PaymentSummary::new(params, count, payment);
                info!(
                    principal = %summary.principal,
                    rate = %summary.annual_interest_rate_percent,
                    years = %summary.term_years,
                    payment = %summary.formatted_monthly_payment(),
                    "mortgage calculated"
                );
                self.phase = SessionPhase::Review(summary.clone());
                Ok(SubmitOutcome::Review(summary))
            }
            Err(e) => {
                warn!(error = %e, params = ?self.calculator.params(), "calculation failed");
                self.phase = SessionPhase::CalculationFailed;
                Err(e.into())
            }
        }
    }

    /// Clears every entered value and shows the first prompt again.
    pub fn reset(&mut self) -> Advance {
        debug!(phase = ?self.phase, "resetting session");
        self.calculator.clear();
        self.sequencer.reset();
        self.phase = SessionPhase::Collecting;
        self.sequencer.advance()
    }

    /// Shows the first prompt of a fresh session.
    pub fn start(&mut self) -> Vec<Effect> {
        let advance = self.advance();
        collection_effects(advance)
    }

    /// Applies a user command and returns what should be rendered.
    pub fn handle(
        &mut self,
        command: Command,
    ) -> Vec<Effect> {
        match command {
            Command::Submit(raw) => self.handle_submit(&raw),
            Command::Recalculate => {
                let advance = self.reset();
                collection_effects(advance)
            }
        }
    }

    fn handle_submit(
        &mut self,
        raw: &str,
    ) -> Vec<Effect> {
        match self.submit(raw) {
            Ok(SubmitOutcome::Advanced(advance)) => advance_effects(advance),
            Ok(SubmitOutcome::Review(summary)) => vec![
                Effect::ShowSummary(summary),
                Effect::SetInputVisible(false),
                Effect::SetRecalculateVisible(true),
            ],
            Err(SessionError::NotCollecting) => {
                debug!("ignoring submission outside of collection");
                Vec::new()
            }
            Err(e @ SessionError::InvalidInput(_)) => vec![Effect::ShowError(e.message_key())],
            Err(e @ SessionError::InvalidCalculation(_)) => vec![
                Effect::ShowError(e.message_key()),
                Effect::SetInputVisible(false),
                Effect::SetRecalculateVisible(true),
            ],
        }
    }
}

/// Effects for entering the collection phase at the given prompt.
fn collection_effects(advance: Advance) -> Vec<Effect> {
    let mut effects = vec![
        Effect::SetSubmitLabel(MessageKey::Next),
        Effect::SetInputVisible(true),
        Effect::SetRecalculateVisible(false),
    ];
    effects.extend(advance_effects(advance));
    effects
}

/// Effects for showing the prompt the sequencer moved to.
fn advance_effects(advance: Advance) -> Vec<Effect> {
    match advance {
        Advance::Prompt(step) => {
            let mut effects = vec![
                Effect::DisplayPrompt(step.prompt),
                Effect::SetInputHint(step.prompt),
                Effect::ClearInput,
            ];
            if step.field.is_last() {
                effects.push(Effect::SetSubmitLabel(MessageKey::Calculate));
            }
            effects
        }
        Advance::Complete => vec![Effect::SetInputVisible(false)],
    }
}
