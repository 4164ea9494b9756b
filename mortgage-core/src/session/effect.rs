use crate::models::{MessageKey, PaymentSummary};

/// User actions the session reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The user confirmed the text currently in the input field.
    Submit(String),
    /// The user asked to start a new calculation.
    Recalculate,
}

/// Rendering instructions produced by the session for a presenter.
///
/// Effects are applied in order; none of them feeds back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    DisplayPrompt(MessageKey),
    SetInputHint(MessageKey),
    ClearInput,
    SetSubmitLabel(MessageKey),
    /// Show or hide the input field together with its submit button.
    SetInputVisible(bool),
    ShowError(MessageKey),
    ShowSummary(PaymentSummary),
    SetRecalculateVisible(bool),
}
