//! The rendering interface the session talks to.

use std::io;

use mortgage_core::{Effect, MessageKey, PaymentSummary};

/// Everything the calculator needs from a user interface.
///
/// Implementations decide how each instruction looks; a terminal, a GUI and
/// a test double all fit behind this trait.
pub trait Presenter {
    fn display_prompt(&mut self, prompt: MessageKey) -> io::Result<()>;

    fn set_input_hint(&mut self, hint: MessageKey) -> io::Result<()>;

    fn clear_input_field(&mut self) -> io::Result<()>;

    fn set_submit_label(&mut self, label: MessageKey) -> io::Result<()>;

    fn set_input_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Next line of user input, or `None` once input is exhausted.
    fn read_input_text(&mut self) -> io::Result<Option<String>>;

    fn show_error(&mut self, message: MessageKey) -> io::Result<()>;

    /// `formatted_monthly_payment` always has exactly two decimals.
    fn show_summary(
        &mut self,
        summary: &PaymentSummary,
        formatted_monthly_payment: &str,
    ) -> io::Result<()>;

    fn toggle_recalculate_affordance(&mut self, visible: bool) -> io::Result<()>;
}

/// Applies session effects to a presenter, in order.
pub fn apply<P: Presenter + ?Sized>(
    effects: &[Effect],
    presenter: &mut P,
) -> io::Result<()> {
    for effect in effects {
        match effect {
            Effect::DisplayPrompt(key) => presenter.display_prompt(*key)?,
            Effect::SetInputHint(key) => presenter.set_input_hint(*key)?,
            Effect::ClearInput => presenter.clear_input_field()?,
            Effect::SetSubmitLabel(key) => presenter.set_submit_label(*key)?,
            Effect::SetInputVisible(visible) => presenter.set_input_visible(*visible)?,
            Effect::ShowError(key) => presenter.show_error(*key)?,
            Effect::ShowSummary(summary) => {
                presenter.show_summary(summary, &summary.formatted_monthly_payment())?
            }
            Effect::SetRecalculateVisible(visible) => {
                presenter.toggle_recalculate_affordance(*visible)?
            }
        }
    }
    Ok(())
}
