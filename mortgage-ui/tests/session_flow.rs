//! Integration tests that drive a full session through the event loop with a
//! scripted presenter standing in for the user interface.

use std::collections::VecDeque;
use std::io;

use mortgage_core::{MessageKey, MortgageSession, PaymentSummary};
use mortgage_ui::{Presenter, run};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

/// Everything the presenter was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Prompt(MessageKey),
    Hint(MessageKey),
    Clear,
    Label(MessageKey),
    InputVisible(bool),
    Read(String),
    Error(MessageKey),
    Summary(String),
    Recalculate(bool),
}

#[derive(Default)]
struct ScriptedPresenter {
    inputs: VecDeque<String>,
    calls: Vec<Call>,
}

impl ScriptedPresenter {
    fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            calls: Vec::new(),
        }
    }

    fn prompts(&self) -> Vec<MessageKey> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Prompt(key) => Some(*key),
                _ => None,
            })
            .collect()
    }

    fn errors(&self) -> Vec<MessageKey> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Error(key) => Some(*key),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for ScriptedPresenter {
    fn display_prompt(&mut self, prompt: MessageKey) -> io::Result<()> {
        self.calls.push(Call::Prompt(prompt));
        Ok(())
    }

    fn set_input_hint(&mut self, hint: MessageKey) -> io::Result<()> {
        self.calls.push(Call::Hint(hint));
        Ok(())
    }

    fn clear_input_field(&mut self) -> io::Result<()> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn set_submit_label(&mut self, label: MessageKey) -> io::Result<()> {
        self.calls.push(Call::Label(label));
        Ok(())
    }

    fn set_input_visible(&mut self, visible: bool) -> io::Result<()> {
        self.calls.push(Call::InputVisible(visible));
        Ok(())
    }

    fn read_input_text(&mut self) -> io::Result<Option<String>> {
        let next = self.inputs.pop_front();
        if let Some(line) = &next {
            self.calls.push(Call::Read(line.clone()));
        }
        Ok(next)
    }

    fn show_error(&mut self, message: MessageKey) -> io::Result<()> {
        self.calls.push(Call::Error(message));
        Ok(())
    }

    fn show_summary(
        &mut self,
        _summary: &PaymentSummary,
        formatted_monthly_payment: &str,
    ) -> io::Result<()> {
        self.calls
            .push(Call::Summary(formatted_monthly_payment.to_string()));
        Ok(())
    }

    fn toggle_recalculate_affordance(&mut self, visible: bool) -> io::Result<()> {
        self.calls.push(Call::Recalculate(visible));
        Ok(())
    }
}

#[test]
fn test_full_session_renders_every_step() {
    let mut session = MortgageSession::new();
    let mut presenter = ScriptedPresenter::new(&["200000", "6", "30"]);

    let completed = run(&mut session, &mut presenter).expect("run should succeed");

    assert_eq!(completed.len(), 1);
    assert_eq!(
        presenter.calls,
        vec![
            Call::Label(MessageKey::Next),
            Call::InputVisible(true),
            Call::Recalculate(false),
            Call::Prompt(MessageKey::PromptPrincipal),
            Call::Hint(MessageKey::PromptPrincipal),
            Call::Clear,
            Call::Read("200000".to_string()),
            Call::Prompt(MessageKey::PromptInterestRate),
            Call::Hint(MessageKey::PromptInterestRate),
            Call::Clear,
            Call::Read("6".to_string()),
            Call::Prompt(MessageKey::PromptMortgagePeriod),
            Call::Hint(MessageKey::PromptMortgagePeriod),
            Call::Clear,
            Call::Label(MessageKey::Calculate),
            Call::Read("30".to_string()),
            Call::Summary("1199.10".to_string()),
            Call::InputVisible(false),
            Call::Recalculate(true),
        ]
    );
}

#[test]
fn test_empty_input_reprompts_same_step() {
    let mut session = MortgageSession::new();
    let mut presenter = ScriptedPresenter::new(&["", "1200", "  ", "0", "abc", "1"]);

    let completed = run(&mut session, &mut presenter).unwrap();

    assert_eq!(
        presenter.errors(),
        vec![MessageKey::EmptyInputError; 3]
    );
    assert_eq!(
        presenter.prompts(),
        vec![
            MessageKey::PromptPrincipal,
            MessageKey::PromptInterestRate,
            MessageKey::PromptMortgagePeriod,
        ]
    );
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].monthly_payment, dec!(100));
}

#[test]
fn test_zero_term_reports_invalid_calculation() {
    let mut session = MortgageSession::new();
    let mut presenter = ScriptedPresenter::new(&["1000", "5", "0", "30"]);

    let completed = run(&mut session, &mut presenter).unwrap();

    assert!(completed.is_empty());
    assert_eq!(
        presenter.errors(),
        vec![MessageKey::InvalidCalculationError]
    );
    // The trailing "30" is ignored; only recalculating starts over.
    assert_eq!(session.cursor(), 3);
    assert_eq!(session.params().term_years, dec!(0));
}

#[test]
fn test_recalculate_starts_a_clean_second_calculation() {
    let mut session = MortgageSession::new();
    let mut presenter =
        ScriptedPresenter::new(&["200000", "6", "30", "r", "1200", "0", "1"]);

    let completed = run(&mut session, &mut presenter).unwrap();

    assert_eq!(completed.len(), 2);
    assert_eq!(completed[0].formatted_monthly_payment(), "1199.10");
    assert_eq!(completed[1].principal, dec!(1200));
    assert_eq!(completed[1].annual_interest_rate_percent, dec!(0));
    assert_eq!(completed[1].term_years, dec!(1));
    assert_eq!(completed[1].formatted_monthly_payment(), "100.00");
    assert_eq!(
        presenter.prompts(),
        vec![
            MessageKey::PromptPrincipal,
            MessageKey::PromptInterestRate,
            MessageKey::PromptMortgagePeriod,
            MessageKey::PromptPrincipal,
            MessageKey::PromptInterestRate,
            MessageKey::PromptMortgagePeriod,
        ]
    );
}

#[test]
fn test_recalculate_after_failure_recovers() {
    let mut session = MortgageSession::new();
    let mut presenter =
        ScriptedPresenter::new(&["1000", "5", "0", "recalculate", "1000", "5", "1"]);

    let completed = run(&mut session, &mut presenter).unwrap();

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].payment_count, 12);
}

#[test]
fn test_quit_stops_before_input_runs_out() {
    let mut session = MortgageSession::new();
    let mut presenter = ScriptedPresenter::new(&["200000", "q", "6", "30"]);

    let completed = run(&mut session, &mut presenter).unwrap();

    assert!(completed.is_empty());
    assert_eq!(presenter.inputs.len(), 2);
    assert_eq!(session.params().principal, dec!(200000));
}
