//! Event loop tying a [`MortgageSession`] to a [`Presenter`].

use std::io;

use mortgage_core::calculations::{MonthlyPaymentCalculator, PaymentFormula, payment_count};
use mortgage_core::session::parse_input;
use mortgage_core::{Command, Effect, MortgageSession, PaymentSummary, SessionError};
use tracing::{debug, info};

use crate::presenter::{Presenter, apply};
use crate::terminal::{QUIT_WORDS, RECALCULATE_WORDS};

fn matches_word(
    line: &str,
    words: &[&str],
) -> bool {
    let line = line.trim();
    words.iter().any(|w| line.eq_ignore_ascii_case(w))
}

/// Maps a line of user input to a command, given the session's phase.
///
/// Returns `None` when the user asked to quit.
pub fn interpret_line<F: PaymentFormula>(
    session: &MortgageSession<F>,
    line: &str,
) -> Option<Command> {
    if matches_word(line, &QUIT_WORDS) {
        return None;
    }
    if !session.is_collecting() && matches_word(line, &RECALCULATE_WORDS) {
        return Some(Command::Recalculate);
    }
    Some(Command::Submit(line.to_string()))
}

/// Runs an interactive session until the user quits or input runs out.
///
/// Returns every summary that was shown, in order.
pub fn run<F, P>(
    session: &mut MortgageSession<F>,
    presenter: &mut P,
) -> io::Result<Vec<PaymentSummary>>
where
    F: PaymentFormula,
    P: Presenter + ?Sized,
{
    let mut completed = Vec::new();

    apply(&session.start(), presenter)?;

    while let Some(line) = presenter.read_input_text()? {
        let Some(command) = interpret_line(session, &line) else {
            debug!("quit requested");
            break;
        };

        let effects = session.handle(command);
        apply(&effects, presenter)?;

        completed.extend(effects.into_iter().filter_map(|effect| match effect {
            Effect::ShowSummary(summary) => Some(summary),
            _ => None,
        }));
    }

    info!(calculations = completed.len(), "session ended");
    Ok(completed)
}

/// Calculates a summary from three answers without any prompting.
///
/// Answers go through the same parsing as interactive input.
pub fn calculate_once(
    principal: &str,
    interest_rate: &str,
    mortgage_period: &str,
) -> Result<PaymentSummary, SessionError> {
    let mut calculator = MonthlyPaymentCalculator::new();
    calculator.set_principal(parse_input(principal)?);
    calculator.set_interest_rate(parse_input(interest_rate)?);
    calculator.set_mortgage_period(parse_input(mortgage_period)?);

    let payment = calculator.calculate()?;
    let count = payment_count(calculator.mortgage_period())?;
    debug!(count, %payment, "one-shot calculation");

    Ok(PaymentSummary::new(calculator.params(), count, payment))
}

#[cfg(test)]
mod tests {
    use mortgage_core::PaymentError;
    use mortgage_core::session::ParseInputError;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn quit_words_end_the_loop() {
        let session = MortgageSession::new();

        assert_eq!(interpret_line(&session, "q"), None);
        assert_eq!(interpret_line(&session, " QUIT "), None);
    }

    #[test]
    fn recalculate_word_only_counts_outside_collection() {
        let mut session = MortgageSession::new();
        session.start();

        assert_eq!(
            interpret_line(&session, "r"),
            Some(Command::Submit("r".to_string()))
        );

        for value in ["1200", "0", "1"] {
            session.submit(value).unwrap();
        }

        assert_eq!(interpret_line(&session, "r"), Some(Command::Recalculate));
    }

    #[test]
    fn calculate_once_returns_summary() {
        let summary = calculate_once("200,000", "6", "30").unwrap();

        assert_eq!(summary.principal, dec!(200000));
        assert_eq!(summary.formatted_monthly_payment(), "1199.10");
    }

    #[test]
    fn calculate_once_reports_invalid_input() {
        let result = calculate_once("", "6", "30");

        assert_eq!(
            result,
            Err(SessionError::InvalidInput(ParseInputError::Empty))
        );
    }

    #[test]
    fn calculate_once_reports_later_invalid_input() {
        let result = calculate_once("1000", "5", "-3");

        assert_eq!(
            result,
            Err(SessionError::InvalidInput(ParseInputError::Negative(dec!(-3))))
        );
    }

    #[test]
    fn calculate_once_counts_truncated_months() {
        let summary = calculate_once("1000", "0", "1.99").unwrap();

        assert_eq!(summary.payment_count, 23);
        assert_eq!(summary.term_years, dec!(1.99));
    }

    #[test]
    fn calculate_once_reports_invalid_calculation() {
        let result = calculate_once("1000", "5", "0");

        assert_eq!(
            result,
            Err(SessionError::InvalidCalculation(PaymentError::NoPayments(
                dec!(0)
            )))
        );
    }
}
