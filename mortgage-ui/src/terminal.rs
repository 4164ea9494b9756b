//! Line-oriented terminal presenter.
//!
//! Prompts and results go to the writer, answers come one per line from the
//! reader. Hints and input clearing have no terminal equivalent beyond the
//! input marker, so they only affect what the next read prints.

use std::io::{self, BufRead, Write};

use mortgage_core::{MessageKey, PaymentSummary};

use crate::presenter::Presenter;
use crate::strings::StringTable;

/// What a line typed while the recalculate affordance is showing means.
pub const RECALCULATE_WORDS: [&str; 2] = ["r", "recalculate"];
/// Words that end the interactive loop in any phase.
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

pub struct TerminalPresenter<R, W> {
    reader: R,
    writer: W,
    strings: StringTable,
    hint: Option<MessageKey>,
    submit_label: MessageKey,
    input_visible: bool,
    recalculate_visible: bool,
    show_hint: bool,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(
        reader: R,
        writer: W,
        strings: StringTable,
    ) -> Self {
        Self {
            reader,
            writer,
            strings,
            hint: None,
            submit_label: MessageKey::Next,
            input_visible: true,
            recalculate_visible: false,
            show_hint: false,
        }
    }

    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_input_marker(&mut self) -> io::Result<()> {
        if self.input_visible {
            if let Some(hint) = self.hint.filter(|_| self.show_hint) {
                write!(self.writer, "{} ", self.strings.get(hint))?;
            }
            write!(self.writer, "[{}] > ", self.strings.get(self.submit_label))?;
        } else if self.recalculate_visible {
            write!(
                self.writer,
                "[{} (r) | {} (q)] > ",
                self.strings.get(MessageKey::Recalculate),
                self.strings.get(MessageKey::Quit)
            )?;
        } else {
            write!(self.writer, "[{} (q)] > ", self.strings.get(MessageKey::Quit))?;
        }
        self.show_hint = false;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn display_prompt(&mut self, prompt: MessageKey) -> io::Result<()> {
        writeln!(self.writer, "{}", self.strings.get(prompt))
    }

    fn set_input_hint(&mut self, hint: MessageKey) -> io::Result<()> {
        self.hint = Some(hint);
        Ok(())
    }

    fn clear_input_field(&mut self) -> io::Result<()> {
        self.show_hint = false;
        Ok(())
    }

    fn set_submit_label(&mut self, label: MessageKey) -> io::Result<()> {
        self.submit_label = label;
        Ok(())
    }

    fn set_input_visible(&mut self, visible: bool) -> io::Result<()> {
        self.input_visible = visible;
        Ok(())
    }

    fn read_input_text(&mut self) -> io::Result<Option<String>> {
        self.write_input_marker()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show_error(&mut self, message: MessageKey) -> io::Result<()> {
        self.show_hint = true;
        writeln!(self.writer, "! {}", self.strings.get(message))
    }

    fn show_summary(
        &mut self,
        summary: &PaymentSummary,
        formatted_monthly_payment: &str,
    ) -> io::Result<()> {
        let s = &self.strings;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", s.get(MessageKey::MortgageOverview))?;
        writeln!(
            self.writer,
            "  {}{}",
            s.get(MessageKey::SummaryPrincipal),
            summary.principal.normalize()
        )?;
        writeln!(
            self.writer,
            "  {} {}{}",
            s.get(MessageKey::SummaryInterest),
            summary.annual_interest_rate_percent.normalize(),
            s.get(MessageKey::Percent)
        )?;
        writeln!(
            self.writer,
            "  {} {} {}",
            s.get(MessageKey::SummaryMortgage),
            summary.term_years.normalize(),
            s.get(MessageKey::Years)
        )?;
        writeln!(
            self.writer,
            "  {}{}",
            s.get(MessageKey::SummaryResult),
            formatted_monthly_payment
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}{}",
            s.get(MessageKey::MonthlyPayment),
            formatted_monthly_payment
        )
    }

    fn toggle_recalculate_affordance(&mut self, visible: bool) -> io::Result<()> {
        self.recalculate_visible = visible;
        Ok(())
    }
}
