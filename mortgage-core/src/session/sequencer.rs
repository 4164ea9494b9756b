use tracing::trace;

use crate::models::{CALCULATION_STEPS, CalculationStep, LoanField};

/// Result of [`StepSequencer::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Show this step's prompt; input now goes to its field.
    Prompt(CalculationStep),
    /// Every step has been shown already.
    Complete,
}

/// Cursor over the fixed sequence of input steps.
///
/// The cursor ranges over `[0, steps.len()]`. After an `advance` that shows
/// step `i`, the cursor is `i + 1`, so the field currently being collected
/// is always the one at `cursor - 1`.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: &'static [CalculationStep],
    cursor: usize,
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSequencer {
    pub fn new() -> Self {
        Self {
            steps: &CALCULATION_STEPS,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the cursor has moved past the last step.
    pub fn is_complete(&self) -> bool {
        self.cursor == self.steps.len()
    }

    /// Moves to the next step and returns it, or reports completion.
    pub fn advance(&mut self) -> Advance {
        match self.steps.get(self.cursor) {
            Some(step) => {
                self.cursor += 1;
                trace!(cursor = self.cursor, prompt = step.prompt.as_str(), "advanced");
                Advance::Prompt(*step)
            }
            None => Advance::Complete,
        }
    }

    /// The step whose prompt is on screen, if any has been shown.
    pub fn current_step(&self) -> Option<&CalculationStep> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
    }

    /// The field the next accepted input is written to.
    pub fn current_field(&self) -> Option<LoanField> {
        self.cursor.checked_sub(1).and_then(LoanField::from_index)
    }

    /// Rewinds to before the first step; call [`advance`](Self::advance) to
    /// show the first prompt again.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
