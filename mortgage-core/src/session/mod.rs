//! The step-by-step input session around the payment calculator.
//!
//! A session shows three prompts in a fixed order, stores each accepted
//! answer in the matching loan parameter and calculates the monthly payment
//! once the last one is in. Rendering is left to the caller: every user
//! [`Command`] yields a list of [`Effect`]s to apply to a presenter.

mod effect;
mod input;
mod sequencer;
mod state;

pub use effect::{Command, Effect};
pub use input::{ParseInputError, parse_input};
pub use sequencer::{Advance, StepSequencer};
pub use state::{MortgageSession, SessionError, SessionPhase, SubmitOutcome};
