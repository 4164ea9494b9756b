pub mod calculations;
pub mod models;
pub mod session;

pub use calculations::{PaymentError, monthly_payment};
pub use models::*;
pub use session::{Command, Effect, MortgageSession, SessionError, SessionPhase};
