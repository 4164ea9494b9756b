mod calculation_step;
mod loan_parameters;
mod message_key;
mod payment_summary;

pub use calculation_step::{CALCULATION_STEPS, CalculationStep};
pub use loan_parameters::{LoanField, LoanParameters};
pub use message_key::MessageKey;
pub use payment_summary::PaymentSummary;
