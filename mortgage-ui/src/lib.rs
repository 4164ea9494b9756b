pub mod app;
pub mod config;
pub mod logging;
pub mod presenter;
pub mod strings;
pub mod terminal;

pub use app::{calculate_once, run};
pub use presenter::{Presenter, apply};
