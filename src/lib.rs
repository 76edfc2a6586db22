pub mod calculator;
pub mod config;
pub mod keys;
pub mod readout;
pub mod session;

pub use calculator::{Calculator, CalculatorState, Digit, DisplayStyle, Input, OperatorKind};
pub use readout::Readout;
pub use session::Session;
