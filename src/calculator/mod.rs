//! Calculator core for the desk calculator.
//!
//! This module provides functionality to:
//! - Map keypad labels and keyboard mnemonics to inputs
//! - Run the single-accumulator state machine
//! - Render displayed values as text
//! - Copy results to the clipboard

mod clipboard;
mod display;
mod engine;
mod input;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use display::{DisplayStyle, format_plain, format_value};
pub use engine::{Calculator, CalculatorState};
pub use input::{Digit, Input, InputError, OperatorKind};
