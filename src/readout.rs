//! Readout handed to the display after each key press.

use serde::Serialize;

use crate::calculator::{DisplayStyle, Input};

/// What the calculator screen shows after one input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Readout {
    /// The key that produced this readout, if any.
    pub input: Option<Input>,
    /// The raw displayed value.
    #[serde(skip)]
    pub value: f64,
    /// The value rendered for the screen.
    pub text: String,
    /// Whether the value is `Infinity`, `-Infinity` or `NaN`.
    /// Such values are still shown as they are.
    pub is_error: bool,
}

impl Readout {
    /// Render a displayed value with the given style.
    pub fn new(input: Option<Input>, value: f64, style: DisplayStyle) -> Self {
        Self {
            input,
            value,
            text: style.format(value),
            is_error: !value.is_finite(),
        }
    }

    /// Get the text to copy to clipboard.
    pub fn clipboard_text(&self) -> &str {
        &self.text
    }

    /// Render as `label  text` for echoing key presses, or just the text.
    pub fn line(&self, echo_input: bool) -> String {
        match (echo_input, self.input) {
            (true, Some(input)) => format!("{:>2}  {}", input, self.text),
            _ => self.text.clone(),
        }
    }
}
