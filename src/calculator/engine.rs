//! The single-accumulator calculator state machine.
//!
//! Every key press is one synchronous transition on an owned
//! [`CalculatorState`]; the return value is what the display shows next.
//! There is no operator precedence: chained operators are applied
//! left to right as each new operator is pressed.

use super::input::{Digit, Input, OperatorKind};

/// Mutable state of one calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    /// Result of the last completed operation, or the first operand.
    pub accumulated_result: f64,
    /// Number currently being typed.
    pub current_entry: f64,
    /// Operator waiting for its right-hand operand.
    pub pending_operator: Option<OperatorKind>,
    /// Set once "." has been pressed for the current entry.
    pub after_decimal: bool,
    /// Power-of-ten exponent for the next fractional digit. Always >= 1.
    pub decimal_place_counter: u32,
    /// Set right after "=" was evaluated.
    pub equals_just_pressed: bool,
}

impl CalculatorState {
    /// Put every field back to its reset value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply the pending operator, or capture the entry as first operand.
    ///
    /// Fractional-entry tracking is reset afterwards.
    fn compute(&mut self) {
        self.accumulated_result = match self.pending_operator {
            None => self.current_entry,
            Some(op) => op.apply(self.accumulated_result, self.current_entry),
        };
        self.after_decimal = false;
        self.decimal_place_counter = 1;
    }

    fn push_digit(&mut self, digit: Digit) {
        if self.after_decimal {
            // Divide step by step so that each fractional digit lands
            // exactly where repeated division by ten puts it.
            let digit_value =
                (0..self.decimal_place_counter).fold(digit.as_f64(), |acc, _| acc / 10.0);
            self.current_entry += digit_value;
            self.decimal_place_counter = self.decimal_place_counter.saturating_add(1);
        } else {
            self.current_entry = self.current_entry * 10.0 + digit.as_f64();
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            accumulated_result: 0.0,
            current_entry: 0.0,
            pending_operator: None,
            after_decimal: false,
            decimal_place_counter: 1,
            equals_just_pressed: false,
        }
    }
}

/// A four-function desk calculator.
///
/// Callers feed it one [`Input`] at a time through [`Calculator::process`]
/// and render the returned value. Access must be serialized by the host.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    displayed: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one key press and return the value to display.
    pub fn process(&mut self, input: Input) -> f64 {
        let state = &mut self.state;

        self.displayed = match input {
            Input::Digit(digit) => {
                if state.equals_just_pressed {
                    state.reset();
                }
                state.push_digit(digit);
                state.current_entry
            }
            Input::DecimalPoint => {
                if state.equals_just_pressed {
                    state.reset();
                }
                // Pressing "." again keeps the current decimal place.
                state.after_decimal = true;
                state.current_entry
            }
            Input::Operator(op) => {
                if state.equals_just_pressed {
                    state.equals_just_pressed = false;
                } else {
                    state.compute();
                }
                state.pending_operator = Some(op);
                state.current_entry = 0.0;
                state.accumulated_result
            }
            Input::Equals => {
                state.equals_just_pressed = true;
                state.compute();
                state.accumulated_result
            }
            Input::ClearEntry => {
                state.equals_just_pressed = false;
                state.current_entry = 0.0;
                state.current_entry
            }
            Input::Clear => {
                state.reset();
                state.current_entry
            }
        };

        self.displayed
    }

    /// Process a sequence of inputs, returning the last displayed value.
    pub fn process_all<I>(&mut self, inputs: I) -> f64
    where
        I: IntoIterator<Item = Input>,
    {
        for input in inputs {
            self.process(input);
        }
        self.displayed
    }

    /// The value shown after the most recent input.
    pub fn displayed_value(&self) -> f64 {
        self.displayed
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Return to the freshly constructed state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.displayed = self.state.current_entry;
    }
}
