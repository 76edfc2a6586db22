//! Host-side driver that feeds key presses into the calculator.
//!
//! A session owns one [`Calculator`] exclusively and renders a
//! [`Readout`] after every input. It is strictly single-threaded.

use thiserror::Error;
use tracing::{debug, trace};

use crate::calculator::{Calculator, DisplayStyle, Input};
use crate::keys::{self, KeysError};
use crate::readout::Readout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("invalid key sequence: {0}")]
    Keys(#[from] KeysError),
}

#[derive(Debug)]
pub struct Session {
    calculator: Calculator,
    style: DisplayStyle,
}

impl Session {
    pub fn new(style: DisplayStyle) -> Self {
        Self {
            calculator: Calculator::new(),
            style,
        }
    }

    pub fn style(&self) -> DisplayStyle {
        self.style
    }

    /// Process one key press.
    pub fn press(&mut self, input: Input) -> Readout {
        let value = self.calculator.process(input);
        let readout = Readout::new(Some(input), value, self.style);
        debug!(key = %input, display = %readout.text, "processed key");
        trace!(state = ?self.calculator.state(), "calculator state");
        readout
    }

    /// Tokenize a line of keys and process all of them.
    ///
    /// A blank line is Enter and presses "=". Otherwise the whole line is
    /// tokenized first; if it contains an invalid character no key is
    /// processed.
    pub fn feed(&mut self, line: &str) -> Result<Vec<Readout>, SessionError> {
        if line.trim().is_empty() {
            return Ok(vec![self.press(Input::Equals)]);
        }

        let inputs = keys::tokenize(line)?;
        debug!(count = inputs.len(), "feeding key line");
        Ok(inputs.into_iter().map(|input| self.press(input)).collect())
    }

    /// The readout currently on screen.
    pub fn current(&self) -> Readout {
        Readout::new(None, self.calculator.displayed_value(), self.style)
    }

    pub fn reset(&mut self) {
        debug!("resetting calculator");
        self.calculator.reset();
    }
}

/// Whether a typed line asks to end the session.
pub fn is_quit_command(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit")
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DisplayStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_readout() {
        let session = Session::default();
        assert_eq!(session.current().text, "0.0");
        assert_eq!(session.current().input, None);
    }

    #[test]
    fn test_feed_returns_one_readout_per_key() {
        let mut session = Session::default();
        let readouts = session.feed("7+3=").unwrap();
        let texts: Vec<_> = readouts.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, ["7.0", "7.0", "3.0", "10.0"]);
        assert_eq!(readouts[1].input, Some(Input::Operator(crate::calculator::OperatorKind::Add)));
    }

    #[test]
    fn test_feed_is_atomic_on_error() {
        let mut session = Session::default();
        session.feed("5+").unwrap();
        let err = session.feed("2?=").unwrap_err();
        assert_eq!(
            err,
            SessionError::Keys(KeysError::Unexpected { ch: '?', offset: 1 })
        );
        // Nothing from the bad line was processed.
        assert_eq!(session.current().text, "5.0");
        let last = session.feed("2=").unwrap();
        assert_eq!(last.last().unwrap().text, "7.0");
    }

    #[test]
    fn test_state_persists_across_lines() {
        let mut session = Session::new(DisplayStyle::Plain);
        session.feed("2+3").unwrap();
        session.feed("*4").unwrap();
        let readouts = session.feed("=").unwrap();
        assert_eq!(readouts[0].text, "20");
    }

    #[test]
    fn test_division_by_zero_is_displayed() {
        let mut session = Session::default();
        let readouts = session.feed("4/0=").unwrap();
        let last = readouts.last().unwrap();
        assert_eq!(last.text, "Infinity");
        assert!(last.is_error);
    }

    #[test]
    fn test_blank_line_presses_equals() {
        let mut session = Session::default();
        session.feed("7+3").unwrap();
        let readouts = session.feed("").unwrap();
        assert_eq!(readouts.len(), 1);
        assert_eq!(readouts[0].input, Some(Input::Equals));
        assert_eq!(readouts[0].text, "10.0");
        assert_eq!(session.feed("  ").unwrap()[0].text, "13.0");
    }

    #[test]
    fn test_bad_line_mid_session_keeps_readout() {
        let mut session = Session::default();
        session.feed("12*3").unwrap();
        let before = session.current();
        assert!(session.feed("4 % 2").is_err());
        assert_eq!(session.current(), before);
        assert_eq!(session.feed("=").unwrap()[0].text, "36.0");
    }

    #[test]
    fn test_quit_commands() {
        assert!(is_quit_command("quit"));
        assert!(is_quit_command("  exit \n"));
        assert!(!is_quit_command("QUIT"));
        assert!(!is_quit_command(""));
        assert!(!is_quit_command("1+1="));
    }

    #[test]
    fn test_reset() {
        let mut session = Session::default();
        session.feed("9*9=").unwrap();
        session.reset();
        assert_eq!(session.current().text, "0.0");
    }
}
