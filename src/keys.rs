//! Tokenizer for typed key sequences.
//!
//! Turns text such as `"12+3="` or `"5 + 9 CE 2 ="` into calculator
//! inputs, one token per key press.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::calculator::Input;

lazy_static! {
    /// One key token at the start of the remaining text.
    /// `CE` is listed before `C` so the longer label wins. Single
    /// characters are the keyboard mnemonics of `Input::from_mnemonic`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"\A(?:(?i:ce)|[cCeE0-9.,xX=*/+-]|\s+)"
    ).unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeysError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    Unexpected { ch: char, offset: usize },
}

/// Split typed text into calculator inputs.
///
/// Whitespace separates nothing and is skipped. The first character
/// that is not a key aborts tokenizing.
pub fn tokenize(text: &str) -> Result<Vec<Input>, KeysError> {
    let mut inputs = Vec::new();
    let mut offset = 0;

    while offset < text.len() {
        let rest = &text[offset..];
        let Some(token) = KEY_TOKEN.find(rest) else {
            // `rest` is non-empty here, so there is always a next char.
            let ch = rest.chars().next().unwrap_or_default();
            return Err(KeysError::Unexpected { ch, offset });
        };

        let lexeme = token.as_str();
        offset += lexeme.len();

        if lexeme.trim().is_empty() {
            continue;
        }

        let input = if lexeme.eq_ignore_ascii_case("ce") {
            Some(Input::ClearEntry)
        } else {
            lexeme.chars().next().and_then(Input::from_mnemonic)
        };

        match input {
            Some(input) => inputs.push(input),
            None => {
                let ch = lexeme.chars().next().unwrap_or_default();
                return Err(KeysError::Unexpected {
                    ch,
                    offset: offset - lexeme.len(),
                });
            }
        }
    }

    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, OperatorKind};

    fn d(n: u8) -> Input {
        Input::Digit(Digit::new(n).unwrap())
    }

    #[test]
    fn test_compact_sequence() {
        assert_eq!(
            tokenize("12+3=").unwrap(),
            vec![
                d(1),
                d(2),
                Input::Operator(OperatorKind::Add),
                d(3),
                Input::Equals
            ]
        );
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(tokenize("  7 * 2 ").unwrap().len(), 3);
        assert!(tokenize("   ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_clear_entry_beats_clear() {
        assert_eq!(
            tokenize("9CE2").unwrap(),
            vec![d(9), Input::ClearEntry, d(2)]
        );
        assert_eq!(tokenize("ce c").unwrap(), vec![Input::ClearEntry, Input::Clear]);
        assert_eq!(tokenize("CC").unwrap(), vec![Input::Clear, Input::Clear]);
    }

    #[test]
    fn test_x_is_multiply() {
        assert_eq!(
            tokenize("2x3").unwrap()[1],
            Input::Operator(OperatorKind::Mul)
        );
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(tokenize(".5").unwrap(), vec![Input::DecimalPoint, d(5)]);
    }

    #[test]
    fn test_accepts_every_mnemonic() {
        assert_eq!(
            tokenize("1,5").unwrap(),
            vec![d(1), Input::DecimalPoint, d(5)]
        );
        assert_eq!(tokenize("5e").unwrap(), vec![d(5), Input::ClearEntry]);
        assert_eq!(tokenize("E").unwrap(), vec![Input::ClearEntry]);
        for key in ['0', '9', '.', ',', '+', '-', '*', '/', 'x', 'X', '=', 'c', 'C', 'e', 'E'] {
            let expected = Input::from_mnemonic(key).unwrap();
            assert_eq!(tokenize(&key.to_string()).unwrap(), vec![expected]);
        }
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            tokenize("1 + a"),
            Err(KeysError::Unexpected { ch: 'a', offset: 4 })
        );
        assert_eq!(
            tokenize("(1)"),
            Err(KeysError::Unexpected { ch: '(', offset: 0 })
        );
    }
}
