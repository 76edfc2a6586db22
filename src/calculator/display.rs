//! Text rendering for displayed values.
//!
//! `Classic` follows the usual double-to-string rule of desk calculator
//! screens: whole numbers keep a trailing `.0`, and magnitudes outside
//! `[1e-3, 1e7)` switch to `E` notation. `Plain` drops both inside
//! `[1e-6, 1e15)` and falls back to the classic rule outside it.

use serde::{Deserialize, Serialize};

/// Which formatting rule the display uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// `123.0`, `5.25`, `1.0E7`, `Infinity`.
    #[default]
    Classic,
    /// `123`, `5.25`, `10000000`, `Infinity`; `1.0E20` when out of range.
    Plain,
}

impl DisplayStyle {
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Classic => format_value(value),
            Self::Plain => format_plain(value),
        }
    }
}

/// Format a value the classic way.
pub fn format_value(value: f64) -> String {
    if let Some(special) = format_non_finite(value) {
        return special.to_string();
    }

    if value == 0.0 {
        let zero = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return zero.to_string();
    }

    let magnitude = value.abs();
    if (1e-3..1e7).contains(&magnitude) {
        with_fraction(format!("{value}"))
    } else {
        // `{:e}` gives the shortest mantissa, e.g. "1e7" or "1.5e-4".
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}E{}", with_fraction(mantissa.to_string()), exponent)
            }
            None => scientific,
        }
    }
}

/// Format a value without a forced fraction or exponent.
///
/// Magnitudes outside `[1e-6, 1e15)` would print dozens or hundreds of
/// digits, so they use [`format_value`] instead.
pub fn format_plain(value: f64) -> String {
    if let Some(special) = format_non_finite(value) {
        return special.to_string();
    }

    let magnitude = value.abs();
    if value == 0.0 || (1e-6..1e15).contains(&magnitude) {
        format!("{value}")
    } else {
        format_value(value)
    }
}

fn format_non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

fn with_fraction(mut digits: String) -> String {
    if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}
