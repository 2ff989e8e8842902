//! Display formatting
//!
//! Converts numbers to display text (thousands separators, up to eight
//! fractional digits, no trailing padding) and back. `parse` is the
//! exact inverse of `format` for anything `format` can produce.

use crate::error::Result;

/// Maximum fractional digits shown on the display
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Separator inserted between integer digit groups
pub const THOUSANDS_SEPARATOR: char = ',';

/// Format a number for the display
///
/// Rounds to [`MAX_FRACTION_DIGITS`] fractional digits, trims trailing
/// zeros (and a bare trailing point), and groups the integer digits in
/// threes.
pub fn format(value: f64) -> String {
    let fixed = format!("{value:.prec$}", prec = MAX_FRACTION_DIGITS);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(trimmed.len() + int_part.len() / 3);
    out.push_str(sign);
    group_thousands(int_part, &mut out);
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Parse display text back into a number
///
/// Strips thousands separators and parses the rest as a decimal.
/// Accepts mid-entry text such as `"3."`.
pub fn parse(text: &str) -> Result<f64> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c != THOUSANDS_SEPARATOR)
        .collect();

    Ok(cleaned.parse::<f64>()?)
}

fn group_thousands(digits: &str, out: &mut String) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEPARATOR);
        }
        out.push(c);
    }
}
