//! Price and size quantization to the exchange's tick and lot rules.
//!
//! Every function here is infallible: any `f64`, including zero, negatives and
//! non-finite values, produces a string without panicking.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy::MidpointAwayFromZero;

use crate::config::MAX_SIGNIFICANT_FIGURES;

/// Round to exactly `decimals` fractional digits, keeping trailing zeros.
///
/// The value enters [`Decimal`] through its shortest round-trip string, so
/// `2.675` rounds as the decimal it prints as. Values [`Decimal`] cannot hold
/// fall back to `f64` formatting.
fn round_fixed(value: f64, decimals: u32) -> String {
    match shortest(value).parse::<Decimal>() {
        Ok(amt) => {
            let mut amt = amt.round_dp_with_strategy(decimals, MidpointAwayFromZero);
            if amt.is_zero() {
                amt.set_sign_positive(true);
            }
            amt.rescale(decimals);
            amt.to_string()
        }
        Err(_) => format!("{:.*}", decimals as usize, value),
    }
}

/// Shortest string that parses back to the same `f64`
fn shortest(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Strip trailing zeros of the fractional part and a dangling `.`
fn strip_trailing_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    let trimmed = text.trim_end_matches('0');
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collapse an all-zero fractional part to a single `0` ("3.00" -> "3.0").
///
/// Unlike [`strip_trailing_zeros`] the decimal marker is kept.
fn trim_decimal_zeros(text: &str) -> String {
    match text.split_once('.') {
        None => text.to_string(),
        Some((int_part, frac_part)) => {
            let frac_part = frac_part.trim_end_matches('0');
            if frac_part.is_empty() {
                format!("{}.0", int_part)
            } else {
                format!("{}.{}", int_part, frac_part)
            }
        }
    }
}

/// Cut `text` right after the `allowed`-th significant fractional digit.
///
/// Leading zeros of the fractional part are not significant. No rounding
/// happens at the cut.
fn truncate_significant(text: &str, allowed: u32) -> String {
    let Some(dot) = text.find('.') else {
        return trim_decimal_zeros(text);
    };
    let mut remaining = allowed;
    let mut significant = false;
    for (offset, ch) in text[dot + 1..].char_indices() {
        if ch == '0' && !significant {
            continue;
        }
        significant = true;
        remaining = remaining.saturating_sub(1);
        if remaining == 0 {
            return trim_decimal_zeros(&text[..=dot + 1 + offset]);
        }
    }
    trim_decimal_zeros(text)
}

/// Number of digits in the truncated integer part; `0.x` counts as one digit.
fn integer_digit_count(value: f64) -> u32 {
    let digits = value
        .abs()
        .trunc()
        .to_string()
        .bytes()
        .filter(u8::is_ascii_digit)
        .count();
    digits.max(1) as u32
}

/// Format `value` with at most `decimals` fractional digits.
///
/// With `decimals == 0` the shortest round-trip representation is used and no
/// rounding happens. Otherwise the value is rounded half away from zero and
/// trailing zeros and a dangling `.` are removed, so integers carry no `.`.
pub fn format_decimal(value: f64, decimals: u32) -> String {
    if decimals == 0 {
        shortest(value)
    } else {
        strip_trailing_zeros(&round_fixed(value, decimals))
    }
}

/// Round an order size to the asset's lot size (`sz_decimals` places)
pub fn round_order_size(value: f64, sz_decimals: u32) -> String {
    format_decimal(value, sz_decimals)
}

/// Round an order price to at most five significant figures and at most
/// `max_decimals - sz_decimals` fractional digits.
///
/// Prices with five or more integer digits, and prices left with no
/// fractional budget, pass through in their shortest form. A price of at
/// least one rounded with a non-zero budget keeps a single `0` for an
/// all-zero fraction ("3.0", not "3"). For `|value| < 1` the rounded text
/// has its zeros stripped first, then the fractional digits past the
/// significant-figure limit are truncated, not rounded.
pub fn round_order_price(value: f64, sz_decimals: u32, max_decimals: u32) -> String {
    let allowed_decimals = max_decimals.saturating_sub(sz_decimals);
    let integer_digits = integer_digit_count(value);
    if integer_digits >= MAX_SIGNIFICANT_FIGURES {
        return format_decimal(value, 0);
    }
    let allowed_sig_figs = MAX_SIGNIFICANT_FIGURES - integer_digits;

    if value.abs() < 1.0 {
        let text = format_decimal(value, allowed_decimals);
        return truncate_significant(&text, allowed_sig_figs);
    }
    match allowed_sig_figs.min(allowed_decimals) {
        0 => trim_decimal_zeros(&format_decimal(value, 0)),
        decimals => trim_decimal_zeros(&round_fixed(value, decimals)),
    }
}

/// Format a float with `max_decimals` minus the integer digit count as the
/// fractional budget, stripping trailing zeros.
pub fn float_to_wire(value: f64, max_decimals: u32) -> String {
    let decimals = max_decimals.saturating_sub(integer_digit_count(value));
    strip_trailing_zeros(&round_fixed(value, decimals))
}
