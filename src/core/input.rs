//! Numeric coercion for free-text host inputs.
//!
//! The order and payment forms submit every numeric field as text. The
//! policy, kept from the original system, is to fail soft: input that does
//! not parse becomes zero rather than rejecting the whole submission.
//! These conversions are named functions so tests can target the coercion
//! directly instead of exercising it through the mutation paths.

/// Parses a monetary or measurement amount, coercing bad input to zero.
///
/// Trims whitespace first. Unparsable text, `NaN` and infinities all
/// coerce to `0.0`; negative values pass through unchanged.
#[must_use]
pub fn parse_amount(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parses an optional measurement field.
///
/// Blank or unparsable input yields `None`, and so does zero - the
/// original treats a zero measurement as "not provided" and hides it from
/// the order card.
#[must_use]
pub fn parse_measurement(input: &str) -> Option<f64> {
    let value = parse_amount(input);
    if value == 0.0 { None } else { Some(value) }
}
