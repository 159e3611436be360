//! Conversions between display text and numbers

/// Formats an evaluation result for the display buffer.
///
/// Integral values render without a decimal point. Everything else renders
/// with `max_fraction_digits` fractional digits, then loses trailing zeros and
/// any dangling `.`.
#[must_use]
pub fn format_result(value: f64, max_fraction_digits: usize) -> String {
    let text = if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.max_fraction_digits$}");
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    };
    normalize_zero(text)
}

/// Plain decimal rendering used when the display is rewritten in place
#[must_use]
pub fn number_text(value: f64) -> String {
    normalize_zero(value.to_string())
}

/// Parses display text, yielding 0 for anything unparsable
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

fn normalize_zero(text: String) -> String {
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}
