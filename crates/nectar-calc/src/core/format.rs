//! Display formatting for results

/// Literal shown on the display after a failed operation
pub const ERROR_MARKER: &str = "Error";

/// Formats a result for the display.
///
/// Uses the default `f64` rendering, then drops trailing zeros after the
/// decimal point and a dangling point, so `6.0` shows as `6` and `6.50`
/// as `6.5`. Negative zero shows as `0`.
#[must_use]
pub fn format_number(n: f64) -> String {
    let n = if n == 0.0 { 0.0 } else { n };
    let s = n.to_string();
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Parses display text back to a number; `None` for the error marker
#[must_use]
pub fn parse_display(display: &str) -> Option<f64> {
    if display == ERROR_MARKER {
        return None;
    }
    display
        .strip_suffix('.')
        .unwrap_or(display)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Counts the digits in a numeral, ignoring sign and decimal point
#[must_use]
pub fn digit_count(display: &str) -> usize {
    display.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_results_have_no_fraction() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_fraction_kept() {
        assert_eq!(format_number(6.5), "6.5");
        assert_eq!(format_number(0.75), "0.75");
        assert_eq!(format_number(6.0000001), "6.0000001");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_large_values_are_not_exponential() {
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("0"), Some(0.0));
        assert_eq!(parse_display("12.5"), Some(12.5));
        assert_eq!(parse_display("3."), Some(3.0));
        assert_eq!(parse_display("-0.25"), Some(-0.25));
        assert_eq!(parse_display(ERROR_MARKER), None);
        assert_eq!(parse_display("abc"), None);
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("0"), 1);
        assert_eq!(digit_count("-12.50"), 4);
        assert_eq!(digit_count("0."), 1);
    }
}
