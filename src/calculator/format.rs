//! Display formatting for operands.
//!
//! The integer part of an operand is grouped in thousands, the fractional
//! part is shown exactly as typed so that trailing zeros and a trailing
//! decimal point survive while the user is still entering digits.

/// Separator used by the default (en-US) formatter.
pub const DEFAULT_GROUPING_SEPARATOR: &str = ",";

/// Formats operands for the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormatter {
    grouping_separator: String,
}

impl Default for DisplayFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_GROUPING_SEPARATOR)
    }
}

impl DisplayFormatter {
    /// Create a formatter with the given thousands separator.
    ///
    /// An empty separator disables grouping.
    pub fn new(grouping_separator: impl Into<String>) -> Self {
        Self {
            grouping_separator: grouping_separator.into(),
        }
    }

    /// Format an operand, or nothing when the operand is absent.
    pub fn format(&self, operand: Option<&str>) -> Option<String> {
        let operand = operand?;
        let mut parts = operand.split('.');
        let integer = parts.next().unwrap_or_default();
        let grouped = self.format_integer(integer);

        match parts.next() {
            Some(fraction) => Some(format!("{}.{}", grouped, fraction)),
            None => Some(grouped),
        }
    }

    /// Format the integer part with grouping and no fractional digits.
    ///
    /// Plain digit runs are grouped as typed; only exponent forms and
    /// non-finite results go through `f64`.
    fn format_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };
        if integer.is_empty() || (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        {
            let trimmed = digits.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            return format!("{}{}", sign, self.group_digits(digits));
        }

        let value = parse_number(integer);
        if value.is_nan() {
            return "NaN".to_string();
        }

        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_infinite() {
            return format!("{}∞", sign);
        }

        let digits = format!("{:.0}", value.abs().round());
        format!("{}{}", sign, self.group_digits(&digits))
    }

    fn group_digits(&self, digits: &str) -> String {
        if self.grouping_separator.is_empty() || digits.len() <= 3 {
            return digits.to_string();
        }

        let head = digits.len() % 3;
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && i % 3 == head % 3 {
                grouped.push_str(&self.grouping_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

/// Format an operand with the default en-US grouping.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    DisplayFormatter::default().format(operand)
}

/// Lenient number conversion for the integer part.
///
/// Empty input is zero; anything that is not a plain decimal or exponent
/// literal (or `Infinity`) is NaN.
fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')) =>
        {
            text.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_operand_formats_to_nothing() {
        assert_eq!(format_operand(None), None);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_operand(Some("0")).as_deref(), Some("0"));
        assert_eq!(format_operand(Some("999")).as_deref(), Some("999"));
        assert_eq!(format_operand(Some("1000")).as_deref(), Some("1,000"));
        assert_eq!(format_operand(Some("123456")).as_deref(), Some("123,456"));
        assert_eq!(
            format_operand(Some("1234567")).as_deref(),
            Some("1,234,567")
        );
    }

    #[test]
    fn test_fraction_is_verbatim() {
        assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
        assert_eq!(format_operand(Some("1.500")).as_deref(), Some("1.500"));
        assert_eq!(format_operand(Some("12.")).as_deref(), Some("12."));
        assert_eq!(
            format_operand(Some("0.0001234")).as_deref(),
            Some("0.0001234")
        );
    }

    #[test]
    fn test_leading_point_and_leading_zero() {
        assert_eq!(format_operand(Some(".5")).as_deref(), Some("0.5"));
        assert_eq!(format_operand(Some(".")).as_deref(), Some("0."));
        assert_eq!(format_operand(Some("007")).as_deref(), Some("7"));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_operand(Some("-1234")).as_deref(), Some("-1,234"));
        assert_eq!(format_operand(Some("-0.5")).as_deref(), Some("-0.5"));
    }

    #[test]
    fn test_special_results() {
        assert_eq!(format_operand(Some("Infinity")).as_deref(), Some("∞"));
        assert_eq!(format_operand(Some("-Infinity")).as_deref(), Some("-∞"));
        assert_eq!(format_operand(Some("NaN")).as_deref(), Some("NaN"));
        assert_eq!(
            format_operand(Some("1e+21")).as_deref(),
            Some("1,000,000,000,000,000,000,000")
        );
    }

    #[test]
    fn test_long_integers_keep_typed_digits() {
        assert_eq!(
            format_operand(Some("9007199254740993")).as_deref(),
            Some("9,007,199,254,740,993")
        );
        assert_eq!(
            format_operand(Some("12345678901234567891")).as_deref(),
            Some("12,345,678,901,234,567,891")
        );
        assert_eq!(
            format_operand(Some("-000123456789012345678901.5")).as_deref(),
            Some("-123,456,789,012,345,678,901.5")
        );
    }

    #[test]
    fn test_custom_separator() {
        let formatter = DisplayFormatter::new(" ");
        assert_eq!(
            formatter.format(Some("9876543.21")).as_deref(),
            Some("9 876 543.21")
        );

        let formatter = DisplayFormatter::new("");
        assert_eq!(formatter.format(Some("9876543")).as_deref(), Some("9876543"));
    }
}
