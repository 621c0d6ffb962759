//! pt-BR display formatting for normalized values.
//!
//! Percentages are carried as fractions internally and only turned back into
//! points here.

/// Format with `places` decimals, "." thousands separator and "," decimal comma.
pub fn format_decimal(value: f64, places: usize) -> String {
    let rendered = format!("{:.*}", places, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match fraction {
        Some(fraction) => format!("{sign}{grouped},{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Fraction rendered as percentage points: `0.2534` → `"25,34%"`.
pub fn format_percent_points(fraction: f64) -> String {
    format!("{}%", format_decimal(fraction * 100.0, 2))
}

/// Currency: `-63526000.0` → `"-R$ 63.526.000,00"`.
pub fn format_brl(value: f64) -> String {
    let amount = format_decimal(value, 2);
    match amount.strip_prefix('-') {
        Some(abs) => format!("-R$ {abs}"),
        None => format!("R$ {amount}"),
    }
}

/// Plain multiple such as P/L: `12.346` → `"12,35"`.
pub fn format_multiple(value: f64) -> String {
    format_decimal(value, 2)
}

/// Up to two decimals, trailing zeros dropped: `15.5` → `"15,5"`, `10.0` → `"10"`.
pub fn format_compact(value: f64) -> String {
    let rendered = format_decimal(value, 2);
    rendered
        .trim_end_matches('0')
        .trim_end_matches(',')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 2, "0,00")]
    #[test_case(1234.567, 2, "1.234,57")]
    #[test_case(-63_526_000.0, 2, "-63.526.000,00")]
    #[test_case(999.0, 0, "999")]
    #[test_case(1000.0, 0, "1.000")]
    #[test_case(-0.001, 2, "0,00" ; "negative rounding to zero has no sign")]
    #[test_case(123456.0, 1, "123.456,0")]
    fn test_format_decimal(value: f64, places: usize, expected: &str) {
        assert_eq!(format_decimal(value, places), expected);
    }

    #[test]
    fn test_format_percent_points() {
        assert_eq!(format_percent_points(0.25), "25,00%");
        assert_eq!(format_percent_points(-0.5504), "-55,04%");
        assert_eq!(format_percent_points(0.0), "0,00%");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(12.1), "R$ 12,10");
        assert_eq!(format_brl(-63_526_000.0), "-R$ 63.526.000,00");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(10.0), "10");
        assert_eq!(format_compact(15.5), "15,5");
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(-2.25), "-2,25");
        assert_eq!(format_compact(1000.0), "1.000");
    }

    #[test]
    fn test_format_multiple() {
        assert_eq!(format_multiple(12.346), "12,35");
    }
}
