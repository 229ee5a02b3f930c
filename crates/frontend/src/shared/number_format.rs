//! Number formatting for table cells and totals rows

/// Format a number with a thin-space thousands separator and a fixed number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    // Group digits in threes from the right
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i % 3) == (offset % 3) {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money: two decimal places, grouped thousands
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Whole number with grouped thousands
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Kilometers with one decimal place
pub fn format_km(value: f64) -> String {
    format!("{} km", format_number_with_decimals(value, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn respects_decimal_places() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
    }

    #[test]
    fn integers_and_km() {
        assert_eq!(format_number_int(1234567.0), "1 234 567");
        assert_eq!(format_number_int(-1234.0), "-1 234");
        assert_eq!(format_km(1042.25), "1 042.3 km");
    }

    #[test]
    fn short_numbers_are_untouched() {
        assert_eq!(format_number_int(7.0), "7");
        assert_eq!(format_number_int(999.0), "999");
        assert_eq!(format_number_int(1000.0), "1 000");
    }
}
