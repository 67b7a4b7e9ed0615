//! Price formatting.
//!
//! Prices render in Serbian convention: `.` as the thousands separator,
//! `,` as the decimal separator, and a fixed `din` suffix. Decimals are
//! shown only when the amount is fractional after rounding to two places.

/// Format a dinar amount for display, e.g. `45.000 din` or `94,40 din`.
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 8);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if frac != 0 {
        out.push(',');
        out.push_str(&format!("{frac:02}"));
    }
    out.push_str(" din");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_price(45_000.0), "45.000 din");
        assert_eq!(format_price(83_080.0), "83.080 din");
        assert_eq!(format_price(1_234_567.0), "1.234.567 din");
    }

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_price(0.0), "0 din");
        assert_eq!(format_price(80.0), "80 din");
        assert_eq!(format_price(800.0), "800 din");
    }

    #[test]
    fn fractional_amounts_get_two_decimals() {
        assert_eq!(format_price(94.4), "94,40 din");
        assert_eq!(format_price(1_234_567.5), "1.234.567,50 din");
    }

    #[test]
    fn whole_amounts_omit_decimals() {
        // 1200 * 1.18 rounds cleanly.
        assert_eq!(format_price(1416.0), "1.416 din");
    }
}
