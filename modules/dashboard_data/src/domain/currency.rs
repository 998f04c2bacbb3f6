//! US dollar formatting for amounts stored in cents

/// Render cents as `$1,234.56`; negatives get a leading `-`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let digits = (abs / 100).to_string();

    let mut dollars = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            dollars.push(',');
        }
        dollars.push(ch);
    }

    format!("{}${}.{:02}", sign, dollars, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(format_currency(0), "$0.00");
    }

    #[test]
    fn formats_cents_below_a_dollar() {
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(666), "$6.66");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(100_000), "$1,000.00");
        assert_eq!(format_currency(125_632), "$1,256.32");
        assert_eq!(format_currency(123_456_789), "$1,234,567.89");
        assert_eq!(format_currency(99_999_999), "$999,999.99");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_currency(-500), "-$5.00");
        assert_eq!(format_currency(-100_001), "-$1,000.01");
    }

    #[test]
    fn handles_extreme_values() {
        assert_eq!(format_currency(i64::MIN), "-$92,233,720,368,547,758.08");
    }
}
