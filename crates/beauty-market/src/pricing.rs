//! Display formatting for Dominican peso amounts.
//!
//! Amounts are always rendered with two decimals and a `,` thousands separator.
//! Cents are rounded half-up on the exact value the `f64` stores, so `1.005`
//! (stored as `1.00499...`) renders `1.00` while `0.125` renders `0.13`.
//! Negative amounts carry the sign ahead of the currency prefix
//! (`-RD$1,234.50`), and non-finite amounts render as [`NON_FINITE_LABEL`].

/// Literal prefix for every formatted price.
pub const CURRENCY_PREFIX: &str = "RD$";

/// Rendered in place of digits when the amount is infinite or NaN.
pub const NON_FINITE_LABEL: &str = "--";

const EXACT_FRACTION_DIGITS: usize = 1074;

const STRIPPED_CHARS: [char; 4] = ['R', 'D', '$', ','];

/// Error returned when a price label does not contain a numeric amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a price")]
pub struct PriceParseError {
    pub input: String,
}

/// Formats `amount` as `RD$1,234.50`.
pub fn format_price(amount: f64) -> String {
    render(amount, CURRENCY_PREFIX)
}

/// Formats `amount` as `1,234.50`, for layouts that draw the currency separately.
pub fn format_price_number(amount: f64) -> String {
    render(amount, "")
}

/// Formats both ends of a range as `RD$1,000.00 - RD$2,500.00`.
///
/// The bounds are rendered as given; ordering is the caller's concern.
pub fn format_price_range(min: f64, max: f64) -> String {
    format!("{} - {}", format_price(min), format_price(max))
}

/// Reads an amount back out of a formatted label.
///
/// The characters `R`, `D`, `$` and `,` are removed wherever they appear and
/// the remainder must be a finite decimal literal.
pub fn parse_price(text: &str) -> Result<f64, PriceParseError> {
    let stripped: String = text
        .chars()
        .filter(|ch| !STRIPPED_CHARS.contains(ch))
        .collect();
    let candidate = stripped.trim();

    let invalid = || PriceParseError {
        input: text.to_string(),
    };

    // `f64::from_str` also accepts "inf" and "NaN"; only digit literals count.
    if !candidate
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E'))
    {
        return Err(invalid());
    }

    match candidate.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

fn render(amount: f64, prefix: &str) -> String {
    if !amount.is_finite() {
        return format!("{prefix}{NON_FINITE_LABEL}");
    }

    // Every finite f64 terminates within this many fractional digits, so the
    // expansion below is exact and rounding happens only on the cents digit.
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, amount.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|byte| byte - b'0')
        .collect();
    if fraction.as_bytes().get(2).is_some_and(|digit| *digit >= b'5') {
        increment(&mut digits);
    }

    let sign = if amount < 0.0 && digits.iter().any(|digit| *digit != 0) {
        "-"
    } else {
        ""
    };
    let split = digits.len() - 2;
    let whole: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    let cents: String = digits[split..].iter().map(|d| char::from(b'0' + d)).collect();

    format!("{sign}{prefix}{}.{cents}", group_thousands(&whole))
}

/// Adds one unit in the last place of a big-endian decimal digit buffer.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_prefix_and_separators() {
        assert_eq!(format_price(1234.5), "RD$1,234.50");
        assert_eq!(format_price(0.0), "RD$0.00");
        assert_eq!(format_price(999.0), "RD$999.00");
        assert_eq!(format_price(1_000_000.0), "RD$1,000,000.00");
        assert_eq!(format_price(12_345_678.9), "RD$12,345,678.90");
    }

    #[test]
    fn number_variant_omits_prefix() {
        assert_eq!(format_price_number(999.0), "999.00");
        assert_eq!(format_price_number(2500.0), "2,500.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(format_price(0.125), "RD$0.13");
        assert_eq!(format_price(10.994), "RD$10.99");
        assert_eq!(format_price(999.999), "RD$1,000.00");
        assert_eq!(format_price(2.5), "RD$2.50");
    }

    #[test]
    fn rounds_on_the_stored_binary_value() {
        // Each of these is stored slightly below the half cent.
        assert_eq!(format_price(1.005), "RD$1.00");
        assert_eq!(format_price(0.015), "RD$0.01");
        assert_eq!(format_price(0.045), "RD$0.04");
        assert_eq!(format_price(2.675), "RD$2.67");
        // Exactly representable half cents round up.
        assert_eq!(format_price(0.125), "RD$0.13");
        assert_eq!(format_price(0.375), "RD$0.38");
        assert_eq!(format_price(-0.125), "-RD$0.13");
    }

    #[test]
    fn carries_through_every_digit() {
        assert_eq!(format_price(0.999), "RD$1.00");
        assert_eq!(format_price(9_999.996), "RD$10,000.00");
        assert_eq!(format_price(0.004), "RD$0.00");
    }

    #[test]
    fn very_large_amounts_keep_their_digits() {
        assert_eq!(
            format_price(1e40),
            "RD$10,000,000,000,000,000,303,786,028,427,003,666,890,752.00"
        );
        let max = format_price(f64::MAX);
        assert!(max.starts_with("RD$179,769,313,486,231,570,"));
        assert!(max.ends_with(".00"));
        assert_eq!(format_price(f64::MIN_POSITIVE), "RD$0.00");
    }

    #[test]
    fn range_joins_both_bounds() {
        assert_eq!(
            format_price_range(1000.0, 2500.0),
            "RD$1,000.00 - RD$2,500.00"
        );
        assert_eq!(format_price_range(3000.0, 500.0), "RD$3,000.00 - RD$500.00");
    }

    #[test]
    fn negative_sign_leads_prefix() {
        assert_eq!(format_price(-1234.5), "-RD$1,234.50");
        assert_eq!(format_price_number(-1234.5), "-1,234.50");
        assert_eq!(format_price(-0.001), "RD$0.00");
        assert_eq!(format_price(-0.0), "RD$0.00");
    }

    #[test]
    fn non_finite_amounts_render_placeholder() {
        assert_eq!(format_price(f64::NAN), "RD$--");
        assert_eq!(format_price(f64::INFINITY), "RD$--");
        assert_eq!(format_price_number(f64::NEG_INFINITY), "--");
    }

    #[test]
    fn parses_formatted_labels() {
        assert_eq!(parse_price("RD$1,234.50"), Ok(1234.5));
        assert_eq!(parse_price("RD$0.00"), Ok(0.0));
        assert_eq!(parse_price("2,500"), Ok(2500.0));
        assert_eq!(parse_price(" RD$ 75.25 "), Ok(75.25));
        assert_eq!(parse_price("-RD$1,234.50"), Ok(-1234.5));
    }

    #[test]
    fn rejects_non_numeric_labels() {
        for input in ["", "RD$", "abc", "RD$12abc", "RD$--", "inf", "NaN", "1.2.3"] {
            let err = parse_price(input).expect_err("should not parse");
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn two_decimal_amounts_survive_a_round_trip() {
        for cents in [0_u64, 1, 99, 150, 123_450, 99_999_999, 250_000_075] {
            let amount = cents as f64 / 100.0;
            let parsed = parse_price(&format_price(amount)).expect("round trip parses");
            assert!(
                (parsed - amount).abs() < 1e-9,
                "{amount} came back as {parsed}"
            );
        }
    }
}
