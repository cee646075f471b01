// src/coco_runtime/src/general.rs
//
// General-format rendering of f64, modelled on C's "%g":
//   - fixed notation when the decimal exponent X satisfies -4 <= X < 6,
//     scientific otherwise ("1e+06", "1.5e-07", exponent at least two digits)
//   - no trailing zeros and no trailing decimal point
//   - "nan", "-nan", "inf", "-inf" for the special values
//
// The digits are the shortest string that parses back to the same f64 (Ryu),
// not "%g"'s fixed six significant digits. Output matches "%g" exactly
// whenever that shortest string has six digits or fewer.

/// Smallest decimal exponent still written in fixed notation.
pub const MIN_FIXED_EXPONENT: i32 = -4;
/// First decimal exponent written in scientific notation ("%g" default precision).
pub const MIN_SCIENTIFIC_EXPONENT: i32 = 6;

/// Appends the general-format text of `value` to `out` (no newline).
pub fn format_general(value: f64, out: &mut Vec<u8>) {
    if value.is_nan() {
        let text: &[u8] = if value.is_sign_negative() { b"-nan" } else { b"nan" };
        out.extend_from_slice(text);
        return;
    }
    if value.is_sign_negative() {
        out.push(b'-');
    }
    if value.is_infinite() {
        out.extend_from_slice(b"inf");
        return;
    }
    if value == 0.0 {
        out.push(b'0');
        return;
    }

    let mut buf = ryu::Buffer::new();
    let decimal = Decimal::parse(buf.format_finite(value.abs()));

    if (MIN_FIXED_EXPONENT..MIN_SCIENTIFIC_EXPONENT).contains(&decimal.exponent) {
        decimal.write_fixed(out);
    } else {
        decimal.write_scientific(out);
    }
}

/// Significant digits `d0 d1 d2 ...` standing for `d0.d1d2... * 10^exponent`.
/// Never empty and never starts or ends with '0' (zero is handled by the caller).
#[derive(Debug, PartialEq, Eq)]
struct Decimal {
    digits: Vec<u8>,
    exponent: i32,
}

impl Decimal {
    // Accepts Ryu's output for a positive finite non-zero value:
    // "3.14", "1000000.0", "0.001", "1e16", "1.5e-7".
    fn parse(shortest: &str) -> Decimal {
        let (mantissa, exp) = match shortest.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (shortest, 0),
        };
        let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
        // Position of the decimal point, counted from the left of `digits`
        let mut point = int_part.len() as i32 + exp;

        let leading = digits.iter().take_while(|&&d| d == b'0').count();
        digits.drain(..leading);
        point -= leading as i32;
        while digits.last() == Some(&b'0') {
            digits.pop();
        }

        Decimal {
            digits,
            exponent: point - 1,
        }
    }

    fn write_fixed(&self, out: &mut Vec<u8>) {
        if self.exponent < 0 {
            out.extend_from_slice(b"0.");
            out.extend(std::iter::repeat(b'0').take((-self.exponent - 1) as usize));
            out.extend_from_slice(&self.digits);
            return;
        }

        let int_len = self.exponent as usize + 1;
        if self.digits.len() <= int_len {
            out.extend_from_slice(&self.digits);
            out.extend(std::iter::repeat(b'0').take(int_len - self.digits.len()));
        } else {
            let (int_digits, frac_digits) = self.digits.split_at(int_len);
            out.extend_from_slice(int_digits);
            out.push(b'.');
            out.extend_from_slice(frac_digits);
        }
    }

    fn write_scientific(&self, out: &mut Vec<u8>) {
        let (first, rest) = self.digits.split_at(1);
        out.extend_from_slice(first);
        if !rest.is_empty() {
            out.push(b'.');
            out.extend_from_slice(rest);
        }

        out.push(b'e');
        out.push(if self.exponent < 0 { b'-' } else { b'+' });
        let magnitude = self.exponent.unsigned_abs();
        if magnitude < 10 {
            out.push(b'0');
        }
        let mut buf = itoa::Buffer::new();
        out.extend_from_slice(buf.format(magnitude).as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn general(value: f64) -> String {
        let mut out = Vec::new();
        format_general(value, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_ryu_shapes() {
        assert_eq!(
            Decimal::parse("3.14"),
            Decimal { digits: b"314".to_vec(), exponent: 0 }
        );
        assert_eq!(
            Decimal::parse("1000000.0"),
            Decimal { digits: b"1".to_vec(), exponent: 6 }
        );
        assert_eq!(
            Decimal::parse("0.00123"),
            Decimal { digits: b"123".to_vec(), exponent: -3 }
        );
        assert_eq!(
            Decimal::parse("1.5e-7"),
            Decimal { digits: b"15".to_vec(), exponent: -7 }
        );
        assert_eq!(
            Decimal::parse("1e16"),
            Decimal { digits: b"1".to_vec(), exponent: 16 }
        );
    }

    #[test]
    fn fixed_notation_in_normal_range() {
        assert_eq!(general(3.14), "3.14");
        assert_eq!(general(-2.5), "-2.5");
        assert_eq!(general(1.0), "1");
        assert_eq!(general(42.0), "42");
        assert_eq!(general(100000.0), "100000");
        assert_eq!(general(123456.0), "123456");
        assert_eq!(general(0.5), "0.5");
        assert_eq!(general(0.0001), "0.0001");
        assert_eq!(general(-0.00025), "-0.00025");
    }

    #[test]
    fn scientific_outside_threshold() {
        assert_eq!(general(1000000.0), "1e+06");
        assert_eq!(general(-1000000.0), "-1e+06");
        assert_eq!(general(2.5e10), "2.5e+10");
        assert_eq!(general(0.00001), "1e-05");
        assert_eq!(general(1.5e-7), "1.5e-07");
        assert_eq!(general(1e300), "1e+300");
        assert_eq!(general(5e-324), "5e-324");
        assert_eq!(general(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn keeps_digits_needed_to_round_trip() {
        assert_eq!(general(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(general(1234567.0), "1.234567e+06");
        assert_eq!(general(123456.7), "123456.7");
    }

    #[test]
    fn special_values() {
        assert_eq!(general(0.0), "0");
        assert_eq!(general(-0.0), "-0");
        assert_eq!(general(f64::NAN), "nan");
        assert_eq!(general(-f64::NAN), "-nan");
        assert_eq!(general(f64::INFINITY), "inf");
        assert_eq!(general(f64::NEG_INFINITY), "-inf");
    }

    proptest! {
        #[test]
        fn finite_values_round_trip(value in any::<f64>()) {
            prop_assume!(value.is_finite());
            let text = general(value);
            let parsed: f64 = text.parse().unwrap();
            prop_assert_eq!(parsed, value);
            prop_assert_eq!(parsed.is_sign_negative(), value.is_sign_negative());
        }

        #[test]
        fn never_ends_in_a_trailing_zero_fraction(value in any::<f64>()) {
            prop_assume!(value.is_finite());
            let text = general(value);
            let mantissa = text.split('e').next().unwrap();
            if mantissa.contains('.') {
                prop_assert!(!mantissa.ends_with('0'));
                prop_assert!(!mantissa.ends_with('.'));
            }
        }
    }
}
