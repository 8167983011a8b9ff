/// Fixed-width, fixed-precision numeric formatting.
///
/// A number is rendered with `digits` places after the decimal point and
/// right-aligned in a field of `width` characters. Numbers whose rendering
/// does not fit are replaced by `width` dots, so columns never shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedFormat {
    /// Total field width in characters.
    pub width: usize,
    /// Digits after the decimal point.
    pub digits: usize,
}

impl FixedFormat {
    /// Creates a new format.
    #[must_use]
    pub const fn new(width: usize, digits: usize) -> Self {
        Self { width, digits }
    }

    /// Formats `n` into a field of exactly `self.width` characters.
    #[must_use]
    pub fn format(&self, n: f64) -> String {
        let width = self.width;
        let fixed = fixed_point(n, self.digits);
        if fixed.len() <= width {
            format!("{fixed:>width$}")
        } else {
            ".".repeat(width)
        }
    }
}

impl Default for FixedFormat {
    fn default() -> Self {
        Self::new(5, 1)
    }
}

/// Formats `n` with `digits` decimals, left-padded with spaces to `len`
/// characters, or `len` dots if it does not fit.
#[must_use]
pub fn to_fixed(n: f64, len: usize, digits: usize) -> String {
    FixedFormat::new(len, digits).format(n)
}

/// Fractional digits needed to print any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Magnitude from which fixed-point output switches to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Renders `n` with `digits` decimals, rounding the exact binary value half
/// away from zero.
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`. Magnitudes
/// of `1e21` and above use the shortest exponent form, e.g. `1e+21`. Only a
/// strictly negative `n` gets a sign, so `-0.0` prints as `0.0` while
/// `-0.01` with one digit prints as `-0.0`.
fn fixed_point(n: f64, digits: usize) -> String {
    if n.is_nan() {
        return "NaN".to_owned();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    let magnitude = n.abs();
    if magnitude.is_infinite() {
        return format!("{sign}Infinity");
    }
    if magnitude >= EXPONENT_THRESHOLD {
        let exponent = format!("{magnitude:e}").replace('e', "e+");
        return format!("{sign}{exponent}");
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let next = frac_part.as_bytes().get(digits).copied().unwrap_or(b'0');
    if next >= b'5' {
        round_up(&mut kept);
    }

    let int_len = kept.len() - digits;
    let (int_digits, frac_digits) = kept.split_at(int_len);
    let mut out = String::with_capacity(sign.len() + kept.len() + 1);
    out.push_str(sign);
    out.extend(int_digits.iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|&b| char::from(b)));
    }
    out
}

/// Adds one unit in the last place of an ASCII digit string.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_width_5_one_digit() {
        assert_eq!(FixedFormat::default(), FixedFormat::new(5, 1));
        assert_eq!(FixedFormat::default().format(1.0), "  1.0");
    }

    #[test]
    fn pads_to_width() {
        assert_eq!(to_fixed(1.0, 5, 1), "  1.0");
        assert_eq!(to_fixed(-2.25, 7, 2), "  -2.25");
        assert_eq!(to_fixed(12.0, 4, 0), "  12");
    }

    #[test]
    fn exact_fit_has_no_padding() {
        assert_eq!(to_fixed(123.4, 5, 1), "123.4");
        assert_eq!(to_fixed(-12.3, 5, 1), "-12.3");
    }

    #[test]
    fn overflow_becomes_dots() {
        assert_eq!(to_fixed(1234.5, 5, 1), ".....");
        assert_eq!(to_fixed(-123.4, 5, 1), ".....");
        assert_eq!(to_fixed(1.0, 2, 1), "..");
    }

    #[test]
    fn rounds_to_digits() {
        assert_eq!(to_fixed(0.96, 5, 1), "  1.0");
        assert_eq!(to_fixed(3.14159, 6, 3), " 3.142");
    }

    #[test]
    fn negative_zero_renders_unsigned() {
        assert_eq!(to_fixed(-0.0, 5, 1), "  0.0");
        assert_eq!(to_fixed(-0.01, 5, 1), " -0.0");
    }

    #[test]
    fn halfway_rounds_away_from_zero() {
        assert_eq!(to_fixed(0.25, 5, 1), "  0.3");
        assert_eq!(to_fixed(-0.25, 5, 1), " -0.3");
        assert_eq!(to_fixed(2.5, 5, 0), "    3");
        assert_eq!(to_fixed(1.5, 5, 0), "    2");
        assert_eq!(to_fixed(0.5, 5, 0), "    1");
    }

    #[test]
    fn rounding_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 6, 2), "  1.00");
        assert_eq!(to_fixed(0.125, 6, 2), "  0.13");
    }

    #[test]
    fn carry_grows_integer_part() {
        assert_eq!(to_fixed(9.96, 5, 1), " 10.0");
        assert_eq!(to_fixed(99.95, 5, 1), "100.0");
        assert_eq!(to_fixed(999.95, 5, 1), ".....");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(to_fixed(f64::INFINITY, 5, 1), ".....");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 5, 1), ".....");
        assert_eq!(to_fixed(f64::NAN, 5, 1), "  NaN");
        assert_eq!(to_fixed(f64::INFINITY, 9, 1), " Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 10, 1), " -Infinity");
    }

    #[test]
    fn huge_magnitudes_use_exponent_form() {
        assert_eq!(to_fixed(1e21, 5, 1), "1e+21");
        assert_eq!(to_fixed(-1.5e300, 10, 2), " -1.5e+300");
    }

    #[test]
    fn many_digits_pad_with_zeros() {
        assert_eq!(to_fixed(0.5, 8, 6), "0.500000");
        assert_eq!(to_fixed(3.0, 4, 0), "   3");
    }
}
