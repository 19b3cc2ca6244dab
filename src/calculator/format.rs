//! Multi-radix formatting of a result.

/// Binary digits without a `0b` prefix, `-` prefixed when negative.
pub fn to_binary(value: i32) -> String {
    if value < 0 {
        format!("-{:b}", value.unsigned_abs())
    } else {
        format!("{:b}", value)
    }
}

/// Signed decimal.
pub fn to_decimal(value: i32) -> String {
    value.to_string()
}

/// Octal digits of the 32-bit pattern.
///
/// Negative values are rendered as their two's-complement bits rather than
/// with a sign, unlike [`to_binary`] and [`to_decimal`].
pub fn to_octal(value: i32) -> String {
    format!("{:o}", value)
}

/// The three-line result shown in place of the input.
pub fn result_message(value: i32) -> String {
    format!(
        "Binary: {}\nDecimal: {}\nOctal: {}",
        to_binary(value),
        to_decimal(value),
        to_octal(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(to_binary(8), "1000");
        assert_eq!(to_decimal(8), "8");
        assert_eq!(to_octal(8), "10");
    }

    #[test]
    fn test_zero() {
        assert_eq!(result_message(0), "Binary: 0\nDecimal: 0\nOctal: 0");
    }

    #[test]
    fn test_negative_signs_differ() {
        assert_eq!(to_binary(-5), "-101");
        assert_eq!(to_decimal(-5), "-5");
        assert_eq!(to_octal(-5), "37777777773");
        assert_eq!(to_octal(-1), "37777777777");
    }

    #[test]
    fn test_min_value() {
        assert_eq!(to_binary(i32::MIN), format!("-1{}", "0".repeat(31)));
        assert_eq!(to_octal(i32::MIN), "20000000000");
    }
}
