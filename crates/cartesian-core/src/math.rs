//! Numeric helpers for building plotted functions.

/// Integer remainder of `x` by `modulus`, or `NaN` when either argument is
/// not a whole number.
///
/// Follows the sign of `x`, like the `%` operator on integers. A zero
/// modulus also yields `NaN`.
pub fn integer_mod(x: f64, modulus: f64) -> f64 {
    if x.fract() != 0.0 || modulus.fract() != 0.0 || modulus == 0.0 {
        return f64::NAN;
    }
    x % modulus
}

/// Truncates `x` toward negative infinity at `precision` decimal places.
///
/// Precisions beyond what an `f64` can resolve leave `x` unchanged.
pub fn round_down(x: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.floor() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_mod() {
        assert_eq!(integer_mod(9.0, 7.0), 2.0);
        assert_eq!(integer_mod(-9.0, 7.0), -2.0);
        assert!(integer_mod(2.5, 7.0).is_nan());
        assert!(integer_mod(4.0, 0.0).is_nan());
        assert!(integer_mod(f64::INFINITY, 7.0).is_nan());
    }

    #[test]
    fn test_round_down() {
        assert_eq!(round_down(1.239, 2), 1.23);
        assert_eq!(round_down(-1.231, 1), -1.3);
        assert_eq!(round_down(7.9, 0), 7.0);
    }

    #[test]
    fn test_round_down_excessive_precision() {
        assert_eq!(round_down(1.25, u32::MAX), 1.25);
        assert_eq!(round_down(-3.5, 1 << 31), -3.5);
        assert_eq!(round_down(2.0, 400), 2.0);
        assert_eq!(round_down(0.0, 400), 0.0);
    }
}
