//! Decimal precision policy shared across the converter.
//!
//! All ratio arithmetic runs on `bigdecimal::BigDecimal` so that chains of
//! 10^5 factors stay exact in magnitude (exponents far beyond machine
//! floats). Two contexts exist: a wide one for folding edge weights inside
//! the graph and a narrower one for expression evaluation and reporting.

use std::num::NonZeroU64;

use bigdecimal::{BigDecimal, One, RoundingMode};

/// Significant digits used when folding edge weights along a graph path.
pub const GRAPH_DIGITS: u64 = 30;

/// Significant digits used for expression evaluation and reported ratios.
pub const REPORT_DIGITS: u64 = 15;

fn precision(n: u64) -> NonZeroU64 {
    // both contexts are nonzero constants
    NonZeroU64::new(n).expect("precision is nonzero")
}

/// Round `value` to `n` significant digits, half-up.
pub fn round_half_up(value: BigDecimal, n: u64) -> BigDecimal {
    value.with_precision_round(precision(n), RoundingMode::HalfUp)
}

/// `a * b` rounded to `n` significant digits, half-up.
pub fn mul_half_up(a: &BigDecimal, b: &BigDecimal, n: u64) -> BigDecimal {
    round_half_up(a * b, n)
}

/// `a / b` rounded to `n` significant digits, half-up.
///
/// The caller must guarantee `b` is nonzero.
pub fn div_half_up(a: &BigDecimal, b: &BigDecimal, n: u64) -> BigDecimal {
    round_half_up(a / b, n)
}

/// `1 / value` rounded to `n` significant digits, half-up.
pub fn recip(value: &BigDecimal, n: u64) -> BigDecimal {
    div_half_up(&BigDecimal::one(), value, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn rounds_half_up_at_boundary() {
        assert_eq!(round_half_up(dec("1.5"), 1), dec("2"));
        assert_eq!(round_half_up(dec("1.4"), 1), dec("1"));
        assert_eq!(round_half_up(dec("0.125"), 2), dec("0.13"));
    }

    #[test]
    fn keeps_short_values_unchanged() {
        assert_eq!(round_half_up(dec("3.6"), 15), dec("3.6"));
        assert_eq!(round_half_up(dec("1000"), 15), dec("1000"));
    }

    #[test]
    fn recip_of_power_of_ten_is_exact() {
        assert_eq!(recip(&dec("1000"), GRAPH_DIGITS), dec("0.001"));
    }

    #[test]
    fn recip_of_repeating_fraction_is_rounded() {
        let r = recip(&dec("3600"), GRAPH_DIGITS);
        // 30 significant digits, last one rounded up
        assert_eq!(r, dec("0.000277777777777777777777777777778"));
    }

    #[test]
    fn div_matches_long_division() {
        let r = div_half_up(&dec("0.001"), &dec("0.000277777777777777777777777777778"), REPORT_DIGITS);
        assert_eq!(r, dec("3.60000000000000"));
    }
}
