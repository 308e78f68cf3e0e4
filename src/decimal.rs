use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Scalar type for every coordinate, constant, and scalar result in the
/// crate. 96-bit fixed-precision decimal, no global precision state.
pub type Dec = Decimal;

/// Anything with a smaller absolute value is treated as zero by the
/// geometric predicates.
pub const DEFAULT_EPSILON: Dec = dec!(0.0000000001);

/// Decimal places kept when comparing coordinate ratios in the
/// parallelism test.
pub const RATIO_ROUNDING: u32 = 3;

/// Decimal places kept when testing a dot product for orthogonality.
pub const DOT_ROUNDING: u32 = 6;

/// `|value| < DEFAULT_EPSILON`.
pub fn is_near_zero(value: Dec) -> bool {
    is_near_zero_within(value, DEFAULT_EPSILON)
}

/// `|value| < eps`.
pub fn is_near_zero_within(value: Dec, eps: Dec) -> bool {
    value.abs() < eps
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn near_zero_is_strict() {
        assert!(is_near_zero(dec!(0)));
        assert!(is_near_zero(dec!(0.00000000009)));
        assert!(is_near_zero(dec!(-0.00000000009)));
        assert!(!is_near_zero(DEFAULT_EPSILON));
        assert!(!is_near_zero(dec!(-0.0000000001)));
        assert!(!is_near_zero(dec!(1)));
    }

    #[test]
    fn custom_epsilon() {
        assert!(is_near_zero_within(dec!(0.0005), dec!(0.001)));
        assert!(!is_near_zero_within(dec!(0.001), dec!(0.001)));
    }
}
