//! Basepoint derivation and equation rendering shared by [`Line`] and
//! [`Plane`].
//!
//! [`Line`]: crate::Line
//! [`Plane`]: crate::Plane

use std::fmt;

use crate::decimal::Dec;
use crate::vector::Vector;

const EQUATION_ROUNDING: u32 = 3;

/// Canonical point on the set `normal · x = constant_term`: zero
/// everywhere except the first non-near-zero normal coordinate, which
/// carries `constant_term / normal[pivot]`. `None` for a zero normal.
pub(crate) fn basepoint(normal: &Vector, constant_term: Dec) -> Option<Vector> {
    let pivot = normal.first_nonzero_index()?;
    let mut coordinates = vec![Dec::ZERO; normal.dimension()];
    coordinates[pivot] = constant_term / normal[pivot];
    Some(Vector::from_coordinates(coordinates))
}

/// Writes `c1x_1 + c2x_2 + … = k` with coefficients rounded to 3
/// places: zero terms omitted, unit coefficients printed bare, the
/// first printed term carrying only a leading minus, and `0` when no
/// term survives rounding.
pub(crate) fn write_equation(
    f: &mut fmt::Formatter<'_>,
    normal: &Vector,
    constant_term: Dec,
) -> fmt::Result {
    let mut printed_any = false;
    for (i, coefficient) in normal.iter().enumerate() {
        let rounded = coefficient.round_dp(EQUATION_ROUNDING);
        if rounded.is_zero() {
            continue;
        }
        if printed_any {
            f.write_str(if rounded.is_sign_negative() { " - " } else { " + " })?;
        } else if rounded.is_sign_negative() {
            f.write_str("-")?;
        }
        let magnitude = rounded.abs().normalize();
        if magnitude != Dec::ONE {
            write!(f, "{magnitude}")?;
        }
        write!(f, "x_{}", i + 1)?;
        printed_any = true;
    }
    if !printed_any {
        f.write_str("0")?;
    }
    write!(f, " = {}", constant_term.round_dp(EQUATION_ROUNDING).normalize())
}
