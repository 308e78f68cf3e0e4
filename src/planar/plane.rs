use std::fmt;

use crate::affine;
use crate::decimal::{self, Dec};
use crate::error::{GeometryError, Result};
use crate::vector::Vector;

/// A plane in 3-space, as the point set `normal · x = constant_term`.
///
/// Same canonical-basepoint construction as [`Line`], one dimension up.
///
/// [`Line`]: crate::Line
#[derive(Debug, Clone)]
pub struct Plane {
    normal: Vector,
    constant_term: Dec,
    basepoint: Option<Vector>,
}

impl Plane {
    pub const DIMENSION: usize = 3;

    pub fn new(normal: Vector, constant_term: Dec) -> Result<Self> {
        if normal.dimension() != Self::DIMENSION {
            return Err(GeometryError::DimensionMismatch {
                left: normal.dimension(),
                right: Self::DIMENSION,
            });
        }
        let basepoint = affine::basepoint(&normal, constant_term);
        Ok(Self {
            normal,
            constant_term,
            basepoint,
        })
    }

    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    pub fn constant_term(&self) -> Dec {
        self.constant_term
    }

    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    pub fn is_degenerate(&self) -> bool {
        self.basepoint.is_none()
    }

    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }
}

impl Default for Plane {
    /// The degenerate plane: zero normal, zero constant term.
    fn default() -> Self {
        Self {
            normal: Vector::zero(Self::DIMENSION),
            constant_term: Dec::ZERO,
            basepoint: None,
        }
    }
}

/// Geometric coincidence: both planes denote the same point set.
impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        if self.normal.is_zero() {
            return other.normal.is_zero()
                && decimal::is_near_zero(self.constant_term - other.constant_term);
        }
        if other.normal.is_zero() || !self.is_parallel_to(other) {
            return false;
        }
        let (Some(a), Some(b)) = (&self.basepoint, &other.basepoint) else {
            return false;
        };
        a.sub(b)
            .map(|difference| difference.is_orthogonal_to(&self.normal))
            .unwrap_or(false)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        affine::write_equation(f, &self.normal, self.constant_term)
    }
}
