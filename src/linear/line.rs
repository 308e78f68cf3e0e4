use std::fmt;

use crate::affine;
use crate::decimal::{self, Dec};
use crate::error::{GeometryError, Result};
use crate::vector::Vector;

/// A line in the plane, as the point set `normal · x = constant_term`.
///
/// The basepoint is derived once at construction and cached; it is
/// `None` iff the normal is the zero vector (the degenerate line).
#[derive(Debug, Clone)]
pub struct Line {
    normal: Vector,
    constant_term: Dec,
    basepoint: Option<Vector>,
}

impl Line {
    pub const DIMENSION: usize = 2;

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

    /// A canonical point on the line, or `None` for the degenerate
    /// (zero-normal) line. Used to tell coincident parallels apart.
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

impl Default for Line {
    /// The degenerate line: zero normal, zero constant term.
    fn default() -> Self {
        Self {
            normal: Vector::zero(Self::DIMENSION),
            constant_term: Dec::ZERO,
            basepoint: None,
        }
    }
}

/// Geometric coincidence: both lines denote the same point set.
impl PartialEq for Line {
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
            .map(|difference| difference.is_orthogonal_to(&other.normal))
            .unwrap_or(false)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        affine::write_equation(f, &self.normal, self.constant_term)
    }
}
