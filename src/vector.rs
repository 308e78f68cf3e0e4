use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::decimal::{self, Dec, DOT_ROUNDING, RATIO_ROUNDING};
use crate::error::{GeometryError, Result};

/// Immutable, fixed-dimension tuple of decimal coordinates.
///
/// `PartialEq` is exact coordinate-wise decimal equality; the geometric
/// predicates ([`Vector::is_zero`], [`Vector::is_parallel_to`],
/// [`Vector::is_orthogonal_to`]) are tolerance-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector {
    coordinates: Vec<Dec>,
}

impl Vector {
    pub fn new(coordinates: Vec<Dec>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(GeometryError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    /// Parses decimal strings, plain (`"-8.187"`) or scientific
    /// (`"1e-3"`) notation.
    pub fn parse<I, S>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|s| {
                let s = s.as_ref();
                Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .map_err(|_| GeometryError::InvalidCoordinate {
                        value: s.to_string(),
                    })
            })
            .try_collect()?;
        Self::new(coordinates)
    }

    /// NaN, infinite, and out-of-range values are rejected.
    pub fn from_f64s<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|value| {
                Dec::from_f64(value).ok_or(GeometryError::InvalidCoordinate {
                    value: value.to_string(),
                })
            })
            .try_collect()?;
        Self::new(coordinates)
    }

    /// All-zero vector. Panics on dimension 0, which is constructor
    /// misuse rather than a data error.
    pub fn zero(dimension: usize) -> Self {
        assert!(dimension > 0, "a vector needs at least one coordinate");
        Self {
            coordinates: vec![Dec::ZERO; dimension],
        }
    }

    pub(crate) fn from_coordinates(coordinates: Vec<Dec>) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self { coordinates }
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[Dec] {
        &self.coordinates
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dec> {
        self.coordinates.iter()
    }

    /// Index of the first coordinate that is not near zero, scanning
    /// left to right. `None` for the zero vector.
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.coordinates
            .iter()
            .position(|c| !decimal::is_near_zero(*c))
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(GeometryError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(Self::from_coordinates(
            self.iter().zip(other.iter()).map(|(a, b)| a + b).collect(),
        ))
    }

    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        Ok(Self::from_coordinates(
            self.iter().zip(other.iter()).map(|(a, b)| a - b).collect(),
        ))
    }

    pub fn scale(&self, scalar: Dec) -> Self {
        Self::from_coordinates(self.iter().map(|c| c * scalar).collect())
    }

    pub fn magnitude_squared(&self) -> Dec {
        self.iter().map(|c| c * c).sum()
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> Dec {
        // sqrt of a nonnegative decimal always exists
        self.magnitude_squared().sqrt().unwrap_or(Zero::zero())
    }

    /// Unit vector pointing the same way as `self`. Only the
    /// exact-zero magnitude is rejected; a near-zero one divides.
    pub fn direction(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude.is_zero() {
            return Err(GeometryError::ZeroMagnitude);
        }
        Ok(self.scale(Dec::ONE / magnitude))
    }

    pub fn dot(&self, other: &Self) -> Result<Dec> {
        self.check_dimension(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Angle between `self` and `other` in radians.
    ///
    /// If either vector has zero magnitude the angle is undefined; this
    /// returns 0 in that case by contract rather than an error. The
    /// arccosine runs through `f64`; everything else stays decimal.
    pub fn angle(&self, other: &Self) -> Result<Dec> {
        self.check_dimension(other)?;
        if self.magnitude().is_zero() || other.magnitude().is_zero() {
            return Ok(Dec::ZERO);
        }
        let cosine = self
            .direction()?
            .dot(&other.direction()?)?
            .clamp(-Dec::ONE, Dec::ONE);
        let radians = cosine.to_f64().unwrap_or_default().acos();
        Ok(Dec::from_f64(radians).unwrap_or(Zero::zero()))
    }

    pub fn angle_degrees(&self, other: &Self) -> Result<Dec> {
        Ok(self.angle(other)? * dec!(180) / Dec::PI)
    }

    /// A zero vector is parallel to everything. Otherwise both vectors
    /// must have the same dimension, every coordinate where `other` is
    /// near zero must be near zero in `self` too, and the remaining
    /// coordinate ratios must agree to [`RATIO_ROUNDING`] places.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }
        if self.dimension() != other.dimension() {
            return false;
        }
        let mut ratio = None;
        for (a, b) in self.iter().zip(other.iter()) {
            if decimal::is_near_zero(*b) {
                if decimal::is_near_zero(*a) {
                    continue;
                }
                return false;
            }
            let current = (a / b).round_dp(RATIO_ROUNDING);
            match ratio {
                None => ratio = Some(current),
                Some(first) if first == current => {}
                Some(_) => return false,
            }
        }
        true
    }

    /// Dot product rounded to [`DOT_ROUNDING`] places is zero.
    /// Vectors of different dimensions are never orthogonal.
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        match self.dot(other) {
            Ok(dot) => dot.round_dp(DOT_ROUNDING).is_zero(),
            Err(_) => false,
        }
    }

    /// Every coordinate is near zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(|c| decimal::is_near_zero(*c))
    }

    /// Component of `self` along `onto`.
    pub fn project_onto(&self, onto: &Self) -> Result<Self> {
        let direction = onto.direction()?;
        Ok(direction.scale(self.dot(&direction)?))
    }

    /// Component of `self` perpendicular to `onto`.
    pub fn orthogonal_component(&self, onto: &Self) -> Result<Self> {
        self.sub(&self.project_onto(onto)?)
    }

    /// Defined only in dimension 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for v in [self, other] {
            if v.dimension() != 3 {
                return Err(GeometryError::DimensionNotThree {
                    dimension: v.dimension(),
                });
            }
        }
        let (a, b) = (&self.coordinates, &other.coordinates);
        Ok(Self::from_coordinates(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn parallelogram_area(&self, other: &Self) -> Result<Dec> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn triangle_area(&self, other: &Self) -> Result<Dec> {
        Ok(self.parallelogram_area(other)? / dec!(2))
    }
}

impl Index<usize> for Vector {
    type Output = Dec;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.coordinates.iter().format(", "))
    }
}
