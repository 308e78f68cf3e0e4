//! Analytic geometry over exact decimal coordinates.
//!
//! [`Vector`] is an immutable tuple of [`Dec`] coordinates with the usual
//! arithmetic, norm, and relational operations. [`Line`] (2-D) and
//! [`Plane`] (3-D) describe the point sets `normal · x = constant_term`
//! and classify how two of them relate through the [`Relation`] trait.
//!
//! All geometric comparisons run through the tolerance policy in
//! [`decimal`]; the base types compare coordinates exactly.

mod affine;
pub mod decimal;
pub mod error;
pub mod linear;
pub mod planar;
pub mod relation;
pub mod vector;

pub use decimal::Dec;
pub use error::{GeometryError, Result};
pub use linear::line::Line;
pub use planar::plane::Plane;
pub use relation::line_line::LineRelation;
pub use relation::plane_plane::PlaneRelation;
pub use relation::Relation;
pub use vector::Vector;
