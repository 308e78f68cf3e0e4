use crate::decimal;
use crate::linear::line::Line;
use crate::vector::Vector;

use super::Relation;

#[derive(Debug, Clone, PartialEq)]
pub enum LineRelation {
    /// Coincident lines: every point is an intersection.
    Equal,
    /// Parallel and distinct: no intersection.
    Parallel,
    /// The unique intersection point.
    Intersect(Vector),
}

impl Relation<Line> for Line {
    type Relate = LineRelation;

    fn relate(&self, to: &Line) -> Self::Relate {
        if self.is_parallel_to(to) {
            if self == to {
                return LineRelation::Equal;
            }
            return LineRelation::Parallel;
        }

        // Cramer's rule on the two normal equations. Non-parallel
        // normals keep the determinant away from zero; the guard covers
        // numeric noise right at the parallelism threshold.
        let (n1, n2) = (self.normal(), to.normal());
        let (k1, k2) = (self.constant_term(), to.constant_term());
        let determinant = n1[0] * n2[1] - n1[1] * n2[0];
        if decimal::is_near_zero(determinant) {
            return LineRelation::Parallel;
        }
        let x = (n2[1] * k1 - n1[1] * k2) / determinant;
        let y = (n1[0] * k2 - n2[0] * k1) / determinant;
        LineRelation::Intersect(Vector::from_coordinates(vec![x, y]))
    }
}
