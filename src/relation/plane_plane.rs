use crate::planar::plane::Plane;

use super::Relation;

/// Two non-parallel planes meet in a line, but computing it is out of
/// scope here; the relation only classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneRelation {
    Equal,
    Parallel,
    NotParallel,
}

impl Relation<Plane> for Plane {
    type Relate = PlaneRelation;

    fn relate(&self, to: &Plane) -> Self::Relate {
        if self == to {
            PlaneRelation::Equal
        } else if self.is_parallel_to(to) {
            PlaneRelation::Parallel
        } else {
            PlaneRelation::NotParallel
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::planar::plane::Plane;
    use crate::vector::Vector;

    use super::{PlaneRelation, Relation};

    fn plane(x: crate::Dec, y: crate::Dec, z: crate::Dec, k: crate::Dec) -> Plane {
        Plane::new(Vector::new(vec![x, y, z]).unwrap(), k).unwrap()
    }

    #[test]
    fn coincident_planes_relate_equal() {
        let a = plane(dec!(-0.412), dec!(3.806), dec!(0.728), dec!(-3.46));
        let b = plane(dec!(1.03), dec!(-9.515), dec!(-1.82), dec!(8.65));
        assert_eq!(a.relate(&b), PlaneRelation::Equal);
    }

    #[test]
    fn scaled_normals_with_offset_constants_relate_parallel() {
        let a = plane(dec!(-7.926), dec!(8.625), dec!(-7.212), dec!(-7.952));
        let b = plane(dec!(-2.642), dec!(2.875), dec!(-2.404), dec!(-2.443));
        assert_eq!(a.relate(&b), PlaneRelation::Parallel);
    }

    #[test]
    fn skewed_normals_relate_not_parallel() {
        let a = plane(dec!(2.611), dec!(5.528), dec!(0.283), dec!(4.6));
        let b = plane(dec!(7.715), dec!(8.306), dec!(5.342), dec!(3.76));
        assert_eq!(a.relate(&b), PlaneRelation::NotParallel);
    }

    #[test]
    fn degenerate_planes_relate_through_equality() {
        let a = Plane::default();
        assert_eq!(a.relate(&Plane::default()), PlaneRelation::Equal);

        let b = Plane::new(Vector::zero(3), dec!(2)).unwrap();
        assert_eq!(a.relate(&b), PlaneRelation::Parallel);

        let c = plane(dec!(1), dec!(1), dec!(1), dec!(2));
        assert_eq!(a.relate(&c), PlaneRelation::Parallel);
        assert_eq!(c.relate(&a), PlaneRelation::Parallel);
    }
}
