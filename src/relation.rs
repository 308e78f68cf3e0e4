pub mod line_line;
pub mod plane_plane;

/// Classifies how one geometric entity relates to another. Each pair
/// of types picks its own relation enum as the output.
pub trait Relation<To> {
    type Relate;

    fn relate(&self, to: &To) -> Self::Relate;
}
