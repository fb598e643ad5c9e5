/// Trait of bounding volumes that can be grown to enclose another one.
///
/// Compounds merge the bounding volumes of their parts through it.
pub trait BoundingVolume {
    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;
}
