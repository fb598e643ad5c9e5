use crate::shape::ShapeType;

/// Errors raised while registering a routine in a [`DistanceMatrix`](crate::query::DistanceMatrix).
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The shape type has no index in the dispatch table.
    #[error("shape type {0:?} cannot be indexed by a dispatch table")]
    UnindexableShapeType(ShapeType),
    /// A routine is already registered for this pair of shape types.
    #[error("a distance routine is already registered for ({0:?}, {1:?})")]
    AlreadyRegistered(ShapeType, ShapeType),
}
