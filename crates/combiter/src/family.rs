//! The `StepFamily` trait implemented by the path-producing families.

use crate::path::Steps;

/// A family of step sequences enumerable in a fixed total order.
///
/// Implementations fix their size parameter at construction and expose the
/// canonical rank-to-object mapping. Walking the order incrementally is done
/// with each family's cursor type; this trait is the polymorphic surface
/// shared by all of them.
pub trait StepFamily {
    /// Short name of the family.
    fn name(&self) -> &'static str;

    /// A short human-readable description.
    fn info(&self) -> &'static str;

    /// Total number of objects in the family.
    fn len(&self) -> u64;

    /// Whether the family is empty. The families in this crate always
    /// contain at least one object.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of steps in every object of the family.
    fn path_len(&self) -> usize;

    /// The object at rank `id` in the canonical order.
    ///
    /// Preconditions: `id < self.len()`; checked in debug builds.
    fn unrank(&self, id: u64) -> Steps;
}
