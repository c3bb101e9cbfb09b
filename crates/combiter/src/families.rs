//! Implementations of the enumerable families.

/// `k`-subsets in colexicographic order.
pub mod combinations;
/// Balanced ±1 sequences (Dyck paths).
pub mod dyck;
/// Motzkin paths, built from the other two families.
pub mod motzkin;
