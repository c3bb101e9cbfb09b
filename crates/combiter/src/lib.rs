//! Core library for exhaustively enumerating combinatorial path families.
//!
//! Every family maps a rank in `[0, count)` to one object in a fixed total
//! order, and its cursor walks that order one object at a time without ever
//! materializing the collection.
//!
//! # Supported Families
//!
//! - Motzkin paths (`{+1, 0, -1}` steps, non-negative, closing at zero)
//! - Dyck paths (balanced `{+1, -1}` sequences)
//! - Combinations (`k`-subsets in colexicographic order, as a digit)

/// Counting functions (binomial, Catalan, Motzkin, ballot).
pub mod count;
/// The digit capability consumed by compound enumerators.
mod digit;
/// Error types used across the crate.
pub mod error;
/// Implementations of the enumerable families.
pub mod families;
/// The `StepFamily` trait and related utilities.
mod family;
/// Step sequences and rendering.
pub mod path;

pub use crate::{digit::Digit, family::StepFamily};

/// Central registry of family metadata and constructors.
pub mod registry;

/// Construct a family by name with the requested size parameter.
///
/// Returns an error if the name is unknown or the size is out of range.
pub fn family_from_name(
    name: &str,
    half_len: u32,
) -> error::Result<Box<dyn StepFamily + 'static>> {
    registry::construct(name, half_len)
}
