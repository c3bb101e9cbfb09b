//! The digit capability consumed by compound enumerators.

use std::fmt;

/// One independently-advanceable digit of a compound counter.
///
/// A digit enumerates a local domain (all `k`-subsets of a range, all
/// balanced sequences of a length, ...) in a fixed order. Compound
/// enumerators drive digits purely through this interface, so a family
/// built from two digits can swap either one without touching its carry
/// logic.
///
/// Advancing past the last element only marks the digit exhausted; its
/// value is then unspecified until the next `reset` or `seek`.
pub trait Digit {
    /// Parameters that select the digit's local domain.
    type Domain: Copy + fmt::Debug;
    /// The digit's value type.
    type Item: ?Sized;

    /// Reinitialize to local rank 0 of `domain`.
    fn reset(&mut self, domain: Self::Domain);

    /// Move to the next local rank.
    fn advance(&mut self);

    /// Whether the local domain is used up.
    fn is_exhausted(&self) -> bool;

    /// Read-only view of the current value.
    ///
    /// Preconditions: the digit is not exhausted.
    fn current(&self) -> &Self::Item;

    /// Position within the local domain.
    fn local_rank(&self) -> u64;

    /// Size of the local domain.
    fn len(&self) -> u64;

    /// Whether the local domain is empty. Never true for the digits in this
    /// crate (every domain contains at least one element), but required for
    /// a well-formed `len`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Jump straight to `rank` within `domain`, rebuilding the value in
    /// closed form.
    ///
    /// Preconditions: `rank < count(domain)`; checked in debug builds.
    fn seek(&mut self, domain: Self::Domain, rank: u64);
}
