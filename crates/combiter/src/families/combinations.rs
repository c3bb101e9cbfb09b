//! Enumeration of `k`-subsets in colexicographic order.

use smallvec::SmallVec;

use crate::{count, digit::Digit};

/// A cursor over all `k`-subsets of `{0, .., n-1}` in colexicographic order
/// (sorted by largest element, then recursively by the rest):
/// `{0,1}, {0,2}, {1,2}, {0,3}, ..`.
///
/// Serves as the middle digit of the Motzkin engine, selecting which slots
/// of the decoded path hold non-flat steps.
#[derive(Clone, Debug)]
pub struct Combinations {
    /// Current subset, strictly increasing.
    indices: SmallVec<[u32; 8]>,
    /// Exclusive upper bound of the index range (`n`).
    bound: u32,
    /// Size of the local domain, `C(n, k)`.
    total: u64,
    /// Position within the local domain.
    rank: u64,
}

impl Combinations {
    /// Cursor at the first `k`-subset of `{0, .., n-1}`.
    pub fn new(bound: u32, size: u32) -> Self {
        let mut comb = Self {
            indices: SmallVec::new(),
            bound,
            total: 0,
            rank: 0,
        };
        comb.reset((bound, size));
        comb
    }

    /// Colexicographic successor in place. The caller guarantees the current
    /// subset is not the last one.
    fn step(&mut self) {
        let size = self.indices.len();
        for slot in 0..size {
            let limit = if slot + 1 < size {
                self.indices[slot + 1]
            } else {
                self.bound
            };
            if self.indices[slot] + 1 < limit {
                self.indices[slot] += 1;
                // Everything below the bumped slot restarts at the smallest
                // possible prefix.
                for (low, entry) in self.indices[..slot].iter_mut().enumerate() {
                    *entry = low as u32;
                }
                return;
            }
        }
        debug_assert!(false, "step past the last {size}-subset");
    }
}

impl Digit for Combinations {
    type Domain = (u32, u32);
    type Item = [u32];

    fn reset(&mut self, (bound, size): (u32, u32)) {
        self.bound = bound;
        self.total = count::binomial(u64::from(bound), u64::from(size));
        self.rank = 0;
        self.indices.clear();
        self.indices.extend(0..size);
    }

    fn advance(&mut self) {
        if self.rank >= self.total {
            return;
        }
        self.rank += 1;
        if self.rank < self.total {
            self.step();
        }
    }

    fn is_exhausted(&self) -> bool {
        self.rank >= self.total
    }

    fn current(&self) -> &[u32] {
        debug_assert!(!self.is_exhausted(), "dereferenced an exhausted digit");
        &self.indices
    }

    fn local_rank(&self) -> u64 {
        self.rank
    }

    fn len(&self) -> u64 {
        self.total
    }

    fn seek(&mut self, (bound, size): (u32, u32), rank: u64) {
        self.bound = bound;
        self.total = count::binomial(u64::from(bound), u64::from(size));
        debug_assert!(rank < self.total, "seek out of range: {rank}");
        self.rank = rank;
        self.indices.clear();
        self.indices.resize(size as usize, 0);
        // Colex unranking: the rank decomposes as sum C(c_i, i + 1) over the
        // chosen elements, so pick each element greedily from the top.
        let mut rest = rank;
        for slot in (0..size as usize).rev() {
            let picks = slot as u64 + 1;
            for candidate in (slot as u32..bound).rev() {
                let below = count::binomial(u64::from(candidate), picks);
                if below <= rest {
                    self.indices[slot] = candidate;
                    rest -= below;
                    break;
                }
            }
        }
        debug_assert_eq!(rest, 0, "colex unranking did not consume the rank");
    }
}
