//! Enumeration of Motzkin paths.
//!
//! A Motzkin path of half-length `n` is a sequence of `2n` steps over
//! `{+1, 0, -1}` that never dips below zero and ends at zero. The cursor is a
//! compound counter over three digits: the number of non-flat step pairs
//! (most significant), the subset of slots holding the non-flat steps, and
//! the balanced pattern written into those slots. The two inner digit ranges
//! are functions of the outer digit, so every carry re-derives the affected
//! range instead of consulting a fixed radix.

use crate::{
    count,
    digit::Digit,
    error,
    families::{combinations::Combinations, dyck::DyckCursor},
    family::StepFamily,
    path::Steps,
};

/// Half-lengths above this produce Motzkin numbers that no longer fit `u64`.
const MAX_HALF_LEN: u32 = 20;

/// The family of Motzkin paths of length `2n`.
///
/// # Example
///
/// ```
/// use combiter::families::motzkin::Motzkin;
///
/// let family = Motzkin::new(2)?;
/// assert_eq!(family.iter().count() as u64, 9);
/// let rendered: Vec<String> = family.iter().map(|p| p.to_parens()).collect();
/// assert_eq!(rendered[0], "----");
/// assert_eq!(rendered[8], "()()");
/// # Ok::<(), combiter::error::Error>(())
/// ```
#[derive(Debug)]
pub struct Motzkin {
    /// Half the path length (`n`).
    half_len: u32,
    /// Cached object count, `motzkin(2n)`.
    total: u64,
}

impl Motzkin {
    /// Construct the family of Motzkin paths of length `2 * half_len`.
    pub fn new(half_len: u32) -> error::Result<Self> {
        if half_len > MAX_HALF_LEN {
            return Err(error::Error::Size(format!(
                "Motzkin half-length must be <= {MAX_HALF_LEN}, got {half_len}"
            )));
        }
        Ok(Self {
            half_len,
            total: count::motzkin(2 * u64::from(half_len)),
        })
    }

    /// Cursor at rank 0: the all-flat path.
    pub fn begin(&self) -> MotzkinCursor {
        let width = 2 * self.half_len;
        MotzkinCursor {
            id: 0,
            total: self.total,
            half_len: self.half_len,
            pairs: 0,
            comb: Combinations::new(width, 0),
            dyck: DyckCursor::new(0),
            steps: Steps::zeros(width as usize),
        }
    }

    /// Sentinel cursor at rank `len()`. Carries only the rank for equality
    /// comparison; it is never decoded.
    pub fn end(&self) -> MotzkinCursor {
        let mut cursor = self.begin();
        cursor.id = self.total;
        cursor
    }

    /// Iterate over all paths of the family in order.
    pub fn iter(&self) -> Iter {
        Iter {
            cursor: self.begin(),
        }
    }
}

impl StepFamily for Motzkin {
    fn name(&self) -> &'static str {
        "motzkin"
    }

    fn info(&self) -> &'static str {
        "Paths over +1/0/-1 steps that never dip below zero and end at zero.\n\
        Counted by the Motzkin numbers; enumerated by number of non-flat\n\
        steps, then by balanced pattern, then by slot placement."
    }

    fn len(&self) -> u64 {
        self.total
    }

    fn path_len(&self) -> usize {
        2 * self.half_len as usize
    }

    fn unrank(&self, id: u64) -> Steps {
        debug_assert!(id < self.total, "rank out of range: {id}");
        let mut cursor = self.begin();
        cursor.seek(id);
        cursor.steps
    }
}

impl<'a> IntoIterator for &'a Motzkin {
    type Item = Steps;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A cursor over a [`Motzkin`] family.
///
/// Cloning yields an independent cursor; all digit state is owned by value.
#[derive(Clone, Debug)]
pub struct MotzkinCursor {
    /// Rank in `[0, total]`; `total` marks the end sentinel.
    id: u64,
    /// Object count of the family.
    total: u64,
    /// Half the path length (`n`).
    half_len: u32,
    /// Non-flat step pairs in the current path: the most significant digit.
    pairs: u32,
    /// Slots holding the non-flat steps; domain `(2n, 2 * pairs)`.
    comb: Combinations,
    /// Balanced pattern for those slots; domain `pairs`.
    dyck: DyckCursor,
    /// Decoded path, length `2n`.
    steps: Steps,
}

impl MotzkinCursor {
    /// Current rank.
    pub fn rank(&self) -> u64 {
        self.id
    }

    /// Half the path length (`n`).
    pub fn half_len(&self) -> u32 {
        self.half_len
    }

    /// Whether the cursor sits at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.id == self.total
    }

    /// The decoded path at the current rank.
    ///
    /// Preconditions: the cursor is not at the end sentinel; checked in
    /// debug builds.
    pub fn current(&self) -> &Steps {
        debug_assert!(!self.is_end(), "dereferenced an end cursor");
        &self.steps
    }

    /// Advance one rank. A no-op once the cursor is at the end sentinel.
    pub fn advance(&mut self) {
        if self.id >= self.total {
            return;
        }
        self.id += 1;
        if self.id == self.total {
            // Exhausted; the decoded buffer is left as don't-care.
            return;
        }
        self.comb.advance();
        if self.comb.is_exhausted() {
            self.dyck.advance();
            if self.dyck.is_exhausted() {
                // The rank guard above caps `pairs` at `half_len`.
                self.pairs += 1;
                self.dyck.reset(self.pairs);
            }
            // Re-derive the subset range from the possibly-new outer digit.
            self.comb.reset((2 * self.half_len, 2 * self.pairs));
        }
        self.decode();
    }

    /// Step one rank backward. A no-op at rank 0.
    ///
    /// Decrementing the rank alone would leave the digits describing the old
    /// position, so the whole digit state is rebuilt in closed form.
    pub fn retreat(&mut self) {
        if self.id == 0 {
            return;
        }
        let target = self.id - 1;
        self.seek(target);
    }

    /// Jump to an arbitrary rank, rebuilding all digit state in closed form.
    ///
    /// Preconditions: `id < self.total` (the end sentinel is not seekable);
    /// checked in debug builds.
    pub fn seek(&mut self, id: u64) {
        debug_assert!(id < self.total, "seek out of range: {id}");
        let width = 2 * u64::from(self.half_len);
        // Locate the outer-digit block: for `pairs = d` it spans
        // C(2n, 2d) * catalan(d) consecutive ranks.
        let mut rest = id;
        let mut pairs = 0u32;
        let mut subsets = 1u64;
        loop {
            let block = subsets * count::catalan(u64::from(pairs));
            if rest < block {
                break;
            }
            rest -= block;
            pairs += 1;
            subsets = count::binomial(width, 2 * u64::from(pairs));
        }
        self.pairs = pairs;
        self.dyck.seek(pairs, rest / subsets);
        self.comb.seek((width as u32, 2 * pairs), rest % subsets);
        self.id = id;
        self.decode();
    }

    /// Write the digit states into the decoded buffer: zero everything, then
    /// zip the chosen slots with the pattern in index order.
    fn decode(&mut self) {
        self.steps.0.fill(0);
        let pattern = self.dyck.current();
        for (&slot, &step) in self.comb.current().iter().zip(pattern.iter()) {
            self.steps.0[slot as usize] = step;
        }
    }
}

impl PartialEq for MotzkinCursor {
    /// Cursors compare by rank alone (within one family), which is what the
    /// end-sentinel comparison relies on.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.half_len == other.half_len
    }
}

impl Eq for MotzkinCursor {}

/// Iterator over a [`Motzkin`] family, yielding owned paths.
#[derive(Debug)]
pub struct Iter {
    /// Cursor holding the iteration state.
    cursor: MotzkinCursor,
}

impl Iterator for Iter {
    type Item = Steps;

    fn next(&mut self) -> Option<Steps> {
        if self.cursor.is_end() {
            return None;
        }
        let item = self.cursor.current().clone();
        self.cursor.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cursor.total - self.cursor.id;
        match usize::try_from(left) {
            Ok(left) => (left, Some(left)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_order_half_len_2() {
        let family = Motzkin::new(2).unwrap();
        let all: Vec<Vec<i8>> = family.iter().map(Vec::from).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0, 0, 0],
                vec![1, -1, 0, 0],
                vec![1, 0, -1, 0],
                vec![0, 1, -1, 0],
                vec![1, 0, 0, -1],
                vec![0, 1, 0, -1],
                vec![0, 0, 1, -1],
                vec![1, 1, -1, -1],
                vec![1, -1, 1, -1],
            ]
        );
    }

    #[test]
    fn smallest_families() {
        let family = Motzkin::new(0).unwrap();
        assert_eq!(family.len(), 1);
        assert_eq!(family.iter().collect::<Vec<_>>(), vec![Steps::zeros(0)]);

        let family = Motzkin::new(1).unwrap();
        let all: Vec<Vec<i8>> = family.iter().map(Vec::from).collect();
        assert_eq!(all, vec![vec![0, 0], vec![1, -1]]);
    }

    #[test]
    fn walk_reaches_end() {
        let family = Motzkin::new(3).unwrap();
        let mut cursor = family.begin();
        let end = family.end();
        let mut taken = 0u64;
        while cursor != end {
            assert_eq!(cursor.rank(), taken);
            cursor.advance();
            taken += 1;
        }
        assert_eq!(taken, family.len());
        assert!(cursor.is_end());
        // Advancing past the sentinel stays put.
        cursor.advance();
        assert_eq!(cursor.rank(), family.len());
    }

    #[test]
    fn retreat_inverts_advance() {
        let family = Motzkin::new(3).unwrap();
        let mut forward = family.begin();
        let mut history = Vec::new();
        while !forward.is_end() {
            history.push(forward.current().clone());
            forward.advance();
        }
        let mut backward = forward.clone();
        for expected in history.iter().rev() {
            backward.retreat();
            assert_eq!(backward.current(), expected, "rank {}", backward.rank());
        }
        assert_eq!(backward.rank(), 0);
        backward.retreat();
        assert_eq!(backward.rank(), 0);
    }

    #[test]
    fn retreat_across_digit_boundary() {
        // Rank 7 at n = 2 is the first fully-paired path; stepping back
        // crosses both the pattern and the pair-count boundary.
        let family = Motzkin::new(2).unwrap();
        let mut cursor = family.begin();
        cursor.seek(7);
        assert_eq!(cursor.current().as_slice(), &[1, 1, -1, -1]);
        cursor.retreat();
        assert_eq!(cursor.current().as_slice(), &[0, 0, 1, -1]);
        assert_eq!(cursor.rank(), 6);
    }

    #[test]
    fn clones_advance_independently() {
        let family = Motzkin::new(2).unwrap();
        let mut a = family.begin();
        a.seek(3);
        let mut b = a.clone();
        b.advance();
        assert_eq!(a.rank(), 3);
        assert_eq!(b.rank(), 4);
        assert_eq!(a.current().as_slice(), &[0, 1, -1, 0]);
        assert_eq!(b.current().as_slice(), &[1, 0, 0, -1]);
    }

    #[test]
    fn size_bound() {
        assert!(Motzkin::new(MAX_HALF_LEN).is_ok());
        assert!(Motzkin::new(MAX_HALF_LEN + 1).is_err());
    }
}
