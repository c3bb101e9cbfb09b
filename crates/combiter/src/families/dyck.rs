//! Enumeration of balanced ±1 sequences (Dyck paths).

use smallvec::smallvec;

use crate::{
    count,
    digit::Digit,
    error,
    family::StepFamily,
    path::Steps,
};

/// Half-lengths above this produce Catalan numbers that no longer fit `u64`.
const MAX_HALF_LEN: u32 = 32;

/// A cursor over all balanced ±1 sequences of length `2m`.
///
/// The order is decreasing lexicographic with `+1` ranking above `-1`, so the
/// first element is `+1^m (-1)^m` and, for `m = 2`, `[+1,+1,-1,-1]` precedes
/// `[+1,-1,+1,-1]`. Serves as the pattern digit of the Motzkin engine.
#[derive(Clone, Debug)]
pub struct DyckCursor {
    /// Current sequence, length `2m`.
    steps: Steps,
    /// Size of the local domain, `catalan(m)`.
    total: u64,
    /// Position within the local domain.
    rank: u64,
}

impl DyckCursor {
    /// Cursor at the first balanced sequence of length `2m`.
    pub fn new(half_len: u32) -> Self {
        let mut cursor = Self {
            steps: Steps::zeros(0),
            total: 0,
            rank: 0,
        };
        cursor.reset(half_len);
        cursor
    }

    /// Successor in place. The caller guarantees the current sequence is not
    /// the last one.
    fn step(&mut self) {
        // Flip the rightmost up-step whose flip keeps the path non-negative,
        // then refill the suffix with the largest valid completion: all
        // remaining up-steps first.
        let len = self.steps.0.len();
        let mut after: i64 = 0;
        for pos in (0..len).rev() {
            let before = after - i64::from(self.steps.0[pos]);
            if self.steps.0[pos] == 1 && before >= 1 {
                self.steps.0[pos] = -1;
                let height = before - 1;
                let remaining = (len - pos - 1) as i64;
                let ups = (remaining - height) / 2;
                for (off, slot) in self.steps.0[pos + 1..].iter_mut().enumerate() {
                    *slot = if (off as i64) < ups { 1 } else { -1 };
                }
                return;
            }
            after = before;
        }
        debug_assert!(false, "step past the last balanced sequence");
    }
}

impl Digit for DyckCursor {
    type Domain = u32;
    type Item = Steps;

    fn reset(&mut self, half_len: u32) {
        let half = half_len as usize;
        self.total = count::catalan(u64::from(half_len));
        self.rank = 0;
        self.steps = Steps(smallvec![0; 2 * half]);
        self.steps.0[..half].fill(1);
        self.steps.0[half..].fill(-1);
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

    fn current(&self) -> &Steps {
        debug_assert!(!self.is_exhausted(), "dereferenced an exhausted digit");
        &self.steps
    }

    fn local_rank(&self) -> u64 {
        self.rank
    }

    fn len(&self) -> u64 {
        self.total
    }

    fn seek(&mut self, half_len: u32, rank: u64) {
        let len = 2 * half_len as usize;
        self.total = count::catalan(u64::from(half_len));
        debug_assert!(rank < self.total, "seek out of range: {rank}");
        self.rank = rank;
        self.steps = Steps(smallvec![0; len]);
        // Walk left to right, taking an up-step whenever the sequences that
        // start with one still cover the remaining rank.
        let mut rest = rank;
        let mut height: i64 = 0;
        for pos in 0..len {
            let remaining = (len - pos - 1) as u64;
            let with_up = count::balanced_completions(remaining, (height + 1) as u64);
            if rest < with_up {
                self.steps.0[pos] = 1;
                height += 1;
            } else {
                rest -= with_up;
                self.steps.0[pos] = -1;
                height -= 1;
            }
        }
        debug_assert_eq!(rest, 0, "ballot unranking did not consume the rank");
        debug_assert_eq!(height, 0, "ballot unranking left a non-zero height");
    }
}

/// The family of balanced ±1 sequences of length `2m`.
#[derive(Debug)]
pub struct Dyck {
    /// Half the sequence length (`m`).
    half_len: u32,
    /// Cached object count, `catalan(m)`.
    total: u64,
}

impl Dyck {
    /// Construct the family of balanced sequences of length `2 * half_len`.
    pub fn new(half_len: u32) -> error::Result<Self> {
        if half_len > MAX_HALF_LEN {
            return Err(error::Error::Size(format!(
                "Dyck half-length must be <= {MAX_HALF_LEN}, got {half_len}"
            )));
        }
        Ok(Self {
            half_len,
            total: count::catalan(u64::from(half_len)),
        })
    }

    /// Cursor at rank 0.
    pub fn begin(&self) -> DyckCursor {
        DyckCursor::new(self.half_len)
    }

    /// Iterate over all sequences of the family in order.
    pub fn iter(&self) -> Iter {
        Iter {
            cursor: self.begin(),
        }
    }
}

impl StepFamily for Dyck {
    fn name(&self) -> &'static str {
        "dyck"
    }

    fn info(&self) -> &'static str {
        "Balanced sequences of +1/-1 steps: every prefix sum is non-negative\n\
        and the total sum is zero. Counted by the Catalan numbers."
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
        cursor.seek(self.half_len, id);
        cursor.steps
    }
}

impl<'a> IntoIterator for &'a Dyck {
    type Item = Steps;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Dyck`] family, yielding owned sequences.
#[derive(Debug)]
pub struct Iter {
    /// Cursor holding the iteration state.
    cursor: DyckCursor,
}

impl Iterator for Iter {
    type Item = Steps;

    fn next(&mut self) -> Option<Steps> {
        if self.cursor.is_exhausted() {
            return None;
        }
        let item = self.cursor.current().clone();
        self.cursor.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.cursor.len() - self.cursor.local_rank();
        match usize::try_from(left) {
            Ok(left) => (left, Some(left)),
            Err(_) => (usize::MAX, None),
        }
    }
}
