//! Step sequences: the decoded output type of the path enumerators.

use std::ops::Deref;

use smallvec::{SmallVec, smallvec};

use crate::error;

/// Default rendering alphabet: up, flat, down.
pub const DEFAULT_ALPHABET: &str = "(-)";

/// An owned sequence of steps over `{-1, 0, +1}`.
///
/// Paths of up to 16 steps are stored inline without heap allocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Steps(pub SmallVec<[i8; 16]>);

impl Steps {
    /// Create a `Steps` from a backing vector.
    pub fn new(vec: impl Into<SmallVec<[i8; 16]>>) -> Self {
        Self(vec.into())
    }

    /// An all-flat sequence of `len` steps.
    pub fn zeros(len: usize) -> Self {
        Self(smallvec![0; len])
    }

    /// Return the steps as a slice.
    pub fn as_slice(&self) -> &[i8] {
        &self.0
    }

    /// Whether every prefix sum is non-negative and the total sum is zero.
    pub fn is_balanced(&self) -> bool {
        let mut height: i64 = 0;
        for &step in &self.0 {
            height += i64::from(step);
            if height < 0 {
                return false;
            }
        }
        height == 0
    }

    /// Number of non-zero steps.
    pub fn nonzero_count(&self) -> usize {
        self.0.iter().filter(|&&step| step != 0).count()
    }

    /// Render with the default `"(-)"` alphabet.
    pub fn to_parens(&self) -> String {
        self.0
            .iter()
            .map(|step| match step {
                1 => '(',
                0 => '-',
                _ => ')',
            })
            .collect()
    }
}

impl Deref for Steps {
    type Target = [i8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Steps> for Vec<i8> {
    fn from(val: Steps) -> Self {
        val.0.to_vec()
    }
}

/// Render a step sequence through a 3-symbol substitution alphabet ordered
/// `up, flat, down`.
///
/// Preconditions: every step must be in `{-1, 0, +1}`; enforced with a
/// `debug_assert!` since all in-crate producers guarantee it.
pub fn render(steps: &[i8], alphabet: &str) -> error::Result<String> {
    let symbols: Vec<char> = alphabet.chars().collect();
    if symbols.len() != 3 {
        return Err(error::Error::Alphabet(format!(
            "expected 3 symbols (up, flat, down), got {}",
            symbols.len()
        )));
    }
    let mut out = String::with_capacity(steps.len());
    for &step in steps {
        debug_assert!((-1..=1).contains(&step), "step out of range: {step}");
        out.push(symbols[(1 - step) as usize]);
    }
    Ok(out)
}
