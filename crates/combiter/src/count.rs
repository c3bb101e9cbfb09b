//! Counting functions for the enumerable families.
//!
//! These size the enumeration domains and detect when a digit of the
//! compound counter has exhausted its local range. All counts are exact
//! `u64` values; family constructors bound their size parameters so that
//! every count they can request fits.

/// Binomial coefficient `C(n, k)`. Returns `0` when `k > n`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // Multiplying in ascending order keeps every intermediate value equal to
    // a smaller binomial coefficient, so the division is always exact.
    let mut acc: u128 = 1;
    for i in 1..=k {
        acc = acc * (n - k + i) as u128 / i as u128;
    }
    debug_assert!(acc <= u64::MAX as u128, "binomial({n}, {k}) overflows u64");
    acc as u64
}

/// Catalan number: the count of balanced ±1 sequences of length `2m`.
pub fn catalan(m: u64) -> u64 {
    binomial(2 * m, m) / (m + 1)
}

/// Motzkin number: the count of `l`-step paths over `{+1, 0, -1}` that never
/// dip below zero and end at zero.
pub fn motzkin(l: u64) -> u64 {
    // M_l = M_{l-1} + sum_{j=0}^{l-2} M_j * M_{l-2-j}
    let l = l as usize;
    let mut table: Vec<u128> = Vec::with_capacity(l + 1);
    table.push(1);
    for k in 1..=l {
        let mut acc = table[k - 1];
        if k >= 2 {
            for j in 0..=(k - 2) {
                acc += table[j] * table[k - 2 - j];
            }
        }
        table.push(acc);
    }
    debug_assert!(table[l] <= u64::MAX as u128, "motzkin({l}) overflows u64");
    table[l] as u64
}

/// Number of ±1 sequences of `r` steps that start at height `h`, stay
/// non-negative, and end at height 0 (a ballot number). Used to unrank
/// balanced sequences one step at a time.
pub fn balanced_completions(r: u64, h: u64) -> u64 {
    if h > r || (r - h) % 2 != 0 {
        return 0;
    }
    let ups = (r - h) / 2;
    // Reflection principle: total arrangements minus those that dip below 0.
    let total = binomial(r, ups);
    let bad = if ups == 0 { 0 } else { binomial(r, ups - 1) };
    total - bad
}
