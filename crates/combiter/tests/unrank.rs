//! Property-based tests verifying the rank/unrank bijection and that
//! backward iteration rebuilds digit state correctly.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use combiter::{
    StepFamily,
    families::{dyck::Dyck, motzkin::Motzkin},
    registry,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Unranking agrees with walking the cursor forward. motzkin(8) = 323.
    #[test]
    fn motzkin_unrank_matches_walk(id in 0u64..323) {
        let family = Motzkin::new(4).expect("motzkin 4");
        let mut cursor = family.begin();
        for _ in 0..id {
            cursor.advance();
        }
        prop_assert_eq!(cursor.rank(), id);
        prop_assert_eq!(cursor.current(), &family.unrank(id));
    }

    /// Seeking a rank and advancing lands on the next rank's object.
    #[test]
    fn motzkin_seek_then_advance(id in 0u64..322) {
        let family = Motzkin::new(4).expect("motzkin 4");
        let mut stepped = family.begin();
        stepped.seek(id);
        stepped.advance();
        let mut jumped = family.begin();
        jumped.seek(id + 1);
        prop_assert_eq!(stepped.rank(), jumped.rank());
        prop_assert_eq!(stepped.current(), jumped.current());
    }

    /// Retreat is the exact inverse of advance, including across the digit
    /// boundaries where the reference implementation lost state.
    #[test]
    fn motzkin_retreat_inverts_advance(id in 1u64..323) {
        let family = Motzkin::new(4).expect("motzkin 4");
        let mut cursor = family.begin();
        cursor.seek(id);
        cursor.retreat();
        prop_assert_eq!(cursor.rank(), id - 1);
        prop_assert_eq!(cursor.current(), &family.unrank(id - 1));
    }

    /// Dyck unranking agrees with walking. catalan(5) = 42.
    #[test]
    fn dyck_unrank_matches_walk(id in 0u64..42) {
        let family = Dyck::new(5).expect("dyck 5");
        let walked = family.iter().nth(id as usize).expect("in range");
        prop_assert_eq!(walked, family.unrank(id));
    }
}

// ============================================================================
// Edge case tests (non-property-based)
// ============================================================================

/// Configurations exercised by the edge-case tests: (name, half_len).
fn family_configs() -> Vec<(&'static str, u32)> {
    vec![
        ("dyck", 1),
        ("dyck", 4),
        ("dyck", 8),
        ("motzkin", 1),
        ("motzkin", 3),
        ("motzkin", 6),
    ]
}

/// Unranking the first rank yields a valid object for every family.
#[test]
fn unrank_at_zero() {
    for (name, half_len) in family_configs() {
        let family = registry::construct(name, half_len).expect("family");
        let path = family.unrank(0);
        assert_eq!(path.len(), family.path_len(), "{name}({half_len})");
        assert!(path.is_balanced(), "{name}({half_len})");
    }
}

/// Unranking the last rank yields a valid object for every family.
#[test]
fn unrank_at_last_rank() {
    for (name, half_len) in family_configs() {
        let family = registry::construct(name, half_len).expect("family");
        let last = family.len() - 1;
        let path = family.unrank(last);
        assert_eq!(path.len(), family.path_len(), "{name}({half_len})");
        assert!(path.is_balanced(), "{name}({half_len})");
    }
}

/// The last Motzkin rank is fully paired: no flat steps remain.
#[test]
fn last_motzkin_rank_is_fully_paired() {
    for half_len in 1..=6u32 {
        let family = Motzkin::new(half_len).expect("family");
        let path = family.unrank(family.len() - 1);
        assert_eq!(path.nonzero_count(), 2 * half_len as usize);
        assert!(path.is_balanced());
    }
}

/// Every registered family satisfies unrank validity at first, middle and
/// last ranks.
#[test]
fn all_registered_families_unrank() {
    for &name in registry::FAMILY_NAMES {
        let family = registry::construct(name, 4)
            .unwrap_or_else(|err| panic!("failed to create {name}: {err}"));
        for id in [0, family.len() / 2, family.len() - 1] {
            let path = family.unrank(id);
            assert_eq!(path.len(), family.path_len(), "{name} at {id}");
            assert!(path.is_balanced(), "{name} at {id}");
        }
    }
}
