//! Property-based tests for gallery navigation and guest lookup
//!
//! Uses proptest to check the cursor's wraparound arithmetic over arbitrary
//! gallery sizes and key sequences.

use invitation_core::{guest_name_from_query, GalleryCursor};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A gallery size together with a valid starting index
fn gallery_and_index() -> impl Strategy<Value = (usize, usize)> {
    (1usize..200).prop_flat_map(|len| (Just(len), 0..len))
}

#[derive(Debug, Clone, Copy)]
enum Nav {
    Next,
    Previous,
    Open(usize),
    Close,
}

fn nav_strategy() -> impl Strategy<Value = Nav> {
    prop_oneof![
        4 => Just(Nav::Next),
        4 => Just(Nav::Previous),
        1 => (0usize..300).prop_map(Nav::Open),
        1 => Just(Nav::Close),
    ]
}

/// Guest names without characters that need URL encoding
fn plain_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,20}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N steps forward from any index come back to it
    #[test]
    fn next_n_times_is_identity((len, start) in gallery_and_index()) {
        let mut cursor = GalleryCursor::new(len);
        cursor.open(start);
        for _ in 0..len {
            cursor.next();
        }
        prop_assert_eq!(cursor.current(), Some(start));
    }

    /// N steps back from any index come back to it
    #[test]
    fn previous_n_times_is_identity((len, start) in gallery_and_index()) {
        let mut cursor = GalleryCursor::new(len);
        cursor.open(start);
        for _ in 0..len {
            cursor.previous();
        }
        prop_assert_eq!(cursor.current(), Some(start));
    }

    /// next and previous undo each other
    #[test]
    fn next_previous_are_inverse((len, start) in gallery_and_index()) {
        let mut cursor = GalleryCursor::new(len);
        cursor.open(start);

        cursor.next();
        cursor.previous();
        prop_assert_eq!(cursor.current(), Some(start));

        cursor.previous();
        cursor.next();
        prop_assert_eq!(cursor.current(), Some(start));
    }

    /// open followed by close always ends closed
    #[test]
    fn open_then_close_is_none(len in 0usize..50, prior in 0usize..60, index in 0usize..60) {
        let mut cursor = GalleryCursor::new(len);
        cursor.open(prior);
        cursor.open(index);
        cursor.close();
        prop_assert_eq!(cursor.current(), None);
    }

    /// No sequence of operations leaves the cursor out of range
    #[test]
    fn cursor_always_in_range(len in 0usize..20, ops in prop::collection::vec(nav_strategy(), 0..100)) {
        let mut cursor = GalleryCursor::new(len);
        for op in ops {
            match op {
                Nav::Next => cursor.next(),
                Nav::Previous => cursor.previous(),
                Nav::Open(i) => cursor.open(i),
                Nav::Close => cursor.close(),
            }
            if let Some(i) = cursor.current() {
                prop_assert!(i < len);
            }
        }
    }

    /// The first listed parameter wins regardless of position in the query
    #[test]
    fn guest_priority(k in plain_name(), guest in plain_name(), to in plain_name()) {
        let query = format!("?to={}&guest={}&k={}", to, guest, k);
        prop_assert_eq!(guest_name_from_query(&query), Some(k.clone()));

        let query = format!("?to={}&guest={}", to, guest);
        prop_assert_eq!(guest_name_from_query(&query), Some(guest.clone()));

        let query = format!("?to={}", to);
        prop_assert_eq!(guest_name_from_query(&query), Some(to));
    }
}
