//! The editing algebra: assign, insert, erase, append, replace, push/pop.

use super::common::{assert_invariants, seq, HELLO, HELLO_EXCESS};
use stackseq::{BoundedSeq, BoundedStr, EditError};

// ============================================================================
// ASSIGN
// ============================================================================

#[test]
fn assign_exact_fit() {
    let mut text = BoundedStr::<12>::new();
    let outcome = text.assign_str(HELLO).unwrap();
    assert_eq!(outcome.len, 11);
    assert!(!outcome.truncated);
    assert_eq!(text, HELLO);
    assert_invariants(&text);
}

#[test]
fn assign_clamps_and_flags_excess() {
    let mut text = BoundedStr::<12>::new();
    let outcome = text.assign_str(HELLO_EXCESS).unwrap();
    assert_eq!(outcome.len, 11);
    assert!(outcome.truncated);
    assert_eq!(text, "Hello World");
    assert_invariants(&text);
}

#[test]
fn assign_is_a_full_reset() {
    let mut text = seq::<12>(HELLO_EXCESS);
    assert!(text.is_truncated());

    // Re-assigning something that fits clears the sticky flag.
    text.assign_str("short").unwrap();
    assert!(!text.is_truncated());
    assert_eq!(text, "short");
}

#[test]
fn self_assign_via_copy_is_identity() {
    let mut text = seq::<12>(HELLO);
    let snapshot = text.clone();
    text.assign(snapshot.as_slice()).unwrap();
    assert_eq!(text, HELLO);
    assert!(!text.is_truncated());
}

#[test]
fn copy_out_assign_back_round_trip() {
    let original = seq::<32>("roundtrip me");
    let copied: Vec<u8> = original.as_slice().to_vec();
    let mut restored = BoundedSeq::<u8, 32>::new();
    restored.assign(&copied).unwrap();
    assert_eq!(restored, original);
}

// ============================================================================
// INSERT
// ============================================================================

#[test]
fn insert_fits_then_truncates() {
    // capacity 4: "AB" + "XY" at 1 fits exactly
    let mut text = seq::<5>("AB");
    text.insert_str(1, "XY").unwrap();
    assert_eq!(text, "AXYB");
    assert!(!text.is_truncated());

    // same start, one more than fits: tail 'B' is pushed out
    let mut text = seq::<5>("AB");
    text.insert_str(1, "XYZ").unwrap();
    assert_eq!(text, "AXYZ");
    assert_eq!(text.len(), 4);
    assert!(text.is_truncated());
    assert_invariants(&text);
}

#[test]
fn insert_of_empty_source_is_a_no_op() {
    let mut text = seq::<12>(HELLO);
    text.insert(4, b"").unwrap();
    assert_eq!(text, HELLO);
    assert!(!text.is_truncated());
}

#[test]
fn insert_at_len_is_append() {
    let mut text = seq::<16>("Hello");
    text.insert_str(5, " World").unwrap();
    assert_eq!(text, "Hello World");
}

#[test]
fn insert_past_len_is_out_of_bounds() {
    let mut text = seq::<16>("abc");
    let err = text.insert_str(4, "x").unwrap_err();
    assert_eq!(err, EditError::OutOfBounds { index: 4, len: 3 });
    // failed call must not disturb anything
    assert_eq!(text, "abc");
    assert_invariants(&text);
}

#[test]
fn self_insert_from_own_range() {
    let mut text = seq::<32>("ABCDEFGHIJ");
    text.insert_within(7, 2..5).unwrap();
    assert_eq!(text, "ABCDEFGCDEHIJ");
    assert!(!text.is_truncated());
    assert_invariants(&text);
}

#[test]
fn self_insert_range_straddling_the_gap() {
    // Source 2..6 straddles the insert position 4; needs the high-to-low fill.
    let mut text = seq::<32>("abcdefgh");
    text.insert_within(4, 2..6).unwrap();
    assert_eq!(text, "abcdcdefefgh");
    assert_invariants(&text);
}

// ============================================================================
// APPEND / PUSH / POP
// ============================================================================

#[test]
fn append_clamps_at_capacity() {
    let mut text = seq::<8>("abcd");
    text.push_str("efgh").unwrap();
    assert_eq!(text, "abcdefg");
    assert!(text.is_truncated());
    assert!(text.is_full());
}

#[test]
fn self_append_doubles_up_to_capacity() {
    // fits: 2L <= C
    let mut text = seq::<16>("abc");
    text.append_within(0..text.len()).unwrap();
    assert_eq!(text, "abcabc");
    assert!(!text.is_truncated());

    // clamps: 2L > C
    let mut text = seq::<8>("abcde");
    text.append_within(0..text.len()).unwrap();
    assert_eq!(text, "abcdeab");
    assert_eq!(text.len(), 7);
    assert!(text.is_truncated());
    assert_invariants(&text);
}

#[test]
fn push_back_on_full_flags_and_writes_nothing() {
    let mut text = seq::<4>("abc");
    assert!(text.is_full());
    let outcome = text.push_back(b'd').unwrap();
    assert_eq!(outcome.len, 3);
    assert!(outcome.truncated);
    assert_eq!(text, "abc");
}

#[test]
fn pop_back_on_empty_is_a_no_op() {
    let mut text = BoundedStr::<4>::new();
    assert_eq!(text.pop_back(), None);
    assert_invariants(&text);
}

#[test]
fn push_pop_are_inverse() {
    let mut text = seq::<8>("ab");
    text.push_back(b'c').unwrap();
    assert_eq!(text.pop_back(), Some(b'c'));
    assert_eq!(text, "ab");
}

// ============================================================================
// ERASE
// ============================================================================

#[test]
fn erase_shifts_the_tail_left() {
    let mut text = seq::<12>(HELLO);
    text.erase_at(5, 1).unwrap();
    assert_eq!(text, "HelloWorld");
    assert_eq!(text.len(), 10);
    assert!(!text.is_truncated());
    assert_invariants(&text);
}

#[test]
fn erase_never_touches_the_truncated_flag() {
    let mut text = seq::<12>(HELLO_EXCESS);
    assert!(text.is_truncated());
    text.erase(0, 5).unwrap();
    assert!(text.is_truncated()); // sticky across a shrinking edit
}

#[test]
fn erase_empty_range_is_a_no_op() {
    let mut text = seq::<12>(HELLO);
    text.erase(4, 4).unwrap();
    assert_eq!(text, HELLO);
}

#[test]
fn erase_end_clamps_to_len() {
    let mut text = seq::<12>(HELLO);
    text.erase(5, usize::MAX).unwrap();
    assert_eq!(text, "Hello");
}

#[test]
fn erase_count_form_clamps() {
    let mut text = seq::<12>(HELLO);
    text.erase_at(6, 100).unwrap();
    assert_eq!(text, "Hello ");
}

#[test]
fn reversed_range_is_never_silently_corrected() {
    let mut text = seq::<12>(HELLO);
    let err = text.erase(7, 3).unwrap_err();
    assert_eq!(err, EditError::IteratorOrder { first: 7, last: 3 });
    assert_eq!(text, HELLO);
}

// ============================================================================
// REPLACE / RESIZE
// ============================================================================

#[test]
fn replace_with_shorter_source() {
    let mut text = seq::<16>("Hello World");
    text.replace(0, 5, b"Bye").unwrap();
    assert_eq!(text, "Bye World");
}

#[test]
fn replace_with_longer_source() {
    let mut text = seq::<16>("Hi World");
    text.replace(0, 2, b"Greetings").unwrap();
    assert_eq!(text, "Greetings World");
    assert!(!text.is_truncated());
}

#[test]
fn replace_truncation_composes_from_the_insert_step() {
    let mut text = seq::<8>("abcdefg");
    text.replace(2, 4, b"0123456").unwrap();
    assert_eq!(text.len(), 7);
    assert_eq!(text, "ab01234");
    assert!(text.is_truncated());
    assert_invariants(&text);
}

#[test]
fn replace_count_form() {
    let mut text = seq::<16>("Hello World");
    text.replace_at(6, usize::MAX, b"There").unwrap();
    assert_eq!(text, "Hello There");
}

#[test]
fn resize_grows_with_fill_and_shrinks_clean() {
    let mut text = seq::<8>("ab");
    text.resize(5, b'x').unwrap();
    assert_eq!(text, "abxxx");

    text.resize(2, b'x').unwrap();
    assert_eq!(text, "ab");

    text.resize(100, b'x').unwrap();
    assert_eq!(text.len(), 7);
    assert!(text.is_truncated());
}

#[test]
fn truncate_shrinks_without_flagging() {
    let mut text = seq::<12>(HELLO);
    text.truncate(5);
    assert_eq!(text, "Hello");
    assert!(!text.is_truncated());

    text.truncate(100); // longer than len: no-op
    assert_eq!(text, "Hello");
}

// ============================================================================
// STICKY FLAG / CLEAR
// ============================================================================

#[test]
fn truncation_is_sticky_until_cleared() {
    let mut text = seq::<8>("abcdefghij");
    assert!(text.is_truncated());

    text.pop_back();
    text.push_back(b'z').unwrap();
    text.erase(0, 1).unwrap();
    assert!(text.is_truncated()); // survived three non-truncating edits

    text.clear_truncated();
    assert!(!text.is_truncated());
}

#[test]
fn clear_resets_content_and_flag() {
    let mut text = seq::<8>("abcdefghij");
    text.clear();
    assert!(text.is_empty());
    assert!(!text.is_truncated());
    assert_invariants(&text);
}

// ============================================================================
// SEARCH SMOKE TEST (lives with the editor fixtures it reuses)
// ============================================================================

#[test]
fn find_on_the_hello_fixture() {
    let text = seq::<12>(HELLO);
    assert_eq!(text.find(b"World"), Some(6));
    assert_eq!(text.find(b"Pin"), None);
}
