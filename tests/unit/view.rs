//! Non-owning views: construction, iteration, subview arithmetic.

use super::common::seq;
use stackseq::{EditError, SeqView};

#[test]
fn view_borrows_the_live_content() {
    let text = seq::<12>("Hello World");
    let view = text.view();
    assert_eq!(view.len(), 11);
    assert_eq!(view.as_slice(), b"Hello World");
    assert_eq!(view.first(), Some(&b'H'));
    assert_eq!(view.last(), Some(&b'd'));
}

#[test]
fn view_over_an_external_buffer() {
    let backing: [u8; 4] = *b"abcd";
    let view = SeqView::new(&backing);
    assert_eq!(view.len(), 4);
    assert_eq!(view.find(b"cd"), Some(2));
}

#[test]
fn iteration_runs_both_directions() {
    let text = seq::<8>("abc");
    let view = text.view();

    let forward: Vec<u8> = view.iter().copied().collect();
    assert_eq!(forward, b"abc");

    let backward: Vec<u8> = view.iter().rev().copied().collect();
    assert_eq!(backward, b"cba");
}

#[test]
fn subview_narrows_and_clamps() {
    let text = seq::<12>("Hello World");
    let view = text.view();

    let word = view.subview(6, 11).unwrap();
    assert_eq!(word.as_slice(), b"World");

    // end clamps to the view length
    let tail = view.subview(6, 999).unwrap();
    assert_eq!(tail.as_slice(), b"World");

    // nested subviews keep narrowing
    let mid = word.subview(1, 4).unwrap();
    assert_eq!(mid.as_slice(), b"orl");
}

#[test]
fn reversed_subview_is_an_iterator_order_error() {
    let text = seq::<12>("Hello World");
    let err = text.view().subview(8, 2).unwrap_err();
    assert_eq!(err, EditError::IteratorOrder { first: 8, last: 2 });
}

#[test]
fn subview_start_past_the_end_is_out_of_bounds() {
    let text = seq::<8>("abc");
    let err = text.view().subview(4, 5).unwrap_err();
    assert_eq!(err, EditError::OutOfBounds { index: 4, len: 3 });
}

#[test]
fn views_compare_by_content() {
    let a = seq::<8>("abc");
    let b = seq::<32>("abc");
    assert_eq!(a.view(), b.view());

    let c = seq::<8>("abd");
    assert!(a.view() < c.view());
}

#[test]
fn view_search_matches_sequence_search() {
    let text = seq::<16>("Hello World");
    let view = text.view();
    assert_eq!(view.find(b"World"), text.find(b"World"));
    assert_eq!(view.rfind(b"o"), text.rfind(b"o"));
    assert!(view.starts_with(b"Hello"));
    assert!(view.ends_with(b"World"));
    assert!(view.contains(b"lo W"));
}

#[test]
fn terminated_accessor_for_native_interop() {
    let text = seq::<8>("abc");
    let terminated = text.as_terminated();
    assert_eq!(terminated, b"abc\0");
    // the terminator is not part of any view
    assert_eq!(text.view().len(), 3);
}
