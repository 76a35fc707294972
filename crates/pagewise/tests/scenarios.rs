#![expect(missing_docs)]

mod common;

use pagewise::{BufferedIter, FetchError, IterOptions, Status, VecPages};

use crate::common::{SourceDown, failing_after, init_tracing, trace};

fn abc() -> Vec<String> {
    ["a", "b", "c"].map(String::from).to_vec()
}

#[test]
fn abc_through_single_slot_scratch() {
    init_tracing();
    let mut it = BufferedIter::with_scratch(
        VecPages::new(abc()),
        Vec::with_capacity(1),
        IterOptions::default(),
    );
    insta::assert_snapshot!(trace(&mut it, 5), @r"
    advance=true current=a
    advance=true current=b
    advance=true current=c
    advance=false current=-
    advance=false current=-
    status=Exhausted error=-
    ");
}

#[test]
fn abc_playback() {
    init_tracing();
    let mut it = BufferedIter::from_items(abc());
    insta::assert_snapshot!(trace(&mut it, 4), @r"
    advance=true current=a
    advance=true current=b
    advance=true current=c
    advance=false current=-
    status=Exhausted error=-
    ");
}

#[test]
fn empty_source_with_any_capacity() {
    init_tracing();
    for capacity in [0, 1, 2, 64, 4096] {
        let mut it = BufferedIter::with_scratch(
            VecPages::<String>::new(Vec::new()),
            Vec::with_capacity(capacity),
            IterOptions::default(),
        );
        assert!(!it.advance(), "capacity {capacity}");
        assert!(it.error().is_none(), "capacity {capacity}");
    }
}

#[test]
fn failing_first_fetch() {
    init_tracing();
    let mut it = BufferedIter::new(failing_after(abc(), 2, 1));
    insta::assert_snapshot!(trace(&mut it, 2), @r"
    advance=false current=-
    advance=false current=-
    status=Failed error=next-page fetch failed: source unavailable
    ");
}

#[test]
fn failing_second_fetch_keeps_first_page() {
    init_tracing();
    let mut it = BufferedIter::with_options(
        failing_after(abc(), 2, 2),
        IterOptions {
            default_capacity: 2,
        },
    );
    insta::assert_snapshot!(trace(&mut it, 4), @r"
    advance=true current=a
    advance=true current=b
    advance=false current=-
    advance=false current=-
    status=Failed error=next-page fetch failed: source unavailable
    ");
}

#[test]
fn error_chains_to_source() {
    use std::error::Error as _;

    let mut it = BufferedIter::new(failing_after(abc(), 2, 1));
    assert!(!it.advance());
    let err = it.into_error().expect("failed");
    let source = err.source().expect("has a source");
    assert_eq!(source.to_string(), "source unavailable");
    assert_eq!(err.into_source_error(), Some(SourceDown));
}

#[test]
fn overfilled_error_text() {
    let err: FetchError<SourceDown> = FetchError::Overfilled {
        filled: 9,
        capacity: 4,
    };
    insta::assert_snapshot!(err.to_string(), @"next-page fetch reported 9 items for a scratch buffer of 4");
}

#[test]
fn collects_through_std_iterator() {
    let items = BufferedIter::with_options(
        VecPages::new((0..1000u32).collect()).max_page(7),
        IterOptions {
            default_capacity: 16,
        },
    )
    .into_items()
    .collect::<Result<Vec<_>, _>>()
    .expect("infallible source");
    assert_eq!(items, (0..1000).collect::<Vec<_>>());
}

#[test]
fn status_after_each_terminal() {
    let mut done = BufferedIter::new(VecPages::<u8>::new(Vec::new()));
    assert_eq!(done.status(), Status::Ready);
    assert!(!done.is_terminated());
    done.advance();
    assert_eq!(done.status(), Status::Exhausted);
    assert!(done.is_terminated());

    let mut failed = BufferedIter::new(failing_after(vec![1u8], 1, 1));
    failed.advance();
    assert_eq!(failed.status(), Status::Failed);
    assert!(failed.is_terminated());
}
