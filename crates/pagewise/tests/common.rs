#![allow(missing_docs, dead_code)]

use std::fmt;

use pagewise::{BufferedIter, PageSource, VecPages};

/// Failure returned by [`failing_after`] sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDown;

impl fmt::Display for SourceDown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("source unavailable")
    }
}

impl std::error::Error for SourceDown {}

/// Serves `items` one page of `page` items at a time, failing on call `fail_on`.
pub fn failing_after<T: Clone>(
    items: Vec<T>,
    page: usize,
    fail_on: usize,
) -> impl PageSource<T, Error = SourceDown> {
    let mut inner = VecPages::new(items).max_page(page);
    let mut calls = 0;
    move |scratch: &mut [T]| {
        calls += 1;
        if calls == fail_on {
            return Err(SourceDown);
        }
        let Ok(n) = inner.fetch(scratch);
        Ok(n)
    }
}

/// Render each `advance()` result and the item it exposes, one per line,
/// followed by the final status.
pub fn trace<S>(it: &mut BufferedIter<String, S>, steps: usize) -> String
where
    S: PageSource<String>,
    S::Error: fmt::Display,
{
    let mut lines = Vec::new();
    for _ in 0..steps {
        let more = it.advance();
        let current = it.try_current().map_or("-", String::as_str);
        lines.push(format!("advance={more} current={current}"));
    }
    let error = it.error().map_or_else(|| "-".to_owned(), ToString::to_string);
    lines.push(format!("status={:?} error={error}", it.status()));
    lines.join("\n")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
