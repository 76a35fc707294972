use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{BufferedIter, PageSource, VecPages};


/// Failure injected by [`FlakyPages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Boom(pub usize);

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boom on call {}", self.0)
    }
}

impl core::error::Error for Boom {}

/// Serves from an inner [`VecPages`] but fails on the `fail_on`-th call
/// (1-based) and records every call it receives.
pub(crate) struct FlakyPages<T> {
    pub inner: VecPages<T>,
    pub fail_on: usize,
    pub calls: usize,
}

impl<T> FlakyPages<T> {
    pub fn new(items: Vec<T>, max_page: usize, fail_on: usize) -> Self {
        Self {
            inner: VecPages::new(items).max_page(max_page),
            fail_on,
            calls: 0,
        }
    }
}

impl<T: Clone> PageSource<T> for FlakyPages<T> {
    type Error = Boom;

    fn fetch(&mut self, scratch: &mut [T]) -> Result<usize, Boom> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(Boom(self.calls));
        }
        Ok(self.inner.fetch(scratch).unwrap_or_else(|never| match never {}))
    }
}

/// Drain with the advance/read loop, the way callers are expected to.
pub(crate) fn drain<T, S>(it: &mut BufferedIter<T, S>) -> Vec<T>
where
    T: Default + Clone,
    S: PageSource<T>,
{
    let mut out = Vec::new();
    while it.advance() {
        let mut item = T::default();
        it.read_into(&mut item);
        out.push(item);
    }
    out
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| String::from(*s)).collect()
}
