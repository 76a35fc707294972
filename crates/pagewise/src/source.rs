use alloc::vec::Vec;
use core::convert::Infallible;

/// A capability that copies the next page of items into a scratch buffer.
///
/// `fetch` writes at most `scratch.len()` items starting at index 0 and
/// returns how many it wrote. `Ok(0)` means the source is exhausted. An `Err`
/// is a hard failure; the iterator stops and never calls the source again.
///
/// Any `FnMut(&mut [T]) -> Result<usize, E>` is a page source:
///
/// ```rust
/// use pagewise::BufferedIter;
///
/// let mut next = 0u32;
/// let mut it: BufferedIter<u32, _> = BufferedIter::new(move |scratch: &mut [u32]| {
///     let n = scratch.len().min(5 - next as usize);
///     for slot in &mut scratch[..n] {
///         *slot = next;
///         next += 1;
///     }
///     Ok::<usize, std::io::Error>(n)
/// });
/// let mut sum = 0;
/// while it.advance() {
///     sum += *it.current();
/// }
/// assert_eq!(sum, 10);
/// ```
pub trait PageSource<T> {
    /// Failure reported by the source.
    type Error;

    /// Fill `scratch` with the next page of items.
    fn fetch(&mut self, scratch: &mut [T]) -> Result<usize, Self::Error>;
}

impl<T, E, F> PageSource<T> for F
where
    F: FnMut(&mut [T]) -> Result<usize, E>,
{
    type Error = E;

    #[inline]
    fn fetch(&mut self, scratch: &mut [T]) -> Result<usize, E> {
        self(scratch)
    }
}

/// The always-empty source backing playback mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoPages;

impl<T> PageSource<T> for NoPages {
    type Error = Infallible;

    #[inline]
    fn fetch(&mut self, _scratch: &mut [T]) -> Result<usize, Infallible> {
        Ok(0)
    }
}

/// An in-memory source serving a `Vec` in pages.
///
/// Each page holds at most `max_page` items (unbounded by default) and never
/// more than the scratch offered. Items are assigned with
/// [`Clone::clone_from`], so slots that already own storage are reused.
#[derive(Debug, Clone)]
pub struct VecPages<T> {
    items: Vec<T>,
    next: usize,
    max_page: usize,
    pages_served: usize,
}

impl<T> VecPages<T> {
    /// Serve `items` in order.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            next: 0,
            max_page: usize::MAX,
            pages_served: 0,
        }
    }

    /// Limit every page to at most `max_page` items. `0` removes the limit.
    #[must_use]
    pub fn max_page(mut self, max_page: usize) -> Self {
        self.max_page = if max_page == 0 { usize::MAX } else { max_page };
        self
    }

    /// Number of non-empty pages handed out so far.
    pub fn pages_served(&self) -> usize {
        self.pages_served
    }

    /// Items not yet served.
    pub fn remaining(&self) -> &[T] {
        &self.items[self.next..]
    }
}

impl<T: Clone> PageSource<T> for VecPages<T> {
    type Error = Infallible;

    fn fetch(&mut self, scratch: &mut [T]) -> Result<usize, Infallible> {
        let page = &self.items[self.next..];
        let n = page.len().min(scratch.len()).min(self.max_page);
        for (slot, item) in scratch.iter_mut().zip(&page[..n]) {
            slot.clone_from(item);
        }
        self.next += n;
        if n > 0 {
            self.pages_served += 1;
        }
        Ok(n)
    }
}
