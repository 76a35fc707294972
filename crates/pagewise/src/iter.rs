use alloc::vec::Vec;
use core::{fmt, mem};

use crate::{
    error::{FetchError, NoCurrentItem},
    options::IterOptions,
    source::{NoPages, PageSource},
    window::PageWindow,
};

/// Coarse state of a [`BufferedIter`].
///
/// `Exhausted` and `Failed` are terminal: once reached, `advance()` always
/// returns `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// May still produce items.
    Ready,
    /// The source ran out of items.
    Exhausted,
    /// The source failed; see [`BufferedIter::error`].
    Failed,
}

enum State<E> {
    Ready,
    Exhausted,
    Failed(FetchError<E>),
}

/// A pull-based iterator over a paginated [`PageSource`].
///
/// Items are fetched a page at a time into a scratch buffer that is sized
/// once and reused for every page. The canonical loop is:
///
/// ```rust
/// # use pagewise::{BufferedIter, VecPages};
/// # let mut it = BufferedIter::new(VecPages::new(vec![1, 2, 3]));
/// while it.advance() {
///     let item = it.current();
///     # let _ = item;
/// }
/// if let Some(err) = it.error() {
///     panic!("stopped early: {err}");
/// }
/// ```
pub struct BufferedIter<T, S: PageSource<T>> {
    source: S,
    window: PageWindow<T>,
    state: State<S::Error>,
    options: IterOptions,
    // false only for a playback iterator that has not reported its first item
    primed: bool,
    pages_fetched: usize,
}

impl<T: Default, S: PageSource<T>> BufferedIter<T, S> {
    /// Iterate over `source` with default [`IterOptions`].
    pub fn new(source: S) -> Self {
        Self::with_options(source, IterOptions::default())
    }

    /// Iterate over `source`; the scratch buffer is sized from `options` on
    /// the first refill.
    pub fn with_options(source: S, options: IterOptions) -> Self {
        Self::from_parts(source, PageWindow::empty(), options, true)
    }

    /// Iterate over `source`, reusing `scratch`'s allocation as the scratch
    /// buffer. Its capacity becomes the page size; its contents are
    /// discarded. A zero-capacity vector falls back to
    /// `options.default_capacity`.
    pub fn with_scratch(source: S, scratch: Vec<T>, options: IterOptions) -> Self {
        Self::from_parts(source, PageWindow::scratch_from(scratch), options, true)
    }

    /// Consume the iterator as a standard [`Iterator`] that moves each item
    /// out of the buffer.
    pub fn into_items(self) -> Items<T, S> {
        Items {
            inner: self,
            done: false,
        }
    }
}

impl<T> BufferedIter<T, NoPages> {
    /// Play back `items` without fetching anything.
    pub fn from_items(items: Vec<T>) -> Self {
        Self::from_parts(NoPages, PageWindow::filled(items), IterOptions::default(), false)
    }
}

impl<T> From<Vec<T>> for BufferedIter<T, NoPages> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T, S: PageSource<T>> BufferedIter<T, S> {
    fn from_parts(source: S, window: PageWindow<T>, options: IterOptions, primed: bool) -> Self {
        Self {
            source,
            window,
            state: State::Ready,
            options,
            primed,
            pages_fetched: 0,
        }
    }

    /// Move to the next item. Returns `false` once the source is exhausted or
    /// has failed, and on every call after that.
    pub fn advance(&mut self) -> bool {
        if !matches!(self.state, State::Ready) {
            return false;
        }
        if !self.primed {
            self.primed = true;
            if self.window.is_empty() {
                self.finish();
                return false;
            }
            return true;
        }
        if self.window.len() > 1 {
            self.window.pop_front();
            return true;
        }
        self.refill()
    }

    fn refill(&mut self) -> bool {
        self.window.ensure_capacity(self.options.refill_capacity());
        let capacity = self.window.capacity();

        self.pages_fetched += 1;
        let filled = match self.source.fetch(self.window.scratch()) {
            Ok(filled) => filled,
            Err(source) => {
                self.fail(FetchError::Fetch { source });
                return false;
            }
        };
        tracing::trace!(page = self.pages_fetched, capacity, filled, "fetched page");

        if filled > capacity {
            self.fail(FetchError::Overfilled { filled, capacity });
            return false;
        }
        self.window.settle(filled);
        if filled == 0 {
            self.finish();
            return false;
        }
        true
    }

    fn finish(&mut self) {
        tracing::debug!(pages = self.pages_fetched, "page source exhausted");
        self.window.clear();
        self.state = State::Exhausted;
    }

    fn fail(&mut self, err: FetchError<S::Error>) {
        tracing::debug!(pages = self.pages_fetched, "page source failed");
        self.window.clear();
        self.state = State::Failed(err);
    }

    /// The current item.
    ///
    /// # Panics
    ///
    /// Panics unless the last call to [`BufferedIter::advance`] returned
    /// `true`.
    #[track_caller]
    pub fn current(&self) -> &T {
        match self.try_current() {
            Ok(item) => item,
            Err(NoCurrentItem) => {
                panic!("no current item: advance() must return true before current() is read")
            }
        }
    }

    /// The current item, or [`NoCurrentItem`] if the last call to
    /// [`BufferedIter::advance`] did not return `true`.
    pub fn try_current(&self) -> Result<&T, NoCurrentItem> {
        self.current_slot().ok_or(NoCurrentItem)
    }

    /// Mutable access to the current item, if there is one.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        if self.has_current() {
            self.window.front_mut()
        } else {
            None
        }
    }

    /// Assign the current item to `out`, reusing `out`'s storage where the
    /// item type allows.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`BufferedIter::current`].
    #[track_caller]
    pub fn read_into(&self, out: &mut T)
    where
        T: Clone,
    {
        out.clone_from(self.current());
    }

    /// The failure that stopped iteration, if any. Running out of items is
    /// not a failure.
    pub fn error(&self) -> Option<&FetchError<S::Error>> {
        match &self.state {
            State::Failed(err) => Some(err),
            State::Ready | State::Exhausted => None,
        }
    }

    /// Consume the iterator, returning the failure that stopped it, if any.
    pub fn into_error(self) -> Option<FetchError<S::Error>> {
        match self.state {
            State::Failed(err) => Some(err),
            State::Ready | State::Exhausted => None,
        }
    }

    /// Where the iterator is in its lifecycle.
    pub fn status(&self) -> Status {
        match self.state {
            State::Ready => Status::Ready,
            State::Exhausted => Status::Exhausted,
            State::Failed(_) => Status::Failed,
        }
    }

    /// Whether the iterator reached a terminal state.
    pub fn is_terminated(&self) -> bool {
        self.status() != Status::Ready
    }

    /// Items already fetched that follow the current one.
    pub fn pending(&self) -> &[T] {
        if self.has_current() {
            self.window.rest()
        } else {
            &[]
        }
    }

    /// Number of scratch slots; `0` until the first refill sizes the buffer.
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Number of times the source has been called.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// The page source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Recover the page source.
    pub fn into_source(self) -> S {
        self.source
    }

    fn has_current(&self) -> bool {
        self.primed && matches!(self.state, State::Ready) && !self.window.is_empty()
    }

    fn current_slot(&self) -> Option<&T> {
        if self.has_current() {
            self.window.front()
        } else {
            None
        }
    }
}

impl<T, S> fmt::Debug for BufferedIter<T, S>
where
    T: fmt::Debug,
    S: PageSource<T>,
    S::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferedIter")
            .field("status", &self.status())
            .field("current", &self.current_slot())
            .field("pending", &self.pending().len())
            .field("capacity", &self.capacity())
            .field("pages_fetched", &self.pages_fetched)
            .field("error", &self.error())
            .finish_non_exhaustive()
    }
}

/// Owning [`Iterator`] over a [`BufferedIter`], created by
/// [`BufferedIter::into_items`].
///
/// Yields `Ok(item)` for every item, then `Err` once if the source failed,
/// then `None` forever.
pub struct Items<T, S: PageSource<T>> {
    inner: BufferedIter<T, S>,
    done: bool,
}

impl<T, S: PageSource<T>> Items<T, S> {
    /// The underlying iterator.
    pub fn get_ref(&self) -> &BufferedIter<T, S> {
        &self.inner
    }
}

impl<T: Default, S: PageSource<T>> Iterator for Items<T, S> {
    type Item = Result<T, FetchError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.inner.advance() {
            return self.inner.current_mut().map(|slot| Ok(mem::take(slot)));
        }
        self.done = true;
        match mem::replace(&mut self.inner.state, State::Exhausted) {
            State::Failed(err) => Some(Err(err)),
            State::Ready | State::Exhausted => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (self.inner.pending().len(), None)
        }
    }
}

impl<T: Default, S: PageSource<T>> core::iter::FusedIterator for Items<T, S> {}
