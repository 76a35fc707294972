use alloc::vec::Vec;

/// Fixed-capacity slot storage with a sliding window of pending items.
///
/// `slots.len()` is the capacity: it is set once, when the window is first
/// sized, and every refill offers all of it to the page source. Only the
/// `head..end` range varies. Slots outside the range hold stale values that
/// the next refill overwrites.
///
/// `fill` initializes slots when the window is sized. Playback windows have
/// none: their slots are the items themselves and are never resized.
#[derive(Debug)]
pub(crate) struct PageWindow<T> {
    slots: Vec<T>,
    head: usize,
    end: usize,
    fill: Option<fn() -> T>,
}

impl<T> PageWindow<T> {
    /// A window whose slots are all pending items.
    pub(crate) fn filled(items: Vec<T>) -> Self {
        let end = items.len();
        Self {
            slots: items,
            head: 0,
            end,
            fill: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.end - self.head
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head == self.end
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.slots[self.head..self.end].first()
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut T> {
        self.slots[self.head..self.end].first_mut()
    }

    /// Pending items behind the front one.
    pub(crate) fn rest(&self) -> &[T] {
        if self.is_empty() {
            &[]
        } else {
            &self.slots[self.head + 1..self.end]
        }
    }

    /// Drop the front item. Caller guarantees the window is non-empty.
    pub(crate) fn pop_front(&mut self) {
        debug_assert!(self.head < self.end, "pop_front on an empty window");
        self.head += 1;
    }

    /// Offer every slot as scratch space; the window is empty until
    /// [`PageWindow::settle`] is called.
    pub(crate) fn scratch(&mut self) -> &mut [T] {
        self.head = 0;
        self.end = 0;
        &mut self.slots
    }

    /// Mark the first `filled` slots as pending. Caller guarantees
    /// `filled <= capacity`.
    pub(crate) fn settle(&mut self, filled: usize) {
        debug_assert!(filled <= self.slots.len());
        self.head = 0;
        self.end = filled;
    }

    /// Empty the window without touching the slots.
    pub(crate) fn clear(&mut self) {
        self.head = 0;
        self.end = 0;
    }

    /// Size a zero-capacity window to exactly `capacity` slots. The only
    /// allocation a window ever makes. Windows without a filler stay as
    /// they are.
    pub(crate) fn ensure_capacity(&mut self, capacity: usize) {
        if let (true, Some(fill)) = (self.slots.is_empty(), self.fill) {
            self.slots.reserve_exact(capacity);
            self.slots.resize_with(capacity, fill);
        }
    }
}

impl<T: Default> PageWindow<T> {
    /// A window of zero capacity; sized on first refill.
    pub(crate) fn empty() -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            end: 0,
            fill: Some(T::default),
        }
    }

    /// Scratch-only window backed by an existing allocation. The slot count
    /// becomes the vector's capacity; no items are pending.
    ///
    /// Zero-sized items report an unbounded capacity, so they are sized on
    /// first refill like an empty window.
    pub(crate) fn scratch_from(mut buf: Vec<T>) -> Self {
        buf.clear();
        if size_of::<T>() != 0 {
            let capacity = buf.capacity();
            buf.resize_with(capacity, T::default);
        }
        Self {
            slots: buf,
            head: 0,
            end: 0,
            fill: Some(T::default),
        }
    }
}
