/// Construction-time configuration for a [`BufferedIter`](crate::BufferedIter).
///
/// # Examples
///
/// ```rust
/// use pagewise::{BufferedIter, IterOptions, VecPages};
///
/// let options = IterOptions {
///     default_capacity: 128,
/// };
/// let it = BufferedIter::with_options(VecPages::new(vec![0u8; 10]), options);
/// assert_eq!(it.capacity(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IterOptions {
    /// Number of scratch slots allocated on the first refill when the
    /// iterator was not handed a buffer with capacity of its own.
    ///
    /// Larger values amortize the per-call cost of the page source. A value
    /// of `0` is treated as `1`.
    ///
    /// # Default
    ///
    /// [`IterOptions::DEFAULT_CAPACITY`]
    pub default_capacity: usize,
}

impl IterOptions {
    /// Scratch size used when none is configured.
    pub const DEFAULT_CAPACITY: usize = 32;

    pub(crate) fn refill_capacity(self) -> usize {
        self.default_capacity.max(1)
    }
}

impl Default for IterOptions {
    fn default() -> Self {
        Self {
            default_capacity: Self::DEFAULT_CAPACITY,
        }
    }
}
