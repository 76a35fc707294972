//! Buffered, pull-based iteration over paginated sources.
//!
//! A [`BufferedIter`] owns a reusable scratch buffer and a [`PageSource`]
//! that fills it one page at a time. Callers drive it with
//! [`BufferedIter::advance`], read the item with [`BufferedIter::current`],
//! and check [`BufferedIter::error`] once the loop ends:
//!
//! ```rust
//! use pagewise::{BufferedIter, VecPages};
//!
//! let mut it = BufferedIter::new(VecPages::new(vec!["a", "b", "c"]).max_page(2));
//! let mut seen = Vec::new();
//! while it.advance() {
//!     seen.push(*it.current());
//! }
//! assert!(it.error().is_none());
//! assert_eq!(seen, ["a", "b", "c"]);
//! ```
//!
//! Without a source the iterator plays back a pre-populated buffer:
//!
//! ```rust
//! use pagewise::BufferedIter;
//!
//! let items: Vec<u32> = BufferedIter::from_items(vec![1, 2, 3])
//!     .into_items()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(items, [1, 2, 3]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod iter;
mod options;
mod source;
mod window;

#[cfg(test)]
mod tests;

pub use error::{FetchError, NoCurrentItem};
pub use iter::{BufferedIter, Items, Status};
pub use options::IterOptions;
pub use source::{NoPages, PageSource, VecPages};
