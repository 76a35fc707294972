use thiserror::Error;

/// Why a [`BufferedIter`](crate::BufferedIter) stopped early.
///
/// Running out of items is not an error and is never reported through this
/// type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError<E> {
    /// The page source returned an error.
    #[error("next-page fetch failed: {source}")]
    Fetch {
        /// The error returned by the source.
        #[source]
        source: E,
    },
    /// The page source claimed to fill more slots than it was offered.
    #[error("next-page fetch reported {filled} items for a scratch buffer of {capacity}")]
    Overfilled {
        /// Count reported by the source.
        filled: usize,
        /// Scratch capacity offered to the source.
        capacity: usize,
    },
}

impl<E> FetchError<E> {
    /// The source error, if this failure came from the source itself.
    pub fn source_error(&self) -> Option<&E> {
        match self {
            Self::Fetch { source } => Some(source),
            Self::Overfilled { .. } => None,
        }
    }

    /// Consume the error, returning the source error if there is one.
    pub fn into_source_error(self) -> Option<E> {
        match self {
            Self::Fetch { source } => Some(source),
            Self::Overfilled { .. } => None,
        }
    }
}

/// Returned by [`BufferedIter::try_current`](crate::BufferedIter::try_current)
/// when no successful `advance()` precedes the read.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no current item")]
pub struct NoCurrentItem;
