//! # stream
//!
//! Generic seekable read stream capability and the errors raised locally by stream implementations

use std::io::{self, Read};

use thiserror::Error;

/// A readable stream which can be moved to an absolute offset, queried for its offset and closed.
///
/// This is the capability consumed by a file access layer which doesn't care about the storage backend.
/// Implementors are not required to be safe for concurrent use.
pub trait ReadSeekClose: Read {
    /// Move the stream to the absolute byte offset `pos`.
    ///
    /// Succeeds only if the stream actually lands on `pos`;
    /// otherwise fails with [`StreamError::SeekMismatch`].
    fn seek_to(&mut self, pos: u64) -> io::Result<()>;

    /// Return the current absolute byte offset without moving the stream
    fn position(&mut self) -> io::Result<u64>;

    /// Close the stream, releasing the underlying handle.
    ///
    /// Once closed, any further operation fails with [`StreamError::Closed`].
    fn close(&mut self) -> io::Result<()>;
}

/// Failures synthesized by the stream itself, as opposed to the ones reported by the backend
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StreamError {
    #[error("can't seek to requested position {requested}: stream landed at {actual}")]
    SeekMismatch { requested: u64, actual: u64 },
    #[error("stream is closed")]
    Closed,
}

impl StreamError {
    /// Get the `StreamError` carried by `err`, if any.
    /// Returns `None` for errors reported by the backend
    pub fn from_io(err: &io::Error) -> Option<&StreamError> {
        err.get_ref().and_then(|e| e.downcast_ref::<StreamError>())
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        let kind = match err {
            StreamError::SeekMismatch { .. } => io::ErrorKind::Other,
            StreamError::Closed => io::ErrorKind::NotConnected,
        };
        io::Error::new(kind, err)
    }
}
