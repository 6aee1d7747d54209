//! # backend
//!
//! Primitives consumed from the HDFS client library

use std::io::{self, Seek, SeekFrom};

#[cfg(feature = "hdrs")]
mod hdrs_file;

/// An already opened HDFS file, as provided by the HDFS client library.
///
/// The read cursor lives in the handle; connection setup, authentication
/// and path resolution are the client library's business.
pub trait HdfsFile {
    /// Read up to `buf.len()` bytes at the current offset, advancing it.
    /// `Ok(0)` with a non-empty buffer means end of file.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Seek with whence, returning the resulting absolute offset
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;

    /// Release the handle, returning the result of the backend close
    fn close(self) -> io::Result<()>
    where
        Self: Sized;
}

/// Seek `file` to `pos` and ask the file where it actually landed.
///
/// For clients whose `Seek` echoes the requested offset for `SeekFrom::Start`
/// instead of reporting the landed one.
#[cfg_attr(not(feature = "hdrs"), allow(dead_code))]
pub(crate) fn seek_and_tell<S: Seek>(file: &mut S, pos: SeekFrom) -> io::Result<u64> {
    match pos {
        SeekFrom::Start(_) => {
            file.seek(pos)?;
            file.seek(SeekFrom::Current(0))
        }
        pos => file.seek(pos),
    }
}
