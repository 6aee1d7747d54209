//! # reader
//!
//! Seekable read stream over an open HDFS file

use std::io::{self, Read, Seek, SeekFrom};

use remotefs::fs::stream::ReadAndSeek;
use remotefs::fs::ReadStream;

use crate::backend::HdfsFile;
use crate::stream::{ReadSeekClose, StreamError};

/// Seekable read-only stream over an open HDFS file.
///
/// The reader is the sole owner of the file handle and releases it exactly once,
/// either on [`ReadSeekClose::close`] or when dropped.
///
/// End of file is reported as `Ok(0)` from `read` with a non-empty buffer.
///
/// Concurrency: not thread safe, at most one request at a time.
pub struct HdfsReader<F: HdfsFile> {
    file: Option<F>,
}

impl<F: HdfsFile> HdfsReader<F> {
    /// Wrap an already opened HDFS file
    pub fn new(file: F) -> Self {
        Self { file: Some(file) }
    }

    /// Returns whether the reader has been closed
    pub fn is_closed(&self) -> bool {
        self.file.is_none()
    }

    // -- private

    fn file_mut(&mut self) -> io::Result<&mut F> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::from(StreamError::Closed))
    }
}

#[cfg(feature = "hdrs")]
impl HdfsReader<::hdrs::File> {
    /// Open `path` for read on `client` and wrap it
    pub fn open(client: &::hdrs::Client, path: &str) -> io::Result<Self> {
        debug!("opening hdfs file at {} for read", path);
        let mut options = client.open_file();
        let file = options.read(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<F: HdfsFile> From<F> for HdfsReader<F> {
    fn from(file: F) -> Self {
        Self::new(file)
    }
}

impl<F: HdfsFile> Read for HdfsReader<F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let bytes = HdfsFile::read(self.file_mut()?, buf)?;
        trace!("read {} of {} bytes", bytes, buf.len());
        Ok(bytes)
    }
}

impl<F: HdfsFile> ReadSeekClose for HdfsReader<F> {
    fn seek_to(&mut self, pos: u64) -> io::Result<()> {
        trace!("seeking to {}", pos);
        let actual = HdfsFile::seek(self.file_mut()?, SeekFrom::Start(pos))?;
        if actual != pos {
            error!("requested seek to {}, but stream is at {}", pos, actual);
            return Err(StreamError::SeekMismatch {
                requested: pos,
                actual,
            }
            .into());
        }
        Ok(())
    }

    fn position(&mut self) -> io::Result<u64> {
        let pos = HdfsFile::seek(self.file_mut()?, SeekFrom::Current(0))?;
        trace!("current position is {}", pos);
        Ok(pos)
    }

    fn close(&mut self) -> io::Result<()> {
        let file = self.file.take().ok_or(StreamError::Closed)?;
        debug!("closing hdfs file");
        file.close()
    }
}

impl<F: HdfsFile> Seek for HdfsReader<F> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match pos {
            SeekFrom::Start(offset) => self.seek_to(offset).map(|_| offset),
            pos => {
                trace!("seeking to {:?}", pos);
                HdfsFile::seek(self.file_mut()?, pos)
            }
        }
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        self.position()
    }
}

impl<F: HdfsFile + Send> ReadAndSeek for HdfsReader<F> {}

impl<F: HdfsFile + Send + 'static> From<HdfsReader<F>> for ReadStream {
    fn from(reader: HdfsReader<F>) -> Self {
        ReadStream::from(Box::new(reader) as Box<dyn ReadAndSeek>)
    }
}

impl<F: HdfsFile> Drop for HdfsReader<F> {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            debug!("hdfs reader dropped while open; closing file");
            if let Err(err) = file.close() {
                error!("failed to close hdfs file: {}", err);
            }
        }
    }
}

// Checked at compile time: a reader over any sendable handle is a generic stream.
#[allow(dead_code)]
fn assert_stream_capabilities<F: HdfsFile + Send>() {
    fn is_stream<S: ReadSeekClose + ReadAndSeek>() {}
    is_stream::<HdfsReader<F>>();
}
