//! ## Mock
//!
//! Contains mock for test units

use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::{thread_rng, RngCore};

use crate::HdfsFile;

// -- logger

pub fn logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// -- data

/// Generate `len` random bytes
pub fn random_data(len: usize) -> Vec<u8> {
    let mut data = vec![0u8; len];
    thread_rng().fill_bytes(&mut data);
    data
}

// -- hdfs file

type Failure = (io::ErrorKind, &'static str);

/// In-memory HDFS file
pub struct MockHdfsFile {
    data: Cursor<Vec<u8>>,
    clamp_seek: bool,
    read_error: Option<Failure>,
    seek_error: Option<Failure>,
    close_error: Option<Failure>,
    closes: Arc<AtomicUsize>,
}

impl MockHdfsFile {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data: Cursor::new(data),
            clamp_seek: false,
            read_error: None,
            seek_error: None,
            close_error: None,
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Absolute seeks past the end land on the end of file instead
    pub fn clamp_seek(mut self) -> Self {
        self.clamp_seek = true;
        self
    }

    pub fn read_error(mut self, kind: io::ErrorKind, msg: &'static str) -> Self {
        self.read_error = Some((kind, msg));
        self
    }

    pub fn seek_error(mut self, kind: io::ErrorKind, msg: &'static str) -> Self {
        self.seek_error = Some((kind, msg));
        self
    }

    pub fn close_error(mut self, kind: io::ErrorKind, msg: &'static str) -> Self {
        self.close_error = Some((kind, msg));
        self
    }

    /// Number of times `close` has been called on the backend
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        self.closes.clone()
    }

    fn fail(failure: Option<Failure>) -> io::Result<()> {
        match failure {
            Some((kind, msg)) => Err(io::Error::new(kind, msg)),
            None => Ok(()),
        }
    }
}

impl HdfsFile for MockHdfsFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Self::fail(self.read_error)?;
        self.data.read(buf)
    }

    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Self::fail(self.seek_error)?;
        let len = self.data.get_ref().len() as u64;
        let pos = match pos {
            SeekFrom::Start(offset) if self.clamp_seek => SeekFrom::Start(offset.min(len)),
            pos => pos,
        };
        self.data.seek(pos)
    }

    fn close(self) -> io::Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Self::fail(self.close_error)
    }
}
