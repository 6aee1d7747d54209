//! # hdrs file
//!
//! `HdfsFile` implementation for `hdrs::File` (libhdfs)

use std::io::{self, Read, SeekFrom};

use super::{seek_and_tell, HdfsFile};

impl HdfsFile for ::hdrs::File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    // hdrs answers an absolute seek with the requested offset; ask hdfsTell instead
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        seek_and_tell(self, pos)
    }

    fn close(self) -> io::Result<()> {
        self.try_close()
    }
}
