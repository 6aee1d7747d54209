#![crate_name = "remotefs_hdfs"]
#![crate_type = "lib"]

//! # remotefs-hdfs
//!
//! remotefs-hdfs exposes an open HDFS file as a seekable read stream for [remotefs](https://github.com/remotefs-rs/remotefs-rs).
//!
//! ## Get started
//!
//! First of all you need to add **remotefs** and the stream crate to your project dependencies:
//!
//! ```toml
//! remotefs = "^0.3"
//! remotefs-hdfs = { version = "^0.1", features = ["hdrs"] }
//! ```
//!
//! these features are supported:
//!
//! - `hdrs`: implement the backend handle for `hdrs::File` and enable `HdfsReader::open`.
//! - `no-log`: disable logging. By default, this library will log via the `log` crate.
//!
//! The HDFS client library owns connection setup, authentication and path resolution.
//! This crate only receives an already opened file handle.
//!
//! ### Reading a range
//!
//! ```rust
//! use std::io::{Cursor, Read, Seek, SeekFrom};
//!
//! use remotefs_hdfs::{HdfsFile, HdfsReader, ReadSeekClose};
//!
//! // any type implementing `HdfsFile` can be wrapped; with the `hdrs` feature
//! // this is usually an `hdrs::File`.
//! struct InMemory(Cursor<Vec<u8>>);
//!
//! impl HdfsFile for InMemory {
//!     fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
//!         self.0.read(buf)
//!     }
//!
//!     fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
//!         self.0.seek(pos)
//!     }
//!
//!     fn close(self) -> std::io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut reader = HdfsReader::new(InMemory(Cursor::new((0..100).collect())));
//! reader.seek_to(50).unwrap();
//! let mut buf = [0u8; 30];
//! assert_eq!(reader.read(&mut buf).unwrap(), 30);
//! assert_eq!(buf[0], 50);
//! assert_eq!(reader.position().unwrap(), 80);
//! reader.close().unwrap();
//! ```
//!
//! ### Concurrency
//!
//! A reader is **not** safe for concurrent use: at most one request may be in flight.
//! Every operation takes `&mut self`; share a reader between threads only behind a lock,
//! or open one handle per thread.
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]
#![doc(
    html_favicon_url = "https://raw.githubusercontent.com/remotefs-rs/remotefs-rs/main/assets/logo-128.png"
)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/remotefs-rs/remotefs-rs/main/assets/logo.png"
)]

// -- crates
#[macro_use]
extern crate log;

mod backend;
mod reader;
mod stream;

pub use backend::HdfsFile;
pub use reader::HdfsReader;
pub use stream::{ReadSeekClose, StreamError};

// -- mock
#[cfg(test)]
pub(crate) mod mock;
