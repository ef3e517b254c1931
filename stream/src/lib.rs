//! Bounded byte cursor primitives for the binfield codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for byte-level
//! encoding and decoding. It is designed for bounded, panic-free operation
//! with explicit error handling.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about schemas,
//!   fields, or wire categories.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use stream::{ByteWriter, ByteReader};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u32(42);
//! writer.write_bytes(b"hi");
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! assert_eq!(reader.read_bytes(2).unwrap(), b"hi");
//! ```

mod error;
mod reader;
mod writer;

pub use error::{StreamError, StreamResult};
pub use reader::ByteReader;
pub use writer::ByteWriter;
