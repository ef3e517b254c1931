//! Schema-driven positional binary encoding/decoding for binfield.
//!
//! This is the main codec crate. It ties together the byte cursor
//! (`stream`) and the field tables (`schema`) to move whole values through
//! a compact, tagless wire format: each field is encoded in schema
//! declaration order as its fixed scalar layout, a count-prefixed
//! collection, count-prefixed UTF-8 text, or a dimensions-plus-blob image
//! payload.
//!
//! # Design Principles
//!
//! - **Correctness first** - All invariants are documented and tested.
//! - **Bounded decoding** - Counts from the wire are sanity-checked against
//!   the remaining stream and configured limits before any allocation.
//! - **No partial results** - Any error aborts the whole call; the format
//!   has no resynchronization markers.
//!
//! # Example
//!
//! ```
//! use codec::{deserialize, serialize, CodecLimits};
//! use schema::{Scalar, ScalarKind, Schema, TypeShape, Value};
//!
//! #[derive(Default)]
//! struct Counter {
//!     hits: u32,
//! }
//!
//! let schema = Schema::<Counter>::builder()
//!     .field(
//!         "hits",
//!         TypeShape::scalar(ScalarKind::U32),
//!         |c| Value::Scalar(Scalar::U32(c.hits)),
//!         |c, v| {
//!             c.hits = v.into_scalar()?.try_into()?;
//!             Ok(())
//!         },
//!     )
//!     .build()
//!     .unwrap();
//!
//! let bytes = serialize(&Counter { hits: 7 }, &schema).unwrap();
//! let decoded = deserialize(&bytes, &schema, Counter::default, &CodecLimits::default()).unwrap();
//! assert_eq!(decoded.hits, 7);
//! ```

mod collection;
mod error;
mod image;
mod limits;
mod scalar;
mod serializer;
mod text;

pub use collection::{read_collection, read_count, write_collection, write_count};
pub use error::{CodecError, CodecResult, LimitKind};
// `self::` disambiguates from the external `image` crate.
pub use self::image::{read_image, read_image_list, write_image, write_image_list, JPEG_QUALITY};
pub use limits::CodecLimits;
pub use scalar::{
    read_scalar, read_scalar_collection, write_scalar, write_scalar_collection,
};
pub use serializer::{
    decode_value, deserialize, deserialize_from, encode_value, serialize, serialize_into,
};
pub use text::{read_text, read_text_list, write_text, write_text_list};

pub use stream::{ByteReader, ByteWriter};
