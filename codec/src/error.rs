//! Error types for codec operations.

use std::fmt;

use schema::SchemaError;
use stream::StreamError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding/decoding.
///
/// All of these propagate to the immediate caller of serialize/deserialize.
/// The format has no resynchronization markers, so any error invalidates the
/// rest of the stream for that call; there is no partial-success return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Decode ran out of bytes mid-value.
    Stream(StreamError),

    /// Schema-level failure surfaced during a call (accessor/value category
    /// mismatch, unsupported shape).
    Schema(SchemaError),

    /// A decoded count/length is negative or exceeds the remaining stream
    /// bytes. Raised before any allocation sized by the untrusted count.
    CorruptLength { declared: i32, available: usize },

    /// An encode-side length does not fit the 4-byte signed count.
    LengthOverflow { length: usize },

    /// A configured decode limit was exceeded.
    LimitsExceeded {
        kind: LimitKind,
        limit: usize,
        actual: usize,
    },

    /// Decoded text bytes are not valid UTF-8.
    InvalidText { valid_up_to: usize },

    /// A character payload does not start a valid UTF-8 scalar.
    InvalidChar { first_byte: u8 },

    /// Declared image dimensions are not positive (or not encodable).
    InvalidImageDims { width: i64, height: i64 },

    /// The raster could not be compressed.
    ImageEncode { reason: String },

    /// Compressed image bytes could not be decompressed, or the decoded
    /// raster disagrees with the declared dimensions.
    ImageDecode { reason: String },
}

/// Specific decode limit that was exceeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    CollectionElems,
    TextBytes,
    ImageBytes,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stream(err) => write!(f, "stream error: {err}"),
            Self::Schema(err) => write!(f, "schema error: {err}"),
            Self::CorruptLength {
                declared,
                available,
            } => {
                write!(
                    f,
                    "corrupt length: declared {declared} but only {available} bytes remain"
                )
            }
            Self::LengthOverflow { length } => {
                write!(f, "length {length} does not fit a 4-byte signed count")
            }
            Self::LimitsExceeded {
                kind,
                limit,
                actual,
            } => {
                write!(f, "{kind} limit exceeded: {actual} > {limit}")
            }
            Self::InvalidText { valid_up_to } => {
                write!(f, "text is not valid UTF-8 (valid up to byte {valid_up_to})")
            }
            Self::InvalidChar { first_byte } => {
                write!(f, "byte 0x{first_byte:02X} does not start a UTF-8 scalar")
            }
            Self::InvalidImageDims { width, height } => {
                write!(f, "invalid image dimensions {width}x{height}")
            }
            Self::ImageEncode { reason } => write!(f, "image encode failed: {reason}"),
            Self::ImageDecode { reason } => write!(f, "image decode failed: {reason}"),
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CollectionElems => "collection elements",
            Self::TextBytes => "text bytes",
            Self::ImageBytes => "image bytes",
        };
        f.write_str(name)
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Stream(err) => Some(err),
            Self::Schema(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StreamError> for CodecError {
    fn from(err: StreamError) -> Self {
        Self::Stream(err)
    }
}

impl From<SchemaError> for CodecError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err)
    }
}
