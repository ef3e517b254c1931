//! Schema construction and value access errors.

use std::fmt;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when building a schema or moving values through
/// field accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A declared type has no wire-format mapping.
    UnsupportedType {
        /// Rendered name of the offending type.
        type_name: String,
    },

    /// Two fields in one schema share a name.
    DuplicateFieldName { name: &'static str },

    /// A field schema was built with zero fields.
    ///
    /// Values without declared fields use [`Schema::of_value`] instead.
    ///
    /// [`Schema::of_value`]: crate::Schema::of_value
    EmptySchema,

    /// A value's runtime category disagrees with the declared one.
    ValueMismatch { expected: String, found: String },

    /// Raster dimensions do not match the pixel buffer.
    InvalidRaster {
        width: u32,
        height: u32,
        pixel_len: usize,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType { type_name } => {
                write!(f, "type `{type_name}` has no wire-format mapping")
            }
            Self::DuplicateFieldName { name } => {
                write!(f, "duplicate field name `{name}` in schema")
            }
            Self::EmptySchema => {
                write!(f, "field schema must declare at least one field")
            }
            Self::ValueMismatch { expected, found } => {
                write!(f, "value mismatch: expected {expected}, found {found}")
            }
            Self::InvalidRaster {
                width,
                height,
                pixel_len,
            } => {
                write!(
                    f,
                    "raster {width}x{height} requires {} pixel bytes, got {pixel_len}",
                    (*width as usize) * (*height as usize) * 3
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}
