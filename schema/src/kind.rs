//! Fixed-width scalar kinds.

use std::fmt;

/// The closed set of fixed-width scalar kinds with a binary wire layout.
///
/// Multi-byte numerics are encoded little-endian. `Decimal` uses a fixed
/// 16-byte layout (96-bit two's-complement mantissa plus scale and sign).
/// `Char` is the one variable-width kind: a single UTF-8 scalar of 1-4 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
    Decimal,
    Char,
}

impl ScalarKind {
    /// Every scalar kind, in a stable order.
    pub const ALL: [Self; 13] = [
        Self::Bool,
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
        Self::Decimal,
        Self::Char,
    ];

    /// The fixed encoded width in bytes, or `None` for the variable-width
    /// `Char` kind.
    #[must_use]
    pub const fn fixed_width(self) -> Option<usize> {
        match self {
            Self::Bool | Self::I8 | Self::U8 => Some(1),
            Self::I16 | Self::U16 => Some(2),
            Self::I32 | Self::U32 | Self::F32 => Some(4),
            Self::I64 | Self::U64 | Self::F64 => Some(8),
            Self::Decimal => Some(16),
            Self::Char => None,
        }
    }

    /// The minimum encoded width in bytes.
    ///
    /// Used to bound how many elements of this kind can plausibly remain in
    /// a stream of a given length.
    #[must_use]
    pub const fn min_width(self) -> usize {
        match self.fixed_width() {
            Some(width) => width,
            // A one-byte UTF-8 scalar.
            None => 1,
        }
    }

    /// The kind's diagnostic name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::Char => "char",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
