//! Fixed-width scalar encoding.
//!
//! Multi-byte numerics are little-endian. Booleans are one byte (any
//! non-zero decodes as `true`). `Decimal` uses the fixed 16-byte raw layout
//! (96-bit two's-complement mantissa, scale, sign). `Char` is the one
//! variable-width kind: the scalar's UTF-8 bytes, 1-4 of them, with the
//! length recovered from the leading byte.

use schema::{Decimal, Scalar, ScalarKind};
use stream::{ByteReader, ByteWriter};

use crate::collection::{read_collection, write_collection};
use crate::error::{CodecError, CodecResult};
use crate::limits::CodecLimits;

/// Writes one scalar in its fixed binary layout.
///
/// No kind is ever partially written: the writer is Vec-backed, so a write
/// fully appends.
pub fn write_scalar(writer: &mut ByteWriter, scalar: &Scalar) {
    match scalar {
        Scalar::Bool(value) => writer.write_u8(u8::from(*value)),
        Scalar::I8(value) => writer.write_i8(*value),
        Scalar::U8(value) => writer.write_u8(*value),
        Scalar::I16(value) => writer.write_i16(*value),
        Scalar::U16(value) => writer.write_u16(*value),
        Scalar::I32(value) => writer.write_i32(*value),
        Scalar::U32(value) => writer.write_u32(*value),
        Scalar::I64(value) => writer.write_i64(*value),
        Scalar::U64(value) => writer.write_u64(*value),
        Scalar::F32(value) => writer.write_f32(*value),
        Scalar::F64(value) => writer.write_f64(*value),
        Scalar::Decimal(value) => writer.write_bytes(&value.serialize()),
        Scalar::Char(value) => {
            let mut buf = [0u8; 4];
            writer.write_bytes(value.encode_utf8(&mut buf).as_bytes());
        }
    }
}

/// Reads one scalar of the given kind.
pub fn read_scalar(reader: &mut ByteReader<'_>, kind: ScalarKind) -> CodecResult<Scalar> {
    let scalar = match kind {
        ScalarKind::Bool => Scalar::Bool(reader.read_u8()? != 0),
        ScalarKind::I8 => Scalar::I8(reader.read_i8()?),
        ScalarKind::U8 => Scalar::U8(reader.read_u8()?),
        ScalarKind::I16 => Scalar::I16(reader.read_i16()?),
        ScalarKind::U16 => Scalar::U16(reader.read_u16()?),
        ScalarKind::I32 => Scalar::I32(reader.read_i32()?),
        ScalarKind::U32 => Scalar::U32(reader.read_u32()?),
        ScalarKind::I64 => Scalar::I64(reader.read_i64()?),
        ScalarKind::U64 => Scalar::U64(reader.read_u64()?),
        ScalarKind::F32 => Scalar::F32(reader.read_f32()?),
        ScalarKind::F64 => Scalar::F64(reader.read_f64()?),
        ScalarKind::Decimal => Scalar::Decimal(Decimal::deserialize(reader.read_array::<16>()?)),
        ScalarKind::Char => Scalar::Char(read_char(reader)?),
    };
    Ok(scalar)
}

/// Writes a homogeneous scalar collection (array or list layout).
///
/// Every element must carry the declared kind; a stray element fails with a
/// value mismatch before it reaches the wire.
pub fn write_scalar_collection(
    writer: &mut ByteWriter,
    kind: ScalarKind,
    elements: &[Scalar],
) -> CodecResult<()> {
    write_collection(writer, elements, |writer, element| {
        if element.kind() != kind {
            return Err(CodecError::Schema(schema::SchemaError::ValueMismatch {
                expected: kind.name().to_owned(),
                found: element.kind().name().to_owned(),
            }));
        }
        write_scalar(writer, element);
        Ok(())
    })
}

/// Reads a scalar collection of the given element kind.
pub fn read_scalar_collection(
    reader: &mut ByteReader<'_>,
    kind: ScalarKind,
    limits: &CodecLimits,
) -> CodecResult<Vec<Scalar>> {
    read_collection(
        reader,
        kind.min_width(),
        limits.max_collection_elems,
        |reader| read_scalar(reader, kind),
    )
}

fn read_char(reader: &mut ByteReader<'_>) -> CodecResult<char> {
    let first = reader.read_u8()?;
    let len = utf8_len(first).ok_or(CodecError::InvalidChar { first_byte: first })?;

    let mut buf = [0u8; 4];
    buf[0] = first;
    for slot in buf.iter_mut().take(len).skip(1) {
        *slot = reader.read_u8()?;
    }

    let text = std::str::from_utf8(&buf[..len])
        .map_err(|_| CodecError::InvalidChar { first_byte: first })?;
    // len bytes decode to exactly one scalar by construction.
    text.chars()
        .next()
        .ok_or(CodecError::InvalidChar { first_byte: first })
}

const fn utf8_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}
