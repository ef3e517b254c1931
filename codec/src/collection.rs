//! Length-prefixed collection encoding, generic over an element codec.
//!
//! Every collection begins with a 4-byte signed little-endian count; a zero
//! count encodes no further bytes. Arrays and lists share this codec; the
//! container materialized on read is the caller's concern.

use stream::{ByteReader, ByteWriter};

use crate::error::{CodecError, CodecResult, LimitKind};

/// Writes a 4-byte signed count.
///
/// Fails with [`CodecError::LengthOverflow`] if `len` exceeds `i32::MAX`.
pub fn write_count(writer: &mut ByteWriter, len: usize) -> CodecResult<()> {
    let count = i32::try_from(len).map_err(|_| CodecError::LengthOverflow { length: len })?;
    writer.write_i32(count);
    Ok(())
}

/// Reads and sanity-checks a 4-byte signed count.
///
/// A negative count, or one whose elements could not possibly fit the
/// remaining stream bytes (`count * min_element_width > remaining`), fails
/// with [`CodecError::CorruptLength`] before anything is allocated. A
/// plausible count above `max` fails with [`CodecError::LimitsExceeded`].
pub fn read_count(
    reader: &mut ByteReader<'_>,
    min_element_width: usize,
    max: usize,
    kind: LimitKind,
) -> CodecResult<usize> {
    let declared = reader.read_i32()?;
    let available = reader.remaining();
    if declared < 0 {
        return Err(CodecError::CorruptLength {
            declared,
            available,
        });
    }

    let count = declared as usize;
    let plausible = count
        .checked_mul(min_element_width)
        .is_some_and(|needed| needed <= available);
    if !plausible {
        return Err(CodecError::CorruptLength {
            declared,
            available,
        });
    }
    if count > max {
        return Err(CodecError::LimitsExceeded {
            kind,
            limit: max,
            actual: count,
        });
    }
    Ok(count)
}

/// Writes a count followed by each element in iteration order.
pub fn write_collection<T>(
    writer: &mut ByteWriter,
    elements: &[T],
    mut element_writer: impl FnMut(&mut ByteWriter, &T) -> CodecResult<()>,
) -> CodecResult<()> {
    write_count(writer, elements.len())?;
    for element in elements {
        element_writer(writer, element)?;
    }
    Ok(())
}

/// Reads a count, then invokes `element_reader` exactly that many times.
///
/// Elements are returned in read order; order is semantically significant.
pub fn read_collection<T>(
    reader: &mut ByteReader<'_>,
    min_element_width: usize,
    max_elements: usize,
    mut element_reader: impl FnMut(&mut ByteReader<'_>) -> CodecResult<T>,
) -> CodecResult<Vec<T>> {
    let count = read_count(
        reader,
        min_element_width,
        max_elements,
        LimitKind::CollectionElems,
    )?;
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        elements.push(element_reader(reader)?);
    }
    Ok(elements)
}
