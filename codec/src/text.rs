//! UTF-8 text encoding: a 4-byte byte count followed by the bytes.

use stream::{ByteReader, ByteWriter};

use crate::collection::{read_collection, read_count, write_collection, write_count};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;

/// Minimum encoded width of a text element (its count prefix).
pub(crate) const TEXT_MIN_WIDTH: usize = 4;

/// Writes a length-prefixed UTF-8 byte run.
pub fn write_text(writer: &mut ByteWriter, text: &str) -> CodecResult<()> {
    write_count(writer, text.len())?;
    writer.write_bytes(text.as_bytes());
    Ok(())
}

/// Reads a length-prefixed UTF-8 byte run.
///
/// The byte count is sanity-checked against the remaining stream before the
/// bytes are touched; bytes that are not valid UTF-8 fail with
/// [`CodecError::InvalidText`].
pub fn read_text(reader: &mut ByteReader<'_>, limits: &CodecLimits) -> CodecResult<String> {
    let len = read_count(reader, 1, limits.max_text_bytes, LimitKind::TextBytes)?;
    let bytes = reader.read_bytes(len)?;
    String::from_utf8(bytes.to_vec()).map_err(|err| CodecError::InvalidText {
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}

/// Writes an ordered list of text values.
pub fn write_text_list(writer: &mut ByteWriter, items: &[String]) -> CodecResult<()> {
    write_collection(writer, items, |writer, item| write_text(writer, item))
}

/// Reads an ordered list of text values.
pub fn read_text_list(
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<String>> {
    read_collection(
        reader,
        TEXT_MIN_WIDTH,
        limits.max_collection_elems,
        |reader| read_text(reader, limits),
    )
}
