//! Schema-driven serialization: positional field dispatch.
//!
//! The format carries no field tags or names, only a positional sequence of
//! typed values. Schema identity between the writer and reader is therefore
//! a hard precondition: decoding with a reordered but byte-compatible schema
//! silently misinterprets bytes rather than failing. That is a deliberate
//! format trade-off (compactness over self-description) and a documented
//! caller obligation.

use schema::{FieldDescriptor, Schema, SchemaError, SchemaMode, Value, WireCategory};
use stream::{ByteReader, ByteWriter};

use crate::error::{CodecError, CodecResult};
use crate::image::{read_image, read_image_list, write_image, write_image_list};
use crate::limits::CodecLimits;
use crate::scalar::{read_scalar, read_scalar_collection, write_scalar, write_scalar_collection};
use crate::text::{read_text, read_text_list, write_text, write_text_list};

/// Serializes a value against its schema into a fresh byte buffer.
pub fn serialize<T>(value: &T, schema: &Schema<T>) -> CodecResult<Vec<u8>> {
    let mut writer = ByteWriter::new();
    serialize_into(&mut writer, value, schema)?;
    Ok(writer.finish())
}

/// Serializes a value against its schema into an existing writer.
///
/// Whole-value schemas encode the single root value; field schemas encode
/// each declared field in declaration order. Any error aborts the call with
/// no partial recovery.
pub fn serialize_into<T>(
    writer: &mut ByteWriter,
    value: &T,
    schema: &Schema<T>,
) -> CodecResult<()> {
    match schema.mode() {
        SchemaMode::WholeValue(root) => encode_field(writer, root, value),
        SchemaMode::Fields(fields) => {
            for field in fields {
                encode_field(writer, field, value)?;
            }
            Ok(())
        }
    }
}

/// Deserializes a value of the schema's shape from a byte buffer.
///
/// `factory` supplies a fresh, default-initialized value; decoded fields are
/// assigned into it in declaration order. Any error aborts the whole decode
/// and leaves no usable partial result.
pub fn deserialize<T>(
    bytes: &[u8],
    schema: &Schema<T>,
    factory: impl FnOnce() -> T,
    limits: &CodecLimits,
) -> CodecResult<T> {
    let mut reader = ByteReader::new(bytes);
    deserialize_from(&mut reader, schema, factory, limits)
}

/// Deserializes a value from an existing reader.
pub fn deserialize_from<T>(
    reader: &mut ByteReader<'_>,
    schema: &Schema<T>,
    factory: impl FnOnce() -> T,
    limits: &CodecLimits,
) -> CodecResult<T> {
    let mut value = factory();
    match schema.mode() {
        SchemaMode::WholeValue(root) => {
            let decoded = decode_value(reader, root.category(), limits)?;
            root.set(&mut value, decoded)?;
        }
        SchemaMode::Fields(fields) => {
            for field in fields {
                let decoded = decode_value(reader, field.category(), limits)?;
                field.set(&mut value, decoded)?;
            }
        }
    }
    Ok(value)
}

/// Encodes one dynamically-typed value per its wire category.
pub fn encode_value(
    writer: &mut ByteWriter,
    category: WireCategory,
    value: &Value,
) -> CodecResult<()> {
    match (category, value) {
        (WireCategory::Scalar(kind), Value::Scalar(scalar)) if scalar.kind() == kind => {
            write_scalar(writer, scalar);
            Ok(())
        }
        (
            WireCategory::ScalarArray(kind),
            Value::ScalarArray(value_kind, elements),
        )
        | (
            WireCategory::ScalarList(kind),
            Value::ScalarList(value_kind, elements),
        ) if *value_kind == kind => write_scalar_collection(writer, kind, elements),
        (WireCategory::Text, Value::Text(text)) => write_text(writer, text),
        (WireCategory::TextList, Value::TextList(items)) => write_text_list(writer, items),
        (WireCategory::Image, Value::Image(image)) => write_image(writer, image),
        (WireCategory::ImageList, Value::ImageList(images)) => write_image_list(writer, images),
        (category, value) => Err(CodecError::Schema(SchemaError::ValueMismatch {
            expected: category.to_string(),
            found: value.category().to_string(),
        })),
    }
}

/// Decodes one dynamically-typed value per its wire category.
pub fn decode_value(
    reader: &mut ByteReader<'_>,
    category: WireCategory,
    limits: &CodecLimits,
) -> CodecResult<Value> {
    let value = match category {
        WireCategory::Scalar(kind) => Value::Scalar(read_scalar(reader, kind)?),
        WireCategory::ScalarArray(kind) => {
            Value::ScalarArray(kind, read_scalar_collection(reader, kind, limits)?)
        }
        WireCategory::ScalarList(kind) => {
            Value::ScalarList(kind, read_scalar_collection(reader, kind, limits)?)
        }
        WireCategory::Text => Value::Text(read_text(reader, limits)?),
        WireCategory::TextList => Value::TextList(read_text_list(reader, limits)?),
        WireCategory::Image => Value::Image(read_image(reader, limits)?),
        WireCategory::ImageList => Value::ImageList(read_image_list(reader, limits)?),
    };
    Ok(value)
}

fn encode_field<T>(
    writer: &mut ByteWriter,
    field: &FieldDescriptor<T>,
    value: &T,
) -> CodecResult<()> {
    let fetched = field.get(value);
    encode_value(writer, field.category(), &fetched)
}
