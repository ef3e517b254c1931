//! Raster-image payload encoding.
//!
//! An image is written as `i32 width, i32 height, i32 byte_count` followed
//! by the raster compressed as JPEG at quality [`JPEG_QUALITY`]. The
//! compressed bytes are an opaque blob to this codec; compression is lossy,
//! so decoded pixel content is not guaranteed to match the pre-encode
//! raster. Only the dimensions and the compressed bytes themselves are
//! stable.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageFormat};
use schema::ImageData;
use stream::{ByteReader, ByteWriter};

use crate::collection::{read_collection, read_count, write_collection, write_count};
use crate::error::{CodecError, CodecResult, LimitKind};
use crate::limits::CodecLimits;

/// Fixed compressor quality. Part of the wire contract, not a tunable:
/// changing it would break round-trip compatibility of compressed bytes
/// across implementations.
pub const JPEG_QUALITY: u8 = 100;

/// Minimum encoded width of an image element (its three count prefixes).
pub(crate) const IMAGE_MIN_WIDTH: usize = 12;

/// Writes one image payload: dimensions, then the compressed blob.
pub fn write_image(writer: &mut ByteWriter, image: &ImageData) -> CodecResult<()> {
    let width = i32::try_from(image.width()).map_err(|_| dims_error(image))?;
    let height = i32::try_from(image.height()).map_err(|_| dims_error(image))?;
    writer.write_i32(width);
    writer.write_i32(height);

    let mut compressed = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut compressed, JPEG_QUALITY);
    encoder
        .encode(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|err| CodecError::ImageEncode {
            reason: err.to_string(),
        })?;

    write_count(writer, compressed.len())?;
    writer.write_bytes(&compressed);
    Ok(())
}

/// Reads one image payload, re-materializing the raster from the blob.
///
/// The declared dimensions are cross-checked against the decompressor's own
/// report; a disagreement means the blob does not describe the raster the
/// stream claims, and fails with [`CodecError::ImageDecode`].
pub fn read_image(reader: &mut ByteReader<'_>, limits: &CodecLimits) -> CodecResult<ImageData> {
    let width = reader.read_i32()?;
    let height = reader.read_i32()?;
    if width <= 0 || height <= 0 {
        return Err(CodecError::InvalidImageDims {
            width: width.into(),
            height: height.into(),
        });
    }

    let len = read_count(reader, 1, limits.max_image_bytes, LimitKind::ImageBytes)?;
    let bytes = reader.read_bytes(len)?;

    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Jpeg).map_err(|err| {
        CodecError::ImageDecode {
            reason: err.to_string(),
        }
    })?;
    let raster = decoded.to_rgb8();
    let (decoded_width, decoded_height) = raster.dimensions();
    if (decoded_width, decoded_height) != (width as u32, height as u32) {
        return Err(CodecError::ImageDecode {
            reason: format!(
                "declared {width}x{height} but blob decodes to {decoded_width}x{decoded_height}"
            ),
        });
    }

    ImageData::new(decoded_width, decoded_height, raster.into_raw()).map_err(CodecError::Schema)
}

/// Writes an ordered list of image payloads.
pub fn write_image_list(writer: &mut ByteWriter, images: &[ImageData]) -> CodecResult<()> {
    write_collection(writer, images, |writer, image| write_image(writer, image))
}

/// Reads an ordered list of image payloads.
pub fn read_image_list(
    reader: &mut ByteReader<'_>,
    limits: &CodecLimits,
) -> CodecResult<Vec<ImageData>> {
    read_collection(
        reader,
        IMAGE_MIN_WIDTH,
        limits.max_collection_elems,
        |reader| read_image(reader, limits),
    )
}

fn dims_error(image: &ImageData) -> CodecError {
    CodecError::InvalidImageDims {
        width: i64::from(image.width()),
        height: i64::from(image.height()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> ImageData {
        let pixels = (0..width * height)
            .flat_map(|i| {
                if i % 2 == 0 {
                    [255, 255, 255]
                } else {
                    [0, 0, 0]
                }
            })
            .collect();
        ImageData::new(width, height, pixels).unwrap()
    }

    #[test]
    fn roundtrip_preserves_dimensions() {
        let image = checker(2, 2);
        let mut writer = ByteWriter::new();
        write_image(&mut writer, &image).unwrap();
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let decoded = read_image(&mut reader, &CodecLimits::for_testing()).unwrap();
        assert!(reader.is_empty());
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        // Pixel content may differ from the source raster: JPEG is lossy
        // even at quality 100. Only the buffer shape is guaranteed.
        assert_eq!(decoded.pixels().len(), image.pixels().len());
    }

    #[test]
    fn compressed_bytes_are_stable() {
        // Re-encoding the same raster must produce identical bytes; the
        // quality constant is part of the wire contract.
        let image = checker(4, 4);
        let mut first = ByteWriter::new();
        write_image(&mut first, &image).unwrap();
        let mut second = ByteWriter::new();
        write_image(&mut second, &image).unwrap();
        assert_eq!(first.finish(), second.finish());
    }

    #[test]
    fn header_layout_is_three_counts() {
        let image = checker(2, 2);
        let mut writer = ByteWriter::new();
        write_image(&mut writer, &image).unwrap();
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        assert_eq!(reader.read_i32().unwrap(), 2);
        assert_eq!(reader.read_i32().unwrap(), 2);
        let blob_len = reader.read_i32().unwrap();
        assert!(blob_len > 0);
        assert_eq!(reader.remaining(), blob_len as usize);
    }

    #[test]
    fn nonpositive_dimensions_rejected() {
        let mut writer = ByteWriter::new();
        writer.write_i32(-2);
        writer.write_i32(2);
        writer.write_i32(0);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = read_image(&mut reader, &CodecLimits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidImageDims {
                width: -2,
                height: 2,
            }
        );
    }

    #[test]
    fn garbage_blob_is_decode_error() {
        let mut writer = ByteWriter::new();
        writer.write_i32(2);
        writer.write_i32(2);
        writer.write_i32(4);
        writer.write_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = read_image(&mut reader, &CodecLimits::for_testing()).unwrap_err();
        assert!(matches!(err, CodecError::ImageDecode { .. }));
    }

    #[test]
    fn dimension_mismatch_is_decode_error() {
        // Encode a real 4x4 image, then forge the declared dimensions.
        let image = checker(4, 4);
        let mut writer = ByteWriter::new();
        write_image(&mut writer, &image).unwrap();
        let mut bytes = writer.finish();
        bytes[0] = 2; // width 4 -> 2

        let mut reader = ByteReader::new(&bytes);
        let err = read_image(&mut reader, &CodecLimits::for_testing()).unwrap_err();
        assert!(matches!(err, CodecError::ImageDecode { .. }));
    }

    #[test]
    fn image_list_roundtrip() {
        let images = vec![checker(2, 2), checker(4, 2)];
        let mut writer = ByteWriter::new();
        write_image_list(&mut writer, &images).unwrap();
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let decoded = read_image_list(&mut reader, &CodecLimits::for_testing()).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].width(), 2);
        assert_eq!(decoded[1].width(), 4);
        assert_eq!(decoded[1].height(), 2);
    }

    #[test]
    fn empty_image_list_is_exactly_four_bytes() {
        let mut writer = ByteWriter::new();
        write_image_list(&mut writer, &[]).unwrap();
        assert_eq!(writer.finish(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn truncated_blob_is_corrupt_length() {
        let mut writer = ByteWriter::new();
        writer.write_i32(2);
        writer.write_i32(2);
        writer.write_i32(1000);
        writer.write_bytes(&[0x00; 8]);
        let bytes = writer.finish();

        let mut reader = ByteReader::new(&bytes);
        let err = read_image(&mut reader, &CodecLimits::for_testing()).unwrap_err();
        assert_eq!(
            err,
            CodecError::CorruptLength {
                declared: 1000,
                available: 8,
            }
        );
    }
}
