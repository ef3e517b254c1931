//! Reference value shape and schema for binfield demos and tools.

use codec::{deserialize, serialize, CodecLimits, CodecResult};
use schema::{Decimal, ImageData, Scalar, ScalarKind, Schema, TypeShape, Value};

/// Thumbnail edge length used by [`sample_page`].
pub const THUMB_SIZE: u32 = 8;

/// A cached page entry: the reference shape exercising every field family
/// the codec supports.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedPage {
    pub title: String,
    pub tags: Vec<String>,
    pub visits: u32,
    pub rating: Decimal,
    pub thumbnail: ImageData,
}

impl CachedPage {
    /// Fresh default-initialized decode target.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            tags: Vec::new(),
            visits: 0,
            rating: Decimal::ZERO,
            thumbnail: solid_thumbnail(1, [0, 0, 0]),
        }
    }

    /// Serializes this page with the reference schema.
    pub fn to_bytes(&self) -> CodecResult<Vec<u8>> {
        serialize(self, &cached_page_schema())
    }

    /// Deserializes a page with the reference schema and default limits.
    pub fn from_bytes(bytes: &[u8]) -> CodecResult<Self> {
        deserialize(
            bytes,
            &cached_page_schema(),
            Self::empty,
            &CodecLimits::default(),
        )
    }
}

/// Builds the reference schema. Field order is part of the wire contract:
/// readers must use the identical schema.
pub fn cached_page_schema() -> Schema<CachedPage> {
    Schema::<CachedPage>::builder()
        .field(
            "title",
            TypeShape::text(),
            |p| Value::Text(p.title.clone()),
            |p, v| {
                p.title = v.into_text()?;
                Ok(())
            },
        )
        .field(
            "tags",
            TypeShape::list(TypeShape::text()),
            |p| Value::TextList(p.tags.clone()),
            |p, v| {
                p.tags = v.into_text_list()?;
                Ok(())
            },
        )
        .field(
            "visits",
            TypeShape::scalar(ScalarKind::U32),
            |p| Value::Scalar(Scalar::U32(p.visits)),
            |p, v| {
                p.visits = v.into_scalar()?.try_into()?;
                Ok(())
            },
        )
        .field(
            "rating",
            TypeShape::scalar(ScalarKind::Decimal),
            |p| Value::Scalar(Scalar::Decimal(p.rating)),
            |p, v| {
                p.rating = v.into_scalar()?.try_into()?;
                Ok(())
            },
        )
        .field(
            "thumbnail",
            TypeShape::image(),
            |p| Value::Image(p.thumbnail.clone()),
            |p, v| {
                p.thumbnail = v.into_image()?;
                Ok(())
            },
        )
        .build()
        .expect("reference schema must be valid")
}

/// A square raster filled with one RGB color.
#[must_use]
pub fn solid_thumbnail(size: u32, rgb: [u8; 3]) -> ImageData {
    let pixels = (0..size * size).flat_map(|_| rgb).collect();
    ImageData::new(size, size, pixels).expect("solid raster dimensions are consistent")
}

/// A populated sample page for demos and smoke tests.
#[must_use]
pub fn sample_page() -> CachedPage {
    CachedPage {
        title: "Cache".to_owned(),
        tags: ["Hello", "World", "From", "Codec"]
            .into_iter()
            .map(str::to_owned)
            .collect(),
        visits: 42,
        rating: Decimal::new(475, 2),
        thumbnail: solid_thumbnail(THUMB_SIZE, [180, 40, 40]),
    }
}
