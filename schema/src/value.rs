//! The dynamically-typed values moved in and out of fields.

use rust_decimal::Decimal;

use crate::error::{SchemaError, SchemaResult};
use crate::kind::ScalarKind;
use crate::shape::WireCategory;

/// A single scalar value, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
}

impl Scalar {
    /// The kind tag of this scalar.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::Bool(_) => ScalarKind::Bool,
            Self::I8(_) => ScalarKind::I8,
            Self::U8(_) => ScalarKind::U8,
            Self::I16(_) => ScalarKind::I16,
            Self::U16(_) => ScalarKind::U16,
            Self::I32(_) => ScalarKind::I32,
            Self::U32(_) => ScalarKind::U32,
            Self::I64(_) => ScalarKind::I64,
            Self::U64(_) => ScalarKind::U64,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Char(_) => ScalarKind::Char,
        }
    }
}

macro_rules! scalar_conversions {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Scalar> for $ty {
                type Error = SchemaError;

                fn try_from(scalar: Scalar) -> SchemaResult<Self> {
                    match scalar {
                        Scalar::$variant(value) => Ok(value),
                        other => Err(SchemaError::ValueMismatch {
                            expected: ScalarKind::$variant.name().to_owned(),
                            found: other.kind().name().to_owned(),
                        }),
                    }
                }
            }
        )+
    };
}

scalar_conversions! {
    Bool => bool,
    I8 => i8,
    U8 => u8,
    I16 => i16,
    U16 => u16,
    I32 => i32,
    U32 => u32,
    I64 => i64,
    U64 => u64,
    F32 => f32,
    F64 => f64,
    Decimal => Decimal,
    Char => char,
}

/// An in-memory raster: RGB8 pixels, row-major.
///
/// The pixel buffer length must equal `width * height * 3`; construction
/// validates this. Identity is by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Creates a raster after validating dimensions against the pixel buffer.
    ///
    /// Both dimensions must be positive.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> SchemaResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3));
        if width == 0 || height == 0 || expected != Some(pixels.len()) {
            return Err(SchemaError::InvalidRaster {
                width,
                height,
                pixel_len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pixel width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGB8 pixel bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the raster and returns its pixel buffer.
    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// The dynamically-typed value moved in or out of a field.
///
/// The codec layer treats this opaquely except to route it to the matching
/// codec by [`WireCategory`]. Scalar collections carry their declared
/// element kind explicitly so that empty collections still classify.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    ScalarArray(ScalarKind, Vec<Scalar>),
    ScalarList(ScalarKind, Vec<Scalar>),
    Text(String),
    TextList(Vec<String>),
    Image(ImageData),
    ImageList(Vec<ImageData>),
}

impl Value {
    /// The wire category this value routes to. Total.
    #[must_use]
    pub fn category(&self) -> WireCategory {
        match self {
            Self::Scalar(scalar) => WireCategory::Scalar(scalar.kind()),
            Self::ScalarArray(kind, _) => WireCategory::ScalarArray(*kind),
            Self::ScalarList(kind, _) => WireCategory::ScalarList(*kind),
            Self::Text(_) => WireCategory::Text,
            Self::TextList(_) => WireCategory::TextList,
            Self::Image(_) => WireCategory::Image,
            Self::ImageList(_) => WireCategory::ImageList,
        }
    }

    /// A static diagnostic name for the value's shape family.
    #[must_use]
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::ScalarArray(..) => "scalar array",
            Self::ScalarList(..) => "scalar list",
            Self::Text(_) => "text",
            Self::TextList(_) => "text list",
            Self::Image(_) => "image",
            Self::ImageList(_) => "image list",
        }
    }

    /// Unwraps a scalar value.
    pub fn into_scalar(self) -> SchemaResult<Scalar> {
        match self {
            Self::Scalar(scalar) => Ok(scalar),
            other => Err(mismatch("scalar", &other)),
        }
    }

    /// Unwraps a scalar array or list into its elements.
    pub fn into_scalars(self) -> SchemaResult<Vec<Scalar>> {
        match self {
            Self::ScalarArray(_, elements) | Self::ScalarList(_, elements) => Ok(elements),
            other => Err(mismatch("scalar collection", &other)),
        }
    }

    /// Unwraps a text value.
    pub fn into_text(self) -> SchemaResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(mismatch("text", &other)),
        }
    }

    /// Unwraps a text list.
    pub fn into_text_list(self) -> SchemaResult<Vec<String>> {
        match self {
            Self::TextList(items) => Ok(items),
            other => Err(mismatch("text list", &other)),
        }
    }

    /// Unwraps an image payload.
    pub fn into_image(self) -> SchemaResult<ImageData> {
        match self {
            Self::Image(image) => Ok(image),
            other => Err(mismatch("image", &other)),
        }
    }

    /// Unwraps an image list.
    pub fn into_image_list(self) -> SchemaResult<Vec<ImageData>> {
        match self {
            Self::ImageList(images) => Ok(images),
            other => Err(mismatch("image list", &other)),
        }
    }
}

fn mismatch(expected: &'static str, found: &Value) -> SchemaError {
    SchemaError::ValueMismatch {
        expected: expected.to_owned(),
        found: found.shape_name().to_owned(),
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<ImageData> for Value {
    fn from(image: ImageData) -> Self {
        Self::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kind_tags() {
        assert_eq!(Scalar::Bool(true).kind(), ScalarKind::Bool);
        assert_eq!(Scalar::F64(0.0).kind(), ScalarKind::F64);
        assert_eq!(Scalar::Char('x').kind(), ScalarKind::Char);
        assert_eq!(Scalar::Decimal(Decimal::ZERO).kind(), ScalarKind::Decimal);
    }

    #[test]
    fn scalar_conversion_roundtrip() {
        let scalar: Scalar = 42u32.into();
        assert_eq!(u32::try_from(scalar).unwrap(), 42);
    }

    #[test]
    fn scalar_conversion_mismatch() {
        let scalar: Scalar = true.into();
        let err = i64::try_from(scalar).unwrap_err();
        assert_eq!(
            err,
            SchemaError::ValueMismatch {
                expected: "i64".to_owned(),
                found: "bool".to_owned(),
            }
        );
    }

    #[test]
    fn value_categories() {
        assert_eq!(
            Value::Scalar(Scalar::I16(1)).category(),
            WireCategory::Scalar(ScalarKind::I16)
        );
        assert_eq!(
            Value::ScalarList(ScalarKind::U8, Vec::new()).category(),
            WireCategory::ScalarList(ScalarKind::U8)
        );
        assert_eq!(Value::Text(String::new()).category(), WireCategory::Text);
        assert_eq!(Value::ImageList(Vec::new()).category(), WireCategory::ImageList);
    }

    #[test]
    fn empty_scalar_list_still_classifies() {
        // The declared element kind survives even with no elements.
        let value = Value::ScalarArray(ScalarKind::F32, Vec::new());
        assert_eq!(value.category(), WireCategory::ScalarArray(ScalarKind::F32));
    }

    #[test]
    fn value_unwrap_helpers() {
        assert_eq!(Value::from("hi").into_text().unwrap(), "hi");
        let err = Value::from("hi").into_image().unwrap_err();
        assert_eq!(
            err,
            SchemaError::ValueMismatch {
                expected: "image".to_owned(),
                found: "text".to_owned(),
            }
        );
    }

    #[test]
    fn image_data_validates_buffer() {
        let image = ImageData::new(2, 2, vec![0; 12]).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.pixels().len(), 12);

        let err = ImageData::new(2, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRaster { pixel_len: 5, .. }));
    }

    #[test]
    fn image_data_rejects_zero_dimensions() {
        let err = ImageData::new(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRaster { width: 0, .. }));
    }
}
