//! Declared type shapes and their resolution into wire categories.

use std::fmt;

use crate::error::{SchemaError, SchemaResult};
use crate::kind::ScalarKind;

/// The closed classification of a field's type that determines which codec
/// handles it.
///
/// Exactly one category applies to any supported shape. `ScalarArray` and
/// `ScalarList` share one wire layout; the distinction is only which
/// container the caller materializes on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireCategory {
    Scalar(ScalarKind),
    ScalarArray(ScalarKind),
    ScalarList(ScalarKind),
    Text,
    TextList,
    Image,
    ImageList,
}

impl fmt::Display for WireCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "scalar<{kind}>"),
            Self::ScalarArray(kind) => write!(f, "array<{kind}>"),
            Self::ScalarList(kind) => write!(f, "list<{kind}>"),
            Self::Text => write!(f, "text"),
            Self::TextList => write!(f, "list<text>"),
            Self::Image => write!(f, "image"),
            Self::ImageList => write!(f, "list<image>"),
        }
    }
}

/// A declared type shape, as supplied to the schema builder.
///
/// This is the explicit stand-in for runtime type introspection: the caller
/// states the field's shape once, and [`resolve`] classifies it. Shapes
/// outside the supported universe are representable (`Named`, nested
/// collections) so that resolution can reject them by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// One of the fixed-width scalar kinds.
    Scalar(ScalarKind),
    /// A fixed array of the inner shape.
    Array(Box<TypeShape>),
    /// A growable ordered list of the inner shape.
    List(Box<TypeShape>),
    /// UTF-8 text.
    Text,
    /// A raster-image payload.
    Image,
    /// Any declared type outside the supported universe.
    Named(String),
}

impl TypeShape {
    /// A scalar shape.
    #[must_use]
    pub const fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }

    /// A fixed array of the inner shape.
    #[must_use]
    pub fn array(inner: Self) -> Self {
        Self::Array(Box::new(inner))
    }

    /// A growable ordered list of the inner shape.
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    /// The UTF-8 text shape.
    #[must_use]
    pub const fn text() -> Self {
        Self::Text
    }

    /// The raster-image payload shape.
    #[must_use]
    pub const fn image() -> Self {
        Self::Image
    }

    /// An unsupported declared type, carried by name for diagnostics.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Renders a Rust-like name for diagnostics.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Scalar(kind) => kind.name().to_owned(),
            Self::Array(inner) => format!("[{}]", inner.name()),
            Self::List(inner) => format!("Vec<{}>", inner.name()),
            Self::Text => "String".to_owned(),
            Self::Image => "Image".to_owned(),
            Self::Named(name) => name.clone(),
        }
    }
}

/// Classifies a declared type shape into its wire category.
///
/// Total over the supported universe: the scalar kinds, arrays of scalars,
/// text, images, and lists of {scalar, text, image}. Anything else fails
/// with [`SchemaError::UnsupportedType`] carrying the rendered type name.
/// Scalar element shapes are checked before the generic list categories.
pub fn resolve(shape: &TypeShape) -> SchemaResult<WireCategory> {
    match shape {
        TypeShape::Scalar(kind) => Ok(WireCategory::Scalar(*kind)),
        TypeShape::Text => Ok(WireCategory::Text),
        TypeShape::Image => Ok(WireCategory::Image),
        TypeShape::Array(inner) => match inner.as_ref() {
            TypeShape::Scalar(kind) => Ok(WireCategory::ScalarArray(*kind)),
            _ => Err(unsupported(shape)),
        },
        TypeShape::List(inner) => match inner.as_ref() {
            TypeShape::Scalar(kind) => Ok(WireCategory::ScalarList(*kind)),
            TypeShape::Text => Ok(WireCategory::TextList),
            TypeShape::Image => Ok(WireCategory::ImageList),
            _ => Err(unsupported(shape)),
        },
        TypeShape::Named(_) => Err(unsupported(shape)),
    }
}

fn unsupported(shape: &TypeShape) -> SchemaError {
    SchemaError::UnsupportedType {
        type_name: shape.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_every_scalar_kind() {
        for kind in ScalarKind::ALL {
            let category = resolve(&TypeShape::scalar(kind)).unwrap();
            assert_eq!(category, WireCategory::Scalar(kind));
        }
    }

    #[test]
    fn resolve_scalar_array_and_list() {
        let array = TypeShape::array(TypeShape::scalar(ScalarKind::F64));
        assert_eq!(
            resolve(&array).unwrap(),
            WireCategory::ScalarArray(ScalarKind::F64)
        );

        let list = TypeShape::list(TypeShape::scalar(ScalarKind::U8));
        assert_eq!(
            resolve(&list).unwrap(),
            WireCategory::ScalarList(ScalarKind::U8)
        );
    }

    #[test]
    fn resolve_text_and_image_forms() {
        assert_eq!(resolve(&TypeShape::text()).unwrap(), WireCategory::Text);
        assert_eq!(
            resolve(&TypeShape::list(TypeShape::text())).unwrap(),
            WireCategory::TextList
        );
        assert_eq!(resolve(&TypeShape::image()).unwrap(), WireCategory::Image);
        assert_eq!(
            resolve(&TypeShape::list(TypeShape::image())).unwrap(),
            WireCategory::ImageList
        );
    }

    #[test]
    fn nested_list_is_unsupported() {
        let nested = TypeShape::list(TypeShape::list(TypeShape::scalar(ScalarKind::I32)));
        let err = resolve(&nested).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnsupportedType {
                type_name: "Vec<Vec<i32>>".to_owned(),
            }
        );
    }

    #[test]
    fn array_of_text_is_unsupported() {
        let shape = TypeShape::array(TypeShape::text());
        let err = resolve(&shape).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnsupportedType {
                type_name: "[String]".to_owned(),
            }
        );
    }

    #[test]
    fn named_type_is_unsupported() {
        let err = resolve(&TypeShape::named("HashMap<String, i32>")).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnsupportedType { type_name } if type_name == "HashMap<String, i32>"
        ));
    }

    #[test]
    fn category_display() {
        assert_eq!(
            WireCategory::Scalar(ScalarKind::I32).to_string(),
            "scalar<i32>"
        );
        assert_eq!(
            WireCategory::ScalarArray(ScalarKind::Bool).to_string(),
            "array<bool>"
        );
        assert_eq!(WireCategory::TextList.to_string(), "list<text>");
        assert_eq!(WireCategory::ImageList.to_string(), "list<image>");
    }

    #[test]
    fn shape_names_render_rust_like() {
        assert_eq!(
            TypeShape::array(TypeShape::scalar(ScalarKind::U8)).name(),
            "[u8]"
        );
        assert_eq!(TypeShape::list(TypeShape::image()).name(), "Vec<Image>");
    }
}
