//! Value shapes, wire categories, and field tables for the binfield codec.
//!
//! This crate defines how a value's shape is described for serialization:
//! - Scalar kinds with fixed binary widths
//! - Declared type shapes and their resolution into wire categories
//! - The dynamically-typed [`Value`] moved in and out of fields
//! - Field descriptors and the ordered, immutable [`Schema`] table
//!
//! # Design Principles
//!
//! - **Explicit shapes** - No reflection on arbitrary Rust types; callers
//!   declare fields and accessors once, at schema-build time.
//! - **Closed categories** - Wire dispatch is an exhaustively matched enum,
//!   not an open-ended overload set.
//! - **Build-time resolution** - Category resolution happens once per shape;
//!   serialize/deserialize calls never re-inspect types.

mod error;
mod field;
mod kind;
mod schema;
mod shape;
mod value;

pub use error::{SchemaError, SchemaResult};
pub use field::{FieldDescriptor, FieldGetter, FieldSetter};
pub use kind::ScalarKind;
pub use schema::{Schema, SchemaBuilder, SchemaMode};
pub use shape::{resolve, TypeShape, WireCategory};
pub use value::{ImageData, Scalar, Value};

pub use rust_decimal::Decimal;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        // Verify all expected items are exported
        let _ = ScalarKind::Bool;
        let _ = TypeShape::text();
        let _ = WireCategory::Text;
        let _ = Value::Text(String::new());
        let _: SchemaResult<()> = Ok(());
    }

    #[test]
    fn resolve_basic_usage() {
        let category = resolve(&TypeShape::scalar(ScalarKind::I32)).unwrap();
        assert_eq!(category, WireCategory::Scalar(ScalarKind::I32));
    }

    #[test]
    fn decimal_reexport_is_sixteen_bytes() {
        let value = Decimal::new(12345, 2);
        assert_eq!(value.serialize().len(), 16);
    }
}
