//! The immutable, ordered field table for one value shape.

use std::collections::HashSet;
use std::fmt;

use crate::error::{SchemaError, SchemaResult};
use crate::field::{FieldDescriptor, FieldGetter, FieldSetter};
use crate::shape::{resolve, TypeShape};

/// The immutable, ordered list of serializable fields for one value shape.
///
/// Built once when a serializer is set up for that shape; never mutated.
/// Descriptors hold only fn pointers, so a schema is `Send + Sync` and safe
/// to share read-only across concurrent serialize/deserialize calls,
/// provided each call supplies its own cursor and target value. Category
/// resolution is paid here, never per call.
///
/// A schema is either a field table (declaration order preserved) or a
/// whole-value schema: the value itself is a single unnamed field whose
/// category is resolved directly from its own shape.
pub struct Schema<T> {
    mode: Mode<T>,
}

// Manual impls to avoid `T: Clone`/`T: Debug` bounds; descriptors hold only
// fn pointers.
impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode.clone(),
        }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mode {
            Mode::Fields(fields) => f.debug_struct("Schema").field("fields", fields).finish(),
            Mode::WholeValue(root) => f.debug_struct("Schema").field("root", root).finish(),
        }
    }
}

enum Mode<T> {
    Fields(Vec<FieldDescriptor<T>>),
    WholeValue(FieldDescriptor<T>),
}

impl<T> fmt::Debug for SchemaMode<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeValue(root) => f.debug_tuple("WholeValue").field(root).finish(),
            Self::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
        }
    }
}

impl<T> Clone for Mode<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Fields(fields) => Self::Fields(fields.clone()),
            Self::WholeValue(root) => Self::WholeValue(root.clone()),
        }
    }
}

/// A borrowed view of a schema's dispatch mode.
pub enum SchemaMode<'a, T> {
    /// The value is encoded as a single root field.
    WholeValue(&'a FieldDescriptor<T>),
    /// Each declared field is encoded in declaration order.
    Fields(&'a [FieldDescriptor<T>]),
}

impl<T> Schema<T> {
    /// Starts building a field schema.
    #[must_use]
    pub const fn builder() -> SchemaBuilder<T> {
        SchemaBuilder {
            fields: Vec::new(),
        }
    }

    /// Builds a whole-value schema for a shape without declared fields.
    ///
    /// Fails with [`SchemaError::UnsupportedType`] if the shape has no wire
    /// category.
    pub fn of_value(
        shape: &TypeShape,
        get: FieldGetter<T>,
        set: FieldSetter<T>,
    ) -> SchemaResult<Self> {
        let category = resolve(shape)?;
        Ok(Self {
            mode: Mode::WholeValue(FieldDescriptor::new("<value>", category, get, set)),
        })
    }

    /// The schema's dispatch mode.
    #[must_use]
    pub fn mode(&self) -> SchemaMode<'_, T> {
        match &self.mode {
            Mode::Fields(fields) => SchemaMode::Fields(fields),
            Mode::WholeValue(root) => SchemaMode::WholeValue(root),
        }
    }

    /// The declared fields, in declaration order. Empty for whole-value
    /// schemas.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        match &self.mode {
            Mode::Fields(fields) => fields,
            Mode::WholeValue(_) => &[],
        }
    }

    /// The number of declared fields (zero for whole-value schemas).
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields().len()
    }

    /// `true` if this is a whole-value schema.
    #[must_use]
    pub const fn is_whole_value(&self) -> bool {
        matches!(self.mode, Mode::WholeValue(_))
    }

    /// `true` if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}

/// Builder for a field [`Schema`].
///
/// Field declarations are collected in order; wire categories are resolved
/// and names checked for uniqueness at [`build`](Self::build) time.
pub struct SchemaBuilder<T> {
    fields: Vec<(&'static str, TypeShape, FieldGetter<T>, FieldSetter<T>)>,
}

impl<T> fmt::Debug for SchemaBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.fields.iter().map(|(name, ..)| *name).collect();
        f.debug_struct("SchemaBuilder")
            .field("fields", &names)
            .finish()
    }
}

impl<T> SchemaBuilder<T> {
    /// Declares a serializable field with its shape and accessor pair.
    #[must_use]
    pub fn field(
        mut self,
        name: &'static str,
        shape: TypeShape,
        get: FieldGetter<T>,
        set: FieldSetter<T>,
    ) -> Self {
        self.fields.push((name, shape, get, set));
        self
    }

    /// Resolves every declared field and builds the schema.
    ///
    /// Fails with [`SchemaError::UnsupportedType`] if any field's shape has
    /// no wire category, [`SchemaError::DuplicateFieldName`] on a repeated
    /// name, and [`SchemaError::EmptySchema`] if no fields were declared.
    pub fn build(self) -> SchemaResult<Schema<T>> {
        if self.fields.is_empty() {
            return Err(SchemaError::EmptySchema);
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        for (name, shape, get, set) in self.fields {
            if !seen.insert(name) {
                return Err(SchemaError::DuplicateFieldName { name });
            }
            let category = resolve(&shape)?;
            fields.push(FieldDescriptor::new(name, category, get, set));
        }
        Ok(Schema {
            mode: Mode::Fields(fields),
        })
    }
}
