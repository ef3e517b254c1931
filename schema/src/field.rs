//! Field descriptors: name, accessors, and resolved wire category.

use std::fmt;

use crate::error::SchemaResult;
use crate::shape::WireCategory;
use crate::value::Value;

/// Fetches a field's current value out of `T`.
pub type FieldGetter<T> = fn(&T) -> Value;

/// Assigns a decoded value into a field of `T`.
pub type FieldSetter<T> = fn(&mut T, Value) -> SchemaResult<()>;

/// One serializable field of a value shape.
///
/// Created once at schema-build time; read-only thereafter. The name is for
/// diagnostics only and is never encoded.
pub struct FieldDescriptor<T> {
    name: &'static str,
    category: WireCategory,
    get: FieldGetter<T>,
    set: FieldSetter<T>,
}

impl<T> FieldDescriptor<T> {
    pub(crate) const fn new(
        name: &'static str,
        category: WireCategory,
        get: FieldGetter<T>,
        set: FieldSetter<T>,
    ) -> Self {
        Self {
            name,
            category,
            get,
            set,
        }
    }

    /// The field's diagnostic name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's resolved wire category.
    #[must_use]
    pub const fn category(&self) -> WireCategory {
        self.category
    }

    /// Fetches the field's current value.
    #[must_use]
    pub fn get(&self, value: &T) -> Value {
        (self.get)(value)
    }

    /// Assigns a decoded value into the field.
    pub fn set(&self, target: &mut T, value: Value) -> SchemaResult<()> {
        (self.set)(target, value)
    }
}

// Manual impls: fn pointers are Copy regardless of `T`, so no `T: Clone`
// bound is wanted.
impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}
