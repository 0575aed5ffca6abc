//! Runtime view over the values taking part in a copy
//!
//! Rust has no runtime reflection, so every participating type carries a small
//! object-safe description of itself: its [`Kind`], a way to look at it as a record
//! or collection, and a way to assign a value of the same type into it. Records get
//! theirs from `#[derive(Record)]`; scalars, strings, options, boxes, vectors and
//! arrays are covered by the implementations in this module.

mod any_value;
mod collection;
mod kind;
mod record;
mod value;

use std::any::{Any, TypeId};

pub use any_value::AnyValue;
pub use collection::Collection;
pub use kind::Kind;
pub use record::{FieldInfo, Record};

/// Object-safe runtime description of a value
pub trait Reflect: Any {
    /// Coarse runtime category of this value
    fn kind(&self) -> Kind;

    /// Fully qualified name of the concrete type
    fn type_name(&self) -> &'static str;

    /// Upcast to `&dyn Any`
    fn as_any(&self) -> &dyn Any;

    /// Upcast to `&mut dyn Any`
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone this value behind a fresh box
    fn clone_reflect(&self) -> Box<dyn Reflect>;

    /// Assign `value` into `self`.
    ///
    /// Returns `false` when `value` has a different concrete type and `self` is not an
    /// [`AnyValue`] sink, leaving `self` untouched.
    fn assign(&mut self, value: &dyn Reflect) -> bool;

    /// Shape-specific shared view
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Shape-specific exclusive view
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// `TypeId` of the concrete type behind this value
    fn concrete_type_id(&self) -> TypeId {
        self.as_any().type_id()
    }
}

impl std::fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("dyn Reflect")
            .field("kind", &self.kind())
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// Shared view of a reflected value
pub enum ReflectRef<'a> {
    /// A record with named fields
    Record(&'a dyn Record),
    /// A fixed-length or growable collection
    Collection(&'a dyn Collection),
    /// An indirection; `None` when the handle is nil
    Pointer(Option<&'a dyn Reflect>),
    /// Any other value
    Value(&'a dyn Reflect),
}

/// Exclusive view of a reflected value
pub enum ReflectMut<'a> {
    /// A record with named fields
    Record(&'a mut dyn Record),
    /// A fixed-length or growable collection
    Collection(&'a mut dyn Collection),
    /// An indirection; `None` when the handle is nil
    Pointer(Option<&'a mut dyn Reflect>),
    /// Any other value
    Value(&'a mut dyn Reflect),
}

/// Follow pointer indirection until a non-pointer value (or a nil handle) is reached
pub fn deref(value: &dyn Reflect) -> ReflectRef<'_> {
    match value.reflect_ref() {
        ReflectRef::Pointer(Some(inner)) => deref(inner),
        other => other,
    }
}

/// Exclusive counterpart of [`deref`]
pub fn deref_mut(value: &mut dyn Reflect) -> ReflectMut<'_> {
    match value.reflect_mut() {
        ReflectMut::Pointer(Some(inner)) => deref_mut(inner),
        other => other,
    }
}

/// Kind of the value reached by [`deref`], or `None` when a nil handle was reached
pub fn deref_kind(value: &dyn Reflect) -> Option<Kind> {
    match deref(value) {
        ReflectRef::Record(record) => Some(record.kind()),
        ReflectRef::Collection(collection) => Some(collection.kind()),
        ReflectRef::Value(value) => Some(value.kind()),
        ReflectRef::Pointer(_) => None,
    }
}

/// Assign by downcasting `value` to `T` and cloning it into `target`
pub(crate) fn assign_cloned<T: Clone + 'static>(target: &mut T, value: &dyn Reflect) -> bool {
    value.as_any().downcast_ref::<T>().is_some_and(|value| {
        target.clone_from(value);
        true
    })
}
