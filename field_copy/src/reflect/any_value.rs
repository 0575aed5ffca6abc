use std::any::Any;

use super::{Kind, Reflect, ReflectMut, ReflectRef};

/// An open sink that accepts a value of any kind.
///
/// A destination field of this type receives a clone of whatever the corresponding
/// source field holds, regardless of its kind. An empty `AnyValue` is nil.
#[derive(Default)]
pub struct AnyValue(Option<Box<dyn Reflect>>);

impl AnyValue {
    /// Sink holding `value`
    pub fn new(value: impl Reflect) -> Self {
        Self(Some(Box::new(value)))
    }

    /// Empty sink
    pub const fn empty() -> Self {
        Self(None)
    }

    /// The held value, if any
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.0.as_deref()
    }

    /// Whether nothing is held
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The held value downcast to `T`
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.0
            .as_deref()
            .and_then(|value| value.as_any().downcast_ref::<T>())
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self(self.0.as_ref().map(|value| value.clone_reflect()))
    }
}

impl std::fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("AnyValue").field(&value.type_name()).finish(),
            None => f.write_str("AnyValue(<empty>)"),
        }
    }
}

impl Reflect for AnyValue {
    fn kind(&self) -> Kind {
        Kind::Interface
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_reflect(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn assign(&mut self, value: &dyn Reflect) -> bool {
        // Unwrap another sink instead of nesting it.
        self.0 = match value.as_any().downcast_ref::<Self>() {
            Some(other) => other.0.as_ref().map(|inner| inner.clone_reflect()),
            None => Some(value.clone_reflect()),
        };
        true
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self.get())
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(
            self.0
                .as_deref_mut()
                .map(|inner| inner as &mut dyn Reflect),
        )
    }
}
