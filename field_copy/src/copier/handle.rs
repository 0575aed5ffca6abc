use crate::reflect::Reflect;

/// A borrowed argument to a copy.
///
/// The destination must be an [`Handle::Exclusive`] borrow: that is the only way the
/// engine can write into caller-owned storage. Passing a shared borrow as the
/// destination fails with `Error::NotAPointer`.
pub enum Handle<'a> {
    /// Read-only borrow
    Shared(&'a dyn Reflect),
    /// Writable borrow
    Exclusive(&'a mut dyn Reflect),
}

impl Handle<'_> {
    /// Shared view of the value, whichever way it was borrowed
    pub fn get(&self) -> &dyn Reflect {
        match self {
            Self::Shared(value) => *value,
            Self::Exclusive(value) => &**value,
        }
    }
}

impl<'a, T: Reflect> From<&'a T> for Handle<'a> {
    fn from(value: &'a T) -> Self {
        Self::Shared(value)
    }
}

impl<'a, T: Reflect> From<&'a mut T> for Handle<'a> {
    fn from(value: &'a mut T) -> Self {
        Self::Exclusive(value)
    }
}
