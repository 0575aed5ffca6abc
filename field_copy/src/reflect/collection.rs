use std::any::Any;

use super::{Kind, Reflect, ReflectMut, ReflectRef, assign_cloned};

/// An ordered sequence of elements of a single element type
pub trait Collection: Reflect {
    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the collection has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether [`Collection::push_default`] can extend this collection
    fn is_growable(&self) -> bool;

    /// Element at `index`
    fn element(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable element at `index`
    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Append a default element. Returns `false` for fixed-length collections.
    fn push_default(&mut self) -> bool;

    /// Shorten to `len` elements; a no-op for fixed-length collections
    fn truncate(&mut self, len: usize);

    /// Declared element type
    fn element_type_name(&self) -> &'static str;
}

impl<T> Reflect for Vec<T>
where
    T: Reflect + Clone + Default,
{
    fn kind(&self) -> Kind {
        Kind::Sequence
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
        assign_cloned(self, value)
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Collection(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Collection(self)
    }
}

impl<T> Collection for Vec<T>
where
    T: Reflect + Clone + Default,
{
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_growable(&self) -> bool {
        true
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|element| element as &dyn Reflect)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.get_mut(index).map(|element| element as &mut dyn Reflect)
    }

    fn push_default(&mut self) -> bool {
        self.push(T::default());
        true
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn element_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T, const N: usize> Reflect for [T; N]
where
    T: Reflect + Clone,
{
    fn kind(&self) -> Kind {
        Kind::Array
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
        assign_cloned(self, value)
    }

    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Collection(self)
    }

    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Collection(self)
    }
}

impl<T, const N: usize> Collection for [T; N]
where
    T: Reflect + Clone,
{
    fn len(&self) -> usize {
        N
    }

    fn is_growable(&self) -> bool {
        false
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        self.get(index).map(|element| element as &dyn Reflect)
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.get_mut(index).map(|element| element as &mut dyn Reflect)
    }

    fn push_default(&mut self) -> bool {
        false
    }

    fn truncate(&mut self, _len: usize) {}

    fn element_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_grows_and_truncates() {
        let mut values = vec![1_i32, 2];
        assert!(Collection::push_default(&mut values));
        assert_eq!(Collection::len(&values), 3);
        assert_eq!(values[2], 0);

        Collection::truncate(&mut values, 1);
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_array_is_fixed_length() {
        let mut values = [1_u8, 2, 3];
        assert!(!values.is_growable());
        assert!(!Collection::push_default(&mut values));
        Collection::truncate(&mut values, 1);
        assert_eq!(Collection::len(&values), 3);
    }

    #[test]
    fn test_element_access() {
        let values = vec![String::from("a"), String::from("b")];
        let element = values.element(1).map(|element| element.kind());
        assert_eq!(element, Some(Kind::String));
        assert!(values.element(2).is_none());
        assert_eq!(values.element_type_name(), "alloc::string::String");
    }
}
