use crate::reflect::{Reflect, ReflectRef};

/// View `value` as a sequence.
///
/// A collection yields its elements in order; any other value yields itself as the
/// single element. Handles are not dereferenced.
pub fn to_sequence(value: &dyn Reflect) -> Vec<&dyn Reflect> {
    match value.reflect_ref() {
        ReflectRef::Collection(collection) => (0..collection.len())
            .filter_map(move |index| collection.element(index))
            .collect(),
        _ => vec![value],
    }
}
