use crate::reflect::{Reflect, ReflectRef};

/// Whether `value` is a nil handle: `None`, or an empty `AnyValue`.
///
/// Non-handle values, including a `Box`, are never nil.
pub fn is_nil(value: &dyn Reflect) -> bool {
    matches!(value.reflect_ref(), ReflectRef::Pointer(None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnyValue;

    #[test]
    fn test_nil_handles() {
        assert!(is_nil(&None::<i32>));
        assert!(is_nil(&AnyValue::empty()));
        assert!(is_nil(&None::<Box<String>>));
    }

    #[test]
    fn test_non_nil_values() {
        assert!(!is_nil(&Some(0_i32)));
        assert!(!is_nil(&AnyValue::new(0_i32)));
        assert!(!is_nil(&Box::new(0_i32)));
        assert!(!is_nil(&0_i32));
        assert!(!is_nil(&Vec::<i32>::new()));
    }
}
