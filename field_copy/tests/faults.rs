//! Panics raised while copying are reported, not propagated

mod common;

use field_copy::{Error, Record, copy_fields};

#[derive(Record, Debug, Default)]
struct Explosive {
    value: u8,
}

impl Clone for Explosive {
    #[allow(clippy::panic, reason = "exercises the panic barrier")]
    fn clone(&self) -> Self {
        panic!("explosive value cannot be cloned");
    }
}

#[derive(Record, Clone, Default)]
struct Wrapper {
    inner: Explosive,
}

#[derive(Record, Clone, Default)]
struct Bare {
    value: u8,
}

#[test]
fn test_panic_becomes_internal_fault() {
    common::init_tracing();
    let source = Wrapper::default();
    let mut destination = Wrapper::default();
    let result = copy_fields(&mut destination, &source);
    assert!(matches!(
        common::context(&result),
        Some(Error::InternalFault(message)) if message.contains("explosive value cannot be cloned")
    ));
}

#[test]
fn test_nested_fields_copy_without_cloning_the_record() {
    let source = Explosive { value: 7 };
    let mut destination = Bare::default();
    assert!(copy_fields(&mut destination, &source).is_ok());
    assert_eq!(destination.value, 7);
}
