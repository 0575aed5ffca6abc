//! Name-based field copy engine
//!
//! [`Copier::copy`] classifies both arguments, then performs either an element-wise
//! collection copy or a single record copy. Fields are matched by name; a field whose
//! destination counterpart has an incompatible kind or type is left alone unless the
//! [`MappingPolicy`](crate::MappingPolicy) says otherwise.

mod collection;
mod handle;
mod record;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use error_stack::Report;
pub use handle::Handle;
pub use record::Compatibility;

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::reflect::{Reflect, ReflectMut, ReflectRef, deref, deref_mut};

/// Copies fields between records (or collections of records) by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Copier {
    options: CopyOptions,
}

impl Copier {
    /// Copier using `options`
    pub const fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    /// Copy every name-compatible field of `source` into `destination`.
    ///
    /// `destination` must be a mutable borrow of a record, or of an array or vector of
    /// records. `source` may be a record, a collection of records, or either of those
    /// behind a `Box`/`Option`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAPointer`] when `destination` is a shared borrow
    /// - [`Error::ShapeMismatch`] when one side is a collection and the other is not
    /// - [`Error::LengthMismatch`] when the destination collection length is not accepted
    /// - [`Error::NotAStruct`] when a value that should be a record is not one
    /// - [`Error::FieldMismatch`] for an incompatible field under
    ///   [`MappingPolicy::ErrorOnMismatch`](crate::MappingPolicy::ErrorOnMismatch)
    /// - [`Error::InternalFault`] when anything panics while copying
    pub fn copy<'d, 's>(
        &self,
        destination: impl Into<Handle<'d>>,
        source: impl Into<Handle<'s>>,
    ) -> Result<()> {
        let destination = match destination.into() {
            Handle::Exclusive(destination) => destination,
            Handle::Shared(destination) => {
                return Err(Report::new(Error::NotAPointer {
                    type_name: destination.type_name(),
                }));
            }
        };
        let source = source.into();
        let source = source.get();

        tracing::debug!(
            destination = destination.type_name(),
            source = source.type_name(),
            "copying fields"
        );

        panic::catch_unwind(AssertUnwindSafe(|| self.copy_unguarded(destination, source)))
            .unwrap_or_else(|payload| {
                let description = describe_panic(payload.as_ref());
                tracing::warn!(fault = %description, "recovered from panic while copying fields");
                Err(Report::new(Error::InternalFault(description)))
            })
    }

    fn copy_unguarded(&self, destination: &mut dyn Reflect, source: &dyn Reflect) -> Result<()> {
        match (deref_mut(destination), deref(source)) {
            (ReflectMut::Collection(destination), ReflectRef::Collection(source)) => {
                self.copy_collection(destination, source)
            }
            (_, ReflectRef::Collection(_)) => Err(Report::new(Error::source_is_collection())),
            (ReflectMut::Collection(_), _) => Err(Report::new(Error::source_is_record())),
            (destination, source) => self.copy_record_views(destination, source),
        }
    }
}

/// Copy `source` into `destination` using the default [`CopyOptions`].
///
/// ```
/// use field_copy::{Record, copy_fields};
///
/// #[derive(Record, Clone, Default)]
/// struct Stored {
///     name: String,
///     age:  u32,
/// }
///
/// #[derive(Record, Clone, Default)]
/// struct Public {
///     name: String,
/// }
///
/// let stored = vec![
///     Stored { name: "s1".into(), age: 11 },
///     Stored { name: "s11".into(), age: 111 },
/// ];
/// let mut public = [Public::default(), Public::default()];
/// copy_fields(&mut public, &stored).unwrap();
/// assert_eq!(public[1].name, "s11");
/// ```
///
/// # Errors
///
/// See [`Copier::copy`].
pub fn copy_fields<'d, 's>(
    destination: impl Into<Handle<'d>>,
    source: impl Into<Handle<'s>>,
) -> Result<()> {
    Copier::default().copy(destination, source)
}

fn describe_panic(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic with a non-string payload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_panic_payloads() {
        let payload = panic::catch_unwind(|| std::panic::panic_any("static message"))
            .err()
            .map(|payload| describe_panic(payload.as_ref()));
        assert_eq!(payload.as_deref(), Some("static message"));

        let payload = panic::catch_unwind(|| std::panic::panic_any(String::from("owned")))
            .err()
            .map(|payload| describe_panic(payload.as_ref()));
        assert_eq!(payload.as_deref(), Some("owned"));

        let payload = panic::catch_unwind(|| std::panic::panic_any(7_u8))
            .err()
            .map(|payload| describe_panic(payload.as_ref()));
        assert_eq!(payload.as_deref(), Some("panic with a non-string payload"));
    }

    #[test]
    fn test_shared_destination_is_rejected() {
        let destination = vec![1_i32];
        let source = vec![2_i32];
        let report = copy_fields(&destination, &source).err();
        assert!(matches!(
            report.as_ref().map(Report::current_context),
            Some(Error::NotAPointer { .. })
        ));
    }

    #[test]
    fn test_scalar_into_scalar_is_not_a_struct() {
        let mut destination = 1_i32;
        let report = copy_fields(&mut destination, &2_i32).err();
        assert!(matches!(
            report.as_ref().map(Report::current_context),
            Some(Error::NotAStruct { .. })
        ));
        assert_eq!(destination, 1);
    }
}
