//! Name-based field copying between structurally similar record types
//!
//! This crate copies field values from one record (or a collection of records) into a
//! differently-typed record, matching fields by name rather than by declared type. It
//! is meant for adapting between nominally distinct but structurally similar types,
//! such as a storage record and an API record, without writing mapping code per pair.
//!
//! # Usage
//!
//! ```
//! use field_copy::{Record, copy_fields};
//!
//! #[derive(Record, Clone, Default)]
//! struct Audit {
//!     created_by: String,
//! }
//!
//! #[derive(Record, Clone, Default)]
//! struct UserRow {
//!     id:    u64,
//!     name:  String,
//!     #[record(flatten)]
//!     audit: Audit,
//! }
//!
//! #[derive(Record, Clone, Default)]
//! struct UserView {
//!     name:       String,
//!     created_by: String,
//! }
//!
//! let row = UserRow {
//!     id:    7,
//!     name:  "ada".into(),
//!     audit: Audit { created_by: "admin".into() },
//! };
//! let mut view = UserView::default();
//! copy_fields(&mut view, &row).unwrap();
//! assert_eq!(view.name, "ada");
//! assert_eq!(view.created_by, "admin");
//! ```
//!
//! # Matching rules
//!
//! For every source field, in declaration order:
//! - no destination field of that name: skipped, unless the field is
//!   `#[record(flatten)]`, in which case its own fields are matched against the
//!   destination (breadth first, so shallower fields win)
//! - destination field is an [`AnyValue`]: the value is stored whatever its kind
//! - kinds or declared types differ: skipped (see [`MappingPolicy`])
//! - otherwise the value is cloned into the destination field
//!
//! A destination field is considered at most once within one record copy: once a
//! shallower source field has matched it, deeper fields of the same name are ignored,
//! even when the shallower one was skipped.
//!
//! # Collections
//!
//! When the source is an array or `Vec`, the destination must be one too. A
//! fixed-length destination must be at least as long as the source (see
//! [`FixedLengthPolicy`]); a `Vec` destination is grown with default elements and
//! truncated to the source length (see [`GrowthPolicy`]).
//!
//! # Concurrency
//!
//! A copy is synchronous and holds no state between calls. The destination is
//! borrowed mutably for the whole call, so overlapping copies into the same
//! destination are rejected at compile time.

extern crate self as field_copy;

mod copier;
mod error;
mod options;
mod reflect;
mod support;

pub use copier::{Compatibility, Copier, Handle, copy_fields};
pub use error::{Error, Result, Side};
pub use field_copy_macros::Record;
pub use options::{CopyOptions, FixedLengthPolicy, GrowthPolicy, MappingPolicy};
pub use reflect::{
    AnyValue, Collection, FieldInfo, Kind, Record, Reflect, ReflectMut, ReflectRef, deref,
    deref_kind, deref_mut,
};
pub use support::{
    CallSite, StackResultExt, call_sites, is_nil, report, to_sequence, wrap, wrapf,
};
