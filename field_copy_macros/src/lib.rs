//! Procedural macros for field_copy

mod attrs;
mod record;

use proc_macro::TokenStream;

/// Derives `Reflect` and `Record` for a struct with named fields, so it can take part in
/// `field_copy::copy_fields` on either side.
///
/// The struct must implement `Clone`; every copied field type must implement `Reflect`.
///
/// # Example
///
/// ```ignore
/// #[derive(Record, Clone, Default)]
/// #[record(rename_all = "camelCase")]
/// struct UserRow {
///     user_name: String,            // matched as "userName"
///
///     #[record(rename = "id")]
///     row_id: u64,                  // matched as "id"
///
///     #[record(flatten)]
///     audit: Audit,                 // fields of Audit join this name space
///
///     #[record(skip)]
///     cache: Option<Box<UserRow>>,  // not visible to the copier
/// }
/// ```
///
/// Container attributes:
/// - `rename_all = "..."`: one of `camelCase`, `PascalCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case`
///
/// Field attributes:
/// - `flatten`: embedded record
/// - `rename = "..."`: matching name for this field
/// - `skip`: leave the field out of the field table
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
