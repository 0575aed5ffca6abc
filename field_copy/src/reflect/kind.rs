//! Coarse runtime categories of reflected values

use serde::Serialize;
use strum::{AsRefStr, Display};

/// The coarse runtime category of a value, as distinct from its exact declared type.
///
/// Two fields are only ever copied into each other when their kinds agree, or when the
/// destination is an [`Kind::Interface`] sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// `bool`
    Bool,
    /// `i8`
    Int8,
    /// `i16`
    Int16,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `i128`
    Int128,
    /// `isize`
    Isize,
    /// `u8`
    Uint8,
    /// `u16`
    Uint16,
    /// `u32`
    Uint32,
    /// `u64`
    Uint64,
    /// `u128`
    Uint128,
    /// `usize`
    Usize,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// `char`
    Char,
    /// `String`
    String,
    /// `()`
    Unit,
    /// A record with named fields
    Struct,
    /// A fixed-length collection
    Array,
    /// A growable collection
    Sequence,
    /// A nullable handle (`Option<T>`)
    Option,
    /// An owning pointer (`Box<T>`)
    Pointer,
    /// An open sink that accepts a value of any kind
    Interface,
}

impl Kind {
    /// Whether values of this kind are collection-shaped
    pub const fn is_collection(self) -> bool {
        matches!(self, Self::Array | Self::Sequence)
    }
}
