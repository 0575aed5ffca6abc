use thiserror::Error;

use crate::copier::Compatibility;
use crate::reflect::Kind;

// Error message prefixes
const MSG_SOURCE_RECORD: &str = "source is a record but destination is a collection";
const MSG_SOURCE_COLLECTION: &str = "source is a collection but destination is not";

/// Result type for the `field_copy` library
pub type Result<T> = std::result::Result<T, error_stack::Report<Error>>;

/// Which argument of a copy an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    /// The value being written
    Destination,
    /// The value being read
    Source,
}

/// Failures reported by the copy engine
#[derive(Debug, Error)]
pub enum Error {
    /// Destination was passed by shared reference, so it cannot be written
    #[error("destination must be passed by mutable reference, got a shared `{type_name}`")]
    NotAPointer {
        /// Type behind the shared reference
        type_name: &'static str,
    },

    /// Source and destination disagree on record-vs-collection shape
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Destination collection length is not acceptable for the source length
    #[error(
        "length mismatch: destination holds {destination_len} elements, source has {source_len}"
    )]
    LengthMismatch {
        /// Number of source elements
        source_len:      usize,
        /// Number of destination elements
        destination_len: usize,
    },

    /// A value expected to be a record is something else once dereferenced
    #[error("{side} is not a struct: found {found}")]
    NotAStruct {
        /// Which argument was wrong
        side:  Side,
        /// Kind that was found, or `nil` for an empty handle
        found: String,
    },

    /// A field correspondence is incompatible and the mapping policy forbids skipping
    #[error(
        "field `{field}` cannot be copied ({compatibility}): `{source_type}` into `{destination_type}`"
    )]
    FieldMismatch {
        /// Matching name of the field
        field:            String,
        /// Why the field cannot be copied
        compatibility:    Compatibility,
        /// Declared type on the source side
        source_type:      &'static str,
        /// Declared type on the destination side
        destination_type: &'static str,
    },

    /// Any other runtime fault caught while copying
    #[error("internal fault: {0}")]
    InternalFault(String),
}

impl Error {
    /// Source is a record but destination is a collection
    pub fn source_is_record() -> Self {
        Self::ShapeMismatch(MSG_SOURCE_RECORD.to_string())
    }

    /// Source is a collection but destination is not
    pub fn source_is_collection() -> Self {
        Self::ShapeMismatch(MSG_SOURCE_COLLECTION.to_string())
    }

    /// `side` dereferenced to `kind` (or to a nil handle) instead of a record
    pub fn not_a_struct(side: Side, kind: Option<Kind>) -> Self {
        Self::NotAStruct {
            side,
            found: kind.map_or_else(|| "nil".to_string(), |kind| kind.to_string()),
        }
    }

    /// Create an internal fault from any displayable description
    pub fn internal(details: impl std::fmt::Display) -> Self {
        Self::InternalFault(details.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::source_is_record().to_string(),
            "shape mismatch: source is a record but destination is a collection"
        );
        assert_eq!(
            Error::not_a_struct(Side::Source, Some(Kind::Int32)).to_string(),
            "source is not a struct: found int32"
        );
        assert_eq!(
            Error::not_a_struct(Side::Destination, None).to_string(),
            "destination is not a struct: found nil"
        );
    }
}
