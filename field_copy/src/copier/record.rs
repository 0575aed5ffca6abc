//! Single record copy with recursive field resolution

use std::collections::HashSet;

use error_stack::Report;
use serde::Serialize;
use strum::{AsRefStr, Display};

use super::Copier;
use crate::error::{Error, Result, Side};
use crate::options::MappingPolicy;
use crate::reflect::{FieldInfo, Kind, Record, Reflect, ReflectMut, ReflectRef, deref, deref_mut};

/// How a source field relates to the destination field of the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Compatibility {
    /// Identical type on both sides
    Exact,
    /// Destination accepts a value of any kind
    InterfaceSink,
    /// Different kinds
    IncompatibleKind,
    /// Both sides are collections with different element types
    IncompatibleContainerElementType,
    /// Same kind but different declared types, such as two distinct record types or two
    /// arrays of the same element type and different lengths
    IncompatibleType,
}

impl Compatibility {
    /// Classify copying `source` into `destination`
    pub fn between(destination: &dyn Reflect, source: &dyn Reflect) -> Self {
        let kind = destination.kind();
        if kind == Kind::Interface {
            Self::InterfaceSink
        } else if kind != source.kind() {
            Self::IncompatibleKind
        } else if destination.concrete_type_id() == source.concrete_type_id() {
            Self::Exact
        } else if kind.is_collection() && element_type(destination) != element_type(source) {
            Self::IncompatibleContainerElementType
        } else {
            Self::IncompatibleType
        }
    }

    /// Whether a value may be assigned under this classification
    pub const fn is_copyable(self) -> bool {
        matches!(self, Self::Exact | Self::InterfaceSink)
    }
}

fn element_type(value: &dyn Reflect) -> Option<&'static str> {
    match value.reflect_ref() {
        ReflectRef::Collection(collection) => Some(collection.element_type_name()),
        _ => None,
    }
}

/// What happened to one source field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOutcome {
    Assigned,
    Skipped,
    /// Embedded record whose fields are matched one level deeper
    Flatten,
}

impl Copier {
    /// Copy a single record, dereferencing both sides first
    pub(super) fn copy_value(&self, destination: &mut dyn Reflect, source: &dyn Reflect) -> Result<()> {
        self.copy_record_views(deref_mut(destination), deref(source))
    }

    pub(super) fn copy_record_views(
        &self,
        destination: ReflectMut<'_>,
        source: ReflectRef<'_>,
    ) -> Result<()> {
        let destination = match destination {
            ReflectMut::Record(record) => record,
            other => {
                return Err(Report::new(Error::not_a_struct(
                    Side::Destination,
                    view_kind_mut(&other),
                )));
            }
        };
        let source = match source {
            ReflectRef::Record(record) => record,
            other => {
                return Err(Report::new(Error::not_a_struct(
                    Side::Source,
                    view_kind(&other),
                )));
            }
        };
        self.copy_record(destination, source)
    }

    /// Match source fields against `destination` breadth first. A destination field
    /// matched by a shallower source field is never revisited, even when that match was
    /// skipped as incompatible.
    fn copy_record(&self, destination: &mut dyn Record, source: &dyn Record) -> Result<()> {
        let mut matched = HashSet::new();
        let mut frontier = vec![source];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            for record in frontier {
                for (index, info) in record.fields().iter().enumerate() {
                    let Some(value) = record.field_at(index) else {
                        continue;
                    };
                    if self.copy_field(destination, info, value, &mut matched)?
                        != FieldOutcome::Flatten
                    {
                        continue;
                    }
                    match deref(value) {
                        ReflectRef::Record(embedded) => next.push(embedded),
                        _ => tracing::trace!(
                            field = info.name(),
                            "embedded field is not a record, skipping"
                        ),
                    }
                }
            }
            frontier = next;
        }

        Ok(())
    }

    fn copy_field(
        &self,
        destination: &mut dyn Record,
        info: &FieldInfo,
        value: &dyn Reflect,
        matched: &mut HashSet<&'static str>,
    ) -> Result<FieldOutcome> {
        let name = info.name();
        let Some(path) = lookup(destination, name) else {
            if info.is_flattened() {
                return Ok(FieldOutcome::Flatten);
            }
            tracing::trace!(field = name, "no destination field, skipping");
            return Ok(FieldOutcome::Skipped);
        };
        if !matched.insert(name) {
            tracing::trace!(field = name, "already matched by a shallower field, skipping");
            return Ok(FieldOutcome::Skipped);
        }

        let Some(target) = field_at_path_mut(destination, &path) else {
            return Err(Report::new(Error::internal(format!(
                "destination field `{name}` could not be reached"
            ))));
        };

        let compatibility = Compatibility::between(target, value);
        if compatibility.is_copyable() {
            if !target.assign(value) {
                return Err(Report::new(Error::internal(format!(
                    "`{}` rejected a value of type `{}`",
                    target.type_name(),
                    value.type_name()
                )))
                .attach(format!("Field name: {name}")));
            }
            tracing::trace!(field = name, %compatibility, "assigned");
            return Ok(FieldOutcome::Assigned);
        }

        match self.options.mapping {
            MappingPolicy::SkipOnMismatch => {
                tracing::trace!(field = name, %compatibility, "incompatible field, skipping");
                Ok(FieldOutcome::Skipped)
            }
            MappingPolicy::ErrorOnMismatch => Err(Report::new(Error::FieldMismatch {
                field: name.to_string(),
                compatibility,
                source_type: value.type_name(),
                destination_type: target.type_name(),
            })
            .attach(format!("Source field: `{}`", info.ident()))),
        }
    }
}

/// Locate the destination field matching `name`, promoting through flattened fields.
///
/// Shallower fields win; two matches at the same depth are ambiguous and yield `None`.
/// A nil flattened handle is not descended into.
fn lookup(record: &dyn Record, name: &str) -> Option<Vec<usize>> {
    let mut frontier: Vec<(Vec<usize>, &dyn Record)> = vec![(Vec::new(), record)];

    while !frontier.is_empty() {
        let mut found: Option<Vec<usize>> = None;
        let mut ambiguous = false;
        let mut next: Vec<(Vec<usize>, &dyn Record)> = Vec::new();

        for (prefix, current) in &frontier {
            let current: &dyn Record = *current;
            if let Some(index) = current.field_index(name) {
                ambiguous |= found.is_some();
                found = Some(prefix.iter().copied().chain([index]).collect());
            }
            for (index, info) in current.fields().iter().enumerate() {
                if info.is_flattened()
                    && info.name() != name
                    && let Some(ReflectRef::Record(embedded)) = current.field_at(index).map(deref)
                {
                    next.push((prefix.iter().copied().chain([index]).collect(), embedded));
                }
            }
        }

        if ambiguous {
            tracing::trace!(field = name, "ambiguous destination field");
            return None;
        }
        if found.is_some() {
            return found;
        }
        frontier = next;
    }

    None
}

fn field_at_path_mut<'a>(record: &'a mut dyn Record, path: &[usize]) -> Option<&'a mut dyn Reflect> {
    let (last, parents) = path.split_last()?;
    let mut current = record;
    for index in parents {
        current = match deref_mut(current.field_at_mut(*index)?) {
            ReflectMut::Record(embedded) => embedded,
            _ => return None,
        };
    }
    current.field_at_mut(*last)
}

fn view_kind(view: &ReflectRef<'_>) -> Option<Kind> {
    match view {
        ReflectRef::Record(record) => Some(record.kind()),
        ReflectRef::Collection(collection) => Some(collection.kind()),
        ReflectRef::Pointer(pointee) => pointee.map(|value| value.kind()),
        ReflectRef::Value(value) => Some(value.kind()),
    }
}

fn view_kind_mut(view: &ReflectMut<'_>) -> Option<Kind> {
    match view {
        ReflectMut::Record(record) => Some(record.kind()),
        ReflectMut::Collection(collection) => Some(collection.kind()),
        ReflectMut::Pointer(pointee) => pointee.as_ref().map(|value| value.kind()),
        ReflectMut::Value(value) => Some(value.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnyValue;

    #[test]
    fn test_compatibility_classes() {
        assert_eq!(Compatibility::between(&1_i32, &2_i32), Compatibility::Exact);
        assert_eq!(
            Compatibility::between(&AnyValue::empty(), &2_i32),
            Compatibility::InterfaceSink
        );
        assert_eq!(
            Compatibility::between(&1_i64, &2_i32),
            Compatibility::IncompatibleKind
        );
        assert_eq!(
            Compatibility::between(&vec![1_i64], &vec![2_i32]),
            Compatibility::IncompatibleContainerElementType
        );
        assert_eq!(
            Compatibility::between(&[1_i32; 2], &[2_i64; 2]),
            Compatibility::IncompatibleContainerElementType
        );
        assert_eq!(
            Compatibility::between(&[1_i32; 2], &[2_i32; 3]),
            Compatibility::IncompatibleType
        );
        assert_eq!(
            Compatibility::between(&Some(1_i64), &Some(2_i32)),
            Compatibility::IncompatibleType
        );
    }

    #[test]
    fn test_compatibility_display() {
        assert_eq!(
            Compatibility::IncompatibleContainerElementType.to_string(),
            "incompatible-container-element-type"
        );
        assert!(Compatibility::InterfaceSink.is_copyable());
        assert!(!Compatibility::IncompatibleKind.is_copyable());
    }
}
