use super::Reflect;

/// Static description of one field in a record's field table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    name:      &'static str,
    ident:     &'static str,
    flattened: bool,
}

impl FieldInfo {
    /// A regular named field
    pub const fn named(name: &'static str, ident: &'static str) -> Self {
        Self {
            name,
            ident,
            flattened: false,
        }
    }

    /// An embedded field whose own fields join the parent's name space
    pub const fn flattened(name: &'static str, ident: &'static str) -> Self {
        Self {
            name,
            ident,
            flattened: true,
        }
    }

    /// Name used for correspondence lookup
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rust identifier of the field
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Whether this field is embedded
    pub const fn is_flattened(&self) -> bool {
        self.flattened
    }
}

/// A value with named fields, usually implemented through `#[derive(Record)]`
pub trait Record: Reflect {
    /// Field table in declaration order
    fn fields(&self) -> &'static [FieldInfo];

    /// Field value at `index` in the field table
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable field value at `index` in the field table
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Index of the field declared directly on this record under `name`
    fn field_index(&self, name: &str) -> Option<usize> {
        self.fields().iter().position(|field| field.name() == name)
    }
}
