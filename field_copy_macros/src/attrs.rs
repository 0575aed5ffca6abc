//! Parsing of `#[record(...)]` attributes

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use syn::ext::IdentExt;
use syn::{Attribute, Field, LitStr};

/// Case conversion applied to every field name of a container
#[derive(Clone, Copy)]
pub enum RenameRule {
    CamelCase,
    PascalCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            "kebab-case" => Ok(Self::KebabCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unknown rename_all rule: {other}"),
            )),
        }
    }

    fn apply(self, name: &str) -> String {
        match self {
            Self::CamelCase => name.to_lower_camel_case(),
            Self::PascalCase => name.to_upper_camel_case(),
            Self::SnakeCase => name.to_snake_case(),
            Self::ScreamingSnakeCase => name.to_shouty_snake_case(),
            Self::KebabCase => name.to_kebab_case(),
        }
    }
}

/// Container-level options
#[derive(Default)]
pub struct ContainerAttrs {
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let value = meta.value()?;
                    let s: LitStr = value.parse()?;
                    parsed.rename_all = Some(RenameRule::parse(&s)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported record container attribute"))
                }
            })?;
        }
        Ok(parsed)
    }
}

/// Field-level options
#[derive(Default)]
pub struct FieldAttrs {
    pub flatten: bool,
    pub rename:  Option<String>,
    pub skip:    bool,
}

impl FieldAttrs {
    pub fn parse(field: &Field) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("flatten") {
                    parsed.flatten = true;
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    let value = meta.value()?;
                    let s: LitStr = value.parse()?;
                    parsed.rename = Some(s.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported record field attribute"))
                }
            })?;
        }

        if parsed.skip && (parsed.flatten || parsed.rename.is_some()) {
            return Err(syn::Error::new_spanned(
                field,
                "`skip` cannot be combined with `flatten` or `rename`",
            ));
        }
        Ok(parsed)
    }

    /// Matching name of the field: explicit rename, then container rule, then identifier
    pub fn matching_name(&self, ident: &syn::Ident, container: &ContainerAttrs) -> String {
        let ident = ident.unraw().to_string();
        match (&self.rename, container.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(rule)) => rule.apply(&ident),
            (None, None) => ident,
        }
    }
}
