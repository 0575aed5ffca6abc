//! Record derive macro implementation
//!
//! Generates a field table plus index-based accessors, which is all the copy engine
//! needs to match fields by name at runtime.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericParam, parse_macro_input, parse_quote};

use crate::attrs::{ContainerAttrs, FieldAttrs};

/// One field that appears in the generated table
struct TableField {
    member:  syn::Ident,
    name:    String,
    flatten: bool,
}

/// Implementation of the Record derive macro
pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    // Ensure we're working with a struct with named fields
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "Record can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data_struct.fields else {
        return Err(syn::Error::new_spanned(
            struct_name,
            "Record can only be derived for structs with named fields",
        ));
    };

    let container = ContainerAttrs::parse(&input.attrs)?;
    let table_fields = collect_fields(named.named.iter(), &container)?;

    let field_infos = table_fields.iter().map(|field| {
        let name = &field.name;
        let ident = field.member.unraw().to_string();
        if field.flatten {
            quote! { ::field_copy::FieldInfo::flattened(#name, #ident) }
        } else {
            quote! { ::field_copy::FieldInfo::named(#name, #ident) }
        }
    });
    let indices: Vec<_> = (0..table_fields.len()).collect();
    let members: Vec<_> = table_fields.iter().map(|field| &field.member).collect();

    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(type_param) => Some(type_param.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = generics.make_where_clause();
    where_clause
        .predicates
        .push(parse_quote! { Self: ::core::clone::Clone });
    for param in &type_params {
        where_clause
            .predicates
            .push(parse_quote! { #param: ::field_copy::Reflect });
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::field_copy::Reflect for #struct_name #ty_generics #where_clause {
            fn kind(&self) -> ::field_copy::Kind {
                ::field_copy::Kind::Struct
            }

            fn type_name(&self) -> &'static str {
                ::core::any::type_name::<Self>()
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::core::any::Any {
                self
            }

            fn clone_reflect(&self) -> ::std::boxed::Box<dyn ::field_copy::Reflect> {
                ::std::boxed::Box::new(::core::clone::Clone::clone(self))
            }

            fn assign(&mut self, value: &dyn ::field_copy::Reflect) -> bool {
                match value.as_any().downcast_ref::<Self>() {
                    ::core::option::Option::Some(value) => {
                        ::core::clone::Clone::clone_from(self, value);
                        true
                    }
                    ::core::option::Option::None => false,
                }
            }

            fn reflect_ref(&self) -> ::field_copy::ReflectRef<'_> {
                ::field_copy::ReflectRef::Record(self)
            }

            fn reflect_mut(&mut self) -> ::field_copy::ReflectMut<'_> {
                ::field_copy::ReflectMut::Record(self)
            }
        }

        impl #impl_generics ::field_copy::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::field_copy::FieldInfo] {
                const FIELDS: &[::field_copy::FieldInfo] = &[
                    #(#field_infos,)*
                ];
                FIELDS
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn ::field_copy::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(&self.#members as &dyn ::field_copy::Reflect),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn ::field_copy::Reflect> {
                match index {
                    #(#indices => ::core::option::Option::Some(&mut self.#members as &mut dyn ::field_copy::Reflect),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    Ok(expanded)
}

fn collect_fields<'a>(
    fields: impl Iterator<Item = &'a syn::Field>,
    container: &ContainerAttrs,
) -> syn::Result<Vec<TableField>> {
    let mut table_fields: Vec<TableField> = Vec::new();
    for field in fields {
        let Some(member) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Record only works with named fields"));
        };
        let attrs = FieldAttrs::parse(field)?;
        if attrs.skip {
            continue;
        }

        let name = attrs.matching_name(&member, container);
        if table_fields.iter().any(|existing| existing.name == name) {
            return Err(syn::Error::new_spanned(
                &member,
                format!("duplicate matching name `{name}`"),
            ));
        }
        table_fields.push(TableField {
            member,
            name,
            flatten: attrs.flatten,
        });
    }
    Ok(table_fields)
}
