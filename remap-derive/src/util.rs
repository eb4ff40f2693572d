// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Field, Fields, GenericArgument, Index, Member, PathArguments, Type, TypePath};

/// Source field with its original index and computed field name preserved.
///
/// For tuple structs, `field_name` is the index as a string.
/// For named structs, `field_name` is the field identifier.
#[derive(Clone)]
pub struct SourceField<'a> {
    pub original_index: usize,
    pub field: &'a Field,
    pub field_name: String,
    pub is_tuple_struct: bool,
}

impl<'a> SourceField<'a> {
    /// `self.<member>` access path of the field.
    pub fn member(&self) -> Member {
        match &self.field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index {
                index: self.original_index as u32,
                span: Span::call_site(),
            }),
        }
    }

    /// Generate field initialization syntax for struct construction.
    /// - tuple struct: just the value
    /// - named struct: `field_name: value`
    pub fn field_init(&self, value: TokenStream) -> TokenStream {
        if self.is_tuple_struct {
            value
        } else {
            let ident = format_ident!("{}", self.field_name);
            quote! { #ident: #value }
        }
    }
}

/// Generate Self construction syntax.
/// - unit struct: `Self`
/// - tuple struct: `Self(field0, field1, ...)`
/// - named struct: `Self { field0, field1, ... }`
pub fn self_construction(fields: &Fields, field_inits: &[TokenStream]) -> TokenStream {
    match fields {
        Fields::Unit => quote! { Self },
        Fields::Unnamed(_) => quote! { Self( #(#field_inits),* ) },
        Fields::Named(_) => quote! { Self { #(#field_inits),* } },
    }
}

/// Returns the fields in declaration order.
pub fn source_fields(fields: &Fields) -> Vec<SourceField<'_>> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| SourceField {
            original_index: idx,
            field,
            field_name: match &field.ident {
                Some(ident) => ident.to_string(),
                None => idx.to_string(),
            },
            is_tuple_struct: field.ident.is_none(),
        })
        .collect()
}

/// Maps a field visibility onto the reflected `Visibility` variant.
pub fn visibility_tokens(vis: &syn::Visibility) -> TokenStream {
    let variant = match vis {
        syn::Visibility::Public(_) => quote! { Public },
        syn::Visibility::Restricted(restricted) => {
            if restricted.path.is_ident("crate") {
                quote! { Crate }
            } else if restricted.path.is_ident("self") {
                quote! { Private }
            } else {
                quote! { Restricted }
            }
        }
        syn::Visibility::Inherited => quote! { Private },
    };
    quote! { ::remap_core::meta::Visibility::#variant }
}

/// Check if a type is `Rc<dyn Trait>` or `Arc<dyn Trait>` and return the
/// pointer name if it is.
pub fn shared_dyn_trait(ty: &Type) -> Option<String> {
    if let Type::Path(TypePath { path, .. }) = ty {
        if let Some(seg) = path.segments.last() {
            if seg.ident == "Rc" || seg.ident == "Arc" {
                if let PathArguments::AngleBracketed(args) = &seg.arguments {
                    if let Some(GenericArgument::Type(Type::TraitObject(_))) = args.args.first() {
                        return Some(seg.ident.to_string());
                    }
                }
            }
        }
    }
    None
}
