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

use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{DataEnum, DeriveInput, Fields};

use crate::object::field_meta::parse_variant_name;

pub fn derive_enum(ast: &DeriveInput, data_enum: &DataEnum) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new(
            ast.generics.span(),
            "Mappable enums cannot be generic",
        ));
    }
    if let Some(variant) = data_enum
        .variants
        .iter()
        .find(|v| !matches!(v.fields, Fields::Unit))
    {
        return Err(syn::Error::new(
            variant.span(),
            "Mappable enums must be fieldless; variants with data are not supported",
        ));
    }

    let variant_idents: Vec<_> = data_enum.variants.iter().map(|v| &v.ident).collect();
    let variant_names = data_enum
        .variants
        .iter()
        .map(parse_variant_name)
        .collect::<syn::Result<Vec<_>>>()?;
    let variant_indices: Vec<usize> = (0..variant_idents.len()).collect();

    Ok(quote! {
        impl #name {
            #[doc(hidden)]
            const __REMAP_VARIANTS: &'static [::remap_core::meta::EnumVariant] = &[
                #(::remap_core::meta::EnumVariant::new(#variant_names, Self::#variant_idents as i64)),*
            ];

            #[doc(hidden)]
            fn __remap_from_index(index: usize) -> Option<Box<dyn ::remap_core::reflect::Reflect>> {
                match index {
                    #(#variant_indices => Some(Box::new(Self::#variant_idents)),)*
                    _ => None,
                }
            }
        }

        impl ::remap_core::reflect::Typed for #name {
            fn type_desc() -> ::remap_core::meta::TypeDesc {
                ::remap_core::meta::TypeDesc::new::<Self>(::remap_core::meta::TypeKind::Enum(
                    ::remap_core::meta::EnumDesc::new(Self::__REMAP_VARIANTS, Self::__remap_from_index),
                ))
            }

            fn value_ref(&self) -> ::remap_core::reflect::ValueRef<'_> {
                let index: usize = match *self {
                    #(Self::#variant_idents => #variant_indices,)*
                };
                let variant = Self::__REMAP_VARIANTS[index];
                ::remap_core::reflect::ValueRef::Enum(::remap_core::reflect::EnumValue {
                    index,
                    name: variant.name,
                    discriminant: variant.discriminant,
                })
            }

            fn shallow_clone(&self) -> Self {
                match *self {
                    #(Self::#variant_idents => Self::#variant_idents,)*
                }
            }

            fn deep_clone(&self) -> Self {
                self.shallow_clone()
            }
        }
    })
}
