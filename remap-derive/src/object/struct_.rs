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
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{DataStruct, DeriveInput, GenericParam};

use crate::object::field_meta::{parse_and_validate_fields, RemapContainerMeta, RemapFieldMeta};
use crate::util::{self_construction, shared_dyn_trait, source_fields, visibility_tokens, SourceField};

fn gen_accessors(index: usize, field: &SourceField) -> TokenStream {
    let member = field.member();
    let ty = &field.field.ty;
    let get = format_ident!("__remap_get_{}", index);
    let get_mut = format_ident!("__remap_get_mut_{}", index);
    let set = format_ident!("__remap_set_{}", index);
    quote! {
        #[doc(hidden)]
        fn #get(owner: &dyn ::std::any::Any) -> Option<&dyn ::remap_core::reflect::Reflect> {
            owner
                .downcast_ref::<Self>()
                .map(|value| &value.#member as &dyn ::remap_core::reflect::Reflect)
        }

        #[doc(hidden)]
        fn #get_mut(
            owner: &mut dyn ::std::any::Any,
        ) -> Option<&mut dyn ::remap_core::reflect::Reflect> {
            owner
                .downcast_mut::<Self>()
                .map(|value| &mut value.#member as &mut dyn ::remap_core::reflect::Reflect)
        }

        #[doc(hidden)]
        fn #set(
            owner: &mut dyn ::std::any::Any,
            value: Box<dyn ::remap_core::reflect::Reflect>,
        ) -> Result<(), ::remap_core::error::Error> {
            let owner = owner.downcast_mut::<Self>().ok_or_else(|| {
                ::remap_core::error::Error::type_error(format!(
                    "expected an owner of type `{}`",
                    ::std::any::type_name::<Self>()
                ))
            })?;
            owner.#member = ::remap_core::reflect::downcast_value::<#ty>(value)?;
            Ok(())
        }
    }
}

fn gen_property(index: usize, field: &SourceField, meta: &RemapFieldMeta) -> TokenStream {
    let ty = &field.field.ty;
    let field_name = &field.field_name;
    let name = meta.rename.clone().unwrap_or_else(|| field_name.clone());
    let visibility = visibility_tokens(&field.field.vis);
    let get = format_ident!("__remap_get_{}", index);
    let get_mut = format_ident!("__remap_get_mut_{}", index);
    let set = format_ident!("__remap_set_{}", index);
    let readable = meta.is_readable();
    let writable = meta.is_writable();
    let init_only = meta.init_only;
    let flatten = meta.flatten;
    quote! {
        ::remap_core::meta::PropertyDesc::new(
            #name,
            #field_name,
            ::std::any::type_name::<Self>(),
            <#ty as ::remap_core::reflect::Typed>::type_desc,
            #visibility,
            ::remap_core::meta::Accessor::new(Self::#get, Self::#get_mut, Self::#set),
        )
        .with_access(#readable, #writable, #init_only)
        .with_flatten(#flatten)
    }
}

/// Clones every reflected field through `Typed` and every skipped field
/// through `Clone`.
fn gen_clone(
    data: &DataStruct,
    fields: &[(SourceField, RemapFieldMeta)],
    method: TokenStream,
) -> TokenStream {
    let inits: Vec<TokenStream> = fields
        .iter()
        .map(|(field, meta)| {
            let member = field.member();
            let ty = &field.field.ty;
            let value = if meta.skip {
                quote! { ::std::clone::Clone::clone(&self.#member) }
            } else {
                quote! { <#ty as ::remap_core::reflect::Typed>::#method(&self.#member) }
            };
            field.field_init(value)
        })
        .collect();
    self_construction(&data.fields, &inits)
}

pub fn derive_struct(
    ast: &DeriveInput,
    data: &DataStruct,
    container: &RemapContainerMeta,
) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    if let Some(lifetime) = ast.generics.lifetimes().next() {
        return Err(syn::Error::new(
            lifetime.span(),
            "Mappable types cannot borrow: lifetime parameters are not supported",
        ));
    }

    let fields = parse_and_validate_fields(&source_fields(&data.fields))?;
    for (field, meta) in &fields {
        if meta.skip {
            continue;
        }
        if let Some(pointer) = shared_dyn_trait(&field.field.ty) {
            return Err(syn::Error::new(
                field.field.ty.span(),
                format!(
                    "`{pointer}<dyn Trait>` fields are not mappable; use `Box<dyn Trait>` \
                     with `register_trait_type!`"
                ),
            ));
        }
    }

    let mut generics = ast.generics.clone();
    for param in generics.params.iter_mut() {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(syn::parse_quote!(::remap_core::reflect::Typed));
        }
    }
    if !container.no_default && generics.type_params().next().is_some() {
        generics
            .make_where_clause()
            .predicates
            .push(syn::parse_quote!(Self: ::std::default::Default));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let reflected: Vec<(usize, &SourceField, &RemapFieldMeta)> = fields
        .iter()
        .filter(|(_, meta)| !meta.skip)
        .map(|(field, meta)| (field.original_index, field, meta))
        .collect();
    let accessors = reflected
        .iter()
        .map(|(index, field, _)| gen_accessors(*index, field));
    let properties = reflected
        .iter()
        .map(|(index, field, meta)| gen_property(*index, field, meta));

    let construct = if container.no_default {
        quote! { None }
    } else {
        quote! { Some(::remap_core::meta::ObjectDesc::default_constructor::<Self>) }
    };
    let shallow_clone = gen_clone(data, &fields, quote! { shallow_clone });
    let deep_clone = gen_clone(data, &fields, quote! { deep_clone });

    Ok(quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            #(#accessors)*

            #[doc(hidden)]
            fn __remap_properties() -> Vec<::remap_core::meta::PropertyDesc> {
                vec![#(#properties),*]
            }
        }

        impl #impl_generics ::remap_core::reflect::Typed for #name #ty_generics #where_clause {
            fn type_desc() -> ::remap_core::meta::TypeDesc {
                ::remap_core::meta::TypeDesc::new::<Self>(::remap_core::meta::TypeKind::Object(
                    ::remap_core::meta::ObjectDesc::new(Self::__remap_properties, #construct),
                ))
            }

            #[inline(always)]
            fn value_ref(&self) -> ::remap_core::reflect::ValueRef<'_> {
                ::remap_core::reflect::ValueRef::Object
            }

            fn shallow_clone(&self) -> Self {
                #shallow_clone
            }

            fn deep_clone(&self) -> Self {
                #deep_clone
            }
        }
    })
}
