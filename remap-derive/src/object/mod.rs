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

mod enum_;
mod field_meta;
mod struct_;

use proc_macro2::TokenStream;
use syn::{Data, DeriveInput};

pub fn derive_mappable(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let container = field_meta::parse_container_meta(ast)?;
    match &ast.data {
        Data::Struct(s) => struct_::derive_struct(ast, s, &container),
        Data::Enum(e) => {
            if container.no_default {
                return Err(syn::Error::new(
                    ast.ident.span(),
                    "`no_default` only applies to structs",
                ));
            }
            enum_::derive_enum(ast, e)
        }
        Data::Union(u) => Err(syn::Error::new(
            u.union_token.span,
            "Mappable cannot be derived for unions",
        )),
    }
}
