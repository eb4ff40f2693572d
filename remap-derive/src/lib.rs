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

//! Derive macro for the Remap object mapper.
//!
//! `#[derive(Mappable)]` implements `remap_core::reflect::Typed` for structs
//! and fieldless enums. The generated code refers to `::remap_core`, so the
//! deriving crate depends on `remap-core` directly.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro describing a type to the mapper.
///
/// For structs, every field not marked `#[remap(skip)]` becomes a property
/// named after the field, with its declared visibility. Field types must be
/// `Typed` themselves. Unless the struct is marked `#[remap(no_default)]`, it
/// must implement `Default`, which serves as its parameterless constructor.
///
/// For enums, all variants must be fieldless. Enum values convert to other
/// enums by variant name, and to integers and strings.
///
/// # Attributes
///
/// - `#[remap(skip)]`: the field is not reflected; it must implement `Clone`
/// - `#[remap(rename = "name")]`: maps the field or variant under another name
/// - `#[remap(read_only)]`, `#[remap(write_only)]`: one-directional properties
/// - `#[remap(init_only)]`: set while building a new value, never by `map_into`
/// - `#[remap(flatten)]`: reports the properties of a nested struct as inherited
/// - `#[remap(no_default)]` (container): built only through `construct_using`
///
/// # Example
///
/// ```rust,ignore
/// use remap_derive::Mappable;
///
/// #[derive(Mappable, Default)]
/// struct Audit {
///     created_by: String,
/// }
///
/// #[derive(Mappable, Default)]
/// struct Order {
///     #[remap(init_only)]
///     id: u64,
///     #[remap(rename = "customer")]
///     buyer: String,
///     #[remap(flatten)]
///     audit: Audit,
///     #[remap(skip)]
///     cache: Vec<u8>,
/// }
///
/// #[derive(Mappable, Clone, Copy, Default)]
/// enum Status {
///     #[default]
///     Pending,
///     Shipped = 10,
/// }
/// ```
#[proc_macro_derive(Mappable, attributes(remap))]
pub fn proc_macro_derive_mappable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_mappable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
