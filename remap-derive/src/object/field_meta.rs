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

//! Parsing of `#[remap(...)]` attributes.
//!
//! Field attributes:
//! - `skip`: not reflected at all
//! - `rename = "name"`: mapping name differing from the field name
//! - `read_only`: never a mapping target
//! - `write_only`: never a mapping source
//! - `init_only`: a target only while a new value is being built
//! - `flatten`: the properties of the field's struct become inherited properties
//!
//! Container attributes:
//! - `no_default`: no parameterless constructor, built only through `construct_using`
//!
//! Variant attributes:
//! - `rename = "name"`: variant name used for name based enum conversion

use std::collections::HashMap;

use syn::spanned::Spanned;
use syn::{Attribute, DeriveInput, Field, Variant};

use crate::util::SourceField;

/// Represents parsed `#[remap(...)]` field attributes
#[derive(Debug, Clone, Default)]
pub struct RemapFieldMeta {
    pub skip: bool,
    pub rename: Option<String>,
    pub read_only: bool,
    pub write_only: bool,
    pub init_only: bool,
    pub flatten: bool,
}

impl RemapFieldMeta {
    pub fn is_readable(&self) -> bool {
        !self.write_only
    }

    /// Writable outside of construction.
    pub fn is_writable(&self) -> bool {
        !self.read_only && !self.init_only
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemapContainerMeta {
    pub no_default: bool,
}

fn remap_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("remap"))
}

fn parse_rename(nested: &syn::meta::ParseNestedMeta) -> syn::Result<String> {
    let lit: syn::LitStr = nested.value()?.parse()?;
    let name = lit.value();
    if name.trim().is_empty() {
        return Err(syn::Error::new(lit.span(), "rename must not be empty"));
    }
    Ok(name)
}

/// Parse `#[remap(...)]` attributes from a field
pub fn parse_field_meta(field: &Field) -> syn::Result<RemapFieldMeta> {
    let mut meta = RemapFieldMeta::default();

    for attr in remap_attrs(&field.attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("skip") {
                meta.skip = true;
            } else if nested.path.is_ident("rename") {
                meta.rename = Some(parse_rename(&nested)?);
            } else if nested.path.is_ident("read_only") {
                meta.read_only = true;
            } else if nested.path.is_ident("write_only") {
                meta.write_only = true;
            } else if nested.path.is_ident("init_only") {
                meta.init_only = true;
            } else if nested.path.is_ident("flatten") {
                meta.flatten = true;
            } else {
                return Err(nested.error("unsupported remap field attribute"));
            }
            Ok(())
        })?;
    }

    if meta.read_only && (meta.write_only || meta.init_only) {
        return Err(syn::Error::new(
            field.span(),
            "`read_only` cannot be combined with `write_only` or `init_only`",
        ));
    }
    if meta.flatten && meta.rename.is_some() {
        return Err(syn::Error::new(
            field.span(),
            "a flattened field has no name of its own to rename",
        ));
    }
    Ok(meta)
}

/// Parse `#[remap(...)]` attributes from the deriving type
pub fn parse_container_meta(ast: &DeriveInput) -> syn::Result<RemapContainerMeta> {
    let mut meta = RemapContainerMeta::default();
    for attr in remap_attrs(&ast.attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("no_default") {
                meta.no_default = true;
                Ok(())
            } else {
                Err(nested.error("unsupported remap container attribute"))
            }
        })?;
    }
    Ok(meta)
}

/// Parse the mapping name of an enum variant
pub fn parse_variant_name(variant: &Variant) -> syn::Result<String> {
    let mut name = variant.ident.to_string();
    for attr in remap_attrs(&variant.attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                name = parse_rename(&nested)?;
                Ok(())
            } else {
                Err(nested.error("unsupported remap variant attribute"))
            }
        })?;
    }
    Ok(name)
}

/// Parse field metadata for all fields and validate that mapping names are unique.
pub fn parse_and_validate_fields<'a>(
    fields: &[SourceField<'a>],
) -> syn::Result<Vec<(SourceField<'a>, RemapFieldMeta)>> {
    let fields_with_meta: Vec<_> = fields
        .iter()
        .map(|f| Ok((f.clone(), parse_field_meta(f.field)?)))
        .collect::<syn::Result<_>>()?;

    let mut names: HashMap<String, &str> = HashMap::new();
    for (field, meta) in &fields_with_meta {
        if meta.skip || meta.flatten {
            continue;
        }
        let name = meta.rename.clone().unwrap_or_else(|| field.field_name.clone());
        if let Some(existing) = names.insert(name.clone(), &field.field_name) {
            return Err(syn::Error::new(
                field.field.span(),
                format!(
                    "duplicate mapping name '{}' on fields '{}' and '{}'",
                    name, existing, field.field_name
                ),
            ));
        }
    }

    Ok(fields_with_meta)
}
