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

//! Property enumeration.
//!
//! Flattened fields stand in for a base type: their properties are reported
//! as inherited properties of the outer type. The flattened field itself is
//! never reported. Private properties of a flattened type are not visible
//! from the outer type, and a declared property hides an inherited one with
//! the same name.
//!
//! Properties come back declared first, then inherited, each in declaration
//! order. Callers must not depend on that order for anything but diagnostics.

use crate::meta::{Accessor, Binding, PropertyDesc, TypeDesc, TypeKind, Visibility};

/// Flattening deeper than this is ignored.
const MAX_FLATTEN_DEPTH: usize = 16;

/// Enumerates the properties of `desc` selected by `binding`.
///
/// Types that are not objects have no properties. `declared_only` (or
/// [`Binding::DECLARED_ONLY`] in `binding`) leaves out inherited properties.
pub fn get_properties(desc: &TypeDesc, binding: Binding, declared_only: bool) -> Vec<PropertyDesc> {
    let declared_only = declared_only || binding.is_declared_only();
    let mut out = Vec::new();
    collect(desc, binding, declared_only, &[], 0, &mut out);
    out
}

fn collect(
    desc: &TypeDesc,
    binding: Binding,
    declared_only: bool,
    hops: &[Accessor],
    depth: usize,
    out: &mut Vec<PropertyDesc>,
) {
    let TypeKind::Object(object) = desc.kind else {
        return;
    };
    let inherited = depth > 0;
    let mut bases = Vec::new();
    for property in (object.properties)() {
        if property.is_flatten() {
            bases.push(property);
            continue;
        }
        if inherited && property.visibility() == Visibility::Private {
            continue;
        }
        if !binding.allows(property.visibility()) {
            continue;
        }
        if out.iter().any(|p| p.name() == property.name()) {
            continue;
        }
        out.push(if inherited {
            property.inherited_through(hops)
        } else {
            property
        });
    }
    if declared_only || depth >= MAX_FLATTEN_DEPTH {
        return;
    }
    for base in bases {
        let mut path = hops.to_vec();
        path.push(base.accessor());
        collect(&base.type_desc(), binding, declared_only, &path, depth + 1, out);
    }
}
