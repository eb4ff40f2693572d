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

//! Type conversion rules.
//!
//! [`can_convert`] answers, from descriptors alone, whether a value of one
//! type may become a value of another. The matcher uses it to decide which
//! property pairs match; the executor then converts actual values and skips
//! the ones that do not fit.

pub mod scalar;

use crate::meta::{EnumDesc, ScalarKind, TypeDesc, TypeKind};
use crate::reflect::{EnumValue, Reflect, Scalar};
use crate::resolver::TypeMapResolver;

/// Whether values of `source` may be mapped onto `target`.
///
/// Identical types, pairs with a configured factory, option and pointer
/// wrapping in either direction, registered trait implementations, scalar
/// and enum conversions, sequences and maps with convertible elements, and
/// object to object pairs qualify.
pub fn can_convert(source: &TypeDesc, target: &TypeDesc, resolver: &TypeMapResolver) -> bool {
    if source.type_id == target.type_id || resolver.has_factory(source, target) {
        return true;
    }
    match (source.kind, target.kind) {
        (TypeKind::Option(s), TypeKind::Option(t)) => {
            can_convert(&(s.inner)(), &(t.inner)(), resolver)
        }
        (_, TypeKind::Option(t)) => can_convert(source, &(t.inner)(), resolver),
        (TypeKind::Option(s), _) => can_convert(&(s.inner)(), target, resolver),
        (_, TypeKind::Pointer(t)) => can_convert(source, &(t.inner)(), resolver),
        (TypeKind::Pointer(s), _) => can_convert(&(s.inner)(), target, resolver),
        // decided by the concrete value at mapping time
        (TypeKind::Abstract(_), _) => true,
        (_, TypeKind::Abstract(t)) => t.is_implemented_by(source.type_id),
        (TypeKind::Scalar(s), TypeKind::Scalar(t)) => scalar::can_convert(s, t),
        (TypeKind::Enum(_), TypeKind::Enum(_)) => true,
        (TypeKind::Enum(_), TypeKind::Scalar(t)) | (TypeKind::Scalar(t), TypeKind::Enum(_)) => {
            t.is_integer() || t == ScalarKind::Text
        }
        (TypeKind::Sequence(s), TypeKind::Sequence(t)) => {
            can_convert(&(s.element)(), &(t.element)(), resolver)
        }
        (TypeKind::Map(s), TypeKind::Map(t)) => {
            can_convert(&(s.key)(), &(t.key)(), resolver)
                && can_convert(&(s.value)(), &(t.value)(), resolver)
        }
        (TypeKind::Object(_), TypeKind::Object(t)) => t.construct.is_some(),
        _ => false,
    }
}

/// Enum to integer by discriminant, enum to text by variant name.
pub(crate) fn enum_to_scalar(value: &EnumValue, to: ScalarKind) -> Option<Box<dyn Reflect>> {
    if to == ScalarKind::Text {
        return Some(Box::new(value.name.to_string()));
    }
    scalar::convert_integer(value.discriminant, to)
}

/// Integer to enum by discriminant, text to enum by variant name.
pub(crate) fn scalar_to_enum(value: &Scalar<'_>, desc: &EnumDesc) -> Option<Box<dyn Reflect>> {
    match value {
        Scalar::Text(name) => desc.from_name(name),
        other => desc.from_discriminant(scalar::as_i64(other)?),
    }
}

/// Enum to enum by variant name.
pub(crate) fn enum_to_enum(value: &EnumValue, desc: &EnumDesc) -> Option<Box<dyn Reflect>> {
    desc.from_name(value.name)
}
