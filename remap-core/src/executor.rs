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

//! Mapping execution.
//!
//! [`convert_value`] turns one value into a value of a target type, or
//! `None` when no conversion applies; `None` is never an error, the caller
//! leaves its target untouched. [`map_object`] and [`populate`] apply the
//! resolved property matches of a type pair.
//!
//! Conversion order: identical types are cloned (shallow unless deep is
//! requested), a configured factory for the pair wins over everything
//! else, then options and pointers are unwrapped or wrapped, trait objects
//! are dispatched on their concrete value, and finally scalars, enums,
//! sequences, maps and objects are converted by shape.

use std::any::Any;
use std::sync::Arc;

use tracing::trace;

use crate::convert::{enum_to_enum, enum_to_scalar, scalar, scalar_to_enum};
use crate::error::Error;
use crate::mapper::Mapper;
use crate::meta::{TypeDesc, TypeKind};
use crate::reflect::{Reflect, ValueRef};
use crate::resolver::{MapContext, TypeMap, TypePair};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloneMode {
    /// `Rc`/`Arc` pointers are shared with the source.
    Shallow,
    /// Nothing is shared with the source.
    Deep,
}

/// Clones `value`, or `None` when it holds a trait object whose concrete
/// type was not registered with `register_trait_type!`.
fn clone_with(value: &dyn Reflect, mode: CloneMode) -> Option<Box<dyn Reflect>> {
    if !is_cloneable(value) {
        trace!(
            source = value.reflect_type().type_name,
            "holds an unregistered trait implementation"
        );
        return None;
    }
    Some(match mode {
        CloneMode::Shallow => value.clone_value(),
        CloneMode::Deep => value.deep_clone_value(),
    })
}

/// Whether every trait object reachable from `value` holds a registered
/// implementation. Skipped fields are not reflected and never checked.
fn is_cloneable(value: &dyn Reflect) -> bool {
    match value.value() {
        ValueRef::Scalar(_) | ValueRef::Enum(_) | ValueRef::Option(None) => true,
        ValueRef::Option(Some(inner)) | ValueRef::Pointer(inner) => is_cloneable(inner),
        ValueRef::Sequence(mut items) => items.all(is_cloneable),
        ValueRef::Map(mut entries) => entries.all(|(k, v)| is_cloneable(k) && is_cloneable(v)),
        ValueRef::Abstract(concrete) => match value.reflect_type().kind {
            TypeKind::Abstract(desc) => {
                desc.is_implemented_by(concrete.as_any().type_id()) && is_cloneable(concrete)
            }
            _ => false,
        },
        ValueRef::Object => match value.reflect_type().kind {
            TypeKind::Object(object) => (object.properties)().iter().all(|property| {
                property
                    .get(value.as_any())
                    .map_or(true, is_cloneable)
            }),
            _ => true,
        },
    }
}

/// Converts `value` into a fresh value of type `target`.
pub fn convert_value(
    mapper: &Mapper,
    value: &dyn Reflect,
    target: &TypeDesc,
    mode: CloneMode,
    ctx: &mut MapContext,
) -> Result<Option<Box<dyn Reflect>>, Error> {
    let source = value.reflect_type();
    if source.type_id == target.type_id {
        return Ok(clone_with(value, mode));
    }
    if let Some(map) = mapper.resolver().get(&TypePair::new(&source, target)) {
        if map.options().factory().is_some() {
            return map_object(mapper, value, &map, mode, ctx);
        }
    }

    if let TypeKind::Option(option) = target.kind {
        let inner = match value.value() {
            ValueRef::Option(None) => return Ok(Some((option.none)())),
            ValueRef::Option(Some(inner)) => {
                convert_value(mapper, inner, &(option.inner)(), mode, ctx)?
            }
            _ => convert_value(mapper, value, &(option.inner)(), mode, ctx)?,
        };
        return Ok(inner.and_then(option.some));
    }
    match value.value() {
        ValueRef::Option(None) => return Ok(None),
        ValueRef::Option(Some(inner)) => return convert_value(mapper, inner, target, mode, ctx),
        _ => {}
    }

    if let TypeKind::Pointer(pointer) = target.kind {
        let inner = convert_value(mapper, value, &(pointer.inner)(), mode, ctx)?;
        return Ok(inner.and_then(pointer.wrap));
    }
    if let ValueRef::Pointer(inner) = value.value() {
        return convert_value(mapper, inner, target, mode, ctx);
    }

    if let TypeKind::Abstract(desc) = target.kind {
        let concrete = match value.value() {
            ValueRef::Abstract(concrete) => concrete,
            _ => value,
        };
        if !desc.is_implemented_by(concrete.as_any().type_id()) {
            trace!(
                source = source.type_name,
                target = target.type_name,
                "not a registered implementation"
            );
            return Ok(None);
        }
        return Ok(clone_with(concrete, mode).and_then(desc.wrap));
    }
    if let ValueRef::Abstract(concrete) = value.value() {
        return convert_value(mapper, concrete, target, mode, ctx);
    }

    let converted = match (value.value(), target.kind) {
        (ValueRef::Scalar(s), TypeKind::Scalar(kind)) => scalar::convert(&s, kind),
        (ValueRef::Scalar(s), TypeKind::Enum(desc)) => scalar_to_enum(&s, &desc),
        (ValueRef::Enum(e), TypeKind::Scalar(kind)) => enum_to_scalar(&e, kind),
        (ValueRef::Enum(e), TypeKind::Enum(desc)) => enum_to_enum(&e, &desc),
        (ValueRef::Sequence(items), TypeKind::Sequence(desc)) => {
            let element = (desc.element)();
            let mut converted = Vec::new();
            for item in items {
                match convert_value(mapper, item, &element, mode, ctx)? {
                    Some(v) => converted.push(v),
                    None => return Ok(None),
                }
            }
            (desc.build)(converted)
        }
        (ValueRef::Map(entries), TypeKind::Map(desc)) => {
            let (key_desc, value_desc) = ((desc.key)(), (desc.value)());
            let mut converted = Vec::new();
            for (k, v) in entries {
                let key = convert_value(mapper, k, &key_desc, mode, ctx)?;
                let value = convert_value(mapper, v, &value_desc, mode, ctx)?;
                match (key, value) {
                    (Some(k), Some(v)) => converted.push((k, v)),
                    _ => return Ok(None),
                }
            }
            (desc.build)(converted)
        }
        (ValueRef::Object, TypeKind::Object(_)) => {
            let map = mapper
                .resolver()
                .get_or_register(&source, target, mapper.config())?;
            return map_object(mapper, value, &map, mode, ctx);
        }
        _ => None,
    };
    if converted.is_none() {
        trace!(
            source = source.type_name,
            target = target.type_name,
            "no conversion"
        );
    }
    Ok(converted)
}

/// Builds a target of `map` from `value` and populates its properties.
///
/// Returns `None` when the target has neither a factory nor a default
/// constructor. A deep `mode` deep clones every property of the object
/// and of the objects nested in it.
pub fn map_object(
    mapper: &Mapper,
    value: &dyn Reflect,
    map: &Arc<TypeMap>,
    mode: CloneMode,
    ctx: &mut MapContext,
) -> Result<Option<Box<dyn Reflect>>, Error> {
    ctx.inc_depth()?;
    let result = construct_and_populate(mapper, value, map, mode, ctx);
    ctx.dec_depth();
    result
}

fn construct_and_populate(
    mapper: &Mapper,
    value: &dyn Reflect,
    map: &TypeMap,
    mode: CloneMode,
    ctx: &mut MapContext,
) -> Result<Option<Box<dyn Reflect>>, Error> {
    let Some(mut instance) = construct(mapper, value, map)? else {
        trace!(target = map.target().type_name, "no constructor");
        return Ok(None);
    };
    populate(mapper, value, map, instance.as_any_mut(), false, mode, ctx)?;
    Ok(Some(instance))
}

fn construct(
    mapper: &Mapper,
    value: &dyn Reflect,
    map: &TypeMap,
) -> Result<Option<Box<dyn Reflect>>, Error> {
    let target = map.target();
    if let Some(factory) = map.options().factory() {
        let instance = factory(mapper, value)?;
        if instance.reflect_type().type_id != target.type_id {
            return Err(Error::type_error(format!(
                "factory for `{:?}` returned `{}`",
                map.pair(),
                instance.reflect_type().type_name
            )));
        }
        return Ok(Some(instance));
    }
    match target.kind {
        TypeKind::Object(object) => Ok(object.construct.map(|construct| construct())),
        _ => Ok(None),
    }
}

/// Applies the matches of `map`, reading from `source` and writing into
/// `target`. With `existing`, init-only target properties are left alone.
/// Properties marked for deep cloning are deep cloned whatever `mode` is.
pub fn populate(
    mapper: &Mapper,
    source: &dyn Reflect,
    map: &TypeMap,
    target: &mut dyn Any,
    existing: bool,
    mode: CloneMode,
    ctx: &mut MapContext,
) -> Result<(), Error> {
    let source_any = source.as_any();
    for found in map.matches() {
        let target_property = found.target();
        if existing && !target_property.is_writable() {
            continue;
        }
        let Some(value) = found.source().get(source_any) else {
            continue;
        };
        let target_desc = target_property.type_desc();
        let mode = if found.is_deep_clone() {
            CloneMode::Deep
        } else {
            mode
        };
        let produced = match found.converter() {
            Some(converter) => {
                let output = converter.call(mapper, value)?;
                if output.reflect_type().type_id == target_desc.type_id {
                    Some(output)
                } else {
                    let converted = convert_value(mapper, &*output, &target_desc, mode, ctx)?;
                    if converted.is_none() {
                        trace!(
                            property = found.source().name(),
                            output = converter.output().type_name,
                            target = target_desc.type_name,
                            "converter output not convertible"
                        );
                    }
                    converted
                }
            }
            None => convert_value(mapper, value, &target_desc, mode, ctx)?,
        };
        let Some(produced) = produced else {
            trace!(
                property = found.source().name(),
                target = target_property.name(),
                "left untouched"
            );
            continue;
        };
        if let Err(err) = target_property.set(target, produced) {
            trace!(
                property = target_property.name(),
                error = %err,
                "set failed"
            );
        }
    }
    Ok(())
}
