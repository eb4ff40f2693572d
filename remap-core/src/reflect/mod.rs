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

//! Runtime view of mappable values.
//!
//! [`Typed`] is the static side: implemented once per type, by
//! `#[derive(Mappable)]` for user structs and enums, by this module for
//! standard library and chrono types, and by [`register_trait_type!`] for
//! `Box<dyn Trait>`. [`Reflect`] is its object-safe counterpart, implemented
//! for every `Typed` type, through which the mapper handles values whose
//! type is only known at runtime.
//!
//! [`register_trait_type!`]: crate::register_trait_type

mod collection;
mod map;
mod option;
mod pointer;
mod scalar;
pub mod trait_object;

use std::any::Any;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::Error;
use crate::meta::TypeDesc;

/// A type the mapper can describe, read and clone.
pub trait Typed: Any + Sized {
    /// Static descriptor of the type.
    fn type_desc() -> TypeDesc;

    /// Dynamic view of this value.
    fn value_ref(&self) -> ValueRef<'_>;

    /// Copies the value, sharing whatever `Rc`/`Arc` pointers it holds.
    fn shallow_clone(&self) -> Self;

    /// Copies the value recursively; no pointer is shared with `self`.
    fn deep_clone(&self) -> Self;
}

/// Object-safe access to a [`Typed`] value.
pub trait Reflect: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn as_reflect(&self) -> &dyn Reflect;

    fn reflect_type(&self) -> TypeDesc;

    fn value(&self) -> ValueRef<'_>;

    fn clone_value(&self) -> Box<dyn Reflect>;

    fn deep_clone_value(&self) -> Box<dyn Reflect>;
}

impl<T: Typed> Reflect for T {
    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    #[inline(always)]
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect {
        self
    }

    #[inline(always)]
    fn reflect_type(&self) -> TypeDesc {
        T::type_desc()
    }

    #[inline(always)]
    fn value(&self) -> ValueRef<'_> {
        self.value_ref()
    }

    fn clone_value(&self) -> Box<dyn Reflect> {
        Box::new(self.shallow_clone())
    }

    fn deep_clone_value(&self) -> Box<dyn Reflect> {
        Box::new(self.deep_clone())
    }
}

/// Unboxes a reflected value into `T`.
///
/// # Errors
///
/// Returns [`Error::TypeError`] naming both types when `value` is not a `T`.
pub fn downcast_value<T: Typed>(value: Box<dyn Reflect>) -> Result<T, Error> {
    let actual = value.reflect_type().type_name;
    match value.into_any().downcast::<T>() {
        Ok(value) => Ok(*value),
        Err(_) => Err(Error::type_error(format!(
            "expected a value of type `{}`, found `{}`",
            std::any::type_name::<T>(),
            actual
        ))),
    }
}

/// Borrowed view of a value, by shape.
pub enum ValueRef<'a> {
    Scalar(Scalar<'a>),
    Enum(EnumValue),
    Option(Option<&'a dyn Reflect>),
    Sequence(Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>),
    Map(Box<dyn Iterator<Item = (&'a dyn Reflect, &'a dyn Reflect)> + 'a>),
    Pointer(&'a dyn Reflect),
    /// The concrete value behind a trait object.
    Abstract(&'a dyn Reflect),
    /// A struct; its properties are reached through its descriptor.
    Object,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Unit,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Text(&'a str),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    Duration(std::time::Duration),
}

/// The variant a fieldless enum value holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub index: usize,
    pub name: &'static str,
    pub discriminant: i64,
}
