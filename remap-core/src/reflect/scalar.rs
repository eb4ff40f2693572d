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

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::meta::{ScalarKind, TypeDesc, TypeKind};
use crate::reflect::{Scalar, Typed, ValueRef};

macro_rules! impl_copy_scalar {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_desc() -> TypeDesc {
                    TypeDesc::new::<$ty>(TypeKind::Scalar(ScalarKind::$kind))
                }

                #[inline(always)]
                fn value_ref(&self) -> ValueRef<'_> {
                    ValueRef::Scalar(Scalar::$kind(*self))
                }

                #[inline(always)]
                fn shallow_clone(&self) -> Self {
                    *self
                }

                #[inline(always)]
                fn deep_clone(&self) -> Self {
                    *self
                }
            }
        )+
    };
}

impl_copy_scalar!(
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => DateTime,
    DateTime<Utc> => Timestamp,
    Duration => Duration,
);

impl Typed for () {
    fn type_desc() -> TypeDesc {
        TypeDesc::new::<()>(TypeKind::Scalar(ScalarKind::Unit))
    }

    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Scalar(Scalar::Unit)
    }

    fn shallow_clone(&self) -> Self {}

    fn deep_clone(&self) -> Self {}
}

impl Typed for String {
    fn type_desc() -> TypeDesc {
        TypeDesc::new::<String>(TypeKind::Scalar(ScalarKind::Text))
    }

    #[inline(always)]
    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Scalar(Scalar::Text(self.as_str()))
    }

    fn shallow_clone(&self) -> Self {
        self.clone()
    }

    fn deep_clone(&self) -> Self {
        self.clone()
    }
}
