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

use crate::meta::{OptionDesc, TypeDesc, TypeKind};
use crate::reflect::{downcast_value, Reflect, Typed, ValueRef};

fn none_of<T: Typed>() -> Box<dyn Reflect> {
    Box::new(None::<T>)
}

fn some_of<T: Typed>(value: Box<dyn Reflect>) -> Option<Box<dyn Reflect>> {
    let value = downcast_value::<T>(value).ok()?;
    Some(Box::new(Some(value)))
}

impl<T: Typed> Typed for Option<T> {
    fn type_desc() -> TypeDesc {
        TypeDesc::new::<Self>(TypeKind::Option(OptionDesc {
            inner: T::type_desc,
            none: none_of::<T>,
            some: some_of::<T>,
        }))
    }

    #[inline(always)]
    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Option(self.as_ref().map(|v| v as &dyn Reflect))
    }

    fn shallow_clone(&self) -> Self {
        self.as_ref().map(T::shallow_clone)
    }

    fn deep_clone(&self) -> Self {
        self.as_ref().map(T::deep_clone)
    }
}
