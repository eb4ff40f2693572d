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

//! Owning and shared pointers.
//!
//! `Rc` and `Arc` carry reference identity: a shallow clone shares the
//! allocation (`Rc::ptr_eq` holds), a deep clone allocates a new one.

use std::rc::Rc;
use std::sync::Arc;

use crate::meta::{PointerDesc, PointerShape, TypeDesc, TypeKind};
use crate::reflect::{downcast_value, Reflect, Typed, ValueRef};

macro_rules! impl_pointer {
    ($pointer:ident, $shape:ident, |$this:ident| $shallow:expr) => {
        impl<T: Typed> Typed for $pointer<T> {
            fn type_desc() -> TypeDesc {
                fn wrap<T: Typed>(value: Box<dyn Reflect>) -> Option<Box<dyn Reflect>> {
                    let value = downcast_value::<T>(value).ok()?;
                    Some(Box::new($pointer::new(value)))
                }
                TypeDesc::new::<Self>(TypeKind::Pointer(PointerDesc {
                    shape: PointerShape::$shape,
                    inner: T::type_desc,
                    wrap: wrap::<T>,
                }))
            }

            #[inline(always)]
            fn value_ref(&self) -> ValueRef<'_> {
                ValueRef::Pointer(&**self as &dyn Reflect)
            }

            fn shallow_clone(&self) -> Self {
                let $this = self;
                $shallow
            }

            fn deep_clone(&self) -> Self {
                $pointer::new((**self).deep_clone())
            }
        }
    };
}

impl_pointer!(Box, Box, |this| Box::new((**this).shallow_clone()));
impl_pointer!(Rc, Rc, |this| Rc::clone(this));
impl_pointer!(Arc, Arc, |this| Arc::clone(this));
