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

//! Sequence containers.
//!
//! `Box<[T]>` and `Arc<[T]>` are the read-only collection shapes; a shallow
//! copy of an `Arc<[T]>` shares the slice.

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::Hash;
use std::sync::Arc;

use crate::meta::{SequenceDesc, SequenceShape, TypeDesc, TypeKind};
use crate::reflect::{downcast_value, Reflect, Typed, ValueRef};

/// Downcasts every item; `None` when any of them has another type.
fn collect_items<T: Typed, C: FromIterator<T>>(items: Vec<Box<dyn Reflect>>) -> Option<C> {
    items
        .into_iter()
        .map(|item| downcast_value::<T>(item).ok())
        .collect()
}

fn build<T: Typed, C: Typed + FromIterator<T>>(
    items: Vec<Box<dyn Reflect>>,
) -> Option<Box<dyn Reflect>> {
    let container: C = collect_items::<T, C>(items)?;
    Some(Box::new(container))
}

fn build_array<T: Typed, const N: usize>(items: Vec<Box<dyn Reflect>>) -> Option<Box<dyn Reflect>> {
    let items: Vec<T> = collect_items::<T, Vec<T>>(items)?;
    let array: [T; N] = items.try_into().ok()?;
    Some(Box::new(array))
}

macro_rules! impl_sequence {
    ($container:ident, $shape:ident $(, $bound:path)*) => {
        impl<T: Typed $(+ $bound)*> Typed for $container<T> {
            fn type_desc() -> TypeDesc {
                TypeDesc::new::<Self>(TypeKind::Sequence(SequenceDesc {
                    shape: SequenceShape::$shape,
                    element: T::type_desc,
                    build: build::<T, Self>,
                }))
            }

            fn value_ref(&self) -> ValueRef<'_> {
                ValueRef::Sequence(Box::new(self.iter().map(|v| v as &dyn Reflect)))
            }

            fn shallow_clone(&self) -> Self {
                self.iter().map(T::shallow_clone).collect()
            }

            fn deep_clone(&self) -> Self {
                self.iter().map(T::deep_clone).collect()
            }
        }
    };
}

impl_sequence!(Vec, Vec);
impl_sequence!(VecDeque, VecDeque);
impl_sequence!(LinkedList, LinkedList);
impl_sequence!(HashSet, HashSet, Eq, Hash);
impl_sequence!(BTreeSet, BTreeSet, Ord);

impl<T: Typed> Typed for Box<[T]> {
    fn type_desc() -> TypeDesc {
        TypeDesc::new::<Self>(TypeKind::Sequence(SequenceDesc {
            shape: SequenceShape::BoxedSlice,
            element: T::type_desc,
            build: build::<T, Self>,
        }))
    }

    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(Box::new(self.iter().map(|v| v as &dyn Reflect)))
    }

    fn shallow_clone(&self) -> Self {
        self.iter().map(T::shallow_clone).collect()
    }

    fn deep_clone(&self) -> Self {
        self.iter().map(T::deep_clone).collect()
    }
}

impl<T: Typed> Typed for Arc<[T]> {
    fn type_desc() -> TypeDesc {
        TypeDesc::new::<Self>(TypeKind::Sequence(SequenceDesc {
            shape: SequenceShape::SharedSlice,
            element: T::type_desc,
            build: build::<T, Self>,
        }))
    }

    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(Box::new(self.iter().map(|v| v as &dyn Reflect)))
    }

    fn shallow_clone(&self) -> Self {
        Arc::clone(self)
    }

    fn deep_clone(&self) -> Self {
        self.iter().map(T::deep_clone).collect()
    }
}

impl<T: Typed, const N: usize> Typed for [T; N] {
    fn type_desc() -> TypeDesc {
        TypeDesc::new::<Self>(TypeKind::Sequence(SequenceDesc {
            shape: SequenceShape::Array(N),
            element: T::type_desc,
            build: build_array::<T, N>,
        }))
    }

    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Sequence(Box::new(self.iter().map(|v| v as &dyn Reflect)))
    }

    fn shallow_clone(&self) -> Self {
        std::array::from_fn(|i| self[i].shallow_clone())
    }

    fn deep_clone(&self) -> Self {
        std::array::from_fn(|i| self[i].deep_clone())
    }
}
