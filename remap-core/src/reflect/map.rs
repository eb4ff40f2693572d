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

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::meta::{MapDesc, MapShape, TypeDesc, TypeKind};
use crate::reflect::{downcast_value, Reflect, Typed, ValueRef};

fn build<K: Typed, V: Typed, C: Typed + FromIterator<(K, V)>>(
    entries: Vec<(Box<dyn Reflect>, Box<dyn Reflect>)>,
) -> Option<Box<dyn Reflect>> {
    let map: C = entries
        .into_iter()
        .map(|(k, v)| Some((downcast_value::<K>(k).ok()?, downcast_value::<V>(v).ok()?)))
        .collect::<Option<C>>()?;
    Some(Box::new(map))
}

macro_rules! impl_map {
    ($container:ident, $shape:ident $(, $bound:path)*) => {
        impl<K: Typed $(+ $bound)*, V: Typed> Typed for $container<K, V> {
            fn type_desc() -> TypeDesc {
                TypeDesc::new::<Self>(TypeKind::Map(MapDesc {
                    shape: MapShape::$shape,
                    key: K::type_desc,
                    value: V::type_desc,
                    build: build::<K, V, Self>,
                }))
            }

            fn value_ref(&self) -> ValueRef<'_> {
                ValueRef::Map(Box::new(
                    self.iter()
                        .map(|(k, v)| (k as &dyn Reflect, v as &dyn Reflect)),
                ))
            }

            fn shallow_clone(&self) -> Self {
                self.iter()
                    .map(|(k, v)| (k.shallow_clone(), v.shallow_clone()))
                    .collect()
            }

            fn deep_clone(&self) -> Self {
                self.iter()
                    .map(|(k, v)| (k.deep_clone(), v.deep_clone()))
                    .collect()
            }
        }
    };
}

impl_map!(HashMap, HashMap, Eq, Hash);
impl_map!(BTreeMap, BTreeMap, Ord);
