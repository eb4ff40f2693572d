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

use std::any::Any;
use std::fmt;

use crate::error::Error;
use crate::meta::TypeDesc;
use crate::reflect::Reflect;

/// Declared visibility of a field, as written in the struct definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// `pub`
    Public,
    /// `pub(crate)`
    Crate,
    /// `pub(super)` and `pub(in path)`
    Restricted,
    /// no modifier, or `pub(self)`
    Private,
}

/// Generated field accessors. Each function downcasts the owner and fails
/// (or returns `None`) when handed a value of another type.
#[derive(Clone, Copy)]
pub struct Accessor {
    pub get: fn(&dyn Any) -> Option<&dyn Reflect>,
    pub get_mut: fn(&mut dyn Any) -> Option<&mut dyn Reflect>,
    pub set: fn(&mut dyn Any, Box<dyn Reflect>) -> Result<(), Error>,
}

impl Accessor {
    pub fn new(
        get: fn(&dyn Any) -> Option<&dyn Reflect>,
        get_mut: fn(&mut dyn Any) -> Option<&mut dyn Reflect>,
        set: fn(&mut dyn Any, Box<dyn Reflect>) -> Result<(), Error>,
    ) -> Accessor {
        Accessor { get, get_mut, set }
    }
}

/// Descriptor of one reflected property.
///
/// Properties of a flattened field are reported on the outer type with
/// `inherited` set; `path` holds the accessors leading from the outer value
/// to the value that declares the property.
#[derive(Clone)]
pub struct PropertyDesc {
    name: &'static str,
    field_name: &'static str,
    declaring_type: &'static str,
    type_desc: fn() -> TypeDesc,
    visibility: Visibility,
    readable: bool,
    writable: bool,
    init_only: bool,
    flatten: bool,
    inherited: bool,
    accessor: Accessor,
    path: Vec<Accessor>,
}

impl PropertyDesc {
    pub fn new(
        name: &'static str,
        field_name: &'static str,
        declaring_type: &'static str,
        type_desc: fn() -> TypeDesc,
        visibility: Visibility,
        accessor: Accessor,
    ) -> PropertyDesc {
        PropertyDesc {
            name,
            field_name,
            declaring_type,
            type_desc,
            visibility,
            readable: true,
            writable: true,
            init_only: false,
            flatten: false,
            inherited: false,
            accessor,
            path: Vec::new(),
        }
    }

    pub fn with_access(mut self, readable: bool, writable: bool, init_only: bool) -> Self {
        self.readable = readable;
        self.writable = writable;
        self.init_only = init_only;
        self
    }

    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    pub(crate) fn inherited_through(mut self, hops: &[Accessor]) -> Self {
        let mut path = hops.to_vec();
        path.append(&mut self.path);
        self.path = path;
        self.inherited = true;
        self
    }

    /// Mapping name of the property; differs from the field name when renamed.
    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    #[inline(always)]
    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    #[inline(always)]
    pub fn type_desc(&self) -> TypeDesc {
        (self.type_desc)()
    }

    #[inline(always)]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline(always)]
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    #[inline(always)]
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    #[inline(always)]
    pub fn is_init_only(&self) -> bool {
        self.init_only
    }

    #[inline(always)]
    pub fn is_flatten(&self) -> bool {
        self.flatten
    }

    #[inline(always)]
    pub fn is_inherited(&self) -> bool {
        self.inherited
    }

    pub(crate) fn accessor(&self) -> Accessor {
        self.accessor
    }

    /// Reads the property from `owner`, the value of the reflected type.
    pub fn get<'a>(&self, owner: &'a dyn Any) -> Option<&'a dyn Reflect> {
        let mut current = owner;
        for hop in &self.path {
            current = (hop.get)(current)?.as_any();
        }
        (self.accessor.get)(current)
    }

    /// Writes `value` into the property of `owner`.
    ///
    /// Fails with a type error when `value` is not of the declared type.
    pub fn set(&self, owner: &mut dyn Any, value: Box<dyn Reflect>) -> Result<(), Error> {
        let mut current = owner;
        for hop in &self.path {
            current = (hop.get_mut)(current)
                .ok_or_else(|| {
                    Error::type_error(format!(
                        "cannot reach `{}` through a value of another type",
                        self.name
                    ))
                })?
                .as_any_mut();
        }
        (self.accessor.set)(current, value)
    }
}

impl fmt::Debug for PropertyDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDesc")
            .field("name", &self.name)
            .field("type", &self.type_desc().type_name)
            .field("declaring_type", &self.declaring_type)
            .field("visibility", &self.visibility)
            .field("readable", &self.readable)
            .field("writable", &self.writable)
            .field("init_only", &self.init_only)
            .field("inherited", &self.inherited)
            .finish()
    }
}
