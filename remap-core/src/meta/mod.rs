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

//! Static type descriptors.
//!
//! A [`TypeDesc`] is what the mapper knows about a type: its identity, its
//! name and the shape of its values. Nested descriptors are stored as
//! `fn() -> TypeDesc` so that recursive types can describe themselves.

mod binding;
mod property;
pub mod reflector;

use std::any::{type_name, TypeId};
use std::fmt;

use crate::reflect::{Reflect, Typed};

pub use binding::Binding;
pub use property::{Accessor, PropertyDesc, Visibility};
pub use reflector::get_properties;

/// Descriptor of one mappable type.
#[derive(Clone, Copy)]
pub struct TypeDesc {
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub kind: TypeKind,
}

impl TypeDesc {
    pub fn new<T: ?Sized + 'static>(kind: TypeKind) -> TypeDesc {
        TypeDesc {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            kind,
        }
    }

    #[inline(always)]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    #[inline(always)]
    pub fn is_object(&self) -> bool {
        matches!(self.kind, TypeKind::Object(_))
    }

    #[inline(always)]
    pub fn is_option(&self) -> bool {
        matches!(self.kind, TypeKind::Option(_))
    }

    /// Type name without its module path, for diagnostics. Generic types
    /// keep their full name.
    pub fn short_name(&self) -> &'static str {
        if self.type_name.contains('<') {
            return self.type_name;
        }
        match self.type_name.rfind("::") {
            Some(pos) => &self.type_name[pos + 2..],
            None => self.type_name,
        }
    }
}

impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeDesc {}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDesc")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// Shape of the values of a type.
#[derive(Clone, Copy)]
pub enum TypeKind {
    Scalar(ScalarKind),
    Enum(EnumDesc),
    Option(OptionDesc),
    Sequence(SequenceDesc),
    Map(MapDesc),
    Pointer(PointerDesc),
    /// A `Box<dyn Trait>` registered through `register_trait_type!`.
    Abstract(AbstractDesc),
    Object(ObjectDesc),
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Scalar(kind) => write!(f, "Scalar({kind:?})"),
            TypeKind::Enum(desc) => write!(f, "Enum({} variants)", desc.variants.len()),
            TypeKind::Option(_) => write!(f, "Option"),
            TypeKind::Sequence(desc) => write!(f, "Sequence({:?})", desc.shape),
            TypeKind::Map(desc) => write!(f, "Map({:?})", desc.shape),
            TypeKind::Pointer(desc) => write!(f, "Pointer({:?})", desc.shape),
            TypeKind::Abstract(desc) => write!(f, "Abstract(dyn {})", desc.trait_name),
            TypeKind::Object(desc) => write!(f, "Object(constructible: {})", desc.construct.is_some()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Unit,
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Text,
    Date,
    Time,
    DateTime,
    Timestamp,
    Duration,
}

impl ScalarKind {
    pub fn is_signed(self) -> bool {
        use ScalarKind::*;
        matches!(self, I8 | I16 | I32 | I64 | I128 | Isize)
    }

    pub fn is_unsigned(self) -> bool {
        use ScalarKind::*;
        matches!(self, U8 | U16 | U32 | U64 | U128 | Usize)
    }

    pub fn is_integer(self) -> bool {
        self.is_signed() || self.is_unsigned()
    }

    pub fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }

    pub fn is_number(self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_temporal(self) -> bool {
        use ScalarKind::*;
        matches!(self, Date | Time | DateTime | Timestamp)
    }
}

/// One variant of a fieldless enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumVariant {
    pub name: &'static str,
    pub discriminant: i64,
}

impl EnumVariant {
    pub const fn new(name: &'static str, discriminant: i64) -> EnumVariant {
        EnumVariant { name, discriminant }
    }
}

#[derive(Clone, Copy)]
pub struct EnumDesc {
    pub variants: &'static [EnumVariant],
    /// Builds the variant at the given declaration index.
    pub from_index: fn(usize) -> Option<Box<dyn Reflect>>,
}

impl EnumDesc {
    pub const fn new(
        variants: &'static [EnumVariant],
        from_index: fn(usize) -> Option<Box<dyn Reflect>>,
    ) -> EnumDesc {
        EnumDesc {
            variants,
            from_index,
        }
    }

    pub fn from_name(&self, name: &str) -> Option<Box<dyn Reflect>> {
        let index = self.variants.iter().position(|v| v.name == name)?;
        (self.from_index)(index)
    }

    pub fn from_discriminant(&self, discriminant: i64) -> Option<Box<dyn Reflect>> {
        let index = self
            .variants
            .iter()
            .position(|v| v.discriminant == discriminant)?;
        (self.from_index)(index)
    }
}

#[derive(Clone, Copy)]
pub struct OptionDesc {
    pub inner: fn() -> TypeDesc,
    pub none: fn() -> Box<dyn Reflect>,
    /// Wraps a value of the inner type; `None` when the value has another type.
    pub some: fn(Box<dyn Reflect>) -> Option<Box<dyn Reflect>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceShape {
    Vec,
    VecDeque,
    LinkedList,
    HashSet,
    BTreeSet,
    BoxedSlice,
    SharedSlice,
    Array(usize),
}

#[derive(Clone, Copy)]
pub struct SequenceDesc {
    pub shape: SequenceShape,
    pub element: fn() -> TypeDesc,
    /// Collects converted elements into the container.
    pub build: fn(Vec<Box<dyn Reflect>>) -> Option<Box<dyn Reflect>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapShape {
    HashMap,
    BTreeMap,
}

#[derive(Clone, Copy)]
pub struct MapDesc {
    pub shape: MapShape,
    pub key: fn() -> TypeDesc,
    pub value: fn() -> TypeDesc,
    pub build: fn(Vec<(Box<dyn Reflect>, Box<dyn Reflect>)>) -> Option<Box<dyn Reflect>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerShape {
    Box,
    Rc,
    Arc,
}

#[derive(Clone, Copy)]
pub struct PointerDesc {
    pub shape: PointerShape,
    pub inner: fn() -> TypeDesc,
    pub wrap: fn(Box<dyn Reflect>) -> Option<Box<dyn Reflect>>,
}

#[derive(Clone, Copy)]
pub struct AbstractDesc {
    pub trait_name: &'static str,
    /// Descriptors of the registered implementations.
    pub implementors: fn() -> Vec<TypeDesc>,
    /// Boxes a registered implementation as the trait object.
    pub wrap: fn(Box<dyn Reflect>) -> Option<Box<dyn Reflect>>,
}

impl AbstractDesc {
    pub fn new(
        trait_name: &'static str,
        implementors: fn() -> Vec<TypeDesc>,
        wrap: fn(Box<dyn Reflect>) -> Option<Box<dyn Reflect>>,
    ) -> AbstractDesc {
        AbstractDesc {
            trait_name,
            implementors,
            wrap,
        }
    }

    pub fn is_implemented_by(&self, type_id: TypeId) -> bool {
        (self.implementors)().iter().any(|d| d.type_id == type_id)
    }
}

#[derive(Clone, Copy)]
pub struct ObjectDesc {
    /// Declared properties in declaration order, flattened fields unexpanded.
    pub properties: fn() -> Vec<PropertyDesc>,
    /// Parameterless constructor; `None` for types built only through a factory.
    pub construct: Option<fn() -> Box<dyn Reflect>>,
}

impl ObjectDesc {
    pub fn new(
        properties: fn() -> Vec<PropertyDesc>,
        construct: Option<fn() -> Box<dyn Reflect>>,
    ) -> ObjectDesc {
        ObjectDesc {
            properties,
            construct,
        }
    }

    pub fn default_constructor<T: Typed + Default>() -> Box<dyn Reflect> {
        Box::new(T::default())
    }
}
