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

//! Per type pair mapping options.
//!
//! [`MapperOptions`] is filled once, either by [`TypeMapBuilder`] inside
//! `Mapper::configure` or with defaults on first use, and is read-only from
//! then on.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::Error;
use crate::mapper::Mapper;
use crate::member::IntoPropertyName;
use crate::meta::{get_properties, Binding, PropertyDesc, TypeDesc};
use crate::reflect::{Reflect, Typed};

/// Converts the raw value of a source property into the value stored on
/// the target. Receives the owning mapper for nested mapping.
pub type Converter =
    Arc<dyn Fn(&Mapper, &dyn Reflect) -> Result<Box<dyn Reflect>, Error> + Send + Sync>;

/// Builds the target instance from the whole source value.
pub type Factory =
    Arc<dyn Fn(&Mapper, &dyn Reflect) -> Result<Box<dyn Reflect>, Error> + Send + Sync>;

/// Extra predicate over source properties; `false` leaves the property out.
pub type PropertyFilter = Arc<dyn Fn(&PropertyDesc) -> bool + Send + Sync>;

/// A converter with the output type it was declared with.
#[derive(Clone)]
pub struct ConverterEntry {
    output: TypeDesc,
    func: Converter,
}

impl ConverterEntry {
    pub fn output(&self) -> &TypeDesc {
        &self.output
    }

    pub fn call(&self, mapper: &Mapper, value: &dyn Reflect) -> Result<Box<dyn Reflect>, Error> {
        (self.func)(mapper, value)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Alias {
    pub(crate) target: String,
    /// Registration order across the options, later wins on collisions.
    pub(crate) order: u64,
}

/// Options recorded for one type pair.
#[derive(Clone, Default)]
pub struct MapperOptions {
    excluded: HashSet<String>,
    deep_cloned: HashSet<String>,
    aliases: HashMap<String, Alias>,
    converters: HashMap<String, ConverterEntry>,
    factory: Option<Factory>,
    binding: Binding,
    filter: Option<PropertyFilter>,
    next_order: u64,
}

impl MapperOptions {
    pub fn new(binding: Binding) -> Self {
        MapperOptions {
            binding,
            ..Default::default()
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn is_deep_cloned(&self, name: &str) -> bool {
        self.deep_cloned.contains(name)
    }

    /// Target name configured for the source property `name`.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(|a| a.target.as_str())
    }

    pub(crate) fn alias_entry(&self, name: &str) -> Option<&Alias> {
        self.aliases.get(name)
    }

    pub fn converter(&self, name: &str) -> Option<&ConverterEntry> {
        self.converters.get(name)
    }

    pub fn factory(&self) -> Option<&Factory> {
        self.factory.as_ref()
    }

    pub fn binding(&self) -> Binding {
        self.binding
    }

    pub fn filter(&self) -> Option<&PropertyFilter> {
        self.filter.as_ref()
    }

    fn add_alias(&mut self, source: String, target: String) {
        let order = self.next_order;
        self.next_order += 1;
        self.aliases.insert(source, Alias { target, order });
    }
}

impl fmt::Debug for MapperOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut converters: Vec<&String> = self.converters.keys().collect();
        converters.sort();
        f.debug_struct("MapperOptions")
            .field("excluded", &self.excluded)
            .field("deep_cloned", &self.deep_cloned)
            .field("aliases", &self.aliases)
            .field("converters", &converters)
            .field("factory", &self.factory.is_some())
            .field("binding", &self.binding)
            .field("filter", &self.filter.is_some())
            .finish()
    }
}

/// Typed configuration of the `S` to `T` pair, handed to
/// [`Mapper::configure`].
///
/// Property names are strings or [`member!`](crate::member!) paths. Every
/// name is validated: empty names fail with [`Error::InvalidArgument`] and
/// nested member paths with [`Error::InvalidPath`].
///
/// ```rust,ignore
/// mapper.configure::<UserDto, User>(|map| {
///     map.exclude(["password"])?
///         .with_alias(member!(UserDto, mail), member!(User, email))?
///         .with_conversion("age", |_, age: &u32| Ok(*age as u8))?;
///     Ok(())
/// })?;
/// ```
pub struct TypeMapBuilder<S, T> {
    source: TypeDesc,
    target: TypeDesc,
    options: MapperOptions,
    _marker: PhantomData<fn(&S) -> T>,
}

impl<S: Typed, T: Typed> TypeMapBuilder<S, T> {
    pub(crate) fn new(binding: Binding) -> Self {
        TypeMapBuilder {
            source: S::type_desc(),
            target: T::type_desc(),
            options: MapperOptions::new(binding),
            _marker: PhantomData,
        }
    }

    /// Never copies, converts or clones the named source properties.
    pub fn exclude<I, N>(&mut self, names: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = N>,
        N: IntoPropertyName<S>,
    {
        for name in names {
            let name = name.into_property_name(&self.source)?;
            self.options.excluded.insert(name);
        }
        Ok(self)
    }

    /// Deep clones the named source properties instead of sharing pointers.
    pub fn deep_clone<I, N>(&mut self, names: I) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = N>,
        N: IntoPropertyName<S>,
    {
        for name in names {
            let name = name.into_property_name(&self.source)?;
            self.options.deep_cloned.insert(name);
        }
        Ok(self)
    }

    /// Maps the source property `source` onto the target property `target`.
    pub fn with_alias<N, M>(&mut self, source: N, target: M) -> Result<&mut Self, Error>
    where
        N: IntoPropertyName<S>,
        M: IntoPropertyName<T>,
    {
        let source = source.into_property_name(&self.source)?;
        let target = target.into_property_name(&self.target)?;
        self.options.add_alias(source, target);
        Ok(self)
    }

    /// Produces the value of the named source property with `converter`.
    ///
    /// # Errors
    ///
    /// Besides name validation, fails with [`Error::TypeError`] when the
    /// source property exists and is not of type `V`.
    pub fn with_conversion<N, V, R, F>(&mut self, name: N, converter: F) -> Result<&mut Self, Error>
    where
        N: IntoPropertyName<S>,
        V: Typed,
        R: Typed,
        F: Fn(&Mapper, &V) -> Result<R, Error> + Send + Sync + 'static,
    {
        let name = name.into_property_name(&self.source)?;
        let input = V::type_desc();
        let declared = get_properties(&self.source, Binding::ALL_VISIBILITY, false)
            .into_iter()
            .find(|p| p.name() == name);
        if let Some(property) = declared {
            let actual = property.type_desc();
            if actual.type_id != input.type_id {
                return Err(Error::type_error(format!(
                    "converter for `{}.{}` takes `{}` but the property is `{}`",
                    self.source.short_name(),
                    name,
                    input.type_name,
                    actual.type_name
                )));
            }
        }
        let func: Converter = Arc::new(move |mapper: &Mapper, value: &dyn Reflect| -> Result<Box<dyn Reflect>, Error> {
            let value = value.as_any().downcast_ref::<V>().ok_or_else(|| {
                Error::type_error(format!(
                    "converter expected `{}`, found `{}`",
                    std::any::type_name::<V>(),
                    value.reflect_type().type_name
                ))
            })?;
            Ok(Box::new(converter(mapper, value)?) as Box<dyn Reflect>)
        });
        self.options.converters.insert(
            name,
            ConverterEntry {
                output: R::type_desc(),
                func,
            },
        );
        Ok(self)
    }

    /// Builds targets with `factory` instead of the default constructor.
    ///
    /// This is how `Box<dyn Trait>` targets and structs without `Default`
    /// are constructed. Matched properties are still populated afterwards.
    pub fn construct_using<F>(&mut self, factory: F) -> &mut Self
    where
        F: Fn(&Mapper, &S) -> Result<T, Error> + Send + Sync + 'static,
    {
        let func: Factory = Arc::new(move |mapper: &Mapper, value: &dyn Reflect| -> Result<Box<dyn Reflect>, Error> {
            let source = value.as_any().downcast_ref::<S>().ok_or_else(|| {
                Error::type_error(format!(
                    "factory expected `{}`, found `{}`",
                    std::any::type_name::<S>(),
                    value.reflect_type().type_name
                ))
            })?;
            Ok(Box::new(factory(mapper, source)?) as Box<dyn Reflect>)
        });
        self.options.factory = Some(func);
        self
    }

    pub fn binding(&self) -> Binding {
        self.options.binding
    }

    pub fn set_binding(&mut self, binding: Binding) -> &mut Self {
        self.options.binding = binding;
        self
    }

    pub fn filter(&self) -> Option<&PropertyFilter> {
        self.options.filter.as_ref()
    }

    pub fn set_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(&PropertyDesc) -> bool + Send + Sync + 'static,
    {
        self.options.filter = Some(Arc::new(filter));
        self
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    pub(crate) fn into_options(self) -> MapperOptions {
        self.options
    }
}
