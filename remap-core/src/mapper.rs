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
use std::sync::Arc;

use crate::config::Config;
use crate::ensure;
use crate::error::Error;
use crate::executor::{convert_value, map_object, populate, CloneMode};
use crate::meta::{Binding, TypeDesc, TypeKind};
use crate::reflect::{downcast_value, Reflect, Typed, ValueRef};
use crate::resolver::{MapContext, PropertyMatch, TypeMap, TypeMapBuilder, TypeMapResolver, TypePair};

/// The object mapper.
///
/// `Mapper` copies the properties of one value onto a value of another type,
/// matching properties by name. Each (source, target) type pair is resolved
/// once, either explicitly through [`Mapper::configure`] or on first use
/// with default options, and cached for the lifetime of the mapper.
///
/// # Features
///
/// - **Implicit configuration**: unrelated types map by property name without setup
/// - **Conversions**: numeric widening and narrowing, enums, options, pointers, collections
/// - **Nested objects**: object-valued properties map recursively through their own type pair
/// - **Shallow by default**: `Rc`/`Arc` values are shared unless deep cloning is requested
/// - **Thread safe**: `Mapper` is `Send + Sync`; share it behind an `Arc`
///
/// # Examples
///
/// ```rust, ignore
/// use remap::{Mappable, Mapper};
///
/// #[derive(Mappable, Default)]
/// struct UserDto { name: String, age: u32 }
///
/// #[derive(Mappable, Default)]
/// struct User { name: String, age: u64 }
///
/// let mapper = Mapper::default();
/// let user: User = mapper.map(&UserDto { name: "Alice".into(), age: 30 })?;
/// assert_eq!(user.age, 30);
/// ```
///
/// Custom configuration:
///
/// ```rust
/// use remap_core::mapper::Mapper;
///
/// let mapper = Mapper::default()
///     .max_depth(16)
///     .strict_aliases(true);
/// ```
#[derive(Default)]
pub struct Mapper {
    config: Config,
    resolver: TypeMapResolver,
}

impl Mapper {
    pub fn with_config(config: Config) -> Self {
        Mapper {
            config,
            resolver: TypeMapResolver::default(),
        }
    }

    /// Sets the maximum depth of nested objects mapped within one call.
    ///
    /// # Default
    ///
    /// The default value is `64`. Exceeding it fails the call with
    /// [`Error::DepthExceed`].
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Makes two source properties mapping to the same target property a
    /// configuration error.
    ///
    /// # Default
    ///
    /// The default value is `false`: the later registered alias wins, and an
    /// alias wins over a plain name match.
    pub fn strict_aliases(mut self, strict_aliases: bool) -> Self {
        self.config.strict_aliases = strict_aliases;
        self
    }

    /// Sets the binding of type pairs that do not configure their own.
    pub fn default_binding(mut self, binding: Binding) -> Self {
        self.config.default_binding = binding;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &TypeMapResolver {
        &self.resolver
    }

    /// Configures the mapping from `S` to `T`.
    ///
    /// The builder closure records exclusions, deep clones, aliases,
    /// converters, a factory, the binding and a filter. Property matches are
    /// computed when the closure returns.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateConfiguration`] when the pair was configured
    ///   before, or already mapped with default options.
    /// - Any error returned by the closure, such as invalid names.
    /// - [`Error::InvalidArgument`] for alias collisions with strict aliases.
    ///
    /// # Examples
    ///
    /// ```rust, ignore
    /// mapper.configure::<OrderDto, Order>(|map| {
    ///     map.exclude(["internal_id"])?
    ///         .with_alias("customer", "buyer")?;
    ///     Ok(())
    /// })?;
    /// ```
    pub fn configure<S, T>(
        &self,
        configure: impl FnOnce(&mut TypeMapBuilder<S, T>) -> Result<(), Error>,
    ) -> Result<(), Error>
    where
        S: Typed,
        T: Typed,
    {
        let pair = TypePair::of::<S, T>();
        if self.resolver.contains(&pair) {
            return Err(Error::duplicate_configuration(
                pair.source_name(),
                pair.target_name(),
            ));
        }
        let mut builder = TypeMapBuilder::<S, T>::new(self.config.default_binding());
        configure(&mut builder)?;
        let map = TypeMap::build(
            S::type_desc(),
            T::type_desc(),
            builder.into_options(),
            true,
            &self.resolver,
            &self.config,
        )?;
        self.resolver.register(map)?;
        Ok(())
    }

    /// Maps `source` onto a new `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] when `source` is `None` and `T` is not an option.
    /// - [`Error::Construction`] when `T` has no default constructor and no factory.
    /// - [`Error::Unsupported`] when `S` cannot be converted to `T` at all.
    pub fn map<S: Typed, T: Typed>(&self, source: &S) -> Result<T, Error> {
        let value = self.map_to(source, &T::type_desc())?;
        downcast_value::<T>(value)
    }

    /// Maps a value whose type is only known at runtime onto a new `T`.
    pub fn map_dyn<T: Typed>(&self, source: &dyn Reflect) -> Result<T, Error> {
        let value = self.map_to(source, &T::type_desc())?;
        downcast_value::<T>(value)
    }

    /// Maps `source` onto a new value of the type described by `target`.
    pub fn map_to(&self, source: &dyn Reflect, target: &TypeDesc) -> Result<Box<dyn Reflect>, Error> {
        let source = unwrap_root(source, target)?;
        let source_desc = source.reflect_type();
        let mut ctx = MapContext::new(self.config.max_depth());
        if source_desc.is_object() && target.is_object() {
            let map = self
                .resolver
                .get_or_register(&source_desc, target, &self.config)?;
            return map_object(self, source, &map, CloneMode::Shallow, &mut ctx)?.ok_or_else(|| {
                Error::construction(format!(
                    "`{}` has no default constructor; register one with `construct_using` \
                     for the pair `{}` -> `{}`",
                    target.type_name, source_desc.type_name, target.type_name
                ))
            });
        }
        convert_value(self, source, target, CloneMode::Shallow, &mut ctx)?.ok_or_else(|| {
            Error::unsupported(format!(
                "cannot map `{}` to `{}`",
                source_desc.type_name, target.type_name
            ))
        })
    }

    /// Maps `source` onto the existing `target`, leaving unmatched and
    /// init-only properties untouched. An `Option`, pointer or trait object
    /// source is populated from the value it holds.
    ///
    /// # Errors
    ///
    /// - [`Error::Unsupported`] when `T`, or the value `source` holds, is not an object type.
    /// - [`Error::InvalidArgument`] when `source` is `None`.
    pub fn map_into<S: Typed, T: Typed>(&self, source: &S, target: &mut T) -> Result<(), Error> {
        let target_desc = T::type_desc();
        ensure!(
            target_desc.is_object(),
            Error::unsupported(format!(
                "cannot populate `{}`: not an object type",
                target_desc.type_name
            ))
        );
        let source = unwrap_root(source, &target_desc)?;
        let source_desc = source.reflect_type();
        ensure!(
            source_desc.is_object(),
            Error::unsupported(format!(
                "cannot populate `{}` from `{}`: not an object type",
                target_desc.type_name, source_desc.type_name
            ))
        );
        let map = self
            .resolver
            .get_or_register(&source_desc, &target_desc, &self.config)?;
        let mut ctx = MapContext::new(self.config.max_depth());
        ctx.inc_depth()?;
        let result = populate(
            self,
            source,
            &map,
            target as &mut dyn Any,
            true,
            CloneMode::Shallow,
            &mut ctx,
        );
        ctx.dec_depth();
        result
    }

    /// Maps every source onto a new `T`, failing on the first error.
    pub fn map_many<'a, S, T, I>(&self, sources: I) -> Result<Vec<T>, Error>
    where
        S: Typed,
        T: Typed,
        I: IntoIterator<Item = &'a S>,
    {
        sources.into_iter().map(|source| self.map(source)).collect()
    }

    /// Whether the pair has a type map, explicit or implicit.
    pub fn is_configured<S: Typed, T: Typed>(&self) -> bool {
        self.resolver.contains(&TypePair::of::<S, T>())
    }

    pub fn type_map<S: Typed, T: Typed>(&self) -> Option<Arc<TypeMap>> {
        self.resolver.get(&TypePair::of::<S, T>())
    }

    /// Property matches of the pair, configuring it with defaults if needed.
    pub fn property_matches<S: Typed, T: Typed>(&self) -> Result<Vec<PropertyMatch>, Error> {
        let map = self
            .resolver
            .get_or_register(&S::type_desc(), &T::type_desc(), &self.config)?;
        Ok(map.matches().to_vec())
    }
}

/// Looks through the options, pointers and trait objects around a root
/// source, down to the value that is mapped onto `target`. Wrappers of the
/// target's own shape are kept.
fn unwrap_root<'a>(source: &'a dyn Reflect, target: &TypeDesc) -> Result<&'a dyn Reflect, Error> {
    let mut current = source;
    loop {
        let current_desc = current.reflect_type();
        if current_desc.type_id == target.type_id {
            return Ok(current);
        }
        current = match (current.value(), target.kind) {
            (_, TypeKind::Option(_)) => return Ok(current),
            (ValueRef::Option(None), _) => {
                return Err(Error::invalid_argument(format!(
                    "cannot map `None` of `{}` to `{}`",
                    current_desc.type_name, target.type_name
                )))
            }
            (ValueRef::Option(Some(inner)), _) => inner,
            (_, TypeKind::Pointer(_)) => return Ok(current),
            (ValueRef::Pointer(inner), _) => inner,
            (_, TypeKind::Abstract(_)) => return Ok(current),
            (ValueRef::Abstract(inner), _) => inner,
            _ => return Ok(current),
        };
    }
}
