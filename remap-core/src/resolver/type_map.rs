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

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::config::Config;
use crate::error::Error;
use crate::meta::TypeDesc;
use crate::reflect::Typed;
use crate::resolver::matcher::{match_properties, PropertyMatch};
use crate::resolver::options::MapperOptions;

/// Ordered (source, target) pair identifying one mapping.
///
/// Equality and hashing use the type ids only; the names are carried for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct TypePair {
    source: TypeId,
    target: TypeId,
    source_name: &'static str,
    target_name: &'static str,
}

impl TypePair {
    pub fn new(source: &TypeDesc, target: &TypeDesc) -> TypePair {
        TypePair {
            source: source.type_id,
            target: target.type_id,
            source_name: source.type_name,
            target_name: target.type_name,
        }
    }

    pub fn of<S: Typed, T: Typed>() -> TypePair {
        TypePair {
            source: TypeId::of::<S>(),
            target: TypeId::of::<T>(),
            source_name: std::any::type_name::<S>(),
            target_name: std::any::type_name::<T>(),
        }
    }

    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    pub fn target_name(&self) -> &'static str {
        self.target_name
    }
}

impl PartialEq for TypePair {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for TypePair {}

impl Hash for TypePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Debug for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source_name, self.target_name)
    }
}

/// Options and resolved property matches of one type pair.
pub struct TypeMap {
    pair: TypePair,
    source: TypeDesc,
    target: TypeDesc,
    options: MapperOptions,
    matches: Vec<PropertyMatch>,
    explicit: bool,
}

impl TypeMap {
    pub(crate) fn build(
        source: TypeDesc,
        target: TypeDesc,
        options: MapperOptions,
        explicit: bool,
        resolver: &TypeMapResolver,
        config: &Config,
    ) -> Result<TypeMap, Error> {
        let matches = match_properties(&source, &target, &options, config, resolver)?;
        Ok(TypeMap {
            pair: TypePair::new(&source, &target),
            source,
            target,
            options,
            matches,
            explicit,
        })
    }

    pub fn pair(&self) -> &TypePair {
        &self.pair
    }

    pub fn source(&self) -> &TypeDesc {
        &self.source
    }

    pub fn target(&self) -> &TypeDesc {
        &self.target
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    pub fn matches(&self) -> &[PropertyMatch] {
        &self.matches
    }

    /// Whether the pair came from `Mapper::configure` rather than first use.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }
}

impl fmt::Debug for TypeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMap")
            .field("pair", &self.pair)
            .field("explicit", &self.explicit)
            .field("options", &self.options)
            .field("matches", &self.matches)
            .finish()
    }
}

/// Concurrent cache of type maps, one entry per type pair.
///
/// Entries are never replaced. Matching runs before the entry is locked, so
/// building one pair may consult the others.
#[derive(Default)]
pub struct TypeMapResolver {
    maps: DashMap<TypePair, Arc<TypeMap>>,
}

impl TypeMapResolver {
    pub fn get(&self, pair: &TypePair) -> Option<Arc<TypeMap>> {
        self.maps.get(pair).map(|entry| Arc::clone(entry.value()))
    }

    pub fn contains(&self, pair: &TypePair) -> bool {
        self.maps.contains_key(pair)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub(crate) fn has_factory(&self, source: &TypeDesc, target: &TypeDesc) -> bool {
        self.maps
            .get(&TypePair::new(source, target))
            .is_some_and(|entry| entry.options().factory().is_some())
    }

    /// Inserts an explicitly configured map.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateConfiguration`] when the pair already has a map,
    /// explicit or implicit.
    pub(crate) fn register(&self, map: TypeMap) -> Result<Arc<TypeMap>, Error> {
        let pair = map.pair;
        match self.maps.entry(pair) {
            Entry::Occupied(_) => Err(Error::duplicate_configuration(
                pair.source_name,
                pair.target_name,
            )),
            Entry::Vacant(vacant) => {
                let map = Arc::new(map);
                vacant.insert(Arc::clone(&map));
                debug!(
                    pair = ?pair,
                    matches = map.matches.len(),
                    "configured type pair"
                );
                Ok(map)
            }
        }
    }

    /// Returns the map of the pair, building it with default options on
    /// first use. Concurrent first uses agree on a single map.
    pub(crate) fn get_or_register(
        &self,
        source: &TypeDesc,
        target: &TypeDesc,
        config: &Config,
    ) -> Result<Arc<TypeMap>, Error> {
        let pair = TypePair::new(source, target);
        if let Some(map) = self.get(&pair) {
            return Ok(map);
        }
        let built = TypeMap::build(
            *source,
            *target,
            MapperOptions::new(config.default_binding()),
            false,
            self,
            config,
        )?;
        match self.maps.entry(pair) {
            Entry::Occupied(occupied) => Ok(Arc::clone(occupied.get())),
            Entry::Vacant(vacant) => {
                let map = Arc::new(built);
                vacant.insert(Arc::clone(&map));
                debug!(
                    pair = ?pair,
                    matches = map.matches.len(),
                    "auto-configured type pair"
                );
                Ok(map)
            }
        }
    }
}
