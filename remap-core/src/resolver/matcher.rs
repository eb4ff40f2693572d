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

//! Property matching for one type pair.
//!
//! A source property matches when it is readable, not excluded, accepted by
//! the filter, and a target property carrying its effective name (the alias,
//! or its own name) is writable and either has a converter or a convertible
//! type. Everything else is skipped without error.
//!
//! When two source properties land on the same target, the later registered
//! alias wins and an alias beats a plain name match. With strict aliases the
//! collision is a configuration error instead.

use std::fmt;

use tracing::trace;

use crate::config::Config;
use crate::convert::can_convert;
use crate::error::Error;
use crate::meta::{get_properties, PropertyDesc, TypeDesc};
use crate::resolver::options::{ConverterEntry, MapperOptions};
use crate::resolver::TypeMapResolver;

/// One resolved correspondence between a source and a target property.
#[derive(Clone)]
pub struct PropertyMatch {
    source: PropertyDesc,
    target: PropertyDesc,
    alias: Option<String>,
    alias_order: Option<u64>,
    deep_clone: bool,
    converter: Option<ConverterEntry>,
}

impl PropertyMatch {
    pub fn source(&self) -> &PropertyDesc {
        &self.source
    }

    pub fn target(&self) -> &PropertyDesc {
        &self.target
    }

    /// Target name configured through `with_alias`, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn is_deep_clone(&self) -> bool {
        self.deep_clone
    }

    pub fn converter(&self) -> Option<&ConverterEntry> {
        self.converter.as_ref()
    }
}

impl fmt::Debug for PropertyMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMatch")
            .field("source", &self.source.name())
            .field("target", &self.target.name())
            .field("alias", &self.alias)
            .field("deep_clone", &self.deep_clone)
            .field("converter", &self.converter.is_some())
            .finish()
    }
}

/// Computes the property matches of `source` onto `target` under `options`.
///
/// # Errors
///
/// Only with [`Config::strict_aliases`], when two source properties map to
/// the same target property.
pub fn match_properties(
    source: &TypeDesc,
    target: &TypeDesc,
    options: &MapperOptions,
    config: &Config,
    resolver: &TypeMapResolver,
) -> Result<Vec<PropertyMatch>, Error> {
    let binding = options.binding();
    let targets: Vec<PropertyDesc> = get_properties(target, binding, false)
        .into_iter()
        .filter(|p| p.is_writable() || (p.is_init_only() && binding.allows_init_only()))
        .collect();

    let mut matches: Vec<PropertyMatch> = Vec::new();
    for property in get_properties(source, binding, false) {
        let name = property.name();
        if !property.is_readable() {
            continue;
        }
        if options.is_excluded(name) {
            trace!(source = source.type_name, property = name, "excluded");
            continue;
        }
        if let Some(filter) = options.filter() {
            if !filter(&property) {
                trace!(source = source.type_name, property = name, "rejected by filter");
                continue;
            }
        }
        let alias = options.alias_entry(name);
        let target_name = alias.map(|a| a.target.as_str()).unwrap_or(name);
        let Some(target_property) = targets.iter().find(|t| t.name() == target_name) else {
            trace!(
                source = source.type_name,
                target = target.type_name,
                property = name,
                target_property = target_name,
                "no target property"
            );
            continue;
        };
        let converter = options.converter(name).cloned();
        if converter.is_none()
            && !can_convert(&property.type_desc(), &target_property.type_desc(), resolver)
        {
            trace!(
                source = source.type_name,
                target = target.type_name,
                property = name,
                "types are not convertible"
            );
            continue;
        }

        let found = PropertyMatch {
            deep_clone: options.is_deep_cloned(name),
            converter,
            alias: alias.map(|a| a.target.clone()),
            alias_order: alias.map(|a| a.order),
            target: target_property.clone(),
            source: property,
        };
        match matches.iter().position(|m| m.target.name() == target_name) {
            Some(pos) => {
                let previous = &matches[pos];
                if config.is_strict_aliases() {
                    return Err(Error::invalid_argument(format!(
                        "source properties `{}` and `{}` of `{}` both map to `{}` of `{}`",
                        previous.source.name(),
                        found.source.name(),
                        source.type_name,
                        target_name,
                        target.type_name
                    )));
                }
                if found.alias_order > previous.alias_order {
                    matches[pos] = found;
                }
            }
            None => matches.push(found),
        }
    }
    Ok(matches)
}
