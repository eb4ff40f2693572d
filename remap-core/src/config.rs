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

use crate::meta::Binding;

/// Configuration for a [`Mapper`](crate::mapper::Mapper).
///
/// This struct holds the options that apply to every type pair of one
/// mapper. It is shared between the `Mapper`, the matcher and the
/// per-call `MapContext` so that they agree on limits and defaults.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum nesting depth of objects mapped within one call.
    pub max_depth: u32,
    /// Whether two source properties landing on the same target property
    /// is a configuration error instead of last-alias-wins.
    pub strict_aliases: bool,
    /// Binding given to type pairs that do not set their own.
    pub default_binding: Binding,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 64,
            strict_aliases: false,
            default_binding: Binding::default(),
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get maximum nesting depth.
    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Check if alias collisions are rejected.
    #[inline(always)]
    pub fn is_strict_aliases(&self) -> bool {
        self.strict_aliases
    }

    /// Get the binding used by implicitly configured type pairs.
    #[inline(always)]
    pub fn default_binding(&self) -> Binding {
        self.default_binding
    }
}
