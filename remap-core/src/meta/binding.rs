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

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::meta::property::Visibility;

/// Property selection flags used by the reflector and the matcher.
///
/// The four visibility bits select which field visibilities are eligible.
/// [`Binding::DECLARED_ONLY`] turns off the traversal of flattened
/// (inherited) properties, and [`Binding::INIT_ONLY`] lets init-only
/// properties act as mapping targets.
///
/// ```rust
/// use remap_core::meta::Binding;
///
/// let binding = Binding::PUBLIC | Binding::CRATE;
/// assert!(binding.contains(Binding::PUBLIC));
/// assert!(!binding.contains(Binding::PRIVATE));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binding(u16);

impl Binding {
    pub const NONE: Binding = Binding(0);
    pub const PUBLIC: Binding = Binding(1);
    pub const CRATE: Binding = Binding(1 << 1);
    pub const RESTRICTED: Binding = Binding(1 << 2);
    pub const PRIVATE: Binding = Binding(1 << 3);
    pub const DECLARED_ONLY: Binding = Binding(1 << 4);
    pub const INIT_ONLY: Binding = Binding(1 << 5);

    pub const ALL_VISIBILITY: Binding = Binding(0b1111);

    #[inline(always)]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub const fn contains(self, other: Binding) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    pub const fn union(self, other: Binding) -> Binding {
        Binding(self.0 | other.0)
    }

    #[inline(always)]
    pub const fn without(self, other: Binding) -> Binding {
        Binding(self.0 & !other.0)
    }

    /// Whether a property with the given visibility is selected.
    pub fn allows(self, visibility: Visibility) -> bool {
        let bit = match visibility {
            Visibility::Public => Binding::PUBLIC,
            Visibility::Crate => Binding::CRATE,
            Visibility::Restricted => Binding::RESTRICTED,
            Visibility::Private => Binding::PRIVATE,
        };
        self.contains(bit)
    }

    #[inline(always)]
    pub fn is_declared_only(self) -> bool {
        self.contains(Binding::DECLARED_ONLY)
    }

    #[inline(always)]
    pub fn allows_init_only(self) -> bool {
        self.contains(Binding::INIT_ONLY)
    }
}

impl Default for Binding {
    /// Every visibility, inherited properties included, init-only targets allowed.
    fn default() -> Self {
        Binding::ALL_VISIBILITY | Binding::INIT_ONLY
    }
}

impl BitOr for Binding {
    type Output = Binding;

    fn bitor(self, rhs: Binding) -> Binding {
        self.union(rhs)
    }
}

impl BitOrAssign for Binding {
    fn bitor_assign(&mut self, rhs: Binding) {
        *self = self.union(rhs);
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Binding, &str); 6] = [
            (Binding::PUBLIC, "PUBLIC"),
            (Binding::CRATE, "CRATE"),
            (Binding::RESTRICTED, "RESTRICTED"),
            (Binding::PRIVATE, "PRIVATE"),
            (Binding::DECLARED_ONLY, "DECLARED_ONLY"),
            (Binding::INIT_ONLY, "INIT_ONLY"),
        ];
        let mut first = true;
        write!(f, "Binding(")?;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    write!(f, " | ")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        write!(f, ")")
    }
}
