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

//! Property references used by the configuration builder.
//!
//! A property is named either by a string or by a [`Member`] built with
//! [`member!`](crate::member!). The macro checks at compile time that the
//! field exists on the owner type; the builder then rejects members that
//! reach through more than one field.

use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::meta::{get_properties, Binding, TypeDesc};

/// A compile-time checked field access path on `Owner`.
pub struct Member<Owner> {
    path: &'static [&'static str],
    _owner: PhantomData<fn() -> Owner>,
}

impl<Owner> Member<Owner> {
    #[doc(hidden)]
    pub const fn new(path: &'static [&'static str]) -> Self {
        Member {
            path,
            _owner: PhantomData,
        }
    }

    pub fn path(&self) -> &'static [&'static str] {
        self.path
    }

    pub fn is_nested(&self) -> bool {
        self.path.len() > 1
    }
}

impl<Owner> Clone for Member<Owner> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Owner> Copy for Member<Owner> {}

impl<Owner> fmt::Debug for Member<Owner> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Member({})", self.path.join("."))
    }
}

/// Builds a [`Member`] for a field of `$owner`.
///
/// The field path is type checked against `$owner`; a misspelled field is a
/// compile error. Nested paths compile, but configuration rejects them.
///
/// ```rust,ignore
/// use remap_core::member;
///
/// let name = member!(User, name);
/// let nested = member!(User, address.city); // rejected by the builder
/// ```
#[macro_export]
macro_rules! member {
    ($owner:ty, $($field:tt).+) => {{
        let _ = |owner: &$owner| {
            let _ = &owner.$($field).+;
        };
        $crate::member::Member::<$owner>::new(&[$(stringify!($field)),+])
    }};
}

/// Anything that names a property of `Owner` in configuration calls.
pub trait IntoPropertyName<Owner> {
    /// Resolves to the mapping name of the property on `owner`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for empty names, [`Error::InvalidPath`] for
    /// nested member paths.
    fn into_property_name(self, owner: &TypeDesc) -> Result<String, Error>;
}

fn check_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::invalid_argument("property name must not be empty"));
    }
    Ok(())
}

impl<Owner> IntoPropertyName<Owner> for &str {
    fn into_property_name(self, _owner: &TypeDesc) -> Result<String, Error> {
        check_name(self)?;
        Ok(self.to_string())
    }
}

impl<Owner> IntoPropertyName<Owner> for String {
    fn into_property_name(self, _owner: &TypeDesc) -> Result<String, Error> {
        check_name(&self)?;
        Ok(self)
    }
}

impl<Owner> IntoPropertyName<Owner> for &String {
    fn into_property_name(self, _owner: &TypeDesc) -> Result<String, Error> {
        check_name(self)?;
        Ok(self.clone())
    }
}

impl<Owner> IntoPropertyName<Owner> for Member<Owner> {
    fn into_property_name(self, owner: &TypeDesc) -> Result<String, Error> {
        let [field] = self.path else {
            return Err(Error::invalid_path(format!(
                "`{}` reaches through a nested member of `{}`; configure the nested type pair instead",
                self.path.join("."),
                owner.type_name
            )));
        };
        check_name(field)?;
        let renamed = get_properties(owner, Binding::ALL_VISIBILITY, false)
            .into_iter()
            .find(|p| p.field_name() == *field)
            .map(|p| p.name().to_string());
        Ok(renamed.unwrap_or_else(|| field.to_string()))
    }
}
