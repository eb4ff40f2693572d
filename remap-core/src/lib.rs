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

//! # Remap Core
//!
//! This is the core implementation of the Remap object mapper. It copies
//! the properties of one value onto a value of another type, matching them
//! by name and converting them where the types differ.
//!
//! ## Architecture
//!
//! The core library is organized into several key modules:
//!
//! - **`mapper`**: The [`Mapper`] and its public API
//! - **`reflect`**: The [`Typed`] and [`Reflect`] traits and their implementations for std and chrono types
//! - **`meta`**: Type and property descriptors, and the property reflector
//! - **`member`**: Checked property paths through [`member!`]
//! - **`resolver`**: Mapping options, property matching and the type map cache
//! - **`convert`**: Conversion rules between scalars, enums and containers
//! - **`executor`**: Applies resolved matches to values
//! - **`config`**: Mapper-wide settings
//! - **`error`**: Error handling and result types
//!
//! ## Key Concepts
//!
//! ### Type pairs
//!
//! Every mapping goes from a source type to a target type. The first time a
//! pair is used, its properties are matched by name and the result is cached
//! in a [`TypeMap`](resolver::TypeMap). A pair may instead be configured
//! explicitly, once, before first use.
//!
//! ### Options
//!
//! - **Exclude**: never copy a source property
//! - **Deep clone**: copy a property without sharing its `Rc`/`Arc` pointers
//! - **Alias**: map a source property onto a target property of another name
//! - **Conversion**: produce a property value with a closure
//! - **Construct using**: build the target with a factory
//! - **Binding and filter**: restrict the reflected properties
//!
//! ### Conversions
//!
//! - Integers convert when the value fits; floats round half to even
//! - Enums convert by variant name, by discriminant, or to their name
//! - `Option`, `Box`, `Rc` and `Arc` are unwrapped and wrapped as needed
//! - Sequences and maps convert element by element
//! - Nested objects map through their own type pair
//!
//! ## Usage
//!
//! This crate is typically used through the higher-level `remap` crate,
//! which adds the `Mappable` derive macro.
//!
//! ```rust
//! use remap_core::mapper::Mapper;
//!
//! let mapper = Mapper::default();
//! let widened: i64 = mapper.map(&42i32).unwrap();
//! assert_eq!(widened, 42);
//!
//! let names: Vec<String> = mapper.map(&["a".to_string(), "b".to_string()]).unwrap();
//! assert_eq!(names, vec!["a", "b"]);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod executor;
pub mod mapper;
pub mod member;
pub mod meta;
pub mod reflect;
pub mod resolver;

pub use config::Config;
pub use error::Error;
pub use mapper::Mapper;
pub use member::{IntoPropertyName, Member};
pub use meta::{Binding, PropertyDesc, TypeDesc, TypeKind, Visibility};
pub use reflect::{Reflect, Typed};
pub use resolver::TypeMapBuilder;
