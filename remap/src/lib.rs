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

//! # Remap
//!
//! Remap copies the properties of one object onto an object of another type.
//! Properties are matched by name, converted where the types differ, and
//! nested objects are mapped recursively. Type pairs are resolved once and
//! cached, so repeated mappings only pay for reading and writing values.
//!
//! ## Key Features
//!
//! - **Zero configuration**: any two `Mappable` types map by property name
//! - **Per pair options**: exclusions, aliases, deep clones, converters, factories
//! - **Conversions**: numbers, enums, strings, dates, options, pointers and collections
//! - **Reference semantics**: `Rc`/`Arc` values are shared by default and deep cloned on request
//! - **Thread safety**: a single `Mapper` can be shared across threads
//!
//! ## Basic mapping
//!
//! ```rust,ignore
//! use remap::{Error, Mappable, Mapper};
//!
//! #[derive(Mappable, Default)]
//! struct PersonDto {
//!     name: String,
//!     age: u8,
//!     tags: Vec<String>,
//! }
//!
//! #[derive(Mappable, Default)]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     tags: Vec<String>,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let mapper = Mapper::default();
//! let dto = PersonDto { name: "Ada".into(), age: 36, tags: vec!["math".into()] };
//! let person: Person = mapper.map(&dto)?;
//! assert_eq!(person.age, 36);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configured mapping
//!
//! A type pair can be configured once, before it is first used:
//!
//! ```rust,ignore
//! use remap::{member, Error, Mappable, Mapper};
//!
//! #[derive(Mappable, Default)]
//! struct AccountDto { login: String, password: String, balance: f64 }
//!
//! #[derive(Mappable, Default)]
//! struct Account { user: String, password: String, balance_cents: i64 }
//!
//! # fn main() -> Result<(), Error> {
//! let mapper = Mapper::default();
//! mapper.configure::<AccountDto, Account>(|map| {
//!     map.exclude(["password"])?
//!         .with_alias(member!(AccountDto, login), member!(Account, user))?
//!         .with_alias("balance", "balance_cents")?
//!         .with_conversion("balance", |_, balance: &f64| Ok((balance * 100.0).round() as i64))?;
//!     Ok(())
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Trait objects
//!
//! `Box<dyn Trait>` properties are mappable once the trait and its
//! implementations are registered with [`register_trait_type!`]. The trait
//! must extend [`Reflect`].

pub use remap_core::{
    ensure, error::Error, mapper::Mapper, member, register_trait_type, Binding, Config,
    IntoPropertyName, Member, PropertyDesc, Reflect, TypeDesc, TypeMapBuilder, Typed, Visibility,
};
pub use remap_derive::Mappable;
