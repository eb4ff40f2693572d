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

/// Helper macro for the downcast-and-clone loop over registered implementations.
#[macro_export]
macro_rules! downcast_and_clone {
    ($any_ref:expr, $method:ident, $trait_name:ident, $($impl_type:ty),+) => {{
        $(
            if let Some(concrete) = $any_ref.downcast_ref::<$impl_type>() {
                return Box::new(<$impl_type as $crate::reflect::Typed>::$method(concrete));
            }
        )*
        panic!("Failed to downcast to any registered type for trait {}", stringify!($trait_name));
    }};
}

/// Macro to make `Box<dyn Trait>` mappable.
///
/// Due to Rust's orphan rules, only `Box<dyn Trait>` is supported for
/// user-defined traits. The trait must extend [`Reflect`], and every listed
/// implementation must be [`Typed`] (usually through `#[derive(Mappable)]`).
///
/// The generated `Typed` implementation describes the trait object as an
/// abstract type: mapping a value of a registered implementation into a
/// `Box<dyn Trait>` property boxes it, and mapping from a `Box<dyn Trait>`
/// reads the concrete value behind it. Values of other types reach a
/// `Box<dyn Trait>` target only through `construct_using`.
///
/// [`Reflect`]: crate::reflect::Reflect
/// [`Typed`]: crate::reflect::Typed
///
/// # Example
///
/// ```rust,ignore
/// use remap_core::register_trait_type;
/// use remap_core::reflect::Reflect;
/// use remap_derive::Mappable;
///
/// trait Shape: Reflect {
///     fn area(&self) -> f64;
/// }
///
/// #[derive(Mappable, Default)]
/// struct Circle { radius: f64 }
///
/// #[derive(Mappable, Default)]
/// struct Square { side: f64 }
///
/// impl Shape for Circle {
///     fn area(&self) -> f64 { std::f64::consts::PI * self.radius * self.radius }
/// }
///
/// impl Shape for Square {
///     fn area(&self) -> f64 { self.side * self.side }
/// }
///
/// register_trait_type!(Shape, Circle, Square);
/// ```
#[macro_export]
macro_rules! register_trait_type {
    ($trait_name:ident, $($impl_type:ty),+ $(,)?) => {
        impl $crate::reflect::Typed for Box<dyn $trait_name> {
            fn type_desc() -> $crate::meta::TypeDesc {
                fn implementors() -> Vec<$crate::meta::TypeDesc> {
                    vec![$(<$impl_type as $crate::reflect::Typed>::type_desc()),+]
                }

                fn wrap(
                    value: Box<dyn $crate::reflect::Reflect>,
                ) -> Option<Box<dyn $crate::reflect::Reflect>> {
                    $(
                        if value.as_any().is::<$impl_type>() {
                            let concrete = $crate::reflect::downcast_value::<$impl_type>(value).ok()?;
                            let boxed: Box<dyn $trait_name> = Box::new(concrete);
                            return Some(Box::new(boxed));
                        }
                    )+
                    None
                }

                $crate::meta::TypeDesc::new::<Self>($crate::meta::TypeKind::Abstract(
                    $crate::meta::AbstractDesc::new(stringify!($trait_name), implementors, wrap),
                ))
            }

            fn value_ref(&self) -> $crate::reflect::ValueRef<'_> {
                $crate::reflect::ValueRef::Abstract(
                    <dyn $trait_name as $crate::reflect::Reflect>::as_reflect(&**self),
                )
            }

            fn shallow_clone(&self) -> Self {
                let any_ref = <dyn $trait_name as $crate::reflect::Reflect>::as_any(&**self);
                $crate::downcast_and_clone!(any_ref, shallow_clone, $trait_name, $($impl_type),+);
            }

            fn deep_clone(&self) -> Self {
                let any_ref = <dyn $trait_name as $crate::reflect::Reflect>::as_any(&**self);
                $crate::downcast_and_clone!(any_ref, deep_clone, $trait_name, $($impl_type),+);
            }
        }
    };
}
