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

use remap_core::error::Error;
use remap_core::mapper::Mapper;
use remap_core::reflect::Reflect;
use remap_derive::Mappable;

#[derive(Mappable, Debug, Default, PartialEq)]
struct Source {
    prop1: i32,
    name: String,
    extra: bool,
}

#[derive(Mappable, Debug, Default, PartialEq)]
struct Target {
    prop1: f32,
    name: String,
    missing: u8,
}

fn source() -> Source {
    Source {
        prop1: 5,
        name: "five".to_string(),
        extra: true,
    }
}

#[test]
fn test_implicit_numeric_widening() {
    let mapper = Mapper::default();
    let target: Target = mapper.map(&source()).unwrap();
    assert_eq!(target.prop1, 5.0f32);
    assert_eq!(target.name, "five");
    assert_eq!(target.missing, 0);
}

#[test]
fn test_map_into_existing_target() {
    let mapper = Mapper::default();
    let mut target = Target {
        prop1: 1.5,
        name: "old".to_string(),
        missing: 42,
    };
    mapper.map_into(&source(), &mut target).unwrap();
    assert_eq!(
        target,
        Target {
            prop1: 5.0,
            name: "five".to_string(),
            missing: 42,
        }
    );
}

#[test]
fn test_map_same_type() {
    let mapper = Mapper::default();
    let copy: Source = mapper.map(&source()).unwrap();
    assert_eq!(copy, source());
}

#[test]
fn test_map_many() {
    let mapper = Mapper::default();
    let sources: Vec<Source> = (0..5)
        .map(|i| Source {
            prop1: i,
            name: format!("item{i}"),
            extra: false,
        })
        .collect();
    let targets: Vec<Target> = mapper.map_many(&sources).unwrap();
    assert_eq!(targets.len(), 5);
    for (i, target) in targets.iter().enumerate() {
        assert_eq!(target.prop1, i as f32);
        assert_eq!(target.name, format!("item{i}"));
    }
    let empty: Vec<Target> = mapper.map_many(&Vec::<Source>::new()).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_map_dyn() {
    let mapper = Mapper::default();
    let boxed: Box<dyn Reflect> = Box::new(source());
    let target: Target = mapper.map_dyn(&*boxed).unwrap();
    assert_eq!(target.prop1, 5.0);
}

#[test]
fn test_map_scalars() {
    let mapper = Mapper::default();
    let widened: i64 = mapper.map(&42i32).unwrap();
    assert_eq!(widened, 42);
    let narrowed: u8 = mapper.map(&200i64).unwrap();
    assert_eq!(narrowed, 200);
    let rounded: i32 = mapper.map(&2.5f64).unwrap();
    assert_eq!(rounded, 2);
    let rounded: i32 = mapper.map(&3.5f64).unwrap();
    assert_eq!(rounded, 4);
}

#[test]
fn test_unconvertible_root_is_unsupported() {
    let mapper = Mapper::default();
    let err = mapper.map::<_, u8>(&300i32).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    let err = mapper.map::<_, i32>(&"12".to_string()).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_none_source_is_rejected() {
    let mapper = Mapper::default();
    let err = mapper.map::<Option<Source>, Target>(&None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let target: Target = mapper.map(&Some(source())).unwrap();
    assert_eq!(target.name, "five");

    let none: Option<Target> = mapper.map(&None::<Source>).unwrap();
    assert!(none.is_none());
}

#[test]
fn test_map_into_from_option() {
    let mapper = Mapper::default();
    let mut target = Target {
        prop1: 1.5,
        name: "old".to_string(),
        missing: 42,
    };
    let err = mapper.map_into(&None::<Source>, &mut target).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(target.name, "old");

    mapper.map_into(&Some(source()), &mut target).unwrap();
    assert_eq!(target.prop1, 5.0f32);
    assert_eq!(target.name, "five");
    assert_eq!(target.missing, 42);
}

#[test]
fn test_map_into_requires_object() {
    let mapper = Mapper::default();
    let mut target = 0i64;
    let err = mapper.map_into(&5i32, &mut target).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));

    let mut object = Target::default();
    let err = mapper.map_into(&Some(5i32), &mut object).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_tuple_and_unit_structs() {
    #[derive(Mappable, Debug, Default, PartialEq)]
    struct Pair(i32, String);

    #[derive(Mappable, Debug, Default, PartialEq)]
    struct WidePair(i64, String);

    #[derive(Mappable, Debug, Default, PartialEq)]
    struct Marker;

    let mapper = Mapper::default();
    let wide: WidePair = mapper.map(&Pair(7, "seven".to_string())).unwrap();
    assert_eq!(wide, WidePair(7, "seven".to_string()));

    let marker: Marker = mapper.map(&source()).unwrap();
    assert_eq!(marker, Marker);
}
