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
use remap_core::member;
use remap_core::meta::Binding;
use remap_derive::Mappable;

#[derive(Mappable, Debug, Default, Clone)]
struct UserDto {
    pub login: String,
    pub mail: String,
    pub password: String,
    pub internal_score: i32,
    pub age: u32,
}

#[derive(Mappable, Debug, Default)]
struct User {
    pub login: String,
    pub email: String,
    pub password: String,
    pub internal_score: i32,
    pub age: u64,
}

fn dto() -> UserDto {
    UserDto {
        login: "ada".to_string(),
        mail: "ada@example.com".to_string(),
        password: "secret".to_string(),
        internal_score: 99,
        age: 36,
    }
}

#[test]
fn test_exclude_and_alias() {
    let mapper = Mapper::default();
    mapper
        .configure::<UserDto, User>(|map| {
            map.exclude(["password"])?
                .with_alias(member!(UserDto, mail), member!(User, email))?;
            Ok(())
        })
        .unwrap();
    let user: User = mapper.map(&dto()).unwrap();
    assert_eq!(user.login, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password, "");
    assert_eq!(user.internal_score, 99);
    assert_eq!(user.age, 36);
}

#[test]
fn test_exclude_overrides_other_options() {
    let mapper = Mapper::default();
    mapper
        .configure::<UserDto, User>(|map| {
            map.exclude(["mail"])?
                .with_conversion("mail", |_, v: &String| Ok(v.to_uppercase()))?
                .deep_clone(["mail"])?
                .with_alias("mail", "email")?;
            Ok(())
        })
        .unwrap();
    let user: User = mapper.map(&dto()).unwrap();
    assert_eq!(user.email, "");
    assert_eq!(user.login, "ada");
    assert_eq!(user.password, "secret");

    let mut existing = User {
        email: "kept@example.com".to_string(),
        ..User::default()
    };
    mapper.map_into(&dto(), &mut existing).unwrap();
    assert_eq!(existing.email, "kept@example.com");
    assert_eq!(existing.login, "ada");
}

#[test]
fn test_duplicate_configuration() {
    let mapper = Mapper::default();
    mapper.configure::<UserDto, User>(|_| Ok(())).unwrap();
    let err = mapper.configure::<UserDto, User>(|_| Ok(())).unwrap_err();
    assert!(matches!(err, Error::DuplicateConfiguration(_)));
    let message = err.to_string();
    assert!(message.contains("UserDto"));
    assert!(message.contains("User`"));
}

#[test]
fn test_configure_after_implicit_use() {
    let mapper = Mapper::default();
    assert!(!mapper.is_configured::<UserDto, User>());
    let _: User = mapper.map(&dto()).unwrap();
    assert!(mapper.is_configured::<UserDto, User>());
    assert!(!mapper.type_map::<UserDto, User>().unwrap().is_explicit());
    let err = mapper
        .configure::<UserDto, User>(|map| {
            map.exclude(["password"])?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateConfiguration(_)));
}

#[test]
fn test_reverse_pair_is_independent() {
    let mapper = Mapper::default();
    mapper
        .configure::<UserDto, User>(|map| {
            map.exclude(["login"])?;
            Ok(())
        })
        .unwrap();
    mapper.configure::<User, UserDto>(|_| Ok(())).unwrap();
    let user = User {
        login: "grace".to_string(),
        ..Default::default()
    };
    let back: UserDto = mapper.map(&user).unwrap();
    assert_eq!(back.login, "grace");
}

#[test]
fn test_invalid_names() {
    let mapper = Mapper::default();
    let err = mapper
        .configure::<UserDto, User>(|map| {
            map.exclude([""])?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = mapper
        .configure::<UserDto, User>(|map| {
            map.with_alias("mail", "   ")?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    // a failed configuration leaves the pair unconfigured
    assert!(!mapper.is_configured::<UserDto, User>());
}

#[test]
fn test_nested_member_is_rejected() {
    #[derive(Mappable, Default)]
    struct Child {
        value: i32,
    }

    #[derive(Mappable, Default)]
    struct Parent {
        child: Child,
    }

    #[derive(Mappable, Default)]
    struct Flat {
        value: i32,
    }

    let mapper = Mapper::default();
    let err = mapper
        .configure::<Parent, Flat>(|map| {
            map.with_alias(member!(Parent, child.value), member!(Flat, value))?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPath(_)));
}

#[test]
fn test_alias_wins_over_name_match() {
    #[derive(Mappable, Default)]
    struct Source {
        name: String,
        nick: String,
    }

    #[derive(Mappable, Default)]
    struct Target {
        name: String,
    }

    let source = Source {
        name: "Margaret".to_string(),
        nick: "Maggie".to_string(),
    };

    let mapper = Mapper::default();
    mapper
        .configure::<Source, Target>(|map| {
            map.with_alias("nick", "name")?;
            Ok(())
        })
        .unwrap();
    let target: Target = mapper.map(&source).unwrap();
    assert_eq!(target.name, "Maggie");

    let strict = Mapper::default().strict_aliases(true);
    let err = strict
        .configure::<Source, Target>(|map| {
            map.with_alias("nick", "name")?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_last_alias_wins() {
    #[derive(Mappable, Default)]
    struct Source {
        first: i32,
        second: i32,
    }

    #[derive(Mappable, Default)]
    struct Target {
        value: i32,
    }

    let mapper = Mapper::default();
    mapper
        .configure::<Source, Target>(|map| {
            map.with_alias("first", "value")?
                .with_alias("second", "value")?;
            Ok(())
        })
        .unwrap();
    let target: Target = mapper.map(&Source { first: 1, second: 2 }).unwrap();
    assert_eq!(target.value, 2);

    let matches = mapper.property_matches::<Source, Target>().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source().name(), "second");
    assert_eq!(matches[0].alias(), Some("value"));
}

#[test]
fn test_filter() {
    let mapper = Mapper::default();
    mapper
        .configure::<UserDto, User>(|map| {
            map.set_filter(|property| !property.name().starts_with("internal_"));
            assert!(map.filter().is_some());
            Ok(())
        })
        .unwrap();
    let user: User = mapper.map(&dto()).unwrap();
    assert_eq!(user.internal_score, 0);
    assert_eq!(user.login, "ada");
}

#[test]
fn test_binding_restricts_visibility() {
    #[derive(Mappable, Default)]
    struct Source {
        pub shown: i32,
        hidden: i32,
    }

    #[derive(Mappable, Default)]
    struct Target {
        pub shown: i32,
        pub hidden: i32,
    }

    let mapper = Mapper::default();
    mapper
        .configure::<Source, Target>(|map| {
            assert_eq!(map.binding(), Binding::default());
            map.set_binding(Binding::PUBLIC);
            Ok(())
        })
        .unwrap();
    let target: Target = mapper.map(&Source { shown: 1, hidden: 2 }).unwrap();
    assert_eq!(target.shown, 1);
    assert_eq!(target.hidden, 0);

    let everything = Mapper::default();
    let target: Target = everything.map(&Source { shown: 1, hidden: 2 }).unwrap();
    assert_eq!(target.hidden, 2);
}

#[test]
fn test_default_binding_from_mapper() {
    #[derive(Mappable, Default)]
    struct Source {
        pub(crate) value: i32,
    }

    #[derive(Mappable, Default)]
    struct Target {
        pub value: i32,
    }

    let mapper = Mapper::default().default_binding(Binding::PUBLIC | Binding::INIT_ONLY);
    let target: Target = mapper.map(&Source { value: 3 }).unwrap();
    assert_eq!(target.value, 0);
}

#[test]
fn test_property_matches_introspection() {
    let mapper = Mapper::default();
    let matches = mapper.property_matches::<UserDto, User>().unwrap();
    let mut names: Vec<&str> = matches.iter().map(|m| m.target().name()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["age", "internal_score", "login", "password"]);
    assert!(mapper.is_configured::<UserDto, User>());
}
