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

use remap_core::mapper::Mapper;
use remap_core::member;
use remap_core::meta::{get_properties, Binding, Visibility};
use remap_core::reflect::Typed;
use remap_derive::Mappable;

#[derive(Mappable, Default, Clone)]
pub struct Audit {
    pub created_by: String,
    secret: String,
}

#[derive(Mappable, Default)]
pub struct Order {
    pub id: u64,
    #[remap(rename = "customer")]
    pub buyer: String,
    #[remap(flatten)]
    pub audit: Audit,
    #[remap(skip)]
    cache: Vec<u8>,
    pub(crate) note: String,
}

fn names(binding: Binding, declared_only: bool) -> Vec<&'static str> {
    get_properties(&Order::type_desc(), binding, declared_only)
        .iter()
        .map(|p| p.name())
        .collect()
}

#[test]
fn test_declared_and_inherited_properties() {
    assert_eq!(
        names(Binding::default(), false),
        vec!["id", "customer", "note", "created_by"]
    );
    assert_eq!(
        names(Binding::default(), true),
        vec!["id", "customer", "note"]
    );
    assert_eq!(
        names(Binding::default() | Binding::DECLARED_ONLY, false),
        vec!["id", "customer", "note"]
    );
    assert_eq!(
        names(Binding::PUBLIC, false),
        vec!["id", "customer", "created_by"]
    );
}

#[test]
fn test_property_descriptors() {
    let properties = get_properties(&Order::type_desc(), Binding::default(), false);
    let customer = properties.iter().find(|p| p.name() == "customer").unwrap();
    assert_eq!(customer.field_name(), "buyer");
    assert_eq!(customer.visibility(), Visibility::Public);
    assert!(customer.type_desc().is::<String>());
    assert!(!customer.is_inherited());
    assert!(customer.declaring_type().ends_with("Order"));

    let note = properties.iter().find(|p| p.name() == "note").unwrap();
    assert_eq!(note.visibility(), Visibility::Crate);

    let created_by = properties.iter().find(|p| p.name() == "created_by").unwrap();
    assert!(created_by.is_inherited());
    assert!(created_by.declaring_type().ends_with("Audit"));

    let order = Order {
        audit: Audit {
            created_by: "ops".to_string(),
            secret: String::new(),
        },
        ..Default::default()
    };
    let value = created_by.get(&order).unwrap();
    assert_eq!(value.as_any().downcast_ref::<String>().unwrap(), "ops");
}

#[test]
fn test_non_objects_have_no_properties() {
    assert!(get_properties(&u32::type_desc(), Binding::default(), false).is_empty());
    assert!(get_properties(&Vec::<Order>::type_desc(), Binding::default(), false).is_empty());
}

#[test]
fn test_flattened_properties_map_both_ways() {
    #[derive(Mappable, Default)]
    struct OrderDto {
        id: u64,
        customer: String,
        created_by: String,
        note: String,
    }

    let mapper = Mapper::default();
    let order: Order = mapper
        .map(&OrderDto {
            id: 3,
            customer: "acme".to_string(),
            created_by: "ops".to_string(),
            note: "fragile".to_string(),
        })
        .unwrap();
    assert_eq!(order.id, 3);
    assert_eq!(order.buyer, "acme");
    assert_eq!(order.audit.created_by, "ops");
    assert_eq!(order.note, "fragile");
    assert!(order.cache.is_empty());

    let dto: OrderDto = mapper.map(&order).unwrap();
    assert_eq!(dto.customer, "acme");
    assert_eq!(dto.created_by, "ops");
}

#[test]
fn test_member_resolves_renamed_field() {
    #[derive(Mappable, Default)]
    struct Summary {
        client: String,
    }

    let mapper = Mapper::default();
    mapper
        .configure::<Order, Summary>(|map| {
            map.with_alias(member!(Order, buyer), member!(Summary, client))?;
            Ok(())
        })
        .unwrap();
    let summary: Summary = mapper
        .map(&Order {
            buyer: "acme".to_string(),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(summary.client, "acme");
}

#[test]
fn test_declared_property_hides_inherited() {
    #[derive(Mappable, Default)]
    struct Base {
        pub label: String,
    }

    #[derive(Mappable, Default)]
    struct Derived {
        pub label: String,
        #[remap(flatten)]
        pub base: Base,
    }

    let properties = get_properties(&Derived::type_desc(), Binding::default(), false);
    assert_eq!(properties.len(), 1);
    assert!(!properties[0].is_inherited());
}

#[test]
fn test_access_flags() {
    #[derive(Mappable, Default)]
    struct AccountDto {
        id: u64,
        name: String,
        version: u32,
        #[remap(write_only)]
        password: String,
    }

    #[derive(Mappable, Default)]
    struct Account {
        #[remap(init_only)]
        id: u64,
        name: String,
        #[remap(read_only)]
        version: u32,
        password: String,
    }

    let dto = AccountDto {
        id: 99,
        name: "new".to_string(),
        version: 4,
        password: "hunter2".to_string(),
    };

    let mapper = Mapper::default();
    let created: Account = mapper.map(&dto).unwrap();
    assert_eq!(created.id, 99);
    assert_eq!(created.name, "new");
    assert_eq!(created.version, 0);
    assert_eq!(created.password, "");

    let mut existing = Account {
        id: 7,
        name: "old".to_string(),
        version: 1,
        password: "keep".to_string(),
    };
    mapper.map_into(&dto, &mut existing).unwrap();
    assert_eq!(existing.id, 7);
    assert_eq!(existing.name, "new");
    assert_eq!(existing.version, 1);
    assert_eq!(existing.password, "keep");

    let strict = Mapper::default().default_binding(Binding::ALL_VISIBILITY);
    let created: Account = strict.map(&dto).unwrap();
    assert_eq!(created.id, 0);
}
