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

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::sync::Arc;

use remap_core::mapper::Mapper;
use remap_derive::Mappable;

#[test]
fn test_shared_slice_to_vec() {
    #[derive(Mappable)]
    #[remap(no_default)]
    struct Source {
        prop: Arc<[String]>,
    }

    #[derive(Mappable, Default)]
    struct Target {
        prop: Vec<String>,
    }

    let source = Source {
        prop: Arc::from(vec!["a".to_string(), "b".to_string()]),
    };
    let mapper = Mapper::default();
    let target: Target = mapper.map(&source).unwrap();
    assert_eq!(target.prop, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_sequence_shapes() {
    let mapper = Mapper::default();
    let source = vec![3i32, 1, 2, 3];

    let deque: VecDeque<i64> = mapper.map(&source).unwrap();
    assert_eq!(deque, VecDeque::from(vec![3i64, 1, 2, 3]));

    let list: LinkedList<u16> = mapper.map(&source).unwrap();
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![3u16, 1, 2, 3]);

    let set: BTreeSet<i32> = mapper.map(&source).unwrap();
    assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

    let hashed: HashSet<u8> = mapper.map(&source).unwrap();
    assert_eq!(hashed.len(), 3);

    let boxed: Box<[f64]> = mapper.map(&source).unwrap();
    assert_eq!(&*boxed, &[3.0, 1.0, 2.0, 3.0]);

    let array: [i8; 4] = mapper.map(&source).unwrap();
    assert_eq!(array, [3, 1, 2, 3]);
}

#[test]
fn test_array_length_mismatch_is_unsupported() {
    let mapper = Mapper::default();
    let result = mapper.map::<_, [i32; 2]>(&vec![1i32, 2, 3]);
    assert!(result.is_err());
}

#[test]
fn test_unconvertible_element_leaves_property_untouched() {
    #[derive(Mappable, Default)]
    struct Source {
        values: Vec<i64>,
    }

    #[derive(Mappable, Default)]
    struct Target {
        values: Vec<u8>,
    }

    let mapper = Mapper::default();
    let mut target = Target { values: vec![9] };
    mapper
        .map_into(
            &Source {
                values: vec![1, 300],
            },
            &mut target,
        )
        .unwrap();
    assert_eq!(target.values, vec![9]);
}

#[test]
fn test_maps() {
    let mapper = Mapper::default();
    let source: HashMap<String, i32> =
        HashMap::from([("one".to_string(), 1), ("two".to_string(), 2)]);
    let target: BTreeMap<String, i64> = mapper.map(&source).unwrap();
    assert_eq!(
        target,
        BTreeMap::from([("one".to_string(), 1i64), ("two".to_string(), 2i64)])
    );

    let keyed: HashMap<u8, String> = HashMap::from([(1, "a".to_string())]);
    let widened: HashMap<u64, String> = mapper.map(&keyed).unwrap();
    assert_eq!(widened.get(&1), Some(&"a".to_string()));
}

#[test]
fn test_nested_objects_in_collections() {
    #[derive(Mappable, Default)]
    struct LineDto {
        sku: String,
        quantity: u32,
    }

    #[derive(Mappable, Default)]
    struct Line {
        sku: String,
        quantity: u64,
    }

    #[derive(Mappable, Default)]
    struct OrderDto {
        lines: Vec<LineDto>,
        by_sku: HashMap<String, LineDto>,
    }

    #[derive(Mappable, Default)]
    struct Order {
        lines: Vec<Line>,
        by_sku: BTreeMap<String, Line>,
    }

    let dto = OrderDto {
        lines: vec![
            LineDto {
                sku: "A-1".to_string(),
                quantity: 2,
            },
            LineDto {
                sku: "B-2".to_string(),
                quantity: 5,
            },
        ],
        by_sku: HashMap::from([(
            "A-1".to_string(),
            LineDto {
                sku: "A-1".to_string(),
                quantity: 2,
            },
        )]),
    };
    let mapper = Mapper::default();
    let order: Order = mapper.map(&dto).unwrap();
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[1].sku, "B-2");
    assert_eq!(order.lines[1].quantity, 5);
    assert_eq!(order.by_sku["A-1"].quantity, 2);
    assert!(mapper.is_configured::<LineDto, Line>());
}
