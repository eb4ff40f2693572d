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

use std::sync::{Arc, Barrier};
use std::thread;

use remap_core::error::Error;
use remap_core::mapper::Mapper;
use remap_derive::Mappable;

#[derive(Mappable, Default)]
struct Item {
    id: u32,
    name: String,
    tags: Vec<String>,
}

#[derive(Mappable, Default)]
struct ItemDto {
    id: i64,
    name: String,
    tags: Vec<String>,
}

#[test]
fn test_shared_mapper() {
    let mapper = Arc::new(Mapper::default());
    let mut handles = vec![];
    for id in 0..16u32 {
        let mapper = Arc::clone(&mapper);
        handles.push(thread::spawn(move || {
            let item = Item {
                id,
                name: format!("item-{id}"),
                tags: vec!["a".to_string(); id as usize % 3],
            };
            mapper.map::<Item, ItemDto>(&item).unwrap()
        }));
    }
    let mut ids: Vec<i64> = handles
        .into_iter()
        .map(|handle| {
            let dto = handle.join().unwrap();
            assert_eq!(dto.name, format!("item-{}", dto.id));
            assert_eq!(dto.tags.len(), dto.id as usize % 3);
            dto.id
        })
        .collect();
    ids.sort();
    assert_eq!(ids, (0..16).collect::<Vec<i64>>());
    assert_eq!(mapper.resolver().len(), 1);
}

#[test]
fn test_concurrent_configuration() {
    let threads = 8;
    let mapper = Arc::new(Mapper::default());
    let barrier = Arc::new(Barrier::new(threads));
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let mapper = Arc::clone(&mapper);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                mapper.configure::<Item, ItemDto>(|map| {
                    map.exclude(["tags"])?;
                    Ok(())
                })
            })
        })
        .collect();
    let results: Vec<Result<(), Error>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, Error::DuplicateConfiguration(_))));

    let dto: ItemDto = mapper
        .map(&Item {
            id: 1,
            name: "one".to_string(),
            tags: vec!["x".to_string()],
        })
        .unwrap();
    assert!(dto.tags.is_empty());
}
