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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use remap_core::error::Error;
use remap_core::mapper::Mapper;
use remap_core::member;
use remap_derive::Mappable;

#[derive(Mappable, Debug, Default)]
struct Measure {
    prop: i32,
    label: String,
}

#[derive(Mappable, Debug, Default)]
struct DoubledMeasure {
    prop: i32,
    label: String,
}

#[test]
fn test_with_conversion_doubles_value() {
    let mapper = Mapper::default();
    mapper
        .configure::<Measure, DoubledMeasure>(|map| {
            map.with_conversion(member!(Measure, prop), |_, v: &i32| Ok(*v * 2))?;
            Ok(())
        })
        .unwrap();
    let target: DoubledMeasure = mapper
        .map(&Measure {
            prop: 21,
            label: "x".to_string(),
        })
        .unwrap();
    assert_eq!(target.prop, 42);
    assert_eq!(target.label, "x");
}

#[test]
fn test_converter_output_is_converted() {
    #[derive(Mappable, Default)]
    struct Wide {
        prop: i64,
        label: String,
    }

    let mapper = Mapper::default();
    mapper
        .configure::<Measure, Wide>(|map| {
            map.with_conversion("prop", |_, v: &i32| Ok(*v + 1))?
                .with_conversion("label", |_, v: &String| Ok(v.len()))?;
            Ok(())
        })
        .unwrap();
    let target: Wide = mapper
        .map(&Measure {
            prop: 1,
            label: "four".to_string(),
        })
        .unwrap();
    assert_eq!(target.prop, 2);
    // usize is not convertible to String, the target keeps its default
    assert_eq!(target.label, "");
}

#[test]
fn test_converter_type_is_checked() {
    let mapper = Mapper::default();
    let err = mapper
        .configure::<Measure, DoubledMeasure>(|map| {
            map.with_conversion("prop", |_, v: &i64| Ok(*v))?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(err, Error::TypeError(_)));
}

#[test]
fn test_converter_errors_propagate() {
    let mapper = Mapper::default();
    mapper
        .configure::<Measure, DoubledMeasure>(|map| {
            map.with_conversion("prop", |_, v: &i32| {
                if *v < 0 {
                    return Err(Error::invalid_argument("negative measure"));
                }
                Ok(*v)
            })?;
            Ok(())
        })
        .unwrap();
    let err = mapper
        .map::<_, DoubledMeasure>(&Measure {
            prop: -1,
            label: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err: Error = anyhow::anyhow!("remote lookup failed").into();
    assert_eq!(err.to_string(), "remote lookup failed");
}

#[test]
fn test_converter_uses_mapper() {
    #[derive(Mappable, Default)]
    struct Inner {
        value: i32,
    }

    #[derive(Mappable, Default)]
    struct InnerDto {
        value: i64,
    }

    #[derive(Mappable, Default)]
    struct Outer {
        items: Vec<Inner>,
    }

    #[derive(Mappable, Default)]
    struct OuterDto {
        items: Vec<InnerDto>,
    }

    let mapper = Mapper::default();
    mapper
        .configure::<Outer, OuterDto>(|map| {
            map.with_conversion("items", |mapper, items: &Vec<Inner>| {
                let mut mapped: Vec<InnerDto> = mapper.map_many(items)?;
                mapped.retain(|item| item.value != 0);
                Ok(mapped)
            })?;
            Ok(())
        })
        .unwrap();
    let outer = Outer {
        items: vec![Inner { value: 1 }, Inner { value: 0 }, Inner { value: 3 }],
    };
    let dto: OuterDto = mapper.map(&outer).unwrap();
    let values: Vec<i64> = dto.items.iter().map(|item| item.value).collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn test_out_of_range_values_are_skipped() {
    #[derive(Mappable, Default)]
    struct Big {
        small: i64,
        ratio: f64,
        code: u32,
    }

    #[derive(Mappable, Default)]
    struct Small {
        small: u8,
        ratio: i32,
        code: char,
    }

    let mapper = Mapper::default();
    let mut target = Small {
        small: 7,
        ratio: 9,
        code: '?',
    };
    mapper
        .map_into(
            &Big {
                small: 1000,
                ratio: f64::NAN,
                code: 'A' as u32,
            },
            &mut target,
        )
        .unwrap();
    assert_eq!(target.small, 7);
    assert_eq!(target.ratio, 9);
    assert_eq!(target.code, 'A');
}

#[test]
fn test_option_wrap_and_unwrap() {
    #[derive(Mappable, Default)]
    struct Optional {
        a: Option<i32>,
        b: Option<i32>,
        c: i32,
    }

    #[derive(Mappable, Default)]
    struct Required {
        a: i64,
        b: i64,
        c: Option<i64>,
    }

    let mapper = Mapper::default();
    let mut target = Required {
        a: 0,
        b: 5,
        c: None,
    };
    mapper
        .map_into(
            &Optional {
                a: Some(1),
                b: None,
                c: 3,
            },
            &mut target,
        )
        .unwrap();
    assert_eq!(target.a, 1);
    assert_eq!(target.b, 5);
    assert_eq!(target.c, Some(3));

    let back: Optional = mapper.map(&target).unwrap();
    assert_eq!(back.a, Some(1));
    assert_eq!(back.b, Some(5));
    assert_eq!(back.c, 3);
}

#[test]
fn test_temporal_conversions() {
    #[derive(Mappable, Default)]
    struct Event {
        day: NaiveDate,
        at: DateTime<Utc>,
    }

    #[derive(Mappable, Default)]
    struct EventDto {
        day: NaiveDateTime,
        at: NaiveDate,
    }

    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let at = day.and_hms_opt(13, 45, 0).unwrap().and_utc();
    let mapper = Mapper::default();
    let dto: EventDto = mapper.map(&Event { day, at }).unwrap();
    assert_eq!(dto.day, day.and_time(NaiveTime::MIN));
    assert_eq!(dto.at, day);
}

#[derive(Mappable, Debug, Clone, Copy, Default, PartialEq)]
enum Status {
    #[default]
    Pending,
    Shipped = 10,
    Delivered = 20,
}

#[derive(Mappable, Debug, Clone, Copy, Default, PartialEq)]
enum StatusDto {
    #[default]
    Unknown,
    Pending,
    Shipped,
    Delivered,
}

#[derive(Mappable, Debug, Clone, Copy, Default, PartialEq)]
enum LegacyStatus {
    #[default]
    #[remap(rename = "Pending")]
    Waiting,
    #[remap(rename = "Shipped")]
    Sent,
}

#[test]
fn test_enum_conversions() {
    let mapper = Mapper::default();
    let dto: StatusDto = mapper.map(&Status::Shipped).unwrap();
    assert_eq!(dto, StatusDto::Shipped);

    let code: i32 = mapper.map(&Status::Delivered).unwrap();
    assert_eq!(code, 20);
    let status: Status = mapper.map(&10u8).unwrap();
    assert_eq!(status, Status::Shipped);

    let name: String = mapper.map(&Status::Pending).unwrap();
    assert_eq!(name, "Pending");
    let status: Status = mapper.map(&"Delivered".to_string()).unwrap();
    assert_eq!(status, Status::Delivered);

    let legacy: LegacyStatus = mapper.map(&Status::Shipped).unwrap();
    assert_eq!(legacy, LegacyStatus::Sent);

    let err = mapper.map::<_, Status>(&StatusDto::Unknown).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_enum_property_without_counterpart_is_untouched() {
    #[derive(Mappable, Default)]
    struct Order {
        status: StatusDto,
    }

    #[derive(Mappable, Default)]
    struct Shipment {
        status: Status,
    }

    let mapper = Mapper::default();
    let mut shipment = Shipment {
        status: Status::Delivered,
    };
    mapper
        .map_into(
            &Order {
                status: StatusDto::Unknown,
            },
            &mut shipment,
        )
        .unwrap();
    assert_eq!(shipment.status, Status::Delivered);
    mapper
        .map_into(
            &Order {
                status: StatusDto::Pending,
            },
            &mut shipment,
        )
        .unwrap();
    assert_eq!(shipment.status, Status::Pending);
}
