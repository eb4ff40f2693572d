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

//! Value conversions between scalar kinds.
//!
//! Integer to integer conversions succeed when the value fits the target.
//! Integers always convert to floats. Floats convert to integers when they
//! are finite and, rounded half to even, in range. `f64` narrows to `f32`
//! when in range. `char` converts to and from integers through its code
//! point. Date and time values convert where no information has to be
//! invented beyond midnight and UTC.

use chrono::NaiveTime;
use paste::paste;

use crate::meta::ScalarKind;
use crate::reflect::{Reflect, Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Number {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

impl Number {
    pub(crate) fn of(scalar: &Scalar<'_>) -> Option<Number> {
        let number = match *scalar {
            Scalar::I8(v) => Number::Signed(v as i128),
            Scalar::I16(v) => Number::Signed(v as i128),
            Scalar::I32(v) => Number::Signed(v as i128),
            Scalar::I64(v) => Number::Signed(v as i128),
            Scalar::I128(v) => Number::Signed(v),
            Scalar::Isize(v) => Number::Signed(v as i128),
            Scalar::U8(v) => Number::Unsigned(v as u128),
            Scalar::U16(v) => Number::Unsigned(v as u128),
            Scalar::U32(v) => Number::Unsigned(v as u128),
            Scalar::U64(v) => Number::Unsigned(v as u128),
            Scalar::U128(v) => Number::Unsigned(v),
            Scalar::Usize(v) => Number::Unsigned(v as u128),
            Scalar::F32(v) => Number::Float(v as f64),
            Scalar::F64(v) => Number::Float(v),
            Scalar::Char(c) => Number::Unsigned(c as u32 as u128),
            _ => return None,
        };
        Some(number)
    }

    fn to_f64(self) -> f64 {
        match self {
            Number::Signed(v) => v as f64,
            Number::Unsigned(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    fn to_f32(self) -> Option<f32> {
        match self {
            Number::Float(v) if v.is_finite() && v.abs() > f32::MAX as f64 => None,
            other => Some(other.to_f64() as f32),
        }
    }

    fn to_char(self) -> Option<char> {
        let code = match self {
            Number::Signed(v) => u32::try_from(v).ok()?,
            Number::Unsigned(v) => u32::try_from(v).ok()?,
            Number::Float(_) => return None,
        };
        char::from_u32(code)
    }
}

/// Rounds half to even; `None` for NaN, infinities and values out of range.
fn float_to_integer(v: f64) -> Option<Number> {
    if !v.is_finite() {
        return None;
    }
    let rounded = v.round_ties_even();
    if rounded < 0.0 {
        if rounded < i128::MIN as f64 {
            return None;
        }
        Some(Number::Signed(rounded as i128))
    } else {
        if rounded >= u128::MAX as f64 {
            return None;
        }
        Some(Number::Unsigned(rounded as u128))
    }
}

macro_rules! impl_integer_targets {
    ($($kind:ident => $ty:ident),+ $(,)?) => {
        paste! {
            impl Number {
                $(
                    fn [<to_ $ty>](self) -> Option<$ty> {
                        match self {
                            Number::Signed(v) => <$ty>::try_from(v).ok(),
                            Number::Unsigned(v) => <$ty>::try_from(v).ok(),
                            Number::Float(v) => float_to_integer(v)?.[<to_ $ty>](),
                        }
                    }
                )+
            }

            fn integer_value(number: Number, kind: ScalarKind) -> Option<Box<dyn Reflect>> {
                match kind {
                    $(ScalarKind::$kind => number.[<to_ $ty>]().map(|v| Box::new(v) as Box<dyn Reflect>),)+
                    _ => None,
                }
            }
        }
    };
}

impl_integer_targets!(
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    I128 => i128,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    U128 => u128,
    Usize => usize,
);

/// Whether a value of kind `from` may convert to kind `to`. A `true` answer
/// does not guarantee every value converts; out of range numbers do not.
pub fn can_convert(from: ScalarKind, to: ScalarKind) -> bool {
    use ScalarKind::*;
    if from == to {
        return true;
    }
    match to {
        _ if to.is_integer() => from.is_number() || from == Char,
        F32 | F64 => from.is_number(),
        Char => from.is_integer(),
        Text => from == Char,
        Date | Time => matches!(from, DateTime | Timestamp),
        DateTime | Timestamp => matches!(from, Date | DateTime | Timestamp),
        _ => false,
    }
}

/// Converts `value` to a fresh value of kind `to`.
pub fn convert(value: &Scalar<'_>, to: ScalarKind) -> Option<Box<dyn Reflect>> {
    if to.is_integer() {
        return integer_value(Number::of(value)?, to);
    }
    let converted: Box<dyn Reflect> = match (to, *value) {
        (ScalarKind::F32 | ScalarKind::F64, Scalar::Char(_)) => return None,
        (ScalarKind::F32, _) => Box::new(Number::of(value)?.to_f32()?),
        (ScalarKind::F64, _) => Box::new(Number::of(value)?.to_f64()),
        (ScalarKind::Char, Scalar::Char(c)) => Box::new(c),
        (ScalarKind::Char, _) => match Number::of(value)? {
            Number::Float(_) => return None,
            number => Box::new(number.to_char()?),
        },
        (ScalarKind::Unit, Scalar::Unit) => Box::new(()),
        (ScalarKind::Bool, Scalar::Bool(b)) => Box::new(b),
        (ScalarKind::Text, Scalar::Text(s)) => Box::new(s.to_string()),
        (ScalarKind::Text, Scalar::Char(c)) => Box::new(c.to_string()),
        (ScalarKind::Duration, Scalar::Duration(d)) => Box::new(d),
        (ScalarKind::Date, Scalar::Date(d)) => Box::new(d),
        (ScalarKind::Date, Scalar::DateTime(dt)) => Box::new(dt.date()),
        (ScalarKind::Date, Scalar::Timestamp(ts)) => Box::new(ts.date_naive()),
        (ScalarKind::Time, Scalar::Time(t)) => Box::new(t),
        (ScalarKind::Time, Scalar::DateTime(dt)) => Box::new(dt.time()),
        (ScalarKind::Time, Scalar::Timestamp(ts)) => Box::new(ts.time()),
        (ScalarKind::DateTime, Scalar::DateTime(dt)) => Box::new(dt),
        (ScalarKind::DateTime, Scalar::Date(d)) => Box::new(d.and_time(NaiveTime::MIN)),
        (ScalarKind::DateTime, Scalar::Timestamp(ts)) => Box::new(ts.naive_utc()),
        (ScalarKind::Timestamp, Scalar::Timestamp(ts)) => Box::new(ts),
        (ScalarKind::Timestamp, Scalar::DateTime(dt)) => Box::new(dt.and_utc()),
        (ScalarKind::Timestamp, Scalar::Date(d)) => Box::new(d.and_time(NaiveTime::MIN).and_utc()),
        _ => return None,
    };
    Some(converted)
}

/// Converts an integer to the integer kind `to`, for enum discriminants.
pub(crate) fn convert_integer(value: i64, to: ScalarKind) -> Option<Box<dyn Reflect>> {
    convert(&Scalar::I64(value), to)
}

/// Reads an integer scalar as `i64`, for enum discriminants.
pub(crate) fn as_i64(value: &Scalar<'_>) -> Option<i64> {
    match Number::of(value)? {
        Number::Signed(v) => i64::try_from(v).ok(),
        Number::Unsigned(v) => i64::try_from(v).ok(),
        Number::Float(_) => None,
    }
}
