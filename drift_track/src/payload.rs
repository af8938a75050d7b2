/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

//! decoding of raw hourly position payloads.
//!
//! A payload is either a flat JSON array of rows or an object that wraps such an array in a `data` field.
//! Rows come in two shapes:
//! ```text
//!   [lat, lon, alt?]                                   -> RawRow::Tuple  (no id, no timestamp)
//!   {"id": "X", "lat": 10.0, "lon": 20.0, "ts": ...}   -> RawRow::Record (field names vary)
//! ```
//! Tuple rows have neither id nor timestamp. Their id is synthesized from the row index and their
//! timestamp from the hour index, assuming 1 min spacing within the hour

use serde_json::{Map, Value};

use drift_common::{datetime::{epoch_secs_from_f64, parse_epoch_secs, SECS_PER_HOUR, SECS_PER_MINUTE}, num::{coerce_number, coerce_opt_number}};
use crate::{Point, WINDOW_HOURS};

// candidate record field names, in order of priority
pub const ID_KEYS: &[&str] = &["id", "name", "device_id", "balloon_id"];
pub const LAT_KEYS: &[&str] = &["lat", "latitude"];
pub const LON_KEYS: &[&str] = &["lon", "longitude"];
pub const ALT_KEYS: &[&str] = &["alt", "altitude"];
pub const TS_KEYS: &[&str] = &["ts", "timestamp", "time"];

/// the rows of an hourly payload. Anything that is neither an array nor a `{data:[..]}` object has no rows
pub fn hour_rows (payload: &Value)->&[Value] {
    match payload {
        Value::Array(rows) => rows.as_slice(),
        Value::Object(obj) => match obj.get("data") {
            Some(Value::Array(rows)) => rows.as_slice(),
            _ => &[]
        }
        _ => &[]
    }
}

/// the id we use for rows that don't carry one
pub fn synthetic_id (row_index: usize)->String {
    format!("balloon_{}", row_index)
}

/// the assumed start time of an hour within the rolling window that ends at `now`
pub fn hour_base_secs (now: i64, hour_index: usize)->i64 {
    now - (WINDOW_HOURS as i64 - 1 - hour_index as i64) * SECS_PER_HOUR
}

/// a decoded row together with the entity id it belongs to
#[derive(Debug,Clone,PartialEq)]
pub struct Fix {
    pub id: String,
    pub point: Point,
}

/// the two row shapes we accept
#[derive(Debug,Clone,Copy)]
pub enum RawRow<'a> {
    Tuple(&'a [Value]),
    Record(&'a Map<String,Value>),
}

impl<'a> RawRow<'a> {
    /// discriminate row shapes. Arrays need at least lat and lon elements
    pub fn from_value (v: &'a Value)->Option<Self> {
        match v {
            Value::Array(elems) if elems.len() >= 2 => Some( RawRow::Tuple(elems.as_slice())),
            Value::Object(obj) => Some( RawRow::Record(obj)),
            _ => None
        }
    }

    /// turn this row into a Fix. Returns None if we don't get a finite latitude, longitude and timestamp
    pub fn to_fix (&self, hour_index: usize, row_index: usize, now: i64)->Option<Fix> {
        match self {
            RawRow::Tuple(elems) => {
                let lat = coerce_number( &elems[0])?;
                let lon = coerce_number( &elems[1])?;
                let alt = coerce_opt_number( elems.get(2));
                let ts = hour_base_secs( now, hour_index) + row_index as i64 * SECS_PER_MINUTE;

                Some( Fix { id: synthetic_id(row_index), point: Point::new( ts, lat, lon, alt) })
            }
            RawRow::Record(obj) => {
                let id = first_present( obj, ID_KEYS).map(id_string).unwrap_or_else( || synthetic_id(row_index));
                let lat = coerce_opt_number( first_present( obj, LAT_KEYS))?;
                let lon = coerce_opt_number( first_present( obj, LON_KEYS))?;
                let alt = coerce_opt_number( first_present( obj, ALT_KEYS));
                let ts = record_timestamp( first_present( obj, TS_KEYS)?)?;

                Some( Fix { id, point: Point::new( ts, lat, lon, alt) })
            }
        }
    }
}

/// the value of the first candidate key that is present and not null
fn first_present<'a> (obj: &'a Map<String,Value>, keys: &[&str])->Option<&'a Value> {
    keys.iter().find_map( |k| obj.get(*k).filter( |v| !v.is_null()))
}

fn id_string (v: &Value)->String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string()
    }
}

/// numbers are epoch seconds, strings are date-time specs. Everything else (including numbers outside
/// of the representable date-time range) is rejected
fn record_timestamp (v: &Value)->Option<i64> {
    match v {
        Value::Number(n) => n.as_f64().and_then(epoch_secs_from_f64),
        Value::String(s) => parse_epoch_secs(s),
        _ => None
    }
}

/// decode all valid fixes of an hourly payload, in row order. Malformed rows are skipped
pub fn decode_hour (payload: &Value, hour_index: usize, now: i64)->Vec<Fix> {
    hour_rows(payload).iter().enumerate()
        .filter_map( |(row_index,v)| RawRow::from_value(v).and_then( |row| row.to_fix( hour_index, row_index, now)))
        .collect()
}
