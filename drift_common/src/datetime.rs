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

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;

pub const SECS_PER_HOUR: i64 = 3600;
pub const SECS_PER_MINUTE: i64 = 60;

// for simple use cases that do not require to handle leap seconds and the like we provide our own wrappers
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }

/// current time as Unix epoch seconds
#[inline]
pub fn epoch_secs ()->i64 {
    Utc::now().timestamp()
}

pub fn from_epoch_secs (secs: i64)->Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
}

/// floored epoch seconds of a (fractional) numeric timestamp, provided it is a representable UTC date-time
pub fn epoch_secs_from_f64 (x: f64)->Option<i64> {
    if !x.is_finite() || x < i64::MIN as f64 || x >= i64::MAX as f64 { return None }

    let secs = x.floor() as i64;
    from_epoch_secs(secs).map( |_| secs)
}

pub fn fmt_epoch_secs (secs: i64)->String {
    match from_epoch_secs(secs) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
        None => secs.to_string()
    }
}

/// parse the date-time formats we encounter in position feeds:
///   - RFC 3339 / ISO 8601 with offset (`2025-06-01T12:00:00Z`, `2025-06-01T12:00:00+02:00`)
///   - naive date-time (with 'T' or space separator, optional fractional seconds) which is taken as UTC
///   - plain dates (`2025-06-01`) which are taken as UTC midnight
pub fn parse_datetime (s: &str)->Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() { return None }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.to_utc())
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%+") {
        return Some(dt.to_utc())
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some( DateTime::from_naive_utc_and_offset(ndt, Utc))
        }
    }

    if let Ok(nd) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return nd.and_hms_opt(0, 0, 0).map( |ndt| DateTime::from_naive_utc_and_offset(ndt, Utc))
    }

    None
}

/// parse a date-time string into epoch seconds (fractional seconds are truncated)
pub fn parse_epoch_secs (s: &str)->Option<i64> {
    parse_datetime(s).map(|dt| dt.timestamp())
}

//--- support for serde

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{:?}", dur);
    s.serialize_str(&dfm)
}
