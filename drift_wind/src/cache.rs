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

//! the spatial/temporal wind observation cache.
//! Entries are keyed by 0.25° lat/lon buckets and 2h time buckets, are never overwritten and never expire

use std::fmt;
use dashmap::DashMap;

use crate::WindObservation;

/// number of buckets per degree
pub const BUCKETS_PER_DEGREE: f64 = 4.0;

/// seconds per time bucket
pub const TIME_BUCKET_SECS: i64 = 7200;

/// bucket index of a lat or lon value (rounding half up, i.e. 10.125 -> 10.25 and -10.125 -> -10.0)
pub fn degree_bucket (deg: f64)->i64 {
    (deg * BUCKETS_PER_DEGREE + 0.5).floor() as i64
}

/// bucket index of an epoch seconds value
pub fn time_bucket (ts: i64)->i64 {
    ts.div_euclid( TIME_BUCKET_SECS)
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub struct WindCacheKey {
    pub lat_bucket: i64,
    pub lon_bucket: i64,
    pub time_bucket: i64,
}

impl WindCacheKey {
    pub fn new (lat: f64, lon: f64, ts: i64)->Self {
        WindCacheKey { lat_bucket: degree_bucket(lat), lon_bucket: degree_bucket(lon), time_bucket: time_bucket(ts) }
    }

    /// rounded degrees of the bucket
    pub fn lat (&self)->f64 { self.lat_bucket as f64 / BUCKETS_PER_DEGREE }
    pub fn lon (&self)->f64 { self.lon_bucket as f64 / BUCKETS_PER_DEGREE }
}

impl fmt::Display for WindCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}_{}_{}", self.lat(), self.lon(), self.time_bucket)
    }
}

/// a concurrent map of observations that only supports insertion of new keys
#[derive(Debug,Default)]
pub struct WindCache {
    entries: DashMap<WindCacheKey,WindObservation>,
}

impl WindCache {
    pub fn new ()->Self { WindCache { entries: DashMap::new() } }

    pub fn get (&self, key: &WindCacheKey)->Option<WindObservation> {
        self.entries.get(key).map( |e| *e.value())
    }

    pub fn contains (&self, key: &WindCacheKey)->bool {
        self.entries.contains_key(key)
    }

    /// store observation unless there already is an entry for this key, in which case we return the existing one
    pub fn insert (&self, key: WindCacheKey, obs: WindObservation)->WindObservation {
        *self.entries.entry(key).or_insert(obs).value()
    }

    pub fn len (&self)->usize { self.entries.len() }
    pub fn is_empty (&self)->bool { self.entries.is_empty() }
}
