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
#![allow(unused,uncommon_codepoints,non_snake_case)]

//! spherical earth geodesy on raw latitude/longitude degrees.
//! All functions take (lat,lon) argument order since that is what position feeds report

use std::fmt;
use serde::{Serialize,Deserialize};

use crate::{asin, atan2, cos, deg, pow2, rad, sin, sin2, sqrt};
use crate::angle::normalize_360;
use crate::geo_constants::MEAN_EARTH_RADIUS;

/// great circle distance in meters between two positions (haversine formula)
pub fn haversine_distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dLat = rad(lat2 - lat1);
    let dLon = rad(lon2 - lon1);
    let a = sin2(dLat / 2.0) + cos(rad(lat1)) * cos(rad(lat2)) * sin2(dLon / 2.0);

    2.0 * MEAN_EARTH_RADIUS * asin(sqrt(a))
}

/// initial (forward azimuth) bearing in degrees [0..360) when going from position 1 to position 2
pub fn bearing (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let φ1 = rad(lat1);
    let φ2 = rad(lat2);
    let Δλ = rad(lon2 - lon1);

    let y = sin(Δλ) * cos(φ2);
    let x = cos(φ1) * sin(φ2) - sin(φ1) * cos(φ2) * cos(Δλ);

    normalize_360( deg(atan2(y, x)))
}

/// euclidean distance in raw degree space. This is *not* a metric on the earth surface - it is only
/// meant for nearest neighbor lookups within small regions
#[inline]
pub fn planar_distance (lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    sqrt( pow2(lat1 - lat2) + pow2(lon1 - lon2))
}

/// a plain latitude/longitude degree pair
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new (lat: f64, lon: f64)->Self { LatLon{lat,lon} }

    pub fn is_finite (&self)->bool { self.lat.is_finite() && self.lon.is_finite() }

    pub fn distance_to (&self, other: &LatLon)->f64 { haversine_distance( self.lat, self.lon, other.lat, other.lon) }
    pub fn bearing_to (&self, other: &LatLon)->f64 { bearing( self.lat, self.lon, other.lat, other.lon) }
    pub fn planar_distance_to (&self, other: &LatLon)->f64 { planar_distance( self.lat, self.lon, other.lat, other.lon) }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lat, self.lon)
    }
}
