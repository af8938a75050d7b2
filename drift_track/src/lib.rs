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

//! balloon track reconstruction from hourly position feed payloads.
//!
//! The position feed publishes one JSON payload per hour of a rolling 24h window. Payloads are
//! decoded into raw rows ([`payload`]), grouped into per-balloon [`Track`]s with derived speed
//! and bearing ([`builder`]) and periodically reloaded through a [`feed::PositionFeed`] ([`monitor`])

use std::{fmt, time::Duration};
use indexmap::IndexMap;
use serde::{Serialize,Deserialize};

use drift_common::{
    angle::heading_alignment, datetime::{self, deserialize_duration, serialize_duration},
    is_none, num::mean
};

pub mod errors;
pub use errors::*;

pub mod payload;
pub mod builder;
pub use builder::{build_tracks, TrackBuilder};

pub mod feed;
pub mod monitor;
pub mod leaderboard;

/// number of hourly payloads that make up the rolling window
pub const WINDOW_HOURS: usize = 24;

/// implied speed in m/s above which a position is considered to be a sensor/link outlier
pub const MAX_SPEED: f64 = 300.0;

/// general position feed and track reconstruction configuration
#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct TrackConfig {
    /// URL pattern of the hourly position feed. `${hh}` gets expanded into the zero padded hour (00..23)
    pub url: String,

    /// number of hours to retrieve
    pub n_hours: usize,

    /// interval in which we reload all hours
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub reload_interval: Duration,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    pub user_agent: Option<String>,

    /// outlier threshold in m/s
    pub max_speed: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        TrackConfig {
            url: "https://a.windbornesystems.com/treasure/${hh}.json".to_string(),
            n_hours: WINDOW_HOURS,
            reload_interval: datetime::minutes(5),
            request_timeout: datetime::secs(30),
            user_agent: Some("drift-track/0.1".to_string()),
            max_speed: MAX_SPEED,
        }
    }
}

/// a single observation of a balloon. Kinematic fields (speed,bearing) are derived by the track builder,
/// wind fields and consistency are only set by wind enrichment
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct Point {
    /// epoch seconds
    pub ts: i64,
    pub lat: f64,
    pub lon: f64,

    /// meters
    #[serde(default, skip_serializing_if="is_none")]
    pub alt: Option<f64>,

    /// m/s
    #[serde(default, skip_serializing_if="is_none")]
    pub speed: Option<f64>,

    /// degrees [0..360)
    #[serde(default, skip_serializing_if="is_none")]
    pub bearing: Option<f64>,

    /// m/s
    #[serde(default, skip_serializing_if="is_none")]
    pub wind_speed: Option<f64>,

    /// degrees [0..360]
    #[serde(default, skip_serializing_if="is_none")]
    pub wind_dir: Option<f64>,

    /// Celsius
    #[serde(default, skip_serializing_if="is_none")]
    pub temp: Option<f64>,

    /// [-1..1]
    #[serde(default, skip_serializing_if="is_none")]
    pub consistency: Option<f64>,
}

impl Point {
    pub fn new (ts: i64, lat: f64, lon: f64, alt: Option<f64>)->Self {
        Point { ts, lat, lon, alt, speed: None, bearing: None, wind_speed: None, wind_dir: None, temp: None, consistency: None }
    }

    /// do we have the same timestamp and position
    pub fn is_same_fix (&self, other: &Point)->bool {
        self.ts == other.ts && self.lat == other.lat && self.lon == other.lon
    }

    /// a point counts as enriched only if it has both wind speed and direction
    pub fn has_wind (&self)->bool {
        self.wind_speed.is_some() && self.wind_dir.is_some()
    }

    /// set wind fields and (if we have a bearing) compute the drift consistency
    pub fn set_wind (&mut self, wind_speed: f64, wind_dir: f64, temp: Option<f64>) {
        self.wind_speed = Some(wind_speed);
        self.wind_dir = Some(wind_dir);
        self.temp = temp;
        self.consistency = self.bearing.map( |b| heading_alignment( b, wind_dir));
    }

    /// copy the wind fields of another (enriched) point
    pub fn copy_wind_from (&mut self, other: &Point) {
        if let (Some(ws),Some(wd)) = (other.wind_speed, other.wind_dir) {
            self.set_wind( ws, wd, other.temp);
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "Point( {}, [{:.4},{:.4}]", datetime::fmt_epoch_secs(self.ts), self.lat, self.lon)?;
        if let Some(alt) = self.alt { write!( f, ", alt: {:.0}", alt)?; }
        if let Some(spd) = self.speed { write!( f, ", spd: {:.1}", spd)?; }
        if let Some(hdg) = self.bearing { write!( f, ", hdg: {:.0}", hdg)?; }
        if let Some(ws) = self.wind_speed { write!( f, ", wspd: {:.1}", ws)?; }
        if let Some(wd) = self.wind_dir { write!( f, ", wdir: {:.0}", wd)?; }
        if let Some(t) = self.temp { write!( f, ", temp: {:.1}", t)?; }
        if let Some(c) = self.consistency { write!( f, ", cons: {:.2}", c)?; }
        write!( f, " )")
    }
}

/// the time ordered position history of a single balloon
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Track {
    pub id: String,
    pub points: Vec<Point>,
}

impl Track {
    pub fn new (id: impl ToString)->Self { Track { id: id.to_string(), points: Vec::new() } }

    pub fn with_points (id: impl ToString, points: Vec<Point>)->Self { Track { id: id.to_string(), points } }

    pub fn len (&self)->usize { self.points.len() }
    pub fn is_empty (&self)->bool { self.points.is_empty() }

    pub fn last_point (&self)->Option<&Point> { self.points.last() }

    /// does any of our points have wind data
    pub fn has_wind_data (&self)->bool {
        self.points.iter().any( |p| p.has_wind())
    }

    /// average consistency over all points that have one
    pub fn score (&self)->Option<f64> {
        mean( self.points.iter().filter_map( |p| p.consistency))
    }
}

/// tracks keyed by balloon id, in order of first appearance within the feed.
/// This is replaced wholesale on each reload
pub type TrackMap = IndexMap<String,Track>;

/// the zero padded hour names used by the position feed
pub fn hour_names (n_hours: usize)->Vec<String> {
    (0..n_hours).map( |h| format!("{:02}", h)).collect()
}

/// speed in m/s as km/h display string
pub fn format_kmh (speed: Option<f64>)->String {
    match speed {
        Some(ms) => format!("{:.1} km/h", ms * 3.6),
        None => "-".to_string()
    }
}
