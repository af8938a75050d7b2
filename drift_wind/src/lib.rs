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

//! wind enrichment of balloon tracks.
//!
//! Surface wind observations are retrieved from a [`openmeteo::WeatherSource`] through a [`wind_service::WindService`]
//! that caches them in coarse space/time buckets ([`cache`]) and paces outgoing requests ([`pacer`]).
//! The [`enrich`] module uses the service to annotate track points with wind and drift consistency

use std::{fmt, time::Duration};
use serde::{Serialize,Deserialize};

use drift_common::{datetime::{self, deserialize_duration, serialize_duration}, is_none};

pub mod errors;
pub use errors::*;

pub mod cache;
pub mod pacer;
pub mod openmeteo;
pub mod wind_service;
pub use wind_service::WindService;

pub mod enrich;
pub use enrich::{enrich_selected, enrich_tracks, propagate_wind};

/// number of most recent track points we fetch wind for
pub const SAMPLE_SIZE: usize = 5;

/// minimum time between two outgoing weather requests
pub const REQUEST_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Clone,Serialize,Deserialize,Debug)]
pub struct WindConfig {
    /// base URL of the (Open-Meteo compatible) forecast API
    pub url: String,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_interval: Duration,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub request_timeout: Duration,

    pub user_agent: Option<String>,

    /// time series range around the requested time
    pub past_days: u32,
    pub forecast_days: u32,

    /// how many of the most recent track points get wind from the weather source (others are propagated)
    pub sample_size: usize,

    /// bulk enrichment limits
    pub max_tracks: usize,
    pub max_concurrent: usize,
}

impl Default for WindConfig {
    fn default() -> Self {
        WindConfig {
            url: "https://api.open-meteo.com/v1/forecast".to_string(),
            request_interval: REQUEST_INTERVAL,
            request_timeout: datetime::secs(20),
            user_agent: Some("drift-wind/0.1".to_string()),
            past_days: 1,
            forecast_days: 1,
            sample_size: SAMPLE_SIZE,
            max_tracks: 20,
            max_concurrent: 5,
        }
    }
}

/// surface wind at a given location and time. All fields absent means we don't have data
#[derive(Debug,Clone,Copy,Default,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct WindObservation {
    /// m/s
    #[serde(default, skip_serializing_if="is_none")]
    pub wind_speed: Option<f64>,

    /// degrees [0..360]
    #[serde(default, skip_serializing_if="is_none")]
    pub wind_dir: Option<f64>,

    /// Celsius
    #[serde(default, skip_serializing_if="is_none")]
    pub temp: Option<f64>,
}

impl WindObservation {
    pub fn new (wind_speed: f64, wind_dir: f64, temp: Option<f64>)->Self {
        WindObservation { wind_speed: Some(wind_speed), wind_dir: Some(wind_dir), temp }
    }

    /// the all-absent observation we return if we can't get data
    pub fn unavailable ()->Self { WindObservation::default() }

    /// can this be used to annotate a point (we need both speed and direction for that)
    pub fn is_available (&self)->bool {
        self.wind_speed.is_some() && self.wind_dir.is_some()
    }
}

impl fmt::Display for WindObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt (v: Option<f64>, prec: usize)->String {
            v.map( |x| format!("{:.*}", prec, x)).unwrap_or_else( || "-".to_string())
        }
        write!( f, "Wind( spd: {} m/s, dir: {}°, temp: {}°C )", opt(self.wind_speed,1), opt(self.wind_dir,0), opt(self.temp,1))
    }
}
