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

//! client for the Open-Meteo forecast API (https://open-meteo.com/en/docs).
//! We only request hourly 10m wind and 2m temperature series with unix timestamps, e.g.
//! ```text
//! {"hourly": {"time": [1750000000, ...], "windspeed_10m": [5.2, ...], "winddirection_10m": [270, ...], "temperature_2m": [12.1, ...]}}
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use tracing::debug;

use drift_common::{net::{self, build_client}, num::finite};
use crate::{errors::Result, WindConfig, WindObservation};

pub const HOURLY_FIELDS: &str = "windspeed_10m,winddirection_10m,temperature_2m";

/// parallel hourly series. Values can be null in the response
#[derive(Debug,Clone,Default,Serialize,Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<i64>,

    #[serde(default)]
    pub windspeed_10m: Vec<Option<f64>>,

    #[serde(default)]
    pub winddirection_10m: Vec<Option<f64>>,

    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
}

impl HourlySeries {
    pub fn is_empty (&self)->bool { self.time.is_empty() }

    /// index of the first entry with minimal time difference to `ts`
    pub fn closest_index (&self, ts: i64)->Option<usize> {
        self.time.iter().enumerate()
            .min_by_key( |(_,t)| t.abs_diff(ts))
            .map( |(i,_)| i)
    }

    /// the observation at the given index. Missing or null values are absent
    pub fn observation_at (&self, idx: usize)->WindObservation {
        fn value_at (v: &[Option<f64>], idx: usize)->Option<f64> {
            v.get(idx).copied().flatten().and_then(finite)
        }

        WindObservation {
            wind_speed: value_at( &self.windspeed_10m, idx),
            wind_dir: value_at( &self.winddirection_10m, idx),
            temp: value_at( &self.temperature_2m, idx),
        }
    }

    /// the observation closest in time to `ts`, if we have any times
    pub fn closest_observation (&self, ts: i64)->Option<WindObservation> {
        self.closest_index(ts).map( |idx| self.observation_at(idx))
    }
}

#[derive(Debug,Clone,Default,Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

/// the external provider of hourly surface wind series
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// retrieve the hourly series around `ts` for the given location
    async fn fetch_hourly (&self, lat: f64, lon: f64, ts: i64)->Result<HourlySeries>;
}

pub struct OpenMeteoClient {
    client: Client,
    url: String,
    past_days: u32,
    forecast_days: u32,
}

impl OpenMeteoClient {
    pub fn new (config: &WindConfig)->Result<Self> {
        let client = build_client( config.request_timeout, config.user_agent.as_deref())?;
        Ok( OpenMeteoClient { client, url: config.url.clone(), past_days: config.past_days, forecast_days: config.forecast_days } )
    }

    pub fn query (&self, lat: f64, lon: f64)->Vec<(&'static str,String)> {
        vec![
            ("latitude", lat.to_string()),
            ("longitude", lon.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("past_days", self.past_days.to_string()),
            ("forecast_days", self.forecast_days.to_string()),
            ("timeformat", "unixtime".to_string()),
        ]
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn fetch_hourly (&self, lat: f64, lon: f64, ts: i64)->Result<HourlySeries> {
        debug!("requesting wind for [{:.4},{:.4}]", lat, lon);
        let response: ForecastResponse = net::get_json( &self.client, &self.url, &self.query( lat, lon)).await?;
        Ok( response.hourly.unwrap_or_default() )
    }
}
