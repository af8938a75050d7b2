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

use std::time::Duration;
use tracing::{debug,warn};

use crate::{
    cache::{WindCache, WindCacheKey}, errors::{no_data, DriftWindError, Result}, openmeteo::WeatherSource,
    pacer::RequestPacer, WindConfig, WindObservation
};

/// cached and paced access to a weather source.
/// This is meant to be created once and shared by reference (or Arc) between all consumers
pub struct WindService<S: WeatherSource> {
    source: S,
    cache: WindCache,
    pacer: RequestPacer,
}

impl<S: WeatherSource> WindService<S> {
    pub fn new (source: S, config: &WindConfig)->Self {
        Self::with_interval( source, config.request_interval)
    }

    pub fn with_interval (source: S, request_interval: Duration)->Self {
        WindService { source, cache: WindCache::new(), pacer: RequestPacer::new(request_interval) }
    }

    pub fn source (&self)->&S { &self.source }
    pub fn cache (&self)->&WindCache { &self.cache }

    /// get the (cached) observation for the given location and time. Errors are logged and result in
    /// an unavailable observation, which is not cached so that a later call can retry
    pub async fn get_wind (&self, lat: f64, lon: f64, ts: i64)->WindObservation {
        match self.try_get_wind( lat, lon, ts).await {
            Ok(obs) => obs,
            Err(DriftWindError::RateLimited(_)) => {
                warn!("weather source rate limit reached, skipping wind data");
                WindObservation::unavailable()
            }
            Err(e) => {
                warn!("failed to get wind for [{:.4},{:.4}]: {}", lat, lon, e);
                WindObservation::unavailable()
            }
        }
    }

    /// same as [`Self::get_wind`] but reports why we could not get an observation
    pub async fn try_get_wind (&self, lat: f64, lon: f64, ts: i64)->Result<WindObservation> {
        let key = WindCacheKey::new( lat, lon, ts);
        if let Some(obs) = self.cache.get(&key) {
            return Ok(obs)
        }

        self.pacer.wait().await;

        let series = self.source.fetch_hourly( lat, lon, ts).await?;
        let obs = series.closest_observation(ts).ok_or_else( || no_data(&key))?;

        debug!("caching wind {} -> {}", key, obs);
        Ok( self.cache.insert( key, obs) )
    }

    pub fn cache_len (&self)->usize { self.cache.len() }
}
