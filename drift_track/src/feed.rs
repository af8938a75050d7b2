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

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde_json::Value;
use tracing::{info,warn};

use drift_common::net::{self, build_client, expand_url_pattern};
use crate::{builder::build_tracks_with_max_speed, errors::{hour_failed, Result}, TrackConfig, TrackMap};

/// something that can retrieve the raw payload for a given hour (0..23) of the rolling window
#[async_trait]
pub trait PositionFeed: Send + Sync {
    async fn fetch_hour (&self, hour: usize)->Result<Value>;
}

/// the position feed we get from the public treasure endpoint (or a proxy with the same URL scheme)
pub struct HttpPositionFeed {
    client: Client,
    url_pattern: String,
}

impl HttpPositionFeed {
    pub fn new (config: &TrackConfig)->Result<Self> {
        let client = build_client( config.request_timeout, config.user_agent.as_deref())?;
        Ok( HttpPositionFeed { client, url_pattern: config.url.clone() } )
    }

    pub fn hour_url (&self, hour: usize)->String {
        expand_url_pattern( &self.url_pattern, |var| {
            if var == "hh" { Some( format!("{:02}", hour)) } else { None }
        })
    }
}

#[async_trait]
impl PositionFeed for HttpPositionFeed {
    async fn fetch_hour (&self, hour: usize)->Result<Value> {
        let url = self.hour_url(hour);
        net::get_json::<Value>( &self.client, &url, &[]).await
            .map_err( |e| hour_failed( hour, e))
    }
}

/// the outcome of a full reload
#[derive(Debug,Clone)]
pub struct TrackUpdate {
    pub tracks: TrackMap,
    /// epoch secs of the window end used for this update
    pub timestamp: i64,
    pub hours_ok: usize,
    pub hours_failed: usize,
}

/// fetch all hours concurrently and return the per-hour results in hour order
pub async fn load_hours<F: PositionFeed + ?Sized> (feed: &F, n_hours: usize)->Vec<Result<Value>> {
    join_all( (0..n_hours).map( |hour| feed.fetch_hour(hour))).await
}

/// fetch all hours concurrently and build tracks from the ones that succeeded.
/// Failed hours are logged and omitted, i.e. if all hours fail we get an empty track map
pub async fn load_all_hours<F: PositionFeed + ?Sized> (feed: &F, n_hours: usize, now: i64, max_speed: f64)->TrackUpdate {
    let mut payloads: Vec<Value> = Vec::with_capacity(n_hours);
    let mut hours_failed = 0;

    for res in load_hours( feed, n_hours).await {
        match res {
            Ok(payload) => payloads.push(payload),
            Err(e) => {
                warn!("{}", e);
                hours_failed += 1;
            }
        }
    }

    let hours_ok = payloads.len();
    let tracks = build_tracks_with_max_speed( &payloads, now, max_speed);
    info!("loaded {} tracks from {}/{} hours", tracks.len(), hours_ok, n_hours);

    TrackUpdate { tracks, timestamp: now, hours_ok, hours_failed }
}
