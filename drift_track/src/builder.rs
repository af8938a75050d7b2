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

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use drift_common::geo::{bearing, haversine_distance};
use crate::{payload::{decode_hour, hour_rows, Fix}, Point, Track, TrackMap, MAX_SPEED};

/// accumulates hourly payloads into per-balloon point lists. Points are owned by the builder
/// until [`TrackBuilder::build`] turns them into cleaned tracks
#[derive(Debug)]
pub struct TrackBuilder {
    now: i64,
    max_speed: f64,
    points: IndexMap<String,Vec<Point>>, // in order of first appearance

    n_rows: usize,     // all rows seen
    n_rejected: usize, // malformed rows
    n_dups: usize,     // consecutive duplicates
}

impl TrackBuilder {
    /// `now` is the (epoch secs) end of the rolling window, used to synthesize timestamps of tuple rows
    pub fn new (now: i64)->Self {
        Self::with_max_speed( now, MAX_SPEED)
    }

    pub fn with_max_speed (now: i64, max_speed: f64)->Self {
        TrackBuilder { now, max_speed, points: IndexMap::new(), n_rows: 0, n_rejected: 0, n_dups: 0 }
    }

    /// add the rows of one hourly payload. `hour_index` is the position of the payload within the window
    pub fn add_hour (&mut self, hour_index: usize, payload: &Value) {
        let n_rows = hour_rows(payload).len();
        let fixes = decode_hour( payload, hour_index, self.now);

        self.n_rows += n_rows;
        self.n_rejected += n_rows - fixes.len();

        for Fix{id,point} in fixes {
            self.push_point( id, point);
        }
    }

    /// append point to the list of its entity unless it duplicates the previous one
    pub fn push_point (&mut self, id: String, p: Point) {
        let points = self.points.entry(id).or_default();
        if let Some(last) = points.last() {
            if last.is_same_fix(&p) {
                self.n_dups += 1;
                return
            }
        }
        points.push(p);
    }

    /// sort, derive kinematics and remove outliers for all accumulated tracks
    pub fn build (self)->TrackMap {
        debug!("building {} tracks from {} rows ({} rejected, {} duplicates)", self.points.len(), self.n_rows, self.n_rejected, self.n_dups);

        let max_speed = self.max_speed;
        self.points.into_iter()
            .map( |(id,points)| {
                let track = Track::with_points( id.clone(), clean_points( points, max_speed));
                (id, track)
            })
            .collect()
    }
}

/// time-sort points and compute speed and bearing with respect to the last retained point.
/// Points that imply more than `max_speed` m/s are dropped as outliers and are never used as predecessors.
/// Points that are exact duplicates of the last retained one (possible after sorting) are dropped too
pub fn clean_points (mut points: Vec<Point>, max_speed: f64)->Vec<Point> {
    points.sort_by_key( |p| p.ts); // stable

    let mut clean: Vec<Point> = Vec::with_capacity( points.len());
    let mut n_outliers = 0;

    for mut p in points {
        if let Some(q) = clean.last() {
            if q.is_same_fix(&p) { continue }

            let dist = haversine_distance( q.lat, q.lon, p.lat, p.lon);
            let dt = p.ts.saturating_sub(q.ts).max(1) as f64;
            let speed = dist / dt;

            if speed > max_speed {
                n_outliers += 1;
                continue
            }

            p.speed = Some(speed);
            p.bearing = Some( bearing( q.lat, q.lon, p.lat, p.lon));
        }
        clean.push(p);
    }

    if n_outliers > 0 { debug!("dropped {} outliers", n_outliers) }
    clean
}

/// build tracks from a sequence of hourly payloads, the hour index being the position within `payloads`.
/// Malformed rows are skipped, this never fails
pub fn build_tracks (payloads: &[Value], now: i64)->TrackMap {
    build_tracks_with_max_speed( payloads, now, MAX_SPEED)
}

pub fn build_tracks_with_max_speed (payloads: &[Value], now: i64, max_speed: f64)->TrackMap {
    let mut builder = TrackBuilder::with_max_speed( now, max_speed);
    for (hour_index,payload) in payloads.iter().enumerate() {
        builder.add_hour( hour_index, payload);
    }
    builder.build()
}
