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

//! annotation of track points with wind data and drift consistency.
//!
//! Only a few points per track are looked up in the [`WindService`]. All other points get the wind
//! of the closest (in plain lat/lon degrees) looked up point

use futures::{stream, StreamExt};
use tracing::{debug,info};

use drift_common::geo::planar_distance;
use drift_track::{Point, Track, TrackMap};
use crate::{openmeteo::WeatherSource, WindObservation, WindService};

fn apply_observation (p: &mut Point, obs: &WindObservation)->bool {
    if let (Some(ws),Some(wd)) = (obs.wind_speed, obs.wind_dir) {
        p.set_wind( ws, wd, obs.temp);
        true
    } else {
        false
    }
}

/// enrich the selected track: look up wind for the last `sample_size` points (sequentially, so that
/// we never have more than one request in flight), then propagate to the remaining points.
/// This does nothing if the track is empty or already has wind data. Returns the number of looked up points
pub async fn enrich_selected<S: WeatherSource> (service: &WindService<S>, track: &mut Track, sample_size: usize)->usize {
    if track.is_empty() || track.has_wind_data() {
        return 0
    }

    let start = track.len().saturating_sub( sample_size);
    let mut n_sampled = 0;

    for p in &mut track.points[start..] {
        let obs = service.get_wind( p.lat, p.lon, p.ts).await;
        if apply_observation( p, &obs) {
            n_sampled += 1;
        }
    }

    if n_sampled > 0 {
        let n_propagated = propagate_wind( &mut track.points);
        debug!("enriched track {}: {} sampled, {} propagated", track.id, n_sampled, n_propagated);
    } else {
        debug!("no wind data for track {}", track.id);
    }

    n_sampled
}

/// copy wind data from the closest enriched point to each point without wind data. Distance is planar
/// in degrees, ties go to the first enriched point. Only points that were enriched before the call are used
/// as sources. Returns the number of updated points
pub fn propagate_wind (points: &mut [Point])->usize {
    let sources: Vec<Point> = points.iter().filter( |p| p.has_wind()).cloned().collect();
    if sources.is_empty() {
        return 0
    }

    let mut n_updated = 0;
    for p in points.iter_mut().filter( |p| !p.has_wind()) {
        let mut closest = &sources[0];
        let mut min_dist = f64::INFINITY;

        for src in &sources {
            let dist = planar_distance( p.lat, p.lon, src.lat, src.lon);
            if dist < min_dist {
                min_dist = dist;
                closest = src;
            }
        }

        p.copy_wind_from( closest);
        n_updated += 1;
    }

    n_updated
}

/// bulk enrichment of up to `max_tracks` tracks: look up wind for the last point of each track with at most
/// `max_concurrent` requests in flight, then propagate within each track of the map.
/// Returns the number of tracks that got wind from the weather source
pub async fn enrich_tracks<S: WeatherSource> (service: &WindService<S>, tracks: &mut TrackMap, max_tracks: usize, max_concurrent: usize)->usize {
    let requests: Vec<(String,f64,f64,i64)> = tracks.values()
        .take( max_tracks)
        .filter_map( |t| t.last_point().map( |p| (t.id.clone(), p.lat, p.lon, p.ts)))
        .collect();

    let results: Vec<(String,WindObservation)> = stream::iter( requests)
        .map( |(id,lat,lon,ts)| async move {
            let obs = service.get_wind( lat, lon, ts).await;
            (id, obs)
        })
        .buffer_unordered( max_concurrent.max(1))
        .collect()
        .await;

    let mut n_enriched = 0;
    for (id,obs) in &results {
        if let Some(p) = tracks.get_mut(id).and_then( |t| t.points.last_mut()) {
            if apply_observation( p, obs) {
                n_enriched += 1;
            }
        }
    }

    for track in tracks.values_mut() {
        propagate_wind( &mut track.points);
    }

    info!("bulk wind enrichment: {}/{} tracks", n_enriched, results.len());
    n_enriched
}
