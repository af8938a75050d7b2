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

use std::{sync::atomic::{AtomicUsize, Ordering}, time::Duration};
use async_trait::async_trait;
use serde_json::json;

use drift_common::config::load_config;
use drift_track::{build_tracks, feed::TrackUpdate, TrackConfig};
use drift_wind::{errors::Result, openmeteo::{HourlySeries, WeatherSource}, WindConfig, WindService};
use drift_live::{DriftLiveError, LiveCmd, LiveState};

struct MockSource { n_calls: AtomicUsize }

#[async_trait]
impl WeatherSource for MockSource {
    async fn fetch_hourly (&self, lat: f64, lon: f64, ts: i64)->Result<HourlySeries> {
        self.n_calls.fetch_add( 1, Ordering::SeqCst);
        Ok( HourlySeries {
            time: vec![ts],
            windspeed_10m: vec![ Some(8.0)],
            winddirection_10m: vec![ Some(0.0)],
            temperature_2m: vec![ Some(-45.0)],
        })
    }
}

/// two hours of tuple rows, i.e. balloon_0..balloon_2 with two points each, moving north
fn update (timestamp: i64)->TrackUpdate {
    let payloads = vec![
        json!([[10.0, 20.0], [20.0, 30.0], [30.0, 40.0]]),
        json!([[10.1, 20.0], [20.1, 30.0], [30.1, 40.0]]),
    ];
    let tracks = build_tracks( &payloads, timestamp);
    TrackUpdate { tracks, timestamp, hours_ok: 2, hours_failed: 22 }
}

#[test]
fn test_parse_cmds() {
    assert_eq!( LiveCmd::parse("r"), Some(LiveCmd::Refresh));
    assert_eq!( LiveCmd::parse("  q \n"), Some(LiveCmd::Quit));
    assert_eq!( LiveCmd::parse("w"), Some(LiveCmd::ToggleWind));
    assert_eq!( LiveCmd::parse("s 12"), Some(LiveCmd::Select("12".to_string())));
    assert_eq!( LiveCmd::parse("s   balloon_3 "), Some(LiveCmd::Select("balloon_3".to_string())));
    assert_eq!( LiveCmd::parse("s"), None);
    assert_eq!( LiveCmd::parse("r now"), None);
    assert_eq!( LiveCmd::parse("x"), None);
    assert_eq!( LiveCmd::parse(""), None);
}

#[test]
fn test_selection() {
    let mut state = LiveState::new( None, true);
    state.apply_update( update( 1_750_000_000));
    assert_eq!( state.selected.as_deref(), Some("balloon_0"));

    assert_eq!( state.select("2").unwrap(), "balloon_2");
    assert_eq!( state.select("balloon_1").unwrap(), "balloon_1");
    assert!( matches!( state.select("7"), Err(DriftLiveError::UnknownTrack(_))));
    assert!( state.select(" ").is_err());
    assert_eq!( state.selected.as_deref(), Some("balloon_1"));

    // selection survives reloads as long as the track exists
    state.apply_update( update( 1_750_000_300));
    assert_eq!( state.selected.as_deref(), Some("balloon_1"));

    let mut empty = update( 1_750_000_600);
    empty.tracks.clear();
    state.apply_update( empty);
    assert!( state.selected.is_none());
    assert!( state.selected_track().is_none());
}

#[tokio::test]
async fn test_enrich_selection() {
    let service = WindService::with_interval( MockSource{ n_calls: AtomicUsize::new(0) }, Duration::from_millis(1));
    let mut state = LiveState::new( None, false);
    state.apply_update( update( 1_750_000_000));

    // wind disabled
    assert_eq!( state.enrich_selection( &service, 5).await, 0);
    assert_eq!( service.source().n_calls.load(Ordering::SeqCst), 0);

    assert!( state.toggle_wind());
    assert_eq!( state.enrich_selection( &service, 5).await, 2);
    assert!( state.selected_track().unwrap().has_wind_data());

    let snapshot = state.snapshot(5);
    let json = serde_json::to_value(&snapshot).unwrap();
    println!("{}", serde_json::to_string_pretty(&json).unwrap());

    assert_eq!( json["nTracks"], 3);
    assert_eq!( json["hoursFailed"], 22);
    assert_eq!( json["selected"]["id"], "balloon_0");
    assert_eq!( json["scoreClass"], "Good");
    assert_eq!( json["leaderboard"].as_array().unwrap().len(), 1);
    assert_eq!( json["selected"]["points"][1]["windSpeed"], 8.0);

    // unenriched selection has no score
    state.select("1").unwrap();
    let snapshot = state.snapshot(5);
    assert!( snapshot.score.is_none());
    assert_eq!( snapshot.leaderboard.len(), 1);
}

#[test]
fn test_load_configs() {
    let track_config: TrackConfig = load_config("configs/track.ron").expect("failed to load track config");
    assert_eq!( track_config.n_hours, 24);
    assert_eq!( track_config.reload_interval, Duration::from_secs(300));

    let wind_config: WindConfig = load_config("configs/wind.ron").expect("failed to load wind config");
    assert_eq!( wind_config.request_interval, Duration::from_millis(200));
    assert_eq!( wind_config.sample_size, 5);
}
