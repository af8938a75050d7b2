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

use std::{sync::{atomic::{AtomicUsize, Ordering}, Arc}, time::Duration};
use async_trait::async_trait;
use serde_json::{json, Value};

use drift_track::{
    errors::{hour_failed, Result}, feed::{load_all_hours, PositionFeed, HttpPositionFeed},
    leaderboard::{find_tracks, leaderboard, ScoreClass}, monitor::{MonitorCmd, TrackMonitor},
    format_kmh, hour_names, Point, Track, TrackConfig, TrackMap, MAX_SPEED
};

/// a feed that reports each hour as a single tuple row moving north, with configurable failing hours
struct MockFeed {
    failing: Vec<usize>,
    n_calls: AtomicUsize,
}

impl MockFeed {
    fn new (failing: Vec<usize>)->Self { MockFeed { failing, n_calls: AtomicUsize::new(0) } }
    fn n_calls (&self)->usize { self.n_calls.load(Ordering::SeqCst) }
}

#[async_trait]
impl PositionFeed for MockFeed {
    async fn fetch_hour (&self, hour: usize)->Result<Value> {
        self.n_calls.fetch_add( 1, Ordering::SeqCst);
        if self.failing.contains(&hour) {
            Err( hour_failed( hour, "status 500"))
        } else {
            Ok( json!([[10.0 + hour as f64 * 0.01, 20.0, 15000]]) )
        }
    }
}

const NOW: i64 = 1_750_000_000;

#[tokio::test]
async fn test_all_hours_ok() {
    let feed = MockFeed::new( vec![]);
    let update = load_all_hours( &feed, 24, NOW, MAX_SPEED).await;

    assert_eq!( feed.n_calls(), 24);
    assert_eq!( update.hours_ok, 24);
    assert_eq!( update.hours_failed, 0);
    assert_eq!( update.timestamp, NOW);

    let t = &update.tracks["balloon_0"];
    println!("{} points, last: {}", t.len(), t.last_point().unwrap());
    assert_eq!( t.len(), 24);
    assert_eq!( t.last_point().unwrap().ts, NOW);
}

#[tokio::test]
async fn test_failing_hours() {
    let feed = MockFeed::new( vec![3, 7, 11]);
    let update = load_all_hours( &feed, 24, NOW, MAX_SPEED).await;

    assert_eq!( update.hours_ok, 21);
    assert_eq!( update.hours_failed, 3);
    // hour index is the position among the successful payloads
    assert_eq!( update.tracks["balloon_0"].len(), 21);
}

#[tokio::test]
async fn test_all_hours_failing() {
    let feed = MockFeed::new( (0..24).collect());
    let update = load_all_hours( &feed, 24, NOW, MAX_SPEED).await;

    assert_eq!( update.hours_failed, 24);
    assert!( update.tracks.is_empty());
}

#[tokio::test]
async fn test_monitor_refresh() {
    let feed = Arc::new( MockFeed::new( vec![]));
    let config = TrackConfig { n_hours: 2, reload_interval: Duration::from_secs(3600), ..TrackConfig::default() };
    let monitor = TrackMonitor::new( feed.clone(), &config);

    let (jh, cmd_tx, mut update_rx) = monitor.spawn(4);

    let update = update_rx.recv().await.expect("no initial update");
    println!("initial update: {} tracks", update.tracks.len());
    assert_eq!( update.tracks.len(), 1);
    assert_eq!( feed.n_calls(), 2);

    cmd_tx.send( MonitorCmd::Refresh).await.expect("monitor gone");
    let update = update_rx.recv().await.expect("no refresh update");
    assert_eq!( update.hours_ok, 2);
    assert_eq!( feed.n_calls(), 4);

    cmd_tx.send( MonitorCmd::Terminate).await.expect("monitor gone");
    jh.await.expect("monitor task failed");
}

#[test]
fn test_hour_url() {
    let config = TrackConfig::default();
    let feed = HttpPositionFeed::new( &config).expect("failed to build feed");
    assert_eq!( feed.hour_url(0), "https://a.windbornesystems.com/treasure/00.json");
    assert_eq!( feed.hour_url(23), "https://a.windbornesystems.com/treasure/23.json");

    let names = hour_names(24);
    assert_eq!( names.first().map(|s| s.as_str()), Some("00"));
    assert_eq!( names.last().map(|s| s.as_str()), Some("23"));
}

fn scored_track (id: &str, wind_dirs: &[f64])->Track {
    let points = wind_dirs.iter().enumerate().map( |(i,wd)| {
        let mut p = Point::new( i as i64 * 60, 0.0, i as f64 * 0.001, None);
        p.bearing = Some(90.0);
        p.set_wind( 10.0, *wd, None);
        p
    }).collect();
    Track::with_points( id, points)
}

#[test]
fn test_leaderboard() {
    let mut tracks = TrackMap::new();
    for t in [
        scored_track( "balloon_0", &[90.0, 90.0]),   // 1.0
        scored_track( "balloon_1", &[270.0]),        // -1.0
        scored_track( "balloon_2", &[150.0, 90.0]),  // 0.75
        Track::with_points( "balloon_3", vec![ Point::new( 0, 1.0, 2.0, None)]), // no score
    ] {
        tracks.insert( t.id.clone(), t);
    }

    let items = leaderboard( &tracks, 10);
    for it in &items { println!("{}: {:.3}", it.id, it.avg); }

    let ids: Vec<&str> = items.iter().map( |it| it.id.as_str()).collect();
    assert_eq!( ids, vec!["balloon_0", "balloon_2", "balloon_1"]);
    assert!( items[0].last.is_some());

    assert_eq!( leaderboard( &tracks, 1).len(), 1);

    assert_eq!( ScoreClass::of( tracks["balloon_0"].score()), ScoreClass::Good);
    assert_eq!( ScoreClass::of( tracks["balloon_2"].score()), ScoreClass::Good);
    assert_eq!( ScoreClass::of( Some(0.5)), ScoreClass::Fair);
    assert_eq!( ScoreClass::of( Some(0.3)), ScoreClass::Poor);
    assert_eq!( ScoreClass::of( tracks["balloon_1"].score()), ScoreClass::Poor);
    assert_eq!( ScoreClass::of( tracks["balloon_3"].score()), ScoreClass::Unknown);
    assert_eq!( ScoreClass::Unknown.to_string(), "unknown");

    assert_eq!( find_tracks( &tracks, "").len(), 4);
    assert_eq!( find_tracks( &tracks, " 2 ")[0].id, "balloon_2");
    assert!( find_tracks( &tracks, "42").is_empty());
}

#[test]
fn test_format_kmh() {
    assert_eq!( format_kmh( Some(10.0)), "36.0 km/h");
    assert_eq!( format_kmh( None), "-");
}
