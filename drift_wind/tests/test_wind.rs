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

use std::{sync::{atomic::{AtomicUsize, Ordering}, Mutex}, time::Duration};
use async_trait::async_trait;
use tokio::time::Instant;

use drift_common::net::NetError;
use drift_wind::{
    cache::{degree_bucket, time_bucket, WindCache, WindCacheKey}, errors::{DriftWindError, Result},
    openmeteo::{ForecastResponse, HourlySeries, WeatherSource}, WindConfig, WindObservation, WindService, REQUEST_INTERVAL
};

#[derive(Debug,Clone,Copy,PartialEq)]
enum Mode { Ok, RateLimited, Empty, Fail }

struct MockSource {
    mode: Mutex<Mode>,
    n_calls: AtomicUsize,
}

impl MockSource {
    fn new (mode: Mode)->Self { MockSource { mode: Mutex::new(mode), n_calls: AtomicUsize::new(0) } }
    fn n_calls (&self)->usize { self.n_calls.load(Ordering::SeqCst) }
    fn set_mode (&self, mode: Mode) { *self.mode.lock().unwrap() = mode; }
}

#[async_trait]
impl WeatherSource for MockSource {
    async fn fetch_hourly (&self, lat: f64, lon: f64, ts: i64)->Result<HourlySeries> {
        self.n_calls.fetch_add( 1, Ordering::SeqCst);
        let mode = *self.mode.lock().unwrap();
        match mode {
            Mode::Ok => Ok( HourlySeries {
                time: vec![ ts - 3600, ts, ts + 3600],
                windspeed_10m: vec![ Some(1.0), Some(2.0), Some(3.0)],
                winddirection_10m: vec![ Some(180.0), Some(190.0), Some(200.0)],
                temperature_2m: vec![ Some(10.0), Some(11.0), None],
            }),
            Mode::RateLimited => Err( NetError::RateLimited("mock".to_string()).into()),
            Mode::Empty => Ok( HourlySeries::default()),
            Mode::Fail => Err( NetError::StatusError( 500, "mock".to_string()).into()),
        }
    }
}

const T: i64 = 7200 * 243_000; // start of a time bucket

#[test]
fn test_cache_key() {
    assert_eq!( degree_bucket(10.1), 40);
    assert_eq!( degree_bucket(10.05), 40);
    assert_eq!( degree_bucket(10.125), 41);   // half up
    assert_eq!( degree_bucket(-10.125), -40); // half up
    assert_eq!( degree_bucket(-10.2), -41);

    assert_eq!( time_bucket(0), 0);
    assert_eq!( time_bucket(7199), 0);
    assert_eq!( time_bucket(7200), 1);
    assert_eq!( time_bucket(-1), -1);

    let k1 = WindCacheKey::new( 10.1, 20.1, T);
    let k2 = WindCacheKey::new( 10.05, 20.05, T + 3000);
    let k3 = WindCacheKey::new( 10.1, 20.2, T);
    let k4 = WindCacheKey::new( 10.1, 20.1, T + 7200);
    println!("keys: {}, {}, {}, {}", k1, k2, k3, k4);

    assert_eq!( k1, k2);
    assert_ne!( k1, k3);
    assert_ne!( k1, k4);
    assert_eq!( k1.to_string(), format!("10_20_{}", T / 7200));
    assert_eq!( WindCacheKey::new( 10.2, -20.2, 0).to_string(), "10.25_-20.25_0");
}

#[test]
fn test_cache_entries_are_immutable() {
    let cache = WindCache::new();
    let key = WindCacheKey::new( 1.0, 2.0, 3);

    let first = WindObservation::new( 5.0, 90.0, None);
    assert_eq!( cache.insert( key, first), first);
    assert_eq!( cache.insert( key, WindObservation::new( 7.0, 180.0, Some(1.0))), first);
    assert_eq!( cache.get(&key), Some(first));
    assert_eq!( cache.len(), 1);
}

#[test]
fn test_closest_time() {
    let series = HourlySeries {
        time: vec![ 0, 3600, 7200, 10800],
        windspeed_10m: vec![ Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
        winddirection_10m: vec![ Some(10.0), Some(20.0), None, Some(40.0)],
        temperature_2m: vec![],
    };

    assert_eq!( series.closest_index(5000), Some(1));
    assert_eq!( series.closest_index(5400), Some(1)); // tie goes to first
    assert_eq!( series.closest_index(-100), Some(0));
    assert_eq!( series.closest_index(99999), Some(3));
    assert_eq!( series.closest_index(i64::MIN), Some(0));
    assert_eq!( series.closest_index(i64::MAX), Some(3));

    let obs = series.observation_at(2);
    assert_eq!( obs, WindObservation { wind_speed: Some(3.0), wind_dir: None, temp: None });
    assert!( !obs.is_available());

    assert!( HourlySeries::default().closest_index(0).is_none());
}

#[test]
fn test_parse_response() {
    let json = r#"{
        "latitude": 10.0, "longitude": 20.0,
        "hourly_units": {"time": "unixtime"},
        "hourly": {
            "time": [1750000000, 1750003600],
            "windspeed_10m": [5.5, null],
            "winddirection_10m": [270, 280],
            "temperature_2m": [12.5, 12.0]
        }
    }"#;
    let response: ForecastResponse = serde_json::from_str(json).expect("failed to parse response");
    let series = response.hourly.expect("no hourly data");

    let obs = series.closest_observation( 1750000100).unwrap();
    println!("{}", obs);
    assert_eq!( obs, WindObservation::new( 5.5, 270.0, Some(12.5)));
    assert!( !series.closest_observation( 1750003500).unwrap().is_available());

    let response: ForecastResponse = serde_json::from_str(r#"{"error": true, "reason": "nope"}"#).unwrap();
    assert!( response.hourly.is_none());
}

#[tokio::test]
async fn test_cache_hit() {
    let service = WindService::with_interval( MockSource::new( Mode::Ok), Duration::from_millis(10));

    let obs1 = service.get_wind( 10.1, 20.1, T).await;
    let obs2 = service.get_wind( 10.05, 20.05, T + 3000).await;
    println!("{} / {}", obs1, obs2);

    assert_eq!( obs1, WindObservation::new( 2.0, 190.0, Some(11.0)));
    assert_eq!( obs1, obs2);
    assert_eq!( service.source().n_calls(), 1);
    assert_eq!( service.cache_len(), 1);

    // different time bucket
    service.get_wind( 10.1, 20.1, T + 7200).await;
    assert_eq!( service.source().n_calls(), 2);
}

#[tokio::test]
async fn test_pacing() {
    let service = WindService::new( MockSource::new( Mode::Ok), &WindConfig::default());

    let t0 = Instant::now();
    service.get_wind( 10.0, 20.0, T).await;
    service.get_wind( 30.0, 40.0, T).await;
    let elapsed = t0.elapsed();
    println!("two misses took {:?}", elapsed);

    assert_eq!( service.source().n_calls(), 2);
    assert!( elapsed >= REQUEST_INTERVAL);

    // hits don't count as requests
    service.get_wind( 10.0, 20.0, T).await;
    assert_eq!( service.source().n_calls(), 2);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let service = WindService::with_interval( MockSource::new( Mode::RateLimited), Duration::from_millis(1));

    let obs = service.get_wind( 10.0, 20.0, T).await;
    assert_eq!( obs, WindObservation::unavailable());
    assert_eq!( service.cache_len(), 0);
    assert!( matches!( service.try_get_wind( 10.0, 20.0, T).await, Err(DriftWindError::RateLimited(_))));

    service.source().set_mode( Mode::Fail);
    assert!( matches!( service.try_get_wind( 10.0, 20.0, T).await, Err(DriftWindError::NetError(_))));

    service.source().set_mode( Mode::Empty);
    assert!( !service.get_wind( 10.0, 20.0, T).await.is_available());
    assert!( matches!( service.try_get_wind( 10.0, 20.0, T).await, Err(DriftWindError::NoData(_))));
    assert_eq!( service.cache_len(), 0);

    // now we retry
    service.source().set_mode( Mode::Ok);
    let obs = service.get_wind( 10.0, 20.0, T).await;
    assert!( obs.is_available());
    assert_eq!( service.cache_len(), 1);
    assert_eq!( service.source().n_calls(), 6);
}
