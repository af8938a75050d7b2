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

//! state of the live balloon drift application: the current track set, the selected track and
//! the snapshots we publish for display clients

use serde::Serialize;
use tracing::{debug,info};

use drift_track::{
    feed::TrackUpdate, leaderboard::{find_tracks, leaderboard, LeaderboardItem, ScoreClass}, Track, TrackMap
};
use drift_wind::{enrich_selected, openmeteo::WeatherSource, WindService};

pub mod errors;
pub use errors::*;

/// interactive commands read from stdin
#[derive(Debug,Clone,PartialEq)]
pub enum LiveCmd {
    Refresh,
    Select(String),
    ToggleWind,
    Quit,
}

impl LiveCmd {
    /// parse a command line: `r` (refresh), `s <id>` (select), `w` (toggle wind), `q` (quit)
    pub fn parse (line: &str)->Option<LiveCmd> {
        let line = line.trim();
        let (cmd,arg) = match line.split_once( char::is_whitespace) {
            Some((cmd,arg)) => (cmd, arg.trim()),
            None => (line, "")
        };

        match (cmd,arg) {
            ("r", "") => Some(LiveCmd::Refresh),
            ("s", id) if !id.is_empty() => Some( LiveCmd::Select(id.to_string())),
            ("w", "") => Some(LiveCmd::ToggleWind),
            ("q", "") => Some(LiveCmd::Quit),
            _ => None
        }
    }
}

/// what we publish after each reload or selection change
#[derive(Debug,Clone,Serialize)]
#[serde(rename_all="camelCase")]
pub struct LiveSnapshot<'a> {
    pub timestamp: i64,
    pub n_tracks: usize,
    pub hours_ok: usize,
    pub hours_failed: usize,
    pub wind_enabled: bool,
    pub selected: Option<&'a Track>,
    pub score: Option<f64>,
    pub score_class: ScoreClass,
    pub leaderboard: Vec<LeaderboardItem>,
}

pub struct LiveState {
    pub tracks: TrackMap,
    pub selected: Option<String>,
    pub wind_enabled: bool,

    timestamp: i64,
    hours_ok: usize,
    hours_failed: usize,
}

impl LiveState {
    pub fn new (selected: Option<String>, wind_enabled: bool)->Self {
        LiveState { tracks: TrackMap::new(), selected, wind_enabled, timestamp: 0, hours_ok: 0, hours_failed: 0 }
    }

    /// replace the track set. If we don't have a selection yet or the selected track is gone we select the first track
    pub fn apply_update (&mut self, update: TrackUpdate) {
        self.tracks = update.tracks;
        self.timestamp = update.timestamp;
        self.hours_ok = update.hours_ok;
        self.hours_failed = update.hours_failed;

        let keep = self.selected.as_ref().is_some_and( |id| self.tracks.contains_key(id));
        if !keep {
            self.selected = self.tracks.keys().next().cloned();
            if let Some(id) = &self.selected { info!("selected {}", id) }
        }
    }

    /// select by full id (e.g. "balloon_12") or by number (e.g. "12")
    pub fn select (&mut self, query: &str)->Result<&str> {
        let query = query.trim();
        let id = if self.tracks.contains_key(query) {
            Some( query.to_string())
        } else if !query.is_empty() {
            find_tracks( &self.tracks, query).first().map( |t| t.id.clone())
        } else {
            None
        };

        match id {
            Some(id) => {
                info!("selected {}", id);
                Ok( self.selected.insert(id).as_str() )
            }
            None => Err( DriftLiveError::UnknownTrack(query.to_string()))
        }
    }

    pub fn selected_track (&self)->Option<&Track> {
        self.selected.as_ref().and_then( |id| self.tracks.get(id))
    }

    pub fn selected_track_mut (&mut self)->Option<&mut Track> {
        self.selected.as_ref().and_then( |id| self.tracks.get_mut(id))
    }

    /// toggle wind enrichment and return the new state
    pub fn toggle_wind (&mut self)->bool {
        self.wind_enabled = !self.wind_enabled;
        self.wind_enabled
    }

    /// enrich the selected track if wind is enabled. Returns the number of points we got wind for from the service
    pub async fn enrich_selection<S: WeatherSource> (&mut self, service: &WindService<S>, sample_size: usize)->usize {
        if !self.wind_enabled {
            return 0
        }
        match self.selected_track_mut() {
            Some(track) => enrich_selected( service, track, sample_size).await,
            None => 0
        }
    }

    pub fn snapshot (&self, n_leaders: usize)->LiveSnapshot<'_> {
        let selected = self.selected_track();
        let score = selected.and_then( |t| t.score());

        LiveSnapshot {
            timestamp: self.timestamp,
            n_tracks: self.tracks.len(),
            hours_ok: self.hours_ok,
            hours_failed: self.hours_failed,
            wind_enabled: self.wind_enabled,
            selected,
            score,
            score_class: ScoreClass::of(score),
            leaderboard: leaderboard( &self.tracks, n_leaders),
        }
    }
}
