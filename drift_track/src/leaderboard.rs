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

//! ranking and lookup of tracks for display collaborators

use std::{cmp::Ordering, fmt};
use serde::{Serialize,Deserialize};

use crate::{Point, Track, TrackMap};

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct LeaderboardItem {
    pub id: String,
    /// average consistency
    pub avg: f64,
    pub last: Option<Point>,
}

/// the `n` tracks with the highest average consistency, best first. Tracks without score are skipped
pub fn leaderboard (tracks: &TrackMap, n: usize)->Vec<LeaderboardItem> {
    let mut items: Vec<LeaderboardItem> = tracks.values()
        .filter_map( |t| t.score().map( |avg| LeaderboardItem { id: t.id.clone(), avg, last: t.last_point().cloned() }))
        .collect();

    items.sort_by( |a,b| b.avg.partial_cmp(&a.avg).unwrap_or(Ordering::Equal));
    items.truncate(n);
    items
}

/// coarse classification of consistency scores
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum ScoreClass {
    Good,
    Fair,
    Poor,
    Unknown
}

impl ScoreClass {
    pub fn of (score: Option<f64>)->Self {
        match score {
            Some(s) if s > 0.7 => ScoreClass::Good,
            Some(s) if s > 0.3 => ScoreClass::Fair,
            Some(_) => ScoreClass::Poor,
            None => ScoreClass::Unknown
        }
    }

    /// display color (hex RGB)
    pub fn color (&self)->&'static str {
        match self {
            ScoreClass::Good => "#16a34a",
            ScoreClass::Fair => "#f59e0b",
            ScoreClass::Poor => "#ef4444",
            ScoreClass::Unknown => "#94a3b8",
        }
    }
}

impl fmt::Display for ScoreClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreClass::Good => "good",
            ScoreClass::Fair => "fair",
            ScoreClass::Poor => "poor",
            ScoreClass::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// look up tracks by the number part of their synthetic id (e.g. "12" finds "balloon_12").
/// A blank query returns all tracks
pub fn find_tracks<'a> (tracks: &'a TrackMap, query: &str)->Vec<&'a Track> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        tracks.values().collect()
    } else {
        let id = format!("balloon_{}", query);
        tracks.get(&id).into_iter().collect()
    }
}
