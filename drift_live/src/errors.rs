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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DriftLiveError>;

#[derive(Error,Debug)]
pub enum DriftLiveError {
    #[error("config error {0}")]
    ConfigError( #[from] drift_common::config::ConfigError),

    #[error("track error {0}")]
    TrackError( #[from] drift_track::DriftTrackError),

    #[error("wind error {0}")]
    WindError( #[from] drift_wind::DriftWindError),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("unknown track {0}")]
    UnknownTrack(String)
}

