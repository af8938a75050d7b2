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

pub type Result<T> = std::result::Result<T, DriftTrackError>;

#[derive(Error,Debug)]
pub enum DriftTrackError {
    #[error("config error {0}")]
    ConfigError( #[from] drift_common::config::ConfigError),

    #[error("net error {0}")]
    NetError( #[from] drift_common::net::NetError),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("hour {0:02} failed: {1}")]
    HourFailed( usize, String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error)
}

pub fn hour_failed (hour: usize, msg: impl ToString)->DriftTrackError {
    DriftTrackError::HourFailed(hour, msg.to_string())
}
