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
use drift_common::net::NetError;

pub type Result<T> = std::result::Result<T, DriftWindError>;

#[derive(Error,Debug)]
pub enum DriftWindError {
    #[error("config error {0}")]
    ConfigError( #[from] drift_common::config::ConfigError),

    #[error("net error {0}")]
    NetError( NetError),

    #[error("rate limited by {0}")]
    RateLimited(String),

    #[error("no time series for {0}")]
    NoData(String),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error)
}

// rate limits are reported separately so that callers can tell them apart from other failures
impl From<NetError> for DriftWindError {
    fn from (e: NetError)->Self {
        match e {
            NetError::RateLimited(url) => DriftWindError::RateLimited(url),
            other => DriftWindError::NetError(other)
        }
    }
}

pub fn no_data (msg: impl ToString)->DriftWindError {
    DriftWindError::NoData(msg.to_string())
}
