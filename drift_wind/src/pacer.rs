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

use std::time::Duration;
use tokio::{sync::Mutex, time::{sleep, Instant}};
use tracing::trace;

/// enforces a minimum interval between outgoing requests of all callers that share the pacer.
/// Callers are serialized while waiting, i.e. concurrent requests go out one interval apart
#[derive(Debug)]
pub struct RequestPacer {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new (min_interval: Duration)->Self {
        RequestPacer { min_interval, last_request: Mutex::new(None) }
    }

    pub fn min_interval (&self)->Duration { self.min_interval }

    /// suspend until at least `min_interval` has passed since the previous request, then record this one
    pub async fn wait (&self) {
        let mut last_request = self.last_request.lock().await;

        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let delay = self.min_interval - elapsed;
                trace!("delaying request by {:?}", delay);
                sleep(delay).await;
            }
        }

        *last_request = Some(Instant::now());
    }
}
