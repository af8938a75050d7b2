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

use std::{sync::Arc, time::Duration};
use tokio::{sync::mpsc::{self, Receiver, Sender}, task::JoinHandle, time::{interval, MissedTickBehavior}};
use tracing::{debug,info};

use drift_common::datetime;
use crate::{feed::{load_all_hours, PositionFeed, TrackUpdate}, TrackConfig};

pub enum MonitorCmd {
    Refresh,
    Terminate
}

/// periodically reloads the whole window from a position feed. Each reload produces a fresh
/// [`TrackUpdate`] that is sent to the update channel. Tracks are never patched incrementally
pub struct TrackMonitor<F: PositionFeed> {
    feed: Arc<F>,
    n_hours: usize,
    reload_interval: Duration,
    max_speed: f64,
}

impl<F: PositionFeed + 'static> TrackMonitor<F> {
    pub fn new (feed: Arc<F>, config: &TrackConfig)->Self {
        TrackMonitor {
            feed,
            n_hours: config.n_hours,
            reload_interval: config.reload_interval,
            max_speed: config.max_speed
        }
    }

    /// a single full reload of the window ending now
    pub async fn reload (&self)->TrackUpdate {
        load_all_hours( self.feed.as_ref(), self.n_hours, datetime::epoch_secs(), self.max_speed).await
    }

    /// the reload loop. The first reload happens immediately, then every `reload_interval` and
    /// whenever we get a `Refresh` command (which also restarts the interval).
    /// Terminates on `Terminate`, if the command channel is closed or if nobody listens to updates anymore
    pub async fn run (self, mut cmd_rx: Receiver<MonitorCmd>, update_tx: Sender<TrackUpdate>) {
        let mut timer = interval( self.reload_interval);
        timer.set_missed_tick_behavior( MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    debug!("scheduled reload");
                }
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(MonitorCmd::Refresh) => {
                            debug!("manual reload");
                            timer.reset();
                        }
                        Some(MonitorCmd::Terminate) | None => break
                    }
                }
            }

            let update = self.reload().await;
            if update_tx.send(update).await.is_err() { break }
        }
        info!("track monitor terminated");
    }

    /// spawn the reload loop as a tokio task. Returns the task handle, the command sender and the update receiver
    pub fn spawn (self, queue_len: usize)->(JoinHandle<()>, Sender<MonitorCmd>, Receiver<TrackUpdate>) {
        let (cmd_tx,cmd_rx) = mpsc::channel::<MonitorCmd>(8);
        let (update_tx,update_rx) = mpsc::channel::<TrackUpdate>(queue_len.max(1));
        let jh = tokio::spawn( self.run( cmd_rx, update_tx));
        (jh, cmd_tx, update_rx)
    }
}
