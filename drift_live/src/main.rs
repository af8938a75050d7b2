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

use std::sync::Arc;
use clap::Parser;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;

use drift_common::config::load_config_or_default;
use drift_track::{feed::HttpPositionFeed, monitor::{MonitorCmd, TrackMonitor}, TrackConfig};
use drift_wind::{openmeteo::OpenMeteoClient, WindConfig, WindService};
use drift_live::{LiveCmd, LiveState};

#[derive(Parser,Debug)]
#[command(about="live balloon tracks with on-demand wind enrichment. Commands on stdin: r (refresh), s <id> (select), w (toggle wind), q (quit)")]
struct CliOpts {
    /// filename of track config file (RON)
    #[arg(long)]
    track_config: Option<String>,

    /// filename of wind config file (RON)
    #[arg(long)]
    wind_config: Option<String>,

    /// initially selected balloon (id or number)
    #[arg(short,long)]
    select: Option<String>,

    /// number of leaderboard entries in snapshots
    #[arg(short,long, default_value_t=10)]
    leaders: usize,

    /// don't retrieve wind data
    #[arg(long)]
    no_wind: bool,

    /// pretty print snapshots
    #[arg(short,long)]
    pretty: bool,
}

fn print_snapshot (state: &LiveState, opts: &CliOpts)->anyhow::Result<()> {
    let snapshot = state.snapshot( opts.leaders);
    let json = if opts.pretty { serde_json::to_string_pretty(&snapshot)? } else { serde_json::to_string(&snapshot)? };
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main ()->anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer(std::io::stderr) // stdout is for snapshots
        .init();

    let opts = CliOpts::parse();
    let track_config: TrackConfig = load_config_or_default( opts.track_config.as_ref())?;
    let wind_config: WindConfig = load_config_or_default( opts.wind_config.as_ref())?;

    let wind_service = WindService::new( OpenMeteoClient::new( &wind_config)?, &wind_config);
    let feed = Arc::new( HttpPositionFeed::new( &track_config)?);
    let (monitor_task, cmd_tx, mut update_rx) = TrackMonitor::new( feed, &track_config).spawn(4);

    let mut state = LiveState::new( None, !opts.no_wind);
    let mut pending_select = opts.select.clone(); // resolved once we have tracks
    let mut lines = BufReader::new( stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            update = update_rx.recv() => {
                match update {
                    Some(update) => {
                        state.apply_update(update);
                        if let Some(query) = pending_select.take() {
                            if let Err(e) = state.select(&query) { warn!("{}", e) }
                        }
                        state.enrich_selection( &wind_service, wind_config.sample_size).await;
                        print_snapshot( &state, &opts)?;
                    }
                    None => break
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line? {
                    Some(line) => match LiveCmd::parse(&line) {
                        Some(LiveCmd::Refresh) => {
                            if cmd_tx.send( MonitorCmd::Refresh).await.is_err() { break }
                        }
                        Some(LiveCmd::Select(query)) => {
                            match state.select(&query) {
                                Ok(_) => {
                                    state.enrich_selection( &wind_service, wind_config.sample_size).await;
                                    print_snapshot( &state, &opts)?;
                                }
                                Err(e) => warn!("{}", e)
                            }
                        }
                        Some(LiveCmd::ToggleWind) => {
                            info!("wind data {}", if state.toggle_wind() { "enabled" } else { "disabled" });
                            state.enrich_selection( &wind_service, wind_config.sample_size).await;
                            print_snapshot( &state, &opts)?;
                        }
                        Some(LiveCmd::Quit) => break,
                        None => warn!("unknown command: {:?}", line)
                    }
                    None => stdin_open = false // keep running on reloads only
                }
            }
        }
    }

    let _ = cmd_tx.send( MonitorCmd::Terminate).await;
    monitor_task.await?;
    info!("terminated");

    Ok(())
}
