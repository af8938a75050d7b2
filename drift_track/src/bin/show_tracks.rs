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

/// one-shot tool to retrieve the 24h position window and print the reconstructed tracks

use clap::Parser;
use tracing_subscriber::EnvFilter;

use drift_common::{config::load_config_or_default, datetime};
use drift_track::{
    feed::{load_all_hours, HttpPositionFeed}, leaderboard::find_tracks, format_kmh, TrackConfig
};

#[derive(Parser,Debug)]
#[command(about="retrieve hourly balloon positions and show reconstructed tracks")]
struct CliOpts {
    /// filename of track config file (RON)
    #[arg(short,long)]
    config: Option<String>,

    /// only show balloon with given number (e.g. 12 for balloon_12)
    #[arg(short,long, default_value="")]
    query: String,

    /// print tracks as JSON
    #[arg(short,long)]
    json: bool,

    /// print all points of each track
    #[arg(short,long)]
    verbose: bool,
}

#[tokio::main]
async fn main ()->anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let opts = CliOpts::parse();
    let config: TrackConfig = load_config_or_default( opts.config.as_ref())?;
    let feed = HttpPositionFeed::new( &config)?;

    let update = load_all_hours( &feed, config.n_hours, datetime::epoch_secs(), config.max_speed).await;
    let tracks = find_tracks( &update.tracks, &opts.query);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);

    } else {
        println!("{} tracks from {}/{} hours at {}",
            update.tracks.len(), update.hours_ok, update.hours_ok + update.hours_failed, datetime::fmt_epoch_secs(update.timestamp));

        for track in tracks {
            let last_speed = track.last_point().and_then(|p| p.speed);
            println!("{}: {} points, last speed: {}", track.id, track.len(), format_kmh(last_speed));
            if opts.verbose {
                for p in &track.points {
                    println!("    {}", p);
                }
            }
        }
    }

    Ok(())
}
