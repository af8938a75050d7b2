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

/// retrieve the surface wind for a given location and time from the weather source

use clap::Parser;
use tracing_subscriber::EnvFilter;

use drift_common::{config::load_config_or_default, datetime};
use drift_wind::{cache::WindCacheKey, openmeteo::OpenMeteoClient, WindConfig, WindService};

#[derive(Parser,Debug)]
#[command(about="get surface wind for location and time")]
struct CliOpts {
    /// filename of wind config file (RON)
    #[arg(short,long)]
    config: Option<String>,

    /// date-time spec (e.g. 2025-06-15T12:00:00Z) or epoch seconds. Defaults to now
    #[arg(short,long)]
    time: Option<String>,

    /// latitude in degrees
    #[arg(allow_hyphen_values=true)]
    lat: f64,

    /// longitude in degrees
    #[arg(allow_hyphen_values=true)]
    lon: f64,
}

#[tokio::main]
async fn main ()->anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let opts = CliOpts::parse();
    let config: WindConfig = load_config_or_default( opts.config.as_ref())?;

    let ts = match &opts.time {
        Some(spec) => spec.parse::<i64>().ok()
            .or_else( || datetime::parse_epoch_secs(spec))
            .ok_or_else( || anyhow::anyhow!("invalid time spec {}", spec))?,
        None => datetime::epoch_secs()
    };

    let service = WindService::new( OpenMeteoClient::new( &config)?, &config);
    let obs = service.try_get_wind( opts.lat, opts.lon, ts).await?;

    println!("{} at {} (cache key {})", obs, datetime::fmt_epoch_secs(ts), WindCacheKey::new( opts.lat, opts.lon, ts));
    println!("{}", serde_json::to_string(&obs)?);

    Ok(())
}
