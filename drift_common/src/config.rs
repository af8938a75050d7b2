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

//! RON based configuration loading. Configs are plain serde structs that also implement `Default`,
//! which is used if no config file is given

use std::{fs, path::Path};
use serde::{Serialize, de::DeserializeOwned};
use ron::ser::PrettyConfig;
use tracing::info;

use crate::define_error;

define_error!{ pub ConfigError =
    IOError(#[from] std::io::Error) : "config IO error: {0}",
    ParseError(String) : "config parse error: {0}",
    SerializeError(String) : "config serialize error: {0}"
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// parse a RON config string
pub fn config_from_str<C> (s: &str)->Result<C> where C: DeserializeOwned {
    ron::from_str::<C>(s).map_err(|e| ConfigError::ParseError(format!("{:?}", e)))
}

/// load a RON config from the given file
pub fn load_config<C,P> (path: P)->Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    info!("loading config {:?}", path);
    config_from_str(&contents)
}

/// load config from optional path, falling back to the config type default if there is none
pub fn load_config_or_default<C,P> (path: Option<P>)->Result<C> where C: DeserializeOwned + Default, P: AsRef<Path> {
    match path {
        Some(path) => load_config(path),
        None => Ok(C::default())
    }
}

/// pretty printed RON for a config value (e.g. to generate initial config files)
pub fn config_to_string<C> (c: &C)->Result<String> where C: Serialize {
    ron::ser::to_string_pretty(c, PrettyConfig::default()).map_err(|e| ConfigError::SerializeError(format!("{:?}", e)))
}
