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

//! common utility functions for network operations

use std::time::Duration;
use reqwest::{header::{HeaderMap,HeaderValue,ACCEPT,USER_AGENT}, Client, StatusCode, Response};
use regex::Regex;
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;

use crate::define_error;

lazy_static! {
    // matches ${name} placeholders in URL patterns
    static ref VAR_RE: Regex = Regex::new( r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

define_error!{ pub NetError =
    HttpError(#[from] reqwest::Error) : "http error: {0}",
    RateLimited(String) : "rate limited: {0}",
    StatusError(u16,String) : "response status {0} for {1}",
    ParseError(String) : "parse error: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub type Result<T> = std::result::Result<T, NetError>;

/// build a reqwest client with a request timeout and optional user agent header
pub fn build_client (timeout: Duration, user_agent: Option<&str>)->Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(ua) = user_agent {
        let v = HeaderValue::from_str(ua).map_err(|e| NetError::OpFailed(e.to_string()))?;
        headers.insert(USER_AGENT, v);
    }

    Ok( Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()? )
}

/// replace all `${name}` occurrences in `pattern` by the value returned from `lookup`.
/// Unknown variables are left as-is
pub fn expand_url_pattern<F> (pattern: &str, lookup: F)->String where F: Fn(&str)->Option<String> {
    VAR_RE.replace_all( pattern, |caps: &regex::Captures| {
        lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    }).into_owned()
}

/// map a response status into a NetError if it is not a success code.
/// 429 is reported as a separate variant since callers usually want to back off from it
pub fn check_status (response: Response, url: &str)->Result<Response> {
    match response.status() {
        s if s.is_success() => Ok(response),
        StatusCode::TOO_MANY_REQUESTS => Err( NetError::RateLimited(url.to_string())),
        other => Err( NetError::StatusError( other.as_u16(), url.to_string()))
    }
}

pub async fn from_json<T> (response: Response)->Result<T> where T: DeserializeOwned {
    let bytes = response.bytes().await?;
    serde_json::from_slice( &bytes).map_err(|e| NetError::ParseError(e.to_string()))
}

/// GET the given URL (with optional query params) and decode the JSON response body
pub async fn get_json<T> (client: &Client, url: &str, query: &[(&str,String)])->Result<T> where T: DeserializeOwned {
    let response = client.get(url).query(query).send().await?;
    let response = check_status( response, url)?;
    from_json(response).await
}
