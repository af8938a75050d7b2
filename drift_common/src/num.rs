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

//! best-effort conversion of untyped JSON values into finite numbers

use serde_json::Value;

/// convert a JSON value into a finite f64 or None.
///  - numbers are used as-is
///  - strings are trimmed and parsed (blank strings are rejected)
///  - booleans map to 1.0/0.0
///  - null, arrays and objects are rejected
///
/// NaN and +/- infinity are never returned
pub fn coerce_number (v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { None } else { s.parse::<f64>().ok() }
        }
        Value::Bool(b) => Some( if *b { 1.0 } else { 0.0 }),
        _ => None
    };
    n.filter( |x| x.is_finite())
}

/// same as [`coerce_number`] but for optional values (e.g. the result of a `Value::get(..)`)
#[inline]
pub fn coerce_opt_number (v: Option<&Value>) -> Option<f64> {
    v.and_then(coerce_number)
}

/// convert a finite f64 into an option, dropping NaN and infinities
#[inline]
pub fn finite (x: f64) -> Option<f64> {
    if x.is_finite() { Some(x) } else { None }
}

/// arithmetic mean of the given values, None if there are none
pub fn mean<I> (values: I) -> Option<f64> where I: IntoIterator<Item=f64> {
    let (n, sum) = values.into_iter().fold( (0usize, 0.0), |(n,sum), x| (n+1, sum+x));
    if n > 0 { Some(sum / n as f64) } else { None }
}
