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

//! plain f64 degree functions for headings. Bearings and wind directions are kept as raw degrees
//! in the track data model so that they serialize without wrapper types

#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// map any degree value into [0,360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

/// the minimum rotation in degrees [0..180] that aligns heading `a` with heading `b`.
/// This is symmetric and angle_diff(a,a) is always 0
#[inline]
pub fn angle_diff (a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// cosine of the angular difference between two headings, i.e. 1.0 if they point in the
/// same direction and -1.0 if they are opposed
#[inline]
pub fn heading_alignment (a: f64, b: f64) -> f64 {
    angle_diff(a, b).to_radians().cos()
}
