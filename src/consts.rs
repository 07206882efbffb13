// Copyright (c) 2025 The nav-sphere developers

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The consts module contains the angle and unit conversion factors and the
//! tolerances shared by the navigation algorithms.
//!
//! Several angle constants are deliberately truncated literals rather than
//! computed values: the navigation equations were validated with these exact
//! figures and keeping them reproduces published results digit for digit.

#![allow(clippy::approx_constant)]

/// Nautical miles per degree of arc on the navigation sphere.
pub const NM_PER_DEGREE: f64 = 60.0;

/// Nautical miles per radian of arc on the navigation sphere.
pub const NM_PER_RADIAN: f64 = 3_437.746_770_78;

/// Radians of arc per nautical mile.
pub const RADIANS_PER_NM: f64 = 0.000_290_80;

/// The radius of the navigation sphere in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3_444.0;

/// Feet per nautical mile.
pub const FT_PER_NM: f64 = 6_076.1;

/// Hours per second.
pub const HR_PER_SEC: f64 = 2.777_777_778e-4;

/// Radio propagation time in microseconds per nautical mile.
pub const C_MS_PER_NM: f64 = 6.177_606;

/// The refractive index of the standard atmosphere at sea level.
pub const INDEX_REF_SEA: f64 = 1.000_338;

/// The factor to convert degrees to radians.
pub const DEGREE_TO_RAD: f64 = core::f64::consts::PI / 180.0;

/// The factor to convert radians to degrees.
pub const RAD_TO_DEGREE: f64 = 180.0 / core::f64::consts::PI;

/// 45 degrees in radians.
pub const RAD_45: f64 = 0.785_398_163;

/// 85 degrees in radians, the latitude limit of the Mercator bearing term.
pub const RAD_85: f64 = 1.483_529_864;

/// 90 degrees in radians.
pub const RAD_90: f64 = 1.570_796_327;

/// 180 degrees in radians.
pub const RAD_180: f64 = core::f64::consts::PI;

/// 270 degrees in radians.
pub const RAD_270: f64 = 4.712_389;

/// 360 degrees in radians.
pub const RAD_360: f64 = 6.283_185_307;

/// The latitude (in radians) above which the rhumb-line equations give way
/// to the great-circle equations.
pub const LAT_TOLERANCE: f64 = RAD_85;

/// Five nautical miles as an arc in radians.
/// Ranges below this threshold use a flat-earth approximation to avoid the
/// loss of precision of `acos` near zero.
pub const RAD_FIVE_MILES: f64 = 0.001_455_825;
