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

//! The `rhumb_line` module contains the rhumb-line (constant course)
//! position update and the line-of-sight visibility functions.
//!
//! For mid latitudes the simple rhumb-line equations update the route.
//! Above 85° latitude they diverge, so the great-circle equations are used
//! instead, without updating the course.

#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::{consts, convert, Degrees, Feet, GeographicPosition, NauticalMiles, Radians};

/// Calculate the new position of a track after travelling `distance` on a
/// constant `course` from `start`.
///
/// Latitudes within 85° of the Equator use the mid-latitude rhumb-line
/// update; beyond that the great-circle update is applied without
/// updating the course. The resulting longitude is normalized to
/// (-180, 180].
/// * `start` - the start position.
/// * `course` - the constant course in degrees.
/// * `distance` - the distance to travel in nautical miles.
#[must_use]
pub fn calculate_position(
    start: &GeographicPosition,
    course: Degrees,
    distance: NauticalMiles,
) -> GeographicPosition {
    // default denominator so it is not 0
    const DEF_DENOM: f64 = 0.000_000_01;

    let init_lat = convert::to_radians(start.lat()).0;
    let arc = convert::to_radians(Degrees(distance.0 / consts::NM_PER_DEGREE)).0;
    let course_rad = convert::to_radians(course).0;

    let sin_crs = libm::sin(course_rad);
    let cos_crs = libm::cos(course_rad);

    let (new_lat, delta_lon) = if libm::fabs(init_lat) > consts::LAT_TOLERANCE {
        // polar update along a great circle
        let cos_dist = libm::cos(arc);
        let sin_dist = libm::sin(arc);

        let sin_lat = libm::sin(init_lat);
        let cos_lat = libm::cos(init_lat);

        let new_lat = libm::asin(cos_dist * sin_lat + cos_crs * sin_dist * cos_lat);
        let mut denom = cos_dist * cos_lat - sin_dist * cos_crs * sin_lat;
        if denom == 0.0 {
            denom = DEF_DENOM;
        }
        (new_lat, libm::atan(sin_dist * sin_crs / denom))
    } else {
        // mid-latitude update
        let delta_lat = arc * cos_crs;
        let new_lat = init_lat + delta_lat;
        let delta_lon = arc * sin_crs / libm::cos(init_lat + consts::RAD_90 * delta_lat);
        (new_lat, delta_lon)
    };

    let mut new_lon = convert::to_radians(start.lon()).0 + delta_lon;
    if libm::fabs(new_lon) >= consts::RAD_180 {
        new_lon -= libm::copysign(consts::RAD_360, new_lon);
    }

    GeographicPosition::new(
        convert::to_degrees(Radians(new_lat)),
        convert::to_degrees(Radians(new_lon)),
    )
}

/// Calculate the line-of-sight distance in nautical miles from an observer
/// at `eye_height` to an object at `object_height`, both above the surface
/// in feet. Uses the standard-atmosphere radar horizon approximation
/// `1.144 (sqrt(h1) + sqrt(h2))`.
#[must_use]
pub fn line_of_sight_distance(eye_height: Feet, object_height: Feet) -> NauticalMiles {
    NauticalMiles(1.144 * (libm::sqrt(eye_height.0) + libm::sqrt(object_height.0)))
}

/// Calculate the distance in nautical miles to the horizon from an observer
/// at `eye_height` feet above the surface.
#[must_use]
pub fn horizon(eye_height: Feet) -> NauticalMiles {
    line_of_sight_distance(eye_height, Feet(0.0))
}

/// Whether an object at `object_height` feet is visible from an eye at
/// `eye_height` feet when separated by `distance` nautical miles.
#[must_use]
pub fn is_visible(eye_height: Feet, object_height: Feet, distance: NauticalMiles) -> bool {
    distance.0 <= line_of_sight_distance(eye_height, object_height).0
}
