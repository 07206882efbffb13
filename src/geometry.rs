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

//! The `geometry` module contains planar geometry utilities over geographic
//! points: turn orientation, counter-clockwise angular ordering around the
//! westmost point, the Graham-scan convex hull and the minimum distance
//! between two routes.
//!
//! The orientation and hull functions treat longitude and latitude as planar
//! x and y, so they are for point sets well away from the poles and the
//! antimeridian.

#![allow(clippy::float_cmp)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::{convert, great_circle, Degrees, GeographicPosition, NavigationError};
use alloc::vec::Vec;

/// The turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    /// The triple turns clockwise.
    Clockwise,
    /// The triple turns counter-clockwise.
    CounterClockwise,
    /// The triple lies on a line.
    Collinear,
}

/// The turn orientation of the point triple (`first`, `second`, `third`),
/// from the sign of the determinant of the triple with longitude as x and
/// latitude as y.
#[must_use]
pub const fn orientation(
    first: &GeographicPosition,
    second: &GeographicPosition,
    third: &GeographicPosition,
) -> Orientation {
    let det = first.lon().0 * (second.lat().0 - third.lat().0)
        - second.lon().0 * (first.lat().0 - third.lat().0)
        + third.lon().0 * (first.lat().0 - second.lat().0);
    if det < 0.0 {
        Orientation::Clockwise
    } else if det > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Select the index of the point furthest to the West. If more than one
/// point shares the westward longitude, the southernmost of them is
/// selected. Returns `None` for an empty slice.
#[must_use]
pub fn select_westmost_point(points: &[GeographicPosition]) -> Option<usize> {
    let mut westmost = 0;
    let mut best = points.first()?;
    for (i, point) in points.iter().enumerate().skip(1) {
        if point.lon().0 < best.lon().0
            || (point.lon().0 == best.lon().0 && point.lat().0 < best.lat().0)
        {
            westmost = i;
            best = point;
        }
    }
    Some(westmost)
}

/// Tests whether `point` is left of the infinite line from `start` through
/// `end`, with longitude as x and latitude as y.
#[must_use]
pub const fn is_left(
    start: &GeographicPosition,
    end: &GeographicPosition,
    point: &GeographicPosition,
) -> bool {
    let test = (end.lon().0 - start.lon().0) * (point.lat().0 - start.lat().0)
        - (point.lon().0 - start.lon().0) * (end.lat().0 - start.lat().0);
    test > 0.0
}

/// Reorder the points counter-clockwise around the westmost point by
/// increasing angle, using the orientation test and so avoiding the
/// computation of angles. The westmost point comes first.
#[must_use]
pub fn angle_sort_ccw(points: &[GeographicPosition]) -> Vec<GeographicPosition> {
    let mut sorted = points.to_vec();
    let Some(ix0) = select_westmost_point(&sorted) else {
        return sorted;
    };
    let pivot = sorted.remove(ix0);

    // insertion sort; an earlier point turning clockwise onto the new one
    // belongs after it
    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && orientation(&pivot, &sorted[j - 1], &sorted[j]) == Orientation::Clockwise {
            sorted.swap(j - 1, j);
            j -= 1;
        }
    }

    sorted.insert(0, pivot);
    sorted
}

/// Reorder the points counter-clockwise around the westmost point by
/// decreasing bearing from it. The westmost point comes first; bearings
/// above 180° are wrapped negative so East sorts before North.
///
/// Equivalent to [`angle_sort_ccw`] but computes bearings, so it shares
/// the Mercator latitude limit.
///
/// # Errors
///
/// See [`great_circle::calculate_bearing`].
pub fn order_by_angle(
    points: &[GeographicPosition],
) -> Result<Vec<GeographicPosition>, NavigationError> {
    // sentinels sorting the pivot first and marking consumed entries
    const PIVOT_BEARING: f64 = 9_999.9;
    const CONSUMED: f64 = -9_999.9;

    let Some(ix0) = select_westmost_point(points) else {
        return Ok(Vec::new());
    };
    let pivot = points[ix0];

    let mut bearings = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        let mut bearing = if i == ix0 {
            PIVOT_BEARING
        } else {
            great_circle::calculate_abs_bearing(&pivot, point)?.0
        };
        if bearing > 180.0 {
            bearing -= 360.0;
        }
        bearings.push(bearing);
    }

    let mut ordered = Vec::with_capacity(points.len());
    for _ in 0..points.len() {
        let mut ix = 0;
        for (i, bearing) in bearings.iter().enumerate() {
            if bearings[ix] < *bearing {
                ix = i;
            }
        }
        bearings[ix] = CONSUMED;
        ordered.push(points[ix]);
    }
    Ok(ordered)
}

/// Run a Graham scan over points already in counter-clockwise angular
/// order, as produced by [`angle_sort_ccw`], leaving the convex hull.
/// Fewer than three points are their own hull.
#[must_use]
pub fn graham_scan(points: &[GeographicPosition]) -> Vec<GeographicPosition> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut stack = Vec::with_capacity(points.len());
    stack.push(points[0]);
    stack.push(points[1]);
    for point in &points[2..] {
        let top = stack[stack.len() - 1];
        let below = stack[stack.len() - 2];
        if is_left(&top, &below, point) {
            stack.pop();
        }
        stack.push(*point);
    }
    stack
}

/// The convex hull of a set of geographic points, counter-clockwise
/// starting from the westmost point.
#[must_use]
pub fn convex_hull(points: &[GeographicPosition]) -> Vec<GeographicPosition> {
    graham_scan(&angle_sort_ccw(points))
}

/// Find the indices of the pair of points with the minimum great-circle
/// distance between two routes, by brute force over every pair. Returns
/// `None` when either route is empty.
#[must_use]
pub fn minimum_distance_indices(
    route_a: &[GeographicPosition],
    route_b: &[GeographicPosition],
) -> Option<(usize, usize)> {
    let mut indices = None;
    let mut min_distance = f64::MAX;
    for (i, a) in route_a.iter().enumerate() {
        let cos_lat_a = libm::cos(convert::to_radians(a.lat()).0);
        for (j, b) in route_b.iter().enumerate() {
            let cos_lat_b = libm::cos(convert::to_radians(b.lat()).0);
            let cos_delta_lat =
                libm::cos(convert::to_radians(Degrees(a.lat().0 - b.lat().0)).0);
            let cos_delta_lon =
                libm::cos(convert::to_radians(Degrees(a.lon().0 - b.lon().0)).0);
            // rounding can push the cosine just outside [-1, 1]
            let cos_distance =
                (cos_delta_lat - (1.0 - cos_delta_lon) * cos_lat_a * cos_lat_b).clamp(-1.0, 1.0);
            let distance = libm::acos(cos_distance);
            if distance < min_distance {
                indices = Some((i, j));
                min_distance = distance;
            }
        }
    }
    indices
}

/// Find the pair of points with the minimum great-circle distance between
/// two routes. Returns `None` when either route is empty.
#[must_use]
pub fn minimum_distance_positions(
    route_a: &[GeographicPosition],
    route_b: &[GeographicPosition],
) -> Option<(GeographicPosition, GeographicPosition)> {
    minimum_distance_indices(route_a, route_b).map(|(i, j)| (route_a[i], route_b[j]))
}
