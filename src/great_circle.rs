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

//! The `great_circle` module contains the spherical-trigonometry algorithms
//! for bearings, ranges and position propagation.
//!
//! The position equations were derived from the American Practical Navigator
//! (Bowditch). Bearings use the Mercator formula, which is singular near the
//! poles, so bearing calculations are limited to latitudes within 85° of the
//! Equator.

#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::{consts, convert, Degrees, GeographicPosition, Knots, NauticalMiles, NavigationError, Radians};
use unit_sphere::vector;

/// Whether a bearing is measured from true North or from a vessel's own
/// heading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BearingKind {
    /// Bearing from true North.
    Absolute,
    /// Bearing relative to a supplied heading.
    Relative,
}

/// Calculate the new position of a track after travelling `distance` along
/// a great circle from `start` on the initial `course`.
///
/// Longitude at a pole is ambiguous: if the course is within 5e-6 radians
/// of due North or South and the course made good has swung by more than
/// 90°, the track crossed the pole and the longitude is flipped by half a
/// turn. The resulting longitude is normalized to (-180, 180].
/// * `start` - the start position.
/// * `course` - the initial course in degrees, signed values allowed.
/// * `distance` - the distance to travel in nautical miles.
///
/// returns the position at `distance` along the great circle.
#[must_use]
pub fn calculate_position(
    start: &GeographicPosition,
    course: Degrees,
    distance: NauticalMiles,
) -> GeographicPosition {
    const EFF_RAD_0: f64 = 0.000_005;

    let course_rad = convert::to_radians(course).0;
    let sin_crs = libm::sin(course_rad);
    let cos_crs = libm::cos(course_rad);

    let lat = convert::to_radians(start.lat()).0;
    let sin_lat = libm::sin(lat);
    let cos_lat = libm::cos(lat);

    let arc = consts::DEGREE_TO_RAD * (distance.0 / consts::NM_PER_DEGREE);
    let cos_dist = libm::cos(arc);
    let sin_dist = libm::sin(arc);

    let new_lat = libm::asin(cos_dist * sin_lat + cos_crs * sin_dist * cos_lat);
    let delta_lon = libm::atan(sin_dist * sin_crs / (cos_dist * cos_lat - sin_dist * cos_crs * sin_lat));

    // course made good at the new position
    let mut sin_new_crs = sin_crs * cos_lat / libm::cos(new_lat);
    if libm::fabs(sin_new_crs) > 1.0 {
        sin_new_crs = 1.0;
    }
    let mut cos_new_crs = libm::sqrt(1.0 - sin_new_crs * sin_new_crs);

    // vertex of great circle check
    if libm::sin(new_lat) * cos_dist - sin_lat < 0.0 {
        cos_new_crs = -cos_new_crs;
    }
    let mut new_crs = libm::acos(cos_new_crs);
    if course_rad < 0.0 {
        new_crs = -new_crs;
    }

    let mut new_lon = convert::to_radians(start.lon()).0;

    // check for polar crossing
    if (libm::fabs(course_rad) < EFF_RAD_0 || libm::fabs(course_rad - consts::RAD_180) < EFF_RAD_0)
        && libm::fabs(new_crs - course_rad) > consts::RAD_90
    {
        new_lon += if new_lon < 0.0 {
            consts::RAD_180
        } else {
            -consts::RAD_180
        };
    }

    new_lon += delta_lon;
    if libm::fabs(new_lon) >= consts::RAD_180 {
        new_lon -= libm::copysign(consts::RAD_360, new_lon);
    }

    GeographicPosition::new(
        convert::to_degrees(Radians(new_lat)),
        convert::to_degrees(Radians(new_lon)),
    )
}

/// Calculate the new position of a track from a course, a speed and a time
/// interval. A speed of zero (or less) returns the start position.
/// * `start` - the start position.
/// * `speed` - the speed in knots.
/// * `course` - the course in degrees.
/// * `interval_hours` - the time interval in decimal hours.
#[must_use]
pub fn position_from_course_speed(
    start: &GeographicPosition,
    speed: Knots,
    course: Degrees,
    interval_hours: f64,
) -> GeographicPosition {
    if speed.0 > 0.0 {
        calculate_position(start, course, NauticalMiles(speed.0 * interval_hours))
    } else {
        *start
    }
}

/// Calculate the bearing from one geographic position to another.
///
/// The bearing is the Mercator (rhumb) bearing: `atan(Δlon / ln term)`
/// quadrant-corrected by the signs of the log term and Δlon, with
/// special-case branches for nearly East-West and nearly North-South
/// tracks. For `BearingKind::Relative` the supplied heading is subtracted
/// and the result renormalized to (-180, 180].
/// * `heading` - the heading at `start` in degrees; ignored for
///   `BearingKind::Absolute`.
/// * `start`, `end` - the start and end positions.
/// * `kind` - whether the bearing is absolute or relative to `heading`.
///
/// returns the bearing in degrees.
///
/// # Errors
///
/// `LatitudeDomainLimit` when either latitude magnitude exceeds 85°,
/// `LatitudeRange`/`LongitudeRange` for an invalid position.
pub fn calculate_bearing(
    heading: Degrees,
    start: &GeographicPosition,
    end: &GeographicPosition,
    kind: BearingKind,
) -> Result<Degrees, NavigationError> {
    const LAT_ERROR: f64 = 0.000_05;
    const LON_ERROR: f64 = 0.000_005;

    start.validate()?;
    end.validate()?;

    let source_lat = convert::to_radians(start.lat()).0;
    let target_lat = convert::to_radians(end.lat()).0;

    if libm::fabs(source_lat) > consts::RAD_85 {
        return Err(NavigationError::LatitudeDomainLimit(start.lat()));
    }
    if libm::fabs(target_lat) > consts::RAD_85 {
        return Err(NavigationError::LatitudeDomainLimit(end.lat()));
    }

    let del_lat = target_lat - source_lat;
    let mut del_lon = convert::to_radians(end.lon()).0 - convert::to_radians(start.lon()).0;
    if del_lon > consts::RAD_180 {
        del_lon -= consts::RAD_360;
    } else if del_lon < -consts::RAD_180 {
        del_lon += consts::RAD_360;
    }

    let mut ln_term = 0.0;
    let mut abs_bearing = if libm::fabs(del_lat) < LAT_ERROR {
        // nearly East-West track
        if del_lon >= 0.0 {
            consts::RAD_90
        } else {
            -consts::RAD_90
        }
    } else if libm::fabs(del_lon) < LON_ERROR {
        // nearly North-South track
        if target_lat >= source_lat {
            0.0
        } else {
            consts::RAD_180
        }
    } else {
        ln_term = libm::log(
            libm::tan(consts::RAD_45 + target_lat / 2.0)
                / libm::tan(consts::RAD_45 + source_lat / 2.0),
        );
        libm::atan(del_lon / ln_term)
    };

    // convert to the proper quadrant
    if ln_term < 0.0 {
        if del_lon > 0.0 {
            abs_bearing += consts::RAD_180;
        } else {
            abs_bearing -= consts::RAD_180;
        }
    }

    match kind {
        BearingKind::Absolute => Ok(convert::to_degrees(Radians(abs_bearing))),
        BearingKind::Relative => {
            let mut rel_bearing = abs_bearing - convert::to_radians(heading).0;
            if rel_bearing > consts::RAD_180 {
                rel_bearing -= consts::RAD_360;
            } else if rel_bearing < -consts::RAD_180 {
                rel_bearing += consts::RAD_360;
            }
            Ok(convert::to_degrees(Radians(rel_bearing)))
        }
    }
}

/// Calculate the absolute bearing from one position to another,
/// irrespective of heading.
///
/// # Errors
///
/// See [`calculate_bearing`].
pub fn calculate_abs_bearing(
    start: &GeographicPosition,
    end: &GeographicPosition,
) -> Result<Degrees, NavigationError> {
    calculate_bearing(Degrees(0.0), start, end, BearingKind::Absolute)
}

/// Calculate the great-circle distance between two positions in degrees
/// of arc. Multiply by 60 for nautical miles, or use
/// [`calculate_range_nm`].
///
/// Uses the spherical law of cosines; distances under five nautical miles
/// switch to a flat-earth approximation to avoid the loss of precision of
/// `acos` near zero.
#[must_use]
pub fn calculate_range(start: &GeographicPosition, end: &GeographicPosition) -> Degrees {
    let source_lat = convert::to_radians(start.lat()).0;
    let target_lat = convert::to_radians(end.lat()).0;

    let delta_lat = source_lat - target_lat;
    let mut delta_lon = convert::to_radians(start.lon()).0 - convert::to_radians(end.lon()).0;
    if delta_lon > consts::RAD_180 {
        delta_lon -= consts::RAD_360;
    } else if delta_lon < -consts::RAD_180 {
        delta_lon += consts::RAD_360;
    }

    let cos_range =
        libm::cos(delta_lat) - (1.0 - libm::cos(delta_lon)) * libm::cos(source_lat) * libm::cos(target_lat);

    let mut range = if libm::fabs(cos_range) >= 1.0 {
        0.0
    } else {
        libm::fabs(libm::acos(cos_range))
    };

    if range < consts::RAD_FIVE_MILES {
        range = libm::sqrt(
            delta_lat * delta_lat
                + delta_lon * delta_lon * libm::cos(source_lat) * libm::cos(target_lat),
        );
    }

    Degrees(range * consts::RAD_TO_DEGREE)
}

/// Calculate the great-circle distance between two positions in nautical
/// miles.
#[must_use]
pub fn calculate_range_nm(
    start: &GeographicPosition,
    end: &GeographicPosition,
) -> NauticalMiles {
    NauticalMiles(calculate_range(start, end).0 * consts::NM_PER_DEGREE)
}

/// Calculate the x (East) and y (North) distances of `end` from `start` in
/// nautical miles: relative bearing and range resolved into components on
/// the local tangent plane.
///
/// # Errors
///
/// See [`calculate_bearing`].
pub fn calculate_xy(
    start: &GeographicPosition,
    end: &GeographicPosition,
) -> Result<(NauticalMiles, NauticalMiles), NavigationError> {
    let bearing = calculate_bearing(Degrees(0.0), start, end, BearingKind::Relative)?;
    let range = calculate_range_nm(start, end);
    let bearing_rad = convert::to_radians(bearing).0;
    Ok((
        NauticalMiles(range.0 * libm::sin(bearing_rad)),
        NauticalMiles(range.0 * libm::cos(bearing_rad)),
    ))
}

/// Calculate the new position of a track from changes in x (East) and
/// y (North) in nautical miles.
///
/// At a pole the longitude is undefined and zero is returned for it.
#[must_use]
pub fn position_from_xy(
    start: &GeographicPosition,
    delta_x: NauticalMiles,
    delta_y: NauticalMiles,
) -> GeographicPosition {
    const POLE_TOLERANCE: f64 = 0.000_01;

    let lat = convert::to_radians(start.lat()).0;
    let out_lat = start.lat().0 + delta_y.0 / consts::NM_PER_DEGREE;

    let out_lon = if libm::fabs(libm::fabs(lat) - consts::RAD_90) > POLE_TOLERANCE {
        start.lon().0 + delta_x.0 / (consts::NM_PER_DEGREE * libm::cos(lat))
    } else {
        0.0
    };

    GeographicPosition::new(Degrees(out_lat), Degrees(out_lon))
}

/// Find the point at a given fraction of the great-circle arc between two
/// points, by spherical linear interpolation of the unit vectors.
///
/// For example, a fraction of 0.5 from (0N, 1W) to (0N, 1E) is (0N, 0E).
/// Coincident endpoints return `start`.
/// * `start`, `end` - the arc endpoints.
/// * `fraction` - the fraction of the arc, 0 at `start` and 1 at `end`.
#[must_use]
pub fn position_at_fraction(
    start: &GeographicPosition,
    end: &GeographicPosition,
    fraction: f64,
) -> GeographicPosition {
    const MIN_ARC: f64 = 2.0 * core::f64::EPSILON;

    let arc = consts::DEGREE_TO_RAD * calculate_range(start, end).0;
    if arc < MIN_ARC {
        return *start;
    }

    let sin_arc = libm::sin(arc);
    let a = libm::sin(arc * (1.0 - fraction)) / sin_arc;
    let b = libm::sin(arc * fraction) / sin_arc;

    let p = vector::to_point(
        crate::Angle::from(start.lat()),
        crate::Angle::from(start.lon()),
    ) * a
        + vector::to_point(crate::Angle::from(end.lat()), crate::Angle::from(end.lon())) * b;
    let p = p.normalize();

    GeographicPosition::new(
        Degrees::from(vector::latitude(&p)),
        Degrees::from(vector::longitude(&p)),
    )
}

/// Calculate the latitude of the new position from a start position, a
/// bearing and a distance, by Napier's analogies.
///
/// Due North, South or full-circle bearings reduce to adding or
/// subtracting the distance along the meridian.
/// * `start` - the start position.
/// * `bearing` - the bearing in degrees.
/// * `distance` - the distance in nautical miles.
#[must_use]
pub fn new_position_latitude(
    start: &GeographicPosition,
    bearing: Degrees,
    distance: NauticalMiles,
) -> Degrees {
    let mut new_lat = if bearing.0 == 0.0 || bearing.0 == 180.0 || bearing.0 == 360.0 {
        if bearing.0 == 180.0 {
            start.lat().0 - distance.0 / consts::NM_PER_DEGREE
        } else {
            start.lat().0 + distance.0 / consts::NM_PER_DEGREE
        }
    } else {
        let a = consts::DEGREE_TO_RAD * (90.0 - start.lat().0);
        let b = consts::DEGREE_TO_RAD * (distance.0 / consts::NM_PER_DEGREE);
        let c_angle = convert::to_radians(bearing).0;
        let b_angle = napier_angle(a, b, c_angle);
        // truncation keeps the asin argument within [-1, 1]
        let x = consts::RAD_TO_DEGREE
            * libm::asin(convert::truncate(
                libm::sin(b) * libm::sin(c_angle) / libm::sin(b_angle),
                10,
            ))
            - 90.0;
        if start.lat().0 < 0.0 { x } else { libm::fabs(x) }
    };

    if new_lat > 90.0 {
        new_lat -= 90.0;
    } else if new_lat < -90.0 {
        new_lat = -(new_lat + 180.0);
    }
    Degrees(new_lat)
}

/// Calculate the longitude of the new position from a start position, a
/// bearing and a distance, by Napier's analogies.
/// * `start` - the start position.
/// * `bearing` - the bearing in degrees.
/// * `distance` - the distance in nautical miles.
#[must_use]
pub fn new_position_longitude(
    start: &GeographicPosition,
    bearing: Degrees,
    distance: NauticalMiles,
) -> Degrees {
    let a = consts::DEGREE_TO_RAD * (90.0 - start.lat().0);
    let b = consts::DEGREE_TO_RAD * (distance.0 / consts::NM_PER_DEGREE);
    let c_angle = convert::to_radians(bearing).0;
    let b_angle = napier_angle(a, b, c_angle);

    let mut new_lon = start.lon().0 + consts::RAD_TO_DEGREE * b_angle;
    if new_lon > 180.0 {
        new_lon -= 180.0;
    } else if new_lon < -180.0 {
        new_lon += 360.0;
    }
    Degrees(new_lon)
}

/// The angle opposite side `b` from Napier's analogies for the spherical
/// triangle pole-start-end.
fn napier_angle(a: f64, b: f64, c_angle: f64) -> f64 {
    let a_plus_b =
        2.0 * libm::atan(libm::cos((a - b) / 2.0) / (libm::cos((a + b) / 2.0) * libm::tan(c_angle / 2.0)));
    let a_minus_b =
        2.0 * libm::atan(libm::sin((a - b) / 2.0) / (libm::sin((a + b) / 2.0) * libm::tan(c_angle / 2.0)));
    (a_plus_b - a_minus_b) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_bearing_special_cases() {
        let origin = GeographicPosition::new(Degrees(0.0), Degrees(0.0));
        let east = GeographicPosition::new(Degrees(0.0), Degrees(90.0));
        let west = GeographicPosition::new(Degrees(0.0), Degrees(-90.0));
        let north = GeographicPosition::new(Degrees(30.0), Degrees(0.0));
        let south = GeographicPosition::new(Degrees(-30.0), Degrees(0.0));

        let bearing = calculate_abs_bearing(&origin, &east).expect("within limits");
        assert!(is_within_tolerance(90.0, bearing.0, 1e-9));

        let bearing = calculate_abs_bearing(&origin, &west).expect("within limits");
        assert!(is_within_tolerance(-90.0, bearing.0, 1e-9));

        let bearing = calculate_abs_bearing(&origin, &north).expect("within limits");
        assert!(is_within_tolerance(0.0, bearing.0, 1e-9));

        let bearing = calculate_abs_bearing(&origin, &south).expect("within limits");
        assert!(is_within_tolerance(180.0, bearing.0, 1e-9));
    }

    #[test]
    fn test_bearing_quadrants() {
        let a = GeographicPosition::new(Degrees(10.0), Degrees(20.0));
        let b = GeographicPosition::new(Degrees(30.0), Degrees(40.0));

        let north_east = calculate_abs_bearing(&a, &b).expect("within limits");
        assert!(north_east.0 > 0.0 && north_east.0 < 90.0);

        // reciprocal track lands in the South-West quadrant
        let south_west = calculate_abs_bearing(&b, &a).expect("within limits");
        assert!(south_west.0 < -90.0 && south_west.0 > -180.0);
    }

    #[test]
    fn test_relative_bearing() {
        let origin = GeographicPosition::new(Degrees(0.0), Degrees(0.0));
        let east = GeographicPosition::new(Degrees(0.0), Degrees(10.0));

        let bearing = calculate_bearing(Degrees(90.0), &origin, &east, BearingKind::Relative)
            .expect("within limits");
        assert!(is_within_tolerance(0.0, bearing.0, 1e-9));

        // renormalized into (-180, 180]
        let bearing = calculate_bearing(Degrees(-135.0), &origin, &east, BearingKind::Relative)
            .expect("within limits");
        assert!(is_within_tolerance(-135.0, bearing.0, 1e-9));
    }

    #[test]
    fn test_bearing_domain_limit() {
        let ok = GeographicPosition::new(Degrees(0.0), Degrees(0.0));
        let too_high = GeographicPosition::new(Degrees(86.0), Degrees(0.0));
        assert_eq!(
            Err(NavigationError::LatitudeDomainLimit(Degrees(86.0))),
            calculate_abs_bearing(&ok, &too_high)
        );
        assert_eq!(
            Err(NavigationError::LatitudeDomainLimit(Degrees(86.0))),
            calculate_abs_bearing(&too_high, &ok)
        );

        let invalid = GeographicPosition::new(Degrees(91.0), Degrees(0.0));
        assert_eq!(
            Err(NavigationError::LatitudeRange(Degrees(91.0))),
            calculate_abs_bearing(&invalid, &ok)
        );
    }

    #[test]
    fn test_range() {
        let origin = GeographicPosition::new(Degrees(0.0), Degrees(0.0));
        let east = GeographicPosition::new(Degrees(0.0), Degrees(90.0));

        // a quarter great circle
        let range = calculate_range(&origin, &east);
        assert!(is_within_tolerance(90.0, range.0, 1e-9));
        assert!(is_within_tolerance(
            5400.0,
            calculate_range_nm(&origin, &east).0,
            1e-6
        ));

        // identical points
        assert_eq!(0.0, calculate_range(&origin, &origin).0);

        // symmetry
        let a = GeographicPosition::new(Degrees(42.0), Degrees(29.0));
        let b = GeographicPosition::new(Degrees(39.0), Degrees(-77.0));
        assert!(is_within_tolerance(
            calculate_range(&a, &b).0,
            calculate_range(&b, &a).0,
            1e-12
        ));
    }

    #[test]
    fn test_range_short_distance() {
        // under five nautical miles the linear approximation is used
        let a = GeographicPosition::new(Degrees(0.0), Degrees(0.0));
        let b = GeographicPosition::new(Degrees(0.0), Degrees(0.05));
        let range = calculate_range(&a, &b);
        assert!(is_within_tolerance(0.05, range.0, 1e-9));
    }

    #[test]
    fn test_position_due_east_quarter_circle() {
        let origin = GeographicPosition::new(Degrees(0.0), Degrees(0.0));
        let position = calculate_position(&origin, Degrees(90.0), NauticalMiles(5400.0));
        assert!(is_within_tolerance(0.0, position.lat().0, 1e-9));
        assert!(is_within_tolerance(90.0, position.lon().0, 1e-9));
    }

    #[test]
    fn test_position_along_meridian() {
        let start = GeographicPosition::new(Degrees(20.0), Degrees(10.0));
        let position = calculate_position(&start, Degrees(0.0), NauticalMiles(300.0));
        assert!(is_within_tolerance(25.0, position.lat().0, 1e-9));
        assert!(is_within_tolerance(10.0, position.lon().0, 1e-9));
    }

    #[test]
    fn test_position_polar_crossing() {
        // due North over the pole: latitude comes back down, longitude flips
        let start = GeographicPosition::new(Degrees(89.5), Degrees(0.0));
        let position = calculate_position(&start, Degrees(0.0), NauticalMiles(60.0));
        assert!(is_within_tolerance(89.5, position.lat().0, 1e-9));
        assert!(is_within_tolerance(180.0, libm::fabs(position.lon().0), 1e-6));
    }

    #[test]
    fn test_bearing_range_inverse() {
        // propagating from a along the bearing to b for the range to b
        // lands at b, for a short non-polar pair
        let a = GeographicPosition::new(Degrees(10.0), Degrees(20.0));
        let b = GeographicPosition::new(Degrees(10.05), Degrees(20.05));

        let bearing = calculate_abs_bearing(&a, &b).expect("within limits");
        let range = calculate_range_nm(&a, &b);
        let landed = calculate_position(&a, bearing, range);
        assert!(is_within_tolerance(b.lat().0, landed.lat().0, 1e-4));
        assert!(is_within_tolerance(b.lon().0, landed.lon().0, 1e-4));
    }

    #[test]
    fn test_position_from_course_speed() {
        let start = GeographicPosition::new(Degrees(20.0), Degrees(10.0));
        let position = position_from_course_speed(&start, Knots(10.0), Degrees(0.0), 0.5);
        assert!(is_within_tolerance(
            20.0 + 5.0 / 60.0,
            position.lat().0,
            1e-9
        ));

        // zero speed stays put
        let position = position_from_course_speed(&start, Knots(0.0), Degrees(0.0), 0.5);
        assert_eq!(start, position);
    }

    #[test]
    fn test_xy_round_trip() {
        let start = GeographicPosition::new(Degrees(10.0), Degrees(20.0));
        let end = GeographicPosition::new(Degrees(10.5), Degrees(20.5));

        let (x, y) = calculate_xy(&start, &end).expect("within limits");
        assert!(x.0 > 0.0 && y.0 > 0.0);

        let back = position_from_xy(&start, x, y);
        assert!(is_within_tolerance(end.lat().0, back.lat().0, 0.01));
        assert!(is_within_tolerance(end.lon().0, back.lon().0, 0.01));
    }

    #[test]
    fn test_position_from_xy_at_pole() {
        let pole = GeographicPosition::new(Degrees(90.0), Degrees(25.0));
        let position = position_from_xy(&pole, NauticalMiles(10.0), NauticalMiles(-60.0));
        assert!(is_within_tolerance(89.0, position.lat().0, 1e-9));
        // any longitude will do at the pole; zero by convention
        assert_eq!(0.0, position.lon().0);
    }

    #[test]
    fn test_position_at_fraction() {
        let west = GeographicPosition::new(Degrees(0.0), Degrees(-1.0));
        let east = GeographicPosition::new(Degrees(0.0), Degrees(1.0));

        let mid = position_at_fraction(&west, &east, 0.5);
        assert!(is_within_tolerance(0.0, mid.lat().0, 1e-9));
        assert!(is_within_tolerance(0.0, mid.lon().0, 1e-9));

        // fraction zero is the start, fraction one is the end
        let at_start = position_at_fraction(&west, &east, 0.0);
        assert!(is_within_tolerance(-1.0, at_start.lon().0, 1e-9));
        let at_end = position_at_fraction(&west, &east, 1.0);
        assert!(is_within_tolerance(1.0, at_end.lon().0, 1e-9));

        // coincident endpoints
        let same = position_at_fraction(&west, &west, 0.5);
        assert_eq!(west, same);
    }

    #[test]
    fn test_new_position_latitude_cardinal() {
        let start = GeographicPosition::new(Degrees(10.0), Degrees(20.0));
        assert_eq!(
            11.0,
            new_position_latitude(&start, Degrees(0.0), NauticalMiles(60.0)).0
        );
        assert_eq!(
            9.0,
            new_position_latitude(&start, Degrees(180.0), NauticalMiles(60.0)).0
        );
    }

    #[test]
    fn test_new_position_along_equator() {
        let start = GeographicPosition::new(Degrees(0.0), Degrees(20.0));
        let lat = new_position_latitude(&start, Degrees(90.0), NauticalMiles(60.0));
        assert!(is_within_tolerance(0.0, lat.0, 1e-6));

        let lon = new_position_longitude(&start, Degrees(90.0), NauticalMiles(60.0));
        assert!(is_within_tolerance(21.0, lon.0, 1e-6));
    }
}
