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

//! nav-sphere
//!
//! A library for computing great-circle and rhumb-line navigation quantities
//! for marine and air navigation on the spherical Earth: bearings, ranges,
//! new positions from course, speed and time, the closest point of approach
//! (CPA) between two moving tracks, and convex-hull ordering utilities over
//! geographic points.
//!
//! ## Design
//!
//! The algorithms are the classic spherical-trigonometry equations from
//! Bowditch's *American Practical Navigator* and Dutton's *Navigation and
//! Piloting*, with the special-case branches those equations need near the
//! poles and the antimeridian:
//!
//! - bearings use the Mercator formula and are therefore limited to
//!   latitudes within 85° of the Equator;
//! - ranges below five nautical miles switch to a flat-earth approximation
//!   to avoid the loss of precision of `acos` near zero;
//! - rhumb lines above 85° latitude fall back to the great-circle update.
//!
//! Every operation is a pure function over immutable numeric inputs: fresh
//! result values are returned, nothing is cached and nothing blocks, so all
//! functions are safe to call concurrently without synchronisation.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define
//!   `LatLong` and perform great-circle vector calculations.
//! - [icao_units](https://crates.io/crates/icao-units) - to define
//!   `NauticalMiles`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod consts;
pub mod convert;
pub mod cpa;
pub mod geometry;
pub mod great_circle;
pub mod rhumb_line;

pub use angle_sc::{Angle, Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use unit_sphere::LatLong;

use thiserror::Error;

/// The errors reported by the navigation algorithms.
///
/// `LatitudeDomainLimit` is a hard domain limit of the Mercator bearing
/// formula, not a generic input error: the caller must pick a different
/// algorithm or reject the input. The other variants reject inputs outside
/// the coordinate or sexagesimal ranges.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum NavigationError {
    /// Track above or below 85 degrees latitude, where the Mercator
    /// bearing term is singular.
    #[error("track above or below 85 degrees latitude: {0:?}")]
    LatitudeDomainLimit(Degrees),
    /// Latitude outside [-90, 90] degrees.
    #[error("latitude out of range: {0:?}")]
    LatitudeRange(Degrees),
    /// Longitude outside [-180, 180] degrees.
    #[error("longitude out of range: {0:?}")]
    LongitudeRange(Degrees),
    /// Minutes outside [0, 60).
    #[error("minutes out of range: {0}")]
    MinutesRange(i32),
    /// Seconds outside [0, 60).
    #[error("seconds out of range: {0}")]
    SecondsRange(f64),
    /// Hours is greater than 24.
    #[error("hours is greater than 24: {0}")]
    HoursRange(i32),
    /// Time cannot be negative.
    #[error("time cannot be negative: {0}")]
    NegativeTime(f64),
}

/// A geographic position: latitude and longitude in decimal degrees.
///
/// A value type, copied on propagation. Positions are compared by
/// coordinates, except at the poles where the longitude is undefined:
/// two positions at the same pole are equal regardless of longitude.
#[derive(Clone, Copy, Debug)]
pub struct GeographicPosition {
    lat: Degrees,
    lon: Degrees,
}

impl GeographicPosition {
    /// Construct a `GeographicPosition`.
    /// * `lat` - the latitude in decimal degrees.
    /// * `lon` - the longitude in decimal degrees.
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    /// Accessor for the latitude.
    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    /// Accessor for the longitude.
    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }

    /// Check that the position is within range, i.e. whether
    /// |`lat`| <= 90° and |`lon`| <= 180°.
    ///
    /// # Errors
    ///
    /// `LatitudeRange` or `LongitudeRange` for an out of range coordinate.
    pub fn validate(&self) -> Result<(), NavigationError> {
        if libm::fabs(self.lat.0) > 90.0 {
            return Err(NavigationError::LatitudeRange(self.lat));
        }
        if libm::fabs(self.lon.0) > 180.0 {
            return Err(NavigationError::LongitudeRange(self.lon));
        }
        Ok(())
    }
}

impl Validate for GeographicPosition {
    /// Test whether a `GeographicPosition` is valid.
    /// Whether |`lat`| <= 90° and |`lon`| <= 180°.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for GeographicPosition {
    fn default() -> Self {
        Self::new(Degrees(0.0), Degrees(0.0))
    }
}

#[allow(clippy::float_cmp)]
impl PartialEq for GeographicPosition {
    fn eq(&self, other: &Self) -> bool {
        (self.lat == other.lat && self.lon == other.lon)
            || (self.lat.0 == 90.0 && other.lat.0 == 90.0)
            || (self.lat.0 == -90.0 && other.lat.0 == -90.0)
    }
}

impl From<&LatLong> for GeographicPosition {
    fn from(value: &LatLong) -> Self {
        Self::new(value.lat(), value.lon())
    }
}

impl From<&GeographicPosition> for LatLong {
    fn from(value: &GeographicPosition) -> Self {
        Self::new(value.lat(), value.lon())
    }
}

impl core::fmt::Display for GeographicPosition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Latitude: {}; Longitude: {}", self.lat.0, self.lon.0)
    }
}

/// Speed in knots (nautical miles per hour).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Knots(pub f64);

impl core::fmt::Display for Knots {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} kts", self.0)
    }
}

/// A height above the surface in feet.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Feet(pub f64);

impl core::fmt::Display for Feet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ft", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_accessors_and_default() {
        let position = GeographicPosition::new(Degrees(42.0), Degrees(29.0));
        assert_eq!(42.0, position.lat().0);
        assert_eq!(29.0, position.lon().0);

        let origin = GeographicPosition::default();
        assert_eq!(0.0, origin.lat().0);
        assert_eq!(0.0, origin.lon().0);
    }

    #[test]
    fn test_position_equality() {
        let a = GeographicPosition::new(Degrees(45.0), Degrees(-120.0));
        let b = GeographicPosition::new(Degrees(45.0), Degrees(-120.0));
        let c = GeographicPosition::new(Degrees(45.0), Degrees(-119.0));
        assert_eq!(a, b);
        assert_ne!(a, c);

        // poles have no defined longitude
        let north1 = GeographicPosition::new(Degrees(90.0), Degrees(0.0));
        let north2 = GeographicPosition::new(Degrees(90.0), Degrees(135.0));
        assert_eq!(north1, north2);

        let south1 = GeographicPosition::new(Degrees(-90.0), Degrees(45.0));
        let south2 = GeographicPosition::new(Degrees(-90.0), Degrees(-45.0));
        assert_eq!(south1, south2);
        assert_ne!(north1, south1);
    }

    #[test]
    fn test_position_validation() {
        let valid = GeographicPosition::new(Degrees(89.0), Degrees(179.0));
        assert!(valid.is_valid());

        let bad_lat = GeographicPosition::new(Degrees(90.5), Degrees(0.0));
        assert!(!bad_lat.is_valid());
        assert_eq!(
            Err(NavigationError::LatitudeRange(Degrees(90.5))),
            bad_lat.validate()
        );

        let bad_lon = GeographicPosition::new(Degrees(0.0), Degrees(181.0));
        assert_eq!(
            Err(NavigationError::LongitudeRange(Degrees(181.0))),
            bad_lon.validate()
        );
    }

    #[test]
    fn test_position_lat_long_conversion() {
        let position = GeographicPosition::new(Degrees(39.0), Degrees(-77.0));
        let lat_long = LatLong::from(&position);
        assert_eq!(39.0, lat_long.lat().0);
        assert_eq!(-77.0, lat_long.lon().0);

        let round_trip = GeographicPosition::from(&lat_long);
        assert_eq!(position, round_trip);
    }

    #[test]
    fn test_display() {
        let position = GeographicPosition::new(Degrees(1.5), Degrees(-3.25));
        assert_eq!("Latitude: 1.5; Longitude: -3.25", format!("{position}"));
        assert_eq!("10 kts", format!("{}", Knots(10.0)));
        assert_eq!("100 ft", format!("{}", Feet(100.0)));
    }

    #[test]
    fn test_navigation_error_display() {
        assert_eq!(
            "track above or below 85 degrees latitude: Degrees(86.0)",
            format!("{}", NavigationError::LatitudeDomainLimit(Degrees(86.0)))
        );
        assert_eq!(
            "time cannot be negative: -1",
            format!("{}", NavigationError::NegativeTime(-1.0))
        );
    }
}
