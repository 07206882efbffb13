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

//! The convert module contains conversions between decimal degrees and
//! degree-minute-second triples, between decimal hours and hour-minute-second
//! triples, and between degrees and radians.

use crate::{consts, Degrees, NavigationError, Radians};

/// A degree-minute-second angle.
///
/// `minutes` and `seconds` are non-negative; only `degrees` carries sign.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dms {
    /// Whole degrees, signed.
    pub degrees: i32,
    /// Whole minutes in [0, 60).
    pub minutes: i32,
    /// Seconds in [0, 60).
    pub seconds: f64,
}

impl Dms {
    /// Construct a `Dms`.
    #[must_use]
    pub const fn new(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }
}

/// An hour-minute-second duration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hms {
    /// Whole hours.
    pub hours: i32,
    /// Whole minutes in [0, 60).
    pub minutes: i32,
    /// Seconds in [0, 60).
    pub seconds: f64,
}

impl Hms {
    /// Construct an `Hms`.
    #[must_use]
    pub const fn new(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

/// Convert an angle in degrees to radians.
#[must_use]
pub const fn to_radians(value: Degrees) -> Radians {
    Radians(consts::DEGREE_TO_RAD * value.0)
}

/// Convert an angle in radians to degrees.
#[must_use]
pub const fn to_degrees(value: Radians) -> Degrees {
    Degrees(value.0 / consts::DEGREE_TO_RAD)
}

/// Truncate a value to `places` decimal places, flooring not rounding.
#[must_use]
pub fn truncate(value: f64, places: u32) -> f64 {
    let scale = libm::pow(10.0, f64::from(places));
    libm::floor(value * scale) / scale
}

/// Convert decimal degrees to a degree-minute-second triple.
///
/// The returned `degrees` is the **unsigned magnitude**: the sign of the
/// input is not attached to any component and the caller must track it.
/// Seconds are truncated to 7 decimal places after adding 5e-8 to absorb
/// binary representation error just below a whole second.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn degrees_to_dms(value: Degrees) -> Dms {
    let magnitude = libm::fabs(value.0);
    let degrees = libm::floor(magnitude);
    let fraction = magnitude - degrees;
    let minutes = libm::floor(fraction * 60.0);
    let seconds = truncate((fraction * 60.0 - minutes) * 60.0 + 5.0e-8, 7);
    Dms::new(degrees as i32, minutes as i32, seconds)
}

/// Convert a degree-minute-second triple to decimal degrees.
///
/// The sign is carried by `degrees` alone, so the minutes and seconds of a
/// negative angle still add towards the East/North:
/// `(-74, 30, 0.0)` converts to `-73.5`, not `-74.5`.
///
/// # Errors
///
/// `MinutesRange` or `SecondsRange` when a component is outside [0, 60);
/// use [`normalize_dms`] first for overflowing components.
pub fn dms_to_degrees(value: &Dms) -> Result<Degrees, NavigationError> {
    if !(0..60).contains(&value.minutes) {
        return Err(NavigationError::MinutesRange(value.minutes));
    }
    if !(0.0..60.0).contains(&value.seconds) {
        return Err(NavigationError::SecondsRange(value.seconds));
    }
    Ok(Degrees(
        f64::from(value.degrees) + f64::from(value.minutes) / 60.0 + value.seconds / 3600.0,
    ))
}

/// Normalize a degree-minute-second triple, carrying whole seconds >= 60
/// into minutes and minutes >= 60 into degrees. The sign of `degrees` is
/// preserved.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn normalize_dms(value: &Dms) -> Dms {
    let mut degrees = value.degrees.abs();
    let mut minutes = value.minutes;
    let mut seconds = value.seconds;

    if seconds >= 60.0 {
        let carry = libm::floor(seconds / 60.0) as i32;
        minutes += carry;
        seconds -= 60.0 * f64::from(carry);
    }
    if minutes >= 60 {
        degrees += minutes / 60;
        minutes %= 60;
    }
    if value.degrees < 0 {
        degrees = -degrees;
    }
    Dms::new(degrees, minutes, seconds)
}

/// Convert decimal hours to an hour-minute-second triple.
///
/// # Errors
///
/// `NegativeTime` for a negative duration, `HoursRange` when the whole
/// hours reach 24.
pub fn hours_to_hms(hours: f64) -> Result<Hms, NavigationError> {
    if hours < 0.0 {
        return Err(NavigationError::NegativeTime(hours));
    }
    let dms = degrees_to_dms(Degrees(hours));
    if dms.degrees >= 24 {
        return Err(NavigationError::HoursRange(dms.degrees));
    }
    Ok(Hms::new(dms.degrees, dms.minutes, dms.seconds))
}

/// Convert an hour-minute-second triple to decimal hours.
///
/// # Errors
///
/// `NegativeTime` for a negative component, `MinutesRange` or
/// `SecondsRange` when a component is 60 or more.
pub fn hms_to_hours(value: &Hms) -> Result<f64, NavigationError> {
    if value.hours < 0 {
        return Err(NavigationError::NegativeTime(f64::from(value.hours)));
    }
    if value.minutes < 0 || value.seconds < 0.0 {
        return Err(NavigationError::NegativeTime(libm::fmin(
            f64::from(value.minutes),
            value.seconds,
        )));
    }
    if value.minutes >= 60 {
        return Err(NavigationError::MinutesRange(value.minutes));
    }
    if value.seconds >= 60.0 {
        return Err(NavigationError::SecondsRange(value.seconds));
    }
    Ok(f64::from(value.hours) + f64::from(value.minutes) / 60.0 + value.seconds / 3600.0)
}

/// Normalize an hour-minute-second triple, carrying whole seconds >= 60
/// into minutes and minutes >= 60 into hours.
#[must_use]
pub fn normalize_hms(value: &Hms) -> Hms {
    let dms = normalize_dms(&Dms::new(value.hours, value.minutes, value.seconds));
    Hms::new(dms.degrees, dms.minutes, dms.seconds)
}
