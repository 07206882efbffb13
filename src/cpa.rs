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

//! The `cpa` module computes the closest point of approach (CPA) between
//! two moving tracks, each with a position, a course in degrees and a speed
//! in knots.
//!
//! The approach track's velocity is rotated into the target's frame of
//! reference; the relative bearing of the target then splits the current
//! range into the along-track run to the CPA and the cross-track range at
//! the CPA.

#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

use crate::great_circle::{self, BearingKind};
use crate::{consts, convert, Degrees, GeographicPosition, Knots, NauticalMiles, NavigationError};

/// The outcome of a closest point of approach solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CpaState {
    /// The tracks are converging and the CPA lies ahead.
    Valid,
    /// The target is abaft the beam of the relative motion: the tracks are
    /// already separating and the current range is the closest.
    Receding,
    /// The relative velocity is essentially zero, so the range never
    /// changes.
    NoRelativeMotion,
}

impl CpaState {
    /// The conventional display name of the state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Receding => "RECEDING",
            Self::NoRelativeMotion => "NO_RELATIVE_MOTION",
        }
    }
}

impl core::fmt::Display for CpaState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A closest point of approach solution.
///
/// For `Receding` and `NoRelativeMotion` states the current geometry is
/// reported: both distances hold the current range, the elapsed time is
/// zero and the position is the approach track's start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CpaResult {
    /// The position of the approach track at the CPA.
    pub position: GeographicPosition,
    /// The distance the approach track runs to reach the CPA.
    pub distance_to_cpa: NauticalMiles,
    /// The time to reach the CPA in seconds.
    pub elapsed_seconds: f64,
    /// The separation between the tracks at the CPA.
    pub range_at_cpa: NauticalMiles,
    /// The outcome of the solution.
    pub state: CpaState,
}

impl CpaResult {
    /// A solution whose closest range is the current range.
    const fn stationary(
        state: CpaState,
        position: GeographicPosition,
        range: NauticalMiles,
    ) -> Self {
        Self {
            position,
            distance_to_cpa: range,
            elapsed_seconds: 0.0,
            range_at_cpa: range,
            state,
        }
    }
}

impl core::fmt::Display for CpaResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: range at CPA {}, distance to CPA {}, elapsed {} s at {}",
            self.state,
            self.range_at_cpa.0,
            self.distance_to_cpa.0,
            self.elapsed_seconds,
            self.position
        )
    }
}

/// Compute the closest point of approach between two moving tracks.
///
/// Each track has a position, a course in degrees and a speed in knots.
/// The relative velocity below one part per million of a knot reports
/// `NoRelativeMotion`; a relative bearing on or abaft the beam reports
/// `Receding`; both return the current range as the closest.
/// * `approach_position`, `approach_course`, `approach_speed` - the
///   manoeuvring track.
/// * `target_position`, `target_course`, `target_speed` - the target
///   track.
///
/// # Errors
///
/// The relative bearing uses the Mercator formula, so either track above
/// 85° latitude returns `LatitudeDomainLimit`; an invalid position returns
/// `LatitudeRange` or `LongitudeRange`.
pub fn calculate_cpa(
    approach_position: &GeographicPosition,
    approach_course: Degrees,
    approach_speed: Knots,
    target_position: &GeographicPosition,
    target_course: Degrees,
    target_speed: Knots,
) -> Result<CpaResult, NavigationError> {
    const CPA_EPSILON: f64 = 0.000_001;

    approach_position.validate()?;
    target_position.validate()?;

    // courses measured anticlockwise from East for the frame rotation
    let approach_en = consts::RAD_90 - convert::to_radians(approach_course).0;
    let target_en = consts::RAD_90 - convert::to_radians(target_course).0;

    let approach_speed_x = approach_speed.0 * libm::cos(approach_en);
    let approach_speed_y = approach_speed.0 * libm::sin(approach_en);

    let target_sin = libm::sin(target_en);
    let target_cos = libm::cos(target_en);

    let range_to_target = great_circle::calculate_range_nm(approach_position, target_position);

    // approach velocity in the target's frame of reference
    let speed_x_rel =
        approach_speed_x * target_cos + approach_speed_y * target_sin - target_speed.0;
    let speed_y_rel = approach_speed_y * target_cos - approach_speed_x * target_sin;

    let rel_velocity = libm::sqrt(speed_x_rel * speed_x_rel + speed_y_rel * speed_y_rel);
    if rel_velocity < CPA_EPSILON {
        return Ok(CpaResult::stationary(
            CpaState::NoRelativeMotion,
            *approach_position,
            range_to_target,
        ));
    }

    // direction of the approach in the target's frame of reference
    let course_rel = libm::atan2(speed_y_rel, speed_x_rel);

    let heading = Degrees(target_course.0 - course_rel * consts::RAD_TO_DEGREE);
    let relative_bearing = great_circle::calculate_bearing(
        heading,
        approach_position,
        target_position,
        BearingKind::Relative,
    )?;
    let relative_bearing = convert::to_radians(relative_bearing).0;

    if libm::fabs(relative_bearing) >= consts::RAD_90 {
        return Ok(CpaResult::stationary(
            CpaState::Receding,
            *approach_position,
            range_to_target,
        ));
    }

    let rb_sin = libm::fabs(libm::sin(relative_bearing));
    let rb_cos = libm::fabs(libm::cos(relative_bearing));

    let run_to_cpa = range_to_target.0 * rb_cos;
    let hours_to_cpa = run_to_cpa / rel_velocity;

    Ok(CpaResult {
        position: great_circle::position_from_course_speed(
            approach_position,
            approach_speed,
            approach_course,
            hours_to_cpa,
        ),
        distance_to_cpa: NauticalMiles(hours_to_cpa * approach_speed.0),
        elapsed_seconds: 3600.0 * hours_to_cpa,
        range_at_cpa: NauticalMiles(range_to_target.0 * rb_sin),
        state: CpaState::Valid,
    })
}

/// Compute the perpendicular distance from a point to the great circle
/// through `line_start` and `line_end`, by solving the CPA from a dummy
/// track running along the circle to the stationary target. Only the
/// closest range of that solution is meaningful, so just it is returned.
///
/// # Errors
///
/// See [`calculate_cpa`].
pub fn perpendicular_distance(
    target: &GeographicPosition,
    line_start: &GeographicPosition,
    line_end: &GeographicPosition,
) -> Result<NauticalMiles, NavigationError> {
    // any speed serves; 60 knots makes the arithmetic easy to check
    let course = great_circle::calculate_abs_bearing(line_start, line_end)?;
    let cpa = calculate_cpa(
        line_start,
        course,
        Knots(60.0),
        target,
        Degrees(0.0),
        Knots(0.0),
    )?;
    Ok(cpa.range_at_cpa)
}
