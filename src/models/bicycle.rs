// ABOUTME: Bicycle record combining immutable configuration with mutable usage counters
// ABOUTME: Trip recording, read accessors, and descriptive rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Gearing, Handlebar, Style};
use crate::errors::ModelError;

/// A two-wheeled, human-powered mode of transportation.
///
/// A bicycle is assembled once from its parts and never reconfigured; a
/// "different bicycle" is a new instance. Only the usage counters (trip count
/// and distance travelled) evolve after construction, and only through the
/// travel operations. Fields are private to ensure data integrity - use
/// accessor methods to read them.
///
/// # Examples
///
/// ```rust
/// use bicycle_core::models::{Bicycle, Gearing, Handlebar, Style};
///
/// let mut bike = Bicycle::new(
///     Style::Road,
///     Gearing::Freewheel { speeds: 21 },
///     Handlebar::Drop,
///     54,
/// );
/// bike.travel(1500.5);
///
/// assert_eq!(bike.number_of_trips(), 1);
/// assert_eq!(bike.distance_travelled_meters(), 1500.5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bicycle {
    /// Frame and construction style
    style: Style,
    /// Drivetrain mechanism
    gearing: Gearing,
    /// Steering hardware
    handlebar: Handlebar,
    /// Frame size in centimeters
    frame_size_cm: u32,
    /// Number of trips recorded since construction
    number_of_trips: u64,
    /// Total distance travelled in meters
    distance_travelled: f64,
}

impl Bicycle {
    /// Assemble a new bicycle from the provided parts and specifications.
    ///
    /// Both usage counters start at zero. No validation is performed on
    /// `frame_size_cm`; a zero frame size is accepted as-is.
    #[must_use]
    pub const fn new(
        style: Style,
        gearing: Gearing,
        handlebar: Handlebar,
        frame_size_cm: u32,
    ) -> Self {
        Self {
            style,
            gearing,
            handlebar,
            frame_size_cm,
            number_of_trips: 0,
            distance_travelled: 0.0,
        }
    }

    /// Returns the frame and construction style
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Returns the drivetrain mechanism
    #[must_use]
    pub const fn gearing(&self) -> Gearing {
        self.gearing
    }

    /// Returns the steering hardware type
    #[must_use]
    pub const fn handlebar(&self) -> Handlebar {
        self.handlebar
    }

    /// Returns the frame size in centimeters
    #[must_use]
    pub const fn frame_size_cm(&self) -> u32 {
        self.frame_size_cm
    }

    /// Returns the number of trips recorded since construction
    #[must_use]
    pub const fn number_of_trips(&self) -> u64 {
        self.number_of_trips
    }

    /// Returns the total distance travelled in meters
    #[must_use]
    pub const fn distance_travelled_meters(&self) -> f64 {
        self.distance_travelled
    }

    /// Take the bike out for a spin.
    ///
    /// Records one trip of `distance_meters`, updating both usage counters
    /// in a single step.
    ///
    /// # Panics
    ///
    /// Panics if `distance_meters` is not strictly greater than 0. A
    /// non-positive trip distance is a programming error, not a runtime
    /// condition; callers with untrusted input should use
    /// [`try_travel`](Self::try_travel) instead.
    pub fn travel(&mut self, distance_meters: f64) {
        assert!(
            distance_meters > 0.0,
            "trip distance must be greater than 0 meters, got {distance_meters}"
        );
        self.distance_travelled += distance_meters;
        self.number_of_trips += 1;
        debug!(
            distance_meters,
            total_trips = self.number_of_trips,
            "trip recorded"
        );
    }

    /// Recoverable variant of [`travel`](Self::travel).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveDistance`] if `distance_meters` is
    /// not strictly greater than 0; the counters are left untouched.
    pub fn try_travel(&mut self, distance_meters: f64) -> Result<(), ModelError> {
        if distance_meters <= 0.0 {
            return Err(ModelError::NonPositiveDistance { distance_meters });
        }
        self.travel(distance_meters);
        Ok(())
    }

    /// Render the human-readable summary of this bicycle.
    ///
    /// Pure with respect to state; equivalent to formatting with `{}`.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Bicycle {
    /// Formats the bicycle as comma-separated descriptive clauses: style,
    /// gearing, handlebars, frame size, then usage totals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, on a {}″ frame, \
             with a total of {} meters traveled over {} trips.",
            self.style.description(),
            self.gearing.description(),
            self.handlebar.description(),
            self.frame_size_cm,
            self.distance_travelled,
            self.number_of_trips
        )
    }
}
