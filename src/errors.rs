// ABOUTME: Error types for bicycle model operations
// ABOUTME: Defines ModelError with structured context for parsing and trip failures

/// Common error type for recoverable model operations.
///
/// The fatal precondition on [`Bicycle::travel`](crate::models::Bicycle::travel)
/// is deliberately *not* represented here; it signals a programming error and
/// panics at the call site. Everything else that can fail surfaces as one of
/// these variants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A trip was recorded with a zero or negative distance
    #[error("trip distance must be greater than 0 meters, got {distance_meters}")]
    NonPositiveDistance {
        /// The rejected distance, in meters
        distance_meters: f64,
    },

    /// The string does not name a known frame style
    #[error("unknown bicycle style '{value}' (expected road, touring, cruiser, or hybrid)")]
    UnknownStyle {
        /// The unrecognized style name
        value: String,
    },

    /// The string does not name a known handlebar type
    #[error("unknown handlebar type '{value}' (expected riser, café, drop, or bullhorn)")]
    UnknownHandlebar {
        /// The unrecognized handlebar name
        value: String,
    },

    /// The string does not name a known gearing mechanism
    #[error("unknown gearing '{value}' (expected fixed or freewheel)")]
    UnknownGearing {
        /// The unrecognized gearing name
        value: String,
    },

    /// Freewheel gearing was requested without a speed count
    #[error("freewheel gearing requires a speed count")]
    MissingSpeedCount,
}
