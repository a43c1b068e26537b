// ABOUTME: Part enumerations for bicycle configuration
// ABOUTME: Style, Gearing, and Handlebar with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Frame and construction style.
///
/// This enum is a closed set; rendering and parsing match on it exhaustively
/// so an unhandled variant is caught at compile time if the catalog grows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// A style for streets or trails
    Road,
    /// A style for long journeys
    Touring,
    /// A style for casual trips around town
    Cruiser,
    /// A style for general-purpose transportation
    Hybrid,
}

impl Style {
    /// Get the canonical lowercase name for this style
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Touring => "touring",
            Self::Cruiser => "cruiser",
            Self::Hybrid => "hybrid",
        }
    }

    /// Get the descriptive clause for this style, as rendered in a bicycle summary
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Road => "A road bike for streets or trails",
            Self::Touring => "A touring bike for long journeys",
            Self::Cruiser => "A cruiser bike for casual trips around town",
            Self::Hybrid => "A hybrid bike for general-purpose transportation",
        }
    }
}

impl FromStr for Style {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "road" => Ok(Self::Road),
            "touring" => Ok(Self::Touring),
            "cruiser" => Ok(Self::Cruiser),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(ModelError::UnknownStyle {
                value: other.to_owned(),
            }),
        }
    }
}

/// Mechanism for converting pedal power into motion.
///
/// Either a single fixed gear or a variable-speed, disengageable freewheel
/// carrying its speed count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gearing {
    /// A single, fixed gear
    Fixed,
    /// A variable-speed, disengageable gear
    Freewheel {
        /// Number of selectable speeds
        speeds: u32,
    },
}

impl Gearing {
    /// Get the canonical lowercase name for this gearing mechanism
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Freewheel { .. } => "freewheel",
        }
    }

    /// Get the descriptive clause for this gearing, as rendered in a bicycle summary
    #[must_use]
    pub fn description(self) -> String {
        match self {
            Self::Fixed => "with a single, fixed gear".to_owned(),
            Self::Freewheel { speeds } => format!("with a {speeds}-speed freewheel gear"),
        }
    }

    /// Build a gearing from its name and an optional speed count.
    ///
    /// `"fixed"` ignores any speed count; `"freewheel"` requires one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownGearing`] for an unrecognized name and
    /// [`ModelError::MissingSpeedCount`] for a freewheel without speeds.
    pub fn from_parts(name: &str, speeds: Option<u32>) -> Result<Self, ModelError> {
        match name {
            "fixed" => Ok(Self::Fixed),
            "freewheel" => speeds
                .map(|speeds| Self::Freewheel { speeds })
                .ok_or(ModelError::MissingSpeedCount),
            other => Err(ModelError::UnknownGearing {
                value: other.to_owned(),
            }),
        }
    }
}

/// Hardware used for steering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Handlebar {
    /// A casual handlebar
    Riser,
    /// An upright handlebar
    Cafe,
    /// A classic handlebar
    Drop,
    /// A powerful handlebar
    Bullhorn,
}

impl Handlebar {
    /// Get the canonical lowercase name for this handlebar type
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Riser => "riser",
            Self::Cafe => "cafe",
            Self::Drop => "drop",
            Self::Bullhorn => "bullhorn",
        }
    }

    /// Get the descriptive clause for this handlebar, as rendered in a bicycle summary
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Riser => "and casual, riser handlebars",
            Self::Cafe => "and upright, café handlebars",
            Self::Drop => "and classic, drop handlebars",
            Self::Bullhorn => "and powerful bullhorn handlebars",
        }
    }
}

impl FromStr for Handlebar {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "riser" => Ok(Self::Riser),
            // Accept both the plain and accented spellings
            "cafe" | "café" => Ok(Self::Cafe),
            "drop" => Ok(Self::Drop),
            "bullhorn" => Ok(Self::Bullhorn),
            other => Err(ModelError::UnknownHandlebar {
                value: other.to_owned(),
            }),
        }
    }
}
