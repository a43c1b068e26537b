// ABOUTME: Core data models for the bicycle domain
// ABOUTME: Re-exports Bicycle and the Style, Gearing, Handlebar part enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Data Models
//!
//! Core data structures for the bicycle domain.
//!
//! ## Core Models
//!
//! - `Bicycle`: an assembled bicycle with its configuration and usage counters
//! - `Style`: frame and construction style
//! - `Gearing`: drivetrain mechanism, fixed or multi-speed freewheel
//! - `Handlebar`: steering hardware type

mod bicycle;
mod parts;

pub use bicycle::Bicycle;
pub use parts::{Gearing, Handlebar, Style};
