// ABOUTME: Bicycle domain model library with trip tracking and descriptive rendering
// ABOUTME: Foundation crate with the Bicycle record, part enumerations, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Bicycle Core
//!
//! Foundation crate modeling a bicycle as an immutable-configuration,
//! mutable-state record. A `Bicycle` is assembled once from its parts
//! (style, gearing, handlebar, frame size) and thereafter only its usage
//! statistics evolve, one recorded trip at a time.
//!
//! ## Modules
//!
//! - **models**: `Bicycle` record plus the `Style`, `Gearing`, and `Handlebar` part enums
//! - **errors**: `ModelError` for recoverable failures (parsing, rejected trips)
//!
//! ## Design Principles
//!
//! - **Write-once configuration**: part fields are private and set only at
//!   construction; accessors expose them read-only
//! - **Private-mutation counters**: trip count and distance change only
//!   through the travel operations
//! - **Serializable**: all models support JSON serialization
//! - **Type Safe**: closed enums with exhaustive matching keep rendering in
//!   step with the part catalog

/// Recoverable error types for model operations
pub mod errors;

/// Core data models (`Bicycle`, `Style`, `Gearing`, `Handlebar`)
pub mod models;
