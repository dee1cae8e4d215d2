//! Error types for the triple screen camera rig
//!
//! This module defines the errors reported by the rig: rejected option values,
//! degenerate display geometry, and cameras missing at construction time.

use std::fmt;
use crate::rig::CameraSlot;

/// Result type for rig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rig errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Option value outside of its inclusive range. The stored value is unchanged.
    OptionOutOfRange {
        /// Option name (e.g. "DisplayWidth")
        option: &'static str,
        /// Rejected value
        value: f32,
        /// Inclusive lower bound
        min: f32,
        /// Inclusive upper bound
        max: f32,
    },

    /// Display quad or clip planes cannot produce a valid projection
    DegenerateGeometry(String),

    /// A camera handle was not provided when building the rig
    MissingCamera(CameraSlot),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OptionOutOfRange { option, value, min, max } => write!(
                f,
                "Option out of range: {} = {:.4}, range: {:.4} - {:.4}",
                option, value, min, max
            ),
            Error::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {}", msg),
            Error::MissingCamera(slot) => write!(f, "Missing camera: {} camera was not provided", slot),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
