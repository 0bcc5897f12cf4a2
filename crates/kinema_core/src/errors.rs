//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`KinemaError`] covers every failure mode of the engine.
//! Almost all of them are configuration problems detected while a track or an
//! animator is being built, described by [`ConfigurationError`]. Nothing fails
//! once an animator is playing: a bad configuration is rejected up front.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, KinemaError>`.
//!
//! ```rust,ignore
//! use kinema_core::errors::{ConfigurationError, Result};
//!
//! fn check_duration(ms: f64) -> Result<()> {
//!     if ms <= 0.0 {
//!         return Err(ConfigurationError::InvalidDuration(ms).into());
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Rejected track or animator configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    // ========================================================================
    // Keyframe Track Errors
    // ========================================================================
    /// A track needs at least a start and an end keyframe.
    #[error("Track needs at least two keyframes, got {count}")]
    TooFewKeyframes {
        /// Number of keyframes supplied
        count: usize,
    },

    /// `keys` and `values` must be parallel arrays.
    #[error("Track has {keys} keys but {values} values")]
    KeyValueLengthMismatch {
        /// Number of keys
        keys: usize,
        /// Number of values
        values: usize,
    },

    /// Keys must be strictly increasing.
    #[error("Keys must be strictly ascending: key[{index}] = {key} follows {previous}")]
    KeysNotAscending {
        /// Index of the offending key
        index: usize,
        /// The key before it
        previous: f32,
        /// The offending key
        key: f32,
    },

    /// The first key must be exactly `0`.
    #[error("First key must be 0, got {0}")]
    FirstKeyNotZero(f32),

    /// The last key must be exactly `1`.
    #[error("Last key must be 1, got {0}")]
    LastKeyNotOne(f32),

    /// NaN or infinite key.
    #[error("Key at index {index} is not finite")]
    NonFiniteKey {
        /// Index of the offending key
        index: usize,
    },

    /// NaN or infinite component value.
    #[error("Component '{component}' of keyframe {index} is not finite")]
    NonFiniteValue {
        /// Keyframe index
        index: usize,
        /// Component name
        component: String,
    },

    /// A keyframe value without any component.
    #[error("Keyframe {index} has no components")]
    EmptyValue {
        /// Keyframe index
        index: usize,
    },

    /// The component sets of two keyframes in one track differ.
    #[error("Component '{component}' is not present in every keyframe (keyframe {index})")]
    ComponentMismatch {
        /// Keyframe index where the mismatch was found
        index: usize,
        /// The component present on one side only
        component: String,
    },

    // ========================================================================
    // Binding Errors
    // ========================================================================
    /// The bound target does not expose a component the track animates.
    #[error("Target has no component named '{component}'")]
    UnknownComponent {
        /// Component name
        component: String,
    },

    /// A configuration references a target name that was never registered.
    #[error("Unknown animation target: {0}")]
    UnknownTarget(String),

    // ========================================================================
    // Animator Errors
    // ========================================================================
    /// Durations are in milliseconds and must be strictly positive.
    #[error("Duration must be > 0 ms, got {0}")]
    InvalidDuration(f64),

    /// An animator without tracks animates nothing.
    #[error("Animator has no tracks")]
    NoTracks,
}

/// The main error type for the Kinema engine.
#[derive(Error, Debug)]
pub enum KinemaError {
    /// Invalid track, binding or animator configuration.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// JSON parsing error while reading an animator configuration.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KinemaError {
    /// Returns the configuration error, if this is one.
    #[must_use]
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            KinemaError::Configuration(err) => Some(err),
            KinemaError::Json(_) => None,
        }
    }
}

/// Alias for `Result<T, KinemaError>`.
pub type Result<T> = std::result::Result<T, KinemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_error_converts() {
        let err: KinemaError = ConfigurationError::InvalidDuration(-1.0).into();
        assert_eq!(
            err.as_configuration(),
            Some(&ConfigurationError::InvalidDuration(-1.0))
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: Duration must be > 0 ms, got -1"
        );
    }

    #[test]
    fn json_error_is_not_configuration() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = KinemaError::from(json_err);
        assert!(err.as_configuration().is_none());
    }
}
