//! Errors returned by the strict entry points.
//!
//! The lenient API never fails: unknown names fall back to a default and
//! degenerate dimensions produce degenerate geometry. Callers that prefer
//! to catch bad level data early use the `try_*`/`FromStr` variants instead.

use thiserror::Error;

/// Errors that can occur while building level content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    /// The surface archetype name is not one of the known recipes.
    #[error("unknown surface archetype: {0:?}")]
    UnknownArchetype(String),
    /// The decal style name is not one of the known recipes.
    #[error("unknown decal style: {0:?}")]
    UnknownDecalStyle(String),
    /// A dimension was zero, negative or not finite.
    #[error("invalid {what}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected.
        what: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The font bytes could not be parsed.
    #[error("font data could not be parsed")]
    InvalidFont,
}
