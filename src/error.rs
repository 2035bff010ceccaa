//! Error types for expansion, validation, and rendering.

use crate::lsystem::Dimensions;
use thiserror::Error;

/// Errors raised while configuring or rendering an L-System.
///
/// A failed render produces no partial output: segments emitted before the
/// failure are discarded together with the turtle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LsysError {
    /// A `Pop` symbol was reached with no saved turtle state.
    #[error("stack underflow: pop at symbol index {index} with no saved state")]
    StackUnderflow { index: usize },

    /// An action was bound that the configured dimensionality cannot perform.
    #[error("action bound to '{symbol}' is not valid for {dims:?} turtles")]
    InvalidDimensionForAction { symbol: char, dims: Dimensions },

    /// A rotation axis handed to the kernel was not unit length.
    #[error("rotation axis must be unit length, got norm {norm}")]
    UnnormalizedAxis { norm: f64 },

    /// An action carries a value the turtle cannot use (NaN, infinite, negative std-dev).
    #[error("invalid parameter for '{symbol}': {reason}")]
    InvalidParameter { symbol: char, reason: String },

    /// Dimensionality other than 2 or 3.
    #[error("dimensionality must be 2 or 3, got {0}")]
    InvalidDimensions(u8),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LsysError>;
