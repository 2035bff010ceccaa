//! Symbol-to-action bindings consumed by the interpreter.

use crate::error::{LsysError, Result};
use crate::lsystem::Dimensions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What the turtle does when it reads a symbol.
///
/// Numeric variants carry a nominal value and a standard deviation; a
/// `std_dev` of zero (the default) or below makes the action exact.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    /// Advance along the heading and record a segment.
    Draw {
        distance: f64,
        #[serde(default)]
        std_dev: f64,
    },
    /// Advance along the heading without recording anything.
    Move {
        distance: f64,
        #[serde(default)]
        std_dev: f64,
    },
    /// Rotate the heading (about `up` in 3D).
    Turn {
        angle: f64,
        #[serde(default)]
        std_dev: f64,
    },
    /// Rotate `up` about the heading. 3D only.
    Spin {
        angle: f64,
        #[serde(default)]
        std_dev: f64,
    },
    /// Save the full turtle state.
    Push,
    /// Restore the most recently saved turtle state.
    Pop,
}

impl Action {
    pub fn draw(distance: f64) -> Self {
        Self::Draw {
            distance,
            std_dev: 0.0,
        }
    }

    pub fn move_by(distance: f64) -> Self {
        Self::Move {
            distance,
            std_dev: 0.0,
        }
    }

    pub fn turn(angle: f64) -> Self {
        Self::Turn {
            angle,
            std_dev: 0.0,
        }
    }

    pub fn spin(angle: f64) -> Self {
        Self::Spin {
            angle,
            std_dev: 0.0,
        }
    }

    /// Returns the same action perturbed by `std_dev`. No effect on `Push`/`Pop`.
    pub fn jitter(self, std_dev: f64) -> Self {
        match self {
            Self::Draw { distance, .. } => Self::Draw { distance, std_dev },
            Self::Move { distance, .. } => Self::Move { distance, std_dev },
            Self::Turn { angle, .. } => Self::Turn { angle, std_dev },
            Self::Spin { angle, .. } => Self::Spin { angle, std_dev },
            other => other,
        }
    }

    /// Nominal value and deviation, if the action has any.
    pub fn params(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Draw { distance, std_dev } | Self::Move { distance, std_dev } => {
                Some((distance, std_dev))
            }
            Self::Turn { angle, std_dev } | Self::Spin { angle, std_dev } => {
                Some((angle, std_dev))
            }
            Self::Push | Self::Pop => None,
        }
    }

    /// Checks that this action, bound to `symbol`, can run on a `dims` turtle.
    pub fn validate(&self, symbol: char, dims: Dimensions) -> Result<()> {
        if matches!(self, Self::Spin { .. }) && dims == Dimensions::Two {
            return Err(LsysError::InvalidDimensionForAction { symbol, dims });
        }
        if let Some((value, std_dev)) = self.params() {
            if !value.is_finite() {
                return Err(LsysError::InvalidParameter {
                    symbol,
                    reason: format!("value must be finite, got {value}"),
                });
            }
            if !std_dev.is_finite() {
                return Err(LsysError::InvalidParameter {
                    symbol,
                    reason: format!("std_dev must be finite, got {std_dev}"),
                });
            }
        }
        Ok(())
    }
}

/// Mapping from symbol to [`Action`]. Symbols without an entry are inert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionTable {
    actions: HashMap<char, Action>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `symbol` to `action` (builder pattern).
    pub fn with(mut self, symbol: char, action: Action) -> Self {
        self.set(symbol, action);
        self
    }

    /// Binds `symbol` to `action`, replacing any previous binding.
    pub fn set(&mut self, symbol: char, action: Action) {
        self.actions.insert(symbol, action);
    }

    pub fn get(&self, symbol: char) -> Option<&Action> {
        self.actions.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Validates every binding against `dims`.
    ///
    /// Bindings are checked in symbol order so the reported error is stable.
    pub fn validate(&self, dims: Dimensions) -> Result<()> {
        let mut symbols: Vec<char> = self.actions.keys().copied().collect();
        symbols.sort_unstable();
        for symbol in symbols {
            self.actions[&symbol].validate(symbol, dims)?;
        }
        Ok(())
    }
}

impl FromIterator<(char, Action)> for ActionTable {
    fn from_iter<I: IntoIterator<Item = (char, Action)>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}
