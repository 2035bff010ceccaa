//! The L-System driver: axiom, rules, actions and dimensionality in one place.

use crate::action::ActionTable;
use crate::drawing::Drawing;
use crate::error::{LsysError, Result};
use crate::grammar::{self, RuleTable};
use crate::interpreter;
use crate::sampler::Sampler;
use crate::turtle::{Turtle2D, Turtle3D, TurtleConfig};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of spatial dimensions the turtle works in. Fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensions {
    #[default]
    Two,
    Three,
}

impl TryFrom<u8> for Dimensions {
    type Error = LsysError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            other => Err(LsysError::InvalidDimensions(other)),
        }
    }
}

impl From<Dimensions> for u8 {
    fn from(dims: Dimensions) -> Self {
        match dims {
            Dimensions::Two => 2,
            Dimensions::Three => 3,
        }
    }
}

/// Plain-data description of an L-System, suitable for preset catalogues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LSystemDefinition {
    pub axiom: String,
    #[serde(default)]
    pub rules: RuleTable,
    #[serde(default)]
    pub actions: ActionTable,
    #[serde(default)]
    pub dims: Dimensions,
    /// Generations to expand when building from this definition.
    #[serde(default)]
    pub generations: usize,
    #[serde(default)]
    pub turtle: TurtleConfig,
}

/// A configured L-System.
///
/// [`expand`](Self::expand) replaces the axiom with its rewritten form;
/// [`render`](Self::render) interprets the current axiom without touching it.
#[derive(Clone, Debug)]
pub struct LSystem {
    axiom: String,
    rules: RuleTable,
    actions: ActionTable,
    dims: Dimensions,
    config: TurtleConfig,
}

impl LSystem {
    /// Creates an L-System, validating every action against `dims`.
    pub fn new(
        axiom: impl Into<String>,
        rules: RuleTable,
        actions: ActionTable,
        dims: Dimensions,
    ) -> Result<Self> {
        actions.validate(dims)?;
        Ok(Self {
            axiom: axiom.into(),
            rules,
            actions,
            dims,
            config: TurtleConfig::default(),
        })
    }

    /// Builds the system described by `def` and expands it `def.generations` times.
    pub fn from_definition(def: LSystemDefinition) -> Result<Self> {
        let mut system =
            Self::new(def.axiom, def.rules, def.actions, def.dims)?.with_config(def.turtle);
        system.expand(def.generations);
        Ok(system)
    }

    /// Overrides the turtle configuration (builder pattern).
    pub fn with_config(mut self, config: TurtleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Rewrites the axiom `generations` times and returns the result.
    pub fn expand(&mut self, generations: usize) -> &str {
        self.axiom = grammar::expand(&self.axiom, &self.rules, generations);
        &self.axiom
    }

    /// Interprets the current axiom with a fresh turtle.
    pub fn render<R: RngCore>(&self, sampler: &mut Sampler<R>) -> Result<Drawing> {
        let config = self.config;
        let drawing = match self.dims {
            Dimensions::Two => Drawing::Planar(interpreter::render(
                &self.axiom,
                &self.actions,
                || Turtle2D::new(&config),
                sampler,
            )?),
            Dimensions::Three => Drawing::Spatial(interpreter::render(
                &self.axiom,
                &self.actions,
                || Turtle3D::new(&config),
                sampler,
            )?),
        };
        debug!(dims = ?self.dims, segments = drawing.len(), "rendered");
        Ok(drawing)
    }

    /// Renders with a fresh sampler seeded from `seed`.
    pub fn render_seeded(&self, seed: u64) -> Result<Drawing> {
        self.render(&mut Sampler::seeded(seed))
    }
}
