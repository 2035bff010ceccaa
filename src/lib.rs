//! # lsys-lines
//!
//! Expands L-System grammars by direct symbol substitution and walks the result
//! with a turtle, producing an ordered list of 2D or 3D line segments.
//!
//! The crate stops at geometry: it computes [`Segment`]s and hands them back as
//! a [`Drawing`]. Plotting, bounding boxes and file output belong to whoever
//! consumes the drawing. Randomness only enters through a [`Sampler`], so a
//! seeded sampler makes every render reproducible.

pub mod action;
pub mod drawing;
pub mod error;
pub mod grammar;
pub mod interpreter;
pub mod lsystem;
pub mod math;
pub mod sampler;
pub mod turtle;

pub use action::*;
pub use drawing::*;
pub use error::LsysError;
pub use grammar::{RuleTable, expand, expand_once};
pub use interpreter::{interpret, render};
pub use lsystem::*;
pub use math::*;
pub use sampler::*;
pub use turtle::*;
