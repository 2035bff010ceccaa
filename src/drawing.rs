//! Render output: segments in draw order, tagged by dimensionality.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A single drawn line, from the turtle's position before a draw to its
/// position after.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment<P> {
    pub start: P,
    pub end: P,
}

impl<P> Segment<P> {
    pub fn new(start: P, end: P) -> Self {
        Self { start, end }
    }
}

impl Segment<DVec2> {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

impl Segment<DVec3> {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Output of a render, tagged with the dimensionality that produced it.
///
/// Segments are stored in draw order. Renderers are free to reorder them;
/// nothing in this crate depends on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Drawing {
    Planar(Vec<Segment<DVec2>>),
    Spatial(Vec<Segment<DVec3>>),
}

impl Drawing {
    pub fn len(&self) -> usize {
        match self {
            Self::Planar(segs) => segs.len(),
            Self::Spatial(segs) => segs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all segment lengths.
    pub fn path_length(&self) -> f64 {
        match self {
            Self::Planar(segs) => segs.iter().map(|s| s.length()).sum(),
            Self::Spatial(segs) => segs.iter().map(|s| s.length()).sum(),
        }
    }

    pub fn as_planar(&self) -> Option<&[Segment<DVec2>]> {
        match self {
            Self::Planar(segs) => Some(segs),
            Self::Spatial(_) => None,
        }
    }

    pub fn as_spatial(&self) -> Option<&[Segment<DVec3>]> {
        match self {
            Self::Spatial(segs) => Some(segs),
            Self::Planar(_) => None,
        }
    }
}
