//! Turtle state and motion primitives for 2D and 3D interpretation.

use crate::action::Action;
use crate::drawing::Segment;
use crate::error::{LsysError, Result};
use crate::lsystem::Dimensions;
use crate::math::{RotationSense, rotation_2d, rotation_3d};
use crate::sampler::Sampler;
use glam::{DVec2, DVec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// How `spin` derives the new up vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinConvention {
    /// Rotate the current up vector about the heading.
    #[default]
    Corrected,
    /// Rotate the heading about the current up vector and take the result as
    /// the new up. Kept for presets tuned against that behaviour.
    Legacy,
}

/// Settings shared by every turtle a render creates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Direction a positive turn/spin angle rotates.
    #[serde(default)]
    pub sense: RotationSense,
    /// Up-vector update rule for 3D spins.
    #[serde(default)]
    pub spin: SpinConvention,
}

/// Planar turtle state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState2D {
    pub position: DVec2,
    /// Unit vector the turtle walks along.
    pub heading: DVec2,
}

impl Default for TurtleState2D {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: DVec2::X,
        }
    }
}

/// Spatial turtle state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState3D {
    pub position: DVec3,
    /// Unit vector the turtle walks along.
    pub heading: DVec3,
    /// Unit axis that turns rotate about.
    pub up: DVec3,
}

impl Default for TurtleState3D {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            heading: DVec3::X,
            up: DVec3::Z,
        }
    }
}

/// Motion primitives common to both dimensionalities.
///
/// Every primitive takes its nominal value and deviation and resolves the
/// actual value through the sampler.
pub trait Turtle {
    type Point: Copy;
    type State: Clone;

    /// Advances along the heading without recording a segment.
    fn move_by<R: RngCore>(&mut self, distance: f64, std_dev: f64, sampler: &mut Sampler<R>);

    /// Rotates the heading.
    fn turn<R: RngCore>(&mut self, angle: f64, std_dev: f64, sampler: &mut Sampler<R>);

    fn position(&self) -> Self::Point;

    /// Deep copy of the live state.
    fn snapshot(&self) -> Self::State;

    /// Replaces the live state.
    fn restore(&mut self, state: Self::State);

    fn segments(&self) -> &[Segment<Self::Point>];

    fn into_segments(self) -> Vec<Segment<Self::Point>>;

    /// Output buffer that [`draw`](Self::draw) appends to.
    fn segments_mut(&mut self) -> &mut Vec<Segment<Self::Point>>;

    /// Records the segment swept by the move.
    fn draw<R: RngCore>(&mut self, distance: f64, std_dev: f64, sampler: &mut Sampler<R>) {
        let p0 = self.position();
        self.move_by(distance, std_dev, sampler);
        let p1 = self.position();
        self.segments_mut().push(Segment::new(p0, p1));
    }

    /// Performs a motion action bound to `symbol`.
    ///
    /// `Push` and `Pop` belong to the interpreter's stack and are no-ops here.
    fn apply<R: RngCore>(
        &mut self,
        symbol: char,
        action: &Action,
        sampler: &mut Sampler<R>,
    ) -> Result<()>;
}

/// Turtle walking in the plane.
#[derive(Clone, Debug, Default)]
pub struct Turtle2D {
    state: TurtleState2D,
    sense: RotationSense,
    segments: Vec<Segment<DVec2>>,
}

impl Turtle2D {
    /// Turtle at the origin heading along +X.
    pub fn new(config: &TurtleConfig) -> Self {
        Self::with_state(TurtleState2D::default(), config)
    }

    pub fn with_state(state: TurtleState2D, config: &TurtleConfig) -> Self {
        Self {
            state,
            sense: config.sense,
            segments: Vec::new(),
        }
    }

    pub fn state(&self) -> &TurtleState2D {
        &self.state
    }
}

impl Turtle for Turtle2D {
    type Point = DVec2;
    type State = TurtleState2D;

    fn move_by<R: RngCore>(&mut self, distance: f64, std_dev: f64, sampler: &mut Sampler<R>) {
        let d = sampler.sample(distance, std_dev);
        self.state.position += self.state.heading * d;
    }

    fn turn<R: RngCore>(&mut self, angle: f64, std_dev: f64, sampler: &mut Sampler<R>) {
        let a = self.sense.apply(sampler.sample(angle, std_dev));
        self.state.heading = rotation_2d(a) * self.state.heading;
    }

    fn position(&self) -> DVec2 {
        self.state.position
    }

    fn snapshot(&self) -> TurtleState2D {
        self.state
    }

    fn restore(&mut self, state: TurtleState2D) {
        self.state = state;
    }

    fn segments(&self) -> &[Segment<DVec2>] {
        &self.segments
    }

    fn into_segments(self) -> Vec<Segment<DVec2>> {
        self.segments
    }

    fn segments_mut(&mut self) -> &mut Vec<Segment<DVec2>> {
        &mut self.segments
    }

    fn apply<R: RngCore>(
        &mut self,
        symbol: char,
        action: &Action,
        sampler: &mut Sampler<R>,
    ) -> Result<()> {
        match *action {
            Action::Draw { distance, std_dev } => self.draw(distance, std_dev, sampler),
            Action::Move { distance, std_dev } => self.move_by(distance, std_dev, sampler),
            Action::Turn { angle, std_dev } => self.turn(angle, std_dev, sampler),
            Action::Spin { .. } => {
                return Err(LsysError::InvalidDimensionForAction {
                    symbol,
                    dims: Dimensions::Two,
                });
            }
            Action::Push | Action::Pop => {}
        }
        Ok(())
    }
}

/// Turtle walking in space, carrying an up vector as its turning axis.
#[derive(Clone, Debug, Default)]
pub struct Turtle3D {
    state: TurtleState3D,
    sense: RotationSense,
    spin: SpinConvention,
    segments: Vec<Segment<DVec3>>,
}

impl Turtle3D {
    /// Turtle at the origin heading along +X with +Z up.
    pub fn new(config: &TurtleConfig) -> Self {
        Self::with_state(TurtleState3D::default(), config)
    }

    pub fn with_state(state: TurtleState3D, config: &TurtleConfig) -> Self {
        Self {
            state,
            sense: config.sense,
            spin: config.spin,
            segments: Vec::new(),
        }
    }

    pub fn state(&self) -> &TurtleState3D {
        &self.state
    }

    /// Re-orients the up vector according to the configured [`SpinConvention`].
    pub fn spin<R: RngCore>(&mut self, angle: f64, std_dev: f64, sampler: &mut Sampler<R>) {
        let a = self.sense.apply(sampler.sample(angle, std_dev));
        let TurtleState3D { heading, up, .. } = self.state;
        self.state.up = match self.spin {
            SpinConvention::Corrected => rotation_3d(a, heading) * up,
            SpinConvention::Legacy => rotation_3d(a, up) * heading,
        };
    }
}

impl Turtle for Turtle3D {
    type Point = DVec3;
    type State = TurtleState3D;

    fn move_by<R: RngCore>(&mut self, distance: f64, std_dev: f64, sampler: &mut Sampler<R>) {
        let d = sampler.sample(distance, std_dev);
        self.state.position += self.state.heading * d;
    }

    fn turn<R: RngCore>(&mut self, angle: f64, std_dev: f64, sampler: &mut Sampler<R>) {
        let a = self.sense.apply(sampler.sample(angle, std_dev));
        self.state.heading = rotation_3d(a, self.state.up) * self.state.heading;
    }

    fn position(&self) -> DVec3 {
        self.state.position
    }

    fn snapshot(&self) -> TurtleState3D {
        self.state
    }

    fn restore(&mut self, state: TurtleState3D) {
        self.state = state;
    }

    fn segments(&self) -> &[Segment<DVec3>] {
        &self.segments
    }

    fn into_segments(self) -> Vec<Segment<DVec3>> {
        self.segments
    }

    fn segments_mut(&mut self) -> &mut Vec<Segment<DVec3>> {
        &mut self.segments
    }

    fn apply<R: RngCore>(
        &mut self,
        _symbol: char,
        action: &Action,
        sampler: &mut Sampler<R>,
    ) -> Result<()> {
        match *action {
            Action::Draw { distance, std_dev } => self.draw(distance, std_dev, sampler),
            Action::Move { distance, std_dev } => self.move_by(distance, std_dev, sampler),
            Action::Turn { angle, std_dev } => self.turn(angle, std_dev, sampler),
            Action::Spin { angle, std_dev } => self.spin(angle, std_dev, sampler),
            Action::Push | Action::Pop => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn draw_records_start_and_end() {
        let mut s = Sampler::seeded(0);
        let mut t = Turtle2D::new(&TurtleConfig::default());
        t.draw(2.0, 0.0, &mut s);
        assert_eq!(
            t.segments(),
            &[Segment::new(DVec2::ZERO, DVec2::new(2.0, 0.0))]
        );
    }

    #[test]
    fn spatial_draw_follows_turned_heading() {
        let mut s = Sampler::seeded(0);
        let mut t = Turtle3D::new(&TurtleConfig::default());
        t.draw(1.0, 0.0, &mut s);
        t.turn(90.0, 0.0, &mut s);
        t.draw(2.0, 0.0, &mut s);
        let segs = t.segments();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0], Segment::new(DVec3::ZERO, DVec3::X));
        assert_eq!(segs[1].start, DVec3::X);
        assert!(segs[1].end.abs_diff_eq(DVec3::new(1.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn move_leaves_no_segment() {
        let mut s = Sampler::seeded(0);
        let mut t = Turtle2D::new(&TurtleConfig::default());
        t.move_by(3.0, 0.0, &mut s);
        assert!(t.segments().is_empty());
        assert_eq!(t.position(), DVec2::new(3.0, 0.0));
    }

    #[test]
    fn turn_3d_rotates_about_up_not_world_axis() {
        let mut s = Sampler::seeded(0);
        let state = TurtleState3D {
            position: DVec3::ZERO,
            heading: DVec3::X,
            up: DVec3::Y,
        };
        let mut t = Turtle3D::with_state(state, &TurtleConfig::default());
        t.turn(90.0, 0.0, &mut s);
        // X rotated +90° about +Y is -Z.
        assert!(t.state().heading.abs_diff_eq(-DVec3::Z, EPS));
        assert_eq!(t.state().up, DVec3::Y);
    }

    #[test]
    fn corrected_spin_rotates_up_about_heading() {
        let mut s = Sampler::seeded(0);
        let mut t = Turtle3D::new(&TurtleConfig::default());
        t.spin(90.0, 0.0, &mut s);
        // Z rotated +90° about +X is -Y.
        assert!(t.state().up.abs_diff_eq(-DVec3::Y, EPS));
        assert_eq!(t.state().heading, DVec3::X);
        assert!((t.state().up.dot(t.state().heading)).abs() < EPS);
    }

    #[test]
    fn legacy_spin_rotates_heading_about_up() {
        let mut s = Sampler::seeded(0);
        let config = TurtleConfig {
            spin: SpinConvention::Legacy,
            ..Default::default()
        };
        let mut t = Turtle3D::new(&config);

        // X rotated +72° about +Z.
        t.spin(72.0, 0.0, &mut s);
        let (sin, cos) = 72f64.to_radians().sin_cos();
        assert!(t.state().up.abs_diff_eq(DVec3::new(cos, sin, 0.0), EPS));
        assert_eq!(t.state().heading, DVec3::X);

        // The next spin rotates about the new up, not about +Z.
        t.spin(72.0, 0.0, &mut s);
        let expected = DVec3::new(0.375, 0.20307481014556644, -0.9045084971874736);
        assert!(t.state().up.abs_diff_eq(expected, 1e-12), "{:?}", t.state().up);
    }

    #[test]
    fn restore_replaces_state_but_keeps_segments() {
        let mut s = Sampler::seeded(0);
        let mut t = Turtle2D::new(&TurtleConfig::default());
        let saved = t.snapshot();
        t.turn(45.0, 0.0, &mut s);
        t.draw(1.0, 0.0, &mut s);
        t.restore(saved);
        assert_eq!(*t.state(), TurtleState2D::default());
        assert_eq!(t.segments().len(), 1);
    }

    #[test]
    fn planar_turtle_refuses_spin() {
        let mut s = Sampler::seeded(0);
        let mut t = Turtle2D::new(&TurtleConfig::default());
        let err = t.apply('<', &Action::spin(10.0), &mut s).unwrap_err();
        assert_eq!(
            err,
            LsysError::InvalidDimensionForAction {
                symbol: '<',
                dims: Dimensions::Two
            }
        );
    }

    #[test]
    fn long_turn_sequences_preserve_unit_vectors() {
        let mut s = Sampler::seeded(11);
        let mut t = Turtle3D::new(&TurtleConfig::default());
        for i in 0..10_000 {
            t.turn(13.7, 2.0, &mut s);
            if i % 3 == 0 {
                t.spin(41.0, 5.0, &mut s);
            }
        }
        assert!((t.state().heading.length() - 1.0).abs() < 1e-9);
        assert!((t.state().up.length() - 1.0).abs() < 1e-9);
    }
}
