//! Swing door controller component.
//!
//! [`SwingDoor`] owns the logical open/closed state of one door and the
//! playback of its swing animation. It is a small state machine:
//!
//! - **Closed** – `is_open == false`, ready, playback position `0.0`
//! - **Animating** – not ready, position moving toward `0.0` or `1.0`
//! - **Open** – `is_open == true`, ready, playback position `1.0`
//!
//! [`SwingDoor::toggle`] starts a run only while the door is ready; toggles
//! that arrive mid-animation are dropped, never queued. [`SwingDoor::tick`]
//! advances playback by `delta / duration`, samples the curve and reports
//! completion once the run hits its bound.
//!
//! The door does not touch any transform itself. The
//! [`swing_door_system`](crate::systems::door::swing_door_system) copies
//! [`SwingDoor::rotation_offset`] into the leaf's
//! [`Rotation`](super::rotation::Rotation) yaw every frame.

use bevy_ecs::prelude::Component;
use thiserror::Error;

use crate::components::doorcurve::DoorCurve;

/// Default swing duration in seconds.
pub const DEFAULT_DOOR_DURATION: f32 = 1.0;
/// Default multiplier applied to curve samples. Negative swings the leaf
/// toward negative yaw.
pub const DEFAULT_SWING_SIGN: f32 = -1.0;

/// Errors raised while building a door.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DoorError {
    #[error("config error: missing animation curve")]
    MissingCurve,
    #[error("config error: unknown animation curve '{0}'")]
    UnknownCurve(String),
    #[error("config error: animation curve has no keys")]
    EmptyCurve,
    #[error("config error: invalid animation duration {0}")]
    InvalidDuration(f32),
}

/// Playback direction of the current (or last) run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Closed toward open (position grows to `1.0`).
    #[default]
    Forward,
    /// Open toward closed (position shrinks to `0.0`).
    Reverse,
}

/// Logical state derived from the controller fields.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Animating,
    Open,
}

/// Result of a [`SwingDoor::toggle`] request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// A new run started in the given direction.
    Started(Direction),
    /// The door was mid-animation; nothing changed.
    Ignored,
}

/// Completion reported by [`SwingDoor::tick`] when a run reaches its bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DoorTransition {
    Opened,
    Closed,
}

/// Construction parameters for a [`SwingDoor`].
///
/// The curve is required; [`SwingDoor::new`] rejects a config without one
/// instead of building a door that never moves.
#[derive(Clone, Debug)]
pub struct DoorConfig {
    pub curve: Option<DoorCurve>,
    /// Seconds a full swing takes.
    pub duration: f32,
    /// Multiplier applied to every curve sample.
    pub swing_sign: f32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        DoorConfig {
            curve: None,
            duration: DEFAULT_DOOR_DURATION,
            swing_sign: DEFAULT_SWING_SIGN,
        }
    }
}

impl DoorConfig {
    pub fn new(curve: DoorCurve) -> Self {
        DoorConfig {
            curve: Some(curve),
            ..Default::default()
        }
    }
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }
    pub fn with_swing_sign(mut self, swing_sign: f32) -> Self {
        self.swing_sign = swing_sign;
        self
    }
}

/// Open/close controller for one door.
#[derive(Component, Clone, Debug)]
pub struct SwingDoor {
    is_open: bool,
    is_ready: bool,
    direction: Direction,
    playback_position: f32,
    rotation_offset: f32,
    swing_sign: f32,
    duration: f32,
    curve: DoorCurve,
}

impl SwingDoor {
    /// Build a closed, ready door from `config`.
    pub fn new(config: DoorConfig) -> Result<Self, DoorError> {
        let curve = config.curve.ok_or(DoorError::MissingCurve)?;
        if !config.duration.is_finite() || config.duration <= 0.0 {
            return Err(DoorError::InvalidDuration(config.duration));
        }
        let swing_sign = if config.swing_sign.is_finite() {
            config.swing_sign
        } else {
            DEFAULT_SWING_SIGN
        };
        let rotation_offset = swing_sign * curve.sample(0.0);
        Ok(SwingDoor {
            is_open: false,
            is_ready: true,
            direction: Direction::Forward,
            playback_position: 0.0,
            rotation_offset,
            swing_sign,
            duration: config.duration,
            curve,
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
    pub fn is_ready(&self) -> bool {
        self.is_ready
    }
    pub fn direction(&self) -> Direction {
        self.direction
    }
    pub fn playback_position(&self) -> f32 {
        self.playback_position
    }
    /// Last sampled yaw offset in degrees.
    pub fn rotation_offset(&self) -> f32 {
        self.rotation_offset
    }

    pub fn state(&self) -> DoorState {
        match (self.is_ready, self.is_open) {
            (false, _) => DoorState::Animating,
            (true, true) => DoorState::Open,
            (true, false) => DoorState::Closed,
        }
    }

    /// Seconds left until the current run completes; `0.0` when ready.
    pub fn remaining(&self) -> f32 {
        if self.is_ready {
            return 0.0;
        }
        match self.direction {
            Direction::Forward => (1.0 - self.playback_position) * self.duration,
            Direction::Reverse => self.playback_position * self.duration,
        }
    }

    /// Flip the logical state and start the matching run.
    ///
    /// Opening always plays from the start of the curve. Closing plays
    /// backward from wherever the playback position currently is.
    pub fn toggle(&mut self) -> ToggleOutcome {
        if !self.is_ready {
            return ToggleOutcome::Ignored;
        }
        self.is_open = !self.is_open;
        self.is_ready = false;
        if self.is_open {
            self.direction = Direction::Forward;
            self.playback_position = 0.0;
        } else {
            self.direction = Direction::Reverse;
        }
        self.sample();
        ToggleOutcome::Started(self.direction)
    }

    /// Advance the running animation by `delta` seconds.
    ///
    /// Negative or non-finite deltas count as zero. Returns the completed
    /// transition on the tick that reaches the end of the run.
    pub fn tick(&mut self, delta: f32) -> Option<DoorTransition> {
        if self.is_ready {
            return None;
        }
        let dt = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let step = dt / self.duration;
        let finished = match self.direction {
            Direction::Forward => {
                self.playback_position = (self.playback_position + step).min(1.0);
                self.playback_position >= 1.0
            }
            Direction::Reverse => {
                self.playback_position = (self.playback_position - step).max(0.0);
                self.playback_position <= 0.0
            }
        };
        if !finished {
            self.sample();
            return None;
        }
        self.playback_position = match self.direction {
            Direction::Forward => 1.0,
            Direction::Reverse => 0.0,
        };
        self.sample();
        self.is_ready = true;
        Some(if self.is_open {
            DoorTransition::Opened
        } else {
            DoorTransition::Closed
        })
    }

    fn sample(&mut self) {
        self.rotation_offset = self.swing_sign * self.curve.sample(self.playback_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::doorcurve::Easing;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn door(duration: f32) -> SwingDoor {
        SwingDoor::new(DoorConfig::new(DoorCurve::linear(0.0, 90.0)).with_duration(duration))
            .unwrap()
    }

    // ==================== CONSTRUCTION TESTS ====================

    #[test]
    fn test_new_door_is_closed_and_ready() {
        let d = door(1.0);
        assert!(!d.is_open());
        assert!(d.is_ready());
        assert!(approx_eq(d.playback_position(), 0.0));
        assert!(approx_eq(d.rotation_offset(), 0.0));
        assert_eq!(d.state(), DoorState::Closed);
    }

    #[test]
    fn test_missing_curve_is_a_config_error() {
        let err = SwingDoor::new(DoorConfig::default()).unwrap_err();
        assert_eq!(err, DoorError::MissingCurve);
        assert_eq!(err.to_string(), "config error: missing animation curve");
    }

    #[test]
    fn test_invalid_duration_is_rejected() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let r = SwingDoor::new(DoorConfig::new(DoorCurve::linear(0.0, 1.0)).with_duration(bad));
            assert!(matches!(r, Err(DoorError::InvalidDuration(_))));
        }
    }

    #[test]
    fn test_initial_offset_uses_curve_start() {
        let d = SwingDoor::new(
            DoorConfig::new(DoorCurve::linear(5.0, 90.0)).with_swing_sign(-1.0),
        )
        .unwrap();
        assert!(approx_eq(d.rotation_offset(), -5.0));
    }

    // ==================== TOGGLE TESTS ====================

    #[test]
    fn test_toggle_from_closed_starts_forward_run() {
        let mut d = door(1.0);
        assert_eq!(d.toggle(), ToggleOutcome::Started(Direction::Forward));
        assert!(d.is_open());
        assert!(!d.is_ready());
        assert_eq!(d.direction(), Direction::Forward);
        assert_eq!(d.state(), DoorState::Animating);
    }

    #[test]
    fn test_toggle_while_animating_is_ignored() {
        let mut d = door(2.0);
        d.toggle();
        d.tick(1.0);
        let before = (d.is_open(), d.direction(), d.remaining(), d.playback_position());

        assert_eq!(d.toggle(), ToggleOutcome::Ignored);
        assert_eq!(d.toggle(), ToggleOutcome::Ignored);

        let after = (d.is_open(), d.direction(), d.remaining(), d.playback_position());
        assert_eq!(before, after);
        assert!(!d.is_ready());
    }

    #[test]
    fn test_toggle_from_open_reverses_from_end() {
        let mut d = door(1.0);
        d.toggle();
        d.tick(1.0);
        assert_eq!(d.toggle(), ToggleOutcome::Started(Direction::Reverse));
        assert!(!d.is_open());
        assert!(approx_eq(d.playback_position(), 1.0));
        assert!(approx_eq(d.remaining(), 1.0));
    }

    // ==================== TICK TESTS ====================

    #[test]
    fn test_full_duration_tick_opens_door() {
        let mut d = door(1.5);
        d.toggle();
        assert_eq!(d.tick(1.5), Some(DoorTransition::Opened));
        assert_eq!(d.state(), DoorState::Open);
        assert!(d.is_ready());
        assert_eq!(d.playback_position(), 1.0);
        assert!(approx_eq(d.rotation_offset(), -90.0));
    }

    #[test]
    fn test_half_tick_then_toggle_keeps_animating_forward() {
        let mut d = door(1.0);
        d.toggle();
        assert_eq!(d.tick(0.5), None);
        d.toggle();
        assert!(d.is_open());
        assert!(!d.is_ready());
        assert_eq!(d.direction(), Direction::Forward);
        assert!(approx_eq(d.playback_position(), 0.5));
        assert!(approx_eq(d.rotation_offset(), -45.0));
    }

    #[test]
    fn test_overshoot_settles_exactly_on_bound() {
        let mut d = door(1.0);
        d.toggle();
        assert_eq!(d.tick(10.0), Some(DoorTransition::Opened));
        assert_eq!(d.playback_position(), 1.0);
        d.toggle();
        assert_eq!(d.tick(0.3), None);
        assert_eq!(d.tick(10.0), Some(DoorTransition::Closed));
        assert_eq!(d.playback_position(), 0.0);
        assert!(approx_eq(d.rotation_offset(), 0.0));
    }

    #[test]
    fn test_tick_when_ready_does_nothing() {
        let mut d = door(1.0);
        assert_eq!(d.tick(1.0), None);
        assert!(approx_eq(d.playback_position(), 0.0));
        assert!(d.is_ready());
    }

    #[test]
    fn test_negative_and_nan_delta_do_not_move() {
        let mut d = door(1.0);
        d.toggle();
        d.tick(0.25);
        d.tick(-5.0);
        d.tick(f32::NAN);
        assert!(approx_eq(d.playback_position(), 0.25));
        assert!(!d.is_ready());
    }

    #[test]
    fn test_zero_delta_after_toggle_does_not_complete() {
        let mut d = door(1.0);
        d.toggle();
        assert_eq!(d.tick(0.0), None);
        assert!(!d.is_ready());
    }

    #[test]
    fn test_completion_is_reported_once() {
        let mut d = door(1.0);
        d.toggle();
        assert_eq!(d.tick(1.0), Some(DoorTransition::Opened));
        assert_eq!(d.tick(1.0), None);
    }

    // ==================== PROPERTY TESTS ====================

    #[test]
    fn test_ready_toggles_strictly_alternate() {
        let mut d = door(0.5);
        let mut expected_open = false;
        for _ in 0..10 {
            assert_eq!(d.is_open(), expected_open);
            d.toggle();
            expected_open = !expected_open;
            let mut guard = 0;
            while !d.is_ready() {
                d.tick(1.0 / 60.0);
                guard += 1;
                assert!(guard < 1000, "run never completed");
            }
            assert_eq!(d.is_open(), expected_open);
            let expected_pos = if expected_open { 1.0 } else { 0.0 };
            assert_eq!(d.playback_position(), expected_pos);
        }
    }

    #[test]
    fn test_rotation_offset_is_continuous_while_ticking() {
        let mut d = SwingDoor::new(
            DoorConfig::new(DoorCurve::swing(90.0, Easing::CubicInOut)).with_duration(1.0),
        )
        .unwrap();
        d.toggle();
        let dt = 1.0 / 120.0;
        // Steepest slope of CubicInOut is 3x linear: 90 * 3 * dt per step.
        let max_step = 90.0 * 3.0 * dt + EPSILON;
        let mut last = d.rotation_offset();
        while !d.is_ready() {
            d.tick(dt);
            let now = d.rotation_offset();
            assert!((now - last).abs() <= max_step, "jump {} -> {}", last, now);
            last = now;
        }
    }

    #[test]
    fn test_remaining_time_counts_down() {
        let mut d = door(2.0);
        assert!(approx_eq(d.remaining(), 0.0));
        d.toggle();
        assert!(approx_eq(d.remaining(), 2.0));
        d.tick(0.5);
        assert!(approx_eq(d.remaining(), 1.5));
    }
}
