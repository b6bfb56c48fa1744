//! Keyframed animation curves for door swings.
//!
//! A [`DoorCurve`] maps a normalized playback position (0.0 to 1.0) to a
//! rotation offset in degrees. Keys are sorted by time; between two keys the
//! value is interpolated with the [`Easing`] of the segment's first key.
//! Outside the first/last key the curve holds the end values.
//!
//! Curves are immutable once built and are usually resolved by name from
//! [`CurveStore`](crate::resources::curvestore::CurveStore).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::components::door::DoorError;

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed (no easing).
    #[default]
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// One key of a [`DoorCurve`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    /// Normalized time of the key (0.0 to 1.0).
    pub time: f32,
    /// Curve value at `time`, in degrees.
    pub value: f32,
    /// Easing applied from this key to the next one.
    #[serde(default)]
    pub easing: Easing,
}

impl CurveKey {
    pub fn new(time: f32, value: f32) -> Self {
        CurveKey {
            time,
            value,
            easing: Easing::Linear,
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Deterministic function from playback position to rotation offset.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorCurve {
    keys: SmallVec<[CurveKey; 4]>,
}

impl DoorCurve {
    /// Build a curve from keys in any order.
    ///
    /// Fails with [`DoorError::EmptyCurve`] when no usable key is given.
    /// Keys with non-finite time or value are discarded.
    pub fn new(keys: impl IntoIterator<Item = CurveKey>) -> Result<Self, DoorError> {
        let mut keys: SmallVec<[CurveKey; 4]> = keys
            .into_iter()
            .filter(|k| k.time.is_finite() && k.value.is_finite())
            .collect();
        if keys.is_empty() {
            return Err(DoorError::EmptyCurve);
        }
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(DoorCurve { keys })
    }

    /// Straight ramp from `from` at 0.0 to `to` at 1.0.
    pub fn linear(from: f32, to: f32) -> Self {
        DoorCurve {
            keys: SmallVec::from_slice(&[CurveKey::new(0.0, from), CurveKey::new(1.0, to)]),
        }
    }

    /// Eased ramp from closed (0 degrees) to `angle`.
    pub fn swing(angle: f32, easing: Easing) -> Self {
        DoorCurve {
            keys: SmallVec::from_slice(&[
                CurveKey::new(0.0, 0.0).with_easing(easing),
                CurveKey::new(1.0, angle),
            ]),
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Sample the curve at normalized position `t` (clamped to [0.0, 1.0]).
    pub fn sample(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.time && t <= b.time {
                let span = b.time - a.time;
                if span <= f32::EPSILON {
                    return b.value;
                }
                let local = ease(a.easing, (t - a.time) / span);
                return a.value + (b.value - a.value) * local;
            }
        }
        last.value
    }
}
