//! Euler rotation component (degrees).
//!
//! Used both as the player actor rotation and as the local rotation of a
//! door leaf relative to its frame. Yaw turns around `z`, pitch tilts the
//! forward axis up and down, roll is carried but never driven.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::mapposition::Vec3;

#[derive(Component, Clone, Debug, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Rotation { pitch, yaw, roll }
    }

    /// Rotation with only a yaw component.
    pub fn from_yaw(yaw: f32) -> Self {
        Rotation {
            yaw,
            ..Default::default()
        }
    }

    /// Unit vector this rotation looks along.
    pub fn forward(&self) -> Vec3 {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(cp * cy, cp * sy, sp)
    }

    /// Unit vector to the right of the yaw heading, always horizontal.
    pub fn right(&self) -> Vec3 {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Vec3::new(-sy, cy, 0.0)
    }
}
