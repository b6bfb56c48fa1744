//! Interaction volume for entities the player can use by looking at them.
//!
//! The volume is a sphere centred `height` units above the entity's
//! [`MapPosition`](super::mapposition::MapPosition). The
//! [`door_focus_system`](crate::systems::interaction::door_focus_system)
//! traces the player's view against it.

use bevy_ecs::prelude::Component;

use crate::components::mapposition::Vec3;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Interactable {
    /// Sphere radius in world units.
    pub radius: f32,
    /// Height of the sphere centre above the entity position.
    pub height: f32,
}

impl Interactable {
    pub fn new(radius: f32, height: f32) -> Self {
        Interactable { radius, height }
    }

    /// World-space centre of the volume for an entity at `pos`.
    pub fn center(&self, pos: Vec3) -> Vec3 {
        pos + Vec3::UP * self.height
    }

    /// Distance along `dir` (unit vector) from `origin` to the volume, if it
    /// is hit within `max_distance`. An origin inside the sphere hits at 0.
    pub fn trace(&self, pos: Vec3, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<f32> {
        let m = origin - self.center(pos);
        let b = m.dot(dir);
        let c = m.length_sq() - self.radius * self.radius;
        if c > 0.0 && b > 0.0 {
            return None;
        }
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let t = (-b - disc.sqrt()).max(0.0);
        if t > max_distance { None } else { Some(t) }
    }
}
