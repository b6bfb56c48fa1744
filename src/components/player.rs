//! Player character components.
//!
//! - [`Player`] – marker for the controlled character
//! - [`ControlRotation`] – camera/controller view angles driven by look input
//! - [`CharacterMovement`] – walk speed, sprint and look-rate settings
//! - [`FocusedDoor`] – the door currently under the player's view, if any

use bevy_ecs::prelude::{Component, Entity};

use crate::components::rotation::Rotation;

pub const DEFAULT_WALK_SPEED: f32 = 200.0;
pub const DEFAULT_SPRINT_MULTIPLIER: f32 = 5.0;
pub const DEFAULT_TURN_RATE: f32 = 45.0;
pub const DEFAULT_LOOK_UP_RATE: f32 = 45.0;
pub const DEFAULT_REACH: f32 = 200.0;
pub const DEFAULT_EYE_HEIGHT: f32 = 64.0;
/// Pitch limit in degrees, both up and down.
pub const MAX_PITCH: f32 = 89.0;

/// Tag component for the controlled character.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

/// View angles of the player controller, in degrees.
///
/// The actor's yaw follows `yaw`; pitch only affects the view (and the
/// interaction trace).
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlRotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl ControlRotation {
    pub fn as_rotation(&self) -> Rotation {
        Rotation::new(self.pitch, self.yaw, 0.0)
    }

    /// Add look input, clamping pitch and wrapping yaw into [0, 360).
    pub fn add_input(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() {
            self.set_yaw(self.yaw + yaw);
        }
        if pitch.is_finite() {
            self.set_pitch(self.pitch + pitch);
        }
    }

    /// Set the heading, wrapped into [0, 360). Non-finite values are ignored.
    pub fn set_yaw(&mut self, yaw: f32) {
        if yaw.is_finite() {
            self.yaw = wrap_yaw(yaw);
        }
    }

    /// Set the view pitch, clamped to [`MAX_PITCH`]. Non-finite values are ignored.
    pub fn set_pitch(&mut self, pitch: f32) {
        if pitch.is_finite() {
            self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        }
    }
}

fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Movement tuning for a character.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CharacterMovement {
    /// Walk speed in world units per second.
    pub max_walk_speed: f32,
    /// Factor applied to the walk speed while sprinting.
    pub sprint_multiplier: f32,
    /// Degrees per second at full turn-rate input.
    pub base_turn_rate: f32,
    /// Degrees per second at full look-up-rate input.
    pub base_look_up_rate: f32,
    /// Length of the interaction trace.
    pub reach: f32,
    /// Height of the view origin above the character position.
    pub eye_height: f32,
    sprinting: bool,
}

impl Default for CharacterMovement {
    fn default() -> Self {
        CharacterMovement {
            max_walk_speed: DEFAULT_WALK_SPEED,
            sprint_multiplier: DEFAULT_SPRINT_MULTIPLIER,
            base_turn_rate: DEFAULT_TURN_RATE,
            base_look_up_rate: DEFAULT_LOOK_UP_RATE,
            reach: DEFAULT_REACH,
            eye_height: DEFAULT_EYE_HEIGHT,
            sprinting: false,
        }
    }
}

impl CharacterMovement {
    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }
    /// Start sprinting. Repeated calls do not stack.
    pub fn start_sprint(&mut self) {
        self.sprinting = true;
    }
    pub fn stop_sprint(&mut self) {
        self.sprinting = false;
    }
    /// Current top speed, including the sprint multiplier.
    pub fn speed(&self) -> f32 {
        if self.sprinting {
            self.max_walk_speed * self.sprint_multiplier
        } else {
            self.max_walk_speed
        }
    }
}

/// Door entity the player is looking at, refreshed every frame.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusedDoor(pub Option<Entity>);
