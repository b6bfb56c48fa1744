//! Per-frame player input resource.
//!
//! [`InputState`] holds the axis values and action buttons the character
//! controller reads. It is filled once per frame by
//! [`update_input_state`](crate::systems::input::update_input_state) from an
//! [`InputFrame`](super::inputscript::InputFrame).
use bevy_ecs::prelude::*;

use crate::events::input::InputAction;
use crate::resources::inputscript::InputFrame;

/// Button state with edge flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionState {
    /// Whether the button is held this frame.
    pub active: bool,
    /// Whether the button went down this frame.
    pub just_pressed: bool,
    /// Whether the button went up this frame.
    pub just_released: bool,
}

impl ActionState {
    /// Feed the raw held state for this frame and recompute the edges.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
///
/// Movement axes are in [-1, 1]. `turn` and `look_up` are absolute degree
/// deltas (mouse style); `turn_rate` and `look_up_rate` are rates in [-1, 1]
/// scaled by the character's base rates (stick style).
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub move_forward: f32,
    pub move_right: f32,
    pub turn: f32,
    pub turn_rate: f32,
    pub look_up: f32,
    pub look_up_rate: f32,
    pub sprint: ActionState,
    pub save: ActionState,
    pub load: ActionState,
    pub action: ActionState,
}

impl InputState {
    /// Copy a frame of raw input into the state, updating button edges.
    pub fn apply(&mut self, frame: &InputFrame) {
        self.move_forward = clamp_axis(frame.move_forward);
        self.move_right = clamp_axis(frame.move_right);
        self.turn = finite_or_zero(frame.turn);
        self.turn_rate = clamp_axis(frame.turn_rate);
        self.look_up = finite_or_zero(frame.look_up);
        self.look_up_rate = clamp_axis(frame.look_up_rate);
        self.sprint.update(frame.sprint);
        self.save.update(frame.save);
        self.load.update(frame.load);
        self.action.update(frame.action);
    }

    /// All action buttons paired with their action id.
    pub fn actions(&self) -> [(InputAction, ActionState); 4] {
        [
            (InputAction::Sprint, self.sprint),
            (InputAction::Save, self.save),
            (InputAction::Load, self.load),
            (InputAction::Action, self.action),
        ]
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

fn clamp_axis(v: f32) -> f32 {
    finite_or_zero(v).clamp(-1.0, 1.0)
}
