//! Character look and movement.
//!
//! - [`player_look_system`] turns look input into [`ControlRotation`] changes
//!   and keeps the actor yaw in step with the controller.
//! - [`player_movement_system`] moves the player along the controller heading.
//!   Forward/right come from yaw only, so looking up or down never slows the
//!   character. Diagonal input is normalized.
//! - [`sprint_observer`] starts/stops sprinting on the sprint button.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::player::{CharacterMovement, ControlRotation, Player};
use crate::components::rotation::Rotation;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn player_look_system(
    world_time: Res<WorldTime>,
    input: Res<InputState>,
    mut query: Query<(&mut ControlRotation, &mut Rotation, &CharacterMovement), With<Player>>,
) {
    let dt = world_time.delta.max(0.0);
    for (mut control, mut rotation, movement) in query.iter_mut() {
        let yaw = input.turn + input.turn_rate * movement.base_turn_rate * dt;
        let pitch = input.look_up + input.look_up_rate * movement.base_look_up_rate * dt;
        if yaw != 0.0 || pitch != 0.0 {
            control.add_input(yaw, pitch);
        }
        if rotation.yaw != control.yaw {
            rotation.yaw = control.yaw;
        }
    }
}

pub fn player_movement_system(
    world_time: Res<WorldTime>,
    input: Res<InputState>,
    mut query: Query<(&mut MapPosition, &ControlRotation, &CharacterMovement), With<Player>>,
) {
    if input.move_forward == 0.0 && input.move_right == 0.0 {
        return;
    }
    let dt = world_time.delta.max(0.0);
    for (mut position, control, movement) in query.iter_mut() {
        let heading = Rotation::from_yaw(control.yaw);
        let mut dir = heading.forward() * input.move_forward + heading.right() * input.move_right;
        // Normalize diagonal movement
        if dir.length_sq() > 1.0 {
            dir = dir.normalized();
        }
        position.pos += dir * (movement.speed() * dt);
    }
}

pub fn sprint_observer(
    trigger: On<InputEvent>,
    mut query: Query<&mut CharacterMovement, With<Player>>,
) {
    let event = trigger.event();
    if event.action != InputAction::Sprint {
        return;
    }
    for mut movement in query.iter_mut() {
        if event.pressed {
            movement.start_sprint();
        } else {
            movement.stop_sprint();
        }
        debug!("Sprint {} (speed {})", event.pressed, movement.speed());
    }
}
