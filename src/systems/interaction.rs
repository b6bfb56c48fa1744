//! Door focus and the use action.
//!
//! [`door_focus_system`] traces from the player's eye along the controller
//! view direction, up to [`CharacterMovement::reach`], against every door's
//! [`Interactable`] sphere. The nearest hit becomes the player's
//! [`FocusedDoor`]; no hit clears it.
//!
//! [`player_action_observer`] triggers a [`DoorToggleEvent`] for the focused
//! door when the action button goes down.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::door::SwingDoor;
use crate::components::interactable::Interactable;
use crate::components::mapposition::{MapPosition, Vec3};
use crate::components::player::{CharacterMovement, ControlRotation, FocusedDoor, Player};
use crate::events::door::DoorToggleEvent;
use crate::events::input::{InputAction, InputEvent};

pub fn door_focus_system(
    doors: Query<(Entity, &MapPosition, &Interactable), With<SwingDoor>>,
    mut players: Query<
        (&MapPosition, &ControlRotation, &CharacterMovement, &mut FocusedDoor),
        With<Player>,
    >,
) {
    for (position, control, movement, mut focused) in players.iter_mut() {
        let origin = position.pos + Vec3::UP * movement.eye_height;
        let dir = control.as_rotation().forward();
        let nearest = doors
            .iter()
            .filter_map(|(entity, door_pos, volume)| {
                volume
                    .trace(door_pos.pos, origin, dir, movement.reach)
                    .map(|distance| (entity, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| entity);
        if focused.0 != nearest {
            debug!("Focused door changed: {:?} -> {:?}", focused.0, nearest);
            focused.0 = nearest;
        }
    }
}

pub fn player_action_observer(
    trigger: On<InputEvent>,
    players: Query<&FocusedDoor, With<Player>>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.action != InputAction::Action || !event.pressed {
        return;
    }
    for focused in players.iter() {
        if let Some(entity) = focused.0 {
            commands.trigger(DoorToggleEvent { entity });
        }
    }
}
