//! Save and load requests for the player transform.
//!
//! [`SaveGameEvent`] stores the player's [`MapPosition`] and [`Rotation`] in
//! the slot configured on [`SaveSlots`]; [`LoadGameEvent`] reads it back and
//! moves the player. A missing slot or store failure is logged and leaves the
//! player where it is.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{error, info, warn};

use crate::components::mapposition::MapPosition;
use crate::components::player::{ControlRotation, Player};
use crate::components::rotation::Rotation;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::savegame::{SaveError, SaveRecord, SaveSlots};

#[derive(Event, Debug, Clone, Copy)]
pub struct SaveGameEvent {}

#[derive(Event, Debug, Clone, Copy)]
pub struct LoadGameEvent {}

/// Turn save/load button presses into [`SaveGameEvent`] / [`LoadGameEvent`].
pub fn save_load_input_observer(trigger: On<InputEvent>, mut commands: Commands) {
    let event = trigger.event();
    if !event.pressed {
        return;
    }
    match event.action {
        InputAction::Save => {
            commands.trigger(SaveGameEvent {});
        }
        InputAction::Load => {
            commands.trigger(LoadGameEvent {});
        }
        _ => {}
    }
}

pub fn save_game_observer(
    _trigger: On<SaveGameEvent>,
    slots: Option<ResMut<SaveSlots>>,
    players: Query<(&MapPosition, &Rotation), With<Player>>,
) {
    let Some(mut slots) = slots else {
        warn!("SaveGameEvent without a SaveSlots resource");
        return;
    };
    let Some((position, rotation)) = players.iter().next() else {
        warn!("SaveGameEvent without a player to save");
        return;
    };
    let record = SaveRecord {
        position: position.pos,
        rotation: *rotation,
    };
    match slots.save(&record) {
        Ok(()) => info!("Game saved to slot '{}'", slots.slot),
        Err(e) => error!("Failed to save slot '{}': {}", slots.slot, e),
    }
}

pub fn load_game_observer(
    _trigger: On<LoadGameEvent>,
    slots: Option<Res<SaveSlots>>,
    mut players: Query<
        (&mut MapPosition, &mut Rotation, Option<&mut ControlRotation>),
        With<Player>,
    >,
) {
    let Some(slots) = slots else {
        warn!("LoadGameEvent without a SaveSlots resource");
        return;
    };
    let record = match slots.load() {
        Ok(record) => record,
        Err(SaveError::NotFound(slot)) => {
            warn!("No saved game in slot '{}'", slot);
            return;
        }
        Err(e) => {
            error!("Failed to load slot '{}': {}", slots.slot, e);
            return;
        }
    };
    let Some((mut position, mut rotation, control)) = players.iter_mut().next() else {
        warn!("LoadGameEvent without a player to move");
        return;
    };
    position.pos = record.position;
    *rotation = record.rotation;
    // The look system drives the actor yaw from the control rotation; the
    // view pitch is not part of the record.
    if let Some(mut control) = control {
        control.set_yaw(record.rotation.yaw);
    }
    info!("Game loaded from slot '{}'", slots.slot);
}
