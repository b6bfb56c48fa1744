//! Scene setup and frame wiring.
//!
//! The host (see `main.rs`, or the integration tests) drives the game like
//! this:
//!
//! 1. [`insert_resources`] with a loaded [`GameConfig`]
//! 2. [`register_observers`]
//! 3. [`setup`] to spawn the player and the doors
//! 4. [`build_update_schedule`] once, then [`run_frame`] per frame with the
//!    frame delta

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::components::door::{DoorConfig, DoorError, SwingDoor};
use crate::components::interactable::Interactable;
use crate::components::mapposition::{MapPosition, Vec3};
use crate::components::player::{CharacterMovement, ControlRotation, FocusedDoor, Player};
use crate::components::rotation::Rotation;
use crate::events::door::{door_finished_observer, door_toggle_observer};
use crate::events::savegame::{load_game_observer, save_game_observer, save_load_input_observer};
use crate::resources::curvestore::CurveStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::savegame::{FileSaveStore, SaveSlots};
use crate::resources::worldtime::WorldTime;
use crate::systems::door::swing_door_system;
use crate::systems::input::update_input_state;
use crate::systems::interaction::{door_focus_system, player_action_observer};
use crate::systems::movement::{player_look_system, player_movement_system, sprint_observer};
use crate::systems::time::update_world_time;

/// Insert the resources every frame needs, derived from `config`.
///
/// Saves go to a [`FileSaveStore`] in `config.save_dir`. Tests can replace
/// the [`SaveSlots`] resource afterwards.
pub fn insert_resources(world: &mut World, config: GameConfig) {
    let mut curves = CurveStore::with_defaults();
    if let Some(path) = &config.curves_file {
        if let Err(e) = curves.load_from_file(path) {
            error!("{}", e);
        }
    }
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(curves);
    world.insert_resource(SaveSlots::new(
        FileSaveStore::new(&config.save_dir),
        config.save_slot.clone(),
    ));
    world.insert_resource(config);
}

pub fn register_observers(world: &mut World) {
    world.add_observer(door_toggle_observer);
    world.add_observer(door_finished_observer);
    world.add_observer(sprint_observer);
    world.add_observer(player_action_observer);
    world.add_observer(save_load_input_observer);
    world.add_observer(save_game_observer);
    world.add_observer(load_game_observer);
    world.flush();
}

/// Spawn the player character at `position`, tuned from [`GameConfig`].
pub fn spawn_player(world: &mut World, position: Vec3) -> Entity {
    let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();
    let mut movement = CharacterMovement::default();
    movement.max_walk_speed = config.walk_speed;
    movement.sprint_multiplier = config.sprint_multiplier;
    movement.base_turn_rate = config.turn_rate;
    movement.base_look_up_rate = config.look_up_rate;
    movement.reach = config.reach;
    movement.eye_height = config.eye_height;
    world
        .spawn((
            Player,
            MapPosition { pos: position },
            Rotation::default(),
            ControlRotation::default(),
            movement,
            FocusedDoor::default(),
        ))
        .id()
}

/// Spawn a closed door at `position` using the configured curve.
///
/// Fails if the curve cannot be resolved or the door config is invalid; no
/// entity is spawned in that case.
pub fn spawn_door(world: &mut World, position: Vec3) -> Result<Entity, DoorError> {
    let config = world.get_resource::<GameConfig>().cloned().unwrap_or_default();
    let curve = match world.get_resource::<CurveStore>() {
        Some(store) => store.resolve(&config.door_curve)?,
        None => return Err(DoorError::MissingCurve),
    };
    let door = SwingDoor::new(
        DoorConfig::new(curve)
            .with_duration(config.door_duration)
            .with_swing_sign(config.door_swing_sign),
    )?;
    let leaf = Rotation::from_yaw(door.rotation_offset());
    let entity = world
        .spawn((
            door,
            MapPosition { pos: position },
            leaf,
            Interactable::new(config.door_radius, config.door_center_height),
        ))
        .id();
    info!("Spawned door {:?} at {:?}", entity, position);
    Ok(entity)
}

/// Spawn the player at the origin and one door per configured position.
pub fn setup(world: &mut World) -> Result<(), DoorError> {
    let positions = world
        .get_resource::<GameConfig>()
        .map(|c| c.door_positions.clone())
        .unwrap_or_default();
    let player = spawn_player(world, Vec3::ZERO);
    info!("Spawned player {:?}", player);
    for position in positions {
        spawn_door(world, position)?;
    }
    world.flush();
    Ok(())
}

/// Per-frame schedule: focus, input, look, move, then doors.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            door_focus_system,
            update_input_state,
            player_look_system,
            player_movement_system,
            swing_door_system,
        )
            .chain(),
    );
    update
}

/// Advance the clock by `dt` and run one frame.
pub fn run_frame(world: &mut World, update: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    update.run(world);
    world.clear_trackers(); // Clear changed components for next frame
}
