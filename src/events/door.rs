//! Door toggle and completion events.
//!
//! - [`DoorToggleEvent`] asks a door to flip. The [`door_toggle_observer`]
//!   forwards it to [`SwingDoor::toggle`], which drops the request while the
//!   door is still animating.
//! - [`DoorFinishedEvent`] is triggered by
//!   [`swing_door_system`](crate::systems::door::swing_door_system) on the
//!   frame a swing completes. [`door_finished_observer`] only logs it; game
//!   code can add its own observers.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::door::{DoorTransition, SwingDoor, ToggleOutcome};

/// Request to open or close a door.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorToggleEvent {
    /// The door entity.
    pub entity: Entity,
}

/// Emitted once when a door finishes opening or closing.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorFinishedEvent {
    pub entity: Entity,
    pub transition: DoorTransition,
}

/// Apply a [`DoorToggleEvent`] to the target door.
pub fn door_toggle_observer(trigger: On<DoorToggleEvent>, mut doors: Query<&mut SwingDoor>) {
    let entity = trigger.event().entity;
    let Ok(mut door) = doors.get_mut(entity) else {
        warn!("DoorToggleEvent for {:?}, which is not a door", entity);
        return;
    };
    match door.toggle() {
        ToggleOutcome::Started(direction) => {
            info!("Door {:?} started swinging {:?}", entity, direction);
        }
        ToggleOutcome::Ignored => {
            debug!("Door {:?} busy, toggle ignored", entity);
        }
    }
}

pub fn door_finished_observer(trigger: On<DoorFinishedEvent>) {
    let event = trigger.event();
    info!("Door {:?} {:?}", event.entity, event.transition);
}
