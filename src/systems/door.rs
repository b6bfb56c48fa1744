//! Door animation system.
//!
//! Each frame [`swing_door_system`] advances every animating [`SwingDoor`] by
//! the [`WorldTime`] delta and writes the sampled offset into the leaf's
//! [`Rotation`] yaw. Doors that finish this frame emit a
//! [`DoorFinishedEvent`].
use bevy_ecs::prelude::*;

use crate::components::door::SwingDoor;
use crate::components::rotation::Rotation;
use crate::events::door::DoorFinishedEvent;
use crate::resources::worldtime::WorldTime;

pub fn swing_door_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut SwingDoor, &mut Rotation)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut door, mut rotation) in query.iter_mut() {
        if door.is_ready() {
            continue;
        }
        let finished = door.tick(dt);
        rotation.yaw = door.rotation_offset();
        if let Some(transition) = finished {
            commands.trigger(DoorFinishedEvent { entity, transition });
        }
    }
}
