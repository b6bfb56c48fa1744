//! Input systems.
//!
//! - [`update_input_state`] pulls one frame from the
//!   [`InputScript`](crate::resources::inputscript::InputScript) (idle input if
//!   there is none) and writes it into
//!   [`InputState`](crate::resources::input::InputState).
//! - An [`InputEvent`] is emitted for every action button pressed or released
//!   this frame.
use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;
use crate::resources::input::InputState;
use crate::resources::inputscript::{InputFrame, InputScript};

pub fn update_input_state(
    mut input: ResMut<InputState>,
    script: Option<ResMut<InputScript>>,
    mut commands: Commands,
) {
    let frame = match script {
        Some(mut script) => script.next_frame(),
        None => InputFrame::default(),
    };
    input.apply(&frame);

    for (action, state) in input.actions() {
        if state.just_pressed {
            commands.trigger(InputEvent {
                action,
                pressed: true,
            });
        }
        if state.just_released {
            commands.trigger(InputEvent {
                action,
                pressed: false,
            });
        }
    }
}
