//! Input action events.
//!
//! [`update_input_state`](crate::systems::input::update_input_state) emits an
//! [`InputEvent`] whenever an action button goes down or up. Gameplay code
//! reacts through observers instead of polling the buttons:
//!
//! - sprint – [`sprint_observer`](crate::systems::movement::sprint_observer)
//! - action – [`player_action_observer`](crate::systems::interaction::player_action_observer)
//! - save/load – [`save_load_input_observer`](crate::events::savegame::save_load_input_observer)
use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Sprint,
    Save,
    Load,
    /// Use whatever the player is looking at.
    Action,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    /// `true` on press, `false` on release.
    pub pressed: bool,
}
