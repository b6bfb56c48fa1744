//! Game systems.
//!
//! This module groups all ECS systems that advance simulation and input.
//!
//! Submodules overview
//! - [`door`] – advance door swings and write the leaf rotation
//! - [`input`] – read scripted input into [`crate::resources::input::InputState`]
//! - [`interaction`] – find the door in view and toggle it on the action button
//! - [`movement`] – look, walk and sprint for the player character
//! - [`time`] – update simulation time and delta

pub mod door;
pub mod input;
pub mod interaction;
pub mod movement;
pub mod time;
