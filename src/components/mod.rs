//! ECS components for entities.
//!
//! Submodules overview:
//! - [`door`] – swing door controller: open/closed state, ready gate, playback
//! - [`doorcurve`] – keyframed curves mapping playback position to degrees
//! - [`interactable`] – sphere the player's view trace can hit
//! - [`mapposition`] – world-space position and the [`mapposition::Vec3`] type
//! - [`player`] – player marker, controller rotation, movement tuning, focus
//! - [`rotation`] – pitch/yaw/roll in degrees

pub mod door;
pub mod doorcurve;
pub mod interactable;
pub mod mapposition;
pub mod player;
pub mod rotation;
