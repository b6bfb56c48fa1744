//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`door`] – door toggle requests and swing completion notifications
//! - [`input`] – action button presses and releases
//! - [`savegame`] – save/load requests for the player transform
pub mod door;
pub mod input;
pub mod savegame;
