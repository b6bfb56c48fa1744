//! ECS resources made available to systems.
//!
//! Overview
//! - `curvestore` – door swing curves by name
//! - `gameconfig` – INI-backed door, player and save settings
//! - `input` – per-frame axes and action buttons
//! - `inputscript` – scripted input frames for headless runs
//! - `savegame` – save records, save stores and the active slot
//! - `worldtime` – simulation time and delta
pub mod curvestore;
pub mod gameconfig;
pub mod input;
pub mod inputscript;
pub mod savegame;
pub mod worldtime;
