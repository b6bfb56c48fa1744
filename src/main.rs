//! Swing door headless runner.
//!
//! Builds the ECS world from `config.ini`, spawns the player and the doors,
//! then runs a fixed number of frames driven by a scripted input file:
//!
//! - **bevy_ecs** for entity-component-system architecture
//! - **configparser** for the INI configuration
//! - **serde_json** for input scripts, curve files and save slots
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script demos/open_and_save.json --frames 240
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use swingdoor::components::door::SwingDoor;
use swingdoor::components::mapposition::MapPosition;
use swingdoor::components::player::Player;
use swingdoor::components::rotation::Rotation;
use swingdoor::game;
use swingdoor::resources::gameconfig::GameConfig;
use swingdoor::resources::inputscript::InputScript;

/// Swing door playground
#[derive(Parser)]
#[command(version, about = "Headless third-person door playground driven by scripted input.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// JSON input script; without one the player stands idle.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Override the save directory from the configuration.
    #[arg(long, value_name = "DIR")]
    save_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(dir) = cli.save_dir {
        config.save_dir = dir;
    }

    let mut world = World::new();
    game::insert_resources(&mut world, config);

    if let Some(path) = &cli.script {
        match InputScript::load_from_file(path) {
            Ok(script) => {
                world.insert_resource(script);
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }

    game::register_observers(&mut world);
    if let Err(e) = game::setup(&mut world) {
        error!("Scene setup failed: {}", e);
        std::process::exit(1);
    }

    let mut update = game::build_update_schedule();

    // --------------- Main loop ---------------
    for _ in 0..cli.frames {
        game::run_frame(&mut world, &mut update, cli.dt);
    }

    let mut players = world.query_filtered::<(&MapPosition, &Rotation), With<Player>>();
    for (position, rotation) in players.iter(&world) {
        info!("Player at {:?} facing {:?}", position.pos, rotation);
    }
    let mut doors = world.query::<(Entity, &SwingDoor, &Rotation)>();
    for (entity, door, leaf) in doors.iter(&world) {
        info!(
            "Door {:?}: {:?}, position {:.3}, leaf yaw {:.2}",
            entity,
            door.state(),
            door.playback_position(),
            leaf.yaw
        );
    }
}
