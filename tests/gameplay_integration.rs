//! Gameplay integration tests: the full frame schedule driven by scripted
//! input, from focusing a door to saving and loading the player.

use bevy_ecs::prelude::*;

use swingdoor::components::door::{DoorError, DoorState, SwingDoor};
use swingdoor::components::mapposition::{MapPosition, Vec3};
use swingdoor::components::player::{CharacterMovement, ControlRotation, FocusedDoor, Player};
use swingdoor::components::rotation::Rotation;
use swingdoor::events::savegame::{LoadGameEvent, SaveGameEvent};
use swingdoor::game;
use swingdoor::resources::gameconfig::GameConfig;
use swingdoor::resources::inputscript::{InputFrame, InputScript};
use swingdoor::resources::savegame::{SaveError, SaveRecord, SaveSlots};

const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

fn make_world(script: &str) -> (World, Schedule) {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.door_positions = vec![Vec3::new(150.0, 0.0, 0.0)];
    game::insert_resources(&mut world, config);
    world.insert_resource(SaveSlots::in_memory());
    world.insert_resource(InputScript::from_json_str(script).unwrap());
    game::register_observers(&mut world);
    game::setup(&mut world).unwrap();
    (world, game::build_update_schedule())
}

fn run(world: &mut World, update: &mut Schedule, frames: u32) {
    for _ in 0..frames {
        game::run_frame(world, update, DT);
    }
}

fn player(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<Player>>()
        .single(world)
        .unwrap()
}

fn the_door(world: &mut World) -> Entity {
    world
        .query_filtered::<Entity, With<SwingDoor>>()
        .single(world)
        .unwrap()
}

#[test]
fn setup_spawns_player_and_closed_door() {
    let (mut world, _update) = make_world("[]");
    let p = player(&mut world);
    let d = the_door(&mut world);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos, Vec3::ZERO);
    assert_eq!(world.get::<SwingDoor>(d).unwrap().state(), DoorState::Closed);
}

#[test]
fn player_focuses_door_in_front() {
    let (mut world, mut update) = make_world("[]");
    run(&mut world, &mut update, 1);
    let p = player(&mut world);
    let d = the_door(&mut world);
    assert_eq!(world.get::<FocusedDoor>(p).unwrap().0, Some(d));
}

#[test]
fn turning_away_clears_focus() {
    let (mut world, mut update) = make_world(r#"[{"turn":180.0}]"#);
    run(&mut world, &mut update, 3);
    let p = player(&mut world);
    assert_eq!(world.get::<FocusedDoor>(p).unwrap().0, None);
    assert!(approx_eq(world.get::<Rotation>(p).unwrap().yaw, 180.0, 1e-4));
}

#[test]
fn action_opens_focused_door() {
    let (mut world, mut update) = make_world(r#"[{"repeat":1},{"action":true}]"#);
    run(&mut world, &mut update, 2);
    let d = the_door(&mut world);
    assert!(world.get::<SwingDoor>(d).unwrap().is_open());

    run(&mut world, &mut update, 70);
    let door = world.get::<SwingDoor>(d).unwrap();
    assert_eq!(door.state(), DoorState::Open);
    assert!(approx_eq(world.get::<Rotation>(d).unwrap().yaw, -90.0, 1e-3));
}

#[test]
fn second_press_mid_swing_is_ignored() {
    let (mut world, mut update) = make_world(
        r#"[{"repeat":1},{"action":true},{"repeat":20},{"action":true},{"repeat":5}]"#,
    );
    run(&mut world, &mut update, 28);
    let d = the_door(&mut world);
    {
        let door = world.get::<SwingDoor>(d).unwrap();
        assert!(door.is_open());
        assert!(!door.is_ready());
    }
    run(&mut world, &mut update, 60);
    assert_eq!(world.get::<SwingDoor>(d).unwrap().state(), DoorState::Open);
}

#[test]
fn action_without_focus_does_nothing() {
    let (mut world, mut update) = make_world(r#"[{"turn":180.0},{"repeat":1},{"action":true}]"#);
    run(&mut world, &mut update, 10);
    let d = the_door(&mut world);
    assert_eq!(world.get::<SwingDoor>(d).unwrap().state(), DoorState::Closed);
}

#[test]
fn walking_forward_moves_along_heading() {
    let (mut world, mut update) = make_world(r#"[{"move_forward":1.0,"repeat":30}]"#);
    run(&mut world, &mut update, 30);
    let p = player(&mut world);
    let pos = world.get::<MapPosition>(p).unwrap().pos;
    assert!(approx_eq(pos.x, 100.0, 1e-2));
    assert!(approx_eq(pos.y, 0.0, 1e-3));
    assert!(approx_eq(pos.z, 0.0, 1e-6));
}

#[test]
fn diagonal_movement_is_normalized() {
    let (mut world, mut update) =
        make_world(r#"[{"move_forward":1.0,"move_right":1.0,"repeat":60}]"#);
    run(&mut world, &mut update, 60);
    let p = player(&mut world);
    let pos = world.get::<MapPosition>(p).unwrap().pos;
    assert!(approx_eq(pos.length(), 200.0, 1e-1));
    assert!(approx_eq(pos.x, pos.y, 1e-2));
}

#[test]
fn sprint_speeds_up_until_released() {
    let (mut world, mut update) = make_world(
        r#"[{"sprint":true,"move_forward":1.0,"repeat":30},{"move_forward":1.0,"repeat":30}]"#,
    );
    run(&mut world, &mut update, 10);
    let p = player(&mut world);
    assert!(world.get::<CharacterMovement>(p).unwrap().is_sprinting());

    run(&mut world, &mut update, 50);
    assert!(!world.get::<CharacterMovement>(p).unwrap().is_sprinting());
    let x = world.get::<MapPosition>(p).unwrap().pos.x;
    // Roughly 30 frames at 1000 u/s plus 30 frames at 200 u/s.
    assert!(x > 550.0 && x < 610.0, "x = {}", x);
}

#[test]
fn save_then_load_restores_player() {
    let (mut world, mut update) = make_world(
        r#"[{"turn":90.0},{"save":true},{"move_forward":1.0,"turn":45.0,"repeat":30},{"load":true}]"#,
    );
    run(&mut world, &mut update, 2);
    let p = player(&mut world);
    let saved = world.resource::<SaveSlots>().load().unwrap();
    assert_eq!(saved.position, Vec3::ZERO);
    assert!(approx_eq(saved.rotation.yaw, 90.0, 1e-4));

    run(&mut world, &mut update, 31);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos, Vec3::ZERO);
    assert!(approx_eq(world.get::<Rotation>(p).unwrap().yaw, 90.0, 1e-4));
    assert!(approx_eq(world.get::<ControlRotation>(p).unwrap().yaw, 90.0, 1e-4));

    // The restored heading sticks on later frames.
    run(&mut world, &mut update, 2);
    assert!(approx_eq(world.get::<Rotation>(p).unwrap().yaw, 90.0, 1e-4));
}

#[test]
fn save_and_load_round_trip_exact_record() {
    let (mut world, _update) = make_world("[]");
    let p = player(&mut world);
    world.get_mut::<MapPosition>(p).unwrap().pos = Vec3::new(10.0, 20.0, 30.0);
    *world.get_mut::<Rotation>(p).unwrap() = Rotation::new(0.0, 90.0, 0.0);

    world.trigger(SaveGameEvent {});
    world.get_mut::<MapPosition>(p).unwrap().pos = Vec3::new(-5.0, -5.0, -5.0);
    *world.get_mut::<Rotation>(p).unwrap() = Rotation::default();
    world.trigger(LoadGameEvent {});

    let expected = SaveRecord {
        position: Vec3::new(10.0, 20.0, 30.0),
        rotation: Rotation::new(0.0, 90.0, 0.0),
    };
    assert_eq!(world.resource::<SaveSlots>().load().unwrap(), expected);
    assert_eq!(world.get::<MapPosition>(p).unwrap().pos, expected.position);
    assert_eq!(*world.get::<Rotation>(p).unwrap(), expected.rotation);
}

#[test]
fn load_keeps_control_rotation_in_range_and_view_pitch() {
    let (mut world, mut update) = make_world("[]");
    let p = player(&mut world);
    world.get_mut::<ControlRotation>(p).unwrap().pitch = 30.0;
    let record = SaveRecord {
        position: Vec3::ZERO,
        rotation: Rotation::new(120.0, 450.0, 0.0),
    };
    world.resource_mut::<SaveSlots>().save(&record).unwrap();

    world.trigger(LoadGameEvent {});

    let control = *world.get::<ControlRotation>(p).unwrap();
    assert!(approx_eq(control.yaw, 90.0, 1e-4));
    assert!(approx_eq(control.pitch, 30.0, 1e-6));

    run(&mut world, &mut update, 1);
    assert!(approx_eq(world.get::<Rotation>(p).unwrap().yaw, 90.0, 1e-4));
}

#[test]
fn load_without_save_leaves_player_in_place() {
    let (mut world, _update) = make_world("[]");
    let p = player(&mut world);
    world.get_mut::<MapPosition>(p).unwrap().pos = Vec3::new(1.0, 2.0, 3.0);

    assert!(matches!(
        world.resource::<SaveSlots>().load(),
        Err(SaveError::NotFound(_))
    ));
    world.trigger(LoadGameEvent {});

    assert_eq!(world.get::<MapPosition>(p).unwrap().pos, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn file_slots_write_configured_slot() {
    let dir = std::env::temp_dir().join(format!("swingdoor_gameplay_{}", fastrand::u64(..)));
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.save_dir = dir.clone();
    config.save_slot = "Checkpoint".to_string();
    game::insert_resources(&mut world, config);
    game::register_observers(&mut world);
    game::setup(&mut world).unwrap();
    let p = player(&mut world);
    world.get_mut::<MapPosition>(p).unwrap().pos = Vec3::new(4.0, 5.0, 6.0);

    world.trigger(SaveGameEvent {});

    assert!(dir.join("Checkpoint.sav").exists());
    assert_eq!(
        world.resource::<SaveSlots>().load().unwrap().position,
        Vec3::new(4.0, 5.0, 6.0)
    );
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn unknown_curve_fails_setup() {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.door_curve = "missing".to_string();
    game::insert_resources(&mut world, config);

    assert_eq!(
        game::setup(&mut world),
        Err(DoorError::UnknownCurve("missing".to_string()))
    );
    let doors = world
        .query_filtered::<Entity, With<SwingDoor>>()
        .iter(&world)
        .count();
    assert_eq!(doors, 0);
}

#[test]
fn idle_script_frames_after_end() {
    let mut script = InputScript::new(vec![InputFrame {
        move_forward: 1.0,
        ..Default::default()
    }]);
    assert_eq!(script.next_frame().move_forward, 1.0);
    assert_eq!(script.next_frame(), InputFrame::default());
}
