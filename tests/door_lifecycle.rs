use roomkit::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn controller_with_door() -> (DoorController, DoorId) {
    init_logger();
    let mut doors = DoorController::new();
    let spec = DoorSpec::new("corridor", WallSide::North, Vec3::ZERO, 2.0, 2.4);
    let id = doors.create_door(spec);
    (doors, id)
}

fn panel_positions(doors: &DoorController, id: DoorId) -> (f32, f32) {
    let door = doors.door(id).expect("door exists");
    (door.panels()[0].position(), door.panels()[1].position())
}

#[test]
fn each_panel_travels_its_own_width() {
    let (doors, id) = controller_with_door();
    let door = doors.door(id).unwrap();
    let [a, b] = door.panels();
    assert_eq!((a.start(), a.target()), (-1.0, -2.0));
    assert_eq!((b.start(), b.target()), (1.0, 2.0));
    assert_eq!(door.state(), DoorState::Closed);
}

#[test]
fn full_duration_opens_the_door_exactly() {
    let (mut doors, id) = controller_with_door();
    doors.open_door(id);
    doors.update(0.3);
    doors.update(0.3);
    doors.update(0.3);

    let door = doors.door(id).unwrap();
    assert_eq!(door.state(), DoorState::Open);
    assert_eq!(panel_positions(&doors, id), (-2.0, 2.0));
    assert!(door.indicators().iter().all(|i| i.color == INDICATOR_OPEN));
    assert_eq!(doors.animating_count(), 0);
}

#[test]
fn falling_short_of_the_duration_keeps_the_door_opening() {
    let (mut doors, id) = controller_with_door();
    doors.open_door(id);
    doors.update(0.45);
    doors.update(0.449);

    let door = doors.door(id).unwrap();
    assert!(matches!(door.state(), DoorState::Opening { .. }));
    assert!(door.interact_volume().is_some());
    assert_eq!(doors.animating_count(), 1);

    doors.update(0.001);
    assert!(doors.door(id).unwrap().is_open());
}

#[test]
fn variable_frame_rate_reaches_the_same_end() {
    let (mut doors, id) = controller_with_door();
    doors.open_door(id);
    for delta in [0.016, 0.033, 0.1, 0.25, 0.001, 0.5] {
        doors.update(delta);
    }
    assert!(doors.door(id).unwrap().is_open());
    assert_eq!(panel_positions(&doors, id), (-2.0, 2.0));
}

#[test]
fn panels_move_monotonically_before_the_end() {
    let (mut doors, id) = controller_with_door();
    doors.open_door(id);

    let mut last_a = -1.0;
    let mut last_b = 1.0;
    for _ in 0..8 {
        doors.update(0.1);
        let (a, b) = panel_positions(&doors, id);
        assert!(a < last_a && a > -2.0, "{}", a);
        assert!(b > last_b && b < 2.0, "{}", b);
        last_a = a;
        last_b = b;
        assert!(doors.door(id).unwrap().is_animating());
    }
}

#[test]
fn reopening_does_not_reset_the_clock() {
    let (mut doors, id) = controller_with_door();
    assert!(doors.open_door(id));
    doors.update(0.45);
    assert!(!doors.open_door(id));
    assert_eq!(doors.animating_count(), 1);
    doors.update(0.45);
    assert!(doors.door(id).unwrap().is_open());
    assert!(!doors.open_door(id));
    assert_eq!(doors.animating_count(), 0);
}

#[test]
fn collider_goes_early_interactable_goes_late() {
    let (mut doors, id) = controller_with_door();
    let center = Vec3::new(4.0, 0.0, 0.0);
    let corridor = DoorSpec::new("corridor", WallSide::West, center, 1.5, 2.4);
    let other = doors.create_door(corridor);

    assert_eq!(doors.colliders().count(), 2);
    assert_eq!(doors.interactables().count(), 2);

    doors.open_door(id);
    let colliders: Vec<DoorId> = doors.colliders().map(|(door, _)| door).collect();
    assert_eq!(colliders, vec![other]);
    assert_eq!(doors.interactables().count(), 2);

    doors.update(0.5);
    assert!(doors.colliders().all(|(door, _)| door != id));
    let interactable = doors
        .interactables()
        .find(|i| i.door == id)
        .expect("still interactable");
    assert_eq!(interactable.room, "corridor");
    let volume = interactable.volume.id;
    assert_eq!(doors.door_by_interact_volume(volume), Some(id));

    doors.update(0.4);
    let remaining: Vec<DoorId> = doors.interactables().map(|i| i.door).collect();
    assert_eq!(remaining, vec![other]);
    assert_eq!(doors.door_by_interact_volume(volume), None);
}

#[test]
fn doors_animate_independently() {
    let (mut doors, first) = controller_with_door();
    let vault = DoorSpec::new("vault", WallSide::East, Vec3::new(0.0, 0.0, 6.0), 3.0, 3.0);
    let second = doors.create_door(vault);

    doors.open_door(first);
    doors.update(0.6);
    doors.open_door(second);
    doors.update(0.3);

    assert!(doors.door(first).unwrap().is_open());
    assert!(doors.door(second).unwrap().is_animating());
    assert_eq!(doors.animating_count(), 1);

    doors.update(0.6);
    assert!(doors.door(second).unwrap().is_open());
    let [a, b] = doors.door(second).unwrap().panels();
    assert_eq!((a.position(), b.position()), (3.0, 9.0));
}
