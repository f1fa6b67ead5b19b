use std::collections::HashSet;

use piccolo::game::scene::{Corridor, Floor, Scene, SceneError, Zone};

#[test]
fn test_catalogue_has_fifty_one_distinct_scenes() {
    let scenes = Scene::all();
    assert_eq!(scenes.len(), 51);

    let unique: HashSet<_> = scenes.iter().copied().collect();
    assert_eq!(unique.len(), 51);

    let corridors = scenes
        .iter()
        .filter(|scene| matches!(scene, Scene::Corridor(_)))
        .count();
    assert_eq!(corridors, 28);
}

#[test]
fn test_every_identifier_parses_back() {
    for scene in Scene::all() {
        let text = scene.to_string();
        let parsed: Scene = text.parse().unwrap();
        assert_eq!(parsed, scene, "round trip of {text}");
    }
}

#[test]
fn test_identifier_text_forms() {
    assert_eq!(Scene::Entrance.to_string(), "entrance");
    assert_eq!(Scene::FrontDesk.to_string(), "frontdesk");
    assert_eq!(Scene::ElevatorOpenLobby.to_string(), "elevator_open_lobby");
    assert_eq!(Scene::elevator(7).unwrap().to_string(), "elevator_floor7");
    assert_eq!(Scene::elevator_open(1).unwrap().to_string(), "elevator_open_floor1");
    assert_eq!(Scene::corridor(2, 5).unwrap().to_string(), "corridor2_floor5");
}

#[test]
fn test_invalid_identifiers_are_rejected() {
    assert_eq!(
        "corridor1_floor2".parse::<Scene>(),
        Err(SceneError::NoCorridors(2))
    );
    assert_eq!(
        "corridor5_floor3".parse::<Scene>(),
        Err(SceneError::CorridorOutOfRange(5))
    );
    assert_eq!(
        "elevator_floor0".parse::<Scene>(),
        Err(SceneError::FloorOutOfRange(0))
    );
    for text in ["elevator_floor10", "lobby", "corridor1floor3", "corridor_floor3", ""] {
        assert!(
            matches!(text.parse::<Scene>(), Err(SceneError::Unknown(_))),
            "{text:?} should be unknown"
        );
    }
}

#[test]
fn test_floor_and_corridor_bounds() {
    assert!(Floor::new(1).is_ok());
    assert!(Floor::new(9).is_ok());
    assert_eq!(Floor::new(10), Err(SceneError::FloorOutOfRange(10)));

    assert!(Corridor::new(1, 3).is_ok());
    assert!(Corridor::new(4, 9).is_ok());
    assert_eq!(Corridor::new(0, 5), Err(SceneError::CorridorOutOfRange(0)));
    assert_eq!(Corridor::new(2, 1), Err(SceneError::NoCorridors(1)));
}

#[test]
fn test_corridor_neighbours_stay_on_floor() {
    let first = Corridor::new(1, 6).unwrap();
    let second = first.next().unwrap();
    assert_eq!(second.number(), 2);
    assert_eq!(second.floor().number(), 6);
    assert_eq!(first.previous(), None);

    let last = Corridor::new(4, 6).unwrap();
    assert_eq!(last.next(), None);
    assert_eq!(last.previous().unwrap().number(), 3);
}

#[test]
fn test_zones_and_floors() {
    assert_eq!(Scene::Yard.zone(), Zone::Outdoor);
    assert_eq!(Scene::FrontDesk.zone(), Zone::Indoor);
    assert_eq!(Scene::elevator(4).unwrap().zone(), Zone::Elevator);
    assert_eq!(Scene::corridor(3, 8).unwrap().zone(), Zone::Corridor);

    assert_eq!(Scene::Entrance.floor().number(), 1);
    assert_eq!(Scene::corridor(3, 8).unwrap().floor().number(), 8);
}
