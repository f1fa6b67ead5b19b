//! Legal moves between hotel scenes.

use super::scene::{Corridor, Floor, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
}

/// Door actions: `Enter` is the up arrow, `Leave` the down arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Door {
    Enter,
    Leave,
}

/// Where the player appears after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// Just inside the left side of the screen.
    FromLeft,
    /// Just inside the right side of the screen.
    FromRight,
    /// Back at the spawn position.
    Door,
    /// Wherever the player already stands.
    Stay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: Scene,
    pub arrival: Arrival,
}

impl Transition {
    fn new(to: Scene, arrival: Arrival) -> Self {
        Self { to, arrival }
    }
}

/// Scene reached by walking off `edge`, or `None` for a wall.
pub fn edge_exit(scene: Scene, edge: Edge) -> Option<Transition> {
    use Arrival::{FromLeft, FromRight};

    match (scene, edge) {
        (Scene::Entrance, Edge::Right) => Some(Transition::new(Scene::Yard, FromLeft)),
        (Scene::Entrance, Edge::Left) => Some(Transition::new(Scene::Yard, FromRight)),
        (Scene::Yard, Edge::Right) => Some(Transition::new(Scene::Entrance, FromLeft)),
        (Scene::Yard, Edge::Left) => Some(Transition::new(Scene::Entrance, FromRight)),
        (Scene::FrontDesk, Edge::Right) => Some(Transition::new(Scene::ElevatorLobby, FromLeft)),
        (Scene::ElevatorLobby | Scene::ElevatorOpenLobby, Edge::Left) => {
            Some(Transition::new(Scene::FrontDesk, FromRight))
        }
        (Scene::Corridor(corridor), Edge::Right) => corridor
            .next()
            .map(|next| Transition::new(Scene::Corridor(next), FromLeft)),
        (Scene::Corridor(corridor), Edge::Left) => Some(match corridor.previous() {
            Some(previous) => Transition::new(Scene::Corridor(previous), FromRight),
            None => Transition::new(Scene::ElevatorOpenFloor(corridor.floor()), FromRight),
        }),
        _ => None,
    }
}

/// Scene reached through a door, or `None` when there is no door here.
pub fn door_exit(scene: Scene, door: Door) -> Option<Transition> {
    use Arrival::{Door as AtDoor, FromLeft, Stay};

    match (scene, door) {
        (Scene::Entrance, Door::Enter) => Some(Transition::new(Scene::FrontDesk, AtDoor)),
        (Scene::FrontDesk, Door::Leave) => Some(Transition::new(Scene::Entrance, AtDoor)),
        (Scene::ElevatorLobby, Door::Enter) => {
            Some(Transition::new(Scene::ElevatorOpenLobby, Stay))
        }
        (Scene::ElevatorOpenLobby, Door::Enter) => {
            Some(Transition::new(Scene::ElevatorFloor(ground_floor()), AtDoor))
        }
        (Scene::ElevatorOpenLobby, Door::Leave) => {
            Some(Transition::new(Scene::ElevatorLobby, Stay))
        }
        (Scene::ElevatorFloor(floor), Door::Enter) => {
            Some(Transition::new(Scene::ElevatorOpenFloor(floor), Stay))
        }
        (Scene::ElevatorOpenFloor(floor), Door::Leave) => {
            Some(Transition::new(Scene::ElevatorFloor(floor), Stay))
        }
        (Scene::ElevatorOpenFloor(floor), Door::Enter) => step_out(floor),
        _ => None,
    }
}

/// Moves the closed elevator car to `floor`. Only legal from inside the
/// closed car and only to a different valid floor.
pub fn select_floor(scene: Scene, floor: u8) -> Option<Transition> {
    let Scene::ElevatorFloor(current) = scene else {
        return None;
    };
    let target = Floor::new(floor).ok()?;
    if target == current {
        return None;
    }
    Some(Transition::new(Scene::ElevatorFloor(target), Arrival::Stay))
}

fn step_out(floor: Floor) -> Option<Transition> {
    if floor == ground_floor() {
        return Some(Transition::new(Scene::ElevatorOpenLobby, Arrival::Door));
    }
    let corridor = Corridor::new(1, floor.number()).ok()?;
    Some(Transition::new(Scene::Corridor(corridor), Arrival::FromLeft))
}

fn ground_floor() -> Floor {
    Scene::Entrance.floor()
}
