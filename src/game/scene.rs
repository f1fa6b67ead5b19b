//! Hotel locations. Every value of [`Scene`] is a legal location: floors and
//! corridors are validated when constructed, so no out-of-range room can exist.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const FLOORS: std::ops::RangeInclusive<u8> = 1..=9;
pub const GUEST_FLOORS: std::ops::RangeInclusive<u8> = 3..=9;
pub const CORRIDORS: std::ops::RangeInclusive<u8> = 1..=4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("floor {0} is outside 1..=9")]
    FloorOutOfRange(u8),
    #[error("corridor {0} is outside 1..=4")]
    CorridorOutOfRange(u8),
    #[error("floor {0} has no guest corridors")]
    NoCorridors(u8),
    #[error("unknown scene identifier '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Floor(u8);

impl Floor {
    pub fn new(number: u8) -> Result<Self, SceneError> {
        if FLOORS.contains(&number) {
            Ok(Self(number))
        } else {
            Err(SceneError::FloorOutOfRange(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn has_corridors(self) -> bool {
        GUEST_FLOORS.contains(&self.0)
    }

    pub fn all() -> impl Iterator<Item = Floor> {
        FLOORS.map(Floor)
    }
}

/// A guest corridor: number 1-4 on floors 3-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corridor {
    number: u8,
    floor: Floor,
}

impl Corridor {
    pub fn new(number: u8, floor: u8) -> Result<Self, SceneError> {
        if !CORRIDORS.contains(&number) {
            return Err(SceneError::CorridorOutOfRange(number));
        }
        let floor = Floor::new(floor)?;
        if !floor.has_corridors() {
            return Err(SceneError::NoCorridors(floor.number()));
        }
        Ok(Self { number, floor })
    }

    pub fn number(self) -> u8 {
        self.number
    }

    pub fn floor(self) -> Floor {
        self.floor
    }

    /// The next corridor to the right, if any.
    pub fn next(self) -> Option<Corridor> {
        Corridor::new(self.number + 1, self.floor.number()).ok()
    }

    /// The previous corridor to the left, if any.
    pub fn previous(self) -> Option<Corridor> {
        Corridor::new(self.number.checked_sub(1)?, self.floor.number()).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    Entrance,
    Yard,
    FrontDesk,
    ElevatorLobby,
    ElevatorOpenLobby,
    /// Inside the elevator car with the doors closed.
    ElevatorFloor(Floor),
    /// Inside the elevator car with the doors open.
    ElevatorOpenFloor(Floor),
    Corridor(Corridor),
}

/// Broad category of a scene, used for shared ground art and placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Outdoor,
    Indoor,
    Elevator,
    Corridor,
}

impl Scene {
    pub fn corridor(number: u8, floor: u8) -> Result<Self, SceneError> {
        Corridor::new(number, floor).map(Scene::Corridor)
    }

    pub fn elevator(floor: u8) -> Result<Self, SceneError> {
        Floor::new(floor).map(Scene::ElevatorFloor)
    }

    pub fn elevator_open(floor: u8) -> Result<Self, SceneError> {
        Floor::new(floor).map(Scene::ElevatorOpenFloor)
    }

    /// Every scene, in a stable order.
    pub fn all() -> Vec<Scene> {
        let mut scenes = vec![
            Scene::Entrance,
            Scene::Yard,
            Scene::FrontDesk,
            Scene::ElevatorLobby,
            Scene::ElevatorOpenLobby,
        ];
        scenes.extend(Floor::all().map(Scene::ElevatorFloor));
        scenes.extend(Floor::all().map(Scene::ElevatorOpenFloor));
        for floor in GUEST_FLOORS {
            for number in CORRIDORS {
                scenes.push(Scene::Corridor(Corridor {
                    number,
                    floor: Floor(floor),
                }));
            }
        }
        scenes
    }

    pub fn zone(self) -> Zone {
        match self {
            Scene::Entrance | Scene::Yard => Zone::Outdoor,
            Scene::FrontDesk | Scene::ElevatorLobby | Scene::ElevatorOpenLobby => Zone::Indoor,
            Scene::ElevatorFloor(_) | Scene::ElevatorOpenFloor(_) => Zone::Elevator,
            Scene::Corridor(_) => Zone::Corridor,
        }
    }

    /// Floor the scene is on; the outdoor and lobby scenes are floor 1.
    pub fn floor(self) -> Floor {
        match self {
            Scene::ElevatorFloor(floor) | Scene::ElevatorOpenFloor(floor) => floor,
            Scene::Corridor(corridor) => corridor.floor(),
            _ => Floor(1),
        }
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scene::Entrance => f.write_str("entrance"),
            Scene::Yard => f.write_str("yard"),
            Scene::FrontDesk => f.write_str("frontdesk"),
            Scene::ElevatorLobby => f.write_str("elevator_lobby"),
            Scene::ElevatorOpenLobby => f.write_str("elevator_open_lobby"),
            Scene::ElevatorFloor(floor) => write!(f, "elevator_floor{}", floor.number()),
            Scene::ElevatorOpenFloor(floor) => write!(f, "elevator_open_floor{}", floor.number()),
            Scene::Corridor(corridor) => write!(
                f,
                "corridor{}_floor{}",
                corridor.number(),
                corridor.floor().number()
            ),
        }
    }
}

impl FromStr for Scene {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || SceneError::Unknown(s.to_string());
        let digit = |text: &str| -> Result<u8, SceneError> {
            if text.len() == 1 {
                text.parse::<u8>().map_err(|_| unknown())
            } else {
                Err(unknown())
            }
        };

        match s {
            "entrance" => return Ok(Scene::Entrance),
            "yard" => return Ok(Scene::Yard),
            "frontdesk" => return Ok(Scene::FrontDesk),
            "elevator_lobby" => return Ok(Scene::ElevatorLobby),
            "elevator_open_lobby" => return Ok(Scene::ElevatorOpenLobby),
            _ => {}
        }

        if let Some(rest) = s.strip_prefix("elevator_open_floor") {
            return Scene::elevator_open(digit(rest)?);
        }
        if let Some(rest) = s.strip_prefix("elevator_floor") {
            return Scene::elevator(digit(rest)?);
        }
        if let Some(rest) = s.strip_prefix("corridor") {
            let (number, floor) = rest.split_once("_floor").ok_or_else(unknown)?;
            return Scene::corridor(digit(number)?, digit(floor)?);
        }
        Err(unknown())
    }
}
