use std::collections::HashMap;

use crate::config::PhysicsConfig;
use crate::engine::resources::{Placeholder, ResourceManager, TextureHandle};
use crate::engine::scene::{SceneGraph, SceneNode};

use super::mediator::Mediator;
use super::navigation::{self, Arrival, Door, Edge, Transition};
use super::scene::{Scene, Zone};
use super::screen::Screen;

/// Ground and sky images shown for one scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layers {
    pub ground: TextureHandle,
    pub sky: TextureHandle,
}

#[derive(Debug)]
pub struct Background {
    current: Scene,
    layers: HashMap<Scene, Layers>,
    ground_y: i32,
    sky_y: i32,
}

impl Background {
    /// Loads the image pair of every scene up front and starts at the entrance.
    pub fn new(
        physics: &PhysicsConfig,
        screen: &Screen,
        resources: &mut ResourceManager,
        mediator: &mut Mediator,
    ) -> Self {
        let width = screen.width.max(1) as u32;
        let ground_height = (screen.height - physics.ground_level).max(1) as u32;
        let sky_height = (physics.ground_level - physics.sky_y).max(1) as u32;

        let layers = Scene::all()
            .into_iter()
            .map(|scene| {
                let ground = resources.load_texture(
                    ground_image(scene.zone()),
                    Placeholder::new(ground_tint(scene.zone()), (width, ground_height)),
                );
                let sky = resources.load_texture(
                    &format!("graphics/hotel/{scene}_normal.png"),
                    Placeholder::new(sky_tint(scene), (width, sky_height)),
                );
                (scene, Layers { ground, sky })
            })
            .collect::<HashMap<_, _>>();

        let background = Self {
            current: Scene::default(),
            layers,
            ground_y: physics.ground_level,
            sky_y: physics.sky_y,
        };
        mediator.set_current_background(background.current.to_string());
        mediator.notify("Background was created.");
        background
    }

    pub fn current(&self) -> Scene {
        self.current
    }

    pub fn layers(&self, scene: Scene) -> Option<Layers> {
        self.layers.get(&scene).copied()
    }

    pub fn draw(&self, scene: &mut SceneGraph) {
        let Some(layers) = self.layers(self.current) else {
            tracing::warn!(scene = %self.current, "no images for scene");
            return;
        };
        scene.add_node(SceneNode::sprite("ground", layers.ground, 0.0, self.ground_y as f32));
        scene.add_node(SceneNode::sprite("sky", layers.sky, 0.0, self.sky_y as f32));
    }

    /// Switches scenes when `edge` leads somewhere; reports where the
    /// player should appear.
    pub fn walk_off(&mut self, edge: Edge, mediator: &mut Mediator) -> Option<Arrival> {
        let transition = navigation::edge_exit(self.current, edge)?;
        Some(self.apply(transition, mediator))
    }

    pub fn use_door(&mut self, door: Door, mediator: &mut Mediator) -> Option<Arrival> {
        let transition = navigation::door_exit(self.current, door)?;
        Some(self.apply(transition, mediator))
    }

    pub fn select_floor(&mut self, floor: u8, mediator: &mut Mediator) -> Option<Arrival> {
        let transition = navigation::select_floor(self.current, floor)?;
        let arrival = self.apply(transition, mediator);
        mediator.notify(format!("Elevator moved to floor {floor}."));
        Some(arrival)
    }

    /// Jumps straight to `scene`, bypassing the navigation rules.
    pub fn switch_to(&mut self, scene: Scene, mediator: &mut Mediator) {
        let from = self.current;
        self.current = scene;
        tracing::debug!(%from, to = %scene, "background switched");
        mediator.set_current_background(scene.to_string());
        mediator.notify(format!("Background switched to {scene}."));
    }

    fn apply(&mut self, transition: Transition, mediator: &mut Mediator) -> Arrival {
        self.switch_to(transition.to, mediator);
        transition.arrival
    }
}

fn ground_image(zone: Zone) -> &'static str {
    match zone {
        Zone::Outdoor => "graphics/hotel/outdoor_ground_normal.png",
        Zone::Indoor | Zone::Elevator | Zone::Corridor => "graphics/hotel/indoor_ground_normal.png",
    }
}

fn ground_tint(zone: Zone) -> (u8, u8, u8) {
    match zone {
        Zone::Outdoor => (96, 128, 56),
        Zone::Indoor | Zone::Elevator | Zone::Corridor => (110, 80, 60),
    }
}

fn sky_tint(scene: Scene) -> (u8, u8, u8) {
    match scene {
        Scene::Entrance => (135, 206, 235),
        Scene::Yard => (150, 200, 150),
        Scene::FrontDesk => (222, 196, 160),
        Scene::ElevatorLobby => (200, 180, 150),
        Scene::ElevatorOpenLobby => (215, 200, 175),
        Scene::ElevatorFloor(_) => (150, 150, 160),
        Scene::ElevatorOpenFloor(_) => (185, 185, 195),
        Scene::Corridor(_) => (128, 64, 80),
    }
}
