use crate::config::{PhysicsConfig, PlayerConfig};
use crate::engine::input::{InputState, Key};
use crate::engine::resources::{Placeholder, ResourceManager, TextureHandle};
use crate::engine::scene::{SceneGraph, SceneNode};
use crate::ui::Rect;

use super::background::Background;
use super::mediator::Mediator;
use super::navigation::{Arrival, Door, Edge};
use super::physics::Jump;
use super::screen::Screen;

pub const JUMP_SOUND: &str = "audio/hyppy.mp3";
const WALK_FRAMES: usize = 2;

/// Sprites for one facing direction.
#[derive(Debug, Clone, Copy)]
pub struct Poses {
    pub stand: TextureHandle,
    pub jump: TextureHandle,
    pub walking: [TextureHandle; WALK_FRAMES],
}

impl Poses {
    fn load(resources: &mut ResourceManager, prefix: &str, placeholder: Placeholder) -> Self {
        let mut load = |pose: &str| {
            resources.load_texture(
                &format!("graphics/player/{prefix}{pose}_normal.png"),
                placeholder,
            )
        };
        Self {
            stand: load("stand"),
            jump: load("jump"),
            walking: [load("walk1"), load("walk2")],
        }
    }
}

#[derive(Debug)]
pub struct Player {
    /// Horizontal midpoint of the sprite.
    pub x: i32,
    pub prev_x: i32,
    /// Bottom edge of the sprite.
    pub bottom: i32,
    pub jump: Jump,
    pub walk_index: f32,
    pub facing_left: bool,
    pub moving_horizontally: bool,
    pub image: TextureHandle,
    pub right: Poses,
    pub left: Poses,
    screen_width: i32,
    start_x: i32,
    animation_step: f32,
    physics: PhysicsConfig,
    sound_cues: Vec<&'static str>,
}

impl Player {
    pub fn new(
        config: &PlayerConfig,
        physics: &PhysicsConfig,
        screen: &Screen,
        resources: &mut ResourceManager,
        mediator: &mut Mediator,
    ) -> Self {
        let placeholder = Placeholder::new(config.placeholder_color, config.placeholder_size);
        let right = Poses::load(resources, "piccolo_", placeholder);
        let left = Poses::load(resources, "piccolo_left_", placeholder);

        let player = Self {
            x: config.start_x,
            prev_x: config.start_x,
            bottom: physics.rest(),
            jump: Jump::default(),
            walk_index: 0.0,
            facing_left: false,
            moving_horizontally: false,
            image: right.stand,
            right,
            left,
            screen_width: screen.width,
            start_x: config.start_x,
            animation_step: config.animation_step,
            physics: physics.clone(),
            sound_cues: Vec::new(),
        };
        mediator.notify("Player was created.");
        player
    }

    pub fn rest(&self) -> i32 {
        self.physics.rest()
    }

    pub fn is_grounded(&self) -> bool {
        self.bottom >= self.rest()
    }

    /// Sprite rectangle anchored at its bottom centre.
    pub fn rect(&self) -> Rect {
        let width = self.image.width as f32;
        let height = self.image.height as f32;
        Rect::new(
            self.x as f32 - width / 2.0,
            self.bottom as f32 - height,
            width,
            height,
        )
    }

    pub fn poses(&self) -> &Poses {
        if self.facing_left {
            &self.left
        } else {
            &self.right
        }
    }

    pub fn update(&mut self, input: &InputState, background: &mut Background, mediator: &mut Mediator) {
        self.player_input(input, background, mediator);
        self.apply_gravity();
        self.animate();
    }

    pub fn player_input(
        &mut self,
        input: &InputState,
        background: &mut Background,
        mediator: &mut Mediator,
    ) {
        if input.is_held(Key::Left) {
            self.x -= self.physics.walk_speed;
            self.moving_horizontally = true;
            self.facing_left = true;
        } else if input.is_held(Key::Right) {
            self.x += self.physics.walk_speed;
            self.moving_horizontally = true;
            self.facing_left = false;
        } else {
            self.moving_horizontally = false;
        }

        let left_limit = self.physics.edge_limit_left;
        let right_limit = self.screen_width - self.physics.edge_limit_right;
        let mut arrival = None;

        // Scenes only change on the frame the threshold is first crossed.
        if self.x > right_limit {
            self.x = right_limit;
            if self.prev_x <= right_limit {
                arrival = background.walk_off(Edge::Right, mediator);
            }
        } else if self.x < left_limit {
            self.x = left_limit;
            if self.prev_x >= left_limit {
                arrival = background.walk_off(Edge::Left, mediator);
            }
        }

        if arrival.is_none() {
            if self.is_grounded() {
                if input.just_pressed(Key::Up) {
                    arrival = background.use_door(Door::Enter, mediator);
                } else if input.just_pressed(Key::Down) {
                    arrival = background.use_door(Door::Leave, mediator);
                }
            }
            if arrival.is_none() {
                if let Some(digit) = input.pressed_digit() {
                    arrival = background.select_floor(digit, mediator);
                }
            }
        }

        if let Some(arrival) = arrival {
            self.arrive(arrival);
        }
        self.prev_x = self.x;

        if input.is_held(Key::Space) && self.is_grounded() {
            self.jump.start();
            self.sound_cues.push(JUMP_SOUND);
            mediator.notify("Player jumped.");
        }
    }

    pub fn apply_gravity(&mut self) {
        self.jump.step(&mut self.bottom, &self.physics);
    }

    pub fn animate(&mut self) {
        let rest = self.rest();
        if self.bottom < rest {
            self.image = self.poses().jump;
        } else if self.bottom == rest {
            if self.moving_horizontally {
                self.walk_index += self.animation_step;
                if self.walk_index >= WALK_FRAMES as f32 {
                    self.walk_index = 0.0;
                }
                self.image = self.poses().walking[self.walk_index as usize];
            } else {
                self.image = self.poses().stand;
            }
        }
    }

    pub fn draw(&self, scene: &mut SceneGraph) {
        let rect = self.rect();
        scene.add_node(SceneNode::sprite("player", self.image, rect.x, rect.y));
    }

    pub fn drain_sound_cues(&mut self) -> Vec<&'static str> {
        std::mem::take(&mut self.sound_cues)
    }

    fn arrive(&mut self, arrival: Arrival) {
        let offset = self.physics.edge_entry_offset;
        match arrival {
            Arrival::FromLeft => self.x = offset,
            Arrival::FromRight => self.x = self.screen_width - offset,
            Arrival::Door => self.x = self.start_x,
            Arrival::Stay => {}
        }
    }
}
