#![allow(dead_code)]

use std::path::Path;

use image::{Rgba, RgbaImage};
use piccolo::engine::input::{InputState, Key};
use piccolo::engine::resources::ResourceManager;
use piccolo::{GameConfig, PiccoloGame};
use tempfile::TempDir;

/// Player poses written with distinct widths so handles never collide.
pub const PLAYER_POSES: [(&str, u32); 8] = [
    ("piccolo_stand_normal.png", 20),
    ("piccolo_jump_normal.png", 22),
    ("piccolo_walk1_normal.png", 24),
    ("piccolo_walk2_normal.png", 26),
    ("piccolo_left_stand_normal.png", 21),
    ("piccolo_left_jump_normal.png", 23),
    ("piccolo_left_walk1_normal.png", 25),
    ("piccolo_left_walk2_normal.png", 27),
];

pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
        .save(path)
        .unwrap();
}

pub fn asset_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, width) in PLAYER_POSES {
        write_png(&dir.path().join("graphics/player").join(name), width, 40);
    }
    dir
}

pub struct Harness {
    pub game: PiccoloGame,
    pub resources: ResourceManager,
    _assets: TempDir,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let assets = asset_dir();
        let mut resources = ResourceManager::new(assets.path());
        let game = PiccoloGame::new(&config, &mut resources);
        Self {
            game,
            resources,
            _assets: assets,
        }
    }

    pub fn step(&mut self, input: InputState) {
        self.game.update(&input);
    }

    pub fn hold(&mut self, key: Key, frames: u32) {
        for _ in 0..frames {
            self.step(InputState::default().with_held(key));
        }
    }

    pub fn press(&mut self, key: Key) {
        self.step(InputState::default().with_pressed(key));
    }

    pub fn idle(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step(InputState::default());
        }
    }

    /// Puts the player somewhere without going through navigation.
    pub fn place(&mut self, x: i32) {
        self.game.player.x = x;
        self.game.player.prev_x = x;
    }
}
