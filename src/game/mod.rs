pub mod background;
pub mod mediator;
pub mod navigation;
pub mod physics;
pub mod player;
pub mod prompt;
pub mod scene;
pub mod screen;

use background::Background;
use mediator::Mediator;
use player::Player;
use prompt::ElevatorPrompt;
use scene::Scene;
use screen::Screen;

use crate::config::GameConfig;
use crate::engine::audio::MusicTrack;
use crate::engine::input::InputState;
use crate::engine::resources::ResourceManager;
use crate::engine::scene::SceneGraph;
use crate::engine::{Game, GameWindowDescriptor};
use crate::ui::UiElement;

pub const MUSIC_TRACK: &str = "audio/musa1.wav";

#[derive(Debug)]
pub struct PiccoloGame {
    pub mediator: Mediator,
    pub screen: Screen,
    pub background: Background,
    pub player: Player,
    pub prompt: ElevatorPrompt,
    music_volume: f32,
    frames: u64,
}

impl PiccoloGame {
    pub fn new(config: &GameConfig, resources: &mut ResourceManager) -> Self {
        let mut mediator = Mediator::new();
        let screen = Screen::new(&config.display, &mut mediator);
        let background = Background::new(&config.physics, &screen, resources, &mut mediator);
        let player = Player::new(
            &config.player,
            &config.physics,
            &screen,
            resources,
            &mut mediator,
        );
        let prompt = ElevatorPrompt::new(screen.width);

        let mut game = Self {
            mediator,
            screen,
            background,
            player,
            prompt,
            music_volume: config.audio.volume,
            frames: 0,
        };
        game.notify("Game was created.");
        game
    }

    pub fn scene(&self) -> Scene {
        self.background.current()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn draw(&self, scene: &mut SceneGraph) {
        scene.clear();
        self.background.draw(scene);
        self.player.draw(scene);
    }

    pub fn update(&mut self, input: &InputState) {
        self.player
            .update(input, &mut self.background, &mut self.mediator);
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.mediator.notify(message);
    }
}

impl Game for PiccoloGame {
    fn name(&self) -> &str {
        &self.screen.caption
    }

    fn frame(&mut self, input: &InputState, scene: &mut SceneGraph) {
        self.draw(scene);
        self.update(input);
        self.frames += 1;
        tracing::trace!(frame = self.frames, scene = %self.scene(), x = self.player.x, bottom = self.player.bottom, "frame");
    }

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor {
            title: Some(self.screen.caption.clone()),
            width: Some(self.screen.width.max(1) as u32),
            height: Some(self.screen.height.max(1) as u32),
            resizable: false,
        }
    }

    fn ui_elements(&self) -> Vec<UiElement> {
        self.prompt.elements(self.scene())
    }

    fn background_music(&self) -> Option<MusicTrack> {
        Some(MusicTrack {
            path: MUSIC_TRACK,
            volume: self.music_volume,
        })
    }

    fn drain_sound_cues(&mut self) -> Vec<&'static str> {
        self.player.drain_sound_cues()
    }
}
