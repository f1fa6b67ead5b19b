pub mod audio;
pub mod core;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod resources;
pub mod scene;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use audio::{AudioEngine, MusicTrack};
use self::core::{EngineConfig, FixedTimestep};
use input::InputState;
use platform::PlatformLayer;
use renderer::Renderer;
use resources::ResourceManager;
use scene::SceneGraph;
use wgpu::SurfaceError;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use crate::ui::UiElement;

#[derive(Debug, Clone)]
pub struct GameWindowDescriptor {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub resizable: bool,
}

impl Default for GameWindowDescriptor {
    fn default() -> Self {
        Self {
            title: None,
            width: None,
            height: None,
            resizable: false,
        }
    }
}

pub trait Game: Send {
    fn name(&self) -> &str;

    /// One fixed-rate tick: fill `scene` with this tick's drawing, then
    /// advance the simulation with `input`.
    fn frame(&mut self, input: &InputState, scene: &mut SceneGraph);

    fn window_descriptor(&self) -> GameWindowDescriptor {
        GameWindowDescriptor::default()
    }

    fn ui_elements(&self) -> Vec<UiElement> {
        Vec::new()
    }

    fn background_music(&self) -> Option<MusicTrack> {
        None
    }

    /// Effects queued since the last call, as paths under the asset root.
    fn drain_sound_cues(&mut self) -> Vec<&'static str> {
        Vec::new()
    }
}

pub struct EngineApp {
    config: EngineConfig,
    platform: PlatformLayer,
    resources: ResourceManager,
    scene: SceneGraph,
    audio: AudioEngine,
    game: Box<dyn Game>,
    ui_elements: Vec<UiElement>,
    timestep: FixedTimestep,
}

impl EngineApp {
    pub fn new(
        config: EngineConfig,
        game: impl Game + 'static,
        resources: ResourceManager,
        audio: AudioEngine,
    ) -> Self {
        Self {
            platform: PlatformLayer::new(),
            resources,
            scene: SceneGraph::default(),
            audio,
            game: Box::new(game),
            ui_elements: Vec::new(),
            timestep: FixedTimestep::from_fps(config.target_fps),
            config,
        }
    }

    pub fn run(self) -> Result<()> {
        tracing::info!(
            target: "engine",
            app = %self.config.app_name,
            game = %self.game.name(),
            fps = self.config.target_fps,
            "Engine starting"
        );

        let event_loop = EventLoop::new().context("failed to create event loop")?;
        let mut engine = self;
        let window_prefs = engine.game.window_descriptor();
        let window_width = window_prefs.width.unwrap_or(engine.config.window_width);
        let window_height = window_prefs.height.unwrap_or(engine.config.window_height);
        let window_title = window_prefs
            .title
            .clone()
            .unwrap_or_else(|| engine.config.app_name.clone());

        let window = Arc::new(
            WindowBuilder::new()
                .with_title(window_title)
                .with_resizable(window_prefs.resizable)
                .with_inner_size(LogicalSize::new(window_width as f64, window_height as f64))
                .build(&event_loop)
                .context("failed to create window")?,
        );

        if let Some(track) = engine.game.background_music() {
            engine.audio.play_music(&track);
        }

        let canvas = (engine.config.window_width, engine.config.window_height);
        let mut renderer: Option<Renderer> = None;
        let mut last_frame = Instant::now();

        event_loop
            .run(move |event, target| match event {
                Event::Resumed => {
                    if renderer.is_none() {
                        match pollster::block_on(Renderer::new(
                            window.clone(),
                            &engine.resources,
                            canvas,
                        )) {
                            Ok(new_renderer) => {
                                tracing::info!("renderer initialized");
                                renderer = Some(new_renderer);
                                last_frame = Instant::now();
                            }
                            Err(err) => {
                                tracing::error!(%err, "failed to initialize renderer");
                                target.exit();
                            }
                        }
                    }
                }
                Event::AboutToWait => {
                    if renderer.is_some() {
                        window.request_redraw();
                    }
                }
                Event::WindowEvent { window_id, event } if window_id == window.id() => {
                    match event {
                        WindowEvent::CloseRequested => {
                            tracing::info!("window close requested");
                            target.exit();
                        }
                        WindowEvent::KeyboardInput { event, .. } => {
                            engine.platform.handle_key(&event);
                            if engine.platform.quit_requested() {
                                tracing::info!("quit key pressed");
                                target.exit();
                            }
                        }
                        WindowEvent::Focused(false) => engine.platform.focus_lost(),
                        WindowEvent::Resized(size) => {
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(size);
                            }
                        }
                        WindowEvent::ScaleFactorChanged {
                            mut inner_size_writer,
                            ..
                        } => {
                            let new_size = window.inner_size();
                            let _ = inner_size_writer.request_inner_size(new_size);
                            if let Some(renderer) = renderer.as_mut() {
                                renderer.resize(new_size);
                            }
                        }
                        WindowEvent::RedrawRequested => {
                            if let Some(renderer) = renderer.as_mut() {
                                let now = Instant::now();
                                let delta = now.duration_since(last_frame);
                                last_frame = now;

                                engine.tick(delta);
                                match renderer.render(&engine.scene, &engine.ui_elements) {
                                    Ok(()) => {}
                                    Err(SurfaceError::Lost | SurfaceError::Outdated) => {
                                        renderer.resize(window.inner_size());
                                    }
                                    Err(SurfaceError::OutOfMemory) => {
                                        tracing::error!("GPU out of memory, shutting down engine");
                                        target.exit();
                                    }
                                    Err(SurfaceError::Timeout) => {
                                        tracing::warn!("surface timeout, retrying next frame");
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            })
            .map_err(|err| anyhow!(err))?;

        tracing::info!(target: "engine", "Engine shutdown complete");
        Ok(())
    }

    fn tick(&mut self, delta: std::time::Duration) {
        self.timestep.accumulate(delta.as_secs_f32());
        let mut steps = 0u32;
        while self.timestep.should_step() {
            self.game.frame(self.platform.input(), &mut self.scene);
            for cue in self.game.drain_sound_cues() {
                self.audio.play_effect(cue);
            }
            self.platform.end_tick();
            steps += 1;
        }
        if steps > 0 {
            self.ui_elements = self.game.ui_elements();
        }
        tracing::trace!(
            target: "engine",
            frame_delta_ms = %delta.as_millis(),
            steps,
            scene_nodes = self.scene.len(),
            texture_count = self.resources.texture_count(),
            uptime_s = self.platform.uptime().as_secs(),
            "frame tick"
        );
    }
}

/// Runs `game` for `ticks` frames without a window, feeding the same input
/// each tick. Used by headless checks and tests.
pub fn step_headless(game: &mut dyn Game, input: &mut InputState, scene: &mut SceneGraph, ticks: u32) {
    for _ in 0..ticks {
        game.frame(input, scene);
        input.end_tick();
    }
}
