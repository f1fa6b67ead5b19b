use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input::{InputState, Key};

#[derive(Debug)]
pub struct PlatformLayer {
    boot_timestamp: std::time::Instant,
    input: InputState,
}

impl PlatformLayer {
    pub fn new() -> Self {
        Self {
            boot_timestamp: std::time::Instant::now(),
            input: InputState::default(),
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(key) = map_key(code) else {
            return;
        };
        match event.state {
            ElementState::Pressed => self.input.press(key),
            ElementState::Released => self.input.release(key),
        }
        tracing::trace!(?key, state = ?event.state, "key event");
    }

    pub fn focus_lost(&mut self) {
        self.input.release_all();
        tracing::debug!("window lost focus, released held keys");
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn end_tick(&mut self) {
        self.input.end_tick();
    }

    pub fn quit_requested(&self) -> bool {
        self.input.just_pressed(Key::Escape)
    }

    pub fn uptime(&self) -> std::time::Duration {
        self.boot_timestamp.elapsed()
    }
}

impl Default for PlatformLayer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Digit(0),
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Digit(1),
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Digit(2),
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Digit(3),
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Digit(4),
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Digit(5),
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Digit(6),
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Digit(7),
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::Digit(8),
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::Digit(9),
        _ => return None,
    };
    Some(key)
}
