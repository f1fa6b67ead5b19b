/// Keys the engine tracks; everything else on the keyboard is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    Digit(u8),
}

const KEY_COUNT: usize = 16;

impl Key {
    const fn index(self) -> usize {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Up => 2,
            Key::Down => 3,
            Key::Space => 4,
            Key::Escape => 5,
            Key::Digit(d) => 6 + (d % 10) as usize,
        }
    }
}

/// Held and just-pressed key state for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: [bool; KEY_COUNT],
    pressed: [bool; KEY_COUNT],
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        let idx = key.index();
        if !self.held[idx] {
            self.pressed[idx] = true;
        }
        self.held[idx] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Drops every held key, e.g. when the window stops receiving key-up events.
    pub fn release_all(&mut self) {
        self.held = [false; KEY_COUNT];
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed[key.index()]
    }

    /// First digit pressed this tick, if any.
    pub fn pressed_digit(&self) -> Option<u8> {
        (0..10).find(|d| self.just_pressed(Key::Digit(*d)))
    }

    /// Clears edge-triggered state once a tick has consumed it.
    pub fn end_tick(&mut self) {
        self.pressed = [false; KEY_COUNT];
    }

    pub fn with_held(mut self, key: Key) -> Self {
        self.held[key.index()] = true;
        self
    }

    pub fn with_pressed(mut self, key: Key) -> Self {
        self.press(key);
        self
    }
}
