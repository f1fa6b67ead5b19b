//! Frame-stepped jump integrator. All values are whole pixels; positive y
//! points down, so rising means a negative `gravity`.

use crate::config::PhysicsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Rising,
    Falling,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jump {
    pub phase: JumpPhase,
    /// Signed per-frame vertical step.
    pub gravity: i32,
}

impl Jump {
    pub fn start(&mut self) {
        self.phase = JumpPhase::Rising;
    }

    pub fn is_rising(&self) -> bool {
        self.phase == JumpPhase::Rising
    }

    pub fn is_falling(&self) -> bool {
        self.phase == JumpPhase::Falling
    }

    /// Advances one frame, moving `bottom` and landing it on the rest line.
    pub fn step(&mut self, bottom: &mut i32, physics: &PhysicsConfig) {
        let rest = physics.rest();

        if self.is_rising() {
            self.gravity -= physics.jump_step;
            *bottom += self.gravity;
        }
        if self.gravity <= physics.gravity_max {
            // Apex reached: cancel the overshooting step and turn around.
            *bottom -= self.gravity;
            self.phase = JumpPhase::Falling;
        }
        if self.is_falling() {
            self.gravity += physics.jump_step;
            *bottom += self.gravity;
        }
        if self.is_falling() && *bottom >= rest {
            *bottom = rest;
            self.phase = JumpPhase::Grounded;
            self.gravity = 0;
        }
    }
}
