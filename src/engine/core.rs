#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub app_name: String,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Piccolo".to_string(),
            window_width: 800,
            window_height: 400,
            target_fps: 60,
        }
    }
}

/// Upper bound on ticks run for a single redraw after a stall.
const MAX_CATCH_UP_STEPS: u32 = 5;

pub struct FixedTimestep {
    frame_duration: f32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn from_fps(fps: u32) -> Self {
        let frame_duration = 1.0 / fps.max(1) as f32;
        Self {
            frame_duration,
            accumulator: 0.0,
        }
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn accumulate(&mut self, delta: f32) {
        let cap = self.frame_duration * MAX_CATCH_UP_STEPS as f32;
        self.accumulator = (self.accumulator + delta).min(cap);
    }

    pub fn should_step(&mut self) -> bool {
        if self.accumulator >= self.frame_duration {
            self.accumulator -= self.frame_duration;
            true
        } else {
            false
        }
    }
}
