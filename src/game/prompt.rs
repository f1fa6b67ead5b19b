use crate::ui::{Color, Rect, UiElement};

use super::scene::{Floor, Scene};

const PANEL_COLOR: Color = Color::rgba(0.08, 0.08, 0.12, 0.85);
const BUTTON_COLOR: Color = Color::rgba(0.28, 0.31, 0.51, 0.9);
const CURRENT_COLOR: Color = Color::rgba(0.62, 0.36, 0.94, 0.92);
const NO_LANDING_COLOR: Color = Color::rgba(0.2, 0.2, 0.22, 0.6);

/// Floor picker shown while the player stands in the closed elevator car.
#[derive(Debug, Clone)]
pub struct ElevatorPrompt {
    pub title: &'static str,
    screen_width: f32,
    button_size: f32,
    spacing: f32,
    top: f32,
}

impl ElevatorPrompt {
    pub fn new(screen_width: i32) -> Self {
        Self {
            title: "SELECT FLOOR",
            screen_width: screen_width as f32,
            button_size: 28.0,
            spacing: 8.0,
            top: 24.0,
        }
    }

    /// Floor the car is at while the prompt should be shown.
    pub fn active_floor(scene: Scene) -> Option<Floor> {
        match scene {
            Scene::ElevatorFloor(floor) => Some(floor),
            _ => None,
        }
    }

    pub fn is_visible(scene: Scene) -> bool {
        Self::active_floor(scene).is_some()
    }

    pub fn elements(&self, scene: Scene) -> Vec<UiElement> {
        let Some(current) = Self::active_floor(scene) else {
            return Vec::new();
        };

        let count = Floor::all().count() as f32;
        let row_width = count * self.button_size + (count - 1.0) * self.spacing;
        let padding = 16.0;
        let panel = Rect::new(
            (self.screen_width - row_width) / 2.0 - padding,
            self.top,
            row_width + padding * 2.0,
            self.button_size + 48.0,
        );

        let mut elements = vec![UiElement::panel(self.title, panel, PANEL_COLOR)];
        let row_y = panel.y + panel.height - self.button_size - padding / 2.0;
        for (idx, floor) in Floor::all().enumerate() {
            let x = panel.x + padding + idx as f32 * (self.button_size + self.spacing);
            let color = if floor == current {
                CURRENT_COLOR
            } else if floor.has_corridors() || floor.number() == 1 {
                BUTTON_COLOR
            } else {
                NO_LANDING_COLOR
            };
            elements.push(UiElement::button(
                floor.number().to_string(),
                Rect::new(x, row_y, self.button_size, self.button_size),
                color,
            ));
        }
        elements
    }
}
