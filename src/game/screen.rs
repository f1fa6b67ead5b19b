use crate::config::DisplayConfig;

use super::mediator::Mediator;

#[derive(Debug, Clone)]
pub struct Screen {
    pub caption: String,
    pub width: i32,
    pub height: i32,
}

impl Screen {
    pub fn new(config: &DisplayConfig, mediator: &mut Mediator) -> Self {
        let screen = Self {
            caption: config.caption.clone(),
            width: config.width,
            height: config.height,
        };
        mediator.notify("Screen was created.");
        screen
    }
}
