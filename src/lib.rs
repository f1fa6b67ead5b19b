pub mod config;
pub mod engine;
pub mod game;
pub mod ui;

pub use config::GameConfig;
pub use game::PiccoloGame;
