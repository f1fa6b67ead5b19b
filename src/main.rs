use anyhow::Result;
use piccolo::engine::audio::AudioEngine;
use piccolo::engine::resources::ResourceManager;
use piccolo::engine::EngineApp;
use piccolo::{GameConfig, PiccoloGame};

fn main() -> Result<()> {
    init_tracing();

    let config = GameConfig::load_default()?;
    let mut resources = ResourceManager::new(&config.assets.root);
    let game = PiccoloGame::new(&config, &mut resources);
    let audio = AudioEngine::new(&config.assets.root, &config.audio);

    let app = EngineApp::new(config.engine_config(), game, resources, audio);
    app.run()
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
