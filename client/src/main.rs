use std::env;

use anyhow::Context;
use config::Config;
use libgame::{Game, init};
use screen::Screen;

mod config;
mod renderer;
mod screen;

pub struct State {
    game: Game,
    screen: Screen,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| Config::DEFAULT_PATH.to_owned());
    let config = Config::load(&config_path);

    log::info!(
        "Canvas {}x{} at {} fps",
        config.screen_width,
        config.screen_height,
        config.target_fps
    );

    let board = init::initialize(
        config.screen_width,
        config.screen_height,
        renderer::GRID_SPACING,
    )
    .context("Invalid screen dimensions in config")?;

    log::info!(
        "Seeded a {}x{} board with {} live cells",
        board.rows(),
        board.cols(),
        board.alive_count()
    );

    let state = State {
        game: Game::new(board),
        screen: Screen::default(),
    };

    renderer::run(state, &config)
}
