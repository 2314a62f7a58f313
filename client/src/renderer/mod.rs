mod renderthing;

use std::{cell::RefCell, rc::Rc};

use libgame::board::{GameBoard, TileState};
use renderthing::{
    Renderer,
    frame::{Color, RenderFrame},
    text::{FONT_HEIGHT, text_width},
    window::RendererWindowConfig,
};
use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{Key, NamedKey},
};

use crate::{
    State,
    config::Config,
    screen::{Screen, ScreenEvent},
};

/// Distance between the top-left corners of neighboring cells.
pub const GRID_SPACING: u32 = 12;
const CELL_WIDTH: u32 = 10;
const CELL_HEIGHT: u32 = 10;

const BACKGROUND_COLOR: Color = [200, 200, 200, 255];
const ALIVE_COLOR: Color = [253, 249, 0, 255];
const DEAD_COLOR: Color = [130, 130, 130, 255];
const TEXT_COLOR: Color = [0, 0, 0, 255];

const HEADING_SCALE: u32 = 6;
const SUBTITLE_SCALE: u32 = 3;

pub fn run(state: State, config: &Config) -> anyhow::Result<()> {
    let state_rc = Rc::new(RefCell::new(state));
    let draw_state_rc = state_rc.clone();
    let event_state_rc = state_rc;

    let renderer = Renderer::new(RendererWindowConfig {
        title: "The Game of Life".to_owned(),
        width: config.screen_width,
        height: config.screen_height,
        target_fps: config.target_fps,
        draw_callback: Box::new(move |mut frame| {
            let mut state = draw_state_rc.borrow_mut();
            draw(&mut state, &mut frame);
        }),
        event_callback: Some(Box::new(move |event| {
            let mut state = event_state_rc.borrow_mut();
            on_event(&mut state, event);
        })),
    })?;

    renderer.run()
}

fn draw(state: &mut State, frame: &mut RenderFrame) {
    frame.fill(BACKGROUND_COLOR);

    match state.screen {
        Screen::MainMenu => draw_menu(frame),
        Screen::Simulation => draw_board(&state.game.board, frame),
    }

    if state.screen.runs_simulation() {
        state.game.tick();
    }
}

fn draw_board(board: &GameBoard, frame: &mut RenderFrame) {
    for (tile_pos, tile) in board.enumerate_tiles() {
        let tile_screen_x = (tile_pos.col as u32 + 1) * GRID_SPACING;
        let tile_screen_y = (tile_pos.row as u32 + 1) * GRID_SPACING;

        let color = match tile {
            TileState::Alive => ALIVE_COLOR,
            TileState::Dead => DEAD_COLOR,
        };

        frame.draw_square(tile_screen_x, tile_screen_y, CELL_WIDTH, CELL_HEIGHT, color);
    }
}

fn draw_menu(frame: &mut RenderFrame) {
    let center_y = frame.height / 2;

    let mut draw_centered = |text: &str, y: u32, scale: u32| {
        let x = frame.width.saturating_sub(text_width(text, scale)) / 2;
        frame.draw_text(text, x, y, scale, TEXT_COLOR);
    };

    draw_centered(
        "MAIN MENU",
        center_y.saturating_sub(FONT_HEIGHT * HEADING_SCALE + 10),
        HEADING_SCALE,
    );
    draw_centered("PRESS ENTER TO START", center_y + 20, SUBTITLE_SCALE);
}

fn on_event(state: &mut State, event: &WindowEvent) {
    if let Some(screen_event) = screen_event(event) {
        let next_screen = state.screen.transition(screen_event);
        log::info!(
            "Switching from {:?} to {:?} at generation {}",
            state.screen,
            next_screen,
            state.game.generation
        );
        state.screen = next_screen;
    }
}

fn screen_event(event: &WindowEvent) -> Option<ScreenEvent> {
    let WindowEvent::KeyboardInput { event, .. } = event else {
        return None;
    };

    let enter_pressed = event.state == ElementState::Pressed
        && !event.repeat
        && event.logical_key == Key::Named(NamedKey::Enter);

    enter_pressed.then_some(ScreenEvent::Toggle)
}
