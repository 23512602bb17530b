use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::constants::KEY_TIMEOUT;
use crate::game::board::CellPos;
use crate::game::state::{Game, InputSnapshot};
use crate::input::button::ButtonState;
use crate::ui::layout::cell_at;

pub struct InputState {
    pub primary: ButtonState,
    pub restart: ButtonState,
    pub pointer: Option<CellPos>,
    pub keyboard_enhancement_active: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            primary: ButtonState::new(),
            restart: ButtonState::new(),
            pointer: None,
            keyboard_enhancement_active: false,
        }
    }

    /// Called once per simulation update.
    pub fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            pointer: self.pointer,
            primary_down: self.primary.sample(),
        }
    }

    // Without release events the restart key would stay latched forever.
    pub fn check_timeouts(&mut self) {
        if !self.keyboard_enhancement_active {
            let now = Instant::now();
            if self.restart.pressed
                && now.duration_since(self.restart.last_update) > Duration::from_millis(KEY_TIMEOUT)
            {
                self.restart.release();
            }
        }
    }

    fn set_pointer(&mut self, game: &mut Game, board_area: Rect, column: u16, row: u16) {
        self.pointer = cell_at(board_area, &game.board, column, row);
        game.set_hover(self.pointer);
    }
}

pub fn handle_event(game: &mut Game, input: &mut InputState, event: Event, board_area: Rect) {
    match event {
        Event::Key(key) => handle_key(game, input, key),
        Event::Mouse(mouse) => handle_mouse(game, input, mouse, board_area),
        Event::FocusLost => input.primary.release(),
        _ => {}
    }
}

fn handle_key(game: &mut Game, input: &mut InputState, key: KeyEvent) {
    let KeyEvent { code, modifiers, kind, .. } = key;

    match kind {
        KeyEventKind::Press | KeyEventKind::Repeat => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => game.quit(),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => game.quit(),
            KeyCode::Enter => {
                // One restart per press; held or repeating Enter does nothing more
                if !input.restart.pressed {
                    input.restart.press();
                    game.request_restart();
                } else {
                    input.restart.touch();
                }
            }
            _ => {}
        },
        KeyEventKind::Release => {
            if code == KeyCode::Enter {
                input.restart.release();
            }
        }
    }
}

fn handle_mouse(game: &mut Game, input: &mut InputState, mouse: MouseEvent, board_area: Rect) {
    let MouseEvent { kind, column, row, .. } = mouse;

    match kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            input.set_pointer(game, board_area, column, row);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            input.set_pointer(game, board_area, column, row);
            input.primary.press();
        }
        MouseEventKind::Up(MouseButton::Left) => {
            input.set_pointer(game, board_area, column, row);
            input.primary.release();
        }
        _ => {}
    }
}
