use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::game::board::{Board, CellPos, ColorId};
use crate::game::flood::flood;
use crate::game::win::check_win;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Running,
    Restarting, // Board is rebuilt on the next update
    Stopped,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StopReason {
    Quit,
    Won,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BoardSettings {
    pub width: usize,
    pub height: usize,
    pub colors: usize,
}

/// Input device state as seen by a single simulation update.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct InputSnapshot {
    pub pointer: Option<CellPos>,
    pub primary_down: bool,
}

pub struct Game {
    pub board: Board,
    pub active_color: ColorId,
    pub moves: u32,
    pub game_state: GameState,
    pub stop_reason: Option<StopReason>,
    pub hover: Option<CellPos>, // Highlight only, never read by the simulation
    settings: BoardSettings,
    rng: StdRng,
}

impl Game {
    pub fn new(settings: BoardSettings, mut rng: StdRng) -> Self {
        let board = Board::random(settings.width, settings.height, settings.colors, &mut rng);
        info!(
            width = settings.width,
            height = settings.height,
            colors = settings.colors,
            "new board"
        );

        Self {
            active_color: board.origin_color(),
            board,
            moves: 0,
            game_state: GameState::Running,
            stop_reason: None,
            hover: None,
            settings,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.game_state != GameState::Stopped
    }

    /// Floods the origin region with `color`. Returns whether any cell changed;
    /// only changing fills count as moves.
    pub fn flood_from_origin(&mut self, color: ColorId) -> bool {
        let recolored = flood(&mut self.board, color, self.active_color);
        self.active_color = self.board.origin_color();

        if recolored == 0 {
            return false;
        }

        self.moves += 1;
        debug!(color, recolored, moves = self.moves, "flood");
        true
    }

    pub fn update(&mut self, input: &InputSnapshot) {
        match self.game_state {
            GameState::Stopped => return,
            GameState::Restarting => {
                self.reinit();
                return;
            }
            GameState::Running => {}
        }

        if !input.primary_down {
            return;
        }

        if let Some(pos) = input.pointer {
            let color = self.board.at(pos);
            self.flood_from_origin(color);

            if check_win(&self.board) {
                info!(moves = self.moves, "board solved");
                self.stop(StopReason::Won);
            }
        }
    }

    pub fn request_restart(&mut self) {
        if self.game_state == GameState::Running {
            info!(moves = self.moves, "restart requested");
            self.game_state = GameState::Restarting;
        }
    }

    pub fn quit(&mut self) {
        if self.is_running() {
            info!(moves = self.moves, "quit");
            self.stop(StopReason::Quit);
        }
    }

    pub fn set_hover(&mut self, hover: Option<CellPos>) {
        self.hover = hover;
    }

    fn stop(&mut self, reason: StopReason) {
        self.game_state = GameState::Stopped;
        self.stop_reason = Some(reason);
        self.hover = None;
    }

    fn reinit(&mut self) {
        let BoardSettings { width, height, colors } = self.settings;
        self.board = Board::random(width, height, colors, &mut self.rng);
        self.active_color = self.board.origin_color();
        self.moves = 0;
        self.game_state = GameState::Running;
        info!("board reinitialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const SETTINGS: BoardSettings = BoardSettings { width: 14, height: 14, colors: 8 };

    fn game_with(rows: &[Vec<ColorId>]) -> Game {
        let mut game = Game::new(
            BoardSettings { width: rows[0].len(), height: rows.len(), colors: 8 },
            StdRng::seed_from_u64(3),
        );
        game.board = Board::from_rows(rows, 8).unwrap();
        game.active_color = game.board.origin_color();
        game
    }

    fn click(row: usize, col: usize) -> InputSnapshot {
        InputSnapshot { pointer: Some(CellPos::new(row, col)), primary_down: true }
    }

    #[test]
    fn new_game_starts_running_with_origin_as_active_color() {
        let game = Game::new(SETTINGS, StdRng::seed_from_u64(9));

        assert_eq!(game.game_state, GameState::Running);
        assert_eq!(game.active_color, game.board.origin_color());
        assert_eq!(game.moves, 0);
        assert_eq!(game.board.width(), 14);
        assert_eq!(game.board.height(), 14);
    }

    #[test]
    fn noop_flood_does_not_count_as_move() {
        let mut game = game_with(&[vec![0; 3], vec![0; 3], vec![0, 0, 1]]);
        let before = game.board.clone();

        assert!(!game.flood_from_origin(0));
        assert_eq!(game.board, before);
        assert_eq!(game.moves, 0);
    }

    #[test]
    fn changing_flood_counts_and_tracks_active_color() {
        let mut game = game_with(&[vec![0, 1], vec![2, 2]]);

        assert!(game.flood_from_origin(2));
        assert_eq!(game.moves, 1);
        assert_eq!(game.active_color, 2);
        assert_eq!(game.active_color, game.board.origin_color());
    }

    #[test]
    fn clicking_winning_color_stops_game() {
        let mut game = game_with(&[vec![0, 0], vec![1, 1]]);

        game.update(&click(1, 0));

        assert!(game.board.is_uniform());
        assert_eq!(game.moves, 1);
        assert_eq!(game.game_state, GameState::Stopped);
        assert_eq!(game.stop_reason, Some(StopReason::Won));
    }

    #[test]
    fn checkerboard_click_keeps_running() {
        let mut game = game_with(&[vec![0, 1], vec![1, 0]]);

        game.update(&click(0, 1));

        assert_eq!(game.board.get(1, 1), Ok(0));
        assert_eq!(game.game_state, GameState::Running);
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn holding_button_on_same_cell_counts_once() {
        let mut game = game_with(&[vec![0, 1, 2], vec![2, 2, 2], vec![1, 1, 2]]);

        for _ in 0..5 {
            game.update(&click(0, 1));
        }
        assert_eq!(game.moves, 1);
    }

    #[test]
    fn update_without_button_or_pointer_does_nothing() {
        let mut game = game_with(&[vec![0, 1], vec![1, 1]]);
        let before = game.board.clone();

        game.update(&InputSnapshot { pointer: Some(CellPos::new(0, 1)), primary_down: false });
        game.update(&InputSnapshot { pointer: None, primary_down: true });

        assert_eq!(game.board, before);
        assert_eq!(game.game_state, GameState::Running);
    }

    #[test]
    fn restart_rebuilds_board_on_next_update() {
        let mut game = game_with(&[vec![0, 1], vec![1, 1]]);
        game.flood_from_origin(1);
        game.moves = 4;

        game.request_restart();
        assert_eq!(game.game_state, GameState::Restarting);

        game.update(&click(0, 0));
        assert_eq!(game.game_state, GameState::Running);
        assert_eq!(game.moves, 0);
        assert_eq!(game.active_color, game.board.origin_color());
    }

    #[test]
    fn quit_stops_from_running_and_restarting() {
        let mut game = Game::new(SETTINGS, StdRng::seed_from_u64(1));
        game.quit();
        assert_eq!(game.stop_reason, Some(StopReason::Quit));
        assert!(!game.is_running());

        let mut game = Game::new(SETTINGS, StdRng::seed_from_u64(1));
        game.request_restart();
        game.quit();
        assert_eq!(game.game_state, GameState::Stopped);
    }

    #[test]
    fn stopped_game_ignores_input() {
        let mut game = game_with(&[vec![0, 1], vec![1, 1]]);
        game.quit();
        let before = game.board.clone();

        game.update(&click(0, 1));
        game.request_restart();

        assert_eq!(game.board, before);
        assert_eq!(game.game_state, GameState::Stopped);
        assert_eq!(game.stop_reason, Some(StopReason::Quit));
    }
}
