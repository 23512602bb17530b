use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::{self, stdout, Stdout, Write},
    process,
    time::{Duration, Instant},
};
use tracing::{info, trace};

mod config;
mod constants;
mod error;
mod game;
mod input;
mod logging;
mod ui;

use config::Config;
use constants::FRAME_WAIT;
use error::AppError;
use game::state::{GameState, InputSnapshot, StopReason};
use game::timestep::FixedTimestep;
use game::Game;
use input::{handle_event, InputState};
use ui::layout::screen_layout;
use ui::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() {
    let config = Config::parse();

    match run(&config) {
        Ok(Some(moves)) => {
            println!("You Won!!");
            println!("Moves: {moves}");
        }
        Ok(None) => {}
        Err(err) => {
            eprintln!("floodit: {err}");
            process::exit(1);
        }
    }
}

/// Plays one session. Returns the move count when the board was solved.
fn run(config: &Config) -> Result<Option<u32>, AppError> {
    logging::init(config.log_file.as_deref())?;

    let mut game = Game::new(config.board_settings(), config.rng());
    let mut input = InputState::new();

    let (mut terminal, keyboard_enhancement_active) = setup_terminal().map_err(AppError::TerminalInit)?;
    input.keyboard_enhancement_active = keyboard_enhancement_active;
    info!(keyboard_enhancement_active, tick_rate = config.tick_rate, "terminal ready");

    let result = game_loop(&mut terminal, &mut game, &mut input, config.tick_rate);

    // Always give the terminal back, even when the loop failed
    let restored = restore_terminal(&mut terminal, keyboard_enhancement_active);
    result?;
    restored?;

    info!(moves = game.moves, reason = ?game.stop_reason, "game over");
    Ok(match game.stop_reason {
        Some(StopReason::Won) => Some(game.moves),
        _ => None,
    })
}

fn setup_terminal() -> io::Result<(Tui, bool)> {
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange) {
        let _ = terminal::disable_raw_mode();
        return Err(err);
    }

    // Key release events let Enter re-arm as soon as it is let go
    let keyboard_enhancement_active = matches!(
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        ),
        Ok(())
    );

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok((terminal, keyboard_enhancement_active)),
        Err(err) => {
            let _ = reset_terminal_modes(&mut io::stdout(), keyboard_enhancement_active);
            let _ = terminal::disable_raw_mode();
            Err(err)
        }
    }
}

/// Leaves every mode `setup_terminal` turned on, apart from raw mode.
fn reset_terminal_modes<W: Write>(out: &mut W, keyboard_enhancement_active: bool) -> io::Result<()> {
    if keyboard_enhancement_active {
        execute!(out, PopKeyboardEnhancementFlags)?;
    }
    execute!(out, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen)
}

fn restore_terminal(terminal: &mut Tui, keyboard_enhancement_active: bool) -> io::Result<()> {
    reset_terminal_modes(terminal.backend_mut(), keyboard_enhancement_active)?;
    terminal::disable_raw_mode()?;
    terminal.show_cursor()?;
    Ok(())
}

fn game_loop(terminal: &mut Tui, game: &mut Game, input: &mut InputState, tick_rate: u32) -> Result<(), AppError> {
    let mut timestep = FixedTimestep::from_rate(tick_rate, Instant::now());

    while game.is_running() {
        // Frame pacing: wakes early when input arrives
        let mut events = Vec::new();
        if event::poll(FRAME_WAIT)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        let steps = timestep.advance(Instant::now());
        let report = run_frame(terminal, game, input, events, steps)?;
        trace!(
            steps,
            updates = report.updates,
            drawn = report.drawn,
            lag_us = timestep.lag().as_micros() as u64,
            "frame"
        );
    }

    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct FrameReport {
    updates: u32,
    drawn: bool,
}

/// One rendered frame: apply the drained events, run the owed updates, then draw
/// once. Nothing runs after the game stops.
fn run_frame<B: Backend>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    input: &mut InputState,
    events: Vec<Event>,
    steps: u32,
) -> io::Result<FrameReport> {
    let mut report = FrameReport::default();

    for event in events {
        if !game.is_running() {
            break;
        }
        let board_area = screen_layout(terminal.size()?, &game.board).board;
        handle_event(game, input, event, board_area);
    }

    for _ in 0..steps {
        if !game.is_running() {
            break;
        }
        input.check_timeouts();
        // A restarting game only rebuilds its board, so pending presses wait for the next update
        let snapshot = if game.game_state == GameState::Running {
            input.snapshot()
        } else {
            InputSnapshot::default()
        };
        game.update(&snapshot);
        report.updates += 1;
    }

    if game.is_running() {
        terminal.draw(|f| ui(f, game))?;
        report.drawn = true;
    }

    Ok(report)
}
