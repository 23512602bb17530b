use std::time::Duration;

use ratatui::style::Color;

pub const BOARD_WIDTH: usize = 14;
pub const BOARD_HEIGHT: usize = 14;
pub const MAX_BOARD_SIDE: usize = 64;

// Simulation rate: one update every 1000/30 ms
pub const TICK_RATE_HZ: u32 = 30;

// Upper bound on how long a frame waits for input before redrawing
pub const FRAME_WAIT: Duration = Duration::from_millis(16);

// Fallback release for Enter when the terminal can't report key releases (milliseconds)
pub const KEY_TIMEOUT: u64 = 250;

pub const PALETTE: [Color; 8] = [
    Color::Rgb(255, 100, 100),
    Color::Rgb(0, 100, 200),
    Color::Rgb(200, 200, 0),
    Color::Rgb(0, 200, 0),
    Color::Rgb(100, 0, 200),
    Color::Rgb(255, 0, 0),
    Color::Rgb(255, 255, 128),
    Color::Rgb(155, 128, 255),
];

pub const HOVER_RGB: (u8, u8, u8) = (255, 255, 255);
