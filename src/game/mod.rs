pub mod board;
pub mod flood;
pub mod state;
pub mod timestep;
pub mod win;

pub use state::Game;
