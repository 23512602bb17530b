pub mod button;
pub mod handler;

pub use handler::{handle_event, InputState};
