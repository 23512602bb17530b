use std::time::Instant;

#[derive(Debug)]
pub struct ButtonState {
    pub pressed: bool,
    pub press_sampled: bool,
    pub last_update: Instant,
}

impl ButtonState {
    pub fn new() -> Self {
        Self {
            pressed: false,
            press_sampled: true,
            last_update: Instant::now(),
        }
    }

    pub fn press(&mut self) {
        self.pressed = true;
        self.press_sampled = false;
        self.last_update = Instant::now();
    }

    pub fn release(&mut self) {
        self.pressed = false;
        self.last_update = Instant::now();
    }

    pub fn touch(&mut self) {
        self.last_update = Instant::now();
    }

    /// Held state for one simulation update. A press released before any
    /// update saw it still reads as held once, so quick clicks aren't lost.
    pub fn sample(&mut self) -> bool {
        let held = self.pressed || !self.press_sampled;
        self.press_sampled = true;
        held
    }
}
