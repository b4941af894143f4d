use super::event::MouseButton;

/// Last known cursor position and pressed buttons.
///
/// Updated as notifications arrive, whether or not the matching event made
/// it into the queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseState {
    x: i32,
    y: i32,
    buttons: u8,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Pressed buttons, one bit per [`MouseButton::mask`]
    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    pub fn is_down(&self, button: MouseButton) -> bool {
        self.buttons & button.mask() != 0
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn press(&mut self, button: MouseButton, x: i32, y: i32) {
        self.buttons |= button.mask();
        self.move_to(x, y);
    }

    pub fn release(&mut self, button: MouseButton, x: i32, y: i32) {
        self.buttons &= !button.mask();
        self.move_to(x, y);
    }
}
