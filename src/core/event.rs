use super::keys::Key;

/// Mouse button identifier (1 = left, 2 = middle, 3 = right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Numeric id as delivered to applications
    pub const fn id(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Middle => 2,
            Self::Right => 3,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            _ => None,
        }
    }

    /// Bit this button occupies in the pressed-buttons mask
    pub const fn mask(self) -> u8 {
        1 << (self.id() - 1)
    }
}

/// Decoded, platform-independent input or lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    KeyDown { key: Key },
    KeyUp { key: Key },
    MousePress { button: MouseButton, x: i32, y: i32 },
    MouseRelease { button: MouseButton, x: i32, y: i32 },
    MouseMove { x: i32, y: i32 },
    Close,
    Resize { width: u32, height: u32 },
}

/// Event discriminant. `None` is what an empty queue yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    None,
    KeyDown,
    KeyUp,
    MousePress,
    MouseRelease,
    MouseMove,
    Close,
    Resize,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::KeyUp { .. } => EventKind::KeyUp,
            Self::MousePress { .. } => EventKind::MousePress,
            Self::MouseRelease { .. } => EventKind::MouseRelease,
            Self::MouseMove { .. } => EventKind::MouseMove,
            Self::Close => EventKind::Close,
            Self::Resize { .. } => EventKind::Resize,
        }
    }

    /// Cursor position carried by mouse events
    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            Self::MousePress { x, y, .. }
            | Self::MouseRelease { x, y, .. }
            | Self::MouseMove { x, y } => Some((x, y)),
            _ => None,
        }
    }

    /// Key code carried by keyboard events
    pub fn key(&self) -> Option<Key> {
        match *self {
            Self::KeyDown { key } | Self::KeyUp { key } => Some(key),
            _ => None,
        }
    }
}

impl From<Option<Event>> for EventKind {
    fn from(event: Option<Event>) -> Self {
        event.map_or(EventKind::None, |e| e.kind())
    }
}
