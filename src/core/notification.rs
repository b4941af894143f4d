use super::event::MouseButton;
use super::keys::Key;

/// Raw window-system notification, already lifted out of the backend's own
/// types but not yet translated into an [`Event`](super::event::Event).
///
/// Backends map everything they receive onto this closed set; anything with
/// no meaning here becomes `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The user asked to close the window
    CloseRequested,
    /// The window is gone; the message loop should stop
    Destroyed,
    Key { key: Key, pressed: bool },
    Button { button: MouseButton, pressed: bool, x: i32, y: i32 },
    CursorMoved { x: i32, y: i32 },
    Resized { width: u32, height: u32 },
    /// The window system wants the visible contents repainted
    RedrawRequested,
    Other,
}
