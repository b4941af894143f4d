use crate::core::{Notification, OffscreenSurface, Result};

/// What the translator asks of the backend after one notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Continue,
    /// Stop the platform message loop
    Quit,
}

/// Result of draining the platform's pending notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpOutcome {
    Continue,
    /// The message loop has ended; no more notifications will arrive
    Exit,
}

/// Copies an off-screen surface onto the visible window
pub trait Present {
    /// Show the surface pixel for pixel, unscaled
    fn present(&mut self, surface: &OffscreenSurface) -> Result<()>;
}

/// Window-system backend owned by a session.
///
/// The session never sees backend types. Notifications are handed to the
/// `dispatch` callback one at a time, in arrival order, on the caller's
/// thread, together with the presenter so a repaint can be served inline.
pub trait Platform {
    type Presenter: Present;

    /// Deliver every notification that is pending right now, then return.
    /// Never waits for new ones.
    fn pump<F>(&mut self, dispatch: F) -> PumpOutcome
    where
        F: FnMut(Notification, &mut Self::Presenter) -> Dispatch;

    fn presenter(&mut self) -> &mut Self::Presenter;

    /// Client area size the window system actually granted, when it is
    /// known. Compositors and tiling managers may override the requested
    /// size before the first poll.
    fn client_size(&self) -> Option<(u32, u32)> {
        None
    }

    fn set_title(&mut self, title: &str);

    /// Release the surface, drawing context and window, in that order.
    /// Safe to call more than once.
    fn release(&mut self);
}
