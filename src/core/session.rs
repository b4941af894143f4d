use super::clock::Clock;
use super::error::Result;
use super::event::Event;
use super::event_queue::Drain;
use super::state::SessionState;
use super::surface::OffscreenSurface;
use super::translator;
use crate::config::DisplayConfig;
use crate::platform::WinitPlatform;
use crate::traits::{Platform, Present, PumpOutcome};

/// Observable lifecycle of a live session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    /// Close was requested; the flag never clears
    Closing,
}

/// One open window: platform backend, off-screen surface, event queue,
/// mouse and close state, and the session clock.
///
/// Dropping the session (or calling [`Session::destroy`]) releases the
/// surface, drawing context and window in that order.
pub struct Session<P: Platform = WinitPlatform> {
    platform: P,
    state: SessionState,
    title: String,
    clock: Clock,
    released: bool,
}

impl Session<WinitPlatform> {
    /// Open a desktop window described by `config`
    pub fn create(config: &DisplayConfig) -> Result<Self> {
        let platform = WinitPlatform::open(config)?;
        Self::with_platform(platform, config)
    }
}

impl<P: Platform> Session<P> {
    /// Build a session on top of an already opened backend
    pub fn with_platform(platform: P, config: &DisplayConfig) -> Result<Self> {
        config.validate()?;
        let (width, height) = match platform.client_size() {
            Some((w, h)) if w > 0 && h > 0 => (w, h),
            _ => (config.width, config.height),
        };
        if (width, height) != (config.width, config.height) {
            log::debug!(
                "window granted {}x{} instead of {}x{}",
                width,
                height,
                config.width,
                config.height
            );
        }
        let state = SessionState::new(width, height, config.queue_capacity)?;
        log::debug!(
            "session created: \"{}\" {}x{}, queue capacity {}",
            config.title,
            width,
            height,
            state.queue().capacity()
        );
        Ok(Self {
            platform,
            state,
            title: config.title.clone(),
            clock: Clock::new(),
            released: false,
        })
    }

    /// Drain all pending platform notifications into the event queue.
    ///
    /// Returns `true` once close has been requested, and keeps returning
    /// `true` on every later call.
    pub fn poll_events(&mut self) -> bool {
        let state = &mut self.state;
        let outcome = self
            .platform
            .pump(|notification, presenter| translator::translate(notification, state, presenter));
        if outcome == PumpOutcome::Exit {
            self.state.request_close();
        }
        self.state.should_close()
    }

    pub fn has_events(&self) -> bool {
        self.state.queue().has_pending()
    }

    pub fn pop_event(&mut self) -> Option<Event> {
        self.state.queue_mut().pop()
    }

    /// Pop queued events until none are left
    pub fn events(&mut self) -> Drain<'_> {
        self.state.queue_mut().drain()
    }

    /// Copy a full BGRA frame into the off-screen surface and show it.
    ///
    /// `pixels` must be exactly `width * height * 4` bytes for the current
    /// surface size; otherwise nothing is written or shown.
    pub fn blit(&mut self, pixels: &[u8]) -> Result<()> {
        self.state.surface_mut().write(pixels)?;
        self.present()
    }

    /// Show the off-screen surface as it is now
    pub fn present(&mut self) -> Result<()> {
        self.platform.presenter().present(self.state.surface())
    }

    pub fn surface(&self) -> &OffscreenSurface {
        self.state.surface()
    }

    /// Off-screen surface for renderers that draw in place; follow with
    /// [`Session::present`].
    pub fn surface_mut(&mut self) -> &mut OffscreenSurface {
        self.state.surface_mut()
    }

    /// Current surface dimensions
    pub fn size(&self) -> (u32, u32) {
        self.state.surface().dimensions()
    }

    /// Seconds since the session was created
    pub fn time(&self) -> f64 {
        self.clock.seconds()
    }

    /// Last known cursor position
    pub fn mouse(&self) -> (i32, i32) {
        self.state.mouse().position()
    }

    /// Pressed mouse buttons, one bit per button
    pub fn mouse_buttons(&self) -> u8 {
        self.state.mouse().buttons()
    }

    pub fn should_close(&self) -> bool {
        self.state.should_close()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.state.should_close() {
            Lifecycle::Closing
        } else {
            Lifecycle::Created
        }
    }

    /// Events lost because the queue was full
    pub fn dropped_events(&self) -> u64 {
        self.state.queue().dropped()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.platform.set_title(title);
        self.title = title.to_owned();
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Close the window and release everything the session owns
    pub fn destroy(self) {
        drop(self);
    }

    fn release(&mut self) {
        if !self.released {
            self.platform.release();
            self.released = true;
            log::debug!("session \"{}\" destroyed", self.title);
        }
    }
}

impl<P: Platform> Drop for Session<P> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{keys, Notification};
    use crate::platform::HeadlessPlatform;

    fn session(width: u32, height: u32) -> Session<HeadlessPlatform> {
        let config = DisplayConfig::new("test", width, height);
        Session::with_platform(HeadlessPlatform::new(), &config).unwrap()
    }

    #[test]
    fn test_new_session_state() {
        let session = session(320, 240);
        assert_eq!(session.size(), (320, 240));
        assert_eq!(session.mouse(), (0, 0));
        assert!(!session.should_close());
        assert!(!session.has_events());
        assert_eq!(session.lifecycle(), Lifecycle::Created);
        assert_eq!(session.title(), "test");
    }

    #[test]
    fn test_surface_matches_granted_client_size() {
        let config = DisplayConfig::new("tiled", 800, 600);
        let platform = HeadlessPlatform::new().with_client_size(1024, 700);
        let mut session = Session::with_platform(platform, &config).unwrap();

        assert_eq!(session.size(), (1024, 700));
        assert!(session.blit(&vec![0; 1024 * 700 * 4]).is_ok());
    }

    #[test]
    fn test_unknown_or_empty_client_size_keeps_config() {
        let config = DisplayConfig::new("minimized", 64, 32);
        let platform = HeadlessPlatform::new().with_client_size(0, 0);
        let session = Session::with_platform(platform, &config).unwrap();
        assert_eq!(session.size(), (64, 32));
    }

    #[test]
    fn test_zero_size_fails() {
        let config = DisplayConfig::new("bad", 0, 240);
        assert!(Session::with_platform(HeadlessPlatform::new(), &config).is_err());
    }

    #[test]
    fn test_poll_translates_in_order() {
        let mut session = session(64, 64);
        session.platform_mut().inject(Notification::Key {
            key: keys::SPACE,
            pressed: true,
        });
        session
            .platform_mut()
            .inject(Notification::CursorMoved { x: 1, y: 2 });

        assert!(!session.poll_events());
        assert_eq!(session.pop_event(), Some(Event::KeyDown { key: keys::SPACE }));
        assert_eq!(session.pop_event(), Some(Event::MouseMove { x: 1, y: 2 }));
        assert_eq!(session.pop_event(), None);
    }

    #[test]
    fn test_platform_exit_closes_session() {
        let mut session = session(64, 64);
        session.platform_mut().post_quit();
        assert!(session.poll_events());
        assert_eq!(session.lifecycle(), Lifecycle::Closing);
        assert!(!session.has_events());
    }

    #[test]
    fn test_set_title_reaches_platform() {
        let mut session = session(64, 64);
        session.set_title("renamed");
        assert_eq!(session.title(), "renamed");
        assert_eq!(session.platform().title(), "renamed");
    }

    #[test]
    fn test_drop_releases_platform_once() {
        let mut session = session(8, 8);
        session.release();
        session.release();
        assert_eq!(session.platform().release_count(), 1);
    }
}
