use std::collections::VecDeque;

use crate::core::{Notification, OffscreenSurface, Result};
use crate::traits::{Dispatch, Platform, Present, PumpOutcome};

/// Presenter that keeps a copy of the last frame it was asked to show
#[derive(Debug, Default)]
pub struct CapturePresenter {
    frames: u64,
    last_frame: Vec<u8>,
    last_size: (u32, u32),
}

impl CapturePresenter {
    /// Number of frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Bytes of the last presented frame (empty before the first present)
    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    pub fn last_size(&self) -> (u32, u32) {
        self.last_size
    }
}

impl Present for CapturePresenter {
    fn present(&mut self, surface: &OffscreenSurface) -> Result<()> {
        self.last_frame.clear();
        self.last_frame.extend_from_slice(surface.pixels());
        self.last_size = surface.dimensions();
        self.frames += 1;
        Ok(())
    }
}

/// In-memory window: notifications are injected by the caller instead of
/// coming from a window system. Used by tests and benchmarks, and anywhere
/// no display is available.
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    pending: VecDeque<Notification>,
    presenter: CapturePresenter,
    title: String,
    quitting: bool,
    exited: bool,
    releases: u32,
    client_size: Option<(u32, u32)>,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a granted client size other than the configured one
    pub fn with_client_size(mut self, width: u32, height: u32) -> Self {
        self.client_size = Some((width, height));
        self
    }

    /// Queue a notification for the next pump
    pub fn inject(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }

    pub fn inject_all(&mut self, notifications: impl IntoIterator<Item = Notification>) {
        self.pending.extend(notifications);
    }

    /// End the message loop from outside, as an externally posted quit does.
    /// Notifications already injected are still delivered first.
    pub fn post_quit(&mut self) {
        self.quitting = true;
    }

    /// Notifications not yet pumped
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn capture(&self) -> &CapturePresenter {
        &self.presenter
    }

    /// How many times `release` was called, repeats included
    pub fn release_count(&self) -> u32 {
        self.releases
    }

    pub fn is_released(&self) -> bool {
        self.releases > 0
    }
}

impl Platform for HeadlessPlatform {
    type Presenter = CapturePresenter;

    fn pump<F>(&mut self, mut dispatch: F) -> PumpOutcome
    where
        F: FnMut(Notification, &mut CapturePresenter) -> Dispatch,
    {
        if self.exited {
            return PumpOutcome::Exit;
        }
        while let Some(notification) = self.pending.pop_front() {
            if dispatch(notification, &mut self.presenter) == Dispatch::Quit {
                self.quitting = true;
            }
        }
        if self.quitting {
            self.exited = true;
            return PumpOutcome::Exit;
        }
        PumpOutcome::Continue
    }

    fn presenter(&mut self) -> &mut CapturePresenter {
        &mut self.presenter
    }

    fn client_size(&self) -> Option<(u32, u32)> {
        self.client_size
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    fn release(&mut self) {
        if self.releases == 0 {
            self.pending.clear();
            self.exited = true;
        }
        self.releases += 1;
    }
}
