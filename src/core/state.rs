use super::error::Result;
use super::event_queue::EventQueue;
use super::mouse::MouseState;
use super::surface::OffscreenSurface;

/// Everything the translator writes: one per session.
#[derive(Debug)]
pub struct SessionState {
    pub(crate) queue: EventQueue,
    pub(crate) mouse: MouseState,
    pub(crate) surface: OffscreenSurface,
    pub(crate) should_close: bool,
}

impl SessionState {
    pub fn new(width: u32, height: u32, queue_capacity: usize) -> Result<Self> {
        Ok(Self {
            queue: EventQueue::with_capacity(queue_capacity),
            mouse: MouseState::new(),
            surface: OffscreenSurface::new(width, height)?,
            should_close: false,
        })
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut EventQueue {
        &mut self.queue
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    pub fn surface(&self) -> &OffscreenSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut OffscreenSurface {
        &mut self.surface
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Latch the close flag. It never clears.
    pub fn request_close(&mut self) {
        if !self.should_close {
            log::debug!("session closing");
        }
        self.should_close = true;
    }
}
