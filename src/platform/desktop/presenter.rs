use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::event_loop::OwnedDisplayHandle;
use winit::window::Window;

use crate::core::{DisplayError, OffscreenSurface, Result};
use crate::traits::Present;

/// softbuffer's pixel format is 0RGB; the top byte must be clear
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Copies the off-screen surface into a softbuffer surface, one pixel per
/// pixel, and presents it.
///
/// Every resource is optional so release can happen piecewise: surface,
/// then drawing context, then window. Presenting after release is a no-op.
pub struct SoftbufferPresenter {
    surface: Option<Surface<OwnedDisplayHandle, Arc<Window>>>,
    context: Option<Context<OwnedDisplayHandle>>,
    window: Option<Arc<Window>>,
    size: Option<(NonZeroU32, NonZeroU32)>,
}

impl SoftbufferPresenter {
    pub(crate) fn new(window: Arc<Window>, display: OwnedDisplayHandle) -> Result<Self> {
        let context = Context::new(display).map_err(|e| {
            DisplayError::AllocationFailure(format!("drawing context: {}", e))
        })?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| DisplayError::AllocationFailure(format!("window surface: {}", e)))?;

        Ok(Self {
            surface: Some(surface),
            context: Some(context),
            window: Some(window),
            size: None,
        })
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    pub(crate) fn release(&mut self) {
        if self.surface.take().is_some() {
            log::debug!("window surface released");
        }
        if self.context.take().is_some() {
            log::debug!("drawing context released");
        }
        if self.window.take().is_some() {
            log::debug!("window released");
        }
        self.size = None;
    }
}

impl Present for SoftbufferPresenter {
    fn present(&mut self, frame: &OffscreenSurface) -> Result<()> {
        let (Some(surface), Some(window)) = (self.surface.as_mut(), self.window.as_ref()) else {
            return Ok(());
        };
        let (Some(width), Some(height)) =
            (NonZeroU32::new(frame.width()), NonZeroU32::new(frame.height()))
        else {
            return Ok(());
        };

        // Resize only when the frame size changes
        if self.size != Some((width, height)) {
            surface
                .resize(width, height)
                .map_err(|e| DisplayError::Present(e.to_string()))?;
            self.size = Some((width, height));
        }

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| DisplayError::Present(e.to_string()))?;
        if buffer.len() != frame.pixel_count() {
            return Err(DisplayError::SizeMismatch {
                expected: buffer.len() * 4,
                actual: frame.buffer_size(),
            });
        }
        for (dst, src) in buffer.iter_mut().zip(frame.words()) {
            *dst = u32::from_le(*src) & RGB_MASK;
        }

        window.pre_present_notify();
        buffer
            .present()
            .map_err(|e| DisplayError::Present(e.to_string()))
    }
}
