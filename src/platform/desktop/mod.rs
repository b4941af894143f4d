//! Desktop backend: a winit window presented through softbuffer.
//!
//! The event loop is never handed over with `run_app`. Each poll pumps it
//! with a zero timeout, so every pending window-system message is translated
//! on the caller's thread and control comes straight back. winit allows one
//! event loop per process, and some platforms require it on the main thread.

mod input_adapter;
mod presenter;

pub use input_adapter::InputAdapter;
pub use presenter::SoftbufferPresenter;

use std::sync::Arc;
use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::config::DisplayConfig;
use crate::core::{DisplayError, Notification, Result};
use crate::traits::{Dispatch, Platform, PumpOutcome};

/// How long window creation may wait for the first `resumed`
const CREATE_TIMEOUT: Duration = Duration::from_millis(100);

/// One native window with its event loop
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    window_id: WindowId,
    adapter: InputAdapter,
    presenter: SoftbufferPresenter,
    exited: bool,
}

impl WinitPlatform {
    /// Create the event loop, the window and its drawing surface
    pub fn open(config: &DisplayConfig) -> Result<Self> {
        let mut event_loop = EventLoop::new()
            .map_err(|e| DisplayError::AllocationFailure(format!("event loop: {}", e)))?;

        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        // Windows can only be created from inside the event loop. One pump
        // is enough for `resumed` to fire on desktop platforms.
        let mut creator = Creator {
            attrs: Some(attrs),
            result: None,
        };
        let _ = event_loop.pump_app_events(Some(CREATE_TIMEOUT), &mut creator);

        let presenter = creator.result.unwrap_or_else(|| {
            Err(DisplayError::AllocationFailure(
                "event loop never resumed; window not created".to_owned(),
            ))
        })?;
        let window_id = presenter
            .window()
            .map(|window| window.id())
            .ok_or_else(|| DisplayError::AllocationFailure("window missing".to_owned()))?;

        log::debug!(
            "opened window \"{}\" {}x{}",
            config.title,
            config.width,
            config.height
        );

        Ok(Self {
            event_loop,
            window_id,
            adapter: InputAdapter::new(),
            presenter,
            exited: false,
        })
    }

    /// The native window, until released
    pub fn window(&self) -> Option<&Arc<Window>> {
        self.presenter.window()
    }
}

impl Platform for WinitPlatform {
    type Presenter = SoftbufferPresenter;

    fn pump<F>(&mut self, mut dispatch: F) -> PumpOutcome
    where
        F: FnMut(Notification, &mut SoftbufferPresenter) -> Dispatch,
    {
        if self.exited {
            return PumpOutcome::Exit;
        }

        let mut pump = Pump {
            window_id: self.window_id,
            adapter: &mut self.adapter,
            presenter: &mut self.presenter,
            dispatch: &mut dispatch,
        };
        match self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut pump)
        {
            PumpStatus::Continue => PumpOutcome::Continue,
            PumpStatus::Exit(code) => {
                log::debug!("event loop exited with code {}", code);
                self.exited = true;
                PumpOutcome::Exit
            }
        }
    }

    fn presenter(&mut self) -> &mut SoftbufferPresenter {
        &mut self.presenter
    }

    fn client_size(&self) -> Option<(u32, u32)> {
        self.window().map(|window| {
            let size = window.inner_size();
            (size.width, size.height)
        })
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = self.presenter.window() {
            window.set_title(title);
        }
    }

    fn release(&mut self) {
        self.presenter.release();
    }
}

/// Handler for the creation pump
struct Creator {
    attrs: Option<WindowAttributes>,
    result: Option<Result<SoftbufferPresenter>>,
}

impl ApplicationHandler for Creator {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.attrs.take() else {
            return; // already created
        };
        let result = event_loop
            .create_window(attrs)
            .map_err(|e| DisplayError::AllocationFailure(format!("window: {}", e)))
            .and_then(|window| {
                SoftbufferPresenter::new(Arc::new(window), event_loop.owned_display_handle())
            });
        self.result = Some(result);
    }

    // The session reads the granted size from the window once creation
    // returns, so an early compositor resize is not lost.
    fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            log::debug!("window configured to {}x{}", size.width, size.height);
        }
    }
}

/// Handler for one poll: adapts and dispatches each window event in order
struct Pump<'a, F> {
    window_id: WindowId,
    adapter: &'a mut InputAdapter,
    presenter: &'a mut SoftbufferPresenter,
    dispatch: &'a mut F,
}

impl<F> ApplicationHandler for Pump<'_, F>
where
    F: FnMut(Notification, &mut SoftbufferPresenter) -> Dispatch,
{
    fn resumed(&mut self, _: &ActiveEventLoop) {}

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if window_id != self.window_id {
            return;
        }
        let notification = self.adapter.to_notification(&event);
        if (self.dispatch)(notification, &mut *self.presenter) == Dispatch::Quit {
            event_loop.exit();
        }
    }
}
