use super::event::Event;
use super::notification::Notification;
use super::state::SessionState;
use crate::traits::{Dispatch, Present};

/// Translate one notification into at most one queued event.
///
/// Mouse state and the close flag are updated before the event is queued, so
/// they stay current even when the queue is full and the event is dropped.
/// Repaint requests are served here, synchronously, from the off-screen
/// surface.
pub fn translate<P>(
    notification: Notification,
    state: &mut SessionState,
    presenter: &mut P,
) -> Dispatch
where
    P: Present + ?Sized,
{
    match notification {
        Notification::CloseRequested => {
            state.request_close();
            state.queue.push(Event::Close);
        }
        Notification::Destroyed => return Dispatch::Quit,
        Notification::Key { key, pressed } => {
            let event = if pressed {
                Event::KeyDown { key }
            } else {
                Event::KeyUp { key }
            };
            state.queue.push(event);
        }
        Notification::Button {
            button,
            pressed,
            x,
            y,
        } => {
            let event = if pressed {
                state.mouse.press(button, x, y);
                Event::MousePress { button, x, y }
            } else {
                state.mouse.release(button, x, y);
                Event::MouseRelease { button, x, y }
            };
            state.queue.push(event);
        }
        Notification::CursorMoved { x, y } => {
            state.mouse.move_to(x, y);
            state.queue.push(Event::MouseMove { x, y });
        }
        Notification::Resized { width, height } => {
            match state.surface.resize(width, height) {
                Ok(true) => log::debug!("surface reallocated to {}x{}", width, height),
                Ok(false) => {}
                Err(e) => log::warn!(
                    "keeping {}x{} surface after resize: {}",
                    state.surface.width(),
                    state.surface.height(),
                    e
                ),
            }
            state.queue.push(Event::Resize { width, height });
        }
        Notification::RedrawRequested => {
            if let Err(e) = presenter.present(&state.surface) {
                log::warn!("repaint failed: {}", e);
            }
        }
        Notification::Other => {}
    }
    Dispatch::Continue
}
