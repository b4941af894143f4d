use winit::event::{ElementState, MouseButton as WinitButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::core::keys::{self, Key};
use crate::core::{MouseButton, Notification};

/// Adapter that lifts winit window events into notifications
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    /// Last cursor position; winit button events carry none of their own
    cursor: (i32, i32),
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Map one winit event. Anything without a counterpart is `Other`.
    pub fn to_notification(&mut self, event: &WindowEvent) -> Notification {
        match event {
            WindowEvent::CloseRequested => Notification::CloseRequested,
            WindowEvent::Destroyed => Notification::Destroyed,
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => match Self::keycode_to_key(code) {
                    Some(key) => Notification::Key {
                        key,
                        pressed: event.state == ElementState::Pressed,
                    },
                    None => Notification::Other,
                },
                PhysicalKey::Unidentified(_) => Notification::Other,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                match Self::mouse_button(*button) {
                    Some(button) => Notification::Button {
                        button,
                        pressed: *state == ElementState::Pressed,
                        x: self.cursor.0,
                        y: self.cursor.1,
                    },
                    None => Notification::Other,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as i32, position.y as i32);
                Notification::CursorMoved {
                    x: self.cursor.0,
                    y: self.cursor.1,
                }
            }
            WindowEvent::Resized(size) => Notification::Resized {
                width: size.width,
                height: size.height,
            },
            WindowEvent::RedrawRequested => Notification::RedrawRequested,
            _ => Notification::Other,
        }
    }

    /// Map winit MouseButton to button id 1-3
    pub fn mouse_button(button: WinitButton) -> Option<MouseButton> {
        match button {
            WinitButton::Left => Some(MouseButton::Left),
            WinitButton::Middle => Some(MouseButton::Middle),
            WinitButton::Right => Some(MouseButton::Right),
            _ => None,
        }
    }

    /// Map winit physical KeyCode to its virtual-key code
    pub fn keycode_to_key(code: KeyCode) -> Option<Key> {
        let key = match code {
            KeyCode::KeyA => b'A',
            KeyCode::KeyB => b'B',
            KeyCode::KeyC => b'C',
            KeyCode::KeyD => b'D',
            KeyCode::KeyE => b'E',
            KeyCode::KeyF => b'F',
            KeyCode::KeyG => b'G',
            KeyCode::KeyH => b'H',
            KeyCode::KeyI => b'I',
            KeyCode::KeyJ => b'J',
            KeyCode::KeyK => b'K',
            KeyCode::KeyL => b'L',
            KeyCode::KeyM => b'M',
            KeyCode::KeyN => b'N',
            KeyCode::KeyO => b'O',
            KeyCode::KeyP => b'P',
            KeyCode::KeyQ => b'Q',
            KeyCode::KeyR => b'R',
            KeyCode::KeyS => b'S',
            KeyCode::KeyT => b'T',
            KeyCode::KeyU => b'U',
            KeyCode::KeyV => b'V',
            KeyCode::KeyW => b'W',
            KeyCode::KeyX => b'X',
            KeyCode::KeyY => b'Y',
            KeyCode::KeyZ => b'Z',
            KeyCode::Digit0 => b'0',
            KeyCode::Digit1 => b'1',
            KeyCode::Digit2 => b'2',
            KeyCode::Digit3 => b'3',
            KeyCode::Digit4 => b'4',
            KeyCode::Digit5 => b'5',
            KeyCode::Digit6 => b'6',
            KeyCode::Digit7 => b'7',
            KeyCode::Digit8 => b'8',
            KeyCode::Digit9 => b'9',
            _ => return Self::named_key(code),
        };
        Some(Key(u32::from(key)))
    }

    fn named_key(code: KeyCode) -> Option<Key> {
        let key = match code {
            KeyCode::Escape => keys::ESCAPE,
            KeyCode::Space => keys::SPACE,
            KeyCode::Enter | KeyCode::NumpadEnter => keys::ENTER,
            KeyCode::Tab => keys::TAB,
            KeyCode::Backspace => keys::BACKSPACE,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => keys::SHIFT,
            KeyCode::ControlLeft | KeyCode::ControlRight => keys::CONTROL,
            KeyCode::AltLeft | KeyCode::AltRight => keys::ALT,
            KeyCode::Pause => keys::PAUSE,
            KeyCode::CapsLock => keys::CAPS_LOCK,
            KeyCode::ArrowLeft => keys::LEFT,
            KeyCode::ArrowUp => keys::UP,
            KeyCode::ArrowRight => keys::RIGHT,
            KeyCode::ArrowDown => keys::DOWN,
            KeyCode::PageUp => keys::PAGE_UP,
            KeyCode::PageDown => keys::PAGE_DOWN,
            KeyCode::Home => keys::HOME,
            KeyCode::End => keys::END,
            KeyCode::Insert => keys::INSERT,
            KeyCode::Delete => keys::DELETE,
            KeyCode::Equal => keys::OEM_PLUS,
            KeyCode::Minus => keys::OEM_MINUS,
            KeyCode::Comma => keys::OEM_COMMA,
            KeyCode::Period => keys::OEM_PERIOD,
            KeyCode::Semicolon => keys::OEM_1,
            KeyCode::Slash => keys::OEM_2,
            KeyCode::Backquote => keys::OEM_3,
            KeyCode::BracketLeft => keys::OEM_4,
            KeyCode::Backslash => keys::OEM_5,
            KeyCode::BracketRight => keys::OEM_6,
            KeyCode::Quote => keys::OEM_7,
            KeyCode::NumpadMultiply => keys::MULTIPLY,
            KeyCode::NumpadAdd => keys::ADD,
            KeyCode::NumpadSubtract => keys::SUBTRACT,
            KeyCode::NumpadDecimal => keys::DECIMAL,
            KeyCode::NumpadDivide => keys::DIVIDE,
            KeyCode::Numpad0 => Key(keys::NUMPAD0.0),
            KeyCode::Numpad1 => Key(keys::NUMPAD0.0 + 1),
            KeyCode::Numpad2 => Key(keys::NUMPAD0.0 + 2),
            KeyCode::Numpad3 => Key(keys::NUMPAD0.0 + 3),
            KeyCode::Numpad4 => Key(keys::NUMPAD0.0 + 4),
            KeyCode::Numpad5 => Key(keys::NUMPAD0.0 + 5),
            KeyCode::Numpad6 => Key(keys::NUMPAD0.0 + 6),
            KeyCode::Numpad7 => Key(keys::NUMPAD0.0 + 7),
            KeyCode::Numpad8 => Key(keys::NUMPAD0.0 + 8),
            KeyCode::Numpad9 => Key(keys::NUMPAD0.0 + 9),
            KeyCode::F1 => keys::F1,
            KeyCode::F2 => Key(keys::F1.0 + 1),
            KeyCode::F3 => Key(keys::F1.0 + 2),
            KeyCode::F4 => Key(keys::F1.0 + 3),
            KeyCode::F5 => Key(keys::F1.0 + 4),
            KeyCode::F6 => Key(keys::F1.0 + 5),
            KeyCode::F7 => Key(keys::F1.0 + 6),
            KeyCode::F8 => Key(keys::F1.0 + 7),
            KeyCode::F9 => Key(keys::F1.0 + 8),
            KeyCode::F10 => Key(keys::F1.0 + 9),
            KeyCode::F11 => Key(keys::F1.0 + 10),
            KeyCode::F12 => Key(keys::F1.0 + 11),
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::DeviceId;

    // KeyEvent has private fields, so keyboard mapping is tested through
    // keycode_to_key rather than through whole WindowEvents.

    #[test]
    fn test_letters_and_digits_map_to_ascii() {
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::KeyQ), Key::letter('q'));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::KeyZ), Key::letter('Z'));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::Digit0), Key::digit(0));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::Digit9), Key::digit(9));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::Escape), Some(keys::ESCAPE));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::ArrowUp), Some(keys::UP));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::ShiftRight), Some(keys::SHIFT));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::Equal), Some(keys::OEM_PLUS));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::F12), Key::function(12));
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::Numpad7), Some(Key(0x67)));
    }

    #[test]
    fn test_x11_names_agree_with_physical_keys() {
        assert_eq!(
            InputAdapter::keycode_to_key(KeyCode::Escape),
            keys::from_x11_name("XK_Escape")
        );
        assert_eq!(
            InputAdapter::keycode_to_key(KeyCode::Minus),
            keys::from_x11_name("XK_minus")
        );
        assert_eq!(
            InputAdapter::keycode_to_key(KeyCode::KeyW),
            keys::from_x11_name("XK_w")
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(InputAdapter::keycode_to_key(KeyCode::MediaPlayPause), None);
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(InputAdapter::mouse_button(WinitButton::Left), Some(MouseButton::Left));
        assert_eq!(InputAdapter::mouse_button(WinitButton::Middle), Some(MouseButton::Middle));
        assert_eq!(InputAdapter::mouse_button(WinitButton::Right), Some(MouseButton::Right));
        assert_eq!(InputAdapter::mouse_button(WinitButton::Back), None);
        assert_eq!(InputAdapter::mouse_button(WinitButton::Other(9)), None);
    }

    #[test]
    fn test_lifecycle_events() {
        let mut adapter = InputAdapter::new();
        assert_eq!(
            adapter.to_notification(&WindowEvent::CloseRequested),
            Notification::CloseRequested
        );
        assert_eq!(
            adapter.to_notification(&WindowEvent::Destroyed),
            Notification::Destroyed
        );
        assert_eq!(
            adapter.to_notification(&WindowEvent::RedrawRequested),
            Notification::RedrawRequested
        );
        assert_eq!(
            adapter.to_notification(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            Notification::Resized {
                width: 640,
                height: 480
            }
        );
        assert_eq!(
            adapter.to_notification(&WindowEvent::Focused(true)),
            Notification::Other
        );
    }

    #[test]
    fn test_buttons_use_last_cursor_position() {
        // SAFETY: the dummy id is only compared, never handed back to winit.
        let device_id = unsafe { DeviceId::dummy() };
        let mut adapter = InputAdapter::new();

        let moved = adapter.to_notification(&WindowEvent::CursorMoved {
            device_id,
            position: PhysicalPosition::new(12.7, 34.2),
        });
        assert_eq!(moved, Notification::CursorMoved { x: 12, y: 34 });
        assert_eq!(adapter.cursor(), (12, 34));

        let pressed = adapter.to_notification(&WindowEvent::MouseInput {
            device_id,
            state: ElementState::Pressed,
            button: WinitButton::Right,
        });
        assert_eq!(
            pressed,
            Notification::Button {
                button: MouseButton::Right,
                pressed: true,
                x: 12,
                y: 34
            }
        );
    }
}
