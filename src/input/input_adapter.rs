//! Bridges winit window events to [`InputEvent`]s for native hosts.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{InputEvent, PointerButton};
use crate::traits::Key;

/// Translate one winit event. Events the controls do not consume map to `None`.
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(keycode) = event.physical_key else {
                return None;
            };
            let key = map_key_code(keycode)?;
            Some(match event.state {
                ElementState::Pressed => InputEvent::KeyDown { key },
                ElementState::Released => InputEvent::KeyUp { key },
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            let button = map_mouse_button(*button)?;
            Some(match state {
                ElementState::Pressed => InputEvent::PointerDown { button },
                ElementState::Released => InputEvent::PointerUp { button },
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::PointerMove {
            position: Vec2::new(position.x as f32, position.y as f32),
        }),
        WindowEvent::MouseWheel { delta, .. } => Some(InputEvent::Wheel {
            delta_y: wheel_delta_y(delta),
        }),
        WindowEvent::Resized(size) => Some(InputEvent::ViewportResized {
            height: size.height as f32,
        }),
        _ => None,
    }
}

/// Arrows and WASD pan, Q/E rotate, R/F tilt.
pub fn map_key_code(keycode: KeyCode) -> Option<Key> {
    match keycode {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Key::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Key::Down),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Key::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::Right),
        KeyCode::KeyQ => Some(Key::RotateLeft),
        KeyCode::KeyE => Some(Key::RotateRight),
        KeyCode::KeyR => Some(Key::TiltUp),
        KeyCode::KeyF => Some(Key::TiltDown),
        _ => None,
    }
}

pub fn map_mouse_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// Winit reports scrolling away from the user as positive y; the controls
/// treat positive `delta_y` as zooming out, so the sign flips.
pub fn wheel_delta_y(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -*y,
        MouseScrollDelta::PixelDelta(position) => -position.y as f32,
    }
}
