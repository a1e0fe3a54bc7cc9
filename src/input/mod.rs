//! Input normalization: raw pointer, keyboard, wheel and gesture events in,
//! one [`FrameInputDelta`] per frame out.

mod events;
mod input_adapter;
mod keyboard;
mod normalizer;
mod pointer;

pub use events::*;
pub use input_adapter::{map_key_code, map_mouse_button, translate, wheel_delta_y};
pub use keyboard::KeyState;
pub use normalizer::{wheel_factor, FrameInputDelta, InputNormalizer};
pub use pointer::PointerState;
