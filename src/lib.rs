pub mod camera;
pub mod cli;
pub mod config;
pub mod controls;
pub mod error;
pub mod input;
pub mod math;
pub mod session;
pub mod terrain;
pub mod traits;

pub use camera::{CameraParameters, CameraPose};
pub use config::Config;
pub use controls::{MapControls, MotionMode};
pub use error::{ConfigError, SceneError};
pub use input::{InfoClick, InputEvent};
pub use terrain::{HeightField, HeightTile};
pub use traits::SceneQuery;
