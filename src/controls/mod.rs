//! The map camera controller: input events in, a smoothed orbit camera out.

mod gesture;
mod smoother;
mod state;

pub use gesture::{wrap_degrees, GestureState};
pub use smoother::{advance, smooth_toward, SmoothingStep, CHANGE_EPSILON};
pub use state::{DragSource, IntentStateMachine, MotionMode};

use glam::{Vec2, Vec3};
use std::f32::consts::PI;
use std::fmt;

use crate::camera::{clamp_pitch, max_pitch, CameraParameters, CameraPose};
use crate::config::Config;
use crate::error::ConfigError;
use crate::input::{
    wheel_factor, FrameInputDelta, GestureEvent, GestureKind, GesturePhase, InfoClick, InputEvent,
    InputNormalizer, PointerButton, PointerKind,
};
use crate::math::rotate_2d;
use crate::terrain::TerrainSampler;
use crate::traits::SceneQuery;

/// Distance the camera starts at, easing in to its first target.
pub const INITIAL_DISTANCE: f32 = 5000.0;
pub const INITIAL_TARGET_DISTANCE: f32 = 1000.0;
/// Yaw radians per twisted radian of a two finger rotate.
pub const TOUCH_ROTATE_GAIN: f32 = 1.4;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1080.0;

type InfoClickListener = Box<dyn FnMut(&InfoClick)>;

/// Orbit camera controls for a map viewer.
///
/// Event handlers only touch input state and the `target` parameters; all
/// smoothing happens in [`MapControls::update`], once per rendered frame.
pub struct MapControls {
    config: Config,
    current: CameraParameters,
    target: CameraParameters,
    input: InputNormalizer,
    intent: IntentStateMachine,
    gestures: GestureState,
    terrain: TerrainSampler,
    viewport_height: f32,
    camera_position: Vec3,
    info_click_listeners: Vec<InfoClickListener>,
}

impl MapControls {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: Config) -> Self {
        let (current, target) = initial_parameters(&config);
        Self {
            terrain: TerrainSampler::new(&config.terrain),
            config,
            current,
            target,
            input: InputNormalizer::new(),
            intent: IntentStateMachine::new(),
            gestures: GestureState::default(),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            camera_position: current.camera_position(),
            info_click_listeners: Vec::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> MotionMode {
        self.intent.mode()
    }

    /// Smoothed parameters, as rendered.
    pub fn current(&self) -> &CameraParameters {
        &self.current
    }

    /// Parameters the input asked for.
    pub fn target(&self) -> &CameraParameters {
        &self.target
    }

    pub fn terrain_height(&self) -> f32 {
        self.terrain.height()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.camera_position,
            look_at: self.current.focus,
            up: self.current.up(),
        }
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        if height > 0.0 && height.is_finite() {
            self.viewport_height = height;
        } else {
            log::debug!("ignoring viewport height {height}");
        }
    }

    pub fn set_tile_size(&mut self, tile_size: Vec2) {
        self.terrain.set_tile_size(tile_size);
    }

    /// Register a listener for single-pointer taps.
    pub fn on_info_click(&mut self, listener: impl FnMut(&InfoClick) + 'static) {
        self.info_click_listeners.push(Box::new(listener));
    }

    /// Jump back to the start view. The camera eases in again from afar, and
    /// any drag or held key in progress is dropped.
    pub fn reset_position(&mut self) {
        let (current, target) = initial_parameters(&self.config);
        self.current = current;
        self.target = target;
        self.intent.release();
        self.gestures.clear();
        self.input.reset();
        log::debug!("camera position reset");
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerMove { position } => self.input.pointer_moved(position),
            InputEvent::PointerDown { button } => {
                if let Some(source) = button_source(button) {
                    self.intent.begin(source);
                }
            }
            InputEvent::PointerUp { button } => {
                if let Some(source) = button_source(button) {
                    self.intent.end(source);
                }
            }
            InputEvent::Wheel { delta_y } => self.on_wheel(delta_y),
            InputEvent::KeyDown { key } => self.input.key_down(key),
            InputEvent::KeyUp { key } => self.input.key_up(key),
            InputEvent::Gesture(gesture) => self.handle_gesture(&gesture),
            InputEvent::ViewportResized { height } => self.set_viewport_height(height),
        }
    }

    fn handle_gesture(&mut self, gesture: &GestureEvent) {
        // Taps come from any pointer; the drag channels are touch only so
        // synthetic touch events from a mouse are not counted twice.
        if gesture.kind != GestureKind::Tap && gesture.pointer == PointerKind::Mouse {
            return;
        }

        match gesture.kind {
            GestureKind::Tap => self.on_tap(gesture),
            GestureKind::Pan => self.on_touch_pan(gesture),
            GestureKind::Tilt => self.on_touch_tilt(gesture),
            GestureKind::Rotate => self.on_touch_rotate(gesture),
            GestureKind::Pinch => self.on_touch_pinch(gesture),
        }
    }

    /// Each step scales the target distance and is clamped on its own.
    fn on_wheel(&mut self, delta_y: f32) {
        let factor = wheel_factor(delta_y, self.config.zoom.speed);
        self.target.distance = self.config.zoom.clamp(self.target.distance * factor);
    }

    fn on_tap(&mut self, gesture: &GestureEvent) {
        if gesture.phase != GesturePhase::End
            || gesture.delta.length() > self.config.tap.threshold
        {
            return;
        }

        let click = InfoClick {
            position: gesture.center,
        };
        log::debug!("info click at {:?}", click.position);
        for listener in &mut self.info_click_listeners {
            listener(&click);
        }
    }

    fn on_touch_pan(&mut self, gesture: &GestureEvent) {
        match gesture.phase {
            GesturePhase::Start => {
                if self.intent.begin(DragSource::TouchPan) {
                    self.gestures.pan_origin =
                        Some(Vec2::new(self.target.focus.x, self.target.focus.z));
                }
            }
            GesturePhase::Move => {
                if !self.intent.is_driven_by(DragSource::TouchPan) || gesture.delta == Vec2::ZERO {
                    return;
                }
                let Some(origin) = self.gestures.pan_origin else {
                    return;
                };
                let offset = rotate_2d(gesture.delta, -self.current.yaw) * self.pan_scale();
                self.target.focus.x = origin.x - offset.x;
                self.target.focus.z = origin.y - offset.y;
            }
            GesturePhase::End | GesturePhase::Cancel => {
                if self.intent.end(DragSource::TouchPan) {
                    self.gestures.pan_origin = None;
                }
            }
        }
    }

    fn on_touch_tilt(&mut self, gesture: &GestureEvent) {
        match gesture.phase {
            GesturePhase::Start => {
                if self.begin_touch_orbit() {
                    self.gestures.tilt_origin = Some(self.target.pitch);
                }
            }
            GesturePhase::Move => {
                if !self.intent.is_driven_by(DragSource::TouchOrbit) {
                    return;
                }
                if let Some(origin) = self.gestures.tilt_origin {
                    self.target.pitch = origin - gesture.delta.y / self.viewport_height * PI;
                }
            }
            GesturePhase::End | GesturePhase::Cancel => {
                self.gestures.tilt_origin = None;
                self.end_touch_orbit();
            }
        }
    }

    fn on_touch_rotate(&mut self, gesture: &GestureEvent) {
        match gesture.phase {
            GesturePhase::Start => {
                if self.begin_touch_orbit() {
                    self.gestures.rotation_origin = Some(gesture.rotation);
                }
            }
            GesturePhase::Move => {
                if !self.intent.is_driven_by(DragSource::TouchOrbit) {
                    return;
                }
                if let Some(last) = self.gestures.rotation_origin {
                    let delta = wrap_degrees(gesture.rotation - last);
                    self.gestures.rotation_origin = Some(gesture.rotation);
                    self.target.yaw += delta.to_radians() * TOUCH_ROTATE_GAIN;
                }
            }
            GesturePhase::End | GesturePhase::Cancel => {
                self.gestures.rotation_origin = None;
                self.end_touch_orbit();
            }
        }
    }

    fn on_touch_pinch(&mut self, gesture: &GestureEvent) {
        match gesture.phase {
            GesturePhase::Start => self.gestures.zoom_origin = Some(self.target.distance),
            GesturePhase::Move => {
                if !(gesture.scale > 0.0 && gesture.scale.is_finite()) {
                    return;
                }
                if let Some(origin) = self.gestures.zoom_origin {
                    self.target.distance = self.config.zoom.clamp(origin / gesture.scale);
                }
            }
            GesturePhase::End | GesturePhase::Cancel => self.gestures.zoom_origin = None,
        }
    }

    /// Tilt and rotate share one orbit drag. A second two finger gesture
    /// joins it instead of being rejected.
    fn begin_touch_orbit(&mut self) -> bool {
        self.intent.begin(DragSource::TouchOrbit) || self.intent.is_driven_by(DragSource::TouchOrbit)
    }

    fn end_touch_orbit(&mut self) {
        if self.gestures.tilt_origin.is_none() && self.gestures.rotation_origin.is_none() {
            self.intent.end(DragSource::TouchOrbit);
        }
    }

    /// World units per screen pixel of pan at the current zoom.
    fn pan_scale(&self) -> f32 {
        self.current.distance / self.viewport_height * self.config.pan.speed
    }

    fn apply_input(&mut self, delta: &FrameInputDelta) {
        if delta.pan != Vec2::ZERO {
            let pan = rotate_2d(delta.pan, -self.current.yaw) * self.pan_scale();
            self.target.focus.x += pan.x;
            self.target.focus.z += pan.y;
        }

        if delta.orbit != Vec2::ZERO {
            self.target.yaw += delta.orbit.x / self.viewport_height * PI;
            self.target.pitch += delta.orbit.y / self.viewport_height * PI;
        }
    }

    /// Advance one frame. Returns whether the camera moved enough to need a
    /// redraw; only then is the pose written and the terrain resampled.
    pub fn update<S: SceneQuery + ?Sized>(&mut self, scene: &mut S) -> bool {
        let delta = self.input.frame_delta(self.intent.mode(), &self.config);
        if !delta.is_idle() {
            self.apply_input(&delta);
        }

        let max = max_pitch(self.target.distance, &self.config.zoom, self.config.tilt.max);
        self.target.pitch = clamp_pitch(self.target.pitch, max);

        // Terrain is a floor for the focus height, never a snap
        let floor_y = self.target.focus.y.max(self.terrain.height());
        let step = advance(&mut self.current, &self.target, floor_y, &self.config);

        let previous = self.camera_position;
        self.camera_position = self.current.camera_position();
        let moved = self.camera_position.distance(previous);

        let changed = step.yaw.abs() > CHANGE_EPSILON
            || step.pitch.abs() > CHANGE_EPSILON
            || moved > CHANGE_EPSILON;

        if changed {
            scene.write_camera_pose(&self.pose());
            self.terrain
                .sample(&*scene, self.target.focus, self.camera_position);
        }

        changed
    }
}

impl Default for MapControls {
    fn default() -> Self {
        Self::from_valid(Config::default())
    }
}

impl fmt::Debug for MapControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapControls")
            .field("mode", &self.intent.mode())
            .field("current", &self.current)
            .field("target", &self.target)
            .field("terrain_height", &self.terrain.height())
            .field("viewport_height", &self.viewport_height)
            .field("info_click_listeners", &self.info_click_listeners.len())
            .finish()
    }
}

fn initial_parameters(config: &Config) -> (CameraParameters, CameraParameters) {
    let current = CameraParameters::new(Vec3::ZERO, INITIAL_DISTANCE, 0.0, 0.0);
    let target = CameraParameters::new(
        Vec3::ZERO,
        config.zoom.clamp(INITIAL_TARGET_DISTANCE),
        0.0,
        0.0,
    );
    (current, target)
}

fn button_source(button: PointerButton) -> Option<DragSource> {
    match button {
        PointerButton::Primary => Some(DragSource::PrimaryButton),
        PointerButton::Secondary => Some(DragSource::SecondaryButton),
        PointerButton::Middle => None,
    }
}
