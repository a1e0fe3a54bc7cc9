/// Exclusive camera motion intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionMode {
    #[default]
    Idle,
    Panning,
    Orbiting,
}

/// Input channel that started the active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSource {
    PrimaryButton,
    SecondaryButton,
    /// Single finger pan gesture.
    TouchPan,
    /// Two finger tilt and rotate gestures, recognised together.
    TouchOrbit,
}

impl DragSource {
    pub fn mode(self) -> MotionMode {
        match self {
            DragSource::PrimaryButton | DragSource::TouchPan => MotionMode::Panning,
            DragSource::SecondaryButton | DragSource::TouchOrbit => MotionMode::Orbiting,
        }
    }
}

/// Decides which input may drive the camera.
///
/// Only one drag is active at a time. Starting another while one is active is
/// ignored, and a drag only ends through the source that started it. Driven
/// purely by discrete events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentStateMachine {
    active: Option<DragSource>,
}

impl IntentStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> MotionMode {
        self.active.map_or(MotionMode::Idle, DragSource::mode)
    }

    pub fn source(&self) -> Option<DragSource> {
        self.active
    }

    pub fn is_driven_by(&self, source: DragSource) -> bool {
        self.active == Some(source)
    }

    /// Returns whether the drag started.
    pub fn begin(&mut self, source: DragSource) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.active = Some(source);
        log::debug!("camera drag started: {source:?} -> {:?}", source.mode());
        true
    }

    /// Returns whether the machine went back to idle.
    pub fn end(&mut self, source: DragSource) -> bool {
        if !self.is_driven_by(source) {
            return false;
        }
        self.active = None;
        log::debug!("camera drag ended: {source:?}");
        true
    }

    /// Drop any active drag regardless of source.
    pub fn release(&mut self) {
        self.active = None;
    }
}
