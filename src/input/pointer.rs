use glam::Vec2;

/// Last sampled and latest pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Vec2,
    last_sample: Vec2,
}

impl PointerState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            last_sample: position,
        }
    }

    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Movement since the previous sample, as `previous - current` so a drag
    /// pulls the map along with the pointer. Zero unless the pointer moved.
    pub fn take_delta(&mut self) -> Vec2 {
        let delta = self.last_sample - self.position;
        self.last_sample = self.position;
        delta
    }
}
