//! Scripted input sessions, replayed frame by frame against the controls.

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use std::path::Path;

use crate::camera::CameraPose;
use crate::controls::MapControls;
use crate::input::{GestureEvent, GestureKind, GesturePhase, InputEvent, PointerButton};
use crate::terrain::HeightField;
use crate::traits::{Key, SceneQuery};

pub const DEMO_TILE_SIZE: Vec2 = Vec2::splat(64.0);

/// Events delivered before each frame's update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    frames: Vec<Vec<InputEvent>>,
}

impl Session {
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self { frames }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let frames = serde_json::from_str(json).context("input script is not a list of frames")?;
        Ok(Self { frames })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input script {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn frames(&self) -> &[Vec<InputEvent>] {
        &self.frames
    }

    /// A short tour: settle, drag, orbit, zoom, arrow keys, pinch and a tap.
    pub fn demo() -> Self {
        let mut frames: Vec<Vec<InputEvent>> = Vec::new();
        let idle = |frames: &mut Vec<Vec<InputEvent>>, n: usize| {
            frames.extend(std::iter::repeat_with(Vec::new).take(n));
        };
        let pointer_at = |x: f32, y: f32| InputEvent::PointerMove {
            position: Vec2::new(x, y),
        };

        idle(&mut frames, 30);

        frames.push(vec![
            pointer_at(500.0, 500.0),
            InputEvent::PointerDown { button: PointerButton::Primary },
        ]);
        frames.extend((1..=20).map(|i| vec![pointer_at(500.0 + i as f32 * 10.0, 500.0)]));
        frames.push(vec![InputEvent::PointerUp { button: PointerButton::Primary }]);
        idle(&mut frames, 20);

        frames.push(vec![InputEvent::PointerDown { button: PointerButton::Secondary }]);
        frames.extend(
            (1..=15).map(|i| vec![pointer_at(700.0 + i as f32 * 12.0, 500.0 - i as f32 * 8.0)]),
        );
        frames.push(vec![InputEvent::PointerUp { button: PointerButton::Secondary }]);

        frames.extend((0..3).map(|_| vec![InputEvent::Wheel { delta_y: -1.0 }]));
        idle(&mut frames, 20);

        frames.push(vec![InputEvent::KeyDown { key: Key::Up }]);
        idle(&mut frames, 20);
        frames.push(vec![InputEvent::KeyUp { key: Key::Up }]);

        let pinch = |phase, scale| {
            InputEvent::Gesture(GestureEvent::new(GestureKind::Pinch, phase).with_scale(scale))
        };
        frames.push(vec![pinch(GesturePhase::Start, 1.0)]);
        frames.push(vec![pinch(GesturePhase::Move, 1.5)]);
        frames.push(vec![pinch(GesturePhase::End, 1.5)]);

        frames.push(vec![InputEvent::Gesture(
            GestureEvent::new(GestureKind::Tap, GesturePhase::End).with_center(Vec2::new(640.0, 360.0)),
        )]);

        Self { frames }
    }
}

/// Rolling hills, 16 by 16 tiles of [`DEMO_TILE_SIZE`] centred on the origin.
pub fn demo_terrain() -> HeightField {
    HeightField::from_fn(Vec2::splat(-512.0), DEMO_TILE_SIZE, 16, 16, 8, |x, z| {
        60.0 + 25.0 * (x / 90.0).sin() * (z / 110.0).cos()
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub changed_frames: usize,
    /// First frame after the script from which the camera stayed at rest.
    pub settled_at: Option<usize>,
    pub pose: CameraPose,
    pub terrain_height: f32,
}

/// Feed `session` into `controls`, then keep updating for up to
/// `extra_frames` frames or until the camera comes to rest.
/// `on_frame(index, controls, changed)` runs after every update.
pub fn replay<S: SceneQuery + ?Sized>(
    controls: &mut MapControls,
    scene: &mut S,
    session: &Session,
    extra_frames: usize,
    mut on_frame: impl FnMut(usize, &MapControls, bool),
) -> ReplaySummary {
    let mut frame = 0;
    let mut changed_frames = 0;

    for events in session.frames() {
        for event in events {
            controls.handle_event(*event);
        }
        let changed = controls.update(&mut *scene);
        changed_frames += usize::from(changed);
        on_frame(frame, controls, changed);
        frame += 1;
    }

    let mut settled_at = None;
    for _ in 0..extra_frames {
        let changed = controls.update(&mut *scene);
        changed_frames += usize::from(changed);
        on_frame(frame, controls, changed);
        frame += 1;
        if !changed {
            settled_at = Some(frame);
            break;
        }
    }

    ReplaySummary {
        frames: frame,
        changed_frames,
        settled_at,
        pose: controls.pose(),
        terrain_height: controls.terrain_height(),
    }
}

impl ReplaySummary {
    /// Where the camera ended up looking.
    pub fn focus(&self) -> Vec3 {
        self.pose.look_at
    }
}
