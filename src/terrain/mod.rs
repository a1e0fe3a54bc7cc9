//! Keeps the focus point and camera above the ground.

mod height_field;
mod sampler;

pub use height_field::{HeightField, HeightTile};
pub use sampler::TerrainSampler;
