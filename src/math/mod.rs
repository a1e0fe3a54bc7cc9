mod aabb;
mod ray;
mod tile;
mod triangle;

pub use aabb::AABB;
pub use ray::{intersect_aabb, rotate_2d, Ray};
pub use tile::TileFilter;
pub use triangle::Triangle;
