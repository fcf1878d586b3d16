//! A crate which simulates n×n×n twisty cubes, sticker by sticker.

mod cube;
mod geometry;
mod notation;
mod render;

pub use cube::*;
pub use geometry::*;
pub use notation::*;
pub use render::*;
