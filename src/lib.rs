//! Casts one ray per pixel at a single sphere and writes the result as an
//! ASCII PPM (P3) image.

pub mod camera;
pub mod cli;
pub mod color;
pub mod hit;
pub mod logger;
pub mod ray;
pub mod render;
pub mod shading;
pub mod sphere;
pub mod vec;

pub use render::{RenderConfig, Renderer, Scene};
