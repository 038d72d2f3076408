use std::io::{self, Write};
use std::time::Instant;

use clap::ValueEnum;
use log::{debug, info};

use super::camera::Camera;
use super::color::write_color;
use super::shading;
use super::vec::Color;

/// What each pixel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Scene {
    /// Normal-shaded sphere in front of a sky gradient
    #[default]
    Sphere,
    /// Red/green test card, no rays cast
    Gradient,
}

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub image_width: u32,
    pub aspect_ratio: f64,
    pub scene: Scene,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_width: 256,
            aspect_ratio: 16.0 / 9.0,
            scene: Scene::Sphere,
        }
    }
}

pub struct Renderer {
    camera: Camera,
    scene: Scene,
}

impl Renderer {
    pub fn new(config: &RenderConfig) -> Self {
        let camera = Camera::new(config.image_width, config.aspect_ratio);
        debug!("pixel (0, 0) centered at {}", camera.pixel00_loc());
        Self {
            camera,
            scene: config.scene,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pixel_color(&self, i: u32, j: u32) -> Color {
        match self.scene {
            Scene::Sphere => shading::ray_color(&self.camera.pixel_ray(i, j)),
            Scene::Gradient => shading::uv_gradient(
                i,
                j,
                self.camera.image_width(),
                self.camera.image_height(),
            ),
        }
    }

    /// Write the whole image as ASCII PPM, rows top to bottom.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let start = Instant::now();
        let width = self.camera.image_width();
        let height = self.camera.image_height();
        info!("rendering {:?} scene at {}x{}", self.scene, width, height);

        // Format tag, dimensions, max channel value
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", width, height)?;
        writeln!(out, "255")?;

        for j in 0..height {
            debug!("scanlines remaining: {}", height - j);
            for i in 0..width {
                write_color(out, self.pixel_color(i, j))?;
            }
        }
        out.flush()?;

        info!("done in {:.2?}", start.elapsed());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_pixel_count() {
        let config = RenderConfig {
            image_width: 8,
            aspect_ratio: 2.0,
            scene: Scene::Sphere,
        };
        let mut out = Vec::new();
        Renderer::new(&config).render(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[..3], &["P3", "8 4", "255"]);
        assert_eq!(lines.len(), 3 + 8 * 4);
    }

    #[test]
    fn single_pixel_image() {
        let config = RenderConfig {
            image_width: 1,
            aspect_ratio: 16.0 / 9.0,
            scene: Scene::Gradient,
        };
        let mut out = Vec::new();
        Renderer::new(&config).render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "P3\n1 1\n255\n0 0 0\n");
    }

    #[test]
    fn center_of_sphere_image_is_sphere_colored() {
        let renderer = Renderer::new(&RenderConfig::default());
        let camera = renderer.camera();
        let color = renderer.pixel_color(camera.image_width() / 2, camera.image_height() / 2);
        // Facing the camera, so blue dominates and nothing is sky white
        assert!(color.z() > 0.99);
        assert!((color.x() - 0.5).abs() < 0.01);
    }
}
