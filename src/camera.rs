use super::ray::Ray;
use super::vec::{Point3, Vec3};

const FOCAL_LENGTH: f64 = 1.0;
const VIEWPORT_HEIGHT: f64 = 2.0;

/// Pinhole camera at the origin looking down -z.
///
/// All viewport geometry is derived once in [`Camera::new`] and never changes
/// for the lifetime of a render.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    image_width: u32,
    image_height: u32,
    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    /// `image_width` must be at least 1.
    pub fn new(image_width: u32, aspect_ratio: f64) -> Self {
        let image_height = image_height(image_width, aspect_ratio);

        // Use the ratio of the actual integer dimensions, not the requested one,
        // since flooring the height may have changed it
        let viewport_width = VIEWPORT_HEIGHT * (image_width as f64 / image_height as f64);
        let center = Point3::zero();

        // Image rows grow downwards while world y grows upwards
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -VIEWPORT_HEIGHT, 0.0);

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left =
            center - Vec3::new(0.0, 0.0, FOCAL_LENGTH) - viewport_u / 2.0 - viewport_v / 2.0;
        // Sample the middle of the pixel, not its corner
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Self {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn pixel00_loc(&self) -> Point3 {
        self.pixel00_loc
    }

    pub fn pixel_ray(&self, i: u32, j: u32) -> Ray {
        let pixel_center =
            self.pixel00_loc + (i as f64) * self.pixel_delta_u + (j as f64) * self.pixel_delta_v;
        Ray::new(self.center, pixel_center - self.center)
    }
}

/// Height for a given width and nominal aspect ratio, floored and at least 1.
pub fn image_height(image_width: u32, aspect_ratio: f64) -> u32 {
    ((image_width as f64 / aspect_ratio) as u32).max(1)
}
