use super::hit::Hit;
use super::ray::Ray;
use super::sphere::Sphere;
use super::vec::{Color, Point3};

pub const SPHERE_CENTER: Point3 = Point3::new(0.0, 0.0, -1.0);
pub const SPHERE_RADIUS: f64 = 0.5;

const SKY_BOTTOM: Color = Color::new(1.0, 1.0, 1.0);
const SKY_TOP: Color = Color::new(0.5, 0.7, 1.0);

pub fn scene_sphere() -> Sphere {
    Sphere::new(SPHERE_CENTER, SPHERE_RADIUS)
}

/// Color seen along `ray` in the single-sphere scene.
pub fn ray_color(ray: &Ray) -> Color {
    shade(ray, &scene_sphere())
}

pub fn shade(ray: &Ray, world: &dyn Hit) -> Color {
    // Strictly positive t only, nothing behind the camera
    match world.hit(ray, 0.0, f64::INFINITY) {
        // Remap each normal component from [-1, 1] to [0, 1]
        Some(hit) => 0.5 * (hit.normal + Color::one()),
        None => background(ray),
    }
}

/// Vertical gradient, white looking down and sky blue looking up.
pub fn background(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalized();
    let a = 0.5 * (unit_direction.y() + 1.0);
    SKY_BOTTOM.lerp(SKY_TOP, a)
}

/// Test card without any rays: red grows left to right, green top to bottom.
pub fn uv_gradient(i: u32, j: u32, image_width: u32, image_height: u32) -> Color {
    Color::new(
        fraction(i, image_width),
        fraction(j, image_height),
        0.0,
    )
}

fn fraction(index: u32, extent: u32) -> f64 {
    if extent <= 1 {
        0.0
    } else {
        index as f64 / (extent - 1) as f64
    }
}
