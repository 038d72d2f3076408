use super::ray::Ray;
use super::vec::{Point3, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct HitRecord {
    pub t: f64,
    pub p: Point3,
    // Outward facing, unit length up to rounding
    pub normal: Vec3,
}

pub trait Hit {
    /// Nearest intersection with `t` strictly inside `(t_min, t_max)`.
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord>;
}
