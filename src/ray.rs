use super::vec::{Point3, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    // Not normalized
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, -1.0));
        assert_eq!(ray.at(0.0), ray.origin());
        assert_eq!(ray.at(1.5), Point3::new(1.0, 3.0, -1.5));
    }
}
