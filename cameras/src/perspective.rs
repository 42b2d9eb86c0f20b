//! Perspective camera.

use core::base::*;
use core::camera::{Camera, CameraSample};
use core::geometry::{Point2i, Point3f, Ray, Vector3f};

/// A pinhole perspective camera.
pub struct PerspectiveCamera {
    /// The raster resolution.
    resolution: Point2i,

    /// Position of the pinhole.
    eye: Point3f,

    /// Camera right axis.
    u: Vector3f,

    /// Camera up axis.
    v: Vector3f,

    /// Camera backward axis; the camera looks along -w.
    w: Vector3f,

    /// Half the image plane width at unit distance.
    half_width: Float,

    /// Half the image plane height at unit distance.
    half_height: Float,
}

impl PerspectiveCamera {
    /// Creates a new camera from a viewing configuration.
    ///
    /// * `eye`        - Position of the pinhole.
    /// * `look_at`    - Point the camera is aimed at.
    /// * `up`         - Up direction.
    /// * `fov`        - Vertical field of view in degrees.
    /// * `resolution` - The raster resolution.
    pub fn new(
        eye: Point3f,
        look_at: Point3f,
        up: Vector3f,
        fov: Float,
        resolution: Point2i,
    ) -> Self {
        let aspect = resolution.x as Float / resolution.y as Float;
        let theta = fov * PI / 180.0;
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        let w = (eye - look_at).normalize();
        let u = up.cross(&w).normalize();
        let v = w.cross(&u);

        Self {
            resolution,
            eye,
            u,
            v,
            w,
            half_width,
            half_height,
        }
    }
}

impl Camera for PerspectiveCamera {
    fn generate_ray(&self, sample: &CameraSample) -> (Ray, Float) {
        // Map the raster location to [-1, 1]^2 screen coordinates with +y up.
        let s = 2.0 * sample.p_film.x / self.resolution.x as Float - 1.0;
        let t = 1.0 - 2.0 * sample.p_film.y / self.resolution.y as Float;

        let d = self.u * (s * self.half_width) + self.v * (t * self.half_height) - self.w;
        (Ray::new(self.eye, d.normalize()), 1.0)
    }

    fn resolution(&self) -> Point2i {
        self.resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::geometry::Point2f;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(
            Point3f::new(0.0, 0.0, 5.0),
            Point3f::new(0.0, 0.0, 0.0),
            Vector3f::new(0.0, 1.0, 0.0),
            60.0,
            Point2i::new(200, 100),
        )
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = camera();
        let sample = CameraSample::new(Point2f::new(100.0, 50.0), Point2f::new(0.5, 0.5));
        let (ray, weight) = camera.generate_ray(&sample);
        assert_eq!(weight, 1.0);
        assert_eq!(ray.o, Point3f::new(0.0, 0.0, 5.0));
        let expected = Vector3f::new(0.0, 0.0, -1.0);
        assert!((ray.d - expected).length() < 1e-5);
    }

    #[test]
    fn rays_are_normalized() {
        let camera = camera();
        for (x, y) in [(0.0, 0.0), (199.0, 0.0), (0.0, 99.0), (150.0, 25.0)] {
            let sample = CameraSample::new(Point2f::new(x, y), Point2f::new(0.5, 0.5));
            let (ray, _) = camera.generate_ray(&sample);
            assert!(abs(ray.d.length() - 1.0) < 1e-5);
        }
    }

    #[test]
    fn raster_up_is_world_up() {
        // Smaller raster y is higher in the image.
        let camera = camera();
        let top = CameraSample::new(Point2f::new(100.0, 10.0), Point2f::new(0.5, 0.5));
        let bottom = CameraSample::new(Point2f::new(100.0, 90.0), Point2f::new(0.5, 0.5));
        let (ray_top, _) = camera.generate_ray(&top);
        let (ray_bottom, _) = camera.generate_ray(&bottom);
        assert!(ray_top.d.y > ray_bottom.d.y);
    }
}
