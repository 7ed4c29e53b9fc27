extern crate nalgebra as na;

use log::trace;
use na::Vector3;

pub mod error;
pub mod output;
pub mod render;
pub mod scene;

pub use error::{Result, TraceError};
pub use render::{render, render_gradient, Framebuffer, RenderConfig};

/// Color returned for rays that hit nothing.
pub const BACKGROUND_COLOR: [f32; 3] = [0.2, 0.7, 0.8];

/// Hits at or beyond this distance count as background.
///
/// No sphere of the reference scene comes close to it; it acts as a far plane.
pub const BACKGROUND_HORIZON: f32 = 1000.0;

/// A flat, unlit surface color.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Material {
    pub diffuse_color: Vector3<f32>,
}

impl Material {
    pub fn new(r: f32, g: f32, b: f32) -> Material {
        Material {
            diffuse_color: Vector3::new(r, g, b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f32>,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vector3<f32>, radius: f32, material: Material) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }

    /// Distance along `ray` to the nearest intersection in front of its origin.
    ///
    /// Uses the geometric method: project the origin-to-center vector onto the
    /// ray, compare the squared distance of the center from the ray line with
    /// the squared radius, then step back by half the chord length. If the near
    /// root lies behind the origin (the origin is inside the sphere) the far
    /// root is used instead.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        let to_center = self.center - ray.origin;
        let tca = to_center.dot(&ray.direction);
        let d2 = to_center.dot(&to_center) - tca * tca;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }
        let thc = (radius2 - d2).sqrt();
        let t1 = tca + thc;
        let mut t0 = tca - thc;
        if t0 < 0.0 {
            t0 = t1;
        }
        if t0 < 0.0 {
            None
        } else {
            Some(t0)
        }
    }

    pub fn normal_at(&self, point: &Vector3<f32>) -> Vector3<f32> {
        (point - self.center).normalize()
    }
}

/// A half-line with a unit-length direction.
///
/// `Ray::new` normalizes, so every `Ray` satisfies the unit direction
/// assumption of [`Sphere::ray_intersect`].
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vector3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Result<Ray> {
        if !direction.iter().all(|c| c.is_finite()) {
            return Err(TraceError::DegenerateDirection);
        }
        let direction = direction
            .try_normalize(f32::EPSILON)
            .ok_or(TraceError::DegenerateDirection)?;
        Ok(Ray { origin, direction })
    }

    pub fn at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// The nearest surface a ray runs into.
///
/// Shading only reads the material today; point and normal are reported so
/// lighting can be added without changing the intersection interface.
#[derive(Clone, Copy, Debug)]
pub struct Hit {
    pub distance: f32,
    pub point: Vector3<f32>,
    pub normal: Vector3<f32>,
    pub material: Material,
}

/// An ordered list of spheres plus what to show where none is hit.
///
/// Sphere order matters: on equal distances the earlier sphere wins.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub background: Vector3<f32>,
    pub horizon: f32,
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new(Vec::new())
    }
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>) -> Scene {
        Scene {
            spheres,
            background: Vector3::from(BACKGROUND_COLOR),
            horizon: BACKGROUND_HORIZON,
        }
    }

    /// Find the closest sphere hit by `ray`, if it is nearer than the horizon.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let mut closest_match = f32::INFINITY;
        let mut nearest: Option<Hit> = None;

        // strict `<` keeps the first sphere on ties
        for sphere in &self.spheres {
            if let Some(distance) = sphere.ray_intersect(ray) {
                if distance < closest_match {
                    closest_match = distance;
                    let point = ray.at(distance);
                    nearest = Some(Hit {
                        distance,
                        point,
                        normal: sphere.normal_at(&point),
                        material: sphere.material,
                    });
                }
            }
        }

        if closest_match < self.horizon {
            nearest
        } else {
            None
        }
    }

    /// Color seen along `ray`: the hit material's diffuse color, or the background.
    pub fn cast_ray(&self, ray: &Ray) -> Vector3<f32> {
        match self.intersect(ray) {
            Some(hit) => {
                trace!("hit at {:?}, distance {}", hit.point, hit.distance);
                hit.material.diffuse_color
            }
            None => self.background,
        }
    }
}
