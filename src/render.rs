use std::f32::consts::PI;
use std::time::Instant;

use log::{debug, info};
use na::Vector3;
use rayon::prelude::*;

use crate::error::{Result, TraceError};
use crate::{Ray, Scene};

/// Image size and the fixed camera: at `camera`, looking down -Z,
/// with a vertical field of view of `fov` radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub fov: f32,
    pub camera: Vector3<f32>,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            width: 1024,
            height: 768,
            fov: PI / 2.0,
            camera: Vector3::zeros(),
        }
    }
}

/// Reject image sizes with no pixels, or too large to index and encode.
///
/// Each side must fit the `u32` the image encoders take, and the pixel count
/// must fit `usize`.
pub fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(TraceError::InvalidConfig(format!(
            "image size {}x{} has no pixels",
            width, height
        )));
    }
    if u32::try_from(width).is_err() || u32::try_from(height).is_err() {
        return Err(TraceError::InvalidConfig(format!(
            "image size {}x{} exceeds {} pixels per side",
            width,
            height,
            u32::MAX
        )));
    }
    if width.checked_mul(height).is_none() {
        return Err(TraceError::InvalidConfig(format!(
            "image size {}x{} overflows the pixel count",
            width, height
        )));
    }
    Ok(())
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)?;
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(TraceError::InvalidConfig(format!(
                "field of view {} rad is outside (0, pi)",
                self.fov
            )));
        }
        if !self.camera.iter().all(|c| c.is_finite()) {
            return Err(TraceError::InvalidConfig(format!(
                "camera position {:?} is not finite",
                self.camera
            )));
        }
        Ok(())
    }

    /// Primary ray through the center of pixel (`i`, `j`), counted from the top left.
    pub fn camera_ray(&self, i: usize, j: usize) -> Result<Ray> {
        let half_height = (self.fov / 2.0).tan();
        let aspect_ratio = self.width as f32 / self.height as f32;
        let x = (2.0 * (i as f32 + 0.5) / self.width as f32 - 1.0) * half_height * aspect_ratio;
        let y = -(2.0 * (j as f32 + 0.5) / self.height as f32 - 1.0) * half_height;
        Ray::new(self.camera, Vector3::new(x, y, -1.0))
    }
}

/// Row-major grid of linear colors, one per pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: usize,
    height: usize,
    pixels: Vec<Vector3<f32>>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize, pixels: Vec<Vector3<f32>>) -> Result<Framebuffer> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(TraceError::InvalidConfig(format!(
                "{} pixels do not fill a {}x{} framebuffer",
                pixels.len(),
                width,
                height
            )));
        }
        Ok(Framebuffer {
            width,
            height,
            pixels,
        })
    }

    #[cfg(test)]
    pub(crate) fn filled(width: usize, height: usize, color: Vector3<f32>) -> Framebuffer {
        Framebuffer {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Vector3<f32>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(x + y * self.width).copied()
    }

    pub fn pixels(&self) -> &[Vector3<f32>] {
        &self.pixels
    }
}

/// Trace one primary ray per pixel and collect the colors.
///
/// Pixels are shaded in parallel; each one only reads the scene, and the
/// indexed collect keeps them in row-major order.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<Framebuffer> {
    config.validate()?;
    info!(
        "Rendering {}x{} ({} spheres, fov {:.3} rad) on {} threads",
        config.width,
        config.height,
        scene.spheres.len(),
        config.fov,
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let width = config.width;
    let pixels = (0..config.width * config.height)
        .into_par_iter()
        .map(|index| -> Result<Vector3<f32>> {
            let ray = config.camera_ray(index % width, index / width)?;
            Ok(scene.cast_ray(&ray))
        })
        .collect::<Result<Vec<Vector3<f32>>>>()?;

    info!("Image rendered in {:.2?}", start.elapsed());
    Framebuffer::new(config.width, config.height, pixels)
}

/// Scene-free test pattern: red grows downwards, green to the right.
pub fn render_gradient(width: usize, height: usize) -> Result<Framebuffer> {
    check_dimensions(width, height)?;
    debug!("Rendering {}x{} gradient", width, height);
    let pixels = (0..width * height)
        .into_par_iter()
        .map(|index| -> Vector3<f32> {
            let (i, j) = (index % width, index / width);
            Vector3::new(j as f32 / height as f32, i as f32 / width as f32, 0.0)
        })
        .collect();
    Ok(Framebuffer {
        width,
        height,
        pixels,
    })
}
