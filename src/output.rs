//! Writing framebuffers to disk.
//!
//! Binary PPM (P6) is written directly; other formats go through the
//! `image` crate and are chosen by file extension.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};
use log::{info, warn};

use crate::error::Result;
use crate::render::Framebuffer;

/// Quantize a linear color channel to the nearest byte, clamping to [0, 1] first.
///
/// Scaling happens in f64: in f32, 0.7 * 255 lands exactly on 178.5 and
/// would round up.
pub fn channel_to_byte(c: f32) -> u8 {
    (f64::from(c.clamp(0.0, 1.0)) * 255.0).round() as u8
}

pub fn to_rgb_image(framebuffer: &Framebuffer) -> RgbImage {
    let mut imgbuf = RgbImage::new(framebuffer.width() as u32, framebuffer.height() as u32);
    for (pixel, color) in imgbuf.pixels_mut().zip(framebuffer.pixels()) {
        *pixel = Rgb([
            channel_to_byte(color.x),
            channel_to_byte(color.y),
            channel_to_byte(color.z),
        ]);
    }
    imgbuf
}

/// Encode as binary PPM: the ASCII header followed by raw RGB triples, row-major.
pub fn encode_ppm<W: Write>(framebuffer: &Framebuffer, mut writer: W) -> Result<()> {
    write!(
        writer,
        "P6\n{} {}\n255\n",
        framebuffer.width(),
        framebuffer.height()
    )?;
    writer.write_all(to_rgb_image(framebuffer).as_raw())?;
    writer.flush()?;
    Ok(())
}

pub fn write_ppm<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    encode_ppm(framebuffer, BufWriter::new(file))?;
    info!("Image saved as {}", path.as_ref().display());
    Ok(())
}

/// Save to `path`, as PPM when the extension is `ppm` or missing, otherwise
/// in whatever format the `image` crate associates with the extension.
pub fn save<P: AsRef<Path>>(framebuffer: &Framebuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    if framebuffer.is_empty() {
        warn!("{} will contain no pixels", path.display());
    }
    let is_ppm = match path.extension() {
        None => true,
        Some(ext) => ext.eq_ignore_ascii_case("ppm"),
    };
    if is_ppm {
        return write_ppm(framebuffer, path);
    }
    to_rgb_image(framebuffer).save(path)?;
    info!("Image saved as {}", path.display());
    Ok(())
}
