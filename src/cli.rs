use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Values accepted by `--log-level`; render timing is logged at `info`,
/// scene loading at `debug` and every sphere hit at `trace`.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tracer")]
#[command(about = "Ray traces a scene of flat-colored spheres into a PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    pub height: usize,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub fov: f32,

    /// Camera position; the camera always looks down -Z
    #[arg(
        long,
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true,
        default_values_t = [0.0, 0.0, 0.0]
    )]
    pub camera: Vec<f32>,

    /// JSON scene file; the built-in four-sphere scene is used when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output file (.ppm, or any format the image crate knows, e.g. .png)
    #[arg(short, long, default_value = "./out.ppm")]
    pub output: PathBuf,

    /// Render the scene-free color gradient instead of the spheres
    #[arg(long)]
    pub gradient: bool,

    /// Number of render threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
