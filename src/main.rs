extern crate nalgebra as na;

use clap::Parser;
use log::{error, info};
use na::Vector3;

use spheretrace::output::save;
use spheretrace::scene::{load_scene, reference_scene};
use spheretrace::{render, render_gradient, RenderConfig, Result, TraceError};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn run(args: Args) -> Result<()> {
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| TraceError::InvalidConfig(format!("thread pool: {}", e)))?;
    }

    let framebuffer = if args.gradient {
        render_gradient(args.width, args.height)?
    } else {
        let scene = match &args.scene {
            Some(path) => load_scene(path)?,
            None => {
                info!("No scene file given, using the built-in scene");
                reference_scene()
            }
        };
        let camera = match args.camera.as_slice() {
            [x, y, z] => Vector3::new(*x, *y, *z),
            other => {
                return Err(TraceError::InvalidConfig(format!(
                    "camera needs exactly three coordinates, got {:?}",
                    other
                )))
            }
        };
        let config = RenderConfig {
            width: args.width,
            height: args.height,
            fov: args.fov.to_radians(),
            camera,
        };
        render(&scene, &config)?
    };

    save(&framebuffer, &args.output)
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
