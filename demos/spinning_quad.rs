//! Spinning quad demo
//!
//! Rotates a filled plane and a wireframe cube and writes each frame as an
//! SVG file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p softpipe-render --example spinning_quad -- \
//!     [out_dir] [--frames N] [--config renderer.json]
//! ```

use softpipe_math::{Euler, Point3, Transform};
use softpipe_render::{
    Color, Geometry, Material, Mesh, PerspectiveCamera, Renderer, RendererConfig, Scene, SvgSurface,
};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

struct Args {
    out_dir: PathBuf,
    frames: usize,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        out_dir: PathBuf::from("frames"),
        frames: 36,
        config: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let n = iter.next().ok_or("--frames requires a value")?;
                args.frames = n.parse().map_err(|_| format!("invalid frame count: {n}"))?;
            }
            "--config" => {
                let path = iter.next().ok_or("--config requires a path")?;
                args.config = Some(PathBuf::from(path));
            }
            other if other.starts_with("--") => return Err(format!("unknown option: {other}")),
            other => args.out_dir = PathBuf::from(other),
        }
    }
    Ok(args)
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    match std::env::var("RUST_LOG") {
        Ok(filter) => {
            builder.parse_filters(&filter);
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Info);
        }
    }
    builder.init();
}

fn run(args: Args) -> softpipe_core::Result<()> {
    let config = match &args.config {
        Some(path) => RendererConfig::from_json_file(path)?,
        None => RendererConfig {
            clear_color: Color::rgb(0x1a, 0x1a, 0x1a),
            ..RendererConfig::default()
        },
    };

    let mut scene = Scene::new();
    let quad = scene.add(
        Mesh::new(
            Arc::new(Geometry::plane(2.0, 1.0)),
            Arc::new(Material::basic(Color::rgb(0x4f, 0xc3, 0xf7))),
        )
        .named("quad"),
    );
    let cube = scene.add(
        Mesh::new(
            Arc::new(Geometry::cuboid(0.8, 0.8, 0.8)),
            Arc::new(Material::wireframe(Color::rgb(0xff, 0xb7, 0x4d))),
        )
        .named("cube")
        .with_transform(Transform::from_position(Point3::new(0.0, 0.0, 1.0))),
    );

    let mut camera = PerspectiveCamera::default().at(Point3::new(0.0, 1.0, 5.0));
    camera.set_aspect(WIDTH as f64, HEIGHT as f64);
    camera.look_at(Point3::ZERO);

    let mut renderer = Renderer::with_config(SvgSurface::new(WIDTH, HEIGHT), config);
    renderer.resize();

    std::fs::create_dir_all(&args.out_dir)?;
    let step = std::f64::consts::TAU / args.frames.max(1) as f64;

    for frame in 0..args.frames {
        let angle = step * frame as f64;
        if let Some(mesh) = scene.get_mut(quad) {
            mesh.transform.rotation = Euler::new(0.0, angle, 0.0);
        }
        if let Some(mesh) = scene.get_mut(cube) {
            mesh.transform.rotation = Euler::new(angle * 0.5, angle, 0.0);
        }

        renderer.render(&scene, &mut camera);

        let path = args.out_dir.join(format!("frame_{frame:03}.svg"));
        renderer.surface().write_to(&path)?;
        let stats = renderer.last_frame();
        log::info!("wrote {} ({} faces)", path.display(), stats.faces_drawn);
    }

    Ok(())
}

fn main() {
    init_logging();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {msg}");
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        log::error!("{e}");
        process::exit(1);
    }
}
