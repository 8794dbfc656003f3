//! Command-line entry point: build the wave scene and optionally export the
//! document as JSON.
//!
//! Usage: waveforge [--config <config.json>] [--out <scene.json>]

use std::fs;

use anyhow::{bail, Context, Result};

use waveforge::{build_wave_scene, Scene, SceneConfig};

struct Args {
    config_path: Option<String>,
    out_path: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config_path: None,
        out_path: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                args.config_path = Some(iter.next().context("--config requires a path")?);
            }
            "--out" => {
                args.out_path = Some(iter.next().context("--out requires a path")?);
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let config: SceneConfig = match &args.config_path {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => SceneConfig::default(),
    };

    let mut scene = Scene::new();
    let handles = build_wave_scene(&mut scene, &config)?;

    let timeline = scene.timeline();
    println!(
        "built scene: {} objects, {} materials, frames {}..{} at {} fps",
        scene.objects().len(),
        scene.materials().len(),
        timeline.frame_start,
        timeline.frame_end,
        timeline.fps
    );
    if let Some(terrain) = scene.object(handles.terrain).and_then(|o| o.mesh()) {
        println!(
            "terrain: {} points, {} quads, {} shape keys",
            terrain.vertex_count(),
            terrain.quad_count(),
            terrain.shape_keys().len()
        );
    }

    if let Some(path) = &args.out_path {
        let json = serde_json::to_string_pretty(&scene)?;
        fs::write(path, json).with_context(|| format!("writing {path}"))?;
        println!("scene written to {path}");
    }

    Ok(())
}
