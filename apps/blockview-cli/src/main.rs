use anyhow::Context;
use blockview_assets::{Mesh, MeshStore};
use blockview_common::Location;
use blockview_ecs::{MeshComponent, dispatch};
use blockview_kernel::World;
use blockview_render::debug::{DebugShaderLibrary, RecordingContext, SceneState};
use blockview_render::{
    Camera, DroppedItemsRenderer, PassStats, RenderFrame, RenderSystem, RenderingConfig,
    ShaderParametersBase,
};
use blockview_tools::{PropertyProvider, SceneProperties, SceneSummary, WorldInspector};
use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Simulated milliseconds per frame.
const FRAME_MS: u64 = 50;
/// Radius of the ring the demo items are laid out on.
const RING_RADIUS: f32 = 8.0;

#[derive(Parser)]
#[command(name = "blockview-cli", about = "Headless dropped-item renderer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Build a demo scene and run the render passes headlessly
    Render {
        /// Number of dropped items to spawn
        #[arg(short, long, default_value = "8")]
        items: usize,
        /// Number of frames to render
        #[arg(short, long, default_value = "1")]
        ticks: u64,
        /// Dispose this many item meshes before rendering
        #[arg(short, long, default_value = "0")]
        dispose: usize,
        /// Rendering config (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the configured viewing distance
        #[arg(long)]
        viewing_distance: Option<u32>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List tunable properties of the demo scene
    Properties {
        /// Rendering config (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("blockview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: tick={}", World::new().tick());
            println!("ecs: {}", blockview_ecs::crate_info());
            println!("assets: {}", blockview_assets::crate_info());
            println!("render: {}", blockview_render::crate_info());
            println!("tools: {}", blockview_tools::crate_info());
        }
        Commands::Render {
            items,
            ticks,
            dispose,
            config,
            viewing_distance,
            json,
        } => {
            let mut config = load_config(config.as_ref())?;
            if let Some(distance) = viewing_distance {
                config.viewing_distance = distance;
            }
            let report = render_demo(&config, items, ticks, dispose)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.summary);
                for pass in &report.passes {
                    println!("{:<13} {}", pass.pass, pass.stats);
                }
                print!("{}", report.draw_log);
            }
        }
        Commands::Properties { config, json } => {
            let config = load_config(config.as_ref())?;
            let scene = SceneState::default();
            let params = ShaderParametersBase::new(&config, Some(&scene), None);
            let listing = SceneProperties::new()
                .with(Some(&config as &dyn PropertyProvider))
                .with(Some(&scene as &dyn PropertyProvider))
                .with(Some(&params as &dyn PropertyProvider))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for property in &listing {
                    println!("{property}");
                }
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RenderingConfig> {
    match path {
        Some(path) => RenderingConfig::load(path)
            .with_context(|| format!("loading rendering config from {}", path.display())),
        None => Ok(RenderingConfig::default()),
    }
}

#[derive(Serialize)]
struct PassReport {
    pass: &'static str,
    stats: PassStats,
}

#[derive(Serialize)]
struct RenderReport {
    summary: SceneSummary,
    frames: u64,
    draws: usize,
    passes: Vec<PassReport>,
    #[serde(skip)]
    draw_log: String,
}

/// Demo world: a ring of tagged items around the camera plus one untagged
/// prop straight ahead. Items behind the camera are culled.
struct DemoScene {
    world: World,
    meshes: MeshStore,
    items: DroppedItemsRenderer,
}

impl DemoScene {
    fn build(items: usize, dispose: usize) -> anyhow::Result<Self> {
        let mut world = World::new();
        let mut meshes = MeshStore::new();

        for i in 0..items {
            let angle = i as f32 * std::f32::consts::TAU / items as f32;
            let position = Vec3::new(angle.cos() * RING_RADIUS, 0.5, angle.sin() * RING_RADIUS);
            let location = Location::at(position).with_rotation(Quat::from_rotation_y(angle));
            let id = world.spawn_at(location);

            let handle = meshes.register(Mesh::cube(format!("item-{i}"), 0.25));
            if i < dispose {
                meshes.dispose(handle)?;
            }
            let components = world.components_mut();
            components.set_name(id, format!("item-{i}"));
            components.add_dropped_item(id);
            components.set_mesh(id, MeshComponent::new(handle));
        }

        let prop = world.spawn_at(Location::at(Vec3::new(0.0, 0.5, -4.0)));
        let prop_mesh = meshes.register(Mesh::cube("prop", 0.5));
        world.components_mut().set_name(prop, "prop");
        world
            .components_mut()
            .set_mesh(prop, MeshComponent::new(prop_mesh));

        let mut scene = Self {
            world,
            meshes,
            items: DroppedItemsRenderer::new(),
        };
        scene.flush();
        Ok(scene)
    }

    fn flush(&mut self) {
        let events = self.world.drain_component_events();
        dispatch(&events, &mut self.items);
    }
}

fn render_demo(
    config: &RenderingConfig,
    items: usize,
    ticks: u64,
    dispose: usize,
) -> anyhow::Result<RenderReport> {
    let mut demo = DemoScene::build(items, dispose)?;
    let mut shaders = DebugShaderLibrary::standard();
    let mut gfx = RecordingContext::new();
    let camera = Camera::looking_along(Vec3::new(0.0, 1.6, 0.0), Vec3::NEG_Z)
        .with_clip_planes(0.1, 200.0);
    let mut state = SceneState {
        camera: Some(camera),
        ..SceneState::default()
    };

    let mut passes = Vec::new();
    for _ in 0..ticks {
        demo.world.step(FRAME_MS);
        demo.flush();
        state.tick = demo.world.tick();
        gfx.clear_draws();

        let frame = RenderFrame {
            components: demo.world.components(),
            meshes: &demo.meshes,
            world_renderer: &state,
            time: Some(&demo.world),
            config,
        };
        let system: &dyn RenderSystem = &demo.items;
        passes = vec![
            PassReport {
                pass: "opaque",
                stats: system.render_opaque(&frame, &mut shaders, &mut gfx)?,
            },
            PassReport {
                pass: "alpha_blend",
                stats: system.render_alpha_blend(&frame, &mut shaders, &mut gfx)?,
            },
            PassReport {
                pass: "overlay",
                stats: system.render_overlay(&frame, &mut shaders, &mut gfx)?,
            },
            PassReport {
                pass: "first_person",
                stats: system.render_first_person(&frame, &mut shaders, &mut gfx)?,
            },
            PassReport {
                pass: "shadows",
                stats: system.render_shadows(&frame, &mut shaders, &mut gfx)?,
            },
        ];
        tracing::info!(tick = state.tick, stats = %passes[0].stats, "frame rendered");
    }

    Ok(RenderReport {
        summary: WorldInspector::summary(&demo.world, demo.items.registry()),
        frames: ticks,
        draws: gfx.draws().len(),
        passes,
        draw_log: gfx.summary(),
    })
}
