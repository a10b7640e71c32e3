use std::path::PathBuf;

use anyhow::Context as _;
use bouquet::render::surface::Surface as _;
use bouquet::{
    AnimationLoop, CpuSurface, FrameSink as _, PngSequenceSink, Scene, SceneConfig, SinkConfig,
    Viewport,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bouquet", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Run the scripted animation loop and write a PNG sequence.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the generator seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the viewport width in CSS pixels.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Override the viewport height in CSS pixels.
    #[arg(long, requires = "width")]
    height: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Clock value to render at, in milliseconds.
    #[arg(long, default_value_t = 2000.0)]
    at: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Override the number of frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Override the frame rate.
    #[arg(long)]
    fps: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    let mut cfg = match &args.config {
        Some(path) => SceneConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let (Some(w), Some(h)) = (args.width, args.height) {
        cfg.viewport = Viewport::new(w, h).context("invalid --width/--height")?;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.scene)?;
    let mut rng = cfg.rng();
    let scene = Scene::new(cfg.viewport, cfg.scene_opts(), 0.0, &mut rng);

    let mut surface = CpuSurface::new(cfg.viewport, cfg.surface_opts())?;
    surface.begin_frame();
    scene.draw(&mut surface, args.at);
    let frame = surface.finish_frame()?;

    if let Some(parent) = args.out.parent() {
        bouquet::encode::sink::ensure_dir(parent)?;
    }
    bouquet::encode::sink::write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(&args.scene)?;
    if let Some(frames) = args.frames {
        cfg.frames = frames;
    }
    if let Some(fps) = args.fps {
        cfg.fps = fps;
    }
    cfg.validate()?;

    let mut rng = cfg.rng();
    let scene = Scene::new(cfg.viewport, cfg.scene_opts(), 0.0, &mut rng);
    let mut anim = AnimationLoop::new(scene, rng);
    let mut host = cfg.scripted_host()?;
    let mut surface = CpuSurface::new(cfg.viewport, cfg.surface_opts())?;

    let (width, height) = surface.device_size();
    let mut sink = PngSequenceSink::new(&args.out_dir);
    sink.begin(SinkConfig {
        width,
        height,
        fps: cfg.fps,
    })?;
    let drawn = anim.run(&mut host, &mut surface, |info, surface| {
        let frame = surface.finish_frame()?;
        sink.push_frame(info.index, &frame)
    })?;
    sink.end()?;

    eprintln!("wrote {drawn} frame(s) to {}", args.out_dir.display());
    Ok(())
}
