use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use clockwall::{CpuRenderer, EpochMs, FrameRGBA, RenderSettings, WallConfig, WallPlayer};

#[derive(Parser, Debug)]
#[command(name = "clockwall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single wall frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG sequence offline.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input wall config JSON; omit for the built-in default wall.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Timestamp to resolve, in epoch milliseconds.
    #[arg(long = "at-ms", default_value_t = 0)]
    at_ms: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input wall config JSON; omit for the built-in default wall.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output directory for frame_NNNNN.png files.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Timestamp of the first frame, in epoch milliseconds.
    #[arg(long = "start-ms", default_value_t = 0)]
    start_ms: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_config(in_path: Option<&PathBuf>) -> anyhow::Result<WallConfig> {
    match in_path {
        Some(path) => Ok(WallConfig::from_path(path)?),
        None => Ok(WallConfig::default()),
    }
}

fn write_png(path: &std::path::Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.in_path.as_ref())?;
    let mut player = WallPlayer::from_config(&config, CpuRenderer::new(RenderSettings::default()))?;

    let frame = player.render_at(EpochMs(args.at_ms))?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.in_path.as_ref())?;
    let mut player = WallPlayer::from_config(&config, CpuRenderer::new(RenderSettings::default()))?;

    let out_dir = args.out.clone();
    player.render_sequence(
        EpochMs(args.start_ms),
        args.frames,
        &mut |index, frame| {
            let path = out_dir.join(format!("frame_{index:05}.png"));
            write_png(&path, &frame).map_err(clockwall::ClockwallError::Other)
        },
    )?;

    eprintln!("wrote {} frames to {}", args.frames, out_dir.display());
    Ok(())
}
