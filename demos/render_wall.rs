//! Renders two seconds of the default wall to PNG files under `target/`.
//!
//! Run with `cargo run --example render_wall`.

use clockwall::{CpuRenderer, EpochMs, RenderSettings, WallConfig, WallPlayer};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let config = WallConfig {
        fps: clockwall::Fps::new(10, 1)?,
        ..WallConfig::default()
    };

    let mut player = WallPlayer::from_config(&config, CpuRenderer::new(RenderSettings::default()))?;

    let out_dir = std::path::Path::new("target").join("render_wall");
    std::fs::create_dir_all(&out_dir)?;

    let frames = 20;
    let mut written = 0u64;
    player.render_sequence(EpochMs(0), frames, &mut |index, frame| {
        let path = out_dir.join(format!("frame_{index:05}.png"));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| clockwall::ClockwallError::render(e.to_string()))?;
        written += 1;
        Ok(())
    })?;

    eprintln!("wrote {written} frames to {}", out_dir.display());
    Ok(())
}
