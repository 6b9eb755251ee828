//! Headless animation preview

use crate::cli::AnimateArgs;
use crate::config::FolioConfig;
use anyhow::{Context, Result};
use folio_animation::{start, AnimationHandle, IntervalTicker, ManualTicker, Viewport};
use folio_paint::{PaintCommand, Size};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Summary of the last rendered frame
#[derive(Debug, Serialize)]
struct FrameSummary {
    preset: &'static str,
    frames: u64,
    logical_size: Size,
    pixel_size: (u32, u32),
    fills: usize,
    lines: usize,
    labels: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<Vec<PaintCommand>>,
}

pub fn run(config: &FolioConfig, args: AnimateArgs) -> Result<()> {
    let settings = &config.animation;
    let size = Size::new(
        args.width.unwrap_or(settings.width),
        args.height.unwrap_or(settings.height),
    );
    if size.is_empty() {
        anyhow::bail!("Surface size must be positive, got {}x{}", size.width, size.height);
    }
    let dpr = args.dpr.unwrap_or(settings.device_pixel_ratio);
    let scheme = args
        .scheme
        .or(config.theme.scheme_override)
        .unwrap_or_else(folio_theme::detect_system_color_scheme);

    let animation = args
        .preset
        .config(scheme)
        .with_optional_seed(args.seed.or(settings.seed));
    let viewport = Arc::new(Viewport::with_device_pixel_ratio(size, dpr));

    let handle = if args.realtime {
        let ticker = Arc::new(
            IntervalTicker::new(settings.target_fps).context("Failed to start frame ticker")?,
        );
        let handle = start(animation, viewport, ticker.clone());
        wait_for_frames(&handle, args.frames, settings.target_fps);
        handle.stop();
        ticker.shutdown();
        handle
    } else {
        let ticker = Arc::new(ManualTicker::new());
        let handle = start(animation, viewport, ticker.clone());
        for _ in 0..args.frames {
            ticker.advance();
        }
        handle.stop();
        handle
    };

    let summary = summarize(&handle, args.preset.id(), args.json)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{}: {} frames at {}x{} ({}x{} px)",
            summary.preset,
            summary.frames,
            summary.logical_size.width,
            summary.logical_size.height,
            summary.pixel_size.0,
            summary.pixel_size.1
        );
        println!(
            "last frame: {} fills, {} lines, {} labels",
            summary.fills, summary.lines, summary.labels
        );
    }
    Ok(())
}

fn wait_for_frames(handle: &AnimationHandle, frames: u64, target_fps: u32) {
    // Generous bound so a stalled ticker cannot hang the CLI
    let budget = Duration::from_secs_f64(frames as f64 / target_fps.max(1) as f64 * 4.0 + 1.0);
    let deadline = Instant::now() + budget;
    while handle.frames_rendered() < frames && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(2));
    }
    if handle.frames_rendered() < frames {
        tracing::warn!(
            "only {} of {} frames rendered before the deadline",
            handle.frames_rendered(),
            frames
        );
    }
}

fn summarize(handle: &AnimationHandle, preset: &'static str, with_commands: bool) -> Result<FrameSummary> {
    let surface = handle
        .surface()
        .context("Animation has no drawing surface")?;
    let surface = surface
        .lock()
        .map_err(|_| anyhow::anyhow!("Drawing surface lock poisoned"))?;

    let context = surface.context();
    Ok(FrameSummary {
        preset,
        frames: handle.frames_rendered(),
        logical_size: surface.logical_size(),
        pixel_size: surface.pixel_size(),
        fills: context.count(|c| {
            matches!(
                c,
                PaintCommand::FillCircle { .. } | PaintCommand::FillRect { .. }
            )
        }),
        lines: context.count(|c| matches!(c, PaintCommand::StrokeLine { .. })),
        labels: context.count(|c| matches!(c, PaintCommand::DrawText { .. })),
        commands: with_commands.then(|| surface.commands().to_vec()),
    })
}
