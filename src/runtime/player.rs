use std::time::Duration;

use crate::foundation::core::{EpochMs, Fps, GridSize};
use crate::foundation::error::ClockwallResult;
use crate::render::{FrameRGBA, WallRenderer};
use crate::runtime::clock::TimeSource;
use crate::schedule::scheduler::Scheduler;
use crate::wall::config::WallConfig;
use crate::wall::frame::resolve_frame;

/// The host loop: owns the scheduler, the grid, and a renderer, and drives
/// one tick per frame.
///
/// Lifecycle is explicit — construct (directly or from a [`WallConfig`]),
/// configure further through [`WallPlayer::scheduler_mut`] if needed, then
/// run — no global wiring. Each tick flows one direction: scheduler resolve
/// → per-cell fan-out → renderer, with the frame handed off immutably.
pub struct WallPlayer<R: WallRenderer> {
    scheduler: Scheduler,
    grid: GridSize,
    fps: Fps,
    renderer: R,
}

impl<R: WallRenderer> WallPlayer<R> {
    pub fn new(scheduler: Scheduler, grid: GridSize, fps: Fps, renderer: R) -> Self {
        Self {
            scheduler,
            grid,
            fps,
            renderer,
        }
    }

    /// Build the scheduler described by `config` and wrap it with `renderer`.
    pub fn from_config(config: &WallConfig, renderer: R) -> ClockwallResult<Self> {
        Ok(Self::new(
            config.build_scheduler()?,
            config.grid,
            config.fps,
            renderer,
        ))
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// One tick: resolve the active provider at `now`, fan it out across
    /// the grid, and render the result.
    #[tracing::instrument(skip(self))]
    pub fn render_at(&mut self, now: EpochMs) -> ClockwallResult<FrameRGBA> {
        let frame = {
            let active = self.scheduler.resolve_current(now);
            resolve_frame(active.as_ref(), self.grid, now)
        };
        self.renderer.render_frame(&frame)
    }

    /// Render `frame_count` frames offline with synthetic time stepped at
    /// the configured fps from `start`, pushing each frame into `sink`.
    pub fn render_sequence(
        &mut self,
        start: EpochMs,
        frame_count: u64,
        sink: &mut dyn FnMut(u64, FrameRGBA) -> ClockwallResult<()>,
    ) -> ClockwallResult<()> {
        for index in 0..frame_count {
            let now = self.fps.frame_timestamp(start, index);
            let frame = self.render_at(now)?;
            sink(index, frame)?;
        }
        Ok(())
    }

    /// Drive `frame_count` frames in real time: read the clock, tick,
    /// render, then sleep out the remainder of the frame interval.
    ///
    /// A plain bounded loop; hosts wanting endless playback wrap it or call
    /// [`WallPlayer::render_at`] from their own loop.
    pub fn run(
        &mut self,
        time: &dyn TimeSource,
        frame_count: u64,
        sink: &mut dyn FnMut(u64, FrameRGBA) -> ClockwallResult<()>,
    ) -> ClockwallResult<()> {
        let interval_ms = self.fps.frame_duration_ms();
        for index in 0..frame_count {
            let now = time.now();
            let frame = self.render_at(now)?;
            sink(index, frame)?;

            let spent = time.now().since(now) as f64;
            if spent < interval_ms {
                std::thread::sleep(Duration::from_micros(
                    ((interval_ms - spent) * 1000.0) as u64,
                ));
            }
        }
        Ok(())
    }
}
