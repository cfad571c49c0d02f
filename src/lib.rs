//! Clockwall is a generative animation engine for a wall of analog clocks.
//!
//! A wall is a grid of clock faces whose hour/minute hands are driven not by
//! real time but by a playlist of pluggable *position providers*: pure-ish
//! strategies that map `(timestamp, cell)` to hand angles. A scheduler
//! advances the playlist by wall-clock time and cross-fades between entries
//! by interpolating hand angles over a transition window.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `Scheduler::resolve_current(now) -> ActiveProvider`
//!    (which provider is live this frame, plain or blended)
//! 2. **Fan out**: `resolve_frame(provider, grid, now) -> WallFrame`
//!    (one [`HandPosition`] per grid cell, rest pose for uncovered cells)
//! 3. **Render**: `WallRenderer::render_frame(&WallFrame) -> FrameRGBA`
//!    (CPU backend producing premultiplied RGBA8 pixels)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: providers are pure functions of the
//!   timestamp except for explicitly seeded per-cell randomness.
//! - **Single-threaded core**: exactly one resolve per frame, issued by the
//!   host loop; rendered output is handed off immutably.
//! - **Renderers are collaborators**: the core never touches a drawing
//!   surface; [`WallRenderer`] is the only seam.
#![forbid(unsafe_code)]

mod foundation;
mod provider;
mod render;
mod runtime;
mod schedule;
mod wall;

pub use foundation::core::{CellCoord, EpochMs, Fps, GridSize, HandPosition};
pub use foundation::error::{ClockwallError, ClockwallResult};
pub use provider::analog::AnalogClockProvider;
pub use provider::digital::DigitalClockProvider;
pub use provider::field_lines::FieldLinesProvider;
pub use provider::randomize::RandomizeProvider;
pub use provider::rest::{RestProvider, rest_position};
pub use provider::PositionProvider;
pub use render::cpu::CpuRenderer;
pub use render::{FrameRGBA, RenderSettings, WallRenderer};
pub use runtime::clock::{ManualClock, SystemClock, TimeSource};
pub use runtime::player::WallPlayer;
pub use schedule::blend::BlendedProvider;
pub use schedule::ease::Ease;
pub use schedule::scheduler::{ActiveProvider, Scheduler};
pub use wall::config::{PlaylistEntrySpec, ProviderSpec, WallConfig};
pub use wall::frame::{WallFrame, resolve_frame};
