use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Fps, GridSize};
use crate::foundation::error::{ClockwallError, ClockwallResult};
use crate::foundation::math::Fnv1a64;
use crate::provider::analog::AnalogClockProvider;
use crate::provider::digital::DigitalClockProvider;
use crate::provider::field_lines::FieldLinesProvider;
use crate::provider::randomize::RandomizeProvider;
use crate::provider::rest::RestProvider;
use crate::provider::PositionProvider;
use crate::schedule::ease::Ease;
use crate::schedule::scheduler::Scheduler;

/// A complete wall description.
///
/// This is a pure data model that can be built programmatically or
/// deserialized from JSON, validated fail-fast, and turned into a live
/// [`Scheduler`] with [`WallConfig::build_scheduler`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WallConfig {
    /// Wall dimensions in cells.
    #[serde(default)]
    pub grid: GridSize,
    /// Host frame cadence (used by the player, not the scheduler).
    #[serde(default)]
    pub fps: Fps,
    /// Blend window before each playlist switch, in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Shaping curve for blend progress.
    #[serde(default)]
    pub transition_ease: Ease,
    /// Global determinism seed for randomized providers.
    #[serde(default)]
    pub seed: u64,
    /// Ordered playlist; cycles after the last entry.
    pub playlist: Vec<PlaylistEntrySpec>,
}

fn default_transition_ms() -> u64 {
    3000
}

/// One playlist entry: which provider to run and for how long.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaylistEntrySpec {
    pub provider: ProviderSpec,
    pub duration_ms: u64,
}

/// Tagged selection of a provider variant, the config-file counterpart of
/// the [`PositionProvider`] implementations.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "params")]
pub enum ProviderSpec {
    /// All clocks in the rest pose.
    Rest,
    /// HH:MM dot-matrix glyphs, frozen at activation.
    Digital,
    /// Counter-rotating sweep with a per-column phase shear.
    FieldLines { offset_deg: f64 },
    /// Per-cell frozen random pose.
    Randomize,
    /// Ordinary analog time on every face.
    Analog,
}

impl ProviderSpec {
    /// Instantiate the provider for a wall of `grid` cells. `seed` must
    /// already be entry-specific (see [`WallConfig::build_scheduler`]).
    pub fn build(&self, grid: GridSize, seed: u64) -> Box<dyn PositionProvider> {
        match *self {
            Self::Rest => Box::new(RestProvider::new(grid)),
            Self::Digital => Box::new(DigitalClockProvider::new(grid)),
            Self::FieldLines { offset_deg } => Box::new(FieldLinesProvider::new(grid, offset_deg)),
            Self::Randomize => Box::new(RandomizeProvider::new(seed)),
            Self::Analog => Box::new(AnalogClockProvider::new()),
        }
    }
}

impl WallConfig {
    /// Check every configuration rule that would otherwise surface as
    /// runtime misbehavior: zero-sized grid or fps, zero entry durations,
    /// entries shorter than the transition window.
    pub fn validate(&self) -> ClockwallResult<()> {
        GridSize::new(self.grid.cols, self.grid.rows)?;
        Fps::new(self.fps.num, self.fps.den)?;

        for (index, entry) in self.playlist.iter().enumerate() {
            if entry.duration_ms == 0 {
                return Err(ClockwallError::config(format!(
                    "playlist entry {index} has zero duration"
                )));
            }
            if entry.duration_ms <= self.transition_ms {
                return Err(ClockwallError::config(format!(
                    "playlist entry {index} ({}ms) does not exceed the transition window ({}ms)",
                    entry.duration_ms, self.transition_ms
                )));
            }
        }
        Ok(())
    }

    /// Build a scheduler with one pushed entry per playlist item.
    ///
    /// Each randomized entry gets its own sub-seed derived from the global
    /// seed and the entry index, so repeated `Randomize` entries show
    /// different patterns while the wall stays reproducible overall.
    pub fn build_scheduler(&self) -> ClockwallResult<Scheduler> {
        self.validate()?;

        let mut scheduler = Scheduler::new();
        scheduler.set_transition_duration(self.transition_ms)?;
        scheduler.set_transition_ease(self.transition_ease);

        for (index, entry) in self.playlist.iter().enumerate() {
            let mut hasher = Fnv1a64::new(self.seed);
            hasher.write_u32(index as u32);
            let provider = entry.provider.build(self.grid, hasher.finish());
            scheduler.push_entry(provider, entry.duration_ms)?;
        }
        Ok(scheduler)
    }

    pub fn from_json(json: &str) -> ClockwallResult<Self> {
        serde_json::from_str(json).map_err(|e| ClockwallError::serde(e.to_string()))
    }

    pub fn to_json(&self) -> ClockwallResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ClockwallError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> ClockwallResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read wall config '{}'", path.display()))?;
        Self::from_json(&json)
    }
}

impl Default for WallConfig {
    /// The classic wall: rest, the digital clock, two field-line sweeps
    /// around a randomized scatter, with a 3 s cross-fade.
    fn default() -> Self {
        let field_lines = ProviderSpec::FieldLines { offset_deg: 10.0 };
        Self {
            grid: GridSize::default(),
            fps: Fps::default(),
            transition_ms: default_transition_ms(),
            transition_ease: Ease::Linear,
            seed: 0,
            playlist: vec![
                PlaylistEntrySpec {
                    provider: ProviderSpec::Rest,
                    duration_ms: 5000,
                },
                PlaylistEntrySpec {
                    provider: ProviderSpec::Digital,
                    duration_ms: 15_000,
                },
                PlaylistEntrySpec {
                    provider: field_lines.clone(),
                    duration_ms: 10_000,
                },
                PlaylistEntrySpec {
                    provider: ProviderSpec::Randomize,
                    duration_ms: 5000,
                },
                PlaylistEntrySpec {
                    provider: field_lines,
                    duration_ms: 15_000,
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wall/config.rs"]
mod tests;
