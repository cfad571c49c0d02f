use crate::foundation::core::{CellCoord, EpochMs, HandPosition};
use crate::provider::PositionProvider;
use crate::schedule::ease::Ease;

/// A derived provider that cross-fades between two others over a window.
///
/// Both endpoints are frozen snapshots: `from` is always sampled at the
/// window start and `to` at the window end, so fast-moving providers (field
/// lines, an analog second hand) do not jitter mid-blend — the transition
/// interpolates between two fixed poses regardless of how the endpoints
/// themselves move with time.
///
/// Interpolation is linear in raw degree space, deliberately not
/// shortest-angular-path: a blend from 10 to 350 degrees sweeps the long
/// way around.
pub struct BlendedProvider<'a> {
    from: &'a dyn PositionProvider,
    to: &'a dyn PositionProvider,
    window_start: EpochMs,
    duration_ms: u64,
    ease: Ease,
}

impl<'a> BlendedProvider<'a> {
    pub fn new(
        from: &'a dyn PositionProvider,
        to: &'a dyn PositionProvider,
        window_start: EpochMs,
        duration_ms: u64,
        ease: Ease,
    ) -> Self {
        Self {
            from,
            to,
            window_start,
            duration_ms,
            ease,
        }
    }

    /// Blend progress at `t`, clamped to `[0, 1]` and shaped by the ease.
    fn fraction(&self, t: EpochMs) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let raw = t.since(self.window_start) as f64 / self.duration_ms as f64;
        self.ease.apply(raw.clamp(0.0, 1.0))
    }
}

/// Interpolate one hand. An absent `from` hand stays absent for the whole
/// window; an absent `to` hand holds the `from` angle until the switch.
fn lerp_hand(from: Option<f64>, to: Option<f64>, fraction: f64) -> Option<f64> {
    let from = from?;
    let to = to.unwrap_or(from);
    Some(from + (to - from) * fraction)
}

impl PositionProvider for BlendedProvider<'_> {
    fn position(&self, t: EpochMs, cell: CellCoord) -> HandPosition {
        let from_pos = self.from.position(self.window_start, cell);
        let to_pos = self
            .to
            .position(self.window_start.add_ms(self.duration_ms), cell);
        let fraction = self.fraction(t);

        HandPosition {
            hour: lerp_hand(from_pos.hour, to_pos.hour, fraction),
            minute: lerp_hand(from_pos.minute, to_pos.minute, fraction),
            second: lerp_hand(from_pos.second, to_pos.second, fraction),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/blend.rs"]
mod tests;
