use crate::foundation::core::{CellCoord, EpochMs, HandPosition};
use crate::provider::{PositionProvider, clock_time_utc};

/// Every clock shows the actual time of day (UTC), seconds included — the
/// wall degenerates into an ordinary clock. Useful as a reference pattern
/// and for calibrating the renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnalogClockProvider;

impl AnalogClockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PositionProvider for AnalogClockProvider {
    fn position(&self, t: EpochMs, _cell: CellCoord) -> HandPosition {
        let now = clock_time_utc(t);
        let h = (now.hours % 12) as f64;
        let m = now.minutes as f64;
        let s = now.seconds as f64;
        let ms = now.millis as f64;

        HandPosition {
            hour: Some((h + m / 60.0) / 12.0 * 360.0),
            minute: Some((m + s / 60.0) / 60.0 * 360.0),
            second: Some((s + ms / 1000.0) / 60.0 * 360.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/analog.rs"]
mod tests;
