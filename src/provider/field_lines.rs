use crate::foundation::core::{CellCoord, EpochMs, GridSize, HandPosition};
use crate::provider::PositionProvider;

/// One full sweep revolution per this many milliseconds.
const SWEEP_PERIOD_MS: u64 = 10_000;

/// A rotating sweep that reads as magnetic field lines: the top half of the
/// wall turns clockwise, the bottom half counter-clockwise, so mirrored rows
/// converge. A per-column phase offset shears the lines horizontally.
#[derive(Clone, Copy, Debug)]
pub struct FieldLinesProvider {
    grid: GridSize,
    offset_deg: f64,
}

impl FieldLinesProvider {
    pub fn new(grid: GridSize, offset_deg: f64) -> Self {
        Self { grid, offset_deg }
    }
}

impl PositionProvider for FieldLinesProvider {
    fn position(&self, t: EpochMs, cell: CellCoord) -> HandPosition {
        let mut pos = (t.0 % SWEEP_PERIOD_MS) as f64 / SWEEP_PERIOD_MS as f64 * 360.0;

        let bottom_half = cell.y >= self.grid.rows.div_ceil(2);
        if bottom_half {
            pos = 360.0 - pos;
        }

        let o = if bottom_half {
            -(f64::from(cell.x) * self.offset_deg)
        } else {
            f64::from(cell.x) * self.offset_deg
        };

        HandPosition {
            hour: Some(pos + 180.0 + o),
            minute: Some(pos + o),
            second: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/field_lines.rs"]
mod tests;
