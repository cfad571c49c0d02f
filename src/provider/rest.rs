use crate::foundation::core::{CellCoord, EpochMs, GridSize, HandPosition};
use crate::provider::PositionProvider;

/// The neutral resting pose for `cell`: hands lie flat, pointing outward on
/// the edge columns so the whole wall reads as horizontal lines.
pub fn rest_position(grid: GridSize, cell: CellCoord) -> HandPosition {
    let last_col = grid.cols.saturating_sub(1);
    HandPosition {
        hour: Some(if cell.x == last_col { 270.0 } else { 90.0 }),
        minute: Some(if cell.x == 0 { 90.0 } else { 270.0 }),
        second: None,
    }
}

/// Provider holding every clock in the rest pose, independent of time.
#[derive(Clone, Copy, Debug)]
pub struct RestProvider {
    grid: GridSize,
}

impl RestProvider {
    pub fn new(grid: GridSize) -> Self {
        Self { grid }
    }
}

impl PositionProvider for RestProvider {
    fn position(&self, _t: EpochMs, cell: CellCoord) -> HandPosition {
        rest_position(self.grid, cell)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/rest.rs"]
mod tests;
