use crate::foundation::core::{CellCoord, EpochMs, GridSize, HandPosition};
use crate::provider::PositionProvider;
use crate::provider::rest::rest_position;

/// One fully-resolved frame of the wall: a hand pose for every grid cell,
/// row-major. Built once per tick and handed to the renderer immutably.
#[derive(Clone, Debug, PartialEq)]
pub struct WallFrame {
    grid: GridSize,
    positions: Vec<HandPosition>,
}

impl WallFrame {
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Pose for `cell`; the rest pose for out-of-grid coordinates.
    pub fn get(&self, cell: CellCoord) -> HandPosition {
        if self.grid.contains(cell) {
            self.positions[self.grid.index_of(cell)]
        } else {
            rest_position(self.grid, cell)
        }
    }

    /// All cells with their poses, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (CellCoord, HandPosition)> + '_ {
        self.grid
            .cells()
            .map(move |cell| (cell, self.positions[self.grid.index_of(cell)]))
    }
}

/// Fan the resolved provider out across the grid.
///
/// `None` (empty playlist) renders the whole wall at rest; a provider that
/// does not cover a cell (fully-`None` pose) falls back to the rest pose
/// for that cell, so the wall never shows a blank face.
#[tracing::instrument(skip(provider))]
pub fn resolve_frame<P>(provider: Option<&P>, grid: GridSize, now: EpochMs) -> WallFrame
where
    P: PositionProvider + ?Sized,
{
    let positions = grid
        .cells()
        .map(|cell| {
            let pos = provider
                .map(|p| p.position(now, cell))
                .unwrap_or(HandPosition::EMPTY);
            if pos.is_empty() {
                rest_position(grid, cell)
            } else {
                pos
            }
        })
        .collect();

    WallFrame { grid, positions }
}

#[cfg(test)]
#[path = "../../tests/unit/wall/frame.rs"]
mod tests;
