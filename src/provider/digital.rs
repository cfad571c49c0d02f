use crate::foundation::core::{CellCoord, EpochMs, GridSize, HandPosition};
use crate::provider::{PositionProvider, clock_time_utc};

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 6;
const COLON_COLS: u32 = 2;
// hour tens + hour ones + colon + minute tens + minute ones
const REGION_COLS: u32 = 4 * GLYPH_COLS + COLON_COLS;

// Each glyph cell is a packed byte: low 2 bits select the hour-hand
// quadrant (0..=3 -> 0/90/180/270 degrees), the next 2 bits the minute-hand
// quadrant. 0 means the cell is blank.
//
// Example: 14 = hour at 180, minute at 270; 2 = hour at 180, minute at 0.
#[rustfmt::skip]
const DIGIT_GLYPHS: [[u8; (GLYPH_COLS * GLYPH_ROWS) as usize]; 10] = [
    [  6,  0,  0,  0, 14,
       2,  6,  0, 14,  2,
       2,  2,  0,  2,  2,
       2,  2,  0,  2,  2,
       2,  1,  0,  3,  2,
       1,  0,  0,  0,  3 ],
    [  0,  0,  6, 14,  0,
       0,  0,  2,  2,  0,
       0,  0,  2,  2,  0,
       0,  0,  2,  2,  0,
       0,  0,  2,  2,  0,
       0,  0,  1,  3,  0 ],
    [  6,  0,  0,  0, 14,
       1,  0,  0, 14,  2,
       6,  0,  0,  3,  2,
       2,  6,  0,  0,  3,
       2,  1,  0,  0, 14,
       1,  0,  0,  0,  3 ],
    [  6,  0,  0,  0, 14,
       1,  0,  0, 14,  2,
       6,  0,  0,  3,  2,
       1,  0,  0, 14,  2,
       6,  0,  0,  3,  2,
       1,  0,  0,  0,  3 ],
    [  6, 14,  0,  6, 14,
       2,  2,  0,  2,  2,
       2,  1,  0,  3,  2,
       1,  0,  0, 14,  2,
       0,  0,  0,  2,  2,
       0,  0,  0,  1,  3 ],
    [  6,  0,  0,  0, 14,
       2,  6,  0,  0,  3,
       2,  1,  0,  0, 14,
       1,  0,  0, 14,  2,
       6,  0,  0,  3,  2,
       1,  0,  0,  0,  3 ],
    [  6,  0,  0,  0, 14,
       2,  6,  0,  0,  3,
       2,  1,  0,  0, 14,
       2,  6,  0, 14,  2,
       2,  1,  0,  3,  2,
       1,  0,  0,  0,  3 ],
    [  6,  0,  0,  0, 14,
       1,  0,  0, 14,  2,
       0,  0,  0,  2,  2,
       0,  0,  0,  2,  2,
       0,  0,  0,  2,  2,
       0,  0,  0,  1,  3 ],
    [  6,  0,  0,  0, 14,
       2,  6,  0, 14,  2,
       2,  1,  0,  3,  2,
       2,  6,  0, 14,  2,
       2,  1,  0,  3,  2,
       1,  0,  0,  0,  3 ],
    [  6,  0,  0,  0, 14,
       2,  6,  0, 14,  2,
       2,  1,  0,  3,  2,
       1,  0,  0, 14,  2,
       6,  0,  0,  3,  2,
       1,  0,  0,  0,  3 ],
];

#[rustfmt::skip]
const COLON_GLYPH: [u8; (COLON_COLS * GLYPH_ROWS) as usize] = [
    0,  0,
    6, 14,
    1,  3,
    6, 14,
    1,  3,
    0,  0,
];

/// Displays the current time as HH:MM in dot-matrix glyphs, each glyph cell
/// being one clock whose hands form a corner or a bar segment.
///
/// [`PositionProvider::on_activate`] freezes the displayed time so the
/// glyphs do not change mid-display; without activation the live timestamp
/// is used. Hours and minutes derive from the epoch timestamp in UTC.
#[derive(Clone, Copy, Debug)]
pub struct DigitalClockProvider {
    grid: GridSize,
    frozen: Option<EpochMs>,
}

impl DigitalClockProvider {
    pub fn new(grid: GridSize) -> Self {
        Self { grid, frozen: None }
    }

    /// Top-left cell of the glyph region, centered on the grid. `None` when
    /// the grid is too small to host HH:MM.
    fn region_origin(&self) -> Option<(u32, u32)> {
        if self.grid.cols < REGION_COLS || self.grid.rows < GLYPH_ROWS {
            return None;
        }
        Some((
            (self.grid.cols - REGION_COLS) / 2,
            (self.grid.rows - GLYPH_ROWS) / 2,
        ))
    }

    fn glyph_cell(&self, t: EpochMs, cell: CellCoord) -> Option<u8> {
        let (x0, y0) = self.region_origin()?;
        let lx = cell.x.checked_sub(x0)?;
        let ly = cell.y.checked_sub(y0)?;
        if lx >= REGION_COLS || ly >= GLYPH_ROWS {
            return None;
        }

        let now = clock_time_utc(t);
        let (glyph, col): (&[u8], u32) = match lx {
            _ if lx < GLYPH_COLS => (&DIGIT_GLYPHS[(now.hours / 10) as usize][..], lx),
            _ if lx < 2 * GLYPH_COLS => (
                &DIGIT_GLYPHS[(now.hours % 10) as usize][..],
                lx - GLYPH_COLS,
            ),
            _ if lx < 2 * GLYPH_COLS + COLON_COLS => (&COLON_GLYPH[..], lx - 2 * GLYPH_COLS),
            _ if lx < 3 * GLYPH_COLS + COLON_COLS => (
                &DIGIT_GLYPHS[(now.minutes / 10) as usize][..],
                lx - 2 * GLYPH_COLS - COLON_COLS,
            ),
            _ => (
                &DIGIT_GLYPHS[(now.minutes % 10) as usize][..],
                lx - 3 * GLYPH_COLS - COLON_COLS,
            ),
        };

        let width = glyph.len() as u32 / GLYPH_ROWS;
        Some(glyph[(ly * width + col) as usize])
    }
}

fn decode_cell(enc: u8) -> HandPosition {
    if enc == 0 {
        return HandPosition::EMPTY;
    }
    HandPosition {
        hour: Some(f64::from(enc & 3) * 90.0),
        minute: Some(f64::from((enc >> 2) & 3) * 90.0),
        second: None,
    }
}

impl PositionProvider for DigitalClockProvider {
    fn position(&self, t: EpochMs, cell: CellCoord) -> HandPosition {
        let t = self.frozen.unwrap_or(t);
        match self.glyph_cell(t, cell) {
            Some(enc) => decode_cell(enc),
            None => HandPosition::EMPTY,
        }
    }

    fn on_activate(&mut self, t: EpochMs) {
        self.frozen = Some(t);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/digital.rs"]
mod tests;
