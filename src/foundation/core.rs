use crate::foundation::error::{ClockwallError, ClockwallResult};

/// A timestamp in milliseconds since the Unix epoch.
///
/// The core never reads the system clock itself; hosts pass timestamps in
/// (see [`crate::TimeSource`]), which keeps providers pure and testable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct EpochMs(pub u64);

impl EpochMs {
    /// This timestamp shifted forward by `ms` milliseconds (saturating).
    pub fn add_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds elapsed since `earlier`, zero if `earlier` is later.
    pub fn since(self, earlier: EpochMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ClockwallResult<Self> {
        if den == 0 {
            return Err(ClockwallError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ClockwallError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Timestamp of frame `index` in a sequence starting at `start`.
    pub fn frame_timestamp(self, start: EpochMs, index: u64) -> EpochMs {
        let offset = (index as f64 * self.frame_duration_ms()).round();
        start.add_ms(offset.max(0.0) as u64)
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Wall dimensions in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    pub fn new(cols: u32, rows: u32) -> ClockwallResult<Self> {
        if cols == 0 || rows == 0 {
            return Err(ClockwallError::validation("grid must have non-zero size"));
        }
        Ok(Self { cols, rows })
    }

    pub fn cell_count(self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn contains(self, cell: CellCoord) -> bool {
        cell.x < self.cols && cell.y < self.rows
    }

    /// Row-major index of `cell`; the cell must be inside the grid.
    pub fn index_of(self, cell: CellCoord) -> usize {
        cell.y as usize * self.cols as usize + cell.x as usize
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = CellCoord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| CellCoord { x, y }))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { cols: 24, rows: 12 }
    }
}

/// One grid position hosting one clock face.
///
/// Coordinates are opaque to the core; providers give them whatever spatial
/// meaning their pattern needs.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Hand angles for one clock face at one instant.
///
/// Angles are degrees as unbounded reals (not normalized to `[0, 360)`),
/// `0°` = 12 o'clock, increasing clockwise. `None` means the hand is not
/// drawn. A fully-`None` value signals "cell not covered by this provider";
/// hosts substitute the rest pose (see [`crate::rest_position`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandPosition {
    pub hour: Option<f64>,
    pub minute: Option<f64>,
    pub second: Option<f64>,
}

impl HandPosition {
    /// No hands at all; the "not covered" marker.
    pub const EMPTY: Self = Self {
        hour: None,
        minute: None,
        second: None,
    };

    pub fn new(hour: Option<f64>, minute: Option<f64>, second: Option<f64>) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn is_empty(self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.second.is_none()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
