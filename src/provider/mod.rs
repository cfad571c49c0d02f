pub mod analog;
pub mod digital;
pub mod field_lines;
pub mod randomize;
pub mod rest;

use crate::foundation::core::{CellCoord, EpochMs, HandPosition};

/// A strategy that computes hand angles for a grid cell at a given time.
///
/// Implementations must be total: any timestamp and any cell coordinate
/// yields a position, never an error. A provider that does not cover a cell
/// returns [`HandPosition::EMPTY`] and the host substitutes the rest pose.
pub trait PositionProvider {
    /// Hand angles for `cell` at time `t`.
    fn position(&self, t: EpochMs, cell: CellCoord) -> HandPosition;

    /// Called by the scheduler when this provider is about to become
    /// visible, both on playlist start and when pre-warming for a
    /// transition. Defaults to a no-op.
    fn on_activate(&mut self, _t: EpochMs) {}
}

/// Time-of-day fields decoded from an epoch timestamp, in UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClockTime {
    pub(crate) hours: u64,
    pub(crate) minutes: u64,
    pub(crate) seconds: u64,
    pub(crate) millis: u64,
}

pub(crate) fn clock_time_utc(t: EpochMs) -> ClockTime {
    ClockTime {
        hours: (t.0 / 3_600_000) % 24,
        minutes: (t.0 / 60_000) % 60,
        seconds: (t.0 / 1000) % 60,
        millis: t.0 % 1000,
    }
}
