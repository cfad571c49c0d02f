use std::cell::RefCell;
use std::collections::HashMap;

use crate::foundation::core::{CellCoord, EpochMs, HandPosition};
use crate::foundation::math::{Fnv1a64, Rng64};
use crate::provider::PositionProvider;

/// Freezes every clock at a random pose.
///
/// On first reference of a cell, two uniform angles in `[0, 360)` are drawn
/// for hour and minute and cached for the lifetime of the provider
/// instance, so the pattern does not churn every frame. Angles derive from
/// a seeded per-cell stream, making walls reproducible for equal seeds and
/// independent of the order cells are visited in.
///
/// The cache is the one piece of interior-mutable provider state; it relies
/// on the core's single-writer frame discipline and is not `Sync`.
#[derive(Debug)]
pub struct RandomizeProvider {
    seed: u64,
    cache: RefCell<HashMap<CellCoord, (f64, f64)>>,
}

impl RandomizeProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn angles_for(&self, cell: CellCoord) -> (f64, f64) {
        let mut hasher = Fnv1a64::new(self.seed);
        hasher.write_u32(cell.x);
        hasher.write_u32(cell.y);
        let mut rng = Rng64::new(hasher.finish());
        (rng.next_f64_01() * 360.0, rng.next_f64_01() * 360.0)
    }
}

impl PositionProvider for RandomizeProvider {
    fn position(&self, _t: EpochMs, cell: CellCoord) -> HandPosition {
        let (hour, minute) = *self
            .cache
            .borrow_mut()
            .entry(cell)
            .or_insert_with(|| self.angles_for(cell));

        HandPosition {
            hour: Some(hour),
            minute: Some(minute),
            second: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/provider/randomize.rs"]
mod tests;
