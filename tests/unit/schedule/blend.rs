use super::*;

/// Same pose for every cell at every time.
struct Fixed(HandPosition);

impl PositionProvider for Fixed {
    fn position(&self, _t: EpochMs, _cell: CellCoord) -> HandPosition {
        self.0
    }
}

/// Hour flips from 0 to 100 degrees at `threshold`; lets tests detect
/// whether an endpoint was sampled at the frozen time or the live time.
struct Step {
    threshold: EpochMs,
}

impl PositionProvider for Step {
    fn position(&self, t: EpochMs, _cell: CellCoord) -> HandPosition {
        let hour = if t >= self.threshold { 100.0 } else { 0.0 };
        HandPosition::new(Some(hour), None, None)
    }
}

fn hours(hour: f64) -> Fixed {
    Fixed(HandPosition::new(Some(hour), None, None))
}

const CELL: CellCoord = CellCoord { x: 2, y: 3 };

#[test]
fn endpoints_match_the_underlying_providers() {
    let from = hours(10.0);
    let to = hours(350.0);
    let blend = BlendedProvider::new(&from, &to, EpochMs(1000), 1000, Ease::Linear);

    assert_eq!(blend.position(EpochMs(1000), CELL).hour, Some(10.0));
    assert_eq!(blend.position(EpochMs(2000), CELL).hour, Some(350.0));
}

#[test]
fn interpolation_takes_the_long_way_around() {
    // 10 -> 350 sweeps through 180, not backwards through 0.
    let from = hours(10.0);
    let to = hours(350.0);
    let blend = BlendedProvider::new(&from, &to, EpochMs(1000), 1000, Ease::Linear);

    assert_eq!(blend.position(EpochMs(1500), CELL).hour, Some(180.0));
}

#[test]
fn progress_clamps_outside_the_window() {
    let from = hours(0.0);
    let to = hours(100.0);
    let blend = BlendedProvider::new(&from, &to, EpochMs(1000), 1000, Ease::Linear);

    assert_eq!(blend.position(EpochMs(0), CELL).hour, Some(0.0));
    assert_eq!(blend.position(EpochMs(9000), CELL).hour, Some(100.0));
}

#[test]
fn absent_from_hand_stays_absent() {
    let from = Fixed(HandPosition::new(None, Some(90.0), None));
    let to = Fixed(HandPosition::new(Some(45.0), Some(180.0), None));
    let blend = BlendedProvider::new(&from, &to, EpochMs(0), 1000, Ease::Linear);

    for t in [0, 500, 1000] {
        let pos = blend.position(EpochMs(t), CELL);
        assert_eq!(pos.hour, None, "t={t}");
        assert!(pos.minute.is_some());
    }
}

#[test]
fn absent_target_hand_holds_the_from_angle() {
    let from = hours(90.0);
    let to = Fixed(HandPosition::EMPTY);
    let blend = BlendedProvider::new(&from, &to, EpochMs(0), 1000, Ease::Linear);

    for t in [0, 250, 999] {
        assert_eq!(blend.position(EpochMs(t), CELL).hour, Some(90.0), "t={t}");
    }
}

#[test]
fn from_is_frozen_at_the_window_start() {
    // The from provider changes right after the window opens; the blend
    // must keep sampling the opening snapshot.
    let from = Step {
        threshold: EpochMs(1001),
    };
    let to = hours(200.0);
    let blend = BlendedProvider::new(&from, &to, EpochMs(1000), 1000, Ease::Linear);

    assert_eq!(blend.position(EpochMs(1500), CELL).hour, Some(100.0));
}

#[test]
fn to_is_frozen_at_the_window_end() {
    // The to provider only reaches its final pose at the window end; the
    // blend must aim at that pose the whole way through.
    let from = hours(0.0);
    let to = Step {
        threshold: EpochMs(2000),
    };
    let blend = BlendedProvider::new(&from, &to, EpochMs(1000), 1000, Ease::Linear);

    assert_eq!(blend.position(EpochMs(1500), CELL).hour, Some(50.0));
}

#[test]
fn ease_shapes_the_fraction() {
    let from = hours(0.0);
    let to = hours(100.0);
    let blend = BlendedProvider::new(&from, &to, EpochMs(0), 1000, Ease::InQuad);

    assert_eq!(blend.position(EpochMs(500), CELL).hour, Some(25.0));
}

#[test]
fn zero_length_window_is_already_done() {
    let from = hours(0.0);
    let to = hours(100.0);
    let blend = BlendedProvider::new(&from, &to, EpochMs(1000), 0, Ease::Linear);

    assert_eq!(blend.position(EpochMs(1000), CELL).hour, Some(100.0));
}
