use super::*;

fn grid() -> GridSize {
    GridSize::new(24, 12).unwrap()
}

#[test]
fn sweep_angle_follows_the_ten_second_period() {
    let p = FieldLinesProvider::new(grid(), 0.0);
    let cell = CellCoord::new(0, 0);

    assert_eq!(p.position(EpochMs(0), cell).minute, Some(0.0));
    assert_eq!(p.position(EpochMs(2500), cell).minute, Some(90.0));
    assert_eq!(p.position(EpochMs(5000), cell).minute, Some(180.0));
    // Wraps after a full period.
    assert_eq!(p.position(EpochMs(10_000), cell).minute, Some(0.0));
    assert_eq!(p.position(EpochMs(12_500), cell).minute, Some(90.0));
}

#[test]
fn hour_opposes_minute_in_the_top_half() {
    let p = FieldLinesProvider::new(grid(), 0.0);
    let pos = p.position(EpochMs(2500), CellCoord::new(5, 2));
    assert_eq!(pos.minute, Some(90.0));
    assert_eq!(pos.hour, Some(270.0));
    assert_eq!(pos.second, None);
}

#[test]
fn bottom_half_sweeps_counter_clockwise() {
    let p = FieldLinesProvider::new(grid(), 0.0);
    let t = EpochMs(2500);
    assert_eq!(p.position(t, CellCoord::new(0, 5)).minute, Some(90.0));
    assert_eq!(p.position(t, CellCoord::new(0, 6)).minute, Some(270.0));
}

#[test]
fn mirrored_rows_are_related_by_full_turn_reflection() {
    let p = FieldLinesProvider::new(grid(), 10.0);
    let t = EpochMs(7321);
    for x in 0..24 {
        let top = p.position(t, CellCoord::new(x, 0)).minute.unwrap();
        let bottom = p.position(t, CellCoord::new(x, 11)).minute.unwrap();
        assert!((bottom - (360.0 - top)).abs() < 1e-9, "x={x}");
    }
}

#[test]
fn column_offset_shears_both_hands_equally() {
    let p = FieldLinesProvider::new(grid(), 10.0);
    let t = EpochMs(2500);

    let base = p.position(t, CellCoord::new(0, 0));
    let sheared = p.position(t, CellCoord::new(3, 0));
    assert_eq!(sheared.minute, Some(base.minute.unwrap() + 30.0));
    assert_eq!(sheared.hour, Some(base.hour.unwrap() + 30.0));

    // Sign flips below the fold.
    let below = p.position(t, CellCoord::new(3, 6));
    assert_eq!(below.minute, Some(270.0 - 30.0));
}
