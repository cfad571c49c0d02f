use super::*;

use std::cell::RefCell;
use std::rc::Rc;

/// Provider whose hour angle is a constant id tag, recording activations.
struct Tag {
    id: f64,
    log: Rc<RefCell<Vec<(f64, u64)>>>,
}

impl PositionProvider for Tag {
    fn position(&self, _t: EpochMs, _cell: CellCoord) -> HandPosition {
        HandPosition::new(Some(self.id), None, None)
    }

    fn on_activate(&mut self, t: EpochMs) {
        self.log.borrow_mut().push((self.id, t.0));
    }
}

fn tagged(ids: &[f64], duration_ms: u64) -> (Scheduler, Rc<RefCell<Vec<(f64, u64)>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut scheduler = Scheduler::new();
    for &id in ids {
        scheduler
            .push_entry(
                Box::new(Tag {
                    id,
                    log: log.clone(),
                }),
                duration_ms,
            )
            .unwrap();
    }
    (scheduler, log)
}

fn hour_at(scheduler: &mut Scheduler, now: u64) -> Option<f64> {
    scheduler
        .resolve_current(EpochMs(now))
        .map(|p| p.position(EpochMs(now), CellCoord::new(0, 0)).hour.unwrap())
}

#[test]
fn empty_playlist_resolves_to_none() {
    let mut scheduler = Scheduler::new();
    assert!(scheduler.resolve_current(EpochMs(0)).is_none());
    assert!(scheduler.is_empty());
}

#[test]
fn entries_cycle_in_push_order() {
    let (mut scheduler, _) = tagged(&[1.0, 2.0, 3.0], 1000);

    let mut seen = Vec::new();
    for now in (0..=4500).step_by(500) {
        hour_at(&mut scheduler, now);
        seen.push(scheduler.active_index());
    }
    assert_eq!(seen, [0, 0, 1, 1, 2, 2, 0, 0, 1, 1]);
}

#[test]
fn first_tick_activates_the_first_entry() {
    let (mut scheduler, log) = tagged(&[1.0, 2.0], 1000);
    assert_eq!(hour_at(&mut scheduler, 100), Some(1.0));
    assert_eq!(log.borrow().as_slice(), &[(1.0, 100)]);
}

#[test]
fn transition_window_boundaries_are_exact() {
    let (mut scheduler, _) = tagged(&[1.0, 2.0], 1000);
    scheduler.set_transition_duration(200).unwrap();

    hour_at(&mut scheduler, 0);
    assert!(!scheduler.is_transitioning());

    // One tick before the window opens: still plain.
    hour_at(&mut scheduler, 799);
    assert!(!scheduler.is_transitioning());

    // Exactly duration - transition: blended.
    hour_at(&mut scheduler, 800);
    assert!(scheduler.is_transitioning());

    // Exactly duration: plain again, next entry live.
    assert_eq!(hour_at(&mut scheduler, 1000), Some(2.0));
    assert!(!scheduler.is_transitioning());
    assert_eq!(scheduler.active_index(), 1);
}

#[test]
fn blended_output_interpolates_between_neighbor_entries() {
    let (mut scheduler, _) = tagged(&[0.0, 100.0], 1000);
    scheduler.set_transition_duration(200).unwrap();

    hour_at(&mut scheduler, 0);
    assert_eq!(hour_at(&mut scheduler, 800), Some(0.0));
    assert_eq!(hour_at(&mut scheduler, 900), Some(50.0));
    assert_eq!(hour_at(&mut scheduler, 1000), Some(100.0));
}

#[test]
fn next_entry_is_prewarmed_when_the_window_opens() {
    let (mut scheduler, log) = tagged(&[1.0, 2.0], 1000);
    scheduler.set_transition_duration(300).unwrap();

    hour_at(&mut scheduler, 0);
    hour_at(&mut scheduler, 500);
    assert_eq!(log.borrow().len(), 1);

    hour_at(&mut scheduler, 700);
    assert_eq!(log.borrow().as_slice(), &[(1.0, 0), (2.0, 700)]);

    // No re-activation at the switch itself.
    hour_at(&mut scheduler, 1000);
    assert_eq!(log.borrow().len(), 2);
}

#[test]
fn single_entry_blends_into_itself_and_restarts() {
    let (mut scheduler, log) = tagged(&[5.0], 1000);
    scheduler.set_transition_duration(100).unwrap();

    assert_eq!(hour_at(&mut scheduler, 0), Some(5.0));
    assert_eq!(hour_at(&mut scheduler, 950), Some(5.0));
    assert!(scheduler.is_transitioning());

    assert_eq!(hour_at(&mut scheduler, 1000), Some(5.0));
    assert!(!scheduler.is_transitioning());
    assert_eq!(scheduler.active_index(), 0);
    // Activated at start and pre-warmed once per cycle end.
    assert_eq!(log.borrow().as_slice(), &[(5.0, 0), (5.0, 950)]);
}

#[test]
fn pushing_during_playback_keeps_the_current_position() {
    let (mut scheduler, log) = tagged(&[1.0, 2.0], 1000);

    hour_at(&mut scheduler, 0);
    hour_at(&mut scheduler, 500);

    scheduler
        .push_entry(
            Box::new(Tag {
                id: 3.0,
                log: log.clone(),
            }),
            1000,
        )
        .unwrap();
    assert_eq!(scheduler.len(), 3);

    assert_eq!(hour_at(&mut scheduler, 600), Some(1.0));
    assert_eq!(hour_at(&mut scheduler, 1000), Some(2.0));
    assert_eq!(hour_at(&mut scheduler, 2000), Some(3.0));
    assert_eq!(hour_at(&mut scheduler, 3000), Some(1.0));
}

#[test]
fn clear_empties_and_restarts_from_zero() {
    let (mut scheduler, _) = tagged(&[1.0, 2.0], 1000);

    hour_at(&mut scheduler, 0);
    hour_at(&mut scheduler, 1000);
    assert_eq!(scheduler.active_index(), 1);

    scheduler.clear();
    assert!(scheduler.resolve_current(EpochMs(1500)).is_none());

    let log = Rc::new(RefCell::new(Vec::new()));
    scheduler
        .push_entry(Box::new(Tag { id: 9.0, log }), 500)
        .unwrap();
    assert_eq!(hour_at(&mut scheduler, 2000), Some(9.0));
    assert_eq!(scheduler.active_index(), 0);
}

#[test]
fn push_rejects_durations_not_exceeding_the_transition() {
    let mut scheduler = Scheduler::new();
    scheduler.set_transition_duration(100).unwrap();

    let log = Rc::new(RefCell::new(Vec::new()));
    let entry = |id| {
        Box::new(Tag {
            id,
            log: log.clone(),
        })
    };

    assert!(scheduler.push_entry(entry(1.0), 0).is_err());
    assert!(scheduler.push_entry(entry(2.0), 100).is_err());
    assert!(scheduler.push_entry(entry(3.0), 101).is_ok());
}

#[test]
fn transition_duration_must_stay_below_every_entry() {
    let (mut scheduler, _) = tagged(&[1.0, 2.0], 1000);

    assert!(scheduler.set_transition_duration(999).is_ok());
    assert!(scheduler.set_transition_duration(1000).is_err());
    assert!(scheduler.set_transition_duration(1500).is_err());
    // The failed calls must not have changed the window.
    assert_eq!(scheduler.transition_ms(), 999);
}

#[test]
fn large_time_jumps_advance_one_entry_per_tick() {
    let (mut scheduler, _) = tagged(&[1.0, 2.0, 3.0], 1000);

    hour_at(&mut scheduler, 0);
    assert_eq!(hour_at(&mut scheduler, 50_000), Some(2.0));
    assert_eq!(hour_at(&mut scheduler, 100_000), Some(3.0));
}
