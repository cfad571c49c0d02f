use crate::foundation::core::{CellCoord, EpochMs, HandPosition};
use crate::foundation::error::{ClockwallError, ClockwallResult};
use crate::provider::PositionProvider;
use crate::schedule::blend::BlendedProvider;
use crate::schedule::ease::Ease;

struct PlaylistEntry {
    provider: Box<dyn PositionProvider>,
    duration_ms: u64,
}

/// Where the scheduler is inside the current playlist entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// No tick observed yet (or the playlist was cleared).
    Idle,
    /// The active entry's provider is live on its own.
    Playing { cycle_start: EpochMs },
    /// Inside the blend window at the tail of the active entry. The target
    /// index is captured when the window opens so that entries pushed
    /// mid-transition cannot retarget an already-running blend.
    Transitioning {
        cycle_start: EpochMs,
        window_start: EpochMs,
        next: usize,
    },
}

/// The provider resolved for one frame: the active entry's own provider, or
/// a blend of the active and next entries while a transition window is
/// open. Borrows the scheduler, so it lives for the current frame only.
pub enum ActiveProvider<'a> {
    Plain(&'a dyn PositionProvider),
    Blended(BlendedProvider<'a>),
}

impl PositionProvider for ActiveProvider<'_> {
    fn position(&self, t: EpochMs, cell: CellCoord) -> HandPosition {
        match self {
            Self::Plain(p) => p.position(t, cell),
            Self::Blended(b) => b.position(t, cell),
        }
    }
}

/// Owns an ordered playlist of `(provider, duration)` entries and decides,
/// per tick, which provider is currently visible.
///
/// The playlist is cyclic: after the last entry it wraps to index 0. Before
/// each switch the scheduler opens a transition window during which it
/// hands out a [`BlendedProvider`] interpolating toward the next entry; the
/// next provider is activated ("pre-warmed") when the window opens, so a
/// provider that freezes state on activation does so before becoming
/// visible.
///
/// State is mutated only inside [`Scheduler::resolve_current`], which the
/// host must call exactly once per frame from a single thread.
pub struct Scheduler {
    entries: Vec<PlaylistEntry>,
    active: usize,
    phase: Phase,
    transition_ms: u64,
    transition_ease: Ease,
}

impl Scheduler {
    /// An empty scheduler with no transition window. Entries and the
    /// transition duration are configured before playback starts.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            active: 0,
            phase: Phase::Idle,
            transition_ms: 0,
            transition_ease: Ease::Linear,
        }
    }

    /// Append an entry to the playlist. Legal at any time, including during
    /// playback; the current playback position is unaffected.
    pub fn push_entry(
        &mut self,
        provider: Box<dyn PositionProvider>,
        duration_ms: u64,
    ) -> ClockwallResult<()> {
        if duration_ms == 0 {
            return Err(ClockwallError::config("entry duration must be > 0"));
        }
        if duration_ms <= self.transition_ms {
            return Err(ClockwallError::config(format!(
                "entry duration {duration_ms}ms must exceed the transition window ({}ms)",
                self.transition_ms
            )));
        }
        self.entries.push(PlaylistEntry {
            provider,
            duration_ms,
        });
        Ok(())
    }

    /// Empty the playlist. The next resolve observes no entries and yields
    /// `None` until entries are pushed again.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = 0;
        self.phase = Phase::Idle;
        tracing::debug!("playlist cleared");
    }

    /// Set the blend window length. Must stay below every entry's duration,
    /// otherwise a blend window could outlive its entry.
    pub fn set_transition_duration(&mut self, ms: u64) -> ClockwallResult<()> {
        if let Some(entry) = self.entries.iter().find(|e| e.duration_ms <= ms) {
            return Err(ClockwallError::config(format!(
                "transition window {ms}ms must be shorter than every entry duration ({}ms entry present)",
                entry.duration_ms
            )));
        }
        self.transition_ms = ms;
        Ok(())
    }

    /// Shape the blend progress curve. Linear by default.
    pub fn set_transition_ease(&mut self, ease: Ease) {
        self.transition_ease = ease;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Index of the entry currently playing (or about to play first).
    pub fn active_index(&self) -> usize {
        self.active
    }

    fn next_index(&self) -> usize {
        (self.active + 1) % self.entries.len()
    }

    fn advance_to(&mut self, next: usize, now: EpochMs) {
        self.active = next;
        self.phase = Phase::Playing { cycle_start: now };
        tracing::debug!(index = self.active, at = now.0, "advanced to next entry");
    }

    /// Advance the state machine to `now` and resolve the provider that is
    /// visible this frame. `None` while the playlist is empty; hosts render
    /// the rest pose in that case.
    ///
    /// Must be called once per frame, non-reentrantly, with monotonically
    /// non-decreasing timestamps.
    #[tracing::instrument(skip(self))]
    pub fn resolve_current(&mut self, now: EpochMs) -> Option<ActiveProvider<'_>> {
        if self.entries.is_empty() {
            return None;
        }

        match self.phase {
            Phase::Idle => {
                self.active = 0;
                self.phase = Phase::Playing { cycle_start: now };
                tracing::debug!(at = now.0, "playlist started");
                self.entries[0].provider.on_activate(now);
            }
            Phase::Playing { cycle_start } => {
                let duration = self.entries[self.active].duration_ms;
                if now.since(cycle_start) >= duration {
                    self.advance_to(self.next_index(), now);
                } else if now.since(cycle_start) >= duration - self.transition_ms {
                    let next = self.next_index();
                    // Pre-warm so e.g. the digital clock freezes its time
                    // before the blend starts revealing it.
                    self.entries[next].provider.on_activate(now);
                    self.phase = Phase::Transitioning {
                        cycle_start,
                        window_start: now,
                        next,
                    };
                    tracing::debug!(
                        from = self.active,
                        to = next,
                        at = now.0,
                        "transition started"
                    );
                }
            }
            Phase::Transitioning {
                cycle_start, next, ..
            } => {
                if now.since(cycle_start) >= self.entries[self.active].duration_ms {
                    self.advance_to(next, now);
                }
            }
        }

        match self.phase {
            Phase::Transitioning {
                window_start, next, ..
            } => {
                let from = self.entries[self.active].provider.as_ref();
                let to = self.entries[next].provider.as_ref();
                Some(ActiveProvider::Blended(BlendedProvider::new(
                    from,
                    to,
                    window_start,
                    self.transition_ms,
                    self.transition_ease,
                )))
            }
            _ => Some(ActiveProvider::Plain(
                self.entries[self.active].provider.as_ref(),
            )),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
