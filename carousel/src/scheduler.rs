//! Transition scheduling.
//!
//! A step runs in two phases. The receding flank is restyled immediately; after
//! `phase_delay_ms` the advancing flank is restyled, the active mark moves and the window
//! manager follows. A spin chains steps, one per frame at most, spaced by
//! `fade_duration_ms`.
//!
//! Both suspensions are plain records resolved by [`Scheduler::tick`]; cancelling drops them.

use crate::state::CarouselState;
use crate::{Direction, SchedulerPhase, SpinState, Surface};

/// The second half of a step, waiting for its wake-up time.
#[derive(Clone, Copy, Debug, PartialEq)]
struct DelayedPhase {
    direction: Direction,
    started_ms: u64,
    delay_ms: f64,
}

impl DelayedPhase {
    fn is_due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.started_ms) as f64 >= self.delay_ms
    }
}

/// A registered spin: the frame-driven stepping loop.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Spin {
    state: SpinState,
    last_step_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Scheduler {
    pending: Option<DelayedPhase>,
    spin: Option<Spin>,
}

impl Scheduler {
    pub(crate) fn phase(&self) -> SchedulerPhase {
        if self.spin.is_some() {
            SchedulerPhase::MultiStep
        } else if self.pending.is_some() {
            SchedulerPhase::SingleStep
        } else {
            SchedulerPhase::Idle
        }
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.phase() == SchedulerPhase::Idle
    }

    pub(crate) fn spin(&self) -> Option<SpinState> {
        self.spin.map(|s| s.state)
    }

    /// Starts moving toward `target` (already clamped).
    ///
    /// Anything in flight is cancelled first. Requesting the current index schedules nothing.
    pub(crate) fn request<S: Surface>(
        &mut self,
        state: &mut CarouselState,
        surface: &mut S,
        target: usize,
        now_ms: u64,
    ) {
        self.cancel(state, surface);
        if target == state.active {
            return;
        }

        let direction = Direction::toward(state.active, target);
        let distance = state.active.abs_diff(target);

        if distance > 1 {
            cdebug!(from = state.active, target, distance, "spin start");
        }
        self.begin_step(state, surface, direction, now_ms);

        if distance > 1 {
            self.spin = Some(Spin {
                state: SpinState {
                    direction,
                    target,
                    total_steps: distance,
                    completed_steps: 1,
                },
                last_step_ms: now_ms,
            });
        }
    }

    /// Advances pending work. Returns `true` while a transition is still in flight.
    pub(crate) fn tick<S: Surface>(
        &mut self,
        state: &mut CarouselState,
        surface: &mut S,
        now_ms: u64,
    ) -> bool {
        if self.pending.is_some_and(|p| p.is_due(now_ms)) {
            self.commit_pending(state, surface);
        }

        if let Some(mut spin) = self.spin {
            if self.pending.is_none() {
                if state.active == spin.state.target {
                    cdebug!(
                        target = spin.state.target,
                        steps = spin.state.completed_steps,
                        "spin finished"
                    );
                    self.spin = None;
                } else if now_ms.saturating_sub(spin.last_step_ms) as f64
                    > state.timing.fade_duration_ms
                {
                    self.begin_step(state, surface, spin.state.direction, now_ms);
                    spin.state.completed_steps += 1;
                    spin.last_step_ms = now_ms;
                    self.spin = Some(spin);
                }
            }
        }

        !self.is_idle()
    }

    /// Drops the spin registration and lands any half-applied step.
    ///
    /// Calling it again is a no-op. The active index is never changed.
    pub(crate) fn cancel<S: Surface>(&mut self, state: &mut CarouselState, surface: &mut S) {
        #[cfg(feature = "tracing")]
        if let Some(spin) = &self.spin {
            cdebug!(
                target = spin.state.target,
                completed = spin.state.completed_steps,
                total = spin.state.total_steps,
                "spin cancelled"
            );
        }
        self.spin = None;
        self.commit_pending(state, surface);
    }

    /// Phase one: move the active index and restyle the receding flank.
    fn begin_step<S: Surface>(
        &mut self,
        state: &mut CarouselState,
        surface: &mut S,
        direction: Direction,
        now_ms: u64,
    ) {
        debug_assert!(self.pending.is_none(), "a step is already half-applied");
        state.active = state.clamp_index(direction.step(state.active));
        state.restyle_flank(direction.opposite(), surface);
        self.pending = Some(DelayedPhase {
            direction,
            started_ms: now_ms,
            delay_ms: state.timing.phase_delay_ms,
        });
    }

    /// Phase two: restyle the advancing flank, move the active mark, shift the window.
    fn commit_pending<S: Surface>(&mut self, state: &mut CarouselState, surface: &mut S) {
        let Some(phase) = self.pending.take() else {
            return;
        };
        state.restyle_flank(phase.direction, surface);
        state.promote(surface);
        state.shift_window(phase.direction, surface);
        ctrace!(
            active = state.active,
            direction = ?phase.direction,
            "step committed"
        );
    }
}
