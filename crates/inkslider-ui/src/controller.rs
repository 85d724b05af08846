//! Touch handling as a pure transition.
//!
//! `transition` takes the interaction state and one input event and returns
//! the next state plus the effects the widget must apply, in order. It never
//! mutates the model or calls back into the host, so every gesture can be
//! replayed and inspected in isolation.

use inkslider_core::model::{next_selectable, previous_selectable};
use inkslider_core::{Duration, Instant, Item, TouchPhase};
use smallvec::SmallVec;

use crate::step::{StepGeometry, map_position};

/// First delay of a held +/- button, and the slowest repeat rate.
pub const REPEAT_START: Duration = Duration::from_millis(500);
/// Amount the repeat interval shrinks after each repeated step.
pub const REPEAT_ACCELERATION: Duration = Duration::from_millis(150);
/// Fastest repeat rate.
pub const REPEAT_FLOOR: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepButton {
    /// Towards higher indices.
    Plus,
    /// Towards lower indices.
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// Touch on the track; `position` is px from the track's start edge.
    Track { phase: TouchPhase, position: f32 },
    Button {
        button: StepButton,
        phase: TouchPhase,
        now: Instant,
    },
    /// The host's repeat timer fired.
    RepeatTimer { now: Instant },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    ClaimGesture,
    /// Make `values[index]` current.
    Select(usize),
    ValueChanged { from_user: bool },
    ValueSet { from_user: bool },
    /// Center the badges on this track coordinate.
    MoveBadges(f32),
    ScheduleRepeat(Duration),
    CancelRepeat,
}

pub type Effects = SmallVec<[Effect; 6]>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Selection before the gesture started; restored on cancel.
        origin: usize,
        position: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RepeatState {
    pub button: StepButton,
    pub interval: Duration,
    /// Time of the last step taken by this hold.
    pub last_step: Instant,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub drag: DragState,
    pub repeat: Option<RepeatState>,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// A drag or a held button is in progress.
    pub fn is_user_interacting(&self) -> bool {
        self.is_dragging() || self.repeat.is_some()
    }
}

/// What `transition` reads from the widget.
#[derive(Clone, Copy, Debug)]
pub struct TransitionContext<'a, T> {
    pub values: &'a [Item<T>],
    pub current: usize,
    pub geometry: StepGeometry,
    pub hard_steps: bool,
    pub enabled: bool,
}

pub fn transition<T>(
    state: InteractionState,
    event: SliderEvent,
    ctx: &TransitionContext<'_, T>,
) -> (InteractionState, Effects) {
    let mut fx = Effects::new();

    if !ctx.enabled {
        if state.repeat.is_some() {
            fx.push(Effect::CancelRepeat);
        }
        log::trace!("ignoring {event:?} while disabled");
        return (InteractionState::default(), fx);
    }

    let next = match event {
        SliderEvent::Track { phase, position } => track(state, phase, position, ctx, &mut fx),
        SliderEvent::Button { button, phase, now } => {
            press(state, button, phase, now, ctx, &mut fx)
        }
        SliderEvent::RepeatTimer { now } => repeat(state, now, ctx, &mut fx),
    };

    log::trace!("{event:?}: {state:?} -> {next:?} {fx:?}");
    (next, fx)
}

fn track<T>(
    state: InteractionState,
    phase: TouchPhase,
    position: f32,
    ctx: &TransitionContext<'_, T>,
    fx: &mut Effects,
) -> InteractionState {
    match (phase, state.drag) {
        (TouchPhase::Down, drag) => {
            fx.push(Effect::ClaimGesture);
            select_at(position, ctx, fx);
            fx.push(Effect::MoveBadges(position));
            let origin = match drag {
                DragState::Dragging { origin, .. } => origin,
                DragState::Idle => ctx.current,
            };
            InteractionState {
                drag: DragState::Dragging { origin, position },
                ..state
            }
        }
        (TouchPhase::Move, DragState::Dragging { origin, .. }) => {
            select_at(position, ctx, fx);
            fx.push(Effect::MoveBadges(position));
            InteractionState {
                drag: DragState::Dragging { origin, position },
                ..state
            }
        }
        (TouchPhase::Up, DragState::Dragging { .. }) => {
            let index = select_at(position, ctx, fx);
            let anchor = if ctx.hard_steps {
                ctx.geometry.anchor(index)
            } else {
                position
            };
            fx.push(Effect::MoveBadges(anchor));
            fx.push(Effect::ValueSet { from_user: true });
            InteractionState {
                drag: DragState::Idle,
                ..state
            }
        }
        (TouchPhase::Cancel, DragState::Dragging { origin, .. }) => {
            if origin != ctx.current {
                fx.push(Effect::Select(origin));
                fx.push(Effect::ValueChanged { from_user: false });
            }
            fx.push(Effect::MoveBadges(ctx.geometry.anchor(origin)));
            InteractionState {
                drag: DragState::Idle,
                ..state
            }
        }
        // Move/up/cancel without a preceding down.
        (_, DragState::Idle) => state,
    }
}

/// Maps `position` and emits a selection change if it lands elsewhere.
fn select_at<T>(position: f32, ctx: &TransitionContext<'_, T>, fx: &mut Effects) -> usize {
    let sel = map_position(position, &ctx.geometry, ctx.values);
    if sel.index != ctx.current {
        fx.push(Effect::Select(sel.index));
        fx.push(Effect::ValueChanged { from_user: true });
    }
    sel.index
}

fn press<T>(
    state: InteractionState,
    button: StepButton,
    phase: TouchPhase,
    now: Instant,
    ctx: &TransitionContext<'_, T>,
    fx: &mut Effects,
) -> InteractionState {
    match phase {
        TouchPhase::Down => {
            fx.push(Effect::ClaimGesture);
            step(button, ctx, fx);
            fx.push(Effect::ScheduleRepeat(REPEAT_START));
            InteractionState {
                repeat: Some(RepeatState {
                    button,
                    interval: REPEAT_START,
                    last_step: now,
                }),
                ..state
            }
        }
        // A host without timers can drive the repeat from move events.
        TouchPhase::Move => repeat(state, now, ctx, fx),
        TouchPhase::Up | TouchPhase::Cancel => {
            if state.repeat.is_some() {
                fx.push(Effect::CancelRepeat);
            }
            InteractionState {
                repeat: None,
                ..state
            }
        }
    }
}

fn repeat<T>(
    state: InteractionState,
    now: Instant,
    ctx: &TransitionContext<'_, T>,
    fx: &mut Effects,
) -> InteractionState {
    // Stale timer after release.
    let Some(mut r) = state.repeat else {
        return state;
    };

    let elapsed = now.saturating_duration_since(r.last_step);
    if elapsed < r.interval {
        fx.push(Effect::ScheduleRepeat(r.interval - elapsed));
        return state;
    }

    step(r.button, ctx, fx);
    r.last_step = now;
    if r.interval > REPEAT_FLOOR {
        r.interval = r
            .interval
            .saturating_sub(REPEAT_ACCELERATION)
            .max(REPEAT_FLOOR);
    }
    fx.push(Effect::ScheduleRepeat(r.interval));
    InteractionState {
        repeat: Some(r),
        ..state
    }
}

/// One +/- step to the neighbouring selectable value; nothing at the ends.
fn step<T>(button: StepButton, ctx: &TransitionContext<'_, T>, fx: &mut Effects) {
    let target = match button {
        StepButton::Plus => next_selectable(ctx.values, ctx.current),
        StepButton::Minus => previous_selectable(ctx.values, ctx.current),
    };
    if let Some(index) = target {
        fx.push(Effect::Select(index));
        fx.push(Effect::ValueChanged { from_user: true });
        fx.push(Effect::ValueSet { from_user: true });
        fx.push(Effect::MoveBadges(ctx.geometry.anchor(index)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkslider_core::Display;

    fn values(n: usize) -> Vec<Item<usize>> {
        (0..n).map(|i| Item::new(i, Display::text(i.to_string()))).collect()
    }

    fn ctx(values: &[Item<usize>], current: usize) -> TransitionContext<'_, usize> {
        TransitionContext {
            values,
            current,
            geometry: StepGeometry {
                axis_length: 25.0 * values.len() as f32,
                item_count: values.len(),
                reversed: false,
            },
            hard_steps: true,
            enabled: true,
        }
    }

    fn track(phase: TouchPhase, position: f32) -> SliderEvent {
        SliderEvent::Track { phase, position }
    }

    /// Applies `Select` effects to `current` like the widget would.
    fn apply(current: &mut usize, fx: &Effects) {
        for e in fx {
            if let Effect::Select(i) = e {
                *current = *i;
            }
        }
    }

    #[test]
    fn down_claims_and_selects() {
        let v = values(4);
        let (state, fx) = transition(InteractionState::default(), track(TouchPhase::Down, 40.0), &ctx(&v, 3));
        assert_eq!(
            fx.as_slice(),
            &[
                Effect::ClaimGesture,
                Effect::Select(2),
                Effect::ValueChanged { from_user: true },
                Effect::MoveBadges(40.0),
            ]
        );
        assert_eq!(
            state.drag,
            DragState::Dragging {
                origin: 3,
                position: 40.0
            }
        );
    }

    #[test]
    fn move_within_same_step_only_moves_badges() {
        let v = values(4);
        let (state, _) = transition(InteractionState::default(), track(TouchPhase::Down, 40.0), &ctx(&v, 3));
        let (_, fx) = transition(state, track(TouchPhase::Move, 45.0), &ctx(&v, 2));
        assert_eq!(fx.as_slice(), &[Effect::MoveBadges(45.0)]);
    }

    #[test]
    fn up_with_hard_steps_snaps() {
        let v = values(4);
        let (state, _) = transition(InteractionState::default(), track(TouchPhase::Down, 40.0), &ctx(&v, 3));
        let (state, fx) = transition(state, track(TouchPhase::Up, 40.0), &ctx(&v, 2));
        assert_eq!(
            fx.as_slice(),
            &[
                Effect::MoveBadges(50.0),
                Effect::ValueSet { from_user: true },
            ]
        );
        assert_eq!(state, InteractionState::default());
    }

    #[test]
    fn up_without_hard_steps_stays_at_finger() {
        let v = values(4);
        let c = TransitionContext {
            hard_steps: false,
            ..ctx(&v, 3)
        };
        let (state, _) = transition(InteractionState::default(), track(TouchPhase::Down, 40.0), &c);
        let c = TransitionContext { current: 2, ..c };
        let (_, fx) = transition(state, track(TouchPhase::Up, 41.0), &c);
        assert_eq!(
            fx.as_slice(),
            &[
                Effect::MoveBadges(41.0),
                Effect::ValueSet { from_user: true },
            ]
        );
    }

    #[test]
    fn cancel_restores_origin() {
        let v = values(4);
        let (state, _) = transition(InteractionState::default(), track(TouchPhase::Down, 10.0), &ctx(&v, 3));
        let (state, fx) = transition(state, track(TouchPhase::Cancel, 10.0), &ctx(&v, 0));
        assert_eq!(
            fx.as_slice(),
            &[
                Effect::Select(3),
                Effect::ValueChanged { from_user: false },
                Effect::MoveBadges(75.0),
            ]
        );
        assert!(!state.is_user_interacting());
    }

    #[test]
    fn stray_events_are_ignored() {
        let v = values(4);
        for phase in [TouchPhase::Move, TouchPhase::Up, TouchPhase::Cancel] {
            let (state, fx) = transition(InteractionState::default(), track(phase, 10.0), &ctx(&v, 1));
            assert!(fx.is_empty());
            assert_eq!(state, InteractionState::default());
        }
    }

    #[test]
    fn disabled_ignores_input() {
        let v = values(4);
        let c = TransitionContext {
            enabled: false,
            ..ctx(&v, 1)
        };
        let (state, fx) = transition(InteractionState::default(), track(TouchPhase::Down, 10.0), &c);
        assert!(fx.is_empty());
        assert_eq!(state, InteractionState::default());
    }

    #[test]
    fn button_press_steps_and_schedules() {
        let v = values(4);
        let now = Instant::now();
        let ev = SliderEvent::Button {
            button: StepButton::Minus,
            phase: TouchPhase::Down,
            now,
        };
        let (state, fx) = transition(InteractionState::default(), ev, &ctx(&v, 2));
        assert_eq!(
            fx.as_slice(),
            &[
                Effect::ClaimGesture,
                Effect::Select(1),
                Effect::ValueChanged { from_user: true },
                Effect::ValueSet { from_user: true },
                Effect::MoveBadges(25.0),
                Effect::ScheduleRepeat(REPEAT_START),
            ]
        );
        assert!(state.is_user_interacting());

        let release = SliderEvent::Button {
            button: StepButton::Minus,
            phase: TouchPhase::Up,
            now,
        };
        let (state, fx) = transition(state, release, &ctx(&v, 1));
        assert_eq!(fx.as_slice(), &[Effect::CancelRepeat]);
        assert_eq!(state.repeat, None);
    }

    #[test]
    fn button_at_end_does_nothing() {
        let v = values(3);
        let ev = SliderEvent::Button {
            button: StepButton::Plus,
            phase: TouchPhase::Down,
            now: Instant::now(),
        };
        let (_, fx) = transition(InteractionState::default(), ev, &ctx(&v, 2));
        assert_eq!(
            fx.as_slice(),
            &[Effect::ClaimGesture, Effect::ScheduleRepeat(REPEAT_START)]
        );
    }

    #[test]
    fn button_skips_unselectable() {
        let v = vec![
            Item::new(0, Display::default()),
            Item::unselectable(1, Display::default()),
            Item::new(2, Display::default()),
        ];
        let ev = SliderEvent::Button {
            button: StepButton::Plus,
            phase: TouchPhase::Down,
            now: Instant::now(),
        };
        let (_, fx) = transition(InteractionState::default(), ev, &ctx(&v, 0));
        assert_eq!(fx[1], Effect::Select(2));
    }

    /// Holds `button` for `hold`, firing the timer exactly when asked to.
    fn hold(button: StepButton, n: usize, start: usize, hold: Duration) -> (usize, Vec<Duration>) {
        let v = values(n);
        let t0 = Instant::now();
        let mut current = start;
        let mut intervals = Vec::new();

        let ev = SliderEvent::Button {
            button,
            phase: TouchPhase::Down,
            now: t0,
        };
        let (mut state, fx) = transition(InteractionState::default(), ev, &ctx(&v, current));
        apply(&mut current, &fx);
        let mut now = t0;
        loop {
            let Some(r) = state.repeat else { break };
            now += r.interval;
            if now > t0 + hold {
                break;
            }
            let (s, fx) = transition(state, SliderEvent::RepeatTimer { now }, &ctx(&v, current));
            apply(&mut current, &fx);
            if let Some(Effect::ScheduleRepeat(d)) = fx.last() {
                intervals.push(*d);
            }
            state = s;
        }
        (current, intervals)
    }

    #[test]
    fn hold_accelerates_to_floor() {
        let (current, intervals) = hold(StepButton::Plus, 40, 0, Duration::from_secs(2));
        assert_eq!(
            &intervals[..4],
            &[
                Duration::from_millis(350),
                Duration::from_millis(200),
                Duration::from_millis(50),
                Duration::from_millis(50),
            ]
        );
        // Press, then ticks at 500, 850, 1050 and every 50ms up to 2000.
        assert_eq!(current, 23);
        assert!(current > 4);
    }

    #[test]
    fn hold_stops_at_last_selectable() {
        let (current, _) = hold(StepButton::Plus, 6, 0, Duration::from_secs(2));
        assert_eq!(current, 5);
        let (current, _) = hold(StepButton::Minus, 6, 5, Duration::from_secs(2));
        assert_eq!(current, 0);
    }

    #[test]
    fn early_timer_reschedules_remainder() {
        let v = values(4);
        let t0 = Instant::now();
        let ev = SliderEvent::Button {
            button: StepButton::Plus,
            phase: TouchPhase::Down,
            now: t0,
        };
        let (state, _) = transition(InteractionState::default(), ev, &ctx(&v, 0));
        let tick = SliderEvent::RepeatTimer {
            now: t0 + Duration::from_millis(300),
        };
        let (after, fx) = transition(state, tick, &ctx(&v, 1));
        assert_eq!(
            fx.as_slice(),
            &[Effect::ScheduleRepeat(Duration::from_millis(200))]
        );
        assert_eq!(after, state);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let v = values(4);
        let (state, fx) = transition(
            InteractionState::default(),
            SliderEvent::RepeatTimer {
                now: Instant::now(),
            },
            &ctx(&v, 0),
        );
        assert!(fx.is_empty());
        assert_eq!(state, InteractionState::default());
    }
}
