//! Tab panel transitions
//!
//! A tab switch is two sequential phases: the visible panel exits, then the
//! selected panel enters. [`TabTransitionController`] owns that sequencing as
//! an explicit state machine:
//!
//! ```text
//!   Idle(t) --select(u)--> Exiting(t, u) --exit complete--> Entering(u)
//!      ^                        |  ^                            |
//!      |                        |  +---------select(v)----------+
//!      |                        +--select(v)--> Exiting(t, v)   |
//!      +-----------------------enter complete-------------------+
//! ```
//!
//! Every phase entered carries a fresh [`AnimationTicket`]. Completion events
//! name the ticket they belong to, and a completion for any ticket other
//! than the current one is dropped, so an interrupted transition never
//! resumes after a newer selection.

use std::fmt;

use vista_animation::{AnimationPreset, Easing, MotionAnimation, TimedCurve, TransitionCurve};
use vista_core::{ListenerId, Listeners};

/// Duration of each phase when no curve is supplied
pub const DEFAULT_TRANSITION_MS: u32 = 300;

/// Where a tab switch currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase<T> {
    /// No animation; `T` is shown
    Idle(T),
    /// `from` is animating out; `to` enters next
    Exiting { from: T, to: T },
    /// `T` is animating in
    Entering(T),
}

impl<T: Copy> TransitionPhase<T> {
    /// The tab the user selected last
    pub fn active(&self) -> T {
        match *self {
            TransitionPhase::Idle(t) => t,
            TransitionPhase::Exiting { to, .. } => to,
            TransitionPhase::Entering(t) => t,
        }
    }

    /// The tab whose panel is rendered right now
    pub fn visible(&self) -> T {
        match *self {
            TransitionPhase::Idle(t) => t,
            TransitionPhase::Exiting { from, .. } => from,
            TransitionPhase::Entering(t) => t,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, TransitionPhase::Idle(_))
    }
}

/// Identifies one animation phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationTicket(u64);

impl AnimationTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Rendered state of the visible panel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelStyle<T> {
    pub tab: T,
    pub opacity: f32,
    /// Vertical offset in pixels (positive is down)
    pub translate_y: f32,
}

/// Delivered to listeners on every phase change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseChange<T> {
    pub from: TransitionPhase<T>,
    pub to: TransitionPhase<T>,
}

/// Sequences tab switches as exit-then-enter transitions
pub struct TabTransitionController<T> {
    phase: TransitionPhase<T>,
    ticket: Option<AnimationTicket>,
    tickets_issued: u64,
    curve: Box<dyn TransitionCurve>,
    enter: MotionAnimation,
    exit: MotionAnimation,
    listeners: Listeners<PhaseChange<T>>,
}

impl<T> TabTransitionController<T>
where
    T: Copy + Eq + fmt::Debug,
{
    /// Start idle on `default` with 300ms ease-out phases
    pub fn new(default: T) -> Self {
        Self::with_curve(
            default,
            Box::new(TimedCurve::new(DEFAULT_TRANSITION_MS, Easing::EaseOut)),
        )
    }

    /// Start idle on `default`, driving each phase with `curve`
    pub fn with_curve(default: T, curve: Box<dyn TransitionCurve>) -> Self {
        Self {
            phase: TransitionPhase::Idle(default),
            ticket: None,
            tickets_issued: 0,
            curve,
            enter: AnimationPreset::panel_enter(DEFAULT_TRANSITION_MS),
            exit: AnimationPreset::panel_exit(DEFAULT_TRANSITION_MS),
            listeners: Listeners::new(),
        }
    }

    pub fn phase(&self) -> TransitionPhase<T> {
        self.phase
    }

    pub fn active(&self) -> T {
        self.phase.active()
    }

    pub fn visible(&self) -> T {
        self.phase.visible()
    }

    /// Ticket of the running phase, `None` while idle
    pub fn current_ticket(&self) -> Option<AnimationTicket> {
        self.ticket
    }

    pub fn is_animating(&self) -> bool {
        !self.phase.is_idle()
    }

    /// Select `tab`.
    ///
    /// Returns the ticket of the exit phase that was started, or `None` if
    /// `tab` is already the active tab.
    pub fn select(&mut self, tab: T) -> Option<AnimationTicket> {
        if tab == self.active() {
            return None;
        }

        let from = self.visible();
        Some(self.begin_phase(TransitionPhase::Exiting { from, to: tab }))
    }

    /// Exit animation identified by `ticket` finished.
    ///
    /// Returns `false` if the ticket is stale or no exit is running.
    pub fn exit_complete(&mut self, ticket: AnimationTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match self.phase {
            TransitionPhase::Exiting { to, .. } => {
                self.begin_phase(TransitionPhase::Entering(to));
                true
            }
            _ => false,
        }
    }

    /// Enter animation identified by `ticket` finished.
    ///
    /// Returns `false` if the ticket is stale or no enter is running.
    pub fn enter_complete(&mut self, ticket: AnimationTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match self.phase {
            TransitionPhase::Entering(tab) => {
                self.ticket = None;
                self.set_phase(TransitionPhase::Idle(tab));
                true
            }
            _ => false,
        }
    }

    /// Advance the running phase by `dt_ms`, completing it when the curve
    /// finishes. Time left over after a phase completes is not carried into
    /// the next one.
    pub fn tick(&mut self, dt_ms: f32) {
        let Some(ticket) = self.ticket else {
            return;
        };

        self.curve.advance(dt_ms);
        if !self.curve.is_finished() {
            return;
        }

        match self.phase {
            TransitionPhase::Exiting { .. } => {
                self.exit_complete(ticket);
            }
            TransitionPhase::Entering(_) => {
                self.enter_complete(ticket);
            }
            TransitionPhase::Idle(_) => {}
        }
    }

    /// Curve value of the running phase in `[0, 1]`; `1.0` while idle
    pub fn phase_value(&self) -> f32 {
        if self.phase.is_idle() {
            return 1.0;
        }
        let value = self.curve.value();
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn panel_style(&self) -> PanelStyle<T> {
        let (tab, properties) = match self.phase {
            TransitionPhase::Idle(tab) => {
                return PanelStyle {
                    tab,
                    opacity: 1.0,
                    translate_y: 0.0,
                }
            }
            TransitionPhase::Exiting { from, .. } => {
                (from, self.exit.sample_at(self.phase_value()))
            }
            TransitionPhase::Entering(to) => (to, self.enter.sample_at(self.phase_value())),
        };

        PanelStyle {
            tab,
            opacity: properties.resolved_opacity(),
            translate_y: properties.resolved_translate().1,
        }
    }

    /// Register a callback for phase changes
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&PhaseChange<T>) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn is_current(&self, ticket: AnimationTicket) -> bool {
        if self.ticket == Some(ticket) {
            return true;
        }
        tracing::trace!(
            ticket = ticket.id(),
            current = ?self.ticket.map(|t| t.id()),
            "ignoring stale transition completion"
        );
        false
    }

    fn begin_phase(&mut self, phase: TransitionPhase<T>) -> AnimationTicket {
        self.tickets_issued += 1;
        let ticket = AnimationTicket(self.tickets_issued);
        self.ticket = Some(ticket);
        self.curve.restart();
        self.set_phase(phase);
        ticket
    }

    fn set_phase(&mut self, phase: TransitionPhase<T>) {
        let change = PhaseChange {
            from: self.phase,
            to: phase,
        };
        self.phase = phase;

        tracing::debug!(from = ?change.from, to = ?change.to, "tab transition");
        self.listeners.notify(&change);
    }
}

impl<T: fmt::Debug> fmt::Debug for TabTransitionController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabTransitionController")
            .field("phase", &self.phase)
            .field("ticket", &self.ticket)
            .field("curve", &self.curve)
            .finish()
    }
}
