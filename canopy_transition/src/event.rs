// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transition event objects.

use core::fmt;

/// The phase of a transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Dispatched before the change commits; cancelable.
    Before,
    /// Dispatched after the change committed; not cancelable.
    After,
}

/// The event type name pair for one gated transition.
///
/// Names are threaded in explicitly by the integrator (including any naming
/// prefix scheme); the protocol attaches no meaning to the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionKind {
    /// The event type dispatched before the change commits.
    pub before: &'static str,
    /// The event type dispatched after the change committed.
    pub after: &'static str,
}

/// An ephemeral event dispatched through the host during a gated transition.
///
/// Events bubble beyond the component's own boundary and are composed
/// (re-dispatchable across a shadow boundary), so ancestor listeners can
/// observe and — for the before phase — veto the change. The event is
/// constructed immediately before dispatch, consumed synchronously, and
/// discarded; it is never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionEvent<D> {
    event_type: &'static str,
    phase: Phase,
    cancelable: bool,
    canceled: bool,
    detail: D,
}

impl<D> TransitionEvent<D> {
    /// Creates the before-phase event carrying the proposed value.
    #[must_use]
    pub fn before(kind: TransitionKind, detail: D) -> Self {
        Self {
            event_type: kind.before,
            phase: Phase::Before,
            cancelable: true,
            canceled: false,
            detail,
        }
    }

    /// Creates the after-phase event carrying the committed value.
    #[must_use]
    pub fn after(kind: TransitionKind, detail: D) -> Self {
        Self {
            event_type: kind.after,
            phase: Phase::After,
            cancelable: false,
            canceled: false,
            detail,
        }
    }

    /// Creates a standalone, non-cancelable notification event.
    ///
    /// Used for changes that are announced but not vetoable (no before
    /// phase), such as a value-changed notification from an internal control.
    #[must_use]
    pub fn notification(event_type: &'static str, detail: D) -> Self {
        Self {
            event_type,
            phase: Phase::After,
            cancelable: false,
            canceled: false,
            detail,
        }
    }

    /// Returns the event type name.
    #[must_use]
    #[inline]
    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    /// Returns the event phase.
    #[must_use]
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true`: transition events always bubble.
    #[must_use]
    #[inline]
    pub fn bubbles(&self) -> bool {
        true
    }

    /// Returns `true`: transition events cross shadow boundaries.
    #[must_use]
    #[inline]
    pub fn composed(&self) -> bool {
        true
    }

    /// Returns `true` if listeners may cancel this event.
    #[must_use]
    #[inline]
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Returns `true` if a listener canceled this event.
    #[must_use]
    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Marks the event as canceled.
    ///
    /// Returns `true` if the cancellation took effect. Canceling a
    /// non-cancelable (after-phase or notification) event is a no-op, like
    /// `preventDefault` on a non-cancelable DOM event.
    pub fn cancel(&mut self) -> bool {
        if self.cancelable {
            self.canceled = true;
        }
        self.cancelable
    }

    /// Returns the event detail.
    #[must_use]
    #[inline]
    pub fn detail(&self) -> &D {
        &self.detail
    }

    /// Consumes the event, returning its detail.
    #[must_use]
    pub fn into_detail(self) -> D {
        self.detail
    }
}

impl<D: fmt::Debug> fmt::Display for TransitionEvent<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?}, detail: {:?})",
            self.event_type, self.phase, self.detail
        )
    }
}
