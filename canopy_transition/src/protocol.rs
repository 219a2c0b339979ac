// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gated transition state machine.

use crate::event::{TransitionEvent, TransitionKind};

/// How a gated transition ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// No listener canceled; the change committed and the after event fired.
    Committed,
    /// A listener canceled the before event; nothing was mutated.
    Vetoed,
}

/// The environment a transition runs against.
///
/// This is the seam between the protocol and the component runtime: the
/// runtime dispatches events through the host element and commits through
/// the property model's write path. Tests implement it with recorders.
pub trait TransitionEnv<D> {
    /// The error a commit can fail with.
    type Error;

    /// Dispatches an event synchronously; listeners run to completion
    /// (including any cancellation decision) before this returns.
    fn dispatch(&mut self, event: &mut TransitionEvent<D>);

    /// Commits the proposed value through the guarded mutation path.
    fn commit(&mut self, detail: D) -> Result<(), Self::Error>;
}

/// Runs one gated transition: before → (veto | commit → after).
///
/// The before event always fires first, carrying the proposed value. If a
/// listener cancels it the transition ends as [`TransitionOutcome::Vetoed`]
/// with no mutation. Otherwise the value commits, and the after event fires
/// carrying the same detail as the before event.
///
/// # Errors
///
/// A commit failure propagates to the caller; the after event does not fire
/// in that case, and the error is local to this transition.
pub fn run<D: Clone, E: TransitionEnv<D>>(
    kind: TransitionKind,
    proposed: D,
    env: &mut E,
) -> Result<TransitionOutcome, E::Error> {
    let mut before = TransitionEvent::before(kind, proposed.clone());
    env.dispatch(&mut before);
    if before.is_canceled() {
        return Ok(TransitionOutcome::Vetoed);
    }

    env.commit(proposed.clone())?;

    let mut after = TransitionEvent::after(kind, proposed);
    env.dispatch(&mut after);
    Ok(TransitionOutcome::Committed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Phase;
    use alloc::vec;
    use alloc::vec::Vec;

    const KIND: TransitionKind = TransitionKind {
        before: "tile-beingchanged",
        after: "tile-changed",
    };

    struct Env {
        seen: Vec<(Phase, &'static str, bool)>,
        committed: Vec<bool>,
        veto: bool,
        fail_commit: bool,
    }

    impl Env {
        fn new() -> Self {
            Self {
                seen: Vec::new(),
                committed: Vec::new(),
                veto: false,
                fail_commit: false,
            }
        }
    }

    impl TransitionEnv<bool> for Env {
        type Error = &'static str;

        fn dispatch(&mut self, event: &mut TransitionEvent<bool>) {
            self.seen
                .push((event.phase(), event.event_type(), *event.detail()));
            if self.veto {
                let _ = event.cancel();
            }
        }

        fn commit(&mut self, detail: bool) -> Result<(), Self::Error> {
            if self.fail_commit {
                return Err("write rejected");
            }
            self.committed.push(detail);
            Ok(())
        }
    }

    #[test]
    fn uncanceled_commits_once_and_fires_after() {
        let mut env = Env::new();
        let outcome = run(KIND, true, &mut env).unwrap();

        assert_eq!(outcome, TransitionOutcome::Committed);
        assert_eq!(env.committed, vec![true]);
        // Exactly one before and one after, details equal on both.
        assert_eq!(
            env.seen,
            vec![
                (Phase::Before, "tile-beingchanged", true),
                (Phase::After, "tile-changed", true),
            ]
        );
    }

    #[test]
    fn veto_skips_commit_and_after() {
        let mut env = Env::new();
        env.veto = true;
        let outcome = run(KIND, true, &mut env).unwrap();

        assert_eq!(outcome, TransitionOutcome::Vetoed);
        assert!(env.committed.is_empty());
        assert_eq!(env.seen, vec![(Phase::Before, "tile-beingchanged", true)]);
    }

    #[test]
    fn commit_failure_propagates_without_after() {
        let mut env = Env::new();
        env.fail_commit = true;
        let err = run(KIND, true, &mut env).unwrap_err();

        assert_eq!(err, "write rejected");
        assert_eq!(env.seen.len(), 1); // before only
    }

    #[test]
    fn canceling_the_after_event_has_no_effect() {
        // A listener that tries to cancel everything only stops the before
        // phase; if it is not listening by commit time, after still fires.
        struct LateVeto {
            committed: bool,
            after_canceled: bool,
        }
        impl TransitionEnv<u32> for LateVeto {
            type Error = core::convert::Infallible;
            fn dispatch(&mut self, event: &mut TransitionEvent<u32>) {
                if event.phase() == Phase::After {
                    let took_effect = event.cancel();
                    self.after_canceled = took_effect;
                }
            }
            fn commit(&mut self, _detail: u32) -> Result<(), Self::Error> {
                self.committed = true;
                Ok(())
            }
        }

        let mut env = LateVeto {
            committed: false,
            after_canceled: false,
        };
        let outcome = run(KIND, 7, &mut env).unwrap();
        assert_eq!(outcome, TransitionOutcome::Committed);
        assert!(env.committed);
        assert!(!env.after_canceled);
    }
}
