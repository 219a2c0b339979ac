// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Transition: a two-phase cancelable event protocol.
//!
//! User-gesture-driven state changes (expanding a tile, toggling a switch)
//! are gated by a pair of events so host applications can veto or react
//! before the change commits:
//!
//! 1. A **before** event is dispatched outward through the host. It is
//!    cancelable; any listener may call [`TransitionEvent::cancel`].
//! 2. If no listener canceled, the change **commits** through the property
//!    model's write path.
//! 3. An **after** event announces the committed value. It is not cancelable.
//!
//! A canceled before event ends the transition with
//! [`TransitionOutcome::Vetoed`] and no mutation — cancellation is expected
//! control flow, not an error. No path skips the before event, and the after
//! event never fires without a prior successful commit.
//!
//! Dispatch is fully synchronous: listeners run to completion, including any
//! cancellation decision, before the commit proceeds.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_transition::{TransitionEnv, TransitionEvent, TransitionKind, TransitionOutcome, run};
//!
//! const TOGGLE: TransitionKind = TransitionKind {
//!     before: "tile-beingchanged",
//!     after: "tile-changed",
//! };
//!
//! struct Env {
//!     committed: Option<bool>,
//!     veto: bool,
//! }
//!
//! impl TransitionEnv<bool> for Env {
//!     type Error = core::convert::Infallible;
//!
//!     fn dispatch(&mut self, event: &mut TransitionEvent<bool>) {
//!         if self.veto {
//!             event.cancel();
//!         }
//!     }
//!
//!     fn commit(&mut self, detail: bool) -> Result<(), Self::Error> {
//!         self.committed = Some(detail);
//!         Ok(())
//!     }
//! }
//!
//! let mut env = Env { committed: None, veto: false };
//! let outcome = run(TOGGLE, true, &mut env).unwrap();
//! assert_eq!(outcome, TransitionOutcome::Committed);
//! assert_eq!(env.committed, Some(true));
//!
//! let mut env = Env { committed: None, veto: true };
//! let outcome = run(TOGGLE, true, &mut env).unwrap();
//! assert_eq!(outcome, TransitionOutcome::Vetoed);
//! assert_eq!(env.committed, None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod protocol;

pub use event::{Phase, TransitionEvent, TransitionKind};
pub use protocol::{TransitionEnv, TransitionOutcome, run};
