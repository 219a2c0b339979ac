// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Capability: composable host-level behavior modules for components.
//!
//! A capability is an orthogonal behavior a component type opts into —
//! delegating focus into an internal child, listening for an event at the
//! host-element scope — without the component's own properties or render
//! logic knowing about it. Capabilities replace mixin inheritance with
//! explicit, ordered composition: there is no base class to conflict over,
//! and each capability keeps its state in its own value.
//!
//! ## Core Concepts
//!
//! - [`CapabilityHost`]: the narrow surface of the host element a capability
//!   may touch (listener registration, focus delegation). The runtime's full
//!   host implements it; tests implement it with a recorder.
//! - [`Capability`]: attach/detach lifecycle hooks. Implementations must be
//!   idempotent across repeated attach/detach cycles.
//! - [`CapabilityStack`]: an ordered sequence of capabilities. [`compose`]
//!   flattens stacks, so sequential application is associative: applying `A`
//!   then `B` yields the same bindings as applying the combined `A∘B`.
//! - [`DelegatesFocus`] and [`HostListener`]: the two built-in capabilities.
//!
//! ## Ordering
//!
//! `attach` runs capabilities in declaration order and `detach` unwinds in
//! reverse, so a capability declared later wraps the ones declared earlier
//! and can observe their registered listeners.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_capability::{Capability, CapabilityHost, CapabilityStack, DelegatesFocus, HostListener};
//!
//! #[derive(Copy, Clone, PartialEq, Eq, Debug)]
//! enum Handler {
//!     Click,
//! }
//!
//! # #[derive(Default)]
//! # struct Recorder { listeners: Vec<(&'static str, Handler)>, delegated: bool }
//! # impl CapabilityHost<Handler> for Recorder {
//! #     fn add_host_listener(&mut self, event: &'static str, handler: Handler) {
//! #         self.listeners.push((event, handler));
//! #     }
//! #     fn remove_host_listener(&mut self, event: &'static str, handler: Handler) {
//! #         self.listeners.retain(|(e, h)| !(*e == event && *h == handler));
//! #     }
//! #     fn set_focus_delegation(&mut self, delegate: bool) { self.delegated = delegate; }
//! # }
//! let mut stack = CapabilityStack::new()
//!     .with(DelegatesFocus::new())
//!     .with(HostListener::new("click", Handler::Click));
//!
//! let mut host = Recorder::default();
//! stack.attach(&mut host);
//! assert!(host.delegated);
//! assert_eq!(host.listeners, vec![("click", Handler::Click)]);
//!
//! stack.detach(&mut host);
//! assert!(host.listeners.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod focus;
mod listener;
mod stack;

use core::fmt;

pub use focus::DelegatesFocus;
pub use listener::HostListener;
pub use stack::{CapabilityStack, compose};

/// A host-scope event type name, e.g. `"click"`.
pub type EventType = &'static str;

/// The surface of the host element that capabilities may touch.
///
/// `H` is the integrator's handler token: a small copyable value naming the
/// component method an event binding routes to.
pub trait CapabilityHost<H: Copy + Eq> {
    /// Registers a handler for an event type at the host-element scope.
    fn add_host_listener(&mut self, event: EventType, handler: H);

    /// Removes a previously registered handler.
    ///
    /// Removing a binding that is not registered is a no-op.
    fn remove_host_listener(&mut self, event: EventType, handler: H);

    /// Enables or disables focus delegation on the host.
    ///
    /// When enabled, programmatic focus requests on the host land on its
    /// primary focusable descendant instead of the host boundary itself.
    fn set_focus_delegation(&mut self, delegate: bool);
}

/// An orthogonal behavior module attachable to a component type.
///
/// Capabilities hold their own state (a listener they registered, an
/// installed flag) and must tolerate repeated attach/detach cycles without
/// duplicating or leaking bindings.
pub trait Capability<H: Copy + Eq>: fmt::Debug {
    /// Called when the owning component instance is attached to a host.
    fn attach(&mut self, host: &mut dyn CapabilityHost<H>);

    /// Called when the owning component instance is detached from its host.
    fn detach(&mut self, host: &mut dyn CapabilityHost<H>);

    /// Clones this capability into a fresh, unattached boxed value.
    ///
    /// Component types hold a prototype stack; each instance gets its own
    /// clone so per-instance capability state never aliases.
    fn clone_unattached(&self) -> alloc::boxed::Box<dyn Capability<H>>;
}
