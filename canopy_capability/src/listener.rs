// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative host-scope event listener capability.

use alloc::boxed::Box;

use crate::{Capability, CapabilityHost, EventType};

/// Binds one `(event type, handler)` pair at the host-element scope.
///
/// The binding is registered on attach and unregistered on detach. Multiple
/// `HostListener`s on one component are independent: each adds and removes
/// only its own binding.
#[derive(Clone, Debug)]
pub struct HostListener<H> {
    event: EventType,
    handler: H,
    bound: bool,
}

impl<H: Copy + Eq + core::fmt::Debug + 'static> HostListener<H> {
    /// Creates a listener binding for the given event type and handler token.
    #[must_use]
    pub fn new(event: EventType, handler: H) -> Self {
        Self {
            event,
            handler,
            bound: false,
        }
    }

    /// Returns the event type this listener binds.
    #[must_use]
    pub fn event(&self) -> EventType {
        self.event
    }

    /// Returns the handler token this listener routes to.
    #[must_use]
    pub fn handler(&self) -> H {
        self.handler
    }

    /// Returns `true` if the binding is currently registered on a host.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }
}

impl<H: Copy + Eq + core::fmt::Debug + 'static> Capability<H> for HostListener<H> {
    fn attach(&mut self, host: &mut dyn CapabilityHost<H>) {
        if !self.bound {
            host.add_host_listener(self.event, self.handler);
            self.bound = true;
        }
    }

    fn detach(&mut self, host: &mut dyn CapabilityHost<H>) {
        if self.bound {
            host.remove_host_listener(self.event, self.handler);
            self.bound = false;
        }
    }

    fn clone_unattached(&self) -> Box<dyn Capability<H>> {
        Box::new(Self::new(self.event, self.handler))
    }
}
