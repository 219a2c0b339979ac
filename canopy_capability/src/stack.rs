// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, associative capability composition.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{Capability, CapabilityHost};

/// Composes two stacks into one, preserving order.
///
/// This is the composition entry point: it runs when a component *type* is
/// assembled, not per instance. Because composition flattens into a single
/// ordered sequence, sequential application is associative —
/// `compose(compose(a, b), c)` and `compose(a, compose(b, c))` produce the
/// same observable attach/detach bindings.
#[must_use]
pub fn compose<H: Copy + Eq>(first: CapabilityStack<H>, second: CapabilityStack<H>) -> CapabilityStack<H> {
    let mut capabilities = first.capabilities;
    capabilities.extend(second.capabilities);
    CapabilityStack { capabilities }
}

/// An ordered sequence of capabilities applied to one component type.
///
/// Order is significant: `attach` runs in declaration order, `detach` unwinds
/// in reverse, so later capabilities wrap earlier ones and can observe the
/// listeners they registered.
pub struct CapabilityStack<H> {
    capabilities: Vec<Box<dyn Capability<H>>>,
}

impl<H: Copy + Eq> Default for CapabilityStack<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Eq> CapabilityStack<H> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            capabilities: Vec::new(),
        }
    }

    /// Appends a capability, builder style.
    #[must_use]
    pub fn with(mut self, capability: impl Capability<H> + 'static) -> Self {
        self.capabilities.push(Box::new(capability));
        self
    }

    /// Appends an already boxed capability.
    pub fn push(&mut self, capability: Box<dyn Capability<H>>) {
        self.capabilities.push(capability);
    }

    /// Returns the number of capabilities in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Returns `true` if the stack holds no capabilities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Attaches every capability to the host, in declaration order.
    pub fn attach(&mut self, host: &mut dyn CapabilityHost<H>) {
        for capability in &mut self.capabilities {
            capability.attach(host);
        }
    }

    /// Detaches every capability from the host, in reverse order.
    pub fn detach(&mut self, host: &mut dyn CapabilityHost<H>) {
        for capability in self.capabilities.iter_mut().rev() {
            capability.detach(host);
        }
    }

    /// Clones the stack into fresh, unattached capabilities.
    ///
    /// Component types hold a prototype stack; every instance works on its
    /// own clone so capability state never aliases between instances.
    #[must_use]
    pub fn instantiate(&self) -> Self {
        Self {
            capabilities: self
                .capabilities
                .iter()
                .map(|c| c.clone_unattached())
                .collect(),
        }
    }
}

impl<H> fmt::Debug for CapabilityStack<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.capabilities.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DelegatesFocus, EventType, HostListener};
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    enum Handler {
        Click,
        KeyDown,
    }

    #[derive(Default)]
    struct Recorder {
        bindings: Vec<(EventType, Handler)>,
        log: Vec<(EventType, Handler, bool)>,
        delegated: bool,
    }

    impl CapabilityHost<Handler> for Recorder {
        fn add_host_listener(&mut self, event: EventType, handler: Handler) {
            self.bindings.push((event, handler));
            self.log.push((event, handler, true));
        }
        fn remove_host_listener(&mut self, event: EventType, handler: Handler) {
            self.bindings.retain(|(e, h)| !(*e == event && *h == handler));
            self.log.push((event, handler, false));
        }
        fn set_focus_delegation(&mut self, delegate: bool) {
            self.delegated = delegate;
        }
    }

    fn click() -> HostListener<Handler> {
        HostListener::new("click", Handler::Click)
    }

    fn keydown() -> HostListener<Handler> {
        HostListener::new("keydown", Handler::KeyDown)
    }

    #[test]
    fn attach_in_order_detach_in_reverse() {
        let mut stack = CapabilityStack::new().with(click()).with(keydown());
        let mut host = Recorder::default();

        stack.attach(&mut host);
        assert_eq!(
            host.log,
            vec![
                ("click", Handler::Click, true),
                ("keydown", Handler::KeyDown, true),
            ]
        );

        stack.detach(&mut host);
        assert_eq!(
            host.log[2..],
            [
                ("keydown", Handler::KeyDown, false),
                ("click", Handler::Click, false),
            ]
        );
        assert!(host.bindings.is_empty());
    }

    #[test]
    fn composition_is_associative() {
        let a = || CapabilityStack::new().with(DelegatesFocus::new());
        let b = || CapabilityStack::new().with(click());
        let c = || CapabilityStack::new().with(keydown());

        let mut left = compose(compose(a(), b()), c());
        let mut right = compose(a(), compose(b(), c()));

        let mut left_host = Recorder::default();
        let mut right_host = Recorder::default();
        left.attach(&mut left_host);
        right.attach(&mut right_host);

        assert_eq!(left_host.log, right_host.log);
        assert_eq!(left_host.bindings, right_host.bindings);
        assert_eq!(left_host.delegated, right_host.delegated);

        left.detach(&mut left_host);
        right.detach(&mut right_host);
        assert_eq!(left_host.log, right_host.log);
    }

    #[test]
    fn instantiate_yields_unattached_clones() {
        let mut prototype = CapabilityStack::new().with(click());
        let mut proto_host = Recorder::default();
        prototype.attach(&mut proto_host);

        // The instance clone starts unbound and registers its own binding.
        let mut instance = prototype.instantiate();
        let mut host = Recorder::default();
        instance.attach(&mut host);
        assert_eq!(host.bindings, vec![("click", Handler::Click)]);
    }

    #[test]
    fn both_builtin_capabilities_on_one_stack() {
        let mut stack = CapabilityStack::new()
            .with(DelegatesFocus::new())
            .with(click())
            .with(keydown());
        let mut host = Recorder::default();

        stack.attach(&mut host);
        assert!(host.delegated);
        assert_eq!(host.bindings.len(), 2);

        stack.detach(&mut host);
        assert!(!host.delegated);
        assert!(host.bindings.is_empty());
    }
}
