// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-instance runtime state.

use alloc::rc::Rc;
use alloc::vec::Vec;

use canopy_capability::{CapabilityHost, CapabilityStack, EventType};
use canopy_property::{PropertyId, PropertyValues};
use smallvec::SmallVec;

use crate::definition::ComponentDef;
use crate::host::Host;
use crate::id::InstanceId;

/// Inline capacity for the changed-property set of one batch.
pub(crate) const CHANGED_INLINE: usize = 8;

/// One mounted component instance.
pub(crate) struct ComponentInstance<H: Copy + Eq> {
    pub(crate) def: Rc<ComponentDef<H>>,
    pub(crate) values: PropertyValues,
    pub(crate) capabilities: CapabilityStack<H>,
    /// Live host-element bindings, in registration order.
    pub(crate) listeners: Vec<(EventType, H)>,
    /// Properties written since the last presented view.
    pub(crate) changed: SmallVec<[PropertyId; CHANGED_INLINE]>,
}

impl<H: Copy + Eq> ComponentInstance<H> {
    pub(crate) fn note_changed(&mut self, property: PropertyId) {
        if !self.changed.contains(&property) {
            self.changed.push(property);
        }
    }
}

/// Adapts the instance-addressed [`Host`] to the narrow per-element surface
/// capabilities see, and mirrors listener registrations into the instance's
/// binding list so detach can force-release leftovers.
pub(crate) struct BindingRecorder<'a, H: Copy + Eq> {
    pub(crate) host: &'a mut dyn Host<H>,
    pub(crate) id: InstanceId,
    pub(crate) listeners: &'a mut Vec<(EventType, H)>,
}

impl<H: Copy + Eq> CapabilityHost<H> for BindingRecorder<'_, H> {
    fn add_host_listener(&mut self, event: EventType, handler: H) {
        self.listeners.push((event, handler));
        self.host.add_host_listener(self.id, event, handler);
    }

    fn remove_host_listener(&mut self, event: EventType, handler: H) {
        if let Some(at) = self
            .listeners
            .iter()
            .position(|(e, h)| *e == event && *h == handler)
        {
            self.listeners.remove(at);
        }
        self.host.remove_host_listener(self.id, event, handler);
    }

    fn set_focus_delegation(&mut self, delegate: bool) {
        self.host.set_focus_delegation(self.id, delegate);
    }
}
