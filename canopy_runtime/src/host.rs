// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The runtime's outward seam.

use canopy_capability::EventType;
use canopy_property::Value;
use canopy_transition::TransitionEvent;

use crate::id::InstanceId;
use crate::view::View;

/// Everything the runtime asks of its embedder.
///
/// The host owns the real element tree, the event plumbing, and the frame
/// loop; the runtime only describes what should happen to which instance.
/// All methods are synchronous and must complete before returning — in
/// particular [`dispatch`](Host::dispatch) runs every listener (including any
/// cancellation decision) before control comes back to the runtime.
///
/// `H` is the integrator's handler token, as in
/// [`CapabilityHost`](canopy_capability::CapabilityHost).
pub trait Host<H: Copy + Eq> {
    /// Writes an attribute on the instance's host element.
    fn set_attribute(&mut self, id: InstanceId, name: &str, value: &str);

    /// Removes an attribute from the instance's host element.
    fn remove_attribute(&mut self, id: InstanceId, name: &str);

    /// Registers an event binding at the instance's host-element scope.
    fn add_host_listener(&mut self, id: InstanceId, event: EventType, handler: H);

    /// Removes a previously registered event binding.
    fn remove_host_listener(&mut self, id: InstanceId, event: EventType, handler: H);

    /// Enables or disables focus delegation for the instance.
    fn set_focus_delegation(&mut self, id: InstanceId, delegate: bool);

    /// Dispatches an event from the instance, synchronously.
    ///
    /// Listeners may call [`TransitionEvent::cancel`] on a cancelable event;
    /// the runtime reads the canceled flag after this returns.
    fn dispatch(&mut self, id: InstanceId, event: &mut TransitionEvent<Value>);

    /// Asks the embedder to call [`Runtime::flush`](crate::Runtime::flush)
    /// at its next render opportunity.
    ///
    /// The runtime requests at most one flush per pending batch; the embedder
    /// does not need to deduplicate.
    fn request_flush(&mut self);

    /// Delivers the freshly rendered view of one instance.
    fn present(&mut self, id: InstanceId, view: View);
}
