// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Component type definitions.

use core::fmt;

use canopy_capability::{Capability, CapabilityStack, compose};
use canopy_property::{PropertyId, PropertyValues, Schema};

use crate::Runtime;
use crate::host::Host;
use crate::id::InstanceId;
use crate::view::View;

/// A pure render function: current values in, view out.
pub type RenderFn = fn(&PropertyValues, &Schema) -> View;

/// A post-render hook, called after each presented view with the properties
/// that changed since the previous one.
///
/// This is where work that needs the rendered output lives, such as reading
/// back a measured size and reflecting it into an attribute through `host`.
pub type UpdatedFn<H> = fn(InstanceId, &[PropertyId], &PropertyValues, &mut dyn Host<H>);

/// A host-event handler, invoked by [`Runtime::deliver`] for each matching
/// listener binding. `handler` is the token the binding was registered with.
pub type HostEventFn<H> = fn(&mut Runtime<H>, InstanceId, H, &mut dyn Host<H>);

/// A component type: schema, capabilities, and behavior, shared by every
/// instance of the type.
///
/// Definitions are assembled once (schema declared, capabilities composed)
/// and then treated as immutable; instances hold a shared handle.
pub struct ComponentDef<H: Copy + Eq> {
    schema: Schema,
    capabilities: CapabilityStack<H>,
    render: RenderFn,
    updated: Option<UpdatedFn<H>>,
    on_host_event: Option<HostEventFn<H>>,
}

impl<H: Copy + Eq> ComponentDef<H> {
    /// Creates a definition from a declared schema and a render function.
    #[must_use]
    pub fn new(schema: Schema, render: RenderFn) -> Self {
        Self {
            schema,
            capabilities: CapabilityStack::new(),
            render,
            updated: None,
            on_host_event: None,
        }
    }

    /// Appends one capability to the type's stack, builder style.
    #[must_use]
    pub fn with_capability(mut self, capability: impl Capability<H> + 'static) -> Self {
        self.capabilities = self.capabilities.with(capability);
        self
    }

    /// Appends a whole pre-composed stack.
    #[must_use]
    pub fn with_capabilities(mut self, stack: CapabilityStack<H>) -> Self {
        self.capabilities = compose(self.capabilities, stack);
        self
    }

    /// Installs the post-render hook.
    #[must_use]
    pub fn on_updated(mut self, updated: UpdatedFn<H>) -> Self {
        self.updated = Some(updated);
        self
    }

    /// Installs the host-event handler.
    #[must_use]
    pub fn on_host_event(mut self, handler: HostEventFn<H>) -> Self {
        self.on_host_event = Some(handler);
        self
    }

    /// Returns the type's property schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the type's prototype capability stack.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilityStack<H> {
        &self.capabilities
    }

    /// Returns the render function.
    #[must_use]
    pub fn render(&self) -> RenderFn {
        self.render
    }

    /// Returns the post-render hook, if installed.
    #[must_use]
    pub fn updated(&self) -> Option<UpdatedFn<H>> {
        self.updated
    }

    /// Returns the host-event handler, if installed.
    #[must_use]
    pub fn host_event_handler(&self) -> Option<HostEventFn<H>> {
        self.on_host_event
    }
}

impl<H: Copy + Eq> fmt::Debug for ComponentDef<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDef")
            .field("schema", &self.schema)
            .field("capabilities", &self.capabilities)
            .field("updated", &self.updated.is_some())
            .field("on_host_event", &self.on_host_event.is_some())
            .finish()
    }
}
