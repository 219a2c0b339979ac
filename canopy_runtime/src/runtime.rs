// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Instance lifecycle and the flush loop.

use alloc::rc::Rc;
use core::fmt;

use hashbrown::HashMap;
use smallvec::SmallVec;

use canopy_capability::EventType;
use canopy_property::{AttributeEdit, InvalidValueError, PropertyId, PropertyValues, Value};
use canopy_schedule::{FlushRequest, Scheduler};
use canopy_transition::{
    TransitionEnv, TransitionEvent, TransitionKind, TransitionOutcome, run as run_transition,
};

use crate::definition::ComponentDef;
use crate::host::Host;
use crate::id::InstanceId;
use crate::instance::{BindingRecorder, CHANGED_INLINE, ComponentInstance};

/// The component runtime: owns every mounted instance and drives writes,
/// events, and render flushes against a [`Host`].
///
/// The runtime never calls back into itself through the host; re-entrant
/// work (a write from inside a flush, a transition from inside a handler)
/// is deferred through the scheduler and surfaces as at most one
/// [`Host::request_flush`] per pending batch.
pub struct Runtime<H: Copy + Eq> {
    instances: HashMap<InstanceId, ComponentInstance<H>>,
    scheduler: Scheduler<InstanceId>,
    next_id: u32,
}

impl<H: Copy + Eq> Default for Runtime<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Copy + Eq> Runtime<H> {
    /// Creates an empty runtime.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
            scheduler: Scheduler::new(),
            next_id: 0,
        }
    }

    /// Mounts a new instance of `def`.
    ///
    /// `attributes` is the host element's initial attribute map; each entry
    /// with a matching declared attribute overrides the schema default under
    /// the kind's total conversion rules, unknown entries are ignored. The
    /// type's capabilities attach in declaration order, and the instance is
    /// scheduled for an initial render with every property treated as
    /// changed.
    pub fn attach(
        &mut self,
        def: Rc<ComponentDef<H>>,
        attributes: &[(&str, &str)],
        host: &mut dyn Host<H>,
    ) -> InstanceId {
        let id = InstanceId::new(self.next_id);
        self.next_id += 1;

        let mut values = PropertyValues::from_schema(def.schema());
        for (attribute, raw) in attributes {
            let _ = values.apply_attribute(attribute, Some(raw), def.schema());
        }
        let changed: SmallVec<[PropertyId; CHANGED_INLINE]> = def.schema().ids().collect();

        let mut capabilities = def.capabilities().instantiate();
        let mut listeners = alloc::vec::Vec::new();
        {
            let mut recorder = BindingRecorder {
                host: &mut *host,
                id,
                listeners: &mut listeners,
            };
            capabilities.attach(&mut recorder);
        }

        self.instances.insert(
            id,
            ComponentInstance {
                def,
                values,
                capabilities,
                listeners,
                changed,
            },
        );

        if self.scheduler.mark(id) == FlushRequest::Schedule {
            host.request_flush();
        }
        id
    }

    /// Unmounts an instance.
    ///
    /// Capabilities detach in reverse declaration order; any binding a
    /// capability failed to unwind is force-released afterwards, so no
    /// listener survives detach. Detaching an unknown or already detached
    /// id is a no-op.
    pub fn detach(&mut self, id: InstanceId, host: &mut dyn Host<H>) {
        let Some(mut instance) = self.instances.remove(&id) else {
            return;
        };
        {
            let mut recorder = BindingRecorder {
                host: &mut *host,
                id,
                listeners: &mut instance.listeners,
            };
            instance.capabilities.detach(&mut recorder);
        }
        for (event, handler) in instance.listeners.drain(..) {
            host.remove_host_listener(id, event, handler);
        }
        let _ = self.scheduler.remove(id);
    }

    /// Writes a property value directly.
    ///
    /// On success the instance is marked for the next flush even when the
    /// stored value did not change, a reflected property's attribute edit is
    /// replayed onto the host, and the returned flag reports whether the
    /// value differed. A kind mismatch or unknown enum tag leaves the stored
    /// value untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidValueError`] when `value` does not fit the
    /// property's declared kind.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a mounted instance or `property` was not
    /// declared for its type.
    pub fn write(
        &mut self,
        id: InstanceId,
        property: PropertyId,
        value: Value,
        host: &mut dyn Host<H>,
    ) -> Result<bool, InvalidValueError> {
        let instance = self
            .instances
            .get_mut(&id)
            .unwrap_or_else(|| panic!("instance {id} is not mounted"));

        let effect = instance.values.write(property, value, instance.def.schema())?;
        instance.note_changed(property);

        if let Some((attribute, edit)) = effect.reflect {
            match edit {
                AttributeEdit::Set(text) => host.set_attribute(id, &attribute, &text),
                AttributeEdit::Remove => host.remove_attribute(id, &attribute),
            }
        }
        if self.scheduler.mark(id) == FlushRequest::Schedule {
            host.request_flush();
        }
        Ok(effect.changed)
    }

    /// Applies a host-side attribute change to the matching property.
    ///
    /// `raw` is `None` when the attribute was removed. The conversion is
    /// total, so this never fails: an unparsable value falls back per the
    /// kind's rules. Attribute-sourced updates never write the attribute
    /// back, which is what breaks the reflection echo loop. Unknown
    /// attributes and unknown ids are no-ops.
    pub fn attribute_changed(
        &mut self,
        id: InstanceId,
        attribute: &str,
        raw: Option<&str>,
        host: &mut dyn Host<H>,
    ) {
        let Some(instance) = self.instances.get_mut(&id) else {
            return;
        };
        let Some(property) = instance
            .values
            .apply_attribute(attribute, raw, instance.def.schema())
        else {
            return;
        };
        instance.note_changed(property);
        if self.scheduler.mark(id) == FlushRequest::Schedule {
            host.request_flush();
        }
    }

    /// Runs a gated transition on one property.
    ///
    /// Fires the cancelable before event carrying `proposed`; if no listener
    /// cancels it, commits through [`write`](Self::write) (reflection and
    /// scheduling included) and fires the non-cancelable after event with
    /// the same detail. A veto leaves the property, the attribute, and the
    /// schedule untouched.
    ///
    /// # Errors
    ///
    /// Fails with [`InvalidValueError`] when the commit is rejected; the
    /// after event does not fire in that case.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a mounted instance.
    pub fn transition(
        &mut self,
        id: InstanceId,
        property: PropertyId,
        kind: TransitionKind,
        proposed: Value,
        host: &mut dyn Host<H>,
    ) -> Result<TransitionOutcome, InvalidValueError> {
        assert!(self.instances.contains_key(&id), "instance {id} is not mounted");

        struct GateEnv<'a, H: Copy + Eq> {
            runtime: &'a mut Runtime<H>,
            host: &'a mut dyn Host<H>,
            id: InstanceId,
            property: PropertyId,
        }

        impl<H: Copy + Eq> TransitionEnv<Value> for GateEnv<'_, H> {
            type Error = InvalidValueError;

            fn dispatch(&mut self, event: &mut TransitionEvent<Value>) {
                self.host.dispatch(self.id, event);
            }

            fn commit(&mut self, detail: Value) -> Result<(), Self::Error> {
                self.runtime
                    .write(self.id, self.property, detail, &mut *self.host)
                    .map(|_| ())
            }
        }

        let mut env = GateEnv {
            runtime: self,
            host,
            id,
            property,
        };
        run_transition(kind, proposed, &mut env)
    }

    /// Emits a plain notification event from an instance.
    ///
    /// The event is non-cancelable and gates nothing; it announces a change
    /// the instance has already made. No-op on an unmounted id.
    pub fn emit(
        &mut self,
        id: InstanceId,
        event_type: &'static str,
        detail: Value,
        host: &mut dyn Host<H>,
    ) {
        if !self.instances.contains_key(&id) {
            return;
        }
        let mut event = TransitionEvent::notification(event_type, detail);
        host.dispatch(id, &mut event);
    }

    /// Routes a host-scope event to the instance's handler.
    ///
    /// The handler runs once per live binding matching `event`, in
    /// registration order. Instances with no handler installed, no matching
    /// binding, or an unmounted id are no-ops, so delivery after detach is
    /// always safe.
    pub fn deliver(&mut self, id: InstanceId, event: EventType, host: &mut dyn Host<H>) {
        let Some(instance) = self.instances.get(&id) else {
            return;
        };
        let Some(handler_fn) = instance.def.host_event_handler() else {
            return;
        };
        let matched: SmallVec<[H; 4]> = instance
            .listeners
            .iter()
            .filter(|(e, _)| *e == event)
            .map(|(_, h)| *h)
            .collect();
        for handler in matched {
            if !self.instances.contains_key(&id) {
                break;
            }
            handler_fn(&mut *self, id, handler, &mut *host);
        }
    }

    /// Renders every instance marked since the previous flush.
    ///
    /// For each instance in mark order: render the current values, present
    /// the view, then run the type's post-render hook with the properties
    /// that changed during the batch. Marks made while flushing (from a
    /// hook or a listener) defer to the next batch; if any are pending when
    /// the batch ends, one more [`Host::request_flush`] is issued.
    pub fn flush(&mut self, host: &mut dyn Host<H>) {
        let batch = self.scheduler.begin();
        for id in batch {
            let Some(instance) = self.instances.get_mut(&id) else {
                continue;
            };
            let def = Rc::clone(&instance.def);
            let view = (def.render())(&instance.values, def.schema());
            let changed: SmallVec<[PropertyId; CHANGED_INLINE]> =
                core::mem::take(&mut instance.changed);
            host.present(id, view);
            if let Some(updated) = def.updated()
                && let Some(instance) = self.instances.get(&id)
            {
                updated(id, &changed, &instance.values, &mut *host);
            }
        }
        if self.scheduler.finish() == FlushRequest::Schedule {
            host.request_flush();
        }
    }

    /// Returns the current values of a mounted instance.
    #[must_use]
    pub fn values(&self, id: InstanceId) -> Option<&PropertyValues> {
        self.instances.get(&id).map(|i| &i.values)
    }

    /// Returns the type definition of a mounted instance.
    #[must_use]
    pub fn definition(&self, id: InstanceId) -> Option<&Rc<ComponentDef<H>>> {
        self.instances.get(&id).map(|i| &i.def)
    }

    /// Returns `true` if `id` is currently mounted.
    #[must_use]
    pub fn is_attached(&self, id: InstanceId) -> bool {
        self.instances.contains_key(&id)
    }

    /// Returns the number of mounted instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if no instance is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<H: Copy + Eq> fmt::Debug for Runtime<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("instances", &self.instances.len())
            .field("pending", &self.scheduler.len())
            .finish()
    }
}
