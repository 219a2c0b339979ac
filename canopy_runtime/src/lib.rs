// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Runtime: component instance lifecycle, render scheduling, and
//! event glue.
//!
//! This crate ties the Canopy pieces together. A [`ComponentDef`] bundles a
//! declared property schema ([`canopy_property`]), a composed capability
//! stack ([`canopy_capability`]), and a pure render function; the
//! [`Runtime`] mounts instances of it against a [`Host`], coalesces property
//! writes through [`canopy_schedule`], and runs gated state transitions
//! through [`canopy_transition`].
//!
//! ## The flush cycle
//!
//! Writes never render synchronously. Each write marks its instance and the
//! runtime asks the host (once per batch) to call [`Runtime::flush`] at its
//! next render opportunity. A flush renders each marked instance exactly
//! once from its latest values, presents the view, and then runs the type's
//! post-render hook with the set of properties that changed.
//!
//! ## Quick start
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use canopy_property::{PropertyDescriptor, PropertyValues, Schema, Value};
//! use canopy_runtime::{ComponentDef, Element, Host, InstanceId, Runtime, View};
//! use canopy_transition::TransitionEvent;
//!
//! #[derive(Copy, Clone, PartialEq, Eq, Debug)]
//! enum Handler {}
//!
//! # #[derive(Default)]
//! # struct Embedder { views: Vec<(InstanceId, View)>, flushes: usize }
//! # impl Host<Handler> for Embedder {
//! #     fn set_attribute(&mut self, _: InstanceId, _: &str, _: &str) {}
//! #     fn remove_attribute(&mut self, _: InstanceId, _: &str) {}
//! #     fn add_host_listener(&mut self, _: InstanceId, _: &'static str, _: Handler) {}
//! #     fn remove_host_listener(&mut self, _: InstanceId, _: &'static str, _: Handler) {}
//! #     fn set_focus_delegation(&mut self, _: InstanceId, _: bool) {}
//! #     fn dispatch(&mut self, _: InstanceId, _: &mut TransitionEvent<Value>) {}
//! #     fn request_flush(&mut self) { self.flushes += 1; }
//! #     fn present(&mut self, id: InstanceId, view: View) { self.views.push((id, view)); }
//! # }
//! fn render(values: &PropertyValues, schema: &Schema) -> View {
//!     let open = schema.by_name("open").is_some_and(|p| values.bool(p));
//!     View::new().child(Element::new("div").flag("open", open))
//! }
//!
//! let mut schema = Schema::new();
//! let open = schema
//!     .declare(PropertyDescriptor::bool("open").reflect(true))
//!     .unwrap();
//! let def = Rc::new(ComponentDef::<Handler>::new(schema, render));
//!
//! let mut runtime = Runtime::new();
//! let mut host = Embedder::default();
//! let id = runtime.attach(def, &[], &mut host);
//! runtime.flush(&mut host); // initial render
//!
//! // Three writes, one more render.
//! runtime.write(id, open, Value::Bool(true), &mut host).unwrap();
//! runtime.write(id, open, Value::Bool(false), &mut host).unwrap();
//! runtime.write(id, open, Value::Bool(true), &mut host).unwrap();
//! runtime.flush(&mut host);
//!
//! assert_eq!(host.views.len(), 2);
//! assert_eq!(host.flushes, 2); // one request per batch, not per write
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod definition;
mod host;
mod id;
mod instance;
mod runtime;
mod view;

pub use definition::{ComponentDef, HostEventFn, RenderFn, UpdatedFn};
pub use host::Host;
pub use id::InstanceId;
pub use runtime::Runtime;
pub use view::{Element, View, ViewNode};
