// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Property: a typed property model synchronized with markup attributes.
//!
//! Components declare typed properties once per component type; instances hold
//! the values. Each property may be bound to a string-valued markup attribute,
//! with a deterministic, total conversion in the attribute → property
//! direction and an optional reflecting conversion back.
//!
//! ## Core Concepts
//!
//! - [`Schema`]: the per-component-type registration table, built once at
//!   type-definition time. Duplicate declarations fail fast with a
//!   [`ConfigurationError`].
//! - [`PropertyDescriptor`]: one declared property — name, [`ValueKind`],
//!   default, attribute binding, reflection policy.
//! - [`PropertyValues`]: per-instance storage, seeded from schema defaults.
//! - [`WriteEffect`]: what a successful write asks the caller to do next
//!   (mark the instance dirty, replay an [`AttributeEdit`] onto the host).
//!
//! ## Conversion Rules
//!
//! Markup attributes are untrusted input, so the attribute → property
//! direction never errs:
//!
//! - **Bool**: attribute present (any text) ⇒ `true`; absent ⇒ `false`.
//! - **Number**: base-10 parse; unparsable text falls back to the default.
//! - **Enum**: text must exactly match a declared tag; otherwise the default.
//! - **Text**: the literal text.
//!
//! Direct property writes are the trusted direction and are validated:
//! a [`Value`] of the wrong kind, or an enum tag outside the declared set,
//! fails with an [`InvalidValueError`] and leaves the instance unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_property::{PropertyDescriptor, PropertyValues, Schema, Value};
//!
//! let mut schema = Schema::new();
//! let expanded = schema
//!     .declare(PropertyDescriptor::bool("expanded").reflect(true))
//!     .unwrap();
//! let value = schema
//!     .declare(PropertyDescriptor::number("value", 10.0))
//!     .unwrap();
//!
//! let mut values = PropertyValues::from_schema(&schema);
//! assert!(!values.bool(expanded));
//!
//! // Attribute → property: total, silently falls back to the default.
//! values.apply_attribute("value", Some("abc"), &schema);
//! assert_eq!(values.number(value), 10.0);
//!
//! // Property → attribute: validated, and reflected when declared so.
//! let effect = values.write(expanded, Value::Bool(true), &schema).unwrap();
//! assert!(effect.changed);
//! assert!(effect.reflect.is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod convert;
mod descriptor;
mod error;
mod id;
mod schema;
mod value;
mod values;

pub use convert::{AttributeEdit, derived_attribute, parse_attribute, serialize_value};
pub use descriptor::PropertyDescriptor;
pub use error::{ConfigurationError, InvalidValueError};
pub use id::PropertyId;
pub use schema::Schema;
pub use value::{Value, ValueKind};
pub use values::{PropertyValues, WriteEffect};
