// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute-string ↔ typed-value conversion.
//!
//! The attribute → value direction ([`parse_attribute`]) is total: markup
//! attributes are untrusted external input, so malformed text degrades to the
//! declared default instead of producing an error. The value → attribute
//! direction ([`serialize_value`]) is exact for round-trip correctness.

use alloc::format;
use alloc::string::{String, ToString};

use crate::value::{Value, ValueKind};

/// The attribute rewrite produced by reflecting a property write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeEdit {
    /// Set the attribute to the given text.
    Set(String),
    /// Remove the attribute.
    Remove,
}

/// Derives the default attribute name for a property name.
///
/// Rust property names are `snake_case`; markup attributes are kebab-cased,
/// so underscores become hyphens (`color_scheme` → `color-scheme`).
#[must_use]
pub fn derived_attribute(name: &str) -> String {
    name.replace('_', "-")
}

/// Converts raw attribute text to a typed value, totally.
///
/// `raw` is `None` when the attribute is absent or was removed. Booleans are
/// presence-style: any text, including the empty string, reads `true`, and
/// absence reads `false`. For the other kinds, absent or malformed text
/// yields a clone of `default`.
#[must_use]
pub fn parse_attribute(kind: &ValueKind, raw: Option<&str>, default: &Value) -> Value {
    match kind {
        ValueKind::Bool => Value::Bool(raw.is_some()),
        ValueKind::Number => match raw.map(str::trim).map(str::parse::<f64>) {
            Some(Ok(n)) => Value::Number(n),
            _ => default.clone(),
        },
        ValueKind::Text => match raw {
            Some(text) => Value::Text(text.to_string()),
            None => default.clone(),
        },
        ValueKind::Enum(tags) => match raw.and_then(|text| tags.iter().find(|t| **t == text)) {
            Some(tag) => Value::Tag(tag),
            None => default.clone(),
        },
    }
}

/// Serializes a typed value back to its attribute representation.
///
/// Booleans use attribute presence: `true` sets an empty-valued attribute and
/// `false` removes it. Numbers and text use their literal text; enums use
/// their tag.
#[must_use]
pub fn serialize_value(value: &Value) -> AttributeEdit {
    match value {
        Value::Bool(true) => AttributeEdit::Set(String::new()),
        Value::Bool(false) => AttributeEdit::Remove,
        Value::Number(n) => AttributeEdit::Set(format!("{n}")),
        Value::Text(s) => AttributeEdit::Set(s.clone()),
        Value::Tag(t) => AttributeEdit::Set((*t).to_string()),
    }
}
