// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property value kinds and values.

use alloc::string::String;
use core::fmt;

/// The declared kind of a property's value.
///
/// The kind governs both directions of attribute conversion and the
/// validation applied to direct writes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// Presence-style boolean: attribute present ⇒ `true`, absent ⇒ `false`.
    Bool,
    /// Base-10 number, carried as `f64`.
    Number,
    /// Free-form text.
    Text,
    /// One of a closed set of string tags.
    Enum(&'static [&'static str]),
}

impl ValueKind {
    /// Returns a short human-readable name for this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Text => "string",
            Self::Enum(_) => "enum",
        }
    }

    /// Returns `true` if the given value is acceptable for this kind.
    ///
    /// For [`ValueKind::Enum`], the value must be a [`Value::Tag`] whose text
    /// matches one of the declared tags.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Number, Value::Number(_))
            | (Self::Text, Value::Text(_)) => true,
            (Self::Enum(tags), Value::Tag(tag)) => tags.contains(tag),
            _ => false,
        }
    }
}

/// A typed property value.
///
/// `Tag` carries a `&'static str` drawn from the declared tag set of an
/// [`ValueKind::Enum`] property; the schema normalizes stored tags to the
/// declared slice's entries.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A numeric value.
    Number(f64),
    /// A text value.
    Text(String),
    /// An enum tag.
    Tag(&'static str),
}

impl Value {
    /// Returns a short human-readable name for this value's kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Tag(_) => "enum",
        }
    }

    /// Returns the boolean value, if this is a `Bool`.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a `Number`.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this is a `Text`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the tag, if this is a `Tag`.
    #[must_use]
    pub fn as_tag(&self) -> Option<&'static str> {
        match self {
            Self::Tag(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Tag(t) => f.write_str(t),
        }
    }
}
