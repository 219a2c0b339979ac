// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for declaration and write validation.

use alloc::string::String;
use core::fmt;

/// A malformed or conflicting property declaration.
///
/// Raised by [`Schema::declare`](crate::Schema::declare). Configuration
/// errors are fatal at registration time: the component type fails to
/// register and nothing is recoverable at runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A property with this name is already declared.
    DuplicateName {
        /// The conflicting property name.
        name: &'static str,
    },
    /// Another property is already bound to this attribute name.
    DuplicateAttribute {
        /// The conflicting attribute name.
        attribute: String,
    },
    /// An enum property was declared with no tags.
    EmptyEnum {
        /// The property name.
        name: &'static str,
    },
    /// An enum property's default tag is not in its declared tag set.
    DefaultNotInEnum {
        /// The property name.
        name: &'static str,
        /// The offending default tag.
        default: &'static str,
    },
    /// More than 65,536 properties were declared on one component type.
    TooManyProperties,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "property '{name}' is already declared")
            }
            Self::DuplicateAttribute { attribute } => {
                write!(f, "attribute '{attribute}' is already bound to a property")
            }
            Self::EmptyEnum { name } => {
                write!(f, "enum property '{name}' declares no tags")
            }
            Self::DefaultNotInEnum { name, default } => {
                write!(
                    f,
                    "enum property '{name}' default '{default}' is not a declared tag"
                )
            }
            Self::TooManyProperties => {
                write!(f, "too many properties declared (max {})", u16::MAX)
            }
        }
    }
}

impl core::error::Error for ConfigurationError {}

/// A direct property write that violates the declared value kind.
///
/// Raised by [`PropertyValues::write`](crate::PropertyValues::write). The
/// write is rejected and instance state is left unchanged; the error is local
/// to the single call and does not affect any pending render batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidValueError {
    /// The value's kind does not match the property's declared kind.
    KindMismatch {
        /// The property name.
        name: &'static str,
        /// The declared kind.
        expected: &'static str,
        /// The kind of the rejected value.
        got: &'static str,
    },
    /// An enum write used a tag outside the declared set.
    UnknownTag {
        /// The property name.
        name: &'static str,
        /// The rejected tag.
        tag: &'static str,
    },
}

impl fmt::Display for InvalidValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KindMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "property '{name}' expects a {expected} value, got {got}"
                )
            }
            Self::UnknownTag { name, tag } => {
                write!(f, "property '{name}' has no tag '{tag}'")
            }
        }
    }
}

impl core::error::Error for InvalidValueError {}
